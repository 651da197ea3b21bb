//! Origin address + spreadsheet submission form.
//!
//! Collects the five required address fields (pre-populated with the
//! clinic's default origin) and exactly one spreadsheet file, then hands
//! both to the parent's submit callback. Validation here is a convenience
//! guard only — a blocking alert when something is missing — the backend
//! remains the authority on the contents.

use web_sys::{Event, File, HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::address::BaseAddress;

use crate::ui;

#[derive(Clone, Copy)]
pub enum AddressField {
    Rua,
    Numero,
    Bairro,
    Municipio,
    Cep,
}

pub enum Msg {
    Edit(AddressField, String),
    FileSelected(Option<File>),
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct UploadFormProps {
    /// Invoked with the completed address and the selected file.
    pub on_submit: Callback<(BaseAddress, File)>,
    /// Disables the submit control while a calculation is in flight.
    pub is_loading: bool,
}

pub struct UploadForm {
    address: BaseAddress,
    selected_file: Option<File>,
}

impl Component for UploadForm {
    type Message = Msg;
    type Properties = UploadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            address: BaseAddress::default_origin(),
            selected_file: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                match field {
                    AddressField::Rua => self.address.rua = value,
                    AddressField::Numero => self.address.numero = value,
                    AddressField::Bairro => self.address.bairro = value,
                    AddressField::Municipio => self.address.municipio = value,
                    AddressField::Cep => self.address.cep = value,
                }
                true
            }
            Msg::FileSelected(file) => {
                self.selected_file = file;
                true
            }
            Msg::Submit => {
                let Some(file) = self.selected_file.clone() else {
                    ui::alert("Preencha todos os campos e selecione um arquivo!");
                    return false;
                };
                if !self.address.is_complete() {
                    ui::alert("Preencha todos os campos e selecione um arquivo!");
                    return false;
                }
                ctx.props().on_submit.emit((self.address.clone(), file));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let file_label = self
            .selected_file
            .as_ref()
            .map(|f| f.name())
            .unwrap_or_else(|| "Nenhum arquivo selecionado".to_string());

        let onchange_file = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            Msg::FileSelected(file)
        });

        html! {
            <form class="upload-form" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <section class="form-section">
                    <h3>{"1. Ponto de Partida"}</h3>
                    <div class="field-grid">
                        { text_field(link, "Rua / Logradouro", &self.address.rua, AddressField::Rua) }
                        { text_field(link, "Número", &self.address.numero, AddressField::Numero) }
                        { text_field(link, "Bairro", &self.address.bairro, AddressField::Bairro) }
                        { text_field(link, "Município", &self.address.municipio, AddressField::Municipio) }
                        { text_field(link, "CEP", &self.address.cep, AddressField::Cep) }
                    </div>
                </section>

                <section class="form-section">
                    <h3>{"2. Dados dos Pacientes"}</h3>
                    <div class="template-hint">
                        <span>{"Use o modelo padrão."}</span>
                        <a href="/modelo_input.xlsx" download="modelo_input.xlsx">
                            {"Baixar Modelo"}
                        </a>
                    </div>
                    <div class="file-drop">
                        <label class="file-btn">
                            {"Selecionar Arquivo"}
                            <input
                                type="file"
                                hidden=true
                                accept=".csv, .xls, .xlsx"
                                onchange={onchange_file}
                            />
                        </label>
                        <p class="file-name">{ file_label }</p>
                    </div>
                </section>

                <button type="submit" class="submit-btn" disabled={ctx.props().is_loading}>
                    {
                        if ctx.props().is_loading {
                            "Calculando..."
                        } else {
                            "Processar Rotas"
                        }
                    }
                </button>
            </form>
        }
    }
}

/// One labelled required text input bound to an address field.
fn text_field(
    link: &Scope<UploadForm>,
    label: &str,
    value: &str,
    field: AddressField,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Edit(field, input.value())
    });
    html! {
        <label class="text-field">
            <span>{ label }</span>
            <input type="text" required=true value={value.to_string()} {oninput} />
        </label>
    }
}
