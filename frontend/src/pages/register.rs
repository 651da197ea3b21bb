//! Registration page. The matrícula must have been pre-approved by an
//! admin; the backend's rejection detail (e.g. matrícula not authorized)
//! is surfaced verbatim.

use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::RegisterRequest;

use crate::api::{self, ApiError};
use crate::app::Route;
use crate::session::SessionStore;
use crate::ui;

pub enum Msg {
    EditNome(String),
    EditMatricula(String),
    EditEmail(String),
    EditSenha(String),
    Submit,
    Done(Result<(), ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct RegisterProps {
    pub session: SessionStore,
    pub on_navigate: Callback<Route>,
}

pub struct RegisterPage {
    form: RegisterRequest,
    error: Option<String>,
}

impl Component for RegisterPage {
    type Message = Msg;
    type Properties = RegisterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: RegisterRequest {
                nome: String::new(),
                matricula: String::new(),
                email: String::new(),
                senha: String::new(),
            },
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::EditNome(v) => {
                self.form.nome = v;
                false
            }
            Msg::EditMatricula(v) => {
                self.form.matricula = v;
                false
            }
            Msg::EditEmail(v) => {
                self.form.email = v;
                false
            }
            Msg::EditSenha(v) => {
                self.form.senha = v;
                false
            }
            Msg::Submit => {
                self.error = None;
                let session = ctx.props().session.clone();
                let payload = self.form.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::register(&session, &payload).await;
                    link.send_message(Msg::Done(result));
                });
                true
            }
            Msg::Done(Ok(())) => {
                ui::alert("Cadastro realizado com sucesso! Faça login para continuar.");
                ctx.props().on_navigate.emit(Route::Login);
                false
            }
            Msg::Done(Err(err)) => {
                self.error = Some(match err {
                    ApiError::Backend(detail) => detail,
                    _ => "Erro ao realizar cadastro.".to_string(),
                });
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = ctx.props().on_navigate.clone();

        html! {
            <div class="register-page">
                <div class="register-card">
                    <h1>{"Novo Cadastro"}</h1>
                    <p class="hint">{"Informe a matrícula autorizada pelo gestor."}</p>

                    if let Some(error) = &self.error {
                        <div class="alert alert-error">{ error }</div>
                    }

                    <form onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}>
                        { field(link, "Nome Completo", "text", &self.form.nome, Msg::EditNome) }
                        { field(link, "Matrícula", "text", &self.form.matricula, Msg::EditMatricula) }
                        { field(link, "E-mail", "email", &self.form.email, Msg::EditEmail) }
                        { field(link, "Senha", "password", &self.form.senha, Msg::EditSenha) }

                        <button type="submit" class="submit-btn">{"Cadastrar"}</button>
                    </form>

                    <button
                        class="link-btn"
                        onclick={Callback::from(move |_| on_navigate.emit(Route::Login))}
                    >
                        {"Voltar ao Login"}
                    </button>
                </div>
            </div>
        }
    }
}

fn field(
    link: &Scope<RegisterPage>,
    label: &str,
    input_type: &'static str,
    value: &str,
    to_msg: fn(String) -> Msg,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        to_msg(input.value())
    });
    html! {
        <label class="text-field">
            <span>{ label }</span>
            <input type={input_type} required=true value={value.to_string()} {oninput} />
        </label>
    }
}
