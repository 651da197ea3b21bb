//! Login page.
//!
//! Posts the credentials as a multipart form to `/token`, renames the
//! backend's snake_case response into the client session vocabulary and
//! persists it through the injected store. When the backend flags
//! `must_change_password`, a blocking dialog forces a new password before
//! the dashboard is reachable. Login failures show a fixed message, never
//! the backend detail.

use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::session::{LoginResponse, SessionIdentity};

use crate::api::{self, ApiError};
use crate::app::Route;
use crate::session::SessionStore;
use crate::ui;

pub enum Msg {
    EditEmail(String),
    EditSenha(String),
    EditNewPassword(String),
    Submit,
    LoginResult(Result<LoginResponse, ApiError>),
    SubmitNewPassword,
    PasswordChanged(Result<(), ApiError>),
    OpenForgot,
    CloseForgot,
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub session: SessionStore,
    pub on_navigate: Callback<Route>,
}

pub struct LoginPage {
    email: String,
    senha: String,
    new_password: String,
    error: Option<String>,
    show_password_dialog: bool,
    show_forgot_dialog: bool,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            senha: String::new(),
            new_password: String::new(),
            error: None,
            show_password_dialog: false,
            show_forgot_dialog: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::EditEmail(value) => {
                self.email = value;
                false
            }
            Msg::EditSenha(value) => {
                self.senha = value;
                false
            }
            Msg::EditNewPassword(value) => {
                self.new_password = value;
                false
            }
            Msg::Submit => {
                self.error = None;
                let session = ctx.props().session.clone();
                let email = self.email.clone();
                let senha = self.senha.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::login(&session, &email, &senha).await;
                    link.send_message(Msg::LoginResult(result));
                });
                true
            }
            Msg::LoginResult(Ok(resp)) => {
                let identity = SessionIdentity::from_login(&resp, &self.email);
                ctx.props().session.save(&identity);
                if resp.must_change_password {
                    self.show_password_dialog = true;
                } else {
                    ctx.props().on_navigate.emit(Route::Dashboard);
                }
                true
            }
            Msg::LoginResult(Err(err)) => {
                gloo_console::error!(err.to_string());
                self.error = Some("Login falhou. Verifique as credenciais.".to_string());
                true
            }
            Msg::SubmitNewPassword => {
                if self.new_password.len() < 4 {
                    ui::alert("A senha deve ter pelo menos 4 caracteres.");
                    return false;
                }
                let session = ctx.props().session.clone();
                let new_password = self.new_password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::change_password(&session, &new_password).await;
                    link.send_message(Msg::PasswordChanged(result));
                });
                false
            }
            Msg::PasswordChanged(Ok(())) => {
                ui::alert("Senha alterada com sucesso!");
                self.show_password_dialog = false;
                ctx.props().on_navigate.emit(Route::Dashboard);
                true
            }
            Msg::PasswordChanged(Err(err)) => {
                gloo_console::error!(err.to_string());
                ui::alert("Erro ao alterar senha.");
                false
            }
            Msg::OpenForgot => {
                self.show_forgot_dialog = true;
                true
            }
            Msg::CloseForgot => {
                self.show_forgot_dialog = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = ctx.props().on_navigate.clone();

        html! {
            <div class="login-backdrop">
                <div class="login-card">
                    <h1>{"Automações"}</h1>

                    if let Some(error) = &self.error {
                        <div class="alert alert-error">{ error }</div>
                    }

                    <form onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}>
                        <label class="text-field">
                            <span>{"E-mail ou Matrícula"}</span>
                            <input
                                type="text"
                                required=true
                                value={self.email.clone()}
                                oninput={edit(link, Msg::EditEmail)}
                            />
                        </label>
                        <label class="text-field">
                            <span>{"Senha"}</span>
                            <input
                                type="password"
                                required=true
                                value={self.senha.clone()}
                                oninput={edit(link, Msg::EditSenha)}
                            />
                        </label>

                        <button
                            type="button"
                            class="link-btn"
                            onclick={link.callback(|_| Msg::OpenForgot)}
                        >
                            {"Esqueci minha senha"}
                        </button>

                        <button type="submit" class="submit-btn">{"Entrar"}</button>
                    </form>

                    <button
                        class="link-btn"
                        onclick={Callback::from(move |_| on_navigate.emit(Route::Register))}
                    >
                        {"Não tem conta? Solicite acesso"}
                    </button>
                </div>

                if self.show_password_dialog {
                    { self.password_dialog(link) }
                }
                if self.show_forgot_dialog {
                    { self.forgot_dialog(link) }
                }
            </div>
        }
    }
}

impl LoginPage {
    fn password_dialog(&self, link: &Scope<Self>) -> Html {
        html! {
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h2>{"Troca de Senha Necessária"}</h2>
                    <p>{"A sua senha temporária expirou. Defina uma nova senha."}</p>
                    <label class="text-field">
                        <span>{"Nova Senha"}</span>
                        <input
                            type="password"
                            value={self.new_password.clone()}
                            oninput={edit(link, Msg::EditNewPassword)}
                        />
                    </label>
                    <button
                        class="submit-btn"
                        onclick={link.callback(|_| Msg::SubmitNewPassword)}
                    >
                        {"Confirmar"}
                    </button>
                </div>
            </div>
        }
    }

    fn forgot_dialog(&self, link: &Scope<Self>) -> Html {
        html! {
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h2>{"Recuperação de Acesso"}</h2>
                    <p>
                        {"Como medida de segurança, o reset de senha é realizado apenas \
                          pelo administrador do sistema. Entre em contato com o setor \
                          responsável informando sua matrícula."}
                    </p>
                    <button class="submit-btn" onclick={link.callback(|_| Msg::CloseForgot)}>
                        {"Entendido"}
                    </button>
                </div>
            </div>
        }
    }
}

fn edit(link: &Scope<LoginPage>, to_msg: fn(String) -> Msg) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        to_msg(input.value())
    })
}
