//! Admin panel: whitelist (pre-approval list) and user management.
//!
//! Both lists are fetched on first render; every mutation refetches them so
//! the view never goes stale. An authentication rejection on any call
//! clears the session and sends the user back to the login page.

use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::user::{ResetPasswordResponse, UserAccount, WhitelistEntry};

use crate::api::{self, ApiError};
use crate::app::Route;
use crate::session::SessionStore;
use crate::ui;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Whitelist,
    Users,
}

pub enum Msg {
    SetTab(AdminTab),
    Loaded(Result<(Vec<WhitelistEntry>, Vec<UserAccount>), ApiError>),
    EditMatricula(String),
    AddMatricula,
    AddDone(Result<(), ApiError>),
    DeleteWhitelist(u32),
    DeleteUser(u32),
    MutationDone(Result<(), ApiError>),
    ResetPassword(u32),
    ResetDone(Result<ResetPasswordResponse, ApiError>),
    CloseResetDialog,
    CopyPassword,
    Back,
}

#[derive(Properties, PartialEq)]
pub struct AdminProps {
    pub session: SessionStore,
    pub on_navigate: Callback<Route>,
}

pub struct AdminPanel {
    tab: AdminTab,
    whitelist: Vec<WhitelistEntry>,
    users: Vec<UserAccount>,
    new_matricula: String,
    temp_password: Option<String>,
}

impl Component for AdminPanel {
    type Message = Msg;
    type Properties = AdminProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tab: AdminTab::Whitelist,
            whitelist: Vec::new(),
            users: Vec::new(),
            new_matricula: String::new(),
            temp_password: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.fetch_lists(ctx);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::Loaded(Ok((whitelist, users))) => {
                self.whitelist = whitelist;
                self.users = users;
                true
            }
            Msg::Loaded(Err(err)) => {
                if self.handle_auth(ctx, &err) {
                    return false;
                }
                gloo_console::error!("Erro ao buscar dados:", err.to_string());
                false
            }
            Msg::EditMatricula(value) => {
                self.new_matricula = value;
                false
            }
            Msg::AddMatricula => {
                if self.new_matricula.is_empty() {
                    return false;
                }
                let session = ctx.props().session.clone();
                let matricula = self.new_matricula.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::add_to_whitelist(&session, &matricula).await;
                    link.send_message(Msg::AddDone(result));
                });
                false
            }
            Msg::AddDone(Ok(())) => {
                self.new_matricula.clear();
                self.fetch_lists(ctx);
                true
            }
            Msg::AddDone(Err(err)) => {
                if self.handle_auth(ctx, &err) {
                    return false;
                }
                ui::alert("Erro ao adicionar ou matrícula já existe.");
                false
            }
            Msg::DeleteWhitelist(id) => {
                if !ui::confirm("Remover esta matrícula da lista de espera?") {
                    return false;
                }
                let session = ctx.props().session.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::delete_whitelist(&session, id).await;
                    link.send_message(Msg::MutationDone(result));
                });
                false
            }
            Msg::DeleteUser(id) => {
                if !ui::confirm("Tem certeza que deseja excluir este usuário?") {
                    return false;
                }
                let session = ctx.props().session.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::delete_user(&session, id).await;
                    link.send_message(Msg::MutationDone(result));
                });
                false
            }
            Msg::MutationDone(Ok(())) => {
                self.fetch_lists(ctx);
                false
            }
            Msg::MutationDone(Err(err)) => {
                if self.handle_auth(ctx, &err) {
                    return false;
                }
                gloo_console::error!(err.to_string());
                false
            }
            Msg::ResetPassword(id) => {
                if !ui::confirm(
                    "Isso irá gerar uma senha temporária para o usuário. Continuar?",
                ) {
                    return false;
                }
                let session = ctx.props().session.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::reset_user_password(&session, id).await;
                    link.send_message(Msg::ResetDone(result));
                });
                false
            }
            Msg::ResetDone(Ok(resp)) => {
                self.temp_password = Some(resp.temp_password);
                self.fetch_lists(ctx);
                true
            }
            Msg::ResetDone(Err(err)) => {
                if self.handle_auth(ctx, &err) {
                    return false;
                }
                ui::alert("Erro ao resetar senha.");
                false
            }
            Msg::CloseResetDialog => {
                self.temp_password = None;
                true
            }
            Msg::CopyPassword => {
                if let (Some(window), Some(password)) =
                    (web_sys::window(), self.temp_password.as_ref())
                {
                    let _ = window.navigator().clipboard().write_text(password);
                    ui::alert("Senha copiada!");
                }
                false
            }
            Msg::Back => {
                ctx.props().on_navigate.emit(Route::Dashboard);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="admin-page">
                <header class="admin-header">
                    <button class="icon-btn" onclick={link.callback(|_| Msg::Back)}>
                        {"←"}
                    </button>
                    <div>
                        <h1>{"Painel Administrativo"}</h1>
                        <p class="hint">{"Gerencie acessos e segurança"}</p>
                    </div>
                </header>

                <nav class="tab-bar">
                    { self.tab_button(link, AdminTab::Whitelist, "Lista de Espera") }
                    { self.tab_button(link, AdminTab::Users, "Usuários") }
                </nav>

                {
                    match self.tab {
                        AdminTab::Whitelist => self.whitelist_tab(link),
                        AdminTab::Users => self.users_tab(link),
                    }
                }

                if let Some(password) = &self.temp_password {
                    { self.reset_dialog(link, password) }
                }
            </div>
        }
    }
}

impl AdminPanel {
    /// Fetches both admin lists and delivers them in one message.
    fn fetch_lists(&self, ctx: &Context<Self>) {
        let session = ctx.props().session.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result: Result<_, ApiError> = async {
                let whitelist = api::get_whitelist(&session).await?;
                let users = api::get_users(&session).await?;
                Ok((whitelist, users))
            }
            .await;
            link.send_message(Msg::Loaded(result));
        });
    }

    /// Clears the session and redirects on an authentication rejection.
    /// Returns true when the error was consumed.
    fn handle_auth(&self, ctx: &Context<Self>, err: &ApiError) -> bool {
        if *err == ApiError::Unauthorized {
            ctx.props().session.clear();
            ctx.props().on_navigate.emit(Route::Login);
            return true;
        }
        false
    }

    fn tab_button(&self, link: &Scope<Self>, tab: AdminTab, label: &str) -> Html {
        let class = classes!("tab-btn", (self.tab == tab).then_some("active"));
        html! {
            <button {class} onclick={link.callback(move |_| Msg::SetTab(tab))}>
                { label }
            </button>
        }
    }

    fn whitelist_tab(&self, link: &Scope<Self>) -> Html {
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::EditMatricula(input.value())
        });

        html! {
            <section class="admin-tab">
                <div class="add-row">
                    <label class="text-field">
                        <span>{"Adicionar Matrícula Permitida"}</span>
                        <input
                            type="text"
                            placeholder="Ex: 12345"
                            value={self.new_matricula.clone()}
                            {oninput}
                        />
                    </label>
                    <button class="submit-btn" onclick={link.callback(|_| Msg::AddMatricula)}>
                        {"Liberar"}
                    </button>
                </div>

                <ul class="entity-list">
                    {
                        self.whitelist.iter().map(|entry| {
                            let id = entry.id;
                            html! {
                                <li key={id.to_string()}>
                                    <div>
                                        <strong>{ &entry.matricula }</strong>
                                        <span class="hint">{"Acesso Autorizado"}</span>
                                    </div>
                                    <button
                                        class="danger-btn"
                                        onclick={link.callback(move |_| Msg::DeleteWhitelist(id))}
                                    >
                                        {"Remover"}
                                    </button>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>
                if self.whitelist.is_empty() {
                    <p class="hint">{"Nenhuma matrícula na lista de espera."}</p>
                }
            </section>
        }
    }

    fn users_tab(&self, link: &Scope<Self>) -> Html {
        html! {
            <section class="admin-tab">
                <ul class="entity-list">
                    {
                        self.users.iter().map(|user| self.user_item(link, user)).collect::<Html>()
                    }
                </ul>
            </section>
        }
    }

    fn user_item(&self, link: &Scope<Self>, user: &UserAccount) -> Html {
        let id = user.id;
        let initial = user
            .nome
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string());

        html! {
            <li key={id.to_string()}>
                <span class="avatar">{ initial }</span>
                <div class="user-info">
                    <div>
                        <strong>{ &user.nome }</strong>
                        if user.is_admin {
                            <span class="chip">{"Admin"}</span>
                        }
                        if user.must_change_password {
                            <span class="chip chip-warning">{"Troca de Senha Pendente"}</span>
                        }
                    </div>
                    <span>{ &user.email }</span>
                    <span class="hint">{ format!("Matrícula: {}", user.matricula) }</span>
                </div>
                if !user.is_admin {
                    <div class="actions">
                        <button
                            class="warning-btn"
                            title="Resetar Senha"
                            onclick={link.callback(move |_| Msg::ResetPassword(id))}
                        >
                            {"Resetar Senha"}
                        </button>
                        <button
                            class="danger-btn"
                            title="Excluir Usuário"
                            onclick={link.callback(move |_| Msg::DeleteUser(id))}
                        >
                            {"Excluir"}
                        </button>
                    </div>
                }
            </li>
        }
    }

    fn reset_dialog(&self, link: &Scope<Self>, password: &str) -> Html {
        html! {
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h2>{"Senha Resetada com Sucesso"}</h2>
                    <p>
                        {"Anote a senha temporária abaixo. O usuário será obrigado a \
                          trocá-la no próximo login."}
                    </p>
                    <div class="temp-password">
                        <code>{ password }</code>
                        <button class="icon-btn" onclick={link.callback(|_| Msg::CopyPassword)}>
                            {"Copiar"}
                        </button>
                    </div>
                    <button class="submit-btn" onclick={link.callback(|_| Msg::CloseResetDialog)}>
                        {"Fechar"}
                    </button>
                </div>
            </div>
        }
    }
}
