//! View rendering for the dashboard page: header with profile menu, the
//! upload form, the banner area, the results table with its export button,
//! and the two overlays.

use yew::prelude::*;

use common::model::address::BaseAddress;

use crate::components::loader::{CogLoader, DownloadLoader};
use crate::components::results_table::ResultsTable;
use crate::components::upload_form::UploadForm;

use super::messages::Msg;
use super::state::{CalcState, Dashboard};

pub fn view(component: &Dashboard, ctx: &Context<Dashboard>) -> Html {
    let link = ctx.link();
    let is_loading = component.calc_state == CalcState::Submitting;

    let on_submit = link.callback(|(address, file): (BaseAddress, web_sys::File)| {
        Msg::Submit(address, file)
    });

    html! {
        <div class="dashboard">
            if is_loading {
                <CogLoader />
            }
            if component.downloading {
                <DownloadLoader />
            }

            { build_header(component, ctx) }

            <main class="content">
                <h1 class="page-title">{"Calculadora de Rotas"}</h1>

                <section class="card">
                    <UploadForm {on_submit} {is_loading} />
                </section>

                if let Some((severity, text)) = &component.message {
                    <div class={classes!("alert", severity.css_class())}>{ text }</div>
                }

                if !component.results.is_empty() {
                    <section class="results">
                        <div class="results-header">
                            <h2>{ format!("Resultados ({})", component.results.len()) }</h2>
                            <button
                                class="export-btn"
                                disabled={component.downloading}
                                onclick={link.callback(|_| Msg::ExportResults)}
                            >
                                {"Baixar Excel"}
                            </button>
                        </div>
                        <div class="card">
                            <ResultsTable data={component.results.clone()} />
                        </div>
                    </section>
                }
            </main>
        </div>
    }
}

fn build_header(component: &Dashboard, ctx: &Context<Dashboard>) -> Html {
    let link = ctx.link();
    let session = &ctx.props().session;
    let nome = session.nome();
    let email = session.email();
    let is_admin = session.is_admin();
    let role = if is_admin { "Administrador" } else { "Colaborador" };
    let initial = nome
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string());

    html! {
        <header class="top-bar">
            <span class="brand">{"CardioGeriatria"}</span>
            <span class="tool-label">{"Calculadora CEP"}</span>
            <div class="profile">
                <button class="profile-btn" onclick={link.callback(|_| Msg::ToggleMenu)}>
                    <span class="profile-name">
                        <strong>{ nome.clone() }</strong>
                        <small>{ role }</small>
                    </span>
                    <span class="avatar">{ initial }</span>
                </button>
                if component.menu_open {
                    <nav class="profile-menu">
                        if let Some(email) = &email {
                            <span class="menu-email">{ email.clone() }</span>
                        }
                        if is_admin {
                            <button onclick={link.callback(|_| Msg::OpenAdmin)}>
                                {"Painel Administrativo"}
                            </button>
                        }
                        <button class="danger" onclick={link.callback(|_| Msg::Logout)}>
                            {"Sair"}
                        </button>
                    </nav>
                }
            </div>
        </header>
    }
}
