//! Update function for the dashboard page.
//!
//! Elm-style: receives the current state, the `Context` and a `Msg`,
//! mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - `Submit` enters `Submitting`, clears prior results and banner, and
//!   fires the multipart request off the UI thread.
//! - `Finished(Ok)` applies the pure classification: terminal state,
//!   banner, and at most one error-report download.
//! - `Finished(Err(Unauthorized))` clears the session and redirects to the
//!   login page through the navigation side channel.
//! - `ExportResults` writes the XLSX workbook synchronously, then keeps the
//!   download overlay up briefly so the user sees feedback.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::app::Route;
use crate::export;
use crate::ui;

use super::helpers::{classify, Severity};
use super::messages::Msg;
use super::state::{CalcState, Dashboard};

pub fn update(component: &mut Dashboard, ctx: &Context<Dashboard>, msg: Msg) -> bool {
    match msg {
        Msg::Submit(address, file) => {
            component.calc_state = CalcState::Submitting;
            component.results.clear();
            component.message = None;

            let session = ctx.props().session.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::calculate_distances(&session, &address, &file).await;
                link.send_message(Msg::Finished(result));
            });
            true
        }
        Msg::Finished(Ok(response)) => {
            let outcome = classify(&response);
            component.results = response.success_data;
            component.calc_state = outcome.state;
            component.message = outcome.message;
            if let Some(fragment) = outcome.download {
                export::download_error_file(&fragment);
            }
            true
        }
        Msg::Finished(Err(ApiError::Unauthorized)) => {
            component.calc_state = CalcState::Failed;
            ctx.props().session.clear();
            ctx.props().on_navigate.emit(Route::Login);
            false
        }
        Msg::Finished(Err(err)) => {
            component.calc_state = CalcState::Failed;
            component.message = Some((Severity::Error, err.to_string()));
            true
        }
        Msg::ExportResults => {
            if component.results.is_empty() || component.downloading {
                return false;
            }
            component.downloading = true;
            match export::export_results(&component.results) {
                Ok(()) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(1000).await;
                        link.send_message(Msg::ExportDone);
                    });
                }
                Err(err) => {
                    gloo_console::error!(err.to_string());
                    ui::show_toast("Erro ao gerar a planilha.");
                    component.downloading = false;
                }
            }
            true
        }
        Msg::ExportDone => {
            component.downloading = false;
            true
        }
        Msg::ToggleMenu => {
            component.menu_open = !component.menu_open;
            true
        }
        Msg::Logout => {
            ctx.props().session.clear();
            ctx.props().on_navigate.emit(Route::Login);
            false
        }
        Msg::OpenAdmin => {
            ctx.props().on_navigate.emit(Route::Admin);
            false
        }
    }
}
