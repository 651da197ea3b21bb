//! Dashboard: the route-calculation workflow.
//!
//! Root module wiring the Yew `Component` implementation with submodules
//! for state, messages, props, update logic, view rendering, and the pure
//! response-classification helpers.
//!
//! Responsibilities
//! - Own the calculation request lifecycle (idle → submitting →
//!   success / partial success / empty / failed).
//! - Render the upload form, the sortable results table and the export
//!   button, plus the page chrome (header, profile menu, overlays).
//! - React to authentication rejection by clearing the session and
//!   navigating back to the login page.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DashboardProps;
pub use state::Dashboard;

impl Component for Dashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Dashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
