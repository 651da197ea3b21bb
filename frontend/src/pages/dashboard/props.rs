use yew::prelude::*;

use crate::app::Route;
use crate::session::SessionStore;

/// Properties for the dashboard page.
#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    /// Injected session store; read for the display name and admin flag,
    /// cleared on logout or authentication rejection.
    pub session: SessionStore,
    /// Navigation side channel back to the root component.
    pub on_navigate: Callback<Route>,
}
