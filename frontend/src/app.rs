//! Root component: holds the current route and the injected session store,
//! and enforces the navigation guards on every render.

use yew::{html, Component, Context, Html};

use crate::pages::admin::AdminPanel;
use crate::pages::dashboard::Dashboard;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::session::SessionStore;

/// The client-side routes. Dashboard and Admin are guarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Admin,
}

pub enum Msg {
    Navigate(Route),
}

pub struct App {
    route: Route,
    session: SessionStore,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let session = SessionStore::new();
        let route = if session.token().is_some() {
            Route::Dashboard
        } else {
            Route::Login
        };
        Self { route, session }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                self.route = route;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);
        let session = self.session.clone();
        let route = resolve_route(
            self.route,
            session.token().is_some(),
            session.is_admin(),
        );

        match route {
            Route::Login => html! {
                <LoginPage {session} {on_navigate} />
            },
            Route::Register => html! {
                <RegisterPage {session} {on_navigate} />
            },
            Route::Dashboard => html! {
                <Dashboard {session} {on_navigate} />
            },
            Route::Admin => html! {
                <AdminPanel {session} {on_navigate} />
            },
        }
    }
}

/// Applies the route guards: the dashboard requires a stored credential,
/// the admin panel additionally requires the admin flag. Falls back to the
/// nearest permitted route rather than rendering a forbidden page.
fn resolve_route(requested: Route, has_token: bool, is_admin: bool) -> Route {
    match requested {
        Route::Login | Route::Register => requested,
        Route::Dashboard | Route::Admin if !has_token => Route::Login,
        Route::Admin if !is_admin => Route::Dashboard,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_routes_require_token() {
        assert_eq!(resolve_route(Route::Dashboard, false, false), Route::Login);
        assert_eq!(resolve_route(Route::Admin, false, true), Route::Login);
        assert_eq!(resolve_route(Route::Dashboard, true, false), Route::Dashboard);
    }

    #[test]
    fn admin_route_requires_admin_flag() {
        assert_eq!(resolve_route(Route::Admin, true, false), Route::Dashboard);
        assert_eq!(resolve_route(Route::Admin, true, true), Route::Admin);
    }

    #[test]
    fn public_routes_are_unguarded() {
        assert_eq!(resolve_route(Route::Login, false, false), Route::Login);
        assert_eq!(resolve_route(Route::Register, false, false), Route::Register);
    }
}
