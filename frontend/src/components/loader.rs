use yew::{html, Component, Context, Html};

/// Full-screen overlay shown while a calculation is in flight.
pub struct CogLoader;

impl Component for CogLoader {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CogLoader
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="overlay">
                <div class="spinner" />
                <p class="overlay-text">{"Calculando rotas..."}</p>
            </div>
        }
    }
}

/// Brief overlay shown while the success export is being written.
pub struct DownloadLoader;

impl Component for DownloadLoader {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        DownloadLoader
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="overlay">
                <div class="spinner" />
                <p class="overlay-text">{"Gerando planilha..."}</p>
            </div>
        }
    }
}
