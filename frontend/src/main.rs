use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod export;
mod pages;
mod session;
mod ui;

fn main() {
    yew::Renderer::<App>::new().render();
}
