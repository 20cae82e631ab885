mod components;
mod config;
mod hooks;
mod pages;
mod router;
mod services;
mod session;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::router::{switch, Route};
use crate::session::SessionProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <div id="app">
                    <components::header::Header />
                    <yew_router::Switch<Route> render={switch} />
                </div>
            </SessionProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    tracing::info!(api = %config::AppConfig::load().api_base_url, "starting gref client");
    yew::Renderer::<App>::new().render();
}
