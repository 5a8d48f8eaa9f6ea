use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod reveal {
    pub mod clock;
    pub mod controller;
    pub mod dom;
    pub mod easing;
    pub mod engine;
    pub mod hook;
    pub mod sections;
    pub mod timeline;
    pub mod visibility;
}
mod components {
    pub mod booking;
    pub mod scroll;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod home;
    pub mod pricing;
}

use pages::home::Home;
use reveal::engine::{self, EngineConfig};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if !engine::init(EngineConfig::default()) {
        warn!("animation engine was already initialized");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
