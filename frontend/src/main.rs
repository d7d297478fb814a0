use log::{error, info, Level};
use yew::prelude::*;

mod config;
mod contact;
mod countdown;
mod form;
mod parallax;
mod sound;
mod components {
    pub mod sound_toggle;
    pub mod time_box;
}
mod pages {
    pub mod landing;
}

use config::SiteConfig;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: SiteConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing config={props.config.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    match SiteConfig::launch() {
        Ok(config) => {
            info!("Counting down to {}", config.target);
            yew::Renderer::<App>::with_props(AppProps { config }).render();
        }
        Err(e) => error!("Not starting: {}", e),
    }
}
