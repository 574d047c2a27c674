use log::{info, Level};
use yew::prelude::*;

mod content;
mod state;
mod components {
    pub mod newsletter;
    pub mod reveal;
    pub mod room;
    pub mod room_modal;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
