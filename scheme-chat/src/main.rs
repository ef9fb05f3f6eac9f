use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use scheme_chat::{chat_config, ChatView};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        div {
            style: "height: 100vh; box-sizing: border-box; background-color: #020617; color: white; padding: 1rem;",
            ChatView { config: chat_config().clone() }
        }
    }
}
