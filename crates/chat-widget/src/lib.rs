//! Embeddable browser chat widget for the RealtyAI assistant, built on Yew.
//!
//! The widget wires the platform-neutral controller from `realty-chat-core`
//! to web storage, a fetch-based transport, and a small set of components.
//! Hosts either render [`ChatWidget`] inside their own app or call
//! [`mount_to_body`] from their WASM entry point.

pub mod components;
pub mod config;
pub mod ports;
pub mod storage;
pub mod styles;
pub mod transport;

pub use components::{ChatInput, ChatWidget, MessageLog, QuickReplies, ReplyView, TypingDots};
pub use config::ChatConfig;
pub use transport::HttpChatTransport;

/// Installs console logging and mounts the widget onto `document.body`.
/// Exported to JS so host pages can boot the widget from a plain script tag.
#[wasm_bindgen::prelude::wasm_bindgen(js_name = mountChatWidget)]
pub fn mount_to_body() {
    init_console_tracing();
    tracing::debug!("mounting chat widget");
    yew::Renderer::<ChatWidget>::new().render();
}

fn init_console_tracing() {
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeConsoleWriter);
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
