//! Storage Todos Frontend Entry Point

mod app;
mod components;
mod context;
mod page;
mod storage;
mod store;

use app::App;
use console_logger::LoggerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(LoggerConfig::default()) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", e).into());
    }
    log::info!("[APP] Starting");
    mount_to_body(App);
}
