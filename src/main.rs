//! Bucket Dashboard Frontend Entry Point

mod app;
mod components;
mod gateway;
mod pages;
mod store;

use app::App;
use bucket_core::config::log_level_from_build_env;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(log_level_from_build_env()) {
        web_sys::console::error_1(&format!("[MAIN] Logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
