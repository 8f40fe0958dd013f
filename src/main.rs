//! Todo List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod dom;
mod models;

use config::AppConfig;
use any_spawner::Executor;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    if let Err(err) = Executor::init_wasm_bindgen() {
        log::warn!("[APP] executor already initialized: {:?}", err);
    }
    app::start(AppConfig::default());
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
