mod app;
mod components;
pub mod config;
pub mod error;
pub mod models;
mod pages;
pub mod routes;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("DevHub Core UI starting...");

    let ui_config = config::UiConfig::with_override(config::embedded_override().as_deref());
    log::info!("UI configuration: {:?}", ui_config);
    yewdux::prelude::Dispatch::<config::UiConfig>::global().set(ui_config);

    yew::Renderer::<app::App>::new().render();

    Ok(())
}
