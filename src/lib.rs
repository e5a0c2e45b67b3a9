#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod capability;
mod constants;
mod cube;
mod dom;
mod events;
mod frame;
mod header;
mod input;
mod overlay;
mod page;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = page::mount().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}
