pub mod app;
pub mod autocomplete;
mod components;
pub mod config;
pub mod editor;
pub mod keys;
pub mod pages;
pub mod suggestions;

use crate::app::App;
use leptos::logging::log;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn initialize() {
    console_error_panic_hook::set_once();
    log!("fixate-demo: mounting editor and pickers");
    mount_to_body(App);
}
