//! FoodScan Web App (Leptos + WASM)

mod app;
mod barcode;
mod components;
mod content;
mod pages;
mod routes;
mod storage;
mod theme;
mod toast;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
