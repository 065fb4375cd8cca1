use wasm_bindgen::prelude::*;

use crate::config::LightboxConfig;
use crate::viewer::Lightbox;

/// WASM entry point: wire the lightbox to the current page.
///
/// A page without the lightbox surface is not an error worth surfacing to
/// the console as a panic; attach failures are logged and the page keeps
/// working without the viewer.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = LightboxConfig::from_page(&document);
    log::set_max_level(config.log_level.to_level_filter());

    match Lightbox::attach(&window, &config) {
        Ok(lightbox) => lightbox.forget(),
        Err(err) => log::warn!("lightbox not attached: {err}"),
    }
}
