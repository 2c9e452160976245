#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod dom;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;

/// Mount point looked up at start; the body is used when absent.
pub const ROOT_ELEMENT_ID: &str = "root";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    // Ensure <html lang, dir> match the initial locale
    crate::i18n::set_lang(&crate::i18n::current_lang());

    let config = bootstrap::load_config().map_err(|err| {
        let message = err.to_string();
        log::error!("{message}");
        dom::console_error(&message);
        JsValue::from_str(&message)
    })?;

    let props = app::AppProps {
        config: std::rc::Rc::new(config),
        children: yew::Children::default(),
    };
    match dom::element_by_id(ROOT_ELEMENT_ID)? {
        Some(root) => yew::Renderer::<app::App>::with_root_and_props(root, props).render(),
        None => yew::Renderer::<app::App>::with_props(props).render(),
    };
    Ok(())
}
