use crate::i18n::locales::{is_rtl_lang, load_translations, supported_code};
use serde_json::Value;
use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
const LOCALE_STORAGE_KEY: &str = "studio-footer.locale";

pub struct I18nBundle {
    pub lang: String,
    pub rtl: bool,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let code = supported_code(lang)?;
    let fallback = load_translations("en")?;
    let translations = load_translations(code)?;

    Some(I18nBundle {
        lang: code.to_string(),
        rtl: is_rtl_lang(code),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        rtl: false,
        translations: fallback.clone(),
        fallback,
    }
}

fn initial_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        let win = web_sys::window();
        win.as_ref()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
            .or_else(|| win.and_then(|win| win.navigator().language()))
            .unwrap_or_else(|| "en".to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        "en".to_string()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = initial_lang();
        build_bundle(&initial).unwrap_or_else(fallback_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Set the current language for internationalization
///
/// Unsupported codes are ignored. In the browser the `<html>` element's
/// `lang`/`dir` attributes follow the bundle and the choice is persisted
/// to localStorage.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unsupported locale {lang}, keeping {}", current_lang());
        return;
    };
    replace_bundle(bundle);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            with_bundle(|read| {
                let _ = el.set_attribute("lang", &read.lang);
                let _ = el.set_attribute("dir", if read.rtl { "rtl" } else { "ltr" });
            });
        }
        if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
        {
            let _ = storage.set_item(LOCALE_STORAGE_KEY, &current_lang());
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle("ar").expect("bundle should load");
        assert_eq!(bundle.lang, "ar");
        assert!(bundle.rtl);
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
    }

    #[test]
    fn build_bundle_normalizes_region_tags() {
        let bundle = build_bundle("es-MX").expect("bundle should load");
        assert_eq!(bundle.lang, "es");
        assert!(build_bundle("xx").is_none());
    }

    #[test]
    fn fallback_bundle_defaults_to_en() {
        let bundle = fallback_bundle();
        assert_eq!(bundle.lang, "en");
        assert!(!bundle.rtl);
        assert!(bundle.translations.is_object());
    }

    #[test]
    fn set_lang_ignores_unknown_codes() {
        set_lang("fr");
        set_lang("klingon");
        assert_eq!(current_lang(), "fr");
        set_lang("en");
    }
}
