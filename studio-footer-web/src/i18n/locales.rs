use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub rtl: bool,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta { code: "en", rtl: false },
    LocaleMeta { code: "es", rtl: false },
    LocaleMeta { code: "fr", rtl: false },
    LocaleMeta { code: "ar", rtl: true },
    LocaleMeta { code: "pt", rtl: false },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("es", include_str!("../../i18n/es.json")),
    ("fr", include_str!("../../i18n/fr.json")),
    ("ar", include_str!("../../i18n/ar.json")),
    ("pt", include_str!("../../i18n/pt.json")),
];

/// Supported locales with their direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_rtl_lang(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang && m.rtl)
}

/// Reduce a browser tag such as `pt-BR` to a supported code.
#[must_use]
pub fn supported_code(tag: &str) -> Option<&'static str> {
    let primary = tag.split(['-', '_']).next().unwrap_or(tag).to_ascii_lowercase();
    LOCALE_META
        .iter()
        .find(|m| m.code == primary)
        .map(|m| m.code)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}
