//! Catalog coverage: every locale carries every footer message.

use serde_json::Value;
use std::collections::BTreeSet;
use studio_footer_core::Message;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> Value {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"))
}

fn find_string(json: &Value, key: &str) -> Option<String> {
    key.split('.')
        .try_fold(json, |current, part| current.get(part))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

#[test]
fn every_registered_locale_has_a_catalog_file() {
    let files = locale_codes();
    for meta in crate::i18n::locales() {
        assert!(
            files.iter().any(|code| code == meta.code),
            "missing i18n/{}.json",
            meta.code
        );
    }
}

#[test]
fn every_locale_defines_every_message() {
    for locale in locale_codes() {
        let json = load_locale(&locale);
        for message in Message::ALL {
            let text = find_string(&json, message.key());
            assert!(
                text.is_some_and(|t| !t.trim().is_empty()),
                "Missing key '{}' in locale '{locale}'",
                message.key()
            );
        }
    }
}

#[test]
fn catalogs_hold_no_unknown_keys() {
    let known: BTreeSet<String> = Message::ALL.iter().map(|m| m.key().to_string()).collect();
    for locale in locale_codes() {
        let mut keys = BTreeSet::new();
        collect_keys("", &load_locale(&locale), &mut keys);
        let extra: Vec<_> = keys.difference(&known).collect();
        assert!(extra.is_empty(), "Unknown keys in {locale}: {extra:?}");
    }
}

#[test]
fn english_catalog_matches_compiled_defaults() {
    let json = load_locale("en");
    for message in Message::ALL {
        assert_eq!(
            find_string(&json, message.key()).as_deref(),
            Some(message.default_message()),
            "{}",
            message.key()
        );
    }
}

#[test]
fn trademarks_stay_untranslated() {
    for locale in locale_codes() {
        let json = load_locale(&locale);
        let text = find_string(&json, Message::TrademarkMessage.key()).unwrap_or_default();
        assert!(text.contains("edX"), "{locale}");
        assert!(text.contains("Open edX"), "{locale}");
    }
}
