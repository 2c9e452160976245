use crate::i18n::bundle::with_bundle;
use serde_json::Value;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

/// Resolve `key` in the active locale, then in English.
#[must_use]
pub fn lookup(key: &str) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(Value::as_str)
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(Value::as_str))
            .map(str::to_string)
    })
}
