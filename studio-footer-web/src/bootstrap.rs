//! Startup configuration: build-time environment overlaid with inline JSON.
use crate::dom;
use serde_json::Value;
use studio_footer_core::config::{
    self, LMS_BASE_URL, MARKETING_SITE_BASE_URL, PRIVACY_POLICY_URL, SHOW_ACCESSIBILITY_PAGE,
    SITE_NAME, STUDIO_BASE_URL, SUPPORT_EMAIL, TERMS_OF_SERVICE_URL,
};
use studio_footer_core::{ConfigError, FooterConfig, RawConfig, merge_config};
use thiserror::Error;

/// `<script type="application/json">` element carrying runtime overrides.
pub const INLINE_CONFIG_ELEMENT_ID: &str = "studio-footer-config";

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Keys captured from the environment at compile time.
#[must_use]
pub fn build_time_config() -> RawConfig {
    let pairs = [
        (LMS_BASE_URL, option_env!("LMS_BASE_URL")),
        (MARKETING_SITE_BASE_URL, option_env!("MARKETING_SITE_BASE_URL")),
        (TERMS_OF_SERVICE_URL, option_env!("TERMS_OF_SERVICE_URL")),
        (PRIVACY_POLICY_URL, option_env!("PRIVACY_POLICY_URL")),
        (SUPPORT_EMAIL, option_env!("SUPPORT_EMAIL")),
        (SITE_NAME, option_env!("SITE_NAME")),
        (STUDIO_BASE_URL, option_env!("STUDIO_BASE_URL")),
        (SHOW_ACCESSIBILITY_PAGE, option_env!("SHOW_ACCESSIBILITY_PAGE")),
    ];
    pairs
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), Value::String(v.to_string()))))
        .collect()
}

/// Read the inline JSON override, `None` when the element is absent or blank.
///
/// # Errors
/// Returns an error when the document is unreachable or the JSON is invalid.
pub fn inline_config() -> Result<Option<RawConfig>, BootstrapError> {
    let element = dom::element_by_id(INLINE_CONFIG_ELEMENT_ID)
        .map_err(|err| BootstrapError::Dom(dom::js_error_message(&err)))?;
    let text = element
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(config::parse_raw(&text)?))
}

/// Merge `layers` in order and assert the footer's keys.
///
/// # Errors
/// Propagates [`FooterConfig::from_raw`] failures.
pub fn resolve_config(
    layers: impl IntoIterator<Item = RawConfig>,
) -> Result<FooterConfig, ConfigError> {
    let mut merged = RawConfig::new();
    for layer in layers {
        merge_config(&mut merged, layer);
    }
    FooterConfig::from_raw(&merged)
}

/// Resolve the footer configuration for this page load.
///
/// # Errors
/// Any failure is fatal for the host application.
pub fn load_config() -> Result<FooterConfig, BootstrapError> {
    let mut layers = vec![build_time_config()];
    if let Some(inline) = inline_config()? {
        log::debug!("applying {} inline configuration keys", inline.len());
        layers.push(inline);
    }
    Ok(resolve_config(layers)?)
}
