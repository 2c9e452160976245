//! Footer configuration: key assertion, layered merging and typed access.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Untyped configuration object as supplied by the host application.
pub type RawConfig = Map<String, Value>;

/// Name reported when the footer's keys are missing.
pub const FOOTER_REQUESTER: &str = "Studio Footer component";

pub const LMS_BASE_URL: &str = "LMS_BASE_URL";
pub const MARKETING_SITE_BASE_URL: &str = "MARKETING_SITE_BASE_URL";
pub const TERMS_OF_SERVICE_URL: &str = "TERMS_OF_SERVICE_URL";
pub const PRIVACY_POLICY_URL: &str = "PRIVACY_POLICY_URL";
pub const SUPPORT_EMAIL: &str = "SUPPORT_EMAIL";
pub const SITE_NAME: &str = "SITE_NAME";
pub const STUDIO_BASE_URL: &str = "STUDIO_BASE_URL";
pub const SHOW_ACCESSIBILITY_PAGE: &str = "SHOW_ACCESSIBILITY_PAGE";

/// Every key the footer declares, in assertion order.
pub const FOOTER_CONFIG_KEYS: [&str; 8] = [
    LMS_BASE_URL,
    MARKETING_SITE_BASE_URL,
    TERMS_OF_SERVICE_URL,
    PRIVACY_POLICY_URL,
    SUPPORT_EMAIL,
    SITE_NAME,
    STUDIO_BASE_URL,
    SHOW_ACCESSIBILITY_PAGE,
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{requester} requires configuration key {key}, which is not declared")]
    Missing { key: String, requester: String },
    #[error("configuration must be a JSON object")]
    NotAnObject,
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fail unless every key in `keys` is declared in `raw`.
///
/// A declared key may hold `null`; only absence is an error.
///
/// # Errors
/// Returns [`ConfigError::Missing`] for the first undeclared key.
pub fn ensure_config(raw: &RawConfig, keys: &[&str], requester: &str) -> Result<(), ConfigError> {
    match keys.iter().find(|key| !raw.contains_key(**key)) {
        Some(key) => Err(ConfigError::Missing {
            key: (*key).to_string(),
            requester: requester.to_string(),
        }),
        None => Ok(()),
    }
}

/// Overlay `layer` onto `base`; keys in `layer` win.
pub fn merge_config(base: &mut RawConfig, layer: RawConfig) {
    for (key, value) in layer {
        base.insert(key, value);
    }
}

/// Parse a JSON document into a raw configuration object.
///
/// # Errors
/// Returns an error when the text is not JSON or not a JSON object.
pub fn parse_raw(json: &str) -> Result<RawConfig, ConfigError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::NotAnObject),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterConfig {
    #[serde(rename = "LMS_BASE_URL")]
    pub lms_base_url: String,
    #[serde(rename = "MARKETING_SITE_BASE_URL")]
    pub marketing_site_base_url: String,
    #[serde(rename = "TERMS_OF_SERVICE_URL", default)]
    pub terms_of_service_url: Option<String>,
    #[serde(rename = "PRIVACY_POLICY_URL", default)]
    pub privacy_policy_url: Option<String>,
    #[serde(rename = "SUPPORT_EMAIL", default)]
    pub support_email: Option<String>,
    #[serde(rename = "SITE_NAME")]
    pub site_name: String,
    #[serde(rename = "STUDIO_BASE_URL")]
    pub studio_base_url: String,
    #[serde(rename = "SHOW_ACCESSIBILITY_PAGE", default)]
    pub show_accessibility_page: Option<String>,
}

impl FooterConfig {
    /// Assert the footer's keys and convert the raw object.
    ///
    /// Declaration is the only hard requirement. A non-string optional
    /// value reads as absent; a non-string required value reads as `""`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Missing`] when a key is undeclared.
    pub fn from_raw(raw: &RawConfig) -> Result<Self, ConfigError> {
        ensure_config(raw, &FOOTER_CONFIG_KEYS, FOOTER_REQUESTER)?;
        let required = |key: &str| string_value(raw, key).unwrap_or_default();
        let config = Self {
            lms_base_url: required(LMS_BASE_URL),
            marketing_site_base_url: required(MARKETING_SITE_BASE_URL),
            terms_of_service_url: string_value(raw, TERMS_OF_SERVICE_URL),
            privacy_policy_url: string_value(raw, PRIVACY_POLICY_URL),
            support_email: string_value(raw, SUPPORT_EMAIL),
            site_name: required(SITE_NAME),
            studio_base_url: required(STUDIO_BASE_URL),
            show_accessibility_page: string_value(raw, SHOW_ACCESSIBILITY_PAGE),
        };
        log::debug!("footer configuration resolved for {}", config.site_name);
        Ok(config)
    }

    /// Parse and assert a JSON configuration document.
    ///
    /// # Errors
    /// See [`parse_raw`] and [`FooterConfig::from_raw`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_raw(&parse_raw(json)?)
    }

    #[must_use]
    pub fn terms_of_service_url(&self) -> Option<&str> {
        non_empty(self.terms_of_service_url.as_deref())
    }

    #[must_use]
    pub fn privacy_policy_url(&self) -> Option<&str> {
        non_empty(self.privacy_policy_url.as_deref())
    }

    #[must_use]
    pub fn support_email(&self) -> Option<&str> {
        non_empty(self.support_email.as_deref())
    }

    /// Only the exact string `"true"` enables the accessibility link.
    #[must_use]
    pub fn accessibility_page_enabled(&self) -> bool {
        self.show_accessibility_page.as_deref() == Some("true")
    }

    #[must_use]
    pub fn accessibility_url(&self) -> String {
        format!("{}/accessibility", self.studio_base_url)
    }
}

fn string_value(raw: &RawConfig, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
