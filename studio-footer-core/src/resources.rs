//! Fixed destinations, labels and test identifiers of the footer.

pub const EDX_DOCUMENTATION_URL: &str = "https://docs.edx.org/";
pub const OPEN_EDX_PORTAL_URL: &str = "https://open.edx.org/";
pub const EDX_101_URL: &str =
    "https://www.edx.org/course/edx101-overview-of-creating-an-edx-course#.VO4eaLPF-n1";
pub const STUDIOX_URL: &str = "https://www.edx.org/course/studiox-creating-a-course-with-edx-studio";

pub const ATTRIBUTION_URL: &str = "https://www.antiersolutions.com/";
pub const ATTRIBUTION_LABEL: &str = "Antier";
pub const LMS_LINK_LABEL: &str = "LMS";

pub const BADGE_ALT: &str = "Powered by Open edX";
pub const BADGE_WIDTH: &str = "120px";

// Trademark attribution: site operators must keep this badge.
const BADGE_JPEG_BASE64: &str = include_str!("../assets/powered_by_open_edx.jpg.b64");

/// `data:` URI of the "Powered by Open edX" badge.
#[must_use]
pub fn badge_data_uri() -> String {
    format!("data:image/jpeg;base64,{}", BADGE_JPEG_BASE64.trim())
}

/// `data-testid` values exposed for browser automation.
pub mod test_ids {
    pub const HELP_TOGGLE_BUTTON: &str = "helpToggleButton";
    pub const HELP_BUTTON_ROW: &str = "helpButtonRow";
    pub const OPEN_EDX_PORTAL_BUTTON: &str = "openEdXPortalButton";
    pub const CONTACT_US_BUTTON: &str = "contactUsButton";
    pub const TERMS_OF_SERVICE: &str = "termsOfService";
    pub const PRIVACY_POLICY: &str = "privacyPolicy";
    pub const ACCESSIBILITY_REQUEST: &str = "accessibilityRequest";

    /// Links whose presence depends on configuration.
    pub const CONDITIONAL_LINKS: [&str; 4] = [
        CONTACT_US_BUTTON,
        TERMS_OF_SERVICE,
        PRIVACY_POLICY,
        ACCESSIBILITY_REQUEST,
    ];
}
