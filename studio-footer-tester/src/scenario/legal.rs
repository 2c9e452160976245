use anyhow::{Context, Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, ScenarioCtx};
use studio_footer_core::resources::test_ids;
use studio_footer_core::{DefaultMessages, FooterConfig, FooterView, HelpPanel, current_year};

pub struct LegalLinks;

/// `(test id, expected href)` for every configuration-dependent link,
/// `None` when the link must be absent.
#[must_use]
pub fn expected_links(config: &FooterConfig) -> Vec<(&'static str, Option<String>)> {
    let view = FooterView::build(config, &DefaultMessages, HelpPanel::expanded(), current_year());
    test_ids::CONDITIONAL_LINKS
        .into_iter()
        .map(|id| (id, view.link_by_test_id(id).map(|link| link.href.clone())))
        .collect()
}

#[async_trait::async_trait]
impl BrowserScenario for LegalLinks {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let config = ctx
            .expected
            .as_deref()
            .context("legal-links needs --config with the served footer configuration")?;

        driver.goto(&ctx.base_url).await?;
        ctx.probe.wait_ready().await?;
        // Contact us lives in the help row.
        ctx.probe.toggle_help().await?;

        for (id, expected) in expected_links(config) {
            let actual = ctx.probe.href(id).await?;
            ensure!(actual == expected, "{id}: expected {expected:?}, found {actual:?}");
            if ctx.verbose {
                println!("  🔗 {id}: {}", expected.as_deref().unwrap_or("absent"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(email: serde_json::Value, a11y: &str) -> FooterConfig {
        let raw = json!({
            "LMS_BASE_URL": "https://lms.example.org",
            "MARKETING_SITE_BASE_URL": "https://example.org",
            "TERMS_OF_SERVICE_URL": "",
            "PRIVACY_POLICY_URL": "https://example.org/privacy",
            "SUPPORT_EMAIL": email,
            "SITE_NAME": "Example",
            "STUDIO_BASE_URL": "https://studio.example.org",
            "SHOW_ACCESSIBILITY_PAGE": a11y
        });
        FooterConfig::from_json(&raw.to_string()).expect("valid config")
    }

    #[test]
    fn expected_links_follow_configuration() {
        let links = expected_links(&config(json!("help@example.org"), "true"));
        assert_eq!(
            links,
            vec![
                (
                    test_ids::CONTACT_US_BUTTON,
                    Some("mailto:help@example.org".to_string())
                ),
                (test_ids::TERMS_OF_SERVICE, None),
                (
                    test_ids::PRIVACY_POLICY,
                    Some("https://example.org/privacy".to_string())
                ),
                (
                    test_ids::ACCESSIBILITY_REQUEST,
                    Some("https://studio.example.org/accessibility".to_string())
                ),
            ]
        );
    }

    #[test]
    fn null_email_and_disabled_accessibility_are_absent() {
        let links = expected_links(&config(serde_json::Value::Null, "false"));
        let absent: Vec<&str> = links
            .iter()
            .filter(|(_, href)| href.is_none())
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(
            absent,
            vec![
                test_ids::CONTACT_US_BUTTON,
                test_ids::TERMS_OF_SERVICE,
                test_ids::ACCESSIBILITY_REQUEST,
            ]
        );
    }
}
