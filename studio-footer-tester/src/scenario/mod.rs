use anyhow::Result;
use std::sync::Arc;
use thirtyfour::prelude::*;

use crate::browser::FooterProbe;
use studio_footer_core::FooterConfig;

pub mod collapsed;
pub mod copyright;
pub mod legal;
pub mod toggle;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub probe: FooterProbe<'a>,
    /// Configuration the page under test was served with, when known.
    pub expected: Option<Arc<FooterConfig>>,
    pub verbose: bool,
}

#[async_trait::async_trait]
pub trait BrowserScenario: Send + Sync {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

const SCENARIOS: [(&str, &str); 4] = [
    ("help-collapsed", "Help panel starts collapsed"),
    ("help-toggle", "Help toggle opens and closes the resource row"),
    ("legal-links", "Optional links match the served configuration"),
    ("copyright-year", "Copyright line shows the current year"),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn BrowserScenario>> {
    match name.to_lowercase().as_str() {
        "help-collapsed" => Some(Box::new(collapsed::HelpCollapsed)),
        "help-toggle" => Some(Box::new(toggle::HelpToggle)),
        "legal-links" => Some(Box::new(legal::LegalLinks)),
        "copyright-year" => Some(Box::new(copyright::CopyrightYear)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.to_vec()
}
