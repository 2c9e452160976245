use anyhow::{Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, ScenarioCtx};
use studio_footer_core::resources::test_ids;

pub struct HelpCollapsed;

#[async_trait::async_trait]
impl BrowserScenario for HelpCollapsed {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.probe.wait_ready().await?;

        ensure!(
            !ctx.probe.help_expanded().await?,
            "help toggle reports expanded on first render"
        );
        for id in [
            test_ids::HELP_BUTTON_ROW,
            test_ids::OPEN_EDX_PORTAL_BUTTON,
            test_ids::CONTACT_US_BUTTON,
        ] {
            ensure!(
                !ctx.probe.is_present(id).await?,
                "{id} rendered before the help toggle was clicked"
            );
        }

        if ctx.verbose {
            println!("  📕 Help panel collapsed on load");
        }
        Ok(())
    }
}
