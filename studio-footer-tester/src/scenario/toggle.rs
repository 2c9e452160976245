use anyhow::{Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, ScenarioCtx};
use studio_footer_core::resources::test_ids;

const CLICKS: usize = 4;

pub struct HelpToggle;

#[async_trait::async_trait]
impl BrowserScenario for HelpToggle {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.probe.wait_ready().await?;

        for click in 1..=CLICKS {
            ctx.probe.toggle_help().await?;
            let expect_open = click % 2 == 1;
            ensure!(
                ctx.probe.help_expanded().await? == expect_open,
                "aria-expanded out of step after click {click}"
            );
            ensure!(
                ctx.probe.is_present(test_ids::OPEN_EDX_PORTAL_BUTTON).await? == expect_open,
                "Open edX portal button visibility wrong after click {click}"
            );
            if ctx.verbose {
                let state = if expect_open { "open" } else { "closed" };
                println!("  🖱️  Click {click}: help panel {state}");
            }
        }
        Ok(())
    }
}
