use anyhow::{Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, ScenarioCtx};
use studio_footer_core::current_year;

pub struct CopyrightYear;

#[async_trait::async_trait]
impl BrowserScenario for CopyrightYear {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.probe.wait_ready().await?;

        let text = ctx.probe.copyright_text().await?;
        let expected = format!("© {}", current_year());
        ensure!(text == expected, "copyright line was {text:?}, wanted {expected:?}");
        Ok(())
    }
}
