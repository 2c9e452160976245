use anyhow::{Context, Result, bail};
use std::time::{Duration, Instant};
use studio_footer_core::resources::test_ids;
use thirtyfour::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Locates footer elements through their `data-testid` attributes.
#[derive(Debug, Clone)]
pub struct FooterProbe<'a> {
    driver: &'a WebDriver,
    timeout: Duration,
}

#[must_use]
pub fn test_id_selector(test_id: &str) -> String {
    format!("[data-testid='{test_id}']")
}

impl<'a> FooterProbe<'a> {
    pub const fn new(driver: &'a WebDriver, timeout: Duration) -> Self {
        Self { driver, timeout }
    }

    pub async fn find(&self, test_id: &str) -> Result<Option<WebElement>> {
        let found = self
            .driver
            .find_all(By::Css(test_id_selector(test_id)))
            .await
            .with_context(|| format!("querying {test_id}"))?;
        Ok(found.into_iter().next())
    }

    pub async fn require(&self, test_id: &str) -> Result<WebElement> {
        self.find(test_id)
            .await?
            .with_context(|| format!("element with data-testid={test_id} not found"))
    }

    pub async fn is_present(&self, test_id: &str) -> Result<bool> {
        Ok(self.find(test_id).await?.is_some())
    }

    pub async fn href(&self, test_id: &str) -> Result<Option<String>> {
        match self.find(test_id).await? {
            Some(el) => Ok(el.attr("href").await?),
            None => Ok(None),
        }
    }

    /// Poll until `test_id` is present (or absent), failing after the timeout.
    pub async fn wait_for_presence(&self, test_id: &str, present: bool) -> Result<()> {
        let started = Instant::now();
        loop {
            if self.is_present(test_id).await? == present {
                return Ok(());
            }
            if started.elapsed() >= self.timeout {
                let state = if present { "appear" } else { "disappear" };
                bail!("{test_id} did not {state} within {:?}", self.timeout);
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    pub async fn wait_ready(&self) -> Result<()> {
        self.wait_for_presence(test_ids::HELP_TOGGLE_BUTTON, true)
            .await
            .context("footer did not mount")
    }

    pub async fn help_expanded(&self) -> Result<bool> {
        let toggle = self.require(test_ids::HELP_TOGGLE_BUTTON).await?;
        Ok(toggle.attr("aria-expanded").await?.as_deref() == Some("true"))
    }

    pub async fn toggle_help(&self) -> Result<()> {
        let expanded = self.help_expanded().await?;
        self.require(test_ids::HELP_TOGGLE_BUTTON)
            .await?
            .click()
            .await
            .context("clicking help toggle")?;
        self.wait_for_presence(test_ids::HELP_BUTTON_ROW, !expanded)
            .await
    }

    pub async fn copyright_text(&self) -> Result<String> {
        let el = self
            .driver
            .find(By::Css(".legal-row .copyright"))
            .await
            .context("locating copyright line")?;
        Ok(el.text().await?.trim().to_string())
    }
}
