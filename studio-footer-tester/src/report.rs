use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub browser: String,
    pub scenario: String,
    pub passed: bool,
    pub duration_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<String>,
}

impl ScenarioResult {
    #[must_use]
    pub fn passed(browser: &str, scenario: &str, duration: Duration) -> Self {
        Self {
            browser: browser.to_string(),
            scenario: scenario.to_string(),
            passed: true,
            duration_ms: duration.as_millis(),
            error: None,
            artifacts: None,
        }
    }

    #[must_use]
    pub fn failed(
        browser: &str,
        scenario: &str,
        duration: Duration,
        err: &anyhow::Error,
        artifacts: Option<String>,
    ) -> Self {
        Self {
            passed: false,
            error: Some(format!("{err:#}")),
            artifacts,
            ..Self::passed(browser, scenario, duration)
        }
    }
}

pub fn generate_json_report<W: Write + ?Sized>(
    writer: &mut W,
    results: &[ScenarioResult],
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, results)?;
    writeln!(writer)?;
    Ok(())
}

pub fn generate_console_report<W: Write + ?Sized>(
    writer: &mut W,
    results: &[ScenarioResult],
    duration: Duration,
) -> std::io::Result<()> {
    writeln!(writer, "{}", "📊 Footer Acceptance Results".bright_cyan().bold())?;
    writeln!(writer, "{}", "=".repeat(30).cyan())?;
    if results.is_empty() {
        writeln!(writer, "No browser scenarios executed.")?;
    }
    for result in results {
        let status = if result.passed {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        writeln!(
            writer,
            "{status} [{}] {} ({} ms)",
            result.browser, result.scenario, result.duration_ms
        )?;
        if let Some(error) = &result.error {
            writeln!(writer, "     {}", error.red())?;
        }
        if let Some(dir) = &result.artifacts {
            writeln!(writer, "     artifacts: {dir}")?;
        }
    }
    let failed = results.iter().filter(|r| !r.passed).count();
    writeln!(writer)?;
    writeln!(
        writer,
        "{} passed, {} failed in {duration:?}",
        results.len() - failed,
        failed
    )?;
    Ok(())
}
