mod browser;
mod report;
mod scenario;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use browser::{BrowserConfig, BrowserKind, FooterProbe, new_session, parse_browser_kind};
use report::ScenarioResult;
use scenario::{ScenarioCtx, get_scenario, list_scenarios};
use studio_footer_core::FooterConfig;
use util::{artifacts_dir, capture_artifacts, split_csv};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "studio-footer-tester", version)]
#[command(about = "Browser acceptance checks for the Studio footer")]
struct Args {
    /// URL of a page that mounts the footer
    #[arg(long, default_value = "http://localhost:8080/")]
    base_url: String,

    /// Browsers to run (chrome,edge,firefox,safari)
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// JSON file with the configuration the page was served with
    #[arg(long)]
    config: Option<PathBuf>,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,

    /// Seconds to wait for footer elements to appear or disappear
    #[arg(long, default_value_t = 5)]
    timeout_secs: u64,

    /// Artifacts directory for screenshots and DOM dumps
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let expected = load_expected_config(args.config.as_deref())?.map(Arc::new);
    let scenarios = expand_scenarios(&args.scenarios);
    let results = run_browser_scenarios(&args, &scenarios, expected).await?;

    write_reports(&args, &results, start_time.elapsed())?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:16} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🦶 Studio Footer Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn load_expected_config(path: Option<&std::path::Path>) -> Result<Option<FooterConfig>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = FooterConfig::from_json(&text)
        .with_context(|| format!("invalid footer configuration in {}", path.display()))?;
    Ok(Some(config))
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        scenarios.extend(list_scenarios().into_iter().map(|(key, _)| key.to_string()));
    }
    scenarios
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        remote_hub: args.hub.clone(),
        ..BrowserConfig::default()
    }
}

async fn run_browser_scenarios(
    args: &Args,
    scenarios: &[String],
    expected: Option<Arc<FooterConfig>>,
) -> Result<Vec<ScenarioResult>> {
    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let mut results = Vec::new();
    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = parse_browser_kind(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let cfg = build_browser_config(args);
        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {}: {e}", kind.label());
                continue;
            }
        };

        results.extend(
            run_browser_scenarios_for_driver(args, scenarios, expected.clone(), kind, &driver)
                .await,
        );
        let _ = driver.quit().await;
    }
    Ok(results)
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    expected: Option<Arc<FooterConfig>>,
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> Vec<ScenarioResult> {
    let label = kind.label();
    let mut results = Vec::new();
    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        let ctx = ScenarioCtx {
            base_url: args.base_url.clone(),
            probe: FooterProbe::new(driver, Duration::from_secs(args.timeout_secs)),
            expected: expected.clone(),
            verbose: args.verbose,
        };

        let scenario_start = Instant::now();
        match scenario.run_browser(driver, &ctx).await {
            Ok(()) => {
                let duration = scenario_start.elapsed();
                println!("✅ [{}] {} - {:?}", label.green(), scenario_name, duration);
                results.push(ScenarioResult::passed(label, scenario_name, duration));
            }
            Err(e) => {
                let duration = scenario_start.elapsed();
                eprintln!(
                    "❌ [{}] {} - {:?}: {:#}",
                    label.red(),
                    scenario_name,
                    duration,
                    e
                );
                let dir = artifacts_dir(&args.artifacts_dir, label, scenario_name);
                let artifacts = match capture_artifacts(driver, &dir, &e).await {
                    Ok(()) => Some(dir),
                    Err(capture_err) => {
                        log::warn!("could not capture artifacts: {capture_err:#}");
                        None
                    }
                };
                results.push(ScenarioResult::failed(
                    label,
                    scenario_name,
                    duration,
                    &e,
                    artifacts,
                ));
            }
        }
    }
    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], duration: Duration) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => report::generate_json_report(&mut output_target, results)?,
        _ => report::generate_console_report(&mut output_target, results, duration)?,
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
