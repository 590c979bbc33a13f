//! Shared input handling: config loading, pasted rows and the published sheet.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use vouchers_core::notify::rules::parse_picked_date;
use vouchers_core::notify::{Pipeline, ValidationReport, rows_for_day};
use vouchers_core::VoucherConfig;

use super::config::default_config_path;

/// Where voucher rows come from.
#[derive(Args)]
pub struct SourceArgs {
    /// File with pasted rows, tab-separated with a header line (default: stdin)
    pub input: Option<PathBuf>,

    /// Read rows from the published sheet instead, keeping those logged on this day (DD/MM/YYYY)
    #[arg(long, conflicts_with = "input")]
    pub sheet_date: Option<String>,

    /// Sheet CSV export URL (default: built from the sheet settings in the config)
    #[arg(long, requires = "sheet_date")]
    pub sheet_url: Option<String>,
}

impl SourceArgs {
    /// Read the rows and validate them.
    pub async fn load_report(&self, pipeline: &Pipeline) -> anyhow::Result<ValidationReport> {
        match &self.sheet_date {
            Some(day) => {
                let day = parse_picked_date(day)?;
                let url = match &self.sheet_url {
                    Some(url) => url.clone(),
                    None => pipeline.config().sheet.export_url().context(
                        "No sheet URL. Pass --sheet-url or set sheet.sheet_id in the config",
                    )?,
                };
                let csv = fetch_sheet(&url).await?;
                let table = rows_for_day(&csv, day)?;
                Ok(pipeline.validate(&table))
            }
            None => {
                let text = read_input(self.input.as_deref())?;
                Ok(pipeline.prepare(&text)?)
            }
        }
    }
}

/// Load the config from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<VoucherConfig> {
    if let Some(path) = config_path {
        return VoucherConfig::from_file(Path::new(path))
            .with_context(|| format!("Failed to load config from {}", path));
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config at {}", default_path.display());
        return Ok(VoucherConfig::from_file(&default_path)?);
    }

    Ok(VoucherConfig::default())
}

/// Read pasted rows from a file or stdin.
///
/// On a terminal, input ends at the first empty line so the operator can
/// paste and press Enter twice. Piped input is read to the end.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = path.filter(|p| *p != Path::new("-")) {
        info!("Reading rows from {}", path.display());
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut text = String::new();
        stdin.lock().read_to_string(&mut text)?;
        return Ok(text);
    }

    eprintln!("Paste data below (with headers) & press 'Enter' twice:");
    eprintln!("{}", "-".repeat(54));

    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

/// Download the published CSV export.
pub async fn fetch_sheet(url: &str) -> anyhow::Result<String> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Loading sheet data...");
    pb.enable_steady_tick(Duration::from_millis(100));

    match download(url).await {
        Ok(text) => {
            pb.finish_with_message(format!(
                "{} Loaded {} lines from the sheet",
                style("✓").green(),
                text.lines().count()
            ));
            Ok(text)
        }
        Err(e) => {
            pb.finish_and_clear();
            Err(e)
        }
    }
}

async fn download(url: &str) -> anyhow::Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("vouchers-cli/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(60))
        .build()?;

    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to fetch data from the sheet")?;

    if !response.status().is_success() {
        anyhow::bail!("Failed to fetch data from the sheet: HTTP {}", response.status());
    }

    Ok(response.text().await?)
}
