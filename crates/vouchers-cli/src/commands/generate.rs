//! Generate command - write the notification file.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Args;
use console::style;
use dialoguer::{Confirm, Input};
use tracing::{debug, info};

use vouchers_core::notify::rules::parse_picked_date;
use vouchers_core::{
    DuplicatePolicy, IssueReason, Pipeline, Session, ValidationReport, ValidityRange,
    VoucherError,
};

use super::input::{SourceArgs, load_config};
use crate::output;

/// Arguments for the generate command.
#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Validity start date (DD/MM/YYYY)
    #[arg(short, long)]
    start: Option<String>,

    /// Validity end date (DD/MM/YYYY)
    #[arg(short, long)]
    end: Option<String>,

    /// Voucher session (default: from config, otherwise evening)
    #[arg(long, value_enum)]
    session: Option<SessionArg>,

    /// Output directory (default: Desktop)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the document instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Include rows with duplicate contacts without asking
    #[arg(long)]
    allow_duplicates: bool,

    /// Never prompt; stop wherever a choice would be needed
    #[arg(long)]
    no_prompt: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SessionArg {
    Morning,
    Evening,
}

impl From<SessionArg> for Session {
    fn from(arg: SessionArg) -> Self {
        match arg {
            SessionArg::Morning => Session::Morning,
            SessionArg::Evening => Session::Evening,
        }
    }
}

pub async fn run(args: GenerateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let session = args
        .session
        .map(Session::from)
        .unwrap_or(config.output.default_session);
    let configured_dir = config.output.directory.clone();
    let pipeline = Pipeline::new(config);

    let report = args.source.load_report(&pipeline).await?;

    let interactive =
        !args.no_prompt && io::stdin().is_terminal() && console::user_attended_stderr();
    debug!("Interactive prompts: {}", interactive);

    if report.is_blocked() {
        eprintln!("{}", output::summary_table(&report));
        eprintln!(
            "\n{} The following rows must be fixed before generating:",
            style("✗").red()
        );
        eprintln!("{}", output::issues_table(&report.blocking));
        return Err(VoucherError::Rejected {
            invalid_vouchers: report.count(IssueReason::InvalidVoucher),
            missing_order_ids: report.count(IssueReason::MissingOrderId),
        }
        .into());
    }

    if report.valid.is_empty() {
        if report.already_issued > 0 {
            anyhow::bail!("All vouchers have already been given");
        }
        return Err(VoucherError::NoValidEntries.into());
    }

    let duplicates = resolve_duplicates(&report, &args, interactive)?;
    if report.has_warnings() && duplicates == DuplicatePolicy::Abort {
        return Err(VoucherError::DuplicatesNotAccepted(report.warnings.len()).into());
    }

    let range = resolve_range(&args, interactive)?;

    let document = pipeline.generate(&report, &range, session, duplicates)?;

    if args.stdout {
        print!("{}", document.body);
        return Ok(());
    }

    let output_dir = args
        .output_dir
        .or(configured_dir)
        .or_else(dirs::desktop_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let output_path = output_dir.join(&document.file_name);
    fs::write(&output_path, &document.body)?;
    info!("Wrote {} bytes", document.body.len());

    println!(
        "{} Notification file generated: {}",
        style("✓").green(),
        output_path.display()
    );
    println!(
        "   {} rows in {} voucher groups, session {}",
        report.valid.len(),
        document.segments.len(),
        style(session).cyan()
    );

    Ok(())
}

fn resolve_duplicates(
    report: &ValidationReport,
    args: &GenerateArgs,
    interactive: bool,
) -> anyhow::Result<DuplicatePolicy> {
    if !report.has_warnings() {
        return Ok(DuplicatePolicy::Abort);
    }

    eprintln!("{} Duplicate contacts found:", style("⚠").yellow());
    eprintln!("{}", output::issues_table(&report.warnings));

    if args.allow_duplicates {
        eprintln!("{} Duplicates allowed", style("ℹ").blue());
        return Ok(DuplicatePolicy::Proceed);
    }

    if !interactive {
        eprintln!(
            "{} Re-run with --allow-duplicates to include them.",
            style("ℹ").blue()
        );
        return Ok(DuplicatePolicy::Abort);
    }

    let proceed = Confirm::new()
        .with_prompt("Include the duplicate rows anyway?")
        .default(true)
        .interact()?;

    Ok(if proceed {
        DuplicatePolicy::Proceed
    } else {
        DuplicatePolicy::Abort
    })
}

fn resolve_range(args: &GenerateArgs, interactive: bool) -> anyhow::Result<ValidityRange> {
    let start = resolve_date(args.start.as_deref(), "Validity starts", "--start", interactive)?;
    let end = resolve_date(args.end.as_deref(), "Validity ends", "--end", interactive)?;
    Ok(ValidityRange::from_input(&start, &end)?)
}

fn resolve_date(
    given: Option<&str>,
    prompt: &str,
    flag: &str,
    interactive: bool,
) -> anyhow::Result<String> {
    match given {
        Some(date) => Ok(date.to_string()),
        None if interactive => Ok(Input::<String>::new()
            .with_prompt(format!("{} (DD/MM/YYYY)", prompt))
            .validate_with(|input: &String| -> Result<(), String> {
                parse_picked_date(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?),
        None => anyhow::bail!("{} is required when not running interactively", flag),
    }
}
