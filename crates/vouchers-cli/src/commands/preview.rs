//! Preview command - validate rows without writing anything.

use clap::Args;
use console::style;

use vouchers_core::notify::Pipeline;

use super::input::{SourceArgs, load_config};
use crate::output;

/// Arguments for the preview command.
#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: PreviewFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PreviewFormat {
    /// Tables for a terminal
    Text,
    /// Full validation report as JSON
    Json,
}

pub async fn run(args: PreviewArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(load_config(config_path)?);
    let report = args.source.load_report(&pipeline).await?;

    match args.format {
        PreviewFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        PreviewFormat::Text => {
            output::print_report(&report);

            if report.is_blocked() {
                println!(
                    "\n{} Fix the rows above before generating.",
                    style("✗").red()
                );
            } else if report.valid.is_empty() {
                println!("\n{} No valid entries found.", style("✗").red());
            } else {
                println!(
                    "\n{} {} rows ready in {} voucher groups.",
                    style("ℹ").blue(),
                    report.valid.len(),
                    report.distribution().len()
                );
            }
        }
    }

    Ok(())
}
