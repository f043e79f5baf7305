//! Affiliate Revenue CLI
//!
//! Command-line interface for running revenue projections

use affiliate_revenue::{
    format_usd, MonthRecord, ProjectionInputs, RevenueAssumptions, ScenarioRunner,
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

/// Project affiliate revenue from referred customers
#[derive(Parser)]
#[command(name = "affiliate_revenue", version)]
struct Cli {
    /// Assumptions CSV (key,value). Defaults to $REVENUE_ASSUMPTIONS_PATH or built-in values.
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the monthly schedule for one set of inputs
    Project {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print the headline income for a range of monthly referral counts
    Sweep {
        /// First referral count
        #[arg(long, default_value_t = 1)]
        from: u32,

        /// Last referral count (inclusive)
        #[arg(long, default_value_t = 10)]
        to: u32,

        #[arg(long, default_value_t = 10)]
        new_projects: i64,

        #[arg(long, default_value_t = 2000)]
        existing_projects: i64,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Referred customers per month
    #[arg(long, default_value_t = 1)]
    referrals: i64,

    /// Avg. new projects per customer per month
    #[arg(long, default_value_t = 10)]
    new_projects: i64,

    /// Avg. existing projects per customer
    #[arg(long, default_value_t = 2000)]
    existing_projects: i64,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(path) => RevenueAssumptions::from_csv_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => RevenueAssumptions::from_env().context("loading assumptions")?,
    };
    let runner = ScenarioRunner::with_assumptions(assumptions);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Project { inputs, format } => {
            let inputs = ProjectionInputs::new(
                inputs.referrals as f64,
                inputs.new_projects as f64,
                inputs.existing_projects as f64,
            );
            let result = runner.run(&inputs);

            match format {
                OutputFormat::Table => write_table(&mut out, &result.records)?,
                OutputFormat::Csv => write_csv(&mut out, &result.records)?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut out, &result.records)?;
                    writeln!(out)?;
                }
            }

            if let OutputFormat::Table = format {
                let summary = result.summary();
                writeln!(out)?;
                writeln!(out, "Summary:")?;
                writeln!(out, "  Months: {}", summary.total_months)?;
                writeln!(out, "  Final Customers: {}", summary.final_customers)?;
                writeln!(out, "  Total Revenue: {}", format_usd(summary.total_revenue))?;
                writeln!(out, "  Total Affiliate Revenue: {}", format_usd(summary.total_affiliate_revenue))?;
                writeln!(out, "  Monthly income after 1 year: {}", format_usd(summary.final_affiliate_revenue))?;
            }
        }
        Command::Sweep { from, to, new_projects, existing_projects } => {
            let inputs: Vec<_> = (from..=to)
                .map(|r| ProjectionInputs::new(r as f64, new_projects as f64, existing_projects as f64))
                .collect();

            writeln!(out, "{:>9} {:>18}", "Referrals", "Monthly Income")?;
            writeln!(out, "{}", "-".repeat(28))?;
            for (inputs, result) in inputs.iter().zip(runner.run_batch(&inputs)) {
                writeln!(
                    out,
                    "{:>9} {:>18}",
                    inputs.referred_customers_per_month,
                    format_usd(result.headline())
                )?;
            }
        }
    }

    Ok(())
}

fn write_table<W: Write>(out: &mut W, records: &[MonthRecord]) -> Result<()> {
    writeln!(out, "{:>5} {:>9} {:>9} {:>10} {:>14} {:>14}",
        "Month", "Customers", "New", "Projects", "Revenue", "Affiliate")?;
    writeln!(out, "{}", "-".repeat(66))?;

    for row in records {
        writeln!(out, "{:>5} {:>9} {:>9} {:>10} {:>14} {:>14}",
            row.month,
            row.total_customers,
            row.new_customers,
            row.existing_projects,
            format_usd(row.revenue),
            format_usd(row.affiliate_revenue),
        )?;
    }

    Ok(())
}

fn write_csv<W: Write>(out: &mut W, records: &[MonthRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in records {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
