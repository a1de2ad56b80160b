// File: ./src/cli.rs
//! Command-line parsing and the month view command shared by the binary and tests.
use crate::config::Config;
use crate::context::AppContext;
use crate::layout::{MonthLayout, layout_month};
use crate::model::{LeaveStatus, ReferenceDate};
use crate::render;
use crate::storage::LeaveStore;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// Upper bound for `--months`; ten years of month views.
pub const MAX_MONTHS: u32 = 120;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub help: bool,
    pub root: Option<PathBuf>,
    pub month: Option<ReferenceDate>,
    pub today: Option<NaiveDate>,
    /// Number of consecutive months to show.
    pub months: u32,
    pub json: bool,
    pub no_color: bool,
    pub verbosity: u8,
    pub leaves_file: Option<PathBuf>,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut out = CliArgs {
            months: 1,
            ..Default::default()
        };

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--help" | "-h" | "help" => out.help = true,
                "--root" | "-r" => {
                    out.root = Some(value_of(args, i, "--root")?.into());
                    i += 1;
                }
                "--month" | "-m" => {
                    out.month = Some(parse_month(value_of(args, i, "--month")?)?);
                    i += 1;
                }
                "--today" => {
                    let raw = value_of(args, i, "--today")?;
                    out.today = Some(
                        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                            .with_context(|| format!("Invalid --today date '{}'", raw))?,
                    );
                    i += 1;
                }
                "--months" | "-n" => {
                    let raw = value_of(args, i, "--months")?;
                    out.months = raw
                        .parse::<u32>()
                        .ok()
                        .filter(|n| (1..=MAX_MONTHS).contains(n))
                        .ok_or_else(|| {
                            anyhow::anyhow!(
                                "Invalid --months value '{}' (expected 1..={})",
                                raw,
                                MAX_MONTHS
                            )
                        })?;
                    i += 1;
                }
                "--json" => out.json = true,
                "--no-color" => out.no_color = true,
                "-v" => out.verbosity = out.verbosity.saturating_add(1),
                "-vv" => out.verbosity = out.verbosity.saturating_add(2),
                "-vvv" => out.verbosity = out.verbosity.saturating_add(3),
                arg if !arg.starts_with('-') => {
                    // First positional argument is the leave file.
                    if out.leaves_file.is_none() {
                        out.leaves_file = Some(arg.into());
                    }
                }
                other => anyhow::bail!("Unknown option '{}'", other),
            }
            i += 1;
        }

        Ok(out)
    }
}

fn value_of<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("Missing value for {}", flag))
}

/// Parses `YYYY-MM`.
pub fn parse_month(raw: &str) -> Result<ReferenceDate> {
    let (year, month) = raw
        .split_once('-')
        .ok_or_else(|| anyhow::anyhow!("Invalid month '{}', expected YYYY-MM", raw))?;
    let year: i32 = year
        .parse()
        .with_context(|| format!("Invalid year in '{}'", raw))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("Invalid month in '{}'", raw))?;
    Ok(ReferenceDate::new(year, month)?)
}

/// Loads the leave file, lays out the requested months and renders them as
/// text (or JSON with `--json`).
pub fn run(args: &CliArgs, config: &Config, ctx: &dyn AppContext, today: NaiveDate) -> Result<String> {
    let path = match (&args.leaves_file, &config.leaves_file) {
        (Some(p), _) => p.clone(),
        (None, Some(p)) => p.clone(),
        (None, None) => LeaveStore::default_path(ctx)?,
    };
    let records = LeaveStore::load_from_path(&path)?;
    let events = LeaveStore::to_events(records, &config.hidden_statuses)?;

    let first = args.month.unwrap_or_else(|| ReferenceDate::from_date(today));
    let mut layouts: Vec<MonthLayout> = Vec::new();
    for offset in 0..args.months.min(MAX_MONTHS) {
        let offset = i32::try_from(offset).context("Too many months requested")?;
        let reference = first.shifted(offset)?;
        layouts.push(layout_month(reference, today, &events)?);
    }

    if args.json {
        return Ok(serde_json::to_string_pretty(&layouts)?);
    }

    let mut options = config.render_options();
    if args.no_color {
        options.color = false;
    }
    let mut out = String::new();
    for layout in &layouts {
        out.push_str(&render::render_month(layout, &events, &options));
        out.push_str(&render::render_legend(layout, &events));
        out.push('\n');
    }
    Ok(out)
}

pub fn print_help(binary_name: &str) {
    println!(
        "Leavecal v{} - Month view of leave records",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] [leaves.json]", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -m, --month <YYYY-MM>    Month to show (default: current month)");
    println!("    -n, --months <N>         Show N consecutive months (default: 1)");
    println!("    --today <YYYY-MM-DD>     Override the date highlighted as today");
    println!("    --json                   Print grid and bar placement as JSON");
    println!("    --no-color               Disable colored bars");
    println!("    -r, --root <path>        Use a different directory for config and data.");
    println!("    -v, -vv, -vvv            Increase log verbosity (stderr)");
    println!("    -h, --help               Show this help message.");
    println!();
    println!("INPUT:");
    println!("    A JSON array of leave records (or {{\"leaves\": [...]}}):");
    println!(
        "    {{ \"id\": 1, \"startDate\": \"2026-01-30\", \"endDate\": \"2026-02-02\","
    );
    println!("      \"leaveType\": {{ \"name\": \"Annual\", \"color\": \"#3b82f6\" }},");
    println!("      \"status\": \"approved\" }}");
    let statuses: Vec<String> = LeaveStatus::iter().map(|s| s.to_string()).collect();
    println!("    Statuses: {}", statuses.join(", "));
    println!();
    println!("CONFIG (config.toml):");
    println!("    leaves_file, hidden_statuses, max_lanes, cell_width, color, log_level");
}
