//! Command-line calculator for rental prices and availability.
//!
//! Runs the same pricing and overlap rules as the HTTP service, offline,
//! against rates and bookings given on the command line.
//!
//! # Usage
//!
//! ```bash
//! # Price a stay (weekly billing kicks in at 7 days)
//! cargo run --bin rental-cli -- price --daily 50 --weekly 300 --start 2025-01-01 --end 2025-01-11
//!
//! # Check a range against existing bookings
//! cargo run --bin rental-cli -- check --start 2025-01-05 --end 2025-01-12 \
//!     --occupied b1:2025-01-10:2025-01-15
//!
//! # Month calendar
//! cargo run --bin rental-cli -- calendar --year 2025 --month 1 --occupied b1:2025-01-10:2025-01-15
//! ```
//!
//! Missing `--start` / `--end` are prompted for interactively.

use rental_pricing::domain::availability::{AvailabilityChecker, OccupiedRange};
use rental_pricing::domain::clock::{Clock, SystemClock};
use rental_pricing::domain::date_range::DateRange;
use rental_pricing::domain::pricing::{Billing, RateSchedule, cost_breakdown, format_currency};
use rental_pricing::domain::validation::DateRangeValidator;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::Input;

/// Rental pricing calculator.
#[derive(Parser)]
#[command(name = "rental-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Currency symbol for formatted totals
    #[arg(long, global = true, default_value = "$")]
    currency: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a rental between two dates
    Price {
        /// Daily rate
        #[arg(long)]
        daily: f64,

        /// Weekly rate (applies to stays of 7 days or more)
        #[arg(long)]
        weekly: Option<f64>,

        #[command(flatten)]
        dates: DateArgs,
    },

    /// Check a range against existing bookings
    Check {
        #[command(flatten)]
        dates: DateArgs,

        /// Existing booking as `<id>:<start>:<end>`; repeatable
        #[arg(long = "occupied", value_parser = parse_occupied)]
        occupied: Vec<OccupiedRange>,
    },

    /// Show per-day occupancy for a month
    Calendar {
        /// Year (default: current)
        #[arg(long)]
        year: Option<i32>,

        /// Month 1-12 (default: current)
        #[arg(long)]
        month: Option<u32>,

        /// Existing booking as `<id>:<start>:<end>`; repeatable
        #[arg(long = "occupied", value_parser = parse_occupied)]
        occupied: Vec<OccupiedRange>,
    },
}

/// Start and end dates, prompted for when omitted.
#[derive(Args)]
struct DateArgs {
    /// First day, YYYY-MM-DD
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day, YYYY-MM-DD
    #[arg(long)]
    end: Option<NaiveDate>,
}

impl DateArgs {
    fn resolve(self) -> Result<(NaiveDate, NaiveDate)> {
        let start = match self.start {
            Some(d) => d,
            None => prompt_date("Start date (YYYY-MM-DD)")?,
        };
        let end = match self.end {
            Some(d) => d,
            None => prompt_date("End date (YYYY-MM-DD)")?,
        };
        Ok((start, end))
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Price {
            daily,
            weekly,
            dates,
        } => handle_price(RateSchedule::new(daily, weekly), dates, &cli.currency),
        Commands::Check { dates, occupied } => handle_check(dates, occupied),
        Commands::Calendar {
            year,
            month,
            occupied,
        } => handle_calendar(year, month, occupied),
    }
}

/// Prints the cost breakdown for a stay starting today or later.
///
/// # Output Format
///
/// ```text
/// Rental price
///
///   Dates:    2025-01-01 → 2025-01-11
///   Days:     10
///   Billing:  1 week(s) at $300 + 3 day(s) at $50
///   Total:    $450
/// ```
fn handle_price(rates: RateSchedule, dates: DateArgs, currency: &str) -> Result<()> {
    let (start, end) = dates.resolve()?;
    let range = DateRangeValidator::today(&SystemClock)
        .validate(start, end)
        .context("Invalid date range")?;
    let breakdown = cost_breakdown(&range, &rates);

    println!("{}", "Rental price".bright_blue().bold());
    println!();
    println!("  Dates:    {} → {}", range.start(), range.end());
    println!("  Days:     {}", breakdown.days.to_string().bright_white());

    match breakdown.billing {
        Billing::Unpriced => {
            println!("  Billing:  {}", "not priceable (no rate or zero days)".yellow());
            println!("  Total:    {}", "n/a".bright_black());
            return Ok(());
        }
        Billing::Weekly => println!(
            "  Billing:  {} week(s) at {} + {} day(s) at {}",
            breakdown.weeks,
            format_currency(rates.weekly_rate.unwrap_or_default(), currency).cyan(),
            breakdown.remaining_days,
            format_currency(rates.daily_rate, currency).cyan()
        ),
        Billing::Daily => println!(
            "  Billing:  {} day(s) at {}",
            breakdown.days,
            format_currency(rates.daily_rate, currency).cyan()
        ),
    }

    println!(
        "  Total:    {}",
        format_currency(breakdown.total, currency).green().bold()
    );

    Ok(())
}

/// Reports whether the range is free and lists every conflicting booking.
fn handle_check(dates: DateArgs, occupied: Vec<OccupiedRange>) -> Result<()> {
    let (start, end) = dates.resolve()?;
    let range = DateRange::new(start, end).context("Invalid date range")?;
    let availability = AvailabilityChecker::new(occupied).check(&range);

    println!("{}", "Availability".bright_blue().bold());
    println!();
    println!("  Dates:  {} → {} ({} days)", range.start(), range.end(), range.days());

    if availability.available {
        println!("  Status: {}", "AVAILABLE".green().bold());
        return Ok(());
    }

    println!("  Status: {}", "UNAVAILABLE".red().bold());
    println!();
    println!("  {}", "Conflicts:".bright_white());
    for conflict in &availability.conflicts {
        println!(
            "    {:<12} {} → {}",
            conflict.id.cyan(),
            conflict.start_date,
            conflict.end_date
        );
    }

    Ok(())
}

/// Prints a month grid, Monday first, with booked days marked.
///
/// ```text
///   Mo  Tu  We  Th  Fr  Sa  Su
///        1   2   3   4   5   6
///    7   8   9 [10][11][12][13]
/// ```
fn handle_calendar(year: Option<i32>, month: Option<u32>, occupied: Vec<OccupiedRange>) -> Result<()> {
    let today = SystemClock.today();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    let days = AvailabilityChecker::new(occupied)
        .month_calendar(year, month)
        .context("Invalid month")?;

    println!("{}", format!("{year}-{month:02}").bright_blue().bold());
    println!();
    println!("  {}", " Mo  Tu  We  Th  Fr  Sa  Su".bright_white());

    let mut line = String::from("  ");
    if let Some(first) = days.first() {
        line.push_str(&"    ".repeat(first.date.weekday().num_days_from_monday() as usize));
    }

    for day in &days {
        let cell = if day.occupied {
            format!("[{:>2}]", day.date.day()).red().to_string()
        } else {
            format!(" {:>2} ", day.date.day())
        };
        line.push_str(&cell);

        if day.date.weekday().num_days_from_monday() == 6 {
            println!("{}", line);
            line = String::from("  ");
        }
    }
    if !line.trim().is_empty() {
        println!("{}", line);
    }

    let booked = days.iter().filter(|d| d.occupied).count();
    println!();
    println!(
        "  Booked: {} / {} days",
        booked.to_string().bright_white().bold(),
        days.len()
    );

    Ok(())
}

fn prompt_date(prompt: &str) -> Result<NaiveDate> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), String> {
            parse_date(input).map(|_| ())
        })
        .interact_text()?;

    parse_date(&text).map_err(|e| anyhow::anyhow!(e))
}

fn parse_date(text: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| format!("'{}' is not a YYYY-MM-DD date", text.trim()))
}

/// Parses `<id>:<start>:<end>`.
fn parse_occupied(text: &str) -> Result<OccupiedRange, String> {
    let mut parts = text.splitn(3, ':');
    let (Some(id), Some(start), Some(end)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected <id>:<start>:<end>, got '{}'", text));
    };

    let range = DateRange::new(parse_date(start)?, parse_date(end)?).map_err(|e| e.to_string())?;
    Ok(OccupiedRange::new(id, range.start(), range.end()))
}
