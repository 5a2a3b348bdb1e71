//! Age calculator command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::services::age::{calculate_age, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;

/// Calculate an exact age from a birth date
#[derive(Debug, Clone, Args)]
pub struct AgeArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(value_name = "BIRTH")]
    pub birth: String,

    /// Date to measure the age on (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub on: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct AgeResponse {
    birth: NaiveDate,
    on: NaiveDate,
    years: u32,
    months: u32,
    days: u32,
    total_days: i64,
    days_until_next_birthday: i64,
}

impl AgeArgs {
    /// Execute the age command
    pub fn execute(&self) -> CliResult<()> {
        let birth = parse_date(&self.birth).map_err(|e| CliError::validation(format!("{e:#}")))?;
        let on = match &self.on {
            Some(date) => {
                parse_date(date).map_err(|e| CliError::validation(format!("{e:#}")))?
            }
            None => Local::now().date_naive(),
        };

        let age = calculate_age(birth, on).map_err(|e| CliError::validation(format!("{e:#}")))?;

        if self.json {
            return print_json(&AgeResponse {
                birth,
                on,
                years: age.years,
                months: age.months,
                days: age.days,
                total_days: age.total_days,
                days_until_next_birthday: age.days_until_next_birthday,
            });
        }

        println!(
            "{} years, {} months, {} days",
            age.years, age.months, age.days
        );
        println!("Total days: {}", age.total_days);
        if age.days_until_next_birthday == 0 {
            println!("Happy birthday!");
        } else {
            println!("Next birthday in {} days", age.days_until_next_birthday);
        }
        Ok(())
    }
}
