//! Lists unit categories and their units.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::UnitCategory;
use clap::Args;
use serde::Serialize;

/// List supported units
#[derive(Debug, Clone, Args)]
pub struct UnitsArgs {
    /// Only list this category
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryUnits {
    category: UnitCategory,
    units: Vec<&'static str>,
}

impl UnitsArgs {
    /// Execute the units command
    pub fn execute(&self) -> CliResult<()> {
        let categories = match &self.category {
            Some(name) => vec![name
                .parse::<UnitCategory>()
                .map_err(|e| CliError::validation(format!("{e}")))?],
            None => UnitCategory::ALL.to_vec(),
        };

        let listing: Vec<CategoryUnits> = categories
            .into_iter()
            .map(|category| CategoryUnits {
                category,
                units: category.units(),
            })
            .collect();

        if self.json {
            return print_json(&listing);
        }

        for entry in listing {
            println!("{:<12} {}", entry.category, entry.units.join(", "));
        }
        Ok(())
    }
}
