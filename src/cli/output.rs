use serde::Serialize;

use crate::core::{amortization::AmortizationSeries, economics::EconomicsResult};

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    Table,

    /// Single JSON document on the standard output.
    Json,
}

/// Everything printed by the analysis in the JSON mode.
#[derive(Serialize)]
pub struct Report<'a> {
    pub economics: &'a EconomicsResult,
    pub amortization: &'a AmortizationSeries,
}

impl Report<'_> {
    pub fn print(&self) -> crate::prelude::Result {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}
