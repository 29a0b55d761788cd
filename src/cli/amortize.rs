use clap::Parser;

use crate::{
    cli::output::OutputFormat,
    core::amortization::{AmortizationSimulator, DEFAULT_HORIZON_MONTHS},
    prelude::*,
    quantity::currency::Cost,
    tables::build_amortization_table,
};

#[derive(Parser)]
pub struct AmortizeArgs {
    /// One-time cost paid upfront.
    #[clap(long = "initial-cost", env = "INITIAL_COST")]
    pub initial_cost: Cost,

    /// Recurring cost paid every month.
    #[clap(long = "monthly-cost", default_value = "0", env = "MONTHLY_COST")]
    pub monthly_cost: Cost,

    /// Savings earned every month.
    #[clap(long = "monthly-savings", env = "MONTHLY_SAVINGS")]
    pub monthly_savings: Cost,

    /// Simulation horizon in months.
    #[clap(
        long = "horizon-months",
        default_value_t = DEFAULT_HORIZON_MONTHS,
        env = "HORIZON_MONTHS"
    )]
    pub horizon: u32,

    #[clap(long = "output", default_value = "table", env = "OUTPUT_FORMAT")]
    pub output: OutputFormat,
}

#[instrument(skip_all)]
pub fn amortize(args: &AmortizeArgs) -> Result {
    for (name, value) in [
        ("initial cost", args.initial_cost),
        ("monthly cost", args.monthly_cost),
        ("monthly savings", args.monthly_savings),
    ] {
        ensure!(value.0.is_finite(), "{name} must be a finite number, got `{value:?}`");
    }

    let series = AmortizationSimulator::builder()
        .initial_cost(args.initial_cost)
        .monthly_cost(args.monthly_cost)
        .monthly_savings(args.monthly_savings)
        .horizon(args.horizon)
        .simulate();
    match series.break_even_month {
        Some(month) => info!(month, "breaks even"),
        None => warn!(horizon = args.horizon, "does not break even within the horizon"),
    }

    match args.output {
        OutputFormat::Table => println!("{}", build_amortization_table(&series)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&series)?),
    }
    Ok(())
}
