use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::{
    cli::{
        fleet::FleetArgs,
        output::{OutputFormat, Report},
    },
    core::{
        amortization::{AmortizationSeries, DEFAULT_HORIZON_MONTHS},
        duration,
        economics::compute,
        period::ReportingPeriod,
        split::TimeSplit,
    },
    prelude::*,
    quantity::time::Minutes,
    tables::{
        build_amortization_table,
        build_loss_table,
        build_outcome_table,
        build_usage_table,
    },
};

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Idle time as reported by the telematics, like `(1D, 22H, 8M)`.
    #[clap(long = "idle-time", env = "IDLE_TIME", value_parser = duration::parse)]
    pub idle_time: Minutes,

    /// Moving time as reported by the telematics, like `(1D, 15H, 32M)`.
    #[clap(long = "moving-time", env = "MOVING_TIME", value_parser = duration::parse)]
    pub moving_time: Minutes,

    #[clap(flatten)]
    pub fleet: FleetArgs,

    /// First day of the reporting period, today by default.
    #[clap(long = "start-date", env = "START_DATE")]
    pub start_date: Option<NaiveDate>,

    /// Last day of the reporting period, inclusive, today by default.
    #[clap(long = "end-date", env = "END_DATE")]
    pub end_date: Option<NaiveDate>,

    /// Amortization horizon in months.
    #[clap(
        long = "horizon-months",
        default_value_t = DEFAULT_HORIZON_MONTHS,
        env = "HORIZON_MONTHS"
    )]
    pub horizon: u32,

    #[clap(long = "output", default_value = "table", env = "OUTPUT_FORMAT")]
    pub output: OutputFormat,
}

impl AnalyzeArgs {
    pub fn period(&self) -> Result<ReportingPeriod> {
        let today = Local::now().date_naive();
        let start = self.start_date.unwrap_or(today);
        let end = self.end_date.unwrap_or(today);
        Ok(ReportingPeriod::try_from_dates(start, end)?)
    }
}

#[instrument(skip_all)]
pub fn analyze(args: &AnalyzeArgs) -> Result {
    let fleet = args.fleet.parameters()?;
    let period = args.period()?;
    let split = TimeSplit::new(args.idle_time, args.moving_time);
    info!(idle = %split.idle, moving = %split.moving, days = period.days(), "analyzing…");

    let result = compute(split, &fleet, period).context("failed to compute the fuel economics")?;
    let amortization = AmortizationSeries::from_economics(&result, args.horizon);
    info!(
        annual_loss = %result.loss.fleet.annual,
        monthly_net_benefit = %result.outcome.monthly_net_benefit,
        payback = %result.outcome.payback_months,
        "computed",
    );
    if !result.outcome.payback_months.is_recoverable() {
        warn!("the monitoring costs exceed the savings, the purchase is never recovered");
    }
    match amortization.break_even_month {
        Some(month) => info!(month, "breaks even"),
        None => warn!(horizon = args.horizon, "does not break even within the horizon"),
    }

    match args.output {
        OutputFormat::Table => {
            println!("{}", build_usage_table(&result.usage.unit));
            println!("{}", build_usage_table(&result.usage.fleet));
            println!("{}", build_loss_table(&result));
            println!("{}", build_outcome_table(&result.outcome));
            println!("{}", build_amortization_table(&amortization));
        }
        OutputFormat::Json => {
            Report { economics: &result, amortization: &amortization }.print()?;
        }
    }
    Ok(())
}
