use bon::Builder;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::economics::EconomicsResult,
    prelude::*,
    quantity::{Zero, currency::Cost},
};

pub const DEFAULT_HORIZON_MONTHS: u32 = 60;

/// Month-by-month accumulation of the monitoring savings against its costs.
#[must_use]
#[derive(Copy, Clone, Builder)]
#[builder(finish_fn(vis = ""))]
pub struct AmortizationSimulator {
    /// One-time cost paid upfront.
    initial_cost: Cost,

    /// Recurring cost paid every month, starting with the first one.
    monthly_cost: Cost,

    monthly_savings: Cost,

    #[builder(default = DEFAULT_HORIZON_MONTHS)]
    horizon: u32,
}

impl<S: amortization_simulator_builder::IsComplete> AmortizationSimulatorBuilder<S> {
    pub fn simulate(self) -> AmortizationSeries {
        self.build().simulate()
    }
}

impl AmortizationSimulator {
    #[instrument(skip_all, fields(horizon = self.horizon))]
    fn simulate(self) -> AmortizationSeries {
        let mut cumulative_savings = Cost::ZERO;
        let points = (1..=self.horizon)
            .map(|month| {
                cumulative_savings += self.monthly_savings;
                let cumulative_cost = self.initial_cost + self.monthly_cost * f64::from(month);
                AmortizationPoint {
                    month,
                    cumulative_savings,
                    cumulative_cost,
                    cumulative_net_gain: cumulative_savings - cumulative_cost,
                }
            })
            .collect_vec();
        let break_even_month = points
            .iter()
            .find(|point| !point.cumulative_net_gain.is_negative())
            .map(|point| point.month);
        debug!(?break_even_month, "simulated");
        AmortizationSeries { points, break_even_month }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AmortizationPoint {
    /// Month number, starting with 1.
    pub month: u32,

    pub cumulative_savings: Cost,

    /// Initial cost plus the monthly costs paid so far.
    pub cumulative_cost: Cost,

    pub cumulative_net_gain: Cost,
}

#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AmortizationSeries {
    pub points: Vec<AmortizationPoint>,

    /// First month whose net gain rounds to a non-negative amount of cents, if any.
    pub break_even_month: Option<u32>,
}

impl AmortizationSeries {
    /// Simulate the hardware purchase and the fleet-wide rent against the expected savings.
    pub fn from_economics(result: &EconomicsResult, horizon: u32) -> Self {
        AmortizationSimulator::builder()
            .initial_cost(result.outcome.total_purchase_cost)
            .monthly_cost(result.outcome.monthly_service_cost)
            .monthly_savings(result.outcome.monthly_savings)
            .horizon(horizon)
            .simulate()
    }
}
