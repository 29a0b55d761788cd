//! Fleet and monitoring service CLI arguments.

use clap::Parser;

use crate::{
    core::fleet::FleetParameters,
    prelude::*,
    quantity::{currency::Cost, price::LiterPrice, ratios::Percentage, volume::Liters},
};

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct FleetArgs {
    /// Fuel consumed by a single unit over the reporting period, in liters.
    #[clap(long = "fuel-liters", default_value = "1419", env = "FUEL_LITERS")]
    pub fuel_total: Liters,

    /// Fuel price per liter.
    #[clap(long = "price-per-liter", default_value = "25", env = "PRICE_PER_LITER")]
    pub price: LiterPrice,

    /// Number of vehicles in the fleet.
    #[clap(long = "unit-count", default_value = "30", env = "UNIT_COUNT")]
    pub unit_count: u32,

    /// One-time monitoring hardware cost per unit.
    #[clap(
        long = "purchase-cost-per-unit",
        default_value = "0",
        env = "PURCHASE_COST_PER_UNIT"
    )]
    pub purchase_cost_per_unit: Cost,

    /// Monthly monitoring service rent per unit.
    #[clap(long = "monthly-rent-per-unit", default_value = "999", env = "MONTHLY_RENT_PER_UNIT")]
    pub monthly_rent_per_unit: Cost,

    /// Expected idle loss reduction with the monitoring in place.
    #[clap(long = "idle-reduction-percent", default_value = "20", env = "IDLE_REDUCTION_PERCENT")]
    pub idle_reduction: Percentage,

    /// Share of the measured idle time considered genuine waste.
    #[clap(long = "real-idle-percent", default_value = "100", env = "REAL_IDLE_PERCENT")]
    pub real_idle: Percentage,
}

impl FleetArgs {
    pub fn parameters(&self) -> Result<FleetParameters> {
        FleetParameters::builder()
            .fuel_total(self.fuel_total)
            .price(self.price)
            .unit_count(self.unit_count)
            .purchase_cost_per_unit(self.purchase_cost_per_unit)
            .monthly_rent_per_unit(self.monthly_rent_per_unit)
            .idle_reduction(self.idle_reduction)
            .real_idle(self.real_idle)
            .build()
            .context("invalid fleet parameters")
    }
}
