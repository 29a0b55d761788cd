use serde::Serialize;

use crate::{
    core::{
        error::ValidationError,
        fleet::FleetParameters,
        payback::Payback,
        period::ReportingPeriod,
        projection::{LossProjection, Scaled},
        split::TimeSplit,
        usage::{Usage, UsageSplit},
    },
    prelude::*,
    quantity::{
        Zero,
        currency::Cost,
        price::LiterPrice,
        ratios::{Percentage, Share},
        time::{Days, Minutes, Months},
        volume::Liters,
    },
};

/// Everything derived from a single analysis run.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EconomicsResult {
    pub period: ReportingPeriod,
    pub unit_count: u32,
    pub usage: Scaled<UsageSplit>,

    /// Idle loss, that is the full cost of the idle fuel.
    pub loss: Scaled<LossProjection>,

    pub real_idle: RealIdle,
    pub outcome: Outcome,
}

/// Idle loss discounted to the share of idling considered genuine waste.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RealIdle {
    pub share: Percentage,
    pub cost: Scaled<Cost>,
    pub loss: Scaled<LossProjection>,
}

/// Fleet-wide result of adopting the monitoring service.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Outcome {
    pub annual_savings: Cost,
    pub monthly_savings: Cost,

    /// One-time hardware cost for the whole fleet.
    pub total_purchase_cost: Cost,

    /// Monitoring rent for the whole fleet.
    pub monthly_service_cost: Cost,

    pub monthly_net_benefit: Cost,

    /// Monthly net benefit spread over a 30-day month.
    pub daily_net_benefit: Cost,

    pub annual_net_benefit: Cost,
    pub payback_months: Payback<Months>,
    pub payback_days: Payback<Days>,
}

/// Split the fuel bill into idle and moving parts and project the idle loss and savings.
#[instrument(skip_all, fields(idle = %split.idle, moving = %split.moving, days = period.days()))]
pub fn compute(
    split: TimeSplit,
    fleet: &FleetParameters,
    period: ReportingPeriod,
) -> Result<EconomicsResult, ValidationError> {
    let total_time = split.checked_total().ok_or(ValidationError::DurationOverflow)?;
    if total_time == Minutes::ZERO {
        return Err(ValidationError::ZeroDuration);
    }
    if !(fleet.fuel_total > Liters::ZERO && fleet.fuel_total.0.is_finite()) {
        return Err(ValidationError::NonPositiveFuel(fleet.fuel_total));
    }
    if !(fleet.price > LiterPrice::ZERO && fleet.price.0.is_finite()) {
        return Err(ValidationError::NonPositivePrice(fleet.price));
    }

    let unit_usage = usage_split(split, total_time, fleet);
    let n_units = f64::from(fleet.unit_count);
    let idle_cost = Scaled { unit: unit_usage.idle.cost, fleet: unit_usage.idle.cost * n_units };
    let loss = Scaled {
        unit: LossProjection::over(idle_cost.unit, period),
        fleet: LossProjection::over(idle_cost.fleet, period),
    };

    let real_idle_cost = idle_cost.unit * fleet.real_idle.to_ratio();
    let real_idle_cost = Scaled { unit: real_idle_cost, fleet: real_idle_cost * n_units };
    let real_idle = RealIdle {
        share: fleet.real_idle,
        cost: real_idle_cost,
        loss: Scaled {
            unit: LossProjection::over(real_idle_cost.unit, period),
            fleet: LossProjection::over(real_idle_cost.fleet, period),
        },
    };

    let outcome = Outcome::new(loss.fleet.annual, fleet);
    debug!(
        annual_loss = %loss.fleet.annual,
        annual_savings = %outcome.annual_savings,
        monthly_net_benefit = %outcome.monthly_net_benefit,
        "computed",
    );

    Ok(EconomicsResult {
        period,
        unit_count: fleet.unit_count,
        usage: Scaled { unit: unit_usage, fleet: unit_usage.times(fleet.unit_count) },
        loss,
        real_idle,
        outcome,
    })
}

/// Attribute the fuel to idling and moving proportionally to the time spent.
///
/// The parts are complements, so that they always add up to the total exactly.
#[expect(clippy::cast_precision_loss)]
fn usage_split(split: TimeSplit, total_time: Minutes, fleet: &FleetParameters) -> UsageSplit {
    let idle_share = Share(split.idle.0 as f64 / total_time.0 as f64 * 100.0);
    let idle_share = Share::HUNDRED - idle_share.complement();
    let idle_fuel = fleet.fuel_total * idle_share.to_ratio();

    // One of the two subtractions is exact (Sterbenz), hence `idle + moving == total`:
    let idle_fuel = fleet.fuel_total - (fleet.fuel_total - idle_fuel);
    let moving_fuel = fleet.fuel_total - idle_fuel;

    UsageSplit {
        idle: Usage {
            time: split.idle,
            share: idle_share,
            fuel: idle_fuel,
            cost: idle_fuel * fleet.price,
        },
        moving: Usage {
            time: split.moving,
            share: idle_share.complement(),
            fuel: moving_fuel,
            cost: moving_fuel * fleet.price,
        },
        total: Usage {
            time: total_time,
            share: Share::HUNDRED,
            fuel: fleet.fuel_total,
            cost: fleet.fuel_total * fleet.price,
        },
    }
}

impl Outcome {
    fn new(annual_loss: Cost, fleet: &FleetParameters) -> Self {
        let annual_savings =
            annual_loss * fleet.idle_reduction.to_ratio() * fleet.real_idle.to_ratio();
        let monthly_savings = annual_savings / 12.0;
        let total_purchase_cost = fleet.total_purchase_cost();
        let monthly_service_cost = fleet.monthly_service_cost();
        let monthly_net_benefit = monthly_savings - monthly_service_cost;
        let daily_net_benefit = monthly_net_benefit / LossProjection::DAYS_PER_MONTH;
        let annual_net_benefit =
            annual_savings - fleet.monthly_rent_per_unit * 12.0 * f64::from(fleet.unit_count);

        let (payback_months, payback_days) = if monthly_net_benefit > Cost::ZERO {
            (
                Payback::Recoverable(Months(total_purchase_cost / monthly_net_benefit)),
                Payback::Recoverable(Days(total_purchase_cost / daily_net_benefit)),
            )
        } else {
            (Payback::Unrecoverable, Payback::Unrecoverable)
        };

        Self {
            annual_savings,
            monthly_savings,
            total_purchase_cost,
            monthly_service_cost,
            monthly_net_benefit,
            daily_net_benefit,
            annual_net_benefit,
            payback_months,
            payback_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::duration;

    fn fleet(idle_reduction: u16, real_idle: u16) -> FleetParameters {
        FleetParameters::builder()
            .fuel_total(Liters(1419.0))
            .price(LiterPrice(25.0))
            .unit_count(30)
            .idle_reduction(Percentage(idle_reduction))
            .real_idle(Percentage(real_idle))
            .build()
            .unwrap()
    }

    fn one_day() -> ReportingPeriod {
        ReportingPeriod::try_from_days(1).unwrap()
    }

    fn split() -> TimeSplit {
        TimeSplit::new(
            duration::parse("(1D, 22H, 8M)").unwrap(),
            duration::parse("(1D, 15H, 32M)").unwrap(),
        )
    }

    #[test]
    fn usage_split_ok() {
        let fleet = fleet(20, 100);
        let result = compute(split(), &fleet, one_day()).unwrap();
        let usage = result.usage.unit;

        assert_eq!(usage.total.time, Minutes(5020));
        assert_abs_diff_eq!(usage.idle.share.0, 55.14, epsilon = 0.01);
        assert_abs_diff_eq!(usage.idle.fuel.0, 782.43, epsilon = 0.01);
        assert_abs_diff_eq!(usage.idle.cost.0, 19_560.72, epsilon = 0.01);
        assert_abs_diff_eq!(usage.moving.cost.0, 15_914.28, epsilon = 0.01);
        assert_eq!(usage.total.cost, Cost(35_475.0));
    }

    #[test]
    fn complements_are_exact() {
        for fuel in [1419.0, 0.3, 1.1, 777.77, 12_345.678, 0.1] {
            let fleet = FleetParameters::builder()
                .fuel_total(Liters(fuel))
                .price(LiterPrice(25.0))
                .unit_count(1)
                .idle_reduction(Percentage(20))
                .build()
                .unwrap();
            for idle in 0..120 {
                for moving in 0..120 {
                    if idle + moving == 0 {
                        continue;
                    }
                    let split = TimeSplit::new(Minutes(idle), Minutes(moving));
                    let usage = compute(split, &fleet, one_day()).unwrap().usage.unit;
                    assert_eq!(
                        usage.idle.share + usage.moving.share,
                        Share::HUNDRED,
                        "{idle} / {moving}, {fuel} L",
                    );
                    assert_eq!(
                        usage.idle.fuel + usage.moving.fuel,
                        fleet.fuel_total,
                        "{idle} / {moving}, {fuel} L",
                    );
                }
            }
        }
    }

    #[test]
    fn fleet_usage_is_scaled() {
        let fleet = fleet(20, 100);
        let usage = compute(split(), &fleet, one_day()).unwrap().usage;
        assert_eq!(usage.fleet.idle.time, Minutes(2768 * 30));
        assert_eq!(usage.fleet.idle.share, usage.unit.idle.share);
        assert_eq!(usage.fleet.total.fuel, Liters(1419.0 * 30.0));
        assert_eq!(usage.fleet.idle.cost, usage.unit.idle.cost * 30.0);
    }

    #[test]
    fn one_day_loss_projection() {
        // 4 liters at 25 per liter, all idle: 100 per unit.
        let fleet = FleetParameters::builder()
            .fuel_total(Liters(4.0))
            .price(LiterPrice(25.0))
            .unit_count(30)
            .idle_reduction(Percentage(20))
            .build()
            .unwrap();
        let result = compute(TimeSplit::new(Minutes(1), Minutes(0)), &fleet, one_day()).unwrap();

        assert_eq!(result.usage.unit.idle.cost, Cost(100.0));
        assert_eq!(result.loss.fleet.total, Cost(3000.0));
        assert_eq!(result.loss.fleet.daily, Cost(3000.0));
        assert_eq!(result.loss.fleet.weekly, Cost(21_000.0));
        assert_eq!(result.loss.fleet.monthly, Cost(90_000.0));
        assert_eq!(result.loss.fleet.annual, Cost(1_095_000.0));
        assert_eq!(result.loss.unit.annual, Cost(36_500.0));
    }

    #[test]
    fn loss_projection_multiples() {
        let fleet = fleet(20, 70);
        let period = ReportingPeriod::try_from_days(9).unwrap();
        let result = compute(split(), &fleet, period).unwrap();
        for projection in [
            result.loss.unit,
            result.loss.fleet,
            result.real_idle.loss.unit,
            result.real_idle.loss.fleet,
        ] {
            assert_eq!(projection.weekly, projection.daily * 7.0);
            assert_eq!(projection.monthly, projection.daily * 30.0);
            assert_eq!(projection.annual, projection.daily * 365.0);
        }
    }

    #[test]
    fn real_idle_branch() {
        let fleet = fleet(20, 50);
        let result = compute(split(), &fleet, one_day()).unwrap();
        assert_eq!(result.real_idle.share, Percentage(50));
        assert_eq!(result.real_idle.cost.unit, result.usage.unit.idle.cost * 0.5);
        assert_eq!(result.real_idle.cost.fleet, result.real_idle.cost.unit * 30.0);
        assert_eq!(result.real_idle.loss.fleet.total, result.real_idle.cost.fleet);
    }

    #[test]
    fn savings_and_payback() {
        let fleet = FleetParameters::builder()
            .fuel_total(Liters(4.0))
            .price(LiterPrice(25.0))
            .unit_count(30)
            .purchase_cost_per_unit(Cost(1000.0))
            .monthly_rent_per_unit(Cost(100.0))
            .idle_reduction(Percentage(20))
            .real_idle(Percentage(50))
            .build()
            .unwrap();
        let result = compute(TimeSplit::new(Minutes(1), Minutes(0)), &fleet, one_day()).unwrap();
        let outcome = result.outcome;

        // 1,095,000 × 20% × 50%:
        assert_abs_diff_eq!(outcome.annual_savings.0, 109_500.0, epsilon = 1e-6);
        assert_abs_diff_eq!(outcome.monthly_savings.0, 9125.0, epsilon = 1e-6);
        assert_eq!(outcome.total_purchase_cost, Cost(30_000.0));
        assert_eq!(outcome.monthly_service_cost, Cost(3000.0));
        assert_abs_diff_eq!(outcome.monthly_net_benefit.0, 6125.0, epsilon = 1e-6);
        assert_abs_diff_eq!(outcome.daily_net_benefit.0, 6125.0 / 30.0, epsilon = 1e-6);
        assert_abs_diff_eq!(outcome.annual_net_benefit.0, 109_500.0 - 36_000.0, epsilon = 1e-6);

        let months = outcome.payback_months.recoverable().unwrap();
        let days = outcome.payback_days.recoverable().unwrap();
        assert_abs_diff_eq!(months.0, 30_000.0 / 6125.0, epsilon = 1e-9);
        assert_abs_diff_eq!(days.0, months.0 * 30.0, epsilon = 1e-6);
    }

    #[test]
    fn unrecoverable_payback() {
        let fleet = FleetParameters::builder()
            .fuel_total(Liters(1419.0))
            .price(LiterPrice(25.0))
            .unit_count(30)
            .purchase_cost_per_unit(Cost(1000.0))
            .monthly_rent_per_unit(Cost(999.0))
            .idle_reduction(Percentage(0))
            .build()
            .unwrap();
        let outcome = compute(split(), &fleet, one_day()).unwrap().outcome;
        assert_eq!(outcome.annual_savings, Cost::ZERO);
        assert!(outcome.monthly_net_benefit < Cost::ZERO);
        assert_eq!(outcome.payback_months, Payback::Unrecoverable);
        assert_eq!(outcome.payback_days, Payback::Unrecoverable);
    }

    #[test]
    fn zero_net_benefit_is_unrecoverable() {
        let fleet = fleet(0, 100);
        let outcome = compute(split(), &fleet, one_day()).unwrap().outcome;
        assert_eq!(outcome.monthly_net_benefit, Cost::ZERO);
        assert!(!outcome.payback_months.is_recoverable());
        assert!(!outcome.payback_days.is_recoverable());
    }

    #[test]
    fn idempotent() {
        let fleet = fleet(35, 80);
        let period = ReportingPeriod::try_from_days(7).unwrap();
        assert_eq!(compute(split(), &fleet, period), compute(split(), &fleet, period));
    }

    #[test]
    fn savings_monotonic_in_reduction() {
        let mut previous = Cost::ZERO;
        for reduction in 0..=100 {
            let fleet = fleet(reduction, 100);
            let savings = compute(split(), &fleet, one_day()).unwrap().outcome.annual_savings;
            assert!(savings >= previous, "{reduction}%");
            previous = savings;
        }
    }

    #[test]
    fn zero_duration_fails() {
        let fleet = fleet(20, 100);
        let split = TimeSplit::new(Minutes(0), Minutes(0));
        assert_eq!(compute(split, &fleet, one_day()), Err(ValidationError::ZeroDuration));
    }

    #[test]
    fn duration_overflow_fails() {
        let fleet = fleet(20, 100);
        let split = TimeSplit::new(Minutes(u64::MAX), Minutes(1));
        assert_eq!(compute(split, &fleet, one_day()), Err(ValidationError::DurationOverflow));
    }

    #[test]
    fn zero_duration_is_checked_first() {
        let fleet = FleetParameters::builder()
            .fuel_total(Liters(0.0))
            .price(LiterPrice(0.0))
            .unit_count(1)
            .idle_reduction(Percentage(20))
            .build()
            .unwrap();
        let split = TimeSplit::new(Minutes(0), Minutes(0));
        assert_eq!(compute(split, &fleet, one_day()), Err(ValidationError::ZeroDuration));
    }

    #[test]
    fn non_positive_fuel_fails() {
        for fuel in [0.0, -1.0, f64::NAN] {
            let fleet = FleetParameters::builder()
                .fuel_total(Liters(fuel))
                .price(LiterPrice(25.0))
                .unit_count(1)
                .idle_reduction(Percentage(20))
                .build()
                .unwrap();
            assert_eq!(
                compute(split(), &fleet, one_day()),
                Err(ValidationError::NonPositiveFuel(Liters(fuel)))
            );
        }
    }

    #[test]
    fn non_positive_price_fails() {
        let fleet = FleetParameters::builder()
            .fuel_total(Liters(1419.0))
            .price(LiterPrice(0.0))
            .unit_count(1)
            .idle_reduction(Percentage(20))
            .build()
            .unwrap();
        assert_eq!(
            compute(split(), &fleet, one_day()),
            Err(ValidationError::NonPositivePrice(LiterPrice(0.0)))
        );
    }
}
