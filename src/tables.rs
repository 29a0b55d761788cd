use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        amortization::AmortizationSeries,
        economics::{EconomicsResult, Outcome},
        projection::LossProjection,
        usage::{Usage, UsageSplit},
    },
    quantity::currency::Cost,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn build_cost_cell(cost: Cost) -> Cell {
    Cell::new(cost).set_alignment(CellAlignment::Right).fg(if cost.is_positive() {
        Color::Green
    } else if cost.is_negative() {
        Color::Red
    } else {
        Color::Reset
    })
}

pub fn build_usage_table(usage: &UsageSplit) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Category", "Time", "Hours", "Share", "Fuel", "Cost"]);
    let build_row = |category: &str, usage: &Usage| {
        vec![
            Cell::new(category),
            Cell::new(usage.time).set_alignment(CellAlignment::Right),
            Cell::new(usage.hours())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(usage.share).set_alignment(CellAlignment::Right),
            Cell::new(usage.fuel).set_alignment(CellAlignment::Right),
            Cell::new(usage.cost).set_alignment(CellAlignment::Right),
        ]
    };
    table.add_row(build_row("Idle", &usage.idle).into_iter().map(|cell| cell.fg(Color::Red)));
    table.add_row(build_row("Moving", &usage.moving));
    table.add_row(
        build_row("Total", &usage.total)
            .into_iter()
            .map(|cell| cell.add_attribute(Attribute::Bold)),
    );
    table
}

pub fn build_loss_table(result: &EconomicsResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Idle loss", "Period", "Daily", "Weekly", "Monthly", "Annual"]);
    let build_row = |title: String, projection: &LossProjection| {
        vec![
            Cell::new(title),
            Cell::new(projection.total).set_alignment(CellAlignment::Right),
            Cell::new(projection.daily).set_alignment(CellAlignment::Right),
            Cell::new(projection.weekly).set_alignment(CellAlignment::Right),
            Cell::new(projection.monthly).set_alignment(CellAlignment::Right),
            Cell::new(projection.annual)
                .set_alignment(CellAlignment::Right)
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
        ]
    };
    let real_idle = result.real_idle.share;
    table.add_row(build_row("Unit".to_owned(), &result.loss.unit));
    table.add_row(build_row(format!("Fleet of {}", result.unit_count), &result.loss.fleet));
    table.add_row(build_row(format!("Unit at {real_idle}"), &result.real_idle.loss.unit));
    table.add_row(build_row(
        format!("Fleet at {real_idle}"),
        &result.real_idle.loss.fleet,
    ));
    table
}

pub fn build_outcome_table(outcome: &Outcome) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Monitoring", "Value"]);
    for (title, cost) in [
        ("Monthly savings", outcome.monthly_savings),
        ("Annual savings", outcome.annual_savings),
        ("Purchase cost", -outcome.total_purchase_cost),
        ("Monthly service cost", -outcome.monthly_service_cost),
        ("Daily net benefit", outcome.daily_net_benefit),
        ("Monthly net benefit", outcome.monthly_net_benefit),
        ("Annual net benefit", outcome.annual_net_benefit),
    ] {
        table.add_row(vec![Cell::new(title), build_cost_cell(cost)]);
    }
    let payback_color =
        if outcome.payback_months.is_recoverable() { Color::Green } else { Color::Red };
    table.add_row(vec![
        Cell::new("Payback (months)"),
        Cell::new(outcome.payback_months).set_alignment(CellAlignment::Right).fg(payback_color),
    ]);
    table.add_row(vec![
        Cell::new("Payback (days)").add_attribute(Attribute::Dim),
        Cell::new(outcome.payback_days)
            .set_alignment(CellAlignment::Right)
            .fg(payback_color)
            .add_attribute(Attribute::Dim),
    ]);
    table
}

pub fn build_amortization_table(series: &AmortizationSeries) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Month", "Savings", "Cost", "Net gain"]);
    for point in &series.points {
        let is_break_even = series.break_even_month == Some(point.month);
        let mut month = Cell::new(point.month).set_alignment(CellAlignment::Right);
        if is_break_even {
            month = month.fg(Color::Green).add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            month,
            Cell::new(point.cumulative_savings).set_alignment(CellAlignment::Right),
            Cell::new(point.cumulative_cost)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            build_cost_cell(point.cumulative_net_gain),
        ]);
    }
    table
}
