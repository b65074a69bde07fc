use super::ui;
use crate::core::CurrencyFormatter;
use crate::core::sample::{
    DAILY_REVENUE, DASHBOARD_STATS, DEMAND_FORECAST, DemandLevel, MONTHLY_REVENUE,
    OCCUPANCY_PRICING, ROOM_TYPES,
};
use comfy_table::{Cell, Color};

fn demand_cell(level: DemandLevel) -> Cell {
    let color = match level {
        DemandLevel::High => Color::Green,
        DemandLevel::Medium => Color::Yellow,
        DemandLevel::Low => Color::Red,
    };
    Cell::new(level.as_str()).fg(color)
}

/// Key performance figures in the selected currency.
pub fn render_stats(formatter: &CurrencyFormatter) -> String {
    let stats = &DASHBOARD_STATS;
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Metric"),
        ui::header_cell("Value"),
        ui::header_cell("Change"),
    ]);

    let rows = [
        (
            "Total Revenue",
            formatter.format_amount(stats.total_revenue),
            stats.revenue_change,
        ),
        (
            "Occupancy Rate",
            format!("{}%", stats.occupancy_rate),
            stats.occupancy_change,
        ),
        (
            "Avg Daily Rate",
            formatter.format_amount(stats.avg_daily_rate),
            stats.rate_change,
        ),
        (
            "RevPAR",
            formatter.format_amount(stats.rev_par),
            stats.rev_par_change,
        ),
    ];
    for (label, value, change) in rows {
        table.add_row(vec![
            Cell::new(label),
            ui::value_cell(value),
            ui::change_cell(change),
        ]);
    }

    table.to_string()
}

pub fn render_monthly_revenue(formatter: &CurrencyFormatter) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Month"),
        ui::header_cell("Revenue"),
        ui::header_cell("Occupancy (%)"),
    ]);
    for month in &MONTHLY_REVENUE {
        table.add_row(vec![
            Cell::new(month.month),
            ui::value_cell(formatter.format_amount(month.revenue)),
            ui::value_cell(month.occupancy.to_string()),
        ]);
    }
    table.to_string()
}

pub fn render_daily_revenue(formatter: &CurrencyFormatter) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Revenue"),
        ui::header_cell("Occupancy (%)"),
        ui::header_cell("Avg Price"),
    ]);
    for day in &DAILY_REVENUE {
        table.add_row(vec![
            Cell::new(day.date),
            ui::value_cell(formatter.format_amount(day.revenue)),
            ui::value_cell(day.occupancy.to_string()),
            ui::value_cell(formatter.format_amount(day.avg_price)),
        ]);
    }
    table.to_string()
}

pub fn render_occupancy_pricing(formatter: &CurrencyFormatter) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Hour"),
        ui::header_cell("Occupancy (%)"),
        ui::header_cell("Price"),
    ]);
    for slot in &OCCUPANCY_PRICING {
        table.add_row(vec![
            Cell::new(slot.hour),
            ui::value_cell(slot.occupancy.to_string()),
            ui::value_cell(formatter.format_amount(slot.price)),
        ]);
    }
    table.to_string()
}

/// Daily, monthly and hourly revenue breakdowns under their titles.
pub fn render_analytics(formatter: &CurrencyFormatter) -> String {
    let sections = [
        ("Daily Revenue", render_daily_revenue(formatter)),
        ("Monthly Revenue", render_monthly_revenue(formatter)),
        ("Occupancy vs Price", render_occupancy_pricing(formatter)),
    ];
    sections
        .iter()
        .map(|(title, table)| {
            format!(
                "{}\n\n{}",
                ui::style_text(title, ui::StyleType::Title),
                table
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_forecast() -> String {
    let forecast = &DEMAND_FORECAST;
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Now"),
        ui::header_cell("Next Week"),
        ui::header_cell("Next Month"),
    ]);
    table.add_row(vec![
        demand_cell(forecast.level),
        demand_cell(forecast.next_week),
        demand_cell(forecast.next_month),
    ]);

    let mut output = table.to_string();
    for factor in forecast.factors {
        output.push_str(&format!(
            "\n  {}",
            ui::style_text(&format!("- {factor}"), ui::StyleType::Subtle)
        ));
    }
    output
}

/// Room-type price recommendations.
pub fn render_pricing(formatter: &CurrencyFormatter) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Room Type"),
        ui::header_cell("Current"),
        ui::header_cell("Recommended"),
        ui::header_cell("Change"),
        ui::header_cell("Confidence (%)"),
        ui::header_cell("Demand"),
        ui::header_cell("Occupancy (%)"),
    ]);
    for room in &ROOM_TYPES {
        table.add_row(vec![
            Cell::new(room.name),
            ui::value_cell(formatter.format_amount(room.current_price)),
            ui::value_cell(formatter.format_amount(room.recommended_price)),
            ui::change_cell(room.price_change_pct()),
            ui::value_cell(room.confidence.to_string()),
            demand_cell(room.demand),
            ui::value_cell(room.occupancy.to_string()),
        ]);
    }
    table.to_string()
}

pub fn run(formatter: &CurrencyFormatter) {
    println!("{}\n", ui::style_text("Dashboard", ui::StyleType::Title));
    println!("{}", render_stats(formatter));
    ui::print_separator();
    println!(
        "{}\n",
        ui::style_text("Monthly Revenue", ui::StyleType::Title)
    );
    println!("{}", render_monthly_revenue(formatter));
    ui::print_separator();
    println!(
        "{}\n",
        ui::style_text("Demand Forecast", ui::StyleType::Title)
    );
    println!("{}", render_forecast());
}

pub fn run_analytics(formatter: &CurrencyFormatter) {
    println!(
        "{}\n",
        ui::style_text("Revenue Analytics", ui::StyleType::Title)
    );
    println!("{}", render_analytics(formatter));
}

pub fn run_pricing(formatter: &CurrencyFormatter) {
    println!(
        "{}\n",
        ui::style_text("Pricing Recommendations", ui::StyleType::Title)
    );
    println!("{}", render_pricing(formatter));
}
