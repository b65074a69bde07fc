use super::ui;
use crate::core::CurrencyFormatter;
use crate::core::currency::catalog;
use comfy_table::{Cell, CellAlignment};

const SAMPLE_AMOUNT: f64 = 445_000.0;

/// Renders the currency catalog, marking the selected entry.
pub fn render_catalog(formatter: &CurrencyFormatter) -> String {
    let selected = formatter.selected_currency().code;
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell(""),
        ui::header_cell("Code"),
        ui::header_cell("Symbol"),
        ui::header_cell("Name"),
        ui::header_cell("Sample"),
    ]);

    for currency in catalog() {
        let mut preview = CurrencyFormatter::new();
        preview.set_currency(currency.code.as_str());
        let marker = if currency.code == selected { "*" } else { "" };

        table.add_row(vec![
            Cell::new(marker).set_alignment(CellAlignment::Center),
            Cell::new(currency.code),
            Cell::new(currency.symbol).set_alignment(CellAlignment::Center),
            Cell::new(currency.name),
            ui::value_cell(preview.format_amount(SAMPLE_AMOUNT)),
        ]);
    }

    table.to_string()
}

pub fn list(formatter: &CurrencyFormatter) {
    println!(
        "{}\n",
        ui::style_text("Currency Display", ui::StyleType::Title)
    );
    println!("{}", render_catalog(formatter));
}

pub fn format(formatter: &CurrencyFormatter, amounts: &[f64]) {
    for amount in amounts {
        println!("{}", formatter.format_amount(*amount));
    }
}
