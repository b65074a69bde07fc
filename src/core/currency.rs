//! Currency catalog and amount formatting

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Maximum fraction digits kept when rendering non-integer amounts.
const MAX_FRACTION_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyCode {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "JPY")]
    Jpy,
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Inr => "INR",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Jpy => "JPY",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .find(|c| c.code.as_str() == s)
            .map(|c| c.code)
            .ok_or_else(|| anyhow::anyhow!("Unsupported currency code: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: CurrencyCode,
    pub symbol: &'static str,
    pub name: &'static str,
}

static CATALOG: [Currency; 4] = [
    Currency {
        code: CurrencyCode::Usd,
        symbol: "$",
        name: "US Dollar",
    },
    Currency {
        code: CurrencyCode::Inr,
        symbol: "₹",
        name: "Indian Rupee",
    },
    Currency {
        code: CurrencyCode::Eur,
        symbol: "€",
        name: "Euro",
    },
    Currency {
        code: CurrencyCode::Jpy,
        symbol: "¥",
        name: "Japanese Yen",
    },
];

/// Returns the fixed set of supported currencies.
pub fn catalog() -> &'static [Currency] {
    &CATALOG
}

/// Holds the selected display currency and renders amounts with it.
///
/// Selection lives only as long as the formatter; every new formatter starts at USD.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    selected: &'static Currency,
}

impl CurrencyFormatter {
    pub fn new() -> Self {
        Self {
            selected: &CATALOG[0],
        }
    }

    pub fn selected_currency(&self) -> &Currency {
        self.selected
    }

    /// Selects the catalog entry matching `code`. Unknown codes are ignored.
    pub fn set_currency(&mut self, code: &str) {
        match CATALOG.iter().find(|c| c.code.as_str() == code) {
            Some(currency) => {
                debug!(code, "Currency selected");
                self.selected = currency;
            }
            None => debug!(code, "Ignoring unknown currency code"),
        }
    }

    /// Formats `amount` as the selected symbol followed by a grouped number.
    ///
    /// No per-currency precision rules apply: `¥182.75` is rendered as is.
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{}", self.selected.symbol, format_number(amount))
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a number with `,` thousands separators and up to three fraction digits.
pub fn format_number(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, amount.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    // Negative zero and values rounding to zero render unsigned
    if amount < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_usd() {
        let formatter = CurrencyFormatter::new();
        assert_eq!(formatter.selected_currency().code, CurrencyCode::Usd);
        assert_eq!(formatter.selected_currency().symbol, "$");
    }

    #[test]
    fn test_set_currency_selects_every_catalog_entry() {
        let mut formatter = CurrencyFormatter::new();
        for currency in catalog() {
            formatter.set_currency(currency.code.as_str());
            assert_eq!(formatter.selected_currency(), currency);
        }
    }

    #[test]
    fn test_set_currency_ignores_unknown_code() {
        let mut formatter = CurrencyFormatter::new();
        formatter.set_currency("EUR");
        formatter.set_currency("GBP");
        assert_eq!(formatter.selected_currency().code, CurrencyCode::Eur);

        // Lookup is case-sensitive
        formatter.set_currency("jpy");
        assert_eq!(formatter.selected_currency().code, CurrencyCode::Eur);
    }

    #[test]
    fn test_format_amount() {
        let mut formatter = CurrencyFormatter::new();
        assert_eq!(formatter.format_amount(445000.0), "$445,000");
        assert_eq!(formatter.format_amount(215.0), "$215");
        assert_eq!(formatter.format_amount(0.0), "$0");
        assert_eq!(formatter.format_amount(1234567.5), "$1,234,567.5");

        formatter.set_currency("EUR");
        assert_eq!(formatter.format_amount(182.75), "€182.75");

        formatter.set_currency("INR");
        assert_eq!(formatter.format_amount(365000.0), "₹365,000");

        formatter.set_currency("JPY");
        assert_eq!(formatter.format_amount(182.75), "¥182.75");
    }

    #[test]
    fn test_format_amount_fraction_and_sign() {
        let formatter = CurrencyFormatter::new();
        assert_eq!(formatter.format_amount(1.23456), "$1.235");
        assert_eq!(formatter.format_amount(999.9996), "$1,000");
        assert_eq!(formatter.format_amount(-1234.0), "$-1,234");
        assert_eq!(formatter.format_amount(-0.0001), "$0");
        assert_eq!(formatter.format_amount(-0.0), "$0");
        assert_eq!(formatter.format_amount(f64::NAN), "$NaN");
        assert_eq!(formatter.format_amount(f64::NEG_INFINITY), "$-∞");
    }

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("INR".parse::<CurrencyCode>().unwrap(), CurrencyCode::Inr);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
        assert_eq!(CurrencyCode::Jpy.to_string(), "JPY");
    }
}
