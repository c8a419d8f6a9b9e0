use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the integer part of an amount is split into digit groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// `12,34,567.00`: the last three digits, then pairs.
    #[default]
    Indian,
    /// `1,234,567.00`
    Thousands,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping: Grouping,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            grouping: Grouping::Indian,
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, grouping: Grouping) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
        }
    }

    /// Formats `amount` with the currency symbol and exactly two decimals.
    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return format!("{}-", self.symbol);
        }
        let cents = (amount.abs() * 100.0).round() as u64;
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        let whole = group_digits(&(cents / 100).to_string(), self.grouping);
        format!("{}{}{}.{:02}", sign, self.symbol, whole, cents % 100)
    }
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match grouping {
        Grouping::Indian => 2,
        Grouping::Thousands => 3,
    };

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

/// Renders an ISO `YYYY-MM-DD` date as `Jan 5, 2024`. Anything else is shown as-is.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").or_else(|err| {
        trimmed
            .get(..10)
            .map(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d"))
            .unwrap_or(Err(err))
    });
    match parsed {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// CSS class for a category badge: lowercase with whitespace runs replaced by `-`.
pub fn category_class(category: &str) -> String {
    category
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rupees() -> CurrencyFormat {
        CurrencyFormat::default()
    }

    #[test]
    fn formats_two_decimals_with_separators() {
        assert_eq!(rupees().format(1234.5), "₹1,234.50");
        assert_eq!(rupees().format(0.0), "₹0.00");
        assert_eq!(rupees().format(3.5), "₹3.50");
        assert_eq!(rupees().format(999.999), "₹1,000.00");
    }

    #[test]
    fn indian_grouping_uses_pairs_above_thousands() {
        assert_eq!(rupees().format(123456.0), "₹1,23,456.00");
        assert_eq!(rupees().format(12345678.9), "₹1,23,45,678.90");
    }

    #[test]
    fn thousands_grouping_uses_triples() {
        let dollars = CurrencyFormat::new("$", Grouping::Thousands);
        assert_eq!(dollars.format(12345678.9), "$12,345,678.90");
        assert_eq!(dollars.format(-60000.0), "-$60,000.00");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(rupees().format(-0.001), "₹0.00");
    }

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("2023-12-31T10:00:00Z"), "Dec 31, 2023");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn category_class_slugs_labels() {
        assert_eq!(category_class("Food"), "food");
        assert_eq!(category_class("Health  Care"), "health-care");
    }
}
