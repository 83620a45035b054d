//! Locale-aware currency rendering.
//!
//! Grouping is an explicit algorithm, not a borrowed money library: the
//! Indian numbering system groups the last three integer digits, then
//! groups of two (12,34,567). Amounts always render with exactly two
//! fractional digits and the currency symbol prefixed.

/// Formats monetary amounts for one target locale.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    symbol: &'static str,
}

impl CurrencyFormatter {
    /// Indian-locale formatter: `₹` with 3-then-2 digit grouping.
    pub fn indian() -> Self {
        Self { symbol: "₹" }
    }

    /// Render an amount. Absent amounts (no sales) render as zero.
    ///
    /// Rounds half-up at the paise, so 1234567.5 renders as
    /// "₹ 12,34,567.50". Negative amounts carry a single leading minus
    /// before the symbol: "-₹ 1,234.00".
    pub fn format(&self, amount: Option<f64>) -> String {
        let amount = amount.unwrap_or(0.0);
        let paise = (amount.abs() * 100.0).round() as u64;
        let rupees = paise / 100;
        let fraction = paise % 100;
        // A value that rounds to zero paise must not render as "-₹ 0.00".
        let sign = if amount < 0.0 && paise > 0 { "-" } else { "" };
        format!(
            "{sign}{} {}.{fraction:02}",
            self.symbol,
            group_indian(&rupees.to_string())
        )
    }
}

/// Insert Indian-system grouping separators into a plain digit string:
/// last group of 3, then groups of 2 leftward.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
