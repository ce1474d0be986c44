//! Display formatting for amounts and shares.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

const CURRENCY_SYMBOL: &str = "¥";

/// Formats an amount as whole yuan with thousands separators, e.g. `¥3,420`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{}", CURRENCY_SYMBOL, grouped)
    } else {
        format!("{}{}", CURRENCY_SYMBOL, grouped)
    }
}

/// Formats a 0-100 share with two decimals, e.g. `28.45%`.
pub fn format_percentage(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(DISPLAY_DECIMAL_PRECISION);
    format!("{}%", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(0)), "¥0");
        assert_eq!(format_currency(dec!(324.00)), "¥324");
        assert_eq!(format_currency(dec!(3420.00)), "¥3,420");
        assert_eq!(format_currency(dec!(11799.02)), "¥11,799");
        assert_eq!(format_currency(dec!(1234567.5)), "¥1,234,568");
        assert_eq!(format_currency(dec!(-12.4)), "-¥12");
        assert_eq!(format_currency(dec!(-0.2)), "¥0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(dec!(40)), "40.00%");
        assert_eq!(format_percentage(dec!(28.98517)), "28.99%");
        assert_eq!(format_percentage(dec!(0)), "0.00%");
    }
}
