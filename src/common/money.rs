use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }
}

/// An amount paired with the currency it is displayed in.
///
/// The backend owns all arithmetic; this type only renders amounts the way the
/// console shows them, e.g. `$1,234.56` or `-$5.00`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Money {
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Money { amount, currency }
    }

    pub fn usd(amount: Decimal) -> Self {
        Money::new(amount, Currency::USD)
    }

    /// Renders with a fixed number of fraction digits, rounding half away from zero.
    pub fn format(&self, fraction_digits: u32) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = format!(
            "{:.precision$}",
            rounded.abs(),
            precision = fraction_digits as usize
        );
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = format!("{}{}{}", sign, self.currency.symbol(), group_thousands(whole));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Whole-unit rendering used for aggregate figures.
    pub fn format_whole(&self) -> String {
        self.format(0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(2))
    }
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_two_decimals() {
        assert_eq!(Money::usd(dec!(100)).to_string(), "$100.00");
        assert_eq!(Money::usd(dec!(0.5)).to_string(), "$0.50");
        assert_eq!(Money::usd(dec!(1234567.891)).to_string(), "$1,234,567.89");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(Money::usd(dec!(-5)).to_string(), "-$5.00");
        assert_eq!(Money::usd(dec!(-0.001)).to_string(), "$0.00");
    }

    #[test]
    fn test_format_whole() {
        assert_eq!(Money::usd(dec!(2500.49)).format_whole(), "$2,500");
        assert_eq!(Money::usd(dec!(999.5)).format_whole(), "$1,000");
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(Money::usd(dec!(1)).currency.symbol(), "$");
        assert_eq!(Currency::default(), Currency::USD);
    }
}
