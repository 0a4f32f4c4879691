use super::brazilian::grouped;
use crate::domain::money::Money;

pub const CURRENCY_SYMBOL: &str = "R$";

/// Renders an amount as BRL, e.g. `R$ 1.234,56` or `-R$ 10,00`.
///
/// Unlike [`format`](super::format), zero is shown as `R$ 0,00`.
pub fn format_currency(amount: Money) -> String {
    let (negative, body) = grouped(amount.value(), 2);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL} {body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Money::new(dec!(1234.5))), "R$ 1.234,50");
        assert_eq!(format_currency(Money::new(dec!(980))), "R$ 980,00");
        assert_eq!(format_currency(Money::new(dec!(1800.012))), "R$ 1.800,01");
    }

    #[test]
    fn test_format_currency_zero_and_negative() {
        assert_eq!(format_currency(Money::ZERO), "R$ 0,00");
        assert_eq!(format_currency(Money::new(dec!(-50))), "-R$ 50,00");
    }
}
