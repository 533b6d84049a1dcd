pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Renders an amount with two decimals behind the currency symbol.
pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    format!("{currency_symbol}{:.2}", round_cents(amount))
}

/// Renders a discount as a deduction, e.g. `-$514.99`.
pub fn format_deduction(amount: f64, currency_symbol: &str) -> String {
    format!("-{}", format_amount(amount, currency_symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(514.994), 514.99);
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(0.0), 0.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1029.98, "$"), "$1029.98");
        assert_eq!(format_amount(0.0, "$"), "$0.00");
        assert_eq!(format_amount(49.9, "€"), "€49.90");
    }

    #[test]
    fn test_format_deduction() {
        assert_eq!(format_deduction(514.99, "$"), "-$514.99");
        assert_eq!(format_deduction(0.0, "$"), "-$0.00");
    }
}
