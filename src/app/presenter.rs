use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy::MidpointAwayFromZero;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats an amount for display, e.g. `₹ 1,161,695.38`.
///
/// Missing or non-finite amounts show as zero rather than failing.
pub fn format_currency(value: Option<f64>) -> String {
    let amount = value
        .filter(|v| v.is_finite())
        .map(format_amount)
        .unwrap_or_else(|| "0.00".to_owned());
    format!("{CURRENCY_SYMBOL} {amount}")
}

fn format_amount(value: f64) -> String {
    // Decimal tops out around 7.9e28; beyond that plain f64 formatting is close enough
    let plain = match Decimal::from_f64_retain(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(2, MidpointAwayFromZero);
            let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
            format!("{rounded:.2}")
        }
        None => format!("{value:.2}"),
    };

    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn formats_with_grouping_and_two_decimals() {
        assert_eq!(format_currency(Some(1_161_695.38)), "₹ 1,161,695.38");
        assert_eq!(format_currency(Some(600_000.0)), "₹ 600,000.00");
        assert_eq!(format_currency(Some(999.5)), "₹ 999.50");
        assert_eq!(format_currency(Some(1000.0)), "₹ 1,000.00");
        assert_eq!(format_currency(Some(12.0)), "₹ 12.00");
        assert_eq!(format_currency(Some(0.0)), "₹ 0.00");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_currency(Some(1_161_695.381_759_7)), "₹ 1,161,695.38");
        assert_eq!(format_currency(Some(0.125)), "₹ 0.13");
        assert_eq!(format_currency(Some(999_999.999)), "₹ 1,000,000.00");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_currency(Some(-1234.5)), "₹ -1,234.50");
        assert_eq!(format_currency(Some(-0.001)), "₹ 0.00");
    }

    #[test]
    fn missing_or_non_finite_is_zero() {
        assert_eq!(format_currency(None), "₹ 0.00");
        assert_eq!(format_currency(Some(f64::NAN)), "₹ 0.00");
        assert_eq!(format_currency(Some(f64::INFINITY)), "₹ 0.00");
        assert_eq!(format_currency(Some(f64::NEG_INFINITY)), "₹ 0.00");
    }

    #[test]
    fn huge_amounts_still_format() {
        let text = format_currency(Some(1e30));
        assert!(text.starts_with("₹ 1,000,000,"), "{text}");
        assert!(text.ends_with(".00"), "{text}");
    }

    #[test]
    fn groups_digits() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
