//! Compact display of Tredit amounts ("1.2k", "3.4M").

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

/// Format `amount` for compact display.
///
/// Millions and thousands get one decimal place, rounded half-up
/// (`1_250` renders as `"1.3k"`). Smaller values are rounded to a whole
/// number and grouped with commas. Non-finite input renders as `"0"`.
pub fn format_magnitude(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    if amount >= MILLION {
        format!("{}M", one_decimal(amount / MILLION))
    } else if amount >= THOUSAND {
        format!("{}k", one_decimal(amount / THOUSAND))
    } else {
        group_thousands(amount.round() as i64)
    }
}

/// [`format_magnitude`] for whole Tredit amounts.
pub fn format_tredits(amount: u64) -> String {
    format_magnitude(amount as f64)
}

/// Render a non-negative value with exactly one decimal place.
fn one_decimal(value: f64) -> String {
    let tenths = (value * 10.0).round() as u64;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Render an integer with `,` between groups of three digits.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_render_whole() {
        assert_eq!(format_magnitude(0.0), "0");
        assert_eq!(format_magnitude(999.0), "999");
        assert_eq!(format_magnitude(42.4), "42");
        assert_eq!(format_magnitude(42.5), "43");
        assert_eq!(format_magnitude(999.4), "999");
    }

    #[test]
    fn thousands_and_millions_get_one_decimal() {
        assert_eq!(format_magnitude(1_000.0), "1.0k");
        assert_eq!(format_magnitude(1_500.0), "1.5k");
        assert_eq!(format_magnitude(12_340.0), "12.3k");
        assert_eq!(format_magnitude(999_000.0), "999.0k");
        assert_eq!(format_magnitude(1_000_000.0), "1.0M");
        assert_eq!(format_magnitude(2_300_000.0), "2.3M");
        assert_eq!(format_magnitude(1_234_000_000.0), "1234.0M");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(format_magnitude(1_250.0), "1.3k");
        assert_eq!(format_magnitude(1_249.0), "1.2k");
        assert_eq!(format_magnitude(2_450_000.0), "2.5M");
    }

    #[test]
    fn negatives_are_grouped() {
        assert_eq!(format_magnitude(-1_500.0), "-1,500");
        assert_eq!(format_magnitude(-1_234_567.0), "-1,234,567");
        assert_eq!(format_magnitude(-0.2), "0");
    }

    #[test]
    fn non_finite_renders_zero() {
        assert_eq!(format_magnitude(f64::NAN), "0");
        assert_eq!(format_magnitude(f64::INFINITY), "0");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(123_456_789), "123,456,789");
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn whole_tredits() {
        assert_eq!(format_tredits(150), "150");
        assert_eq!(format_tredits(1_500), "1.5k");
    }
}
