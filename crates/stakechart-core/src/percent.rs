//! Percentage normalization for legends and tooltips.
//!
//! Zero or negative totals come up in practice (sold-out profiles, empty portfolios), and
//! must render as a zero-filled wheel rather than leak `NaN`/`Infinity` into the output.

/// Percent of `total` that `value` represents; `0.0` whenever the total is not positive.
pub fn percentage(value: f64, total: f64) -> f64 {
    if !total.is_finite() || total <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / total) * 100.0
}

/// Rounds to one fractional digit, the precision every percentage is shown at.
pub fn round1(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    let r = (v * 10.0).round() / 10.0;
    if r == 0.0 { 0.0 } else { r }
}

/// Display form with exactly one fractional digit (`"37.5"`), matching JS `toFixed(1)`.
pub fn percent_display(value: f64, total: f64) -> String {
    format!("{:.1}", round1(percentage(value, total)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_percentages() {
        assert_eq!(percentage(30.0, 100.0), 30.0);
        assert!((percentage(1.0, 3.0) * 3.0 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_yields_zero_not_nan() {
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, -2.0), 0.0);
        assert_eq!(percent_display(5.0, 0.0), "0.0");
    }

    #[test]
    fn display_rounds_to_one_digit() {
        assert_eq!(percent_display(1.0, 3.0), "33.3");
        assert_eq!(percent_display(2.0, 3.0), "66.7");
        assert_eq!(percent_display(50.0, 100.0), "50.0");
    }

    #[test]
    fn round1_never_emits_negative_zero() {
        assert_eq!(round1(-0.01).to_string(), "0");
        assert_eq!(round1(f64::NAN), 0.0);
    }

    #[test]
    fn three_way_split_sums_within_rounding_tolerance() {
        for (a, b, c) in [(30u64, 50u64, 20u64), (1, 1, 1), (997, 2, 1), (0, 10, 5)] {
            let total = (a + b + c) as f64;
            let sum: f64 = [a, b, c]
                .iter()
                .map(|v| round1(percentage(*v as f64, total)))
                .sum();
            assert!(
                (sum - 100.0).abs() <= 0.1 + 1e-9,
                "({a},{b},{c}) summed to {sum}"
            );
        }
    }
}
