//! Digit grouping for pay amounts.

/// Formats `amount` with `separator` between groups of three digits.
///
/// # Examples
///
/// ```
/// use employee_roster::report::format_pay;
///
/// assert_eq!(format_pay(52_000, ','), "52,000");
/// assert_eq!(format_pay(1_234_567, '_'), "1_234_567");
/// assert_eq!(format_pay(999, ','), "999");
/// assert_eq!(format_pay(-20_800, ','), "-20,800");
/// ```
pub fn format_pay(amount: i64, separator: char) -> String {
    // unsigned_abs keeps i64::MIN representable
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_are_not_grouped() {
        assert_eq!(format_pay(0, ','), "0");
        assert_eq!(format_pay(7, ','), "7");
        assert_eq!(format_pay(999, ','), "999");
    }

    #[test]
    fn test_group_boundaries() {
        assert_eq!(format_pay(1_000, ','), "1,000");
        assert_eq!(format_pay(20_800, ','), "20,800");
        assert_eq!(format_pay(100_000, ','), "100,000");
        assert_eq!(format_pay(1_000_000, ','), "1,000,000");
    }

    #[test]
    fn test_underscore_separator() {
        assert_eq!(format_pay(93_600, '_'), "93_600");
    }

    #[test]
    fn test_negative_amounts_keep_sign() {
        assert_eq!(format_pay(-1, ','), "-1");
        assert_eq!(format_pay(-1_500, ','), "-1,500");
    }

    #[test]
    fn test_extreme_values() {
        assert_eq!(format_pay(i64::MAX, ','), "9,223,372,036,854,775,807");
        assert_eq!(format_pay(i64::MIN, ','), "-9,223,372,036,854,775,808");
    }
}
