/// Render a count as a percentage of `total`, rounded to two decimals with a
/// trailing `%`.
///
/// A zero `total` renders as `"0%"` rather than dividing.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_percentage;
///
/// assert_eq!(format_percentage(1, 3), "33.33%");
/// assert_eq!(format_percentage(5, 5), "100.00%");
/// assert_eq!(format_percentage(0, 4), "0.00%");
/// assert_eq!(format_percentage(0, 0), "0%");
/// ```
pub fn format_percentage(count: u64, total: u64) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.2}%", count as f64 / total as f64 * 100.0)
}

/// Format a work-day figure with two decimal places for display.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_days;
///
/// assert_eq!(format_days(5.0), "5.00");
/// assert_eq!(format_days(2.5), "2.50");
/// assert_eq!(format_days(0.0), "0.00");
/// ```
pub fn format_days(days: f64) -> String {
    format!("{:.2}", days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage_thirds() {
        assert_eq!(format_percentage(1, 3), "33.33%");
        assert_eq!(format_percentage(2, 3), "66.67%");
    }

    #[test]
    fn test_format_percentage_total_row() {
        assert_eq!(format_percentage(7, 7), "100.00%");
    }

    #[test]
    fn test_format_percentage_zero_total() {
        assert_eq!(format_percentage(0, 0), "0%");
    }

    #[test]
    fn test_format_days_two_decimals() {
        assert_eq!(format_days(1.666_666), "1.67");
        assert_eq!(format_days(10.0), "10.00");
    }
}
