//! Formatting utilities for terminal output

/// Format one guess-distribution line: a star per win, then the count
///
/// The bar and the count are space-separated; a zero count has no bar.
///
/// # Examples
/// ```
/// use yorkle::output::formatters::distribution_line;
///
/// assert_eq!(distribution_line(2, 3), "2: *** 3");
/// assert_eq!(distribution_line(1, 0), "1: 0");
/// ```
#[must_use]
pub fn distribution_line(attempt_count: usize, wins: u32) -> String {
    if wins == 0 {
        format!("{attempt_count}: 0")
    } else {
        format!("{attempt_count}: {} {wins}", "*".repeat(wins as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_line_zero_wins() {
        assert_eq!(distribution_line(1, 0), "1: 0");
    }

    #[test]
    fn distribution_line_single_win() {
        assert_eq!(distribution_line(4, 1), "4: * 1");
    }

    #[test]
    fn distribution_line_many_wins() {
        assert_eq!(distribution_line(3, 17), "3: ***************** 17");
    }
}
