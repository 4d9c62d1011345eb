use crate::output::Line;

/// `count` numbered copies of `message`, produced lazily. Non-positive counts
/// produce nothing.
pub fn lines(message: &str, count: i64) -> impl Iterator<Item = Line> + '_ {
    (1..=count).map(move |index| Line::plain(format!("{index}. {message}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: impl Iterator<Item = Line>) -> Vec<String> {
        lines.map(|line| line.text).collect()
    }

    #[test]
    fn numbers_lines_from_one() {
        assert_eq!(
            text(lines("hi there", 3)),
            ["1. hi there", "2. hi there", "3. hi there"]
        );
    }

    #[test]
    fn zero_count_is_empty() {
        assert_eq!(lines("hi", 0).count(), 0);
    }

    #[test]
    fn negative_count_is_empty() {
        assert_eq!(lines("hi", -1).count(), 0);
        assert_eq!(lines("hi", i64::MIN).count(), 0);
    }

    #[test]
    fn huge_count_is_produced_on_demand() {
        assert_eq!(
            text(lines("hi", i64::MAX).take(3)),
            ["1. hi", "2. hi", "3. hi"]
        );
    }

    #[test]
    fn empty_message_keeps_prefix() {
        assert_eq!(text(lines("", 1)), ["1. "]);
    }
}
