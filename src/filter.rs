/// Opening delimiter of a PGN tag pair, e.g. `[Event "..."]`.
pub const TAG_DELIMITER: char = '[';

/// Trims every line and drops the ones containing a tag-pair delimiter.
///
/// A line is dropped in full as soon as `[` appears anywhere in it, so
/// movetext sharing a line with a tag (or carrying `[%clk ...]` comment
/// commands) is dropped as well.
pub fn movetext_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.contains(TAG_DELIMITER))
}

#[cfg(test)]
mod tests {
    use super::movetext_lines;

    #[test]
    fn test_tag_lines_are_removed() {
        let pgn = "[Event \"Test\"]\n[Site \"?\"]\n\n1. e4 e5 2. Nf3 1-0\n";
        let lines: Vec<&str> = movetext_lines(pgn).collect();

        assert_eq!(lines, vec!["", "1. e4 e5 2. Nf3 1-0"]);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let lines: Vec<&str> = movetext_lines("   1. d4 d5   \r\n\t2. c4\n").collect();
        assert_eq!(lines, vec!["1. d4 d5", "2. c4"]);
    }

    #[test]
    fn test_line_with_delimiter_anywhere_is_dropped_in_full() {
        let pgn = "1. e4 { [%clk 0:03:00] } e5 2. Nf3\n3. Bb5 a6";
        let lines: Vec<&str> = movetext_lines(pgn).collect();

        assert_eq!(lines, vec!["3. Bb5 a6"]);
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert_eq!(movetext_lines("").count(), 0);
    }

    #[test]
    fn test_order_is_preserved() {
        let pgn = "a\n[b]\nc\nd";
        let lines: Vec<&str> = movetext_lines(pgn).collect();
        assert_eq!(lines, vec!["a", "c", "d"]);
    }
}
