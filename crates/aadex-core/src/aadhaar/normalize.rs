//! Text normalization for extractor input.

/// Split raw text into trimmed, non-empty lines in source order.
///
/// Extractors that need multi-line windows (address block, dual-script
/// names) keep working on the original text; this line view backs the
/// line-oriented scans.
pub fn lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_trim_and_drop_blanks() {
        let text = "  Ram Kumar  \n\n\t DOB: 15/08/1990\n   \nMale";
        assert_eq!(lines(text), vec!["Ram Kumar", "DOB: 15/08/1990", "Male"]);
    }

    #[test]
    fn test_lines_preserve_order() {
        let text = "first\nsecond\nthird";
        assert_eq!(lines(text), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_lines_empty_input() {
        assert!(lines("").is_empty());
        assert!(lines("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_lines_handle_crlf() {
        assert_eq!(lines("one\r\ntwo\r\n"), vec!["one", "two"]);
    }
}
