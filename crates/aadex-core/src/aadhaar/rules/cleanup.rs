//! Shared cleanup transforms for name fields.

use super::patterns::{RELATION_SPLIT, TRAILING_INITIAL, WHITESPACE_RUN};

/// Take the part of a raw capture before any relation prefix
/// (S/O, C/O, W/O, D/O).
pub fn strip_relation_suffix(raw: &str) -> &str {
    RELATION_SPLIT.split(raw).next().unwrap_or("")
}

/// Strip trailing single-letter relation initials (C, W, S, D).
///
/// A name line above an `S/O:` line often picks up the lone `S` when the
/// two run together in OCR output. Multiple initials can stack, so the
/// strip repeats until the text stops changing, which also makes the
/// transform idempotent.
pub fn strip_trailing_initials(name: &str) -> String {
    let mut current = name.to_string();
    loop {
        let stripped = TRAILING_INITIAL.replace(&current, "");
        if stripped == current {
            return current;
        }
        current = stripped.into_owned();
    }
}

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Full name cleanup: relation suffix, trailing initials, extra spaces.
pub fn clean_name(raw: &str) -> String {
    let head = strip_relation_suffix(raw);
    let head = strip_trailing_initials(head.trim());
    collapse_whitespace(&head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_relation_suffix() {
        assert_eq!(strip_relation_suffix("RAM KUMAR S/O SHYAM KUMAR"), "RAM KUMAR");
        assert_eq!(strip_relation_suffix("Asha Devi w/o Mohan Lal"), "Asha Devi");
        assert_eq!(strip_relation_suffix("No Prefix Here"), "No Prefix Here");
        assert_eq!(strip_relation_suffix("S/O RAM"), "");
    }

    #[test]
    fn test_strip_trailing_initials() {
        assert_eq!(strip_trailing_initials("Ram Kumar S"), "Ram Kumar");
        assert_eq!(strip_trailing_initials("Ravi C D"), "Ravi");
        assert_eq!(strip_trailing_initials("Ram Kumar"), "Ram Kumar");
        // A lone initial has no leading whitespace to anchor on
        assert_eq!(strip_trailing_initials("C"), "C");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Ram   Kumar \n Singh "), "Ram Kumar Singh");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("RAM KUMAR S/O SHYAM KUMAR"), "RAM KUMAR");
        assert_eq!(clean_name("Ram  Kumar S"), "Ram Kumar");
        assert_eq!(clean_name("  Priya   Sharma  "), "Priya Sharma");
        assert_eq!(clean_name("S/O RAM"), "");
    }

    #[test]
    fn test_clean_name_idempotent() {
        let inputs = [
            "RAM KUMAR S/O SHYAM KUMAR",
            "Ravi C D",
            "Ram  Kumar S",
            "Priya Sharma",
            "",
        ];

        for input in inputs {
            let once = clean_name(input);
            assert_eq!(clean_name(&once), once, "cleanup not idempotent for {input:?}");
        }
    }
}
