const MAX_LENGTH: usize = 72;

/// Keeps the first line of `content`, cut to a reasonable length for a log line. Appends an
/// ellipsis if anything was dropped.
pub(crate) fn shorten_content(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    let mut short: String = first_line.chars().take(MAX_LENGTH).collect();
    if short.len() < content.len() {
        short.push('…');
    }
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_untouched() {
        assert_eq!(shorten_content("/ping"), "/ping");
        assert_eq!(shorten_content(""), "");
    }

    #[test]
    fn long_content_cut() {
        let long = "a".repeat(100);
        let short = shorten_content(&long);
        assert_eq!(short.chars().count(), MAX_LENGTH + 1);
        assert!(short.ends_with('…'));
    }

    #[test]
    fn multiline_content_cut() {
        assert_eq!(shorten_content("/kubectl plan prod\nthanks!"), "/kubectl plan prod…");
    }
}
