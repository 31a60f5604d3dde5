//! Formatting utilities for terminal output

use crate::query::Request;

/// "1 word", "3 words"
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// One-line summary of a finished query
#[must_use]
pub fn result_summary(request: &Request, count: usize) -> String {
    match request {
        Request::Pattern(pattern) => format!("{} matching /{pattern}/", plural(count, "word")),
        Request::Scrab(letters) => format!("{} from letters '{letters}'", plural(count, "word")),
    }
}

/// Number of result lines that fit on one screen
///
/// Leaves two rows for the header and the "more" prompt.
#[must_use]
pub fn page_height(terminal_rows: u16) -> usize {
    usize::from(terminal_rows.saturating_sub(2)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_forms() {
        assert_eq!(plural(0, "word"), "0 words");
        assert_eq!(plural(1, "word"), "1 word");
        assert_eq!(plural(6, "word"), "6 words");
    }

    #[test]
    fn summary_for_each_request_kind() {
        assert_eq!(
            result_summary(&Request::Pattern("berg".into()), 3),
            "3 words matching /berg/"
        );
        assert_eq!(
            result_summary(&Request::Scrab("asdf".into()), 1),
            "1 word from letters 'asdf'"
        );
    }

    #[test]
    fn page_height_reserves_prompt_rows() {
        assert_eq!(page_height(24), 22);
        assert_eq!(page_height(2), 1);
        assert_eq!(page_height(0), 1);
    }
}
