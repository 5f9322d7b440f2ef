//! Line normalization.
//!
//! Raw input may use any of the three line-ending conventions (`\n`, `\r\n`,
//! or bare `\r`, possibly mixed). [`logical_lines`] collapses all three to a
//! single splitting rule before the parse engine ever sees the text, so the
//! scan loop only reasons about line content, never terminators.
//!
//! The iterator borrows from the input and allocates nothing. A trailing
//! terminator closes the last line rather than opening an empty one:
//! `"a\n"` is one line, `"a\n\n"` is two (`"a"` and `""`).

/// Iterator over the logical lines of a text, treating `\n`, `\r\n`, and
/// bare `\r` as equivalent terminators.
///
/// `str::lines` handles the first two but passes a bare `\r` through as line
/// content, which would corrupt blank-line classification downstream.
///
/// # Examples
///
/// ```rust
/// use kvtext::normalize::logical_lines;
///
/// let lines: Vec<&str> = logical_lines("a\r\nb\rc\n").collect();
/// assert_eq!(lines, vec!["a", "b", "c"]);
/// ```
pub fn logical_lines(input: &str) -> LogicalLines<'_> {
    LogicalLines { rest: input }
}

/// See [`logical_lines`].
#[derive(Debug, Clone)]
pub struct LogicalLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for LogicalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(['\n', '\r']) {
            Some(at) => {
                let line = &self.rest[..at];
                let after = &self.rest[at..];
                // \r\n consumes two bytes, \n and bare \r one each.
                let skip = if after.starts_with("\r\n") { 2 } else { 1 };
                self.rest = &after[skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &str) -> Vec<&str> {
        logical_lines(input).collect()
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert!(lines("").is_empty());
    }

    #[test]
    fn test_lf_only() {
        assert_eq!(lines("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_crlf_and_bare_cr_split_like_lf() {
        assert_eq!(lines("a\r\nb\rc"), vec!["a", "b", "c"]);
        assert_eq!(lines("a\nb"), lines("a\r\nb"));
        assert_eq!(lines("a\nb"), lines("a\rb"));
    }

    #[test]
    fn test_trailing_terminator_does_not_add_a_line() {
        assert_eq!(lines("a\n"), vec!["a"]);
        assert_eq!(lines("a\r\n"), vec!["a"]);
        assert_eq!(lines("a\r"), vec!["a"]);
    }

    #[test]
    fn test_consecutive_terminators_yield_empty_lines() {
        assert_eq!(lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(lines("\n\n"), vec!["", ""]);
        assert_eq!(lines("a\n\n"), vec!["a", ""]);
    }

    #[test]
    fn test_crlf_is_one_terminator_not_two() {
        assert_eq!(lines("a\r\n\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_mixed_endings_in_one_document() {
        assert_eq!(lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }
}
