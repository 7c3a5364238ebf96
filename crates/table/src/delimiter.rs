use crate::error::ParseError;
use std::fmt;

/// Character separating cells within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Tab,
    Comma,
    Semicolon,
}

impl Delimiter {
    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
        }
    }

    /// Detect the delimiter from the first line of `text`.
    ///
    /// Counts tabs and commas up to the first `\n` or `\r`; the character with
    /// the strictly higher count wins and equal counts (including none of
    /// either) fail. With `semicolon` set, semicolons take part in the count
    /// too and the unique maximum of the three wins.
    pub fn detect(text: &str, semicolon: bool) -> Result<Delimiter, ParseError> {
        let mut tabs = 0usize;
        let mut commas = 0usize;
        let mut semicolons = 0usize;

        for b in text.bytes() {
            match b {
                b'\t' => tabs += 1,
                b',' => commas += 1,
                b';' if semicolon => semicolons += 1,
                b'\n' | b'\r' => break,
                _ => {}
            }
        }

        let ambiguous = ParseError::AmbiguousDelimiter {
            tabs,
            commas,
            semicolons,
        };

        let mut counts = [
            (Delimiter::Tab, tabs),
            (Delimiter::Comma, commas),
            (Delimiter::Semicolon, semicolons),
        ];
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let (winner, top) = counts[0];
        if top == 0 || top == counts[1].1 {
            return Err(ambiguous);
        }
        Ok(winner)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Delimiter::Tab => "tab",
            Delimiter::Comma => "comma",
            Delimiter::Semicolon => "semicolon",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_tab() {
        assert_eq!(Delimiter::detect("a\tb\tc", false), Ok(Delimiter::Tab));
    }

    #[test]
    fn test_detect_comma() {
        assert_eq!(Delimiter::detect("a,b,c", false), Ok(Delimiter::Comma));
    }

    #[test]
    fn test_detect_majority() {
        assert_eq!(Delimiter::detect("a\tb, c\td", false), Ok(Delimiter::Tab));
        assert_eq!(Delimiter::detect("a,b\tc,d", false), Ok(Delimiter::Comma));
    }

    #[test]
    fn test_detect_equal_counts_fail() {
        assert_eq!(
            Delimiter::detect("a\tb,c", false),
            Err(ParseError::AmbiguousDelimiter {
                tabs: 1,
                commas: 1,
                semicolons: 0
            })
        );
        assert!(Delimiter::detect("abc", false).is_err());
        assert!(Delimiter::detect("", false).is_err());
    }

    #[test]
    fn test_detect_stops_at_first_line() {
        assert!(Delimiter::detect("abc\na,b,c", false).is_err());
        assert!(Delimiter::detect("abc\ra,b,c", false).is_err());
        assert_eq!(Delimiter::detect("a\tb\r\nc,d,e", false), Ok(Delimiter::Tab));
    }

    #[test]
    fn test_semicolon_needs_opt_in() {
        assert!(Delimiter::detect("a;b;c", false).is_err());
        assert_eq!(Delimiter::detect("a;b;c", true), Ok(Delimiter::Semicolon));
        assert!(Delimiter::detect("a;b,c", true).is_err());
        assert_eq!(Delimiter::detect("a,b,c;d", true), Ok(Delimiter::Comma));
    }
}
