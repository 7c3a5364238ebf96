/// Table parser options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Whether double-quoted cells are recognized (default: true)
    pub quoting: bool,
    /// Semicolon delimiter detection plus decimal-comma floats (default: false)
    pub continental: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            quoting: true,
            continental: false,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for semicolon-separated text using `,` as the decimal separator
    #[must_use]
    pub fn continental() -> Self {
        ParseOptions {
            continental: true,
            ..Default::default()
        }
    }

    /// Set whether quoted cells are recognized
    #[must_use]
    pub fn with_quoting(mut self, quoting: bool) -> Self {
        self.quoting = quoting;
        self
    }

    /// Set whether the continental dialect is accepted
    #[must_use]
    pub fn with_continental(mut self, continental: bool) -> Self {
        self.continental = continental;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert!(options.quoting);
        assert!(!options.continental);
    }

    #[test]
    fn test_builders() {
        let options = ParseOptions::new().with_quoting(false).with_continental(true);
        assert!(!options.quoting);
        assert!(options.continental);
        assert_eq!(
            ParseOptions::continental(),
            ParseOptions::new().with_continental(true)
        );
    }
}
