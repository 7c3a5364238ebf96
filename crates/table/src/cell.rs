use serde::{Deserialize, Serialize};
use std::fmt;

/// A single table cell: an integer, a float, or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    /// Infer the type of a raw cell.
    ///
    /// Tries a strict integer parse, then a strict decimal float parse, and
    /// falls back to the text itself. The whole text must be consumed by a
    /// numeric parse; surrounding whitespace is not trimmed. Empty text is an
    /// empty string, never zero.
    ///
    /// With `decimal_comma` set, a single `,` is also accepted as the decimal
    /// separator.
    #[must_use]
    pub fn infer(text: &str, decimal_comma: bool) -> CellValue {
        if text.is_empty() {
            return CellValue::String(String::new());
        }

        if let Ok(i) = text.parse::<i64>() {
            return CellValue::Int(i);
        }

        if let Some(f) = parse_decimal(text, decimal_comma) {
            return CellValue::Float(f);
        }

        CellValue::String(text.to_string())
    }

    /// Name of the stored variant, used in type mismatch errors
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Int(_) => i64::TYPE_NAME,
            CellValue::Float(_) => f64::TYPE_NAME,
            CellValue::String(_) => String::TYPE_NAME,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, CellValue::String(_))
    }
}

/// Parse a locale-independent decimal number.
///
/// Accepts an optional sign, digits with at most one decimal separator, and an
/// optional exponent. Spelled-out values such as `inf` or `NaN` are rejected,
/// but an exponent beyond the `f64` range still parses and saturates to an
/// infinity (`1e999` is `+inf`, `-1e999` is `-inf`), as `strtod` does.
fn parse_decimal(text: &str, decimal_comma: bool) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut pos = 0;
    let mut separator = None;
    let mut digits = 0usize;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    while let Some(&b) = bytes.get(pos) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' | b',' if separator.is_none() => {
                if b == b',' && !decimal_comma {
                    return None;
                }
                separator = Some(pos);
            }
            b'e' | b'E' => break,
            _ => return None,
        }
        pos += 1;
    }

    if digits == 0 {
        return None;
    }

    if pos < bytes.len() {
        // Exponent: e[+-]digits
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if pos == bytes.len() || !bytes[pos..].iter().all(u8::is_ascii_digit) {
            return None;
        }
    }

    match separator {
        Some(at) if bytes[at] == b',' => {
            let mut normalized = text.to_string();
            normalized.replace_range(at..=at, ".");
            normalized.parse().ok()
        }
        _ => text.parse().ok(),
    }
}

/// Strict extraction of a Rust value from a [`CellValue`].
///
/// Only the matching variant converts; there is no coercion between integers,
/// floats, and strings.
pub trait FromCell: Sized {
    /// Name reported when the stored variant does not match
    const TYPE_NAME: &'static str;

    fn from_cell(cell: &CellValue) -> Option<Self>;
}

impl FromCell for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn from_cell(cell: &CellValue) -> Option<Self> {
        cell.as_int()
    }
}

impl FromCell for f64 {
    const TYPE_NAME: &'static str = "float";

    fn from_cell(cell: &CellValue) -> Option<Self> {
        cell.as_float()
    }
}

impl FromCell for String {
    const TYPE_NAME: &'static str = "string";

    fn from_cell(cell: &CellValue) -> Option<Self> {
        cell.as_str().map(str::to_string)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::String(String::new())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(fl) => write!(f, "{fl}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_empty() {
        assert_eq!(CellValue::infer("", false), CellValue::String(String::new()));
    }

    #[test]
    fn test_infer_int() {
        assert_eq!(CellValue::infer("1", false), CellValue::Int(1));
        assert_eq!(CellValue::infer("-123", false), CellValue::Int(-123));
        assert_eq!(CellValue::infer("+7", false), CellValue::Int(7));
    }

    #[test]
    fn test_infer_float() {
        assert_eq!(CellValue::infer("4.5", false), CellValue::Float(4.5));
        assert_eq!(CellValue::infer("-2.25", false), CellValue::Float(-2.25));
        assert_eq!(CellValue::infer(".5", false), CellValue::Float(0.5));
        assert_eq!(CellValue::infer("1e3", false), CellValue::Float(1000.0));
        assert_eq!(CellValue::infer("2.5E-1", false), CellValue::Float(0.25));
    }

    #[test]
    fn test_infer_int_overflow_is_float() {
        assert_eq!(
            CellValue::infer("99999999999999999999", false),
            CellValue::Float(1e20)
        );
    }

    #[test]
    fn test_infer_string() {
        assert_eq!(
            CellValue::infer("This is a simple test.", false),
            CellValue::String("This is a simple test.".to_string())
        );
        assert!(CellValue::infer("12abc", false).is_string());
        assert!(CellValue::infer("1.2.3", false).is_string());
        assert!(CellValue::infer("1e", false).is_string());
        assert!(CellValue::infer("-", false).is_string());
        assert!(CellValue::infer(".", false).is_string());
    }

    #[test]
    fn test_infer_does_not_trim() {
        assert_eq!(CellValue::infer(" 1", false), CellValue::String(" 1".to_string()));
        assert_eq!(CellValue::infer("4.5 ", false), CellValue::String("4.5 ".to_string()));
    }

    #[test]
    fn test_infer_rejects_special_floats() {
        assert!(CellValue::infer("inf", false).is_string());
        assert!(CellValue::infer("NaN", false).is_string());
        assert!(CellValue::infer("-infinity", false).is_string());
    }

    #[test]
    fn test_infer_exponent_overflow_saturates() {
        assert_eq!(CellValue::infer("1e999", false), CellValue::Float(f64::INFINITY));
        assert_eq!(
            CellValue::infer("-1e999", false),
            CellValue::Float(f64::NEG_INFINITY)
        );
        assert_eq!(CellValue::infer("1e-999", false), CellValue::Float(0.0));
    }

    #[test]
    fn test_infer_decimal_comma() {
        assert!(CellValue::infer("4,5", false).is_string());
        assert_eq!(CellValue::infer("4,5", true), CellValue::Float(4.5));
        assert_eq!(CellValue::infer("123,456", true), CellValue::Float(123.456));
        assert!(CellValue::infer("1,2,3", true).is_string());
        assert_eq!(CellValue::infer("4.5", true), CellValue::Float(4.5));
    }

    #[test]
    fn test_strict_extraction() {
        assert_eq!(i64::from_cell(&CellValue::Int(3)), Some(3));
        assert_eq!(f64::from_cell(&CellValue::Int(3)), None);
        assert_eq!(i64::from_cell(&CellValue::Float(3.0)), None);
        assert_eq!(
            String::from_cell(&CellValue::from("x")),
            Some("x".to_string())
        );
        assert_eq!(String::from_cell(&CellValue::Int(1)), None);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(CellValue::Int(1).type_name(), "integer");
        assert_eq!(CellValue::Float(1.0).type_name(), "float");
        assert_eq!(CellValue::from("a").type_name(), "string");
    }
}
