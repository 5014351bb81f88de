//! Cell values.
//!
//! A [`CellValue`] is what a grid cell holds after the column's value getter
//! ran. Filter operators and comparators work on these values with loose
//! coercions: text converts to a number when it looks like one, and every
//! value has a truthiness.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value of a single grid cell.
///
/// # Example
///
/// ```
/// use horizon_lattice_grid::CellValue;
///
/// let value = CellValue::from("42");
/// assert_eq!(value.to_number(), Some(42.0));
/// assert!(value.is_truthy());
///
/// assert_eq!(CellValue::None.to_number(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// No value (null or undefined).
    #[default]
    None,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    String(String),
}

impl CellValue {
    /// Returns `true` if this is `CellValue::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, CellValue::None)
    }

    /// Returns `true` if this contains a value.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Attempts to get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Coerces the value to a number.
    ///
    /// `None` stays `None`; it is never coerced to zero. Any other value is
    /// converted with the loose numeric conversion (`true` is 1, text is
    /// parsed with [`parse_loose_number`]). Unparseable text yields `NaN`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            CellValue::None => None,
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(n) => Some(*n),
            CellValue::String(s) => Some(parse_loose_number(s)),
        }
    }

    /// Returns the truthiness of the value.
    ///
    /// `None`, `false`, zero, `NaN` and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::None => false,
            CellValue::Bool(b) => *b,
            CellValue::Int(n) => *n != 0,
            CellValue::Float(n) => *n != 0.0 && !n.is_nan(),
            CellValue::String(s) => !s.is_empty(),
        }
    }

    /// Returns the text shown for this value in a plain cell.
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::None => String::new(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::None => write!(f, "null"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) if n.is_nan() => write!(f, "NaN"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

/// Parses text the way the grid's numeric filter input does.
///
/// Surrounding whitespace is ignored and empty text is zero. Decimal and
/// exponent notation, `Infinity` and the `0x`/`0o`/`0b` radix prefixes are
/// accepted; anything else yields `NaN`.
pub fn parse_loose_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
        }
    }

    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if body == "Infinity" {
        return sign * f64::INFINITY;
    }

    let well_formed = body.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !well_formed {
        return f64::NAN;
    }

    body.parse::<f64>().map_or(f64::NAN, |n| sign * n)
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

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(CellValue::None, Into::into)
    }
}
