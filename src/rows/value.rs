//! Cell values of an input row.
//!
//! Rows come from spreadsheets or CSV exports, so a cell is either free text or a number the
//! upstream reader already typed. [`RowValue`] keeps that distinction so numeric columns such
//! as `Width` or `FrameRate` can be normalized without guessing, while identifier columns are
//! rendered back to text with [`RowValue::to_text`].

use std::fmt;

/// A single cell of a [`crate::RowRecord`].
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    /// Free text, exactly as read
    Text(String),
    /// A whole number
    Integer(i64),
    /// A floating point number
    Float(f64),
}

impl RowValue {
    /// Returns `true` if the value carries no usable content.
    ///
    /// Text is blank when it is empty or whitespace only; numbers are never blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            RowValue::Text(text) => text.trim().is_empty(),
            RowValue::Integer(_) | RowValue::Float(_) => false,
        }
    }

    /// Returns the numeric interpretation of this value, if it has one.
    ///
    /// Text is trimmed before parsing, so `" 23.976 "` is numeric.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RowValue::Text(text) => text.trim().parse::<f64>().ok(),
            #[allow(clippy::cast_precision_loss)]
            RowValue::Integer(value) => Some(*value as f64),
            RowValue::Float(value) => Some(*value),
        }
    }

    /// Renders the value as text.
    ///
    /// Integral floats keep a single decimal (`1920.0`), matching how spreadsheet exports
    /// print float columns.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowValue::Text(text) => f.write_str(text),
            RowValue::Integer(value) => write!(f, "{value}"),
            RowValue::Float(value) => {
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
                    write!(f, "{value:.1}")
                } else {
                    write!(f, "{value}")
                }
            }
        }
    }
}

impl From<&str> for RowValue {
    fn from(value: &str) -> Self {
        RowValue::Text(value.to_string())
    }
}

impl From<String> for RowValue {
    fn from(value: String) -> Self {
        RowValue::Text(value)
    }
}

impl From<i64> for RowValue {
    fn from(value: i64) -> Self {
        RowValue::Integer(value)
    }
}

impl From<i32> for RowValue {
    fn from(value: i32) -> Self {
        RowValue::Integer(i64::from(value))
    }
}

impl From<u32> for RowValue {
    fn from(value: u32) -> Self {
        RowValue::Integer(i64::from(value))
    }
}

impl From<f64> for RowValue {
    fn from(value: f64) -> Self {
        RowValue::Float(value)
    }
}
