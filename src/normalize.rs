//! Value normalization for manifest text.
//!
//! Spreadsheet exports hand over pixel dimensions and frame rates as floats (`1920.0`,
//! `23.976000001`) and identifiers with or without their namespace prefix. The helpers here
//! turn those into the exact strings the manifest carries:
//!
//! - [`normalize_numeric_text`] rounds to two decimals, keeps one decimal for integral values
//!   and drops trailing zeros otherwise (`1920.0`, `23.98`, `29.5`)
//! - [`apply_prefix`] adds a namespace prefix once and only once
//! - [`derive_alid`] maps an experience identifier to its ALID

use crate::{manifest::schema, rows::RowValue};

/// Renders a numeric cell the way the manifest expects it.
///
/// Numbers, and text that parses as a number after trimming, are rounded to two decimal
/// places. Integral results keep a single decimal (`23.0`); other results drop trailing zeros
/// (`23.98`, `29.5`). Text that is not numeric passes through unchanged, and an absent value
/// stays absent.
///
/// # Examples
///
/// ```rust
/// use mmcgen::{normalize_numeric_text, RowValue};
///
/// let width = RowValue::from(1920);
/// assert_eq!(normalize_numeric_text(Some(&width)).as_deref(), Some("1920.0"));
///
/// let rate = RowValue::from("23.976");
/// assert_eq!(normalize_numeric_text(Some(&rate)).as_deref(), Some("23.98"));
///
/// let text = RowValue::from("n/a");
/// assert_eq!(normalize_numeric_text(Some(&text)).as_deref(), Some("n/a"));
///
/// assert_eq!(normalize_numeric_text(None), None);
/// ```
#[must_use]
pub fn normalize_numeric_text(value: Option<&RowValue>) -> Option<String> {
    let value = value?;
    match value.as_f64() {
        Some(number) => Some(format_rounded(number)),
        None => Some(value.to_text()),
    }
}

fn format_rounded(number: f64) -> String {
    if number.is_nan() {
        return "nan".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let rounded = format!("{number:.2}");
    // Integral check runs on the rounded value: 19.999 -> 20.00 -> 20.0
    match rounded.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 => format!("{value:.1}"),
        _ => rounded
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string(),
    }
}

/// Prepends `prefix` to `value` unless `value` is empty or already carries it.
///
/// Applying the same prefix twice gives the same result as applying it once.
///
/// # Examples
///
/// ```rust
/// use mmcgen::apply_prefix;
///
/// let once = apply_prefix("V1", "md:vidtrackid:org:");
/// assert_eq!(once, "md:vidtrackid:org:V1");
/// assert_eq!(apply_prefix(&once, "md:vidtrackid:org:"), once);
/// assert_eq!(apply_prefix("", "md:vidtrackid:org:"), "");
/// ```
#[must_use]
pub fn apply_prefix(value: &str, prefix: &str) -> String {
    if value.is_empty() || value.starts_with(prefix) {
        value.to_string()
    } else {
        format!("{prefix}{value}")
    }
}

/// Derives the ALID that maps to an experience.
///
/// The experience identifier is prefixed as usual, its `md:experienceid:org:` prefix is
/// swapped for `md:ALID:org:`, and every `:experience` substring is removed.
///
/// # Examples
///
/// ```rust
/// use mmcgen::derive_alid;
///
/// assert_eq!(derive_alid("E1"), "md:ALID:org:E1");
/// assert_eq!(derive_alid("md:experienceid:org:title:experience"), "md:ALID:org:title");
/// ```
#[must_use]
pub fn derive_alid(experience_id: &str) -> String {
    apply_prefix(experience_id, schema::EXPERIENCE_ID_PREFIX)
        .replace(schema::EXPERIENCE_ID_PREFIX, schema::ALID_PREFIX)
        .replace(":experience", "")
}
