//! Untyped input rows.

use std::collections::BTreeMap;

use crate::rows::{columns, RowKind, RowValue};

/// One input row: a mapping from column name to cell value.
///
/// This is the shape a CSV reader or spreadsheet export naturally produces. Blank cells
/// should simply be left out; lookups through [`RowRecord::value`] treat blank text the same
/// way as a missing column.
///
/// # Examples
///
/// ```rust
/// use mmcgen::{RowKind, RowRecord};
///
/// let row = RowRecord::new()
///     .with("Type", "Video")
///     .with("Track ID", "V1")
///     .with("Width", 1920.0);
///
/// assert_eq!(row.kind(), Some(RowKind::Video));
/// assert_eq!(row.text("Track ID").as_deref(), Some("V1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowRecord {
    fields: BTreeMap<String, RowValue>,
}

impl RowRecord {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell and returns the row, for fluent construction.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<RowValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Sets a cell, replacing any previous value of that column.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<RowValue>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Returns the raw cell of `column`, including blank text.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&RowValue> {
        self.fields.get(column)
    }

    /// Returns the cell of `column` unless it is missing or blank.
    #[must_use]
    pub fn value(&self, column: &str) -> Option<&RowValue> {
        self.fields.get(column).filter(|value| !value.is_blank())
    }

    /// Returns the cell of `column` rendered as text, unless it is missing or blank.
    #[must_use]
    pub fn text(&self, column: &str) -> Option<String> {
        self.value(column).map(RowValue::to_text)
    }

    /// The row kind named by the `Type` column, if it is one of the known kinds.
    #[must_use]
    pub fn kind(&self) -> Option<RowKind> {
        self.get(columns::TYPE)
            .and_then(|value| value.to_text().parse::<RowKind>().ok())
    }

    /// Number of cells in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(column, value)` pairs in column-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RowValue)> {
        self.fields.iter().map(|(column, value)| (column.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for RowRecord
where
    K: Into<String>,
    V: Into<RowValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RowRecord::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_cells_read_as_missing() {
        let row = RowRecord::new()
            .with("Type", "Subtitle")
            .with("FrameRate", "  ");

        assert!(row.get("FrameRate").is_some());
        assert!(row.value("FrameRate").is_none());
        assert!(row.text("FrameRate").is_none());
        assert!(row.text("Language").is_none());
    }

    #[test]
    fn test_kind_lookup() {
        let root: RowRecord = [("Type", "Root")].into_iter().collect();
        assert_eq!(root.kind(), Some(RowKind::Root));

        let lower = RowRecord::new().with("Type", "audio");
        assert_eq!(lower.kind(), None);

        assert_eq!(RowRecord::new().kind(), None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut row = RowRecord::new().with("Language", "en");
        row.insert("Language", "fr");
        assert_eq!(row.len(), 1);
        assert_eq!(row.text("Language").as_deref(), Some("fr"));
    }
}
