//! Configuration for manifest generation
//!
//! This module controls how forgiving the builder is with its input rows and how the
//! serialized document is laid out.

/// Default indentation of the serialized manifest, in spaces.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Configuration for turning input rows into a manifest document
///
/// The default is lenient and matches how spreadsheet-driven manifest tooling has always
/// behaved: the first `Root` row wins and rows of any other `Type` are ignored. The strict
/// preset turns both situations into errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Fail with [`crate::Error::DuplicateRoot`] when more than one `Root` row exists
    /// instead of silently using the first one
    pub reject_duplicate_roots: bool,

    /// Fail with [`crate::Error::UnknownRowType`] on rows whose `Type` is not `Root`,
    /// `Audio`, `Video` or `Subtitle` instead of skipping them
    pub reject_unknown_rows: bool,

    /// Spaces per nesting level in the serialized document (default: 4)
    pub indent_width: usize,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl ManifestConfig {
    /// Creates a lenient configuration
    ///
    /// Uses the first `Root` row and skips unknown rows.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            reject_duplicate_roots: false,
            reject_unknown_rows: false,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Creates a strict configuration
    ///
    /// Requires exactly one `Root` row and only known row kinds.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            reject_duplicate_roots: true,
            reject_unknown_rows: true,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Returns this configuration with a different indentation width.
    #[must_use]
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_config_presets() {
        let lenient = ManifestConfig::lenient();
        assert!(!lenient.reject_duplicate_roots);
        assert!(!lenient.reject_unknown_rows);
        assert_eq!(lenient.indent_width, 4);

        let strict = ManifestConfig::strict();
        assert!(strict.reject_duplicate_roots);
        assert!(strict.reject_unknown_rows);
        assert_eq!(strict.indent_width, 4);
    }

    #[test]
    fn test_default_config() {
        assert_eq!(ManifestConfig::default(), ManifestConfig::lenient());
        assert_eq!(ManifestConfig::strict().with_indent_width(2).indent_width, 2);
    }
}
