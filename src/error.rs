use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure is fatal to the conversion call that produced it; there is no partial output.
///
/// # Error Categories
///
/// ## Input Row Errors
/// - [`Error::MissingRoot`] - No row with `Type == Root`
/// - [`Error::DuplicateRoot`] - More than one root row under a strict configuration
/// - [`Error::MissingField`] - A required column is absent or blank
/// - [`Error::UnknownRowType`] - A row kind outside `Root`/`Audio`/`Video`/`Subtitle` under a
///   strict configuration
///
/// ## Presentation Errors
/// - [`Error::MissingVideoTrack`] - No video track to reference
/// - [`Error::MissingAudioTrack`] - No audio track to reference
///
/// ## XML Errors
/// - [`Error::Malformed`] - Structurally broken XML text
/// - [`Error::Xml`] - Errors reported by `quick-xml`
/// - [`Error::Io`] / [`Error::Utf8`] - Writer and encoding failures
///
/// # Examples
///
/// ```rust
/// use mmcgen::{build_manifest, Error, RowRecord};
///
/// let rows = vec![RowRecord::new().with("Type", "Video").with("Track ID", "V1")];
/// match build_manifest(&rows) {
///     Err(Error::MissingRoot) => eprintln!("input has no Root row"),
///     Err(e) => eprintln!("Other error: {}", e),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// No row with `Type == Root` exists in the input.
    #[error("No row with Type 'Root' was found")]
    MissingRoot,

    /// More than one root row was found while duplicate roots are rejected.
    ///
    /// The associated value is the number of root rows encountered.
    #[error("Expected exactly one Root row, found {0}")]
    DuplicateRoot(usize),

    /// A presentation needs a video track reference but the input has no video track.
    #[error("No Video track available for the presentation")]
    MissingVideoTrack,

    /// A presentation needs an audio track reference but the input has no audio track.
    #[error("No Audio track available for the presentation")]
    MissingAudioTrack,

    /// A required column is missing or blank.
    ///
    /// # Fields
    ///
    /// * `row` - Zero-based index of the offending row in the input
    /// * `field` - Column name that was expected
    #[error("Row {row} is missing required field '{field}'")]
    MissingField {
        /// Zero-based input row index
        row: usize,
        /// The missing column name
        field: &'static str,
    },

    /// A row carries a `Type` value this library does not know how to place.
    #[error("Row {row} has unsupported Type '{value}'")]
    UnknownRowType {
        /// Zero-based input row index
        row: usize,
        /// The `Type` value as found in the row (empty when absent)
        value: String,
    },

    /// The XML text is structurally broken.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Error reported by the `quick-xml` reader or writer.
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O error while writing XML into a buffer.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// XML bytes were not valid UTF-8.
    #[error("{0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(quick_xml::Error::from(err))
    }
}
