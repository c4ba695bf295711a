//! # Input rows
//!
//! A manifest is described by a flat table: one `Root` row carrying presentation and
//! experience metadata, and one row per Audio, Video or Subtitle track. This module holds
//! both representations of that table:
//!
//! - [`RowRecord`] / [`RowValue`]: the untyped column → value mapping a CSV reader produces
//! - [`RootRow`], [`AudioTrack`], [`VideoTrack`], [`SubtitleTrack`]: typed records with
//!   explicit optional fields
//! - [`RowSet`]: the partitioned input, one root plus ordered tracks
//!
//! ## Usage
//!
//! ```rust
//! use mmcgen::{ManifestConfig, RowRecord, RowSet};
//!
//! let rows = vec![
//!     RowRecord::new()
//!         .with("Type", "Root")
//!         .with("PresentationID", "P1")
//!         .with("ExperienceID", "E1")
//!         .with("ContentID", "C1")
//!         .with("Experience Type", "Movie")
//!         .with("Experience Sub Type", "Full"),
//!     RowRecord::new().with("Type", "Audio").with("Track ID", "A1"),
//! ];
//!
//! let set = RowSet::partition(&rows, &ManifestConfig::default())?;
//! assert_eq!(set.root.presentation_id, "P1");
//! assert_eq!(set.tracks.len(), 1);
//! # Ok::<(), mmcgen::Error>(())
//! ```

mod partition;
mod record;
mod typed;
mod value;

pub use partition::RowSet;
pub use record::RowRecord;
pub use typed::{AudioTrack, RootRow, SubtitleTrack, Track, VideoTrack};
pub use value::RowValue;

use strum::{Display, EnumCount, EnumIter, EnumString};

/// Column names understood by the manifest builder.
pub mod columns {
    /// Row kind discriminator
    pub const TYPE: &str = "Type";

    /// Presentation identifier (root row)
    pub const PRESENTATION_ID: &str = "PresentationID";
    /// Experience identifier (root row)
    pub const EXPERIENCE_ID: &str = "ExperienceID";
    /// Content identifier (root row)
    pub const CONTENT_ID: &str = "ContentID";
    /// Audiovisual type, e.g. `Main` (root row)
    pub const EXPERIENCE_TYPE: &str = "Experience Type";
    /// Audiovisual sub type, e.g. `Feature` (root row)
    pub const EXPERIENCE_SUB_TYPE: &str = "Experience Sub Type";

    /// Track identifier
    pub const TRACK_ID: &str = "Track ID";
    /// Track content type, emitted as `md:Type`
    pub const TRACK_TYPE: &str = "Type/Format";
    /// Track language
    pub const LANGUAGE: &str = "Language";
    /// Container location of the track essence
    pub const LOCATION: &str = "Location";
    /// Picture width in pixels (video)
    pub const WIDTH: &str = "Width";
    /// Picture height in pixels (video)
    pub const HEIGHT: &str = "Height";
    /// Subtitle file format
    pub const FORMAT: &str = "Format";
    /// Subtitle frame rate
    pub const FRAME_RATE: &str = "FrameRate";
}

/// The kind of an input row, taken from its `Type` column.
///
/// Matching is exact and case-sensitive: `"Audio"` is a track row, `"audio"` is not.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount,
)]
pub enum RowKind {
    /// Presentation / experience metadata
    Root,
    /// Audio track
    Audio,
    /// Video track
    Video,
    /// Subtitle track
    Subtitle,
}

impl RowKind {
    /// Returns `true` for the three track kinds.
    #[must_use]
    pub fn is_track(self) -> bool {
        !matches!(self, RowKind::Root)
    }
}
