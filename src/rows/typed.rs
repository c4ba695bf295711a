//! Typed views of the input rows.

use crate::{
    manifest::schema,
    normalize::apply_prefix,
    rows::{columns, RowKind, RowRecord, RowValue},
    Error, Result,
};

fn required(row: usize, record: &RowRecord, field: &'static str) -> Result<String> {
    record
        .text(field)
        .ok_or(Error::MissingField { row, field })
}

/// Presentation and experience metadata from the `Root` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootRow {
    /// `PresentationID`, unprefixed as read
    pub presentation_id: String,
    /// `ExperienceID`, unprefixed as read
    pub experience_id: String,
    /// `ContentID`, unprefixed as read
    pub content_id: String,
    /// `Experience Type`, copied verbatim into the manifest
    pub experience_type: String,
    /// `Experience Sub Type`, copied verbatim into the manifest
    pub experience_sub_type: String,
}

impl RootRow {
    /// Reads the root fields of `record`, which sits at index `row` of the input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if any of the five root columns is missing or blank.
    pub fn from_record(row: usize, record: &RowRecord) -> Result<Self> {
        Ok(RootRow {
            presentation_id: required(row, record, columns::PRESENTATION_ID)?,
            experience_id: required(row, record, columns::EXPERIENCE_ID)?,
            content_id: required(row, record, columns::CONTENT_ID)?,
            experience_type: required(row, record, columns::EXPERIENCE_TYPE)?,
            experience_sub_type: required(row, record, columns::EXPERIENCE_SUB_TYPE)?,
        })
    }

    /// `PresentationID` with the presentation namespace prefix.
    #[must_use]
    pub fn prefixed_presentation_id(&self) -> String {
        apply_prefix(&self.presentation_id, schema::PRESENTATION_ID_PREFIX)
    }

    /// `ExperienceID` with the experience namespace prefix.
    #[must_use]
    pub fn prefixed_experience_id(&self) -> String {
        apply_prefix(&self.experience_id, schema::EXPERIENCE_ID_PREFIX)
    }

    /// `ContentID` with the content namespace prefix.
    #[must_use]
    pub fn prefixed_content_id(&self) -> String {
        apply_prefix(&self.content_id, schema::CONTENT_ID_PREFIX)
    }
}

/// An audio track row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioTrack {
    /// `Track ID`, unprefixed as read
    pub track_id: String,
    /// `Type/Format`
    pub content_type: Option<String>,
    /// `Language`
    pub language: Option<String>,
    /// `Location`
    pub location: Option<String>,
}

/// A video track row.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoTrack {
    /// `Track ID`, unprefixed as read
    pub track_id: String,
    /// `Type/Format`
    pub content_type: Option<String>,
    /// `Language`
    pub language: Option<String>,
    /// `Width`, kept as read so it can be normalized at emission
    pub width: Option<RowValue>,
    /// `Height`, kept as read so it can be normalized at emission
    pub height: Option<RowValue>,
    /// `Location`
    pub location: Option<String>,
}

/// A subtitle track row.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleTrack {
    /// `Track ID`, unprefixed as read
    pub track_id: String,
    /// `Format`
    pub format: Option<String>,
    /// `Type/Format`
    pub content_type: Option<String>,
    /// `Language`
    pub language: Option<String>,
    /// `FrameRate`, kept as read so it can be normalized at emission
    pub frame_rate: Option<RowValue>,
    /// `Location`
    pub location: Option<String>,
}

/// A track row of any kind, in input order.
#[derive(Debug, Clone, PartialEq)]
pub enum Track {
    /// Audio track
    Audio(AudioTrack),
    /// Video track
    Video(VideoTrack),
    /// Subtitle track
    Subtitle(SubtitleTrack),
}

impl Track {
    /// Reads a track of the given `kind` from `record`, which sits at index `row` of the input.
    ///
    /// Returns `Ok(None)` for [`RowKind::Root`], which is not a track.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if `Track ID` is missing or blank.
    pub fn from_record(row: usize, kind: RowKind, record: &RowRecord) -> Result<Option<Self>> {
        let track = match kind {
            RowKind::Root => return Ok(None),
            RowKind::Audio => Track::Audio(AudioTrack {
                track_id: required(row, record, columns::TRACK_ID)?,
                content_type: record.text(columns::TRACK_TYPE),
                language: record.text(columns::LANGUAGE),
                location: record.text(columns::LOCATION),
            }),
            RowKind::Video => Track::Video(VideoTrack {
                track_id: required(row, record, columns::TRACK_ID)?,
                content_type: record.text(columns::TRACK_TYPE),
                language: record.text(columns::LANGUAGE),
                width: record.value(columns::WIDTH).cloned(),
                height: record.value(columns::HEIGHT).cloned(),
                location: record.text(columns::LOCATION),
            }),
            RowKind::Subtitle => Track::Subtitle(SubtitleTrack {
                track_id: required(row, record, columns::TRACK_ID)?,
                format: record.text(columns::FORMAT),
                content_type: record.text(columns::TRACK_TYPE),
                language: record.text(columns::LANGUAGE),
                frame_rate: record.value(columns::FRAME_RATE).cloned(),
                location: record.text(columns::LOCATION),
            }),
        };
        Ok(Some(track))
    }

    /// The row kind of this track.
    #[must_use]
    pub fn kind(&self) -> RowKind {
        match self {
            Track::Audio(_) => RowKind::Audio,
            Track::Video(_) => RowKind::Video,
            Track::Subtitle(_) => RowKind::Subtitle,
        }
    }

    /// The unprefixed `Track ID`.
    #[must_use]
    pub fn track_id(&self) -> &str {
        match self {
            Track::Audio(track) => &track.track_id,
            Track::Video(track) => &track.track_id,
            Track::Subtitle(track) => &track.track_id,
        }
    }

    /// The `Track ID` with the namespace prefix of its kind.
    #[must_use]
    pub fn prefixed_id(&self) -> String {
        let prefix = match self {
            Track::Audio(_) => schema::AUDIO_TRACK_ID_PREFIX,
            Track::Video(_) => schema::VIDEO_TRACK_ID_PREFIX,
            Track::Subtitle(_) => schema::SUBTITLE_TRACK_ID_PREFIX,
        };
        apply_prefix(self.track_id(), prefix)
    }

    /// `Language`, if present.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        match self {
            Track::Audio(track) => track.language.as_deref(),
            Track::Video(track) => track.language.as_deref(),
            Track::Subtitle(track) => track.language.as_deref(),
        }
    }

    /// `Location`, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            Track::Audio(track) => track.location.as_deref(),
            Track::Video(track) => track.location.as_deref(),
            Track::Subtitle(track) => track.location.as_deref(),
        }
    }
}
