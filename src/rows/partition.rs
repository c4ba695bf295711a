//! Splitting the input into one root row and the ordered track rows.

use crate::{
    config::ManifestConfig,
    rows::{columns, RootRow, RowKind, RowRecord, Track},
    Error, Result,
};

/// The input rows after partitioning: exactly one root and the tracks in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet {
    /// The root row
    pub root: RootRow,
    /// Audio, Video and Subtitle rows, in input order
    pub tracks: Vec<Track>,
}

impl RowSet {
    /// Partitions `records` into a root row and track rows.
    ///
    /// With more than one `Root` row the first one wins, unless
    /// [`ManifestConfig::reject_duplicate_roots`] is set. Rows whose `Type` is not one of the
    /// four known kinds are skipped, unless [`ManifestConfig::reject_unknown_rows`] is set.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingRoot`] if no row has `Type == Root`
    /// - [`Error::DuplicateRoot`] for several roots under a strict configuration
    /// - [`Error::UnknownRowType`] for unknown kinds under a strict configuration
    /// - [`Error::MissingField`] if the root or a track lacks a required column
    pub fn partition(records: &[RowRecord], config: &ManifestConfig) -> Result<Self> {
        let mut root: Option<(usize, &RowRecord)> = None;
        let mut root_count = 0usize;
        let mut tracks = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let Some(kind) = record.kind() else {
                let value = record
                    .get(columns::TYPE)
                    .map(|value| value.to_text())
                    .unwrap_or_default();
                if config.reject_unknown_rows {
                    return Err(Error::UnknownRowType { row: index, value });
                }
                log::debug!("skipping row {index} with unsupported Type '{value}'");
                continue;
            };

            if kind == RowKind::Root {
                root_count += 1;
                if root.is_none() {
                    root = Some((index, record));
                }
                continue;
            }

            if let Some(track) = Track::from_record(index, kind, record)? {
                tracks.push(track);
            }
        }

        let (root_index, root_record) = root.ok_or(Error::MissingRoot)?;
        if root_count > 1 {
            if config.reject_duplicate_roots {
                return Err(Error::DuplicateRoot(root_count));
            }
            log::warn!("found {root_count} Root rows, using the one at row {root_index}");
        }

        let root = RootRow::from_record(root_index, root_record)?;
        log::debug!(
            "partitioned {} rows into a root row and {} tracks",
            records.len(),
            tracks.len()
        );

        Ok(RowSet { root, tracks })
    }

    /// The first video track, if any.
    #[must_use]
    pub fn first_video(&self) -> Option<&Track> {
        self.tracks_of(RowKind::Video).next()
    }

    /// The first audio track, if any.
    #[must_use]
    pub fn first_audio(&self) -> Option<&Track> {
        self.tracks_of(RowKind::Audio).next()
    }

    /// All tracks of `kind`, in input order.
    pub fn tracks_of(&self, kind: RowKind) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(move |track| track.kind() == kind)
    }
}
