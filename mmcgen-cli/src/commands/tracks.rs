use std::path::Path;

use anyhow::Context;
use mmcgen::{RowSet, Track};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_rows, manifest_config},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct TrackEntry {
    pub kind: String,
    pub track_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrackListing {
    pub presentation_id: String,
    pub experience_id: String,
    pub tracks: Vec<TrackEntry>,
}

impl From<&Track> for TrackEntry {
    fn from(track: &Track) -> Self {
        TrackEntry {
            kind: track.kind().to_string(),
            track_id: track.prefixed_id(),
            language: track.language().map(str::to_string),
            location: track.location().map(str::to_string),
        }
    }
}

/// Partitioned view of a sheet in input order.
pub fn list_tracks(rows: &RowSet) -> TrackListing {
    TrackListing {
        presentation_id: rows.root.prefixed_presentation_id(),
        experience_id: rows.root.prefixed_experience_id(),
        tracks: rows.tracks.iter().map(TrackEntry::from).collect(),
    }
}

pub fn run(path: &Path, strict: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    let records = load_rows(path)?;
    let rows = RowSet::partition(&records, &manifest_config(strict))
        .with_context(|| format!("invalid rows in {}", path.display()))?;
    let listing = list_tracks(&rows);

    print_output(&listing, opts, |l| {
        println!("Presentation: {}", l.presentation_id);
        println!("Experience:   {}", l.experience_id);
        println!();

        let mut table = TabWriter::new(&[
            ("Kind", Align::Left),
            ("Track ID", Align::Left),
            ("Language", Align::Left),
            ("Location", Align::Left),
        ]);
        for t in &l.tracks {
            table.row(vec![
                t.kind.clone(),
                t.track_id.clone(),
                t.language.clone().unwrap_or_else(|| "-".to_string()),
                t.location.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        table.print();
    })
}
