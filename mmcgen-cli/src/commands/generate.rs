use std::path::Path;

use anyhow::Context;
use mmcgen::{check_well_formed, xml::serialize_with_indent, ManifestBuilder, RowKind, RowSet};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{file_display_name, load_rows, manifest_config},
    output::print_output,
};

pub struct GenerateOptions<'a> {
    pub output: Option<&'a Path>,
    pub strict: bool,
    pub indent: usize,
    pub global: &'a GlobalOptions,
}

#[derive(Debug, Serialize)]
pub struct GenerateSummary {
    pub input: String,
    pub output: String,
    pub presentation_id: String,
    pub video_tracks: usize,
    pub audio_tracks: usize,
    pub subtitle_tracks: usize,
    pub bytes: usize,
}

/// Read, partition, build, serialize and verify. Nothing is written unless every step succeeds.
pub fn render_manifest(
    path: &Path,
    strict: bool,
    indent: usize,
) -> anyhow::Result<(RowSet, String)> {
    let records = load_rows(path)?;
    let config = manifest_config(strict).with_indent_width(indent);

    let rows = RowSet::partition(&records, &config)
        .with_context(|| format!("invalid rows in {}", path.display()))?;
    let tree = ManifestBuilder::new(config)
        .build_from(&rows)
        .with_context(|| format!("cannot build manifest for {}", path.display()))?;
    let xml = serialize_with_indent(&tree, indent)?;
    check_well_formed(&xml).context("generated manifest is not well-formed")?;

    Ok((rows, xml))
}

pub fn run(path: &Path, opts: &GenerateOptions) -> anyhow::Result<()> {
    let (rows, xml) = render_manifest(path, opts.strict, opts.indent)?;

    let Some(output) = opts.output else {
        // The manifest itself is the output; --json has nothing to add
        print!("{xml}");
        return Ok(());
    };

    std::fs::write(output, &xml)
        .with_context(|| format!("failed to write manifest: {}", output.display()))?;
    log::info!("wrote {} ({} bytes)", output.display(), xml.len());

    let count = |kind| rows.tracks_of(kind).count();
    let summary = GenerateSummary {
        input: file_display_name(path),
        output: output.display().to_string(),
        presentation_id: rows.root.prefixed_presentation_id(),
        video_tracks: count(RowKind::Video),
        audio_tracks: count(RowKind::Audio),
        subtitle_tracks: count(RowKind::Subtitle),
        bytes: xml.len(),
    };

    print_output(&summary, opts.global, |s| {
        println!("{}  ->  {}", s.input, s.output);
        println!("  Presentation: {}", s.presentation_id);
        println!(
            "  Tracks:       {} video, {} audio, {} subtitle",
            s.video_tracks, s.audio_tracks, s.subtitle_tracks
        );
    })
}
