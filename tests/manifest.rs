//! Integration tests for end-to-end manifest generation.
//!
//! These tests drive the public API the way a caller with already-materialized rows would:
//! rows in, serialized manifest out, then inspect the text and the re-parsed tree.

use mmcgen::{prelude::*, Result};
use std::path::PathBuf;

fn root() -> RowRecord {
    RowRecord::new()
        .with("Type", "Root")
        .with("PresentationID", "P1")
        .with("ExperienceID", "E1")
        .with("ContentID", "C1")
        .with("Experience Type", "Movie")
        .with("Experience Sub Type", "Full")
}

fn video(track_id: &str) -> RowRecord {
    RowRecord::new()
        .with("Type", "Video")
        .with("Track ID", track_id)
        .with("Width", 1920.0)
        .with("Height", 1080.0)
        .with("Location", "v.mp4")
}

fn audio(track_id: &str) -> RowRecord {
    RowRecord::new()
        .with("Type", "Audio")
        .with("Track ID", track_id)
        .with("Language", "en")
        .with("Location", "a.mp4")
}

fn subtitle(track_id: &str) -> RowRecord {
    RowRecord::new()
        .with("Type", "Subtitle")
        .with("Track ID", track_id)
        .with("Format", "SRT")
        .with("Language", "ko")
        .with("Location", format!("{track_id}.srt"))
}

fn title_rows() -> Vec<RowRecord> {
    vec![
        root(),
        video("V1").with("Type/Format", "primary").with("Language", "en"),
        audio("A1").with("Type/Format", "primary"),
        subtitle("S1")
            .with("Type/Format", "normal")
            .with("FrameRate", 23.976),
        subtitle("S2").with("Type/Format", "normal"),
    ]
}

/// The minimal example: one root, one video, one audio.
#[test]
fn test_minimal_manifest() -> Result<()> {
    let rows = vec![root(), video("V1"), audio("A1")];
    let xml = generate_manifest(&rows)?;

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(xml.contains("<manifest:VideoTrackID>md:vidtrackid:org:V1</manifest:VideoTrackID>"));
    assert!(xml.contains("<manifest:AudioTrackID>md:audtrackid:org:A1</manifest:AudioTrackID>"));
    assert!(xml.contains("<md:WidthPixels>1920.0</md:WidthPixels>"));
    assert!(xml.contains("<manifest:ALID>md:ALID:org:E1</manifest:ALID>"));
    assert!(is_well_formed(&xml));

    Ok(())
}

/// Output for a full title matches the checked-in manifest byte for byte.
#[test]
fn test_title_matches_golden_manifest() -> Result<()> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/samples/title_manifest.xml");
    let expected = std::fs::read_to_string(&path)?;

    let xml = generate_manifest(&title_rows())?;
    assert_eq!(xml, expected);

    Ok(())
}

/// Serialized output is well-formed for every valid mix of tracks.
#[test]
fn test_output_is_well_formed_for_track_mixes() -> Result<()> {
    for videos in 1..=2 {
        for audios in 1..=2 {
            for subtitles in 0..=3 {
                let mut rows = vec![root()];
                rows.extend((0..videos).map(|i| video(&format!("V{i}"))));
                rows.extend((0..audios).map(|i| audio(&format!("A{i}"))));
                rows.extend((0..subtitles).map(|i| subtitle(&format!("S{i}"))));

                let xml = serialize(&build_manifest(&rows)?)?;
                assert!(
                    is_well_formed(&xml),
                    "{videos} video / {audios} audio / {subtitles} subtitle rows"
                );

                let tree = XmlElement::parse(&xml)?;
                assert_eq!(tree.descendants_named("manifest:VideoTrackID").len(), 1);
                assert_eq!(tree.descendants_named("manifest:AudioTrackID").len(), 1);
                assert_eq!(
                    tree.descendants_named("manifest:SubtitleTrackID").len(),
                    subtitles
                );
            }
        }
    }

    Ok(())
}

/// Subtitles without a frame rate keep an empty Encoding element and carry no FrameRate.
#[test]
fn test_subtitle_without_frame_rate() -> Result<()> {
    let rows = vec![root(), video("V1"), audio("A1"), subtitle("S1")];
    let xml = generate_manifest(&rows)?;

    assert!(!xml.contains("FrameRate"));
    assert!(xml.contains(
        "<md:Language>ko</md:Language>\n            <md:Encoding/>\n            \
         <manifest:ContainerReference>"
    ));

    Ok(())
}

/// Reformatting the output changes nothing, and the re-parsed tree equals the built tree.
#[test]
fn test_round_trip_is_stable() -> Result<()> {
    let tree = build_manifest(&title_rows())?;
    let xml = serialize(&tree)?;

    assert_eq!(reformat(&xml)?, xml);
    assert_eq!(XmlElement::parse(&xml)?, tree);

    let names = |tree: &XmlElement| -> Vec<String> {
        tree.descendants().iter().map(|e| e.name.clone()).collect()
    };
    assert_eq!(names(&XmlElement::parse(&reformat(&xml)?)?), names(&tree));

    Ok(())
}

/// Custom indentation flows through the builder configuration.
#[test]
fn test_indent_width_from_config() -> Result<()> {
    let builder = ManifestBuilder::new(ManifestConfig::default().with_indent_width(2));
    let xml = builder.generate(&[root(), video("V1"), audio("A1")])?;

    assert!(xml.contains("\n  <manifest:Compatibility>\n    <manifest:SpecVersion>"));
    assert!(is_well_formed(&xml));

    Ok(())
}

/// Input errors surface as typed errors.
#[test]
fn test_input_errors() {
    assert!(matches!(
        generate_manifest(&[video("V1"), audio("A1")]),
        Err(Error::MissingRoot)
    ));
    assert!(matches!(
        generate_manifest(&[root(), audio("A1")]),
        Err(Error::MissingVideoTrack)
    ));
    assert!(matches!(
        generate_manifest(&[root(), video("V1")]),
        Err(Error::MissingAudioTrack)
    ));

    let strict = ManifestBuilder::new(ManifestConfig::strict());
    assert!(matches!(
        strict.generate(&[root(), root(), video("V1"), audio("A1")]),
        Err(Error::DuplicateRoot(2))
    ));
    assert!(ManifestBuilder::default()
        .generate(&[root(), root(), video("V1"), audio("A1")])
        .is_ok());
}

/// Row text XML cannot represent fails generation instead of producing a broken document.
#[test]
fn test_control_characters_in_rows() {
    let rows = vec![
        root(),
        video("V1").with("Location", "v\u{1}.mp4"),
        audio("A1"),
    ];
    assert!(matches!(
        generate_manifest(&rows),
        Err(Error::Malformed { .. })
    ));

    let rows = vec![root().with("Experience Type", "Mo\u{8}vie"), video("V1"), audio("A1")];
    assert!(matches!(
        generate_manifest(&rows),
        Err(Error::Malformed { .. })
    ));
}

/// The validator rejects broken documents and does not try to repair them.
#[test]
fn test_validator_on_damaged_output() -> Result<()> {
    let xml = generate_manifest(&[root(), video("V1"), audio("A1")])?;

    let truncated = &xml[..xml.len() / 2];
    assert!(!is_well_formed(truncated));

    let unbound = xml.replace(" xmlns:md=\"http://www.movielabs.com/schema/md/v2.4/md\"", "");
    assert!(!is_well_formed(&unbound));

    let mismatched = xml.replace("</manifest:Inventory>", "</manifest:Inventry>");
    assert!(!is_well_formed(&mismatched));

    Ok(())
}
