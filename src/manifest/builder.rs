//! # Manifest Builder
//!
//! Assembles the MMC manifest element tree from partitioned input rows.
//!
//! ## Overview
//!
//! The document always has the same five sections, in schema order:
//!
//! 1. `manifest:Compatibility` - fixed spec version and profile
//! 2. `manifest:Inventory` - one `Audio`, `Video` or `Subtitle` entry per track row
//! 3. `manifest:Presentations` - a single presentation referencing the first video track, the
//!    first audio track and every subtitle track
//! 4. `manifest:Experiences` - a single experience pointing at that presentation
//! 5. `manifest:ALIDExperienceMaps` - maps the derived ALID to the experience
//!
//! ## Usage
//!
//! ```rust
//! use mmcgen::{ManifestBuilder, ManifestConfig, RowRecord};
//!
//! let rows = vec![
//!     RowRecord::new()
//!         .with("Type", "Root")
//!         .with("PresentationID", "P1")
//!         .with("ExperienceID", "E1")
//!         .with("ContentID", "C1")
//!         .with("Experience Type", "Movie")
//!         .with("Experience Sub Type", "Full"),
//!     RowRecord::new().with("Type", "Video").with("Track ID", "V1"),
//!     RowRecord::new().with("Type", "Audio").with("Track ID", "A1"),
//! ];
//!
//! let builder = ManifestBuilder::new(ManifestConfig::strict());
//! let tree = builder.build(&rows)?;
//! assert_eq!(tree.name, "manifest:MediaManifest");
//!
//! let xml = builder.generate(&rows)?;
//! assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
//! # Ok::<(), mmcgen::Error>(())
//! ```

use crate::{
    config::ManifestConfig,
    manifest::schema,
    normalize::{derive_alid, normalize_numeric_text},
    rows::{AudioTrack, RootRow, RowKind, RowRecord, RowSet, SubtitleTrack, Track, VideoTrack},
    xml::{serialize_with_indent, XmlElement},
    Error, Result,
};

/// Builds MMC manifests from input rows.
///
/// The builder itself is stateless apart from its configuration; every call constructs a
/// fresh tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestBuilder {
    config: ManifestConfig,
}

impl ManifestBuilder {
    /// Creates a builder with the given configuration.
    #[must_use]
    pub fn new(config: ManifestConfig) -> Self {
        ManifestBuilder { config }
    }

    /// The configuration this builder applies.
    #[must_use]
    pub fn config(&self) -> &ManifestConfig {
        &self.config
    }

    /// Partitions `records` and builds the manifest element tree.
    ///
    /// # Errors
    ///
    /// Any error of [`RowSet::partition`], plus [`Error::MissingVideoTrack`] and
    /// [`Error::MissingAudioTrack`] when the presentation cannot be completed.
    pub fn build(&self, records: &[RowRecord]) -> Result<XmlElement> {
        let rows = RowSet::partition(records, &self.config)?;
        self.build_from(&rows)
    }

    /// Builds the manifest element tree from already partitioned rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVideoTrack`] or [`Error::MissingAudioTrack`] when the
    /// presentation has nothing to reference, checked in that order.
    pub fn build_from(&self, rows: &RowSet) -> Result<XmlElement> {
        let manifest = XmlElement::new("manifest:MediaManifest")
            .with_attribute("xmlns:manifest", schema::NS_MANIFEST)
            .with_attribute("xmlns:md", schema::NS_MD)
            .with_attribute("xmlns:xsi", schema::NS_XSI)
            .with_attribute("xsi:schemaLocation", schema::SCHEMA_LOCATION)
            .with_child(compatibility())
            .with_child(inventory(&rows.tracks))
            .with_child(presentations(rows)?)
            .with_child(experiences(&rows.root))
            .with_child(alid_experience_maps(&rows.root));

        log::debug!(
            "built manifest for presentation {} with {} inventory entries",
            rows.root.prefixed_presentation_id(),
            rows.tracks.len()
        );

        Ok(manifest)
    }

    /// Builds the manifest and serializes it with the configured indentation.
    ///
    /// # Errors
    ///
    /// Any error of [`ManifestBuilder::build`] or of serialization.
    pub fn generate(&self, records: &[RowRecord]) -> Result<String> {
        let tree = self.build(records)?;
        serialize_with_indent(&tree, self.config.indent_width)
    }
}

fn compatibility() -> XmlElement {
    XmlElement::new("manifest:Compatibility")
        .with_text_child("manifest:SpecVersion", schema::SPEC_VERSION)
        .with_text_child("manifest:Profile", schema::PROFILE)
}

fn inventory(tracks: &[Track]) -> XmlElement {
    tracks
        .iter()
        .fold(XmlElement::new("manifest:Inventory"), |inventory, track| {
            inventory.with_child(inventory_entry(track))
        })
}

fn inventory_entry(track: &Track) -> XmlElement {
    let id = track.prefixed_id();
    match track {
        Track::Audio(audio) => audio_entry(audio, id),
        Track::Video(video) => video_entry(video, id),
        Track::Subtitle(subtitle) => subtitle_entry(subtitle, id),
    }
}

fn text_or_empty(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn container_reference(location: Option<&String>) -> XmlElement {
    XmlElement::new("manifest:ContainerReference")
        .with_text_child("manifest:ContainerLocation", text_or_empty(location))
}

fn audio_entry(audio: &AudioTrack, id: String) -> XmlElement {
    XmlElement::new("manifest:Audio")
        .with_attribute("AudioTrackID", id)
        .with_text_child("md:Type", text_or_empty(audio.content_type.as_ref()))
        .with_text_child("md:Language", text_or_empty(audio.language.as_ref()))
        .with_child(container_reference(audio.location.as_ref()))
}

fn video_entry(video: &VideoTrack, id: String) -> XmlElement {
    let picture = XmlElement::new("md:Picture")
        .with_text_child(
            "md:WidthPixels",
            normalize_numeric_text(video.width.as_ref()).unwrap_or_default(),
        )
        .with_text_child(
            "md:HeightPixels",
            normalize_numeric_text(video.height.as_ref()).unwrap_or_default(),
        )
        .with_text_child("md:Progressive", "true");

    XmlElement::new("manifest:Video")
        .with_attribute("VideoTrackID", id)
        .with_text_child("md:Type", text_or_empty(video.content_type.as_ref()))
        .with_text_child("md:Language", text_or_empty(video.language.as_ref()))
        .with_child(picture)
        .with_child(container_reference(video.location.as_ref()))
}

fn subtitle_entry(subtitle: &SubtitleTrack, id: String) -> XmlElement {
    let entry = XmlElement::new("manifest:Subtitle")
        .with_attribute("SubtitleTrackID", id)
        .with_text_child("md:Format", text_or_empty(subtitle.format.as_ref()))
        .with_text_child("md:Type", text_or_empty(subtitle.content_type.as_ref()))
        .with_text_child("md:Language", text_or_empty(subtitle.language.as_ref()));

    // Encoding is always present; FrameRate only when the row has one
    let mut encoding = XmlElement::new("md:Encoding");
    let frame_rate = normalize_numeric_text(subtitle.frame_rate.as_ref())
        .filter(|rate| !rate.is_empty());
    if let Some(rate) = frame_rate {
        encoding = encoding.with_child(
            XmlElement::new("md:FrameRate")
                .with_attribute("timecode", schema::FRAME_RATE_TIMECODE)
                .with_text(rate),
        );
    }

    entry
        .with_child(encoding)
        .with_child(container_reference(subtitle.location.as_ref()))
}

fn presentations(rows: &RowSet) -> Result<XmlElement> {
    let video = rows.first_video().ok_or(Error::MissingVideoTrack)?;
    let audio = rows.first_audio().ok_or(Error::MissingAudioTrack)?;

    let mut track_metadata = XmlElement::new("manifest:TrackMetadata")
        .with_text_child(
            "manifest:TrackSelectionNumber",
            schema::TRACK_SELECTION_NUMBER,
        )
        .with_child(
            XmlElement::new("manifest:VideoTrackReference")
                .with_text_child("manifest:VideoTrackID", video.prefixed_id()),
        )
        .with_child(
            XmlElement::new("manifest:AudioTrackReference")
                .with_text_child("manifest:AudioTrackID", audio.prefixed_id()),
        );

    for subtitle in rows.tracks_of(RowKind::Subtitle) {
        track_metadata = track_metadata.with_child(
            XmlElement::new("manifest:SubtitleTrackReference")
                .with_text_child("manifest:SubtitleTrackID", subtitle.prefixed_id()),
        );
    }

    let presentation = XmlElement::new("manifest:Presentation")
        .with_attribute("PresentationID", rows.root.prefixed_presentation_id())
        .with_child(track_metadata);

    Ok(XmlElement::new("manifest:Presentations").with_child(presentation))
}

fn experiences(root: &RootRow) -> XmlElement {
    let content_id = root.prefixed_content_id();

    let audiovisual = XmlElement::new("manifest:Audiovisual")
        .with_attribute("ContentID", content_id.clone())
        .with_text_child("manifest:Type", root.experience_type.clone())
        .with_text_child("manifest:SubType", root.experience_sub_type.clone())
        .with_text_child("manifest:PresentationID", root.prefixed_presentation_id());

    let experience = XmlElement::new("manifest:Experience")
        .with_attribute("ExperienceID", root.prefixed_experience_id())
        .with_attribute("version", schema::EXPERIENCE_VERSION)
        .with_text_child("manifest:ContentID", content_id)
        .with_child(audiovisual);

    XmlElement::new("manifest:Experiences")
        .with_child(experience)
        .with_comment(schema::CHILD_EXPERIENCES_COMMENT)
}

fn alid_experience_maps(root: &RootRow) -> XmlElement {
    let map = XmlElement::new("manifest:ALIDExperienceMap")
        .with_text_child("manifest:ALID", derive_alid(&root.experience_id))
        .with_text_child("manifest:ExperienceID", root.prefixed_experience_id());

    XmlElement::new("manifest:ALIDExperienceMaps").with_child(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test::{audio_record, root_record, sample_records, subtitle_record, video_record},
        xml::XmlNode,
    };

    fn build(records: &[RowRecord]) -> XmlElement {
        ManifestBuilder::default().build(records).unwrap()
    }

    fn text_of(tree: &XmlElement, path: &str) -> Option<String> {
        tree.find(path).and_then(XmlElement::text)
    }

    #[test]
    fn test_section_order() {
        let tree = build(&sample_records());
        let sections: Vec<&str> = tree.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(
            sections,
            vec![
                "manifest:Compatibility",
                "manifest:Inventory",
                "manifest:Presentations",
                "manifest:Experiences",
                "manifest:ALIDExperienceMaps",
            ]
        );
    }

    #[test]
    fn test_namespace_declarations() {
        let tree = build(&sample_records());
        let keys: Vec<&str> = tree.attributes.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["xmlns:manifest", "xmlns:md", "xmlns:xsi", "xsi:schemaLocation"]
        );
        assert_eq!(tree.attribute("xmlns:md"), Some(schema::NS_MD));
        assert_eq!(
            tree.attribute("xsi:schemaLocation"),
            Some(schema::SCHEMA_LOCATION)
        );
    }

    #[test]
    fn test_compatibility() {
        let tree = build(&sample_records());
        assert_eq!(
            text_of(&tree, "manifest:Compatibility/manifest:SpecVersion").as_deref(),
            Some("1.5")
        );
        assert_eq!(
            text_of(&tree, "manifest:Compatibility/manifest:Profile").as_deref(),
            Some("MMC-1")
        );
    }

    #[test]
    fn test_video_inventory_entry() {
        let tree = build(&sample_records());
        let video = tree.find("manifest:Inventory/manifest:Video").unwrap();

        assert_eq!(video.attribute("VideoTrackID"), Some("md:vidtrackid:org:V1"));
        assert_eq!(text_of(video, "md:Type").as_deref(), Some("primary"));
        assert_eq!(text_of(video, "md:Picture/md:WidthPixels").as_deref(), Some("1920.0"));
        assert_eq!(text_of(video, "md:Picture/md:HeightPixels").as_deref(), Some("1080.0"));
        assert_eq!(text_of(video, "md:Picture/md:Progressive").as_deref(), Some("true"));
        assert_eq!(
            text_of(video, "manifest:ContainerReference/manifest:ContainerLocation").as_deref(),
            Some("v.mp4")
        );
    }

    #[test]
    fn test_audio_inventory_entry() {
        let tree = build(&sample_records());
        let audio = tree.find("manifest:Inventory/manifest:Audio").unwrap();

        assert_eq!(audio.attribute("AudioTrackID"), Some("md:audtrackid:org:A1"));
        let children: Vec<&str> = audio.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(
            children,
            vec!["md:Type", "md:Language", "manifest:ContainerReference"]
        );
        assert_eq!(text_of(audio, "md:Language").as_deref(), Some("en"));
    }

    #[test]
    fn test_subtitle_frame_rate_is_optional() {
        let tree = build(&sample_records());
        let subtitles = tree.descendants_named("manifest:Subtitle");
        assert_eq!(subtitles.len(), 2);

        let with_rate = subtitles[0];
        assert_eq!(
            with_rate.attribute("SubtitleTrackID"),
            Some("md:subtrackid:org:S1")
        );
        let rate = with_rate.find("md:Encoding/md:FrameRate").unwrap();
        assert_eq!(rate.attribute("timecode"), Some("Drop"));
        assert_eq!(rate.text().as_deref(), Some("23.98"));
        let children: Vec<&str> = with_rate.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(
            children,
            vec![
                "md:Format",
                "md:Type",
                "md:Language",
                "md:Encoding",
                "manifest:ContainerReference"
            ]
        );

        let without_rate = subtitles[1];
        let encoding = without_rate.child("md:Encoding").unwrap();
        assert!(encoding.children.is_empty());
        assert!(without_rate.descendants_named("md:FrameRate").is_empty());
        let children: Vec<&str> = without_rate.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(children[3..], ["md:Encoding", "manifest:ContainerReference"]);
    }

    #[test]
    fn test_blank_frame_rate_emits_nothing() {
        let record = subtitle_record("S9", None).with("FrameRate", "");
        let tree = build(&[root_record(), video_record("V1"), audio_record("A1"), record]);
        assert!(tree.descendants_named("md:FrameRate").is_empty());
        assert_eq!(tree.descendants_named("md:Encoding").len(), 1);
    }

    #[test]
    fn test_missing_optional_fields_become_empty_elements() {
        let bare_audio = RowRecord::new().with("Type", "Audio").with("Track ID", "A1");
        let tree = build(&[root_record(), video_record("V1"), bare_audio]);
        let audio = tree.find("manifest:Inventory/manifest:Audio").unwrap();

        let language = audio.child("md:Language").unwrap();
        assert!(language.children.is_empty());
        assert!(audio
            .find("manifest:ContainerReference/manifest:ContainerLocation")
            .unwrap()
            .children
            .is_empty());
    }

    #[test]
    fn test_track_metadata() {
        let rows = vec![
            root_record(),
            audio_record("A1"),
            subtitle_record("S1", None),
            video_record("V1"),
            video_record("V2"),
            audio_record("A2"),
            subtitle_record("S2", Some(25.0)),
        ];
        let tree = build(&rows);
        let presentation = tree
            .find("manifest:Presentations/manifest:Presentation")
            .unwrap();
        assert_eq!(
            presentation.attribute("PresentationID"),
            Some("md:presentationid:org:P1")
        );

        let metadata = presentation.child("manifest:TrackMetadata").unwrap();
        assert_eq!(
            text_of(metadata, "manifest:TrackSelectionNumber").as_deref(),
            Some("0")
        );
        assert_eq!(metadata.descendants_named("manifest:VideoTrackID").len(), 1);
        assert_eq!(metadata.descendants_named("manifest:AudioTrackID").len(), 1);
        assert_eq!(
            text_of(metadata, "manifest:VideoTrackReference/manifest:VideoTrackID").as_deref(),
            Some("md:vidtrackid:org:V1")
        );
        assert_eq!(
            text_of(metadata, "manifest:AudioTrackReference/manifest:AudioTrackID").as_deref(),
            Some("md:audtrackid:org:A1")
        );

        let subtitles: Vec<String> = metadata
            .descendants_named("manifest:SubtitleTrackID")
            .into_iter()
            .filter_map(XmlElement::text)
            .collect();
        assert_eq!(
            subtitles,
            vec!["md:subtrackid:org:S1", "md:subtrackid:org:S2"]
        );
    }

    #[test]
    fn test_missing_presentation_tracks() {
        let builder = ManifestBuilder::default();

        let no_video = vec![root_record(), audio_record("A1")];
        assert!(matches!(
            builder.build(&no_video),
            Err(Error::MissingVideoTrack)
        ));

        let no_audio = vec![root_record(), video_record("V1")];
        assert!(matches!(
            builder.build(&no_audio),
            Err(Error::MissingAudioTrack)
        ));

        let neither = vec![root_record(), subtitle_record("S1", None)];
        assert!(matches!(
            builder.build(&neither),
            Err(Error::MissingVideoTrack)
        ));
    }

    #[test]
    fn test_experience() {
        let tree = build(&sample_records());
        let experience = tree.find("manifest:Experiences/manifest:Experience").unwrap();

        assert_eq!(
            experience.attributes,
            vec![
                (
                    "ExperienceID".to_string(),
                    "md:experienceid:org:E1".to_string()
                ),
                ("version".to_string(), "1.0".to_string()),
            ]
        );
        assert_eq!(
            text_of(experience, "manifest:ContentID").as_deref(),
            Some("md:cid:org:C1")
        );

        let audiovisual = experience.child("manifest:Audiovisual").unwrap();
        assert_eq!(audiovisual.attribute("ContentID"), Some("md:cid:org:C1"));
        assert_eq!(text_of(audiovisual, "manifest:Type").as_deref(), Some("Movie"));
        assert_eq!(text_of(audiovisual, "manifest:SubType").as_deref(), Some("Full"));
        assert_eq!(
            text_of(audiovisual, "manifest:PresentationID").as_deref(),
            Some("md:presentationid:org:P1")
        );
    }

    #[test]
    fn test_child_experience_comment_follows_experience() {
        let tree = build(&sample_records());
        let experiences = tree.child("manifest:Experiences").unwrap();
        assert_eq!(experiences.children.len(), 2);
        assert!(matches!(
            &experiences.children[1],
            XmlNode::Comment(text) if text == "  Child Experiences (international)  "
        ));
    }

    #[test]
    fn test_alid_experience_map() {
        let tree = build(&sample_records());
        let map = tree
            .find("manifest:ALIDExperienceMaps/manifest:ALIDExperienceMap")
            .unwrap();
        assert_eq!(text_of(map, "manifest:ALID").as_deref(), Some("md:ALID:org:E1"));
        assert_eq!(
            text_of(map, "manifest:ExperienceID").as_deref(),
            Some("md:experienceid:org:E1")
        );
    }

    #[test]
    fn test_prefixed_inputs_are_not_prefixed_twice() {
        let root = RowRecord::new()
            .with("Type", "Root")
            .with("PresentationID", "md:presentationid:org:P1")
            .with("ExperienceID", "md:experienceid:org:E1")
            .with("ContentID", "md:cid:org:C1")
            .with("Experience Type", "Movie")
            .with("Experience Sub Type", "Full");
        let tree = build(&[root, video_record("md:vidtrackid:org:V1"), audio_record("A1")]);

        assert_eq!(
            text_of(
                &tree,
                concat!(
                    "manifest:Presentations/manifest:Presentation/manifest:TrackMetadata/",
                    "manifest:VideoTrackReference/manifest:VideoTrackID"
                )
            )
            .as_deref(),
            Some("md:vidtrackid:org:V1")
        );
        assert_eq!(
            text_of(&tree, "manifest:ALIDExperienceMaps/manifest:ALIDExperienceMap/manifest:ALID")
                .as_deref(),
            Some("md:ALID:org:E1")
        );
    }
}
