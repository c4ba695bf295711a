//! Fixed names and values of the MMC v1.5 manifest schema.

/// `manifest` namespace
pub const NS_MANIFEST: &str = "http://www.movielabs.com/schema/manifest/v1.5/manifest";
/// `md` (common metadata) namespace
pub const NS_MD: &str = "http://www.movielabs.com/schema/md/v2.4/md";
/// `xsi` namespace
pub const NS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// Value of `xsi:schemaLocation` on the document element
pub const SCHEMA_LOCATION: &str =
    "http://www.movielabs.com/schema/manifest/v1.5/manifest manifest-v1.5.xsd";

/// `manifest:SpecVersion`
pub const SPEC_VERSION: &str = "1.5";
/// `manifest:Profile`
pub const PROFILE: &str = "MMC-1";
/// `version` attribute of `manifest:Experience`
pub const EXPERIENCE_VERSION: &str = "1.0";
/// `manifest:TrackSelectionNumber`
pub const TRACK_SELECTION_NUMBER: &str = "0";
/// `timecode` attribute of `md:FrameRate`
pub const FRAME_RATE_TIMECODE: &str = "Drop";

/// Placeholder comment after the experience, where child experiences would go
pub const CHILD_EXPERIENCES_COMMENT: &str = "  Child Experiences (international)  ";

/// Prefix of audio track identifiers
pub const AUDIO_TRACK_ID_PREFIX: &str = "md:audtrackid:org:";
/// Prefix of video track identifiers
pub const VIDEO_TRACK_ID_PREFIX: &str = "md:vidtrackid:org:";
/// Prefix of subtitle track identifiers
pub const SUBTITLE_TRACK_ID_PREFIX: &str = "md:subtrackid:org:";
/// Prefix of presentation identifiers
pub const PRESENTATION_ID_PREFIX: &str = "md:presentationid:org:";
/// Prefix of experience identifiers
pub const EXPERIENCE_ID_PREFIX: &str = "md:experienceid:org:";
/// Prefix of content identifiers
pub const CONTENT_ID_PREFIX: &str = "md:cid:org:";
/// Prefix of ALIDs
pub const ALID_PREFIX: &str = "md:ALID:org:";
