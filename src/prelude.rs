//! # mmcgen Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! of the mmcgen library. Import this module to get quick access to everything needed to
//! turn rows into a manifest.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all mmcgen operations
pub use crate::Error;

/// The result type used throughout mmcgen
pub use crate::Result;

/// Configuration presets for manifest generation
pub use crate::ManifestConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Manifest assembly
pub use crate::{build_manifest, generate_manifest, ManifestBuilder};

// ================================================================================================
// Input Rows
// ================================================================================================

/// Untyped and typed input rows
pub use crate::rows::{
    columns, AudioTrack, RootRow, RowKind, RowRecord, RowSet, RowValue, SubtitleTrack, Track,
    VideoTrack,
};

/// Value normalization
pub use crate::normalize::{apply_prefix, derive_alid, normalize_numeric_text};

// ================================================================================================
// XML
// ================================================================================================

/// Element tree, serialization and validation
pub use crate::xml::{
    check_well_formed, is_well_formed, reformat, serialize, serialize_with_indent, XmlElement,
    XmlNode,
};

/// Schema constants
pub use crate::manifest::schema;
