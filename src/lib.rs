// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # mmcgen
//!
//! Builds MovieLabs Media Manifest Core (MMC) v1.5 XML documents from a flat, tabular
//! description of a media asset: one `Root` row with presentation and experience metadata,
//! plus one row per Audio, Video or Subtitle track.
//!
//! ## Features
//!
//! - **Typed rows** - untyped column maps are partitioned into a root record and typed tracks
//! - **Schema-ordered output** - Compatibility, Inventory, Presentations, Experiences and
//!   ALIDExperienceMaps, always in that order
//! - **Stable text** - numeric normalization (`1920.0`, `23.98`) and idempotent identifier
//!   prefixing
//! - **Pretty, canonical XML** - 4-space indentation under a fixed UTF-8 declaration
//! - **Validation** - namespace-aware well-formedness check for any XML text
//!
//! ## Quick Start
//!
//! ```rust
//! use mmcgen::{generate_manifest, is_well_formed, RowRecord};
//!
//! let rows = vec![
//!     RowRecord::new()
//!         .with("Type", "Root")
//!         .with("PresentationID", "P1")
//!         .with("ExperienceID", "E1")
//!         .with("ContentID", "C1")
//!         .with("Experience Type", "Movie")
//!         .with("Experience Sub Type", "Full"),
//!     RowRecord::new()
//!         .with("Type", "Video")
//!         .with("Track ID", "V1")
//!         .with("Width", 1920.0)
//!         .with("Height", 1080.0)
//!         .with("Location", "v.mp4"),
//!     RowRecord::new()
//!         .with("Type", "Audio")
//!         .with("Track ID", "A1")
//!         .with("Language", "en")
//!         .with("Location", "a.mp4"),
//! ];
//!
//! let xml = generate_manifest(&rows)?;
//! assert!(is_well_formed(&xml));
//! assert!(xml.contains("<manifest:VideoTrackID>md:vidtrackid:org:V1</manifest:VideoTrackID>"));
//! assert!(xml.contains("<md:WidthPixels>1920.0</md:WidthPixels>"));
//! # Ok::<(), mmcgen::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`rows`] - [`RowRecord`] input rows, typed [`Track`]s and the partitioned [`RowSet`]
//! - [`normalize`] - numeric text normalization, identifier prefixes, ALID derivation
//! - [`manifest`] - the [`ManifestBuilder`] and the fixed schema constants
//! - [`xml`] - the [`XmlElement`] tree, serializer and validator
//! - [`config`] - [`ManifestConfig`] presets
//! - [`Error`] and [`Result`] - error handling
//!
//! Reading CSV files or spreadsheets is left to the caller; the `mmcgen` command-line tool
//! in this workspace does that for CSV input.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use mmcgen::prelude::*;
///
/// let builder = ManifestBuilder::new(ManifestConfig::strict());
/// assert!(builder.config().reject_duplicate_roots);
/// ```
pub mod prelude;

/// Configuration presets for manifest generation
pub mod config;

/// Manifest assembly and schema constants
pub mod manifest;

/// Value normalization helpers
pub mod normalize;

/// Input row model
pub mod rows;

/// XML element tree, serializer and well-formedness checks
pub mod xml;

/// `mmcgen` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `mmcgen` Error type
///
/// # Examples
///
/// ```rust
/// use mmcgen::{generate_manifest, Error};
///
/// match generate_manifest(&[]) {
///     Err(Error::MissingRoot) => println!("No root row"),
///     Err(e) => println!("Error: {}", e),
///     Ok(xml) => println!("{}", xml),
/// }
/// ```
pub use error::Error;

pub use config::ManifestConfig;
pub use manifest::ManifestBuilder;
pub use normalize::{apply_prefix, derive_alid, normalize_numeric_text};
pub use rows::{
    AudioTrack, RootRow, RowKind, RowRecord, RowSet, RowValue, SubtitleTrack, Track, VideoTrack,
};
pub use xml::{
    check_well_formed, is_well_formed, reformat, serialize, XmlElement, XmlNode,
};

/// Builds the manifest element tree for `records` with the default (lenient) configuration.
///
/// # Errors
///
/// - [`Error::MissingRoot`] if no row has `Type == Root`
/// - [`Error::MissingField`] if the root or a track lacks a required column
/// - [`Error::MissingVideoTrack`] / [`Error::MissingAudioTrack`] if the presentation has
///   nothing to reference
pub fn build_manifest(records: &[RowRecord]) -> Result<XmlElement> {
    ManifestBuilder::default().build(records)
}

/// Builds and serializes the manifest for `records` with the default configuration.
///
/// The result is a pretty-printed UTF-8 document starting with
/// `<?xml version="1.0" encoding="UTF-8"?>`.
///
/// # Errors
///
/// See [`build_manifest`].
pub fn generate_manifest(records: &[RowRecord]) -> Result<String> {
    ManifestBuilder::default().generate(records)
}
