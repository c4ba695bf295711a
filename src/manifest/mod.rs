//! MMC v1.5 manifest assembly.
//!
//! - [`ManifestBuilder`]: rows in, element tree (or serialized document) out
//! - [`schema`]: namespaces, identifier prefixes and fixed values of the manifest schema

mod builder;
pub mod schema;

pub use builder::ManifestBuilder;
