//! Data-file loading for the mechforge engine.
//!
//! Defines the on-disk catalog format ([`schema`]) and the resolution
//! pipeline ([`loader`]) that turns data files into an immutable
//! [`mechforge_core::registry::Registry`]. Catalogs may be written in RON,
//! JSON, or TOML; the format is detected from the file extension, and
//! [`find_catalog_file`] rejects directories that carry the same catalog in
//! more than one format.
//!
//! All malformed input is rejected here, at construction time. Once a
//! registry has been built, queries against it never fail.

pub mod loader;
pub mod schema;

pub use loader::{DataLoadError, Format, find_catalog_file, load_catalog_file, load_catalog_str};
