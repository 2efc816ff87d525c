//! # Rsrckit Core
//!
//! A read-only decoder for the classic Macintosh resource fork — the
//! typed, numbered, optionally named blobs a fork's data section carries
//! behind its self-referential map structure. The decoder is a pure
//! parse-and-query layer over an in-memory byte buffer; loading the buffer
//! from storage lives in `loader`, presentation lives elsewhere.
//!
//! ## Modules
//!
//! - `constants`: On-disk layout constants and attribute flags
//! - `cursor`: Bounds-checked big-endian reader
//! - `decoder`: Strict structural decoding of header, map and lists
//! - `catalog`: The queryable, immutable resource catalog
//! - `loader`: File-loading helpers (named fork and flattened files)
//! - `types`: Core types (ForkHeader, ResType, Resource)
//! - `error`: Error taxonomy

#![warn(missing_docs)]

pub mod catalog;
pub mod constants;
pub mod cursor;
pub mod decoder;
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types
pub use catalog::ResourceCatalog;
pub use constants::ResourceAttrs;
pub use error::ForkError;
pub use types::{ForkHeader, ResType, Resource, TypeGroup};

/// Result type alias for fork decoding operations
pub type Result<T> = core::result::Result<T, ForkError>;
