//! Error types for resource fork decoding

use crate::types::ResType;

/// Errors that can occur while decoding or querying a resource fork
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ForkError {
    /// A read would run past the end of the buffer
    #[error("truncated data: needed {expected} bytes, {actual} available")]
    TruncatedData {
        /// The number of bytes the read required.
        expected: usize,
        /// The number of bytes actually available.
        actual: usize,
    },

    /// A seek target outside the buffer
    #[error("offset {offset} is outside the {len}-byte buffer")]
    OffsetOutOfRange {
        /// The requested absolute offset.
        offset: i64,
        /// The buffer length.
        len: usize,
    },

    /// The 16-byte fork header is unusable
    #[error("malformed fork header: {0}")]
    MalformedHeader(HeaderDefect),

    /// The resource map's fixed fields are inconsistent with its region
    #[error("malformed resource map: {0}")]
    MalformedMap(String),

    /// A type-list entry points outside the map region
    #[error("malformed type entry for '{0}'")]
    MalformedTypeEntry(ResType),

    /// A reference-list entry points outside the data region
    #[error("malformed reference entry for '{0}' id {1}")]
    MalformedReferenceEntry(ResType, i16),

    /// A data record's length prefix runs past the data region
    #[error("malformed data record for '{0}' id {1}")]
    MalformedResourceData(ResType, i16),

    /// No resource with the requested type and id
    #[error("no resource '{0}' with id {1}")]
    NotFound(ResType, i16),

    /// IO error while loading a fork from storage
    #[error("IO error: {0}")]
    Io(String),
}

/// Specific reasons a fork header is rejected
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderDefect {
    /// Buffer shorter than the fixed 16-byte header
    #[error("buffer shorter than the 16-byte header")]
    Truncated,

    /// Data or map region extends past the end of the buffer
    #[error("data or map region extends past the end of the buffer")]
    OffsetOverflow,

    /// Data and map regions overlap or are out of order
    #[error("data and map regions overlap or are out of order")]
    InvertedRegions,
}

impl From<std::io::Error> for ForkError {
    fn from(err: std::io::Error) -> Self {
        ForkError::Io(err.to_string())
    }
}
