//! Core types for the decoded resource catalog

use crate::constants::ResourceAttrs;
use crate::error::{ForkError, HeaderDefect};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::sync::OnceLock;

/// Four-byte resource type tag (`TEXT`, `ICN#`, `snd `, ...)
///
/// The tag is an opaque byte quadruple, not text; `Display` renders it
/// through the MacRoman mapping for diagnostics only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResType(pub [u8; 4]);

impl ResType {
    /// Create a tag from its four bytes
    pub const fn new(tag: [u8; 4]) -> Self {
        Self(tag)
    }

    /// The raw tag bytes
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for ResType {
    fn from(tag: [u8; 4]) -> Self {
        Self(tag)
    }
}

impl From<&[u8; 4]> for ResType {
    fn from(tag: &[u8; 4]) -> Self {
        Self(*tag)
    }
}

impl fmt::Display for ResType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (text, _, _) = encoding_rs::MACINTOSH.decode(&self.0);
        f.write_str(&text)
    }
}

impl fmt::Debug for ResType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResType(\"{self}\")")
    }
}

/// The fixed 16-byte fork header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkHeader {
    /// Start of the data section, from the start of the fork
    pub data_offset: u32,

    /// Start of the resource map, from the start of the fork
    pub map_offset: u32,

    /// Length of the data section in bytes
    pub data_length: u32,

    /// Length of the resource map in bytes
    pub map_length: u32,
}

impl ForkHeader {
    /// Validate the containment invariant against the buffer length:
    /// the data section ends before the map starts, and both regions lie
    /// inside the buffer.
    pub fn validate(&self, buffer_len: usize) -> Result<(), ForkError> {
        let data_end = self.data_offset as u64 + self.data_length as u64;
        let map_end = self.map_offset as u64 + self.map_length as u64;
        if data_end > buffer_len as u64 || map_end > buffer_len as u64 {
            return Err(ForkError::MalformedHeader(HeaderDefect::OffsetOverflow));
        }
        if data_end > self.map_offset as u64 {
            return Err(ForkError::MalformedHeader(HeaderDefect::InvertedRegions));
        }
        Ok(())
    }

    /// Byte range of the data section
    pub fn data_region(&self) -> Range<usize> {
        let start = self.data_offset as usize;
        start..start + self.data_length as usize
    }

    /// Byte range of the resource map
    pub fn map_region(&self) -> Range<usize> {
        let start = self.map_offset as usize;
        start..start + self.map_length as usize
    }
}

/// The resource map's fixed fields, with the reserved prelude skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMap {
    /// Raw map attribute word
    pub attributes: u16,

    /// Offset of the type list, relative to the start of the map
    pub type_list_offset: u16,

    /// Offset of the name list, relative to the start of the map
    pub name_list_offset: u16,

    /// Number of type entries, already corrected for the count−1 storage
    pub type_count: u16,
}

/// One entry of the type list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
    /// The resource type tag
    pub tag: ResType,

    /// Offset of this type's reference list, relative to the start of the
    /// type list itself (a quirk of the format; not relative to the map)
    pub ref_list_offset: u16,

    /// Number of reference entries, corrected for the count−1 storage
    pub count: u16,
}

/// One entry of a reference list, in decoded form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefEntry {
    /// Resource id; negative ids are conventionally system-reserved
    pub id: i16,

    /// Offset into the name list, or −1 for an unnamed resource
    pub name_offset: i16,

    /// Attribute flags from the high byte of the packed word
    pub attributes: ResourceAttrs,

    /// Offset of the data record relative to the data section start
    /// (the low 3 bytes of the packed word)
    pub data_offset: u32,
}

/// A resolved resource summary.
///
/// Payload bytes stay in the source buffer until
/// [`ResourceCatalog::data`](crate::ResourceCatalog::data) materializes them.
#[derive(Debug, Clone)]
pub struct Resource {
    /// Resource id, unique per type in a well-formed fork
    pub id: i16,

    /// Best-effort MacRoman decode of the name, if the resource has one
    pub name: Option<String>,

    /// The undecoded name bytes exactly as stored
    pub name_raw: Option<Bytes>,

    /// Attribute flags
    pub attributes: ResourceAttrs,

    pub(crate) data_offset: u32,
    pub(crate) data: OnceLock<Bytes>,
}

impl Resource {
    /// Offset of this resource's data record, relative to the data section
    pub fn data_offset(&self) -> u32 {
        self.data_offset
    }
}

/// The resources of one on-disk type entry, in reference-list order.
///
/// Duplicate tags in the type list produce separate groups; queries on the
/// catalog concatenate them in first-seen order.
#[derive(Debug, Clone)]
pub struct TypeGroup {
    /// The group's type tag
    pub tag: ResType,

    /// Resources in on-disk reference-list order
    pub resources: Vec<Resource>,
}
