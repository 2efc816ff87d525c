//! Structural decoding of the fork container (strict, single pass)
//!
//! Free functions, one per on-disk structure, each validating the offsets
//! it derives before trusting them. Offset arithmetic is done in u64 so
//! hostile headers cannot overflow, and every failure carries the type tag
//! or id it belongs to.

use crate::constants::{
    stored_count, ResourceAttrs, DATA_PREFIX_SIZE, HEADER_SIZE, MAP_HEADER_COPY_SIZE,
    MAP_PRELUDE_SIZE, NAME_NONE, REF_ENTRY_SIZE, TYPE_ENTRY_SIZE,
};
use crate::cursor::ByteCursor;
use crate::error::{ForkError, HeaderDefect};
use crate::types::{ForkHeader, RefEntry, ResType, ResourceMap, TypeEntry};
use crate::Result;
use std::ops::Range;

/// Mask extracting the 3-byte data offset from the packed attribute word
const DATA_OFFSET_MASK: u32 = 0x00FF_FFFF;

/// Decode and validate the fixed 16-byte header at the start of the buffer.
///
/// The 112-byte reserved region that follows the header on disk is ignored.
pub fn decode_header(cur: &mut ByteCursor<'_>) -> Result<ForkHeader> {
    if cur.len() < HEADER_SIZE {
        return Err(ForkError::MalformedHeader(HeaderDefect::Truncated));
    }
    cur.seek_to(0)?;
    let header = ForkHeader {
        data_offset: cur.read_u32()?,
        map_offset: cur.read_u32()?,
        data_length: cur.read_u32()?,
        map_length: cur.read_u32()?,
    };
    header.validate(cur.len())?;
    Ok(header)
}

/// Decode the resource map's fixed fields.
///
/// Also reports whether the reserved prelude opens with a faithful copy of
/// the fork header, the structural signal behind
/// [`ResourceCatalog::is_resource_fork`](crate::ResourceCatalog::is_resource_fork).
pub fn decode_map(cur: &mut ByteCursor<'_>, header: &ForkHeader) -> Result<(ResourceMap, bool)> {
    let map_len = header.map_length as u64;
    if (map_len as usize) < MAP_PRELUDE_SIZE + 8 {
        return Err(ForkError::MalformedMap(format!(
            "map region of {map_len} bytes cannot hold the fixed map fields"
        )));
    }

    cur.seek_to(header.map_offset as usize)?;
    let header_copy = ForkHeader {
        data_offset: cur.read_u32()?,
        map_offset: cur.read_u32()?,
        data_length: cur.read_u32()?,
        map_length: cur.read_u32()?,
    };
    // remainder of the prelude: next-map handle and file reference, unused
    // for read-only access
    cur.skip(MAP_PRELUDE_SIZE - MAP_HEADER_COPY_SIZE)?;

    let map = ResourceMap {
        attributes: cur.read_u16()?,
        type_list_offset: cur.read_u16()?,
        name_list_offset: cur.read_u16()?,
        type_count: stored_count(cur.read_u16()?),
    };

    // Both list offsets are map-relative. An offset equal to the map length
    // is tolerated for empty lists (a fork with no names points its name
    // list at the end of the map).
    if map.type_list_offset as u64 > map_len {
        return Err(ForkError::MalformedMap(format!(
            "type list offset {} outside the {map_len}-byte map",
            map.type_list_offset
        )));
    }
    if map.name_list_offset as u64 > map_len {
        return Err(ForkError::MalformedMap(format!(
            "name list offset {} outside the {map_len}-byte map",
            map.name_list_offset
        )));
    }
    let entries_end =
        map.type_list_offset as u64 + map.type_count as u64 * TYPE_ENTRY_SIZE as u64;
    if entries_end > map_len {
        return Err(ForkError::MalformedMap(format!(
            "{} type entries overrun the {map_len}-byte map",
            map.type_count
        )));
    }

    Ok((map, header_copy == *header))
}

/// Decode the `map.type_count` 8-byte entries at the type-list start.
///
/// Duplicate tags are legal (a legacy tooling artifact) and are preserved
/// as distinct entries in disk order, never merged.
pub fn decode_type_list(
    cur: &mut ByteCursor<'_>,
    header: &ForkHeader,
    map: &ResourceMap,
) -> Result<Vec<TypeEntry>> {
    cur.seek_to(header.map_offset as usize + map.type_list_offset as usize)?;

    let mut entries = Vec::with_capacity(map.type_count as usize);
    for _ in 0..map.type_count {
        let mut tag = [0u8; 4];
        tag.copy_from_slice(cur.read_bytes(4)?);
        let entry = TypeEntry {
            tag: ResType::new(tag),
            ref_list_offset: cur.read_u16()?,
            count: stored_count(cur.read_u16()?),
        };

        // the whole reference list must resolve inside the map region
        let refs_end = map.type_list_offset as u64
            + entry.ref_list_offset as u64
            + entry.count as u64 * REF_ENTRY_SIZE as u64;
        if refs_end > header.map_length as u64 {
            return Err(ForkError::MalformedTypeEntry(entry.tag));
        }
        entries.push(entry);
    }
    Ok(entries)
}

/// Decode one type's reference list: `entry.count` 12-byte records.
pub fn decode_reference_list(
    cur: &mut ByteCursor<'_>,
    header: &ForkHeader,
    map: &ResourceMap,
    entry: &TypeEntry,
) -> Result<Vec<RefEntry>> {
    cur.seek_to(
        header.map_offset as usize
            + map.type_list_offset as usize
            + entry.ref_list_offset as usize,
    )?;

    let mut refs = Vec::with_capacity(entry.count as usize);
    for _ in 0..entry.count {
        let id = cur.read_i16()?;
        let name_offset = cur.read_i16()?;
        // packed word: attribute byte on top of a 24-bit data offset
        let packed = cur.read_u32()?;
        cur.skip(4)?; // in-memory handle, reserved on disk

        let reference = RefEntry {
            id,
            name_offset,
            attributes: ResourceAttrs::new((packed >> 24) as u8),
            data_offset: packed & DATA_OFFSET_MASK,
        };
        if reference.data_offset as u64 > header.data_length as u64 {
            return Err(ForkError::MalformedReferenceEntry(entry.tag, id));
        }
        refs.push(reference);
    }
    Ok(refs)
}

/// Read a length-prefixed name from the name list.
///
/// Returns `None` for the −1 sentinel. The bytes come back raw; the name
/// list guarantees neither termination nor any text encoding.
pub fn resolve_name<'a>(
    cur: &mut ByteCursor<'a>,
    header: &ForkHeader,
    map: &ResourceMap,
    name_offset: i16,
) -> Result<Option<&'a [u8]>> {
    if name_offset == NAME_NONE {
        return Ok(None);
    }
    let abs =
        header.map_offset as i64 + map.name_list_offset as i64 + name_offset as i64;
    let abs = usize::try_from(abs).map_err(|_| ForkError::OffsetOutOfRange {
        offset: abs,
        len: cur.len(),
    })?;
    cur.seek_to(abs)?;
    cur.read_len_prefixed().map(Some)
}

/// Locate one resource's payload inside the data section.
///
/// Reads the u32 length prefix at `data_offset(header) + data_offset` and
/// returns the payload's byte range within the buffer. Never called during
/// the structural pass; payloads materialize on demand.
pub fn locate_data(
    cur: &mut ByteCursor<'_>,
    header: &ForkHeader,
    tag: ResType,
    id: i16,
    data_offset: u32,
) -> Result<Range<usize>> {
    let region_start = header.data_offset as u64;
    let region_end = region_start + header.data_length as u64;

    let record_start = region_start + data_offset as u64;
    if record_start + DATA_PREFIX_SIZE as u64 > region_end {
        return Err(ForkError::MalformedResourceData(tag, id));
    }
    cur.seek_to(record_start as usize)?;
    let payload_len = cur.read_u32()? as u64;

    let payload_start = record_start + DATA_PREFIX_SIZE as u64;
    if payload_start + payload_len > region_end {
        return Err(ForkError::MalformedResourceData(tag, id));
    }
    Ok(payload_start as usize..(payload_start + payload_len) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal valid fork: header + empty data section + 32-byte map with
    /// zero types (stored count 0xFFFF).
    fn empty_fork() -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&16u32.to_be_bytes()); // data offset
        buf.extend_from_slice(&16u32.to_be_bytes()); // map offset
        buf.extend_from_slice(&0u32.to_be_bytes()); // data length
        buf.extend_from_slice(&32u32.to_be_bytes()); // map length
        buf.extend_from_slice(&[0u8; 24]); // map prelude
        buf.extend_from_slice(&0u16.to_be_bytes()); // map attributes
        buf.extend_from_slice(&32u16.to_be_bytes()); // type list offset
        buf.extend_from_slice(&32u16.to_be_bytes()); // name list offset
        buf.extend_from_slice(&0xFFFFu16.to_be_bytes()); // type count − 1
        buf
    }

    #[test]
    fn test_decode_header_roundtrip() {
        let buf = empty_fork();
        let mut cur = ByteCursor::new(&buf);
        let header = decode_header(&mut cur).unwrap();
        assert_eq!(header.data_offset, 16);
        assert_eq!(header.map_offset, 16);
        assert_eq!(header.data_length, 0);
        assert_eq!(header.map_length, 32);
    }

    #[test]
    fn test_decode_header_short_buffer() {
        let buf = [0u8; 15];
        let mut cur = ByteCursor::new(&buf);
        assert_eq!(
            decode_header(&mut cur),
            Err(ForkError::MalformedHeader(HeaderDefect::Truncated))
        );
    }

    #[test]
    fn test_decode_header_map_past_eof() {
        let mut buf = empty_fork();
        buf[4..8].copy_from_slice(&0x1000u32.to_be_bytes());
        let mut cur = ByteCursor::new(&buf);
        assert_eq!(
            decode_header(&mut cur),
            Err(ForkError::MalformedHeader(HeaderDefect::OffsetOverflow))
        );
    }

    #[test]
    fn test_decode_map_zero_types() {
        let buf = empty_fork();
        let mut cur = ByteCursor::new(&buf);
        let header = decode_header(&mut cur).unwrap();
        let (map, _) = decode_map(&mut cur, &header).unwrap();
        assert_eq!(map.type_count, 0);
        assert_eq!(map.type_list_offset, 32);
        let types = decode_type_list(&mut cur, &header, &map).unwrap();
        assert!(types.is_empty());
    }

    #[test]
    fn test_decode_map_header_copy_detection() {
        let mut buf = empty_fork();
        // a true fork repeats the header at the start of the map prelude
        let copy: Vec<u8> = buf[0..16].to_vec();
        buf[16..32].copy_from_slice(&copy);
        let mut cur = ByteCursor::new(&buf);
        let header = decode_header(&mut cur).unwrap();
        let (_, is_fork) = decode_map(&mut cur, &header).unwrap();
        assert!(is_fork);

        let zeroed = empty_fork();
        let mut cur = ByteCursor::new(&zeroed);
        let header = decode_header(&mut cur).unwrap();
        let (_, is_fork) = decode_map(&mut cur, &header).unwrap();
        assert!(!is_fork);
    }

    #[test]
    fn test_decode_map_region_too_small() {
        let mut buf = empty_fork();
        buf[12..16].copy_from_slice(&20u32.to_be_bytes()); // map length 20
        let mut cur = ByteCursor::new(&buf);
        let header = decode_header(&mut cur).unwrap();
        assert!(matches!(
            decode_map(&mut cur, &header),
            Err(ForkError::MalformedMap(_))
        ));
    }

    #[test]
    fn test_decode_map_type_list_outside_region() {
        let mut buf = empty_fork();
        buf[42..44].copy_from_slice(&40u16.to_be_bytes()); // type list offset 40 > map length 32
        let mut cur = ByteCursor::new(&buf);
        let header = decode_header(&mut cur).unwrap();
        assert!(matches!(
            decode_map(&mut cur, &header),
            Err(ForkError::MalformedMap(_))
        ));
    }

    #[test]
    fn test_locate_data_prefix_past_region() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&16u32.to_be_bytes());
        buf.extend_from_slice(&22u32.to_be_bytes());
        buf.extend_from_slice(&6u32.to_be_bytes()); // data region: 16..22
        buf.extend_from_slice(&32u32.to_be_bytes());
        buf.resize(54, 0);
        // record claims 4 payload bytes but the region only has 2 left
        buf[16..20].copy_from_slice(&4u32.to_be_bytes());
        let header = ForkHeader {
            data_offset: 16,
            map_offset: 22,
            data_length: 6,
            map_length: 32,
        };
        let tag = ResType::new(*b"TEXT");
        let mut cur = ByteCursor::new(&buf);
        assert_eq!(
            locate_data(&mut cur, &header, tag, 0, 0),
            Err(ForkError::MalformedResourceData(tag, 0))
        );
        // and an offset that cannot even hold the prefix
        assert_eq!(
            locate_data(&mut cur, &header, tag, 0, 5),
            Err(ForkError::MalformedResourceData(tag, 0))
        );
    }
}
