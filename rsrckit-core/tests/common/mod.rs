//! Shared fixture builder emitting well-formed fork images.
//!
//! The library itself is read-only by design, so the only writer in the
//! repository lives with the tests.

// each test binary compiles this module; not all of them use every helper
#![allow(dead_code)]

/// One resource to place in a fixture
#[derive(Clone)]
pub struct ResSpec {
    pub id: i16,
    pub name: Option<Vec<u8>>,
    pub attrs: u8,
    pub data: Vec<u8>,
}

impl ResSpec {
    pub fn new(id: i16, data: &[u8]) -> Self {
        Self {
            id,
            name: None,
            attrs: 0,
            data: data.to_vec(),
        }
    }

    pub fn named(mut self, name: &[u8]) -> Self {
        assert!(name.len() <= 255, "name must fit its length byte");
        self.name = Some(name.to_vec());
        self
    }

    pub fn attrs(mut self, attrs: u8) -> Self {
        self.attrs = attrs;
        self
    }
}

/// Builder assembling a fork image from type groups.
///
/// Each `group` call emits one type-list entry, so the same tag can appear
/// in several groups, exactly as legacy tooling sometimes wrote it.
#[derive(Default)]
pub struct ForkBuilder {
    groups: Vec<([u8; 4], Vec<ResSpec>)>,
    header_copy: bool,
    map_attributes: u16,
}

impl ForkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, tag: [u8; 4], resources: Vec<ResSpec>) -> Self {
        self.groups.push((tag, resources));
        self
    }

    /// Repeat the header in the map prelude, the signature of a true fork
    pub fn as_resource_fork(mut self) -> Self {
        self.header_copy = true;
        self
    }

    pub fn map_attributes(mut self, attributes: u16) -> Self {
        self.map_attributes = attributes;
        self
    }

    pub fn build(self) -> Vec<u8> {
        const DATA_START: usize = 16;
        const TYPE_LIST_OFFSET: usize = 32; // prelude 24 + fixed fields 8

        let group_count = self.groups.len();
        let resource_count: usize = self.groups.iter().map(|(_, r)| r.len()).sum();

        // data section: length-prefixed records in group order
        let mut data = Vec::new();
        let mut data_offsets = Vec::with_capacity(resource_count);
        for (_, resources) in &self.groups {
            for res in resources {
                data_offsets.push(data.len() as u32);
                data.extend_from_slice(&(res.data.len() as u32).to_be_bytes());
                data.extend_from_slice(&res.data);
            }
        }

        // name list: length-prefixed names in group order
        let mut names = Vec::new();
        let mut name_offsets = Vec::with_capacity(resource_count);
        for (_, resources) in &self.groups {
            for res in resources {
                match &res.name {
                    Some(name) => {
                        name_offsets.push(names.len() as i16);
                        names.push(name.len() as u8);
                        names.extend_from_slice(name);
                    }
                    None => name_offsets.push(-1),
                }
            }
        }

        let name_list_offset = TYPE_LIST_OFFSET + 8 * group_count + 12 * resource_count;
        let map_length = name_list_offset + names.len();
        let map_offset = DATA_START + data.len();

        let mut header = Vec::with_capacity(16);
        header.extend_from_slice(&(DATA_START as u32).to_be_bytes());
        header.extend_from_slice(&(map_offset as u32).to_be_bytes());
        header.extend_from_slice(&(data.len() as u32).to_be_bytes());
        header.extend_from_slice(&(map_length as u32).to_be_bytes());

        let mut buf = Vec::with_capacity(map_offset + map_length);
        buf.extend_from_slice(&header);
        buf.extend_from_slice(&data);

        // map prelude: optional header copy, then handle/file-ref scratch
        if self.header_copy {
            buf.extend_from_slice(&header);
        } else {
            buf.extend_from_slice(&[0u8; 16]);
        }
        buf.extend_from_slice(&[0u8; 8]);

        // fixed map fields
        buf.extend_from_slice(&self.map_attributes.to_be_bytes());
        buf.extend_from_slice(&(TYPE_LIST_OFFSET as u16).to_be_bytes());
        buf.extend_from_slice(&(name_list_offset as u16).to_be_bytes());
        buf.extend_from_slice(&(group_count as u16).wrapping_sub(1).to_be_bytes());

        // type list; reference-list offsets are relative to the list itself
        let mut ref_offset = 8 * group_count;
        for (tag, resources) in &self.groups {
            buf.extend_from_slice(tag);
            buf.extend_from_slice(&(ref_offset as u16).to_be_bytes());
            buf.extend_from_slice(&(resources.len() as u16).wrapping_sub(1).to_be_bytes());
            ref_offset += 12 * resources.len();
        }

        // reference lists
        let mut index = 0;
        for (_, resources) in &self.groups {
            for res in resources {
                buf.extend_from_slice(&res.id.to_be_bytes());
                buf.extend_from_slice(&name_offsets[index].to_be_bytes());
                let packed = ((res.attrs as u32) << 24) | data_offsets[index];
                buf.extend_from_slice(&packed.to_be_bytes());
                buf.extend_from_slice(&[0u8; 4]); // reserved handle
                index += 1;
            }
        }

        buf.extend_from_slice(&names);
        debug_assert_eq!(buf.len(), map_offset + map_length);
        buf
    }
}
