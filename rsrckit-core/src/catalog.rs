//! The queryable resource catalog

use crate::cursor::ByteCursor;
use crate::decoder;
use crate::error::ForkError;
use crate::types::{ForkHeader, ResType, Resource, ResourceMap, TypeGroup};
use crate::Result;
use bytes::Bytes;
use std::sync::OnceLock;

#[cfg(feature = "logging")]
use tracing::debug;

/// Immutable, queryable view of a decoded resource fork.
///
/// [`ResourceCatalog::load`] runs the whole structural decode once — header,
/// map, type list, reference lists, names — and fails as a unit on the first
/// structural error; there is no partially populated catalog. Payload bytes
/// are left in place and only materialize (as zero-copy slices of the owned
/// buffer) when [`ResourceCatalog::data`] is called.
///
/// Once built, the catalog never changes: all accessors take `&self` and the
/// value is safe to share across threads.
#[derive(Debug)]
pub struct ResourceCatalog {
    buf: Bytes,
    header: ForkHeader,
    map: ResourceMap,
    groups: Vec<TypeGroup>,
    resource_fork: bool,
}

impl ResourceCatalog {
    /// Decode a complete fork image into a catalog.
    ///
    /// The buffer must hold the entire fork; the decoder performs no I/O.
    /// Structural failures abort the load with the most specific error;
    /// undecodable name bytes do not (names degrade lossily).
    pub fn load(buffer: impl Into<Bytes>) -> Result<Self> {
        let buf: Bytes = buffer.into();
        let mut cur = ByteCursor::new(&buf);

        let header = decoder::decode_header(&mut cur)?;
        #[cfg(feature = "logging")]
        debug!(
            "fork header: data {}+{}, map {}+{}",
            header.data_offset, header.data_length, header.map_offset, header.map_length
        );

        let (map, header_copy_matches) = decoder::decode_map(&mut cur, &header)?;
        if !header_copy_matches {
            #[cfg(feature = "logging")]
            debug!("map prelude does not repeat the header; input reads as a flattened resource file");
        }

        let type_entries = decoder::decode_type_list(&mut cur, &header, &map)?;
        let mut groups = Vec::with_capacity(type_entries.len());
        for entry in &type_entries {
            let refs = decoder::decode_reference_list(&mut cur, &header, &map, entry)?;
            let mut resources = Vec::with_capacity(refs.len());
            for reference in refs {
                let raw = decoder::resolve_name(&mut cur, &header, &map, reference.name_offset)?;
                let (name, name_raw) = match raw {
                    Some(bytes) => {
                        let (text, _, _) = encoding_rs::MACINTOSH.decode(bytes);
                        (Some(text.into_owned()), Some(Bytes::copy_from_slice(bytes)))
                    }
                    None => (None, None),
                };
                resources.push(Resource {
                    id: reference.id,
                    name,
                    name_raw,
                    attributes: reference.attributes,
                    data_offset: reference.data_offset,
                    data: OnceLock::new(),
                });
            }
            groups.push(TypeGroup {
                tag: entry.tag,
                resources,
            });
        }

        #[cfg(feature = "logging")]
        debug!(
            "catalog loaded: {} type groups, {} resources",
            groups.len(),
            groups.iter().map(|g| g.resources.len()).sum::<usize>()
        );

        Ok(Self {
            buf,
            header,
            map,
            groups,
            resource_fork: header_copy_matches,
        })
    }

    /// Distinct type tags in first-seen disk order.
    pub fn types(&self) -> Vec<ResType> {
        // forks carry few types; a linear scan keeps first-seen order
        let mut seen: Vec<ResType> = Vec::new();
        for group in &self.groups {
            if !seen.contains(&group.tag) {
                seen.push(group.tag);
            }
        }
        seen
    }

    /// Resource summaries for one type, without payloads.
    ///
    /// Duplicate type-list entries for the same tag are concatenated in
    /// first-seen order, so every reachable resource is listed.
    pub fn resources(&self, tag: ResType) -> Vec<&Resource> {
        self.groups
            .iter()
            .filter(|g| g.tag == tag)
            .flat_map(|g| g.resources.iter())
            .collect()
    }

    /// Look up one resource summary.
    pub fn resource(&self, tag: ResType, id: i16) -> Option<&Resource> {
        self.groups
            .iter()
            .filter(|g| g.tag == tag)
            .flat_map(|g| g.resources.iter())
            .find(|r| r.id == id)
    }

    /// Payload bytes for one resource.
    ///
    /// The first call reads the length-prefixed data record and caches the
    /// resulting slice for the catalog's lifetime; later calls (and
    /// concurrent first calls — first writer wins) return the same bytes.
    /// Failures are scoped to this resource and leave the catalog usable.
    pub fn data(&self, tag: ResType, id: i16) -> Result<Bytes> {
        let resource = self.resource(tag, id).ok_or(ForkError::NotFound(tag, id))?;
        if let Some(cached) = resource.data.get() {
            return Ok(cached.clone());
        }

        let mut cur = ByteCursor::new(&self.buf);
        let range = decoder::locate_data(&mut cur, &self.header, tag, id, resource.data_offset)?;
        let payload = self.buf.slice(range);
        Ok(resource.data.get_or_init(|| payload).clone())
    }

    /// On-disk payload length for one resource, without materializing it.
    ///
    /// Reads only the u32 length prefix; failures are scoped like
    /// [`ResourceCatalog::data`].
    pub fn data_size(&self, tag: ResType, id: i16) -> Result<u32> {
        let resource = self.resource(tag, id).ok_or(ForkError::NotFound(tag, id))?;
        if let Some(cached) = resource.data.get() {
            return Ok(cached.len() as u32);
        }

        let mut cur = ByteCursor::new(&self.buf);
        let range = decoder::locate_data(&mut cur, &self.header, tag, id, resource.data_offset)?;
        Ok(range.len() as u32)
    }

    /// Whether the container reads as a true resource fork.
    ///
    /// True iff the map's reserved prelude repeats the fork header — the
    /// in-memory copy the Resource Manager left behind when it wrote a real
    /// fork. Flattened resource files generally carry zeros there. This is
    /// a structural heuristic about the container's origin, not a different
    /// parse path.
    pub fn is_resource_fork(&self) -> bool {
        self.resource_fork
    }

    /// The decoded fork header.
    pub fn header(&self) -> &ForkHeader {
        &self.header
    }

    /// The raw resource-map attribute word.
    pub fn map_attributes(&self) -> u16 {
        self.map.attributes
    }

    /// On-disk type groups in disk order; duplicate tags stay separate.
    pub fn groups(&self) -> &[TypeGroup] {
        &self.groups
    }

    /// Number of distinct type tags.
    pub fn type_count(&self) -> usize {
        self.types().len()
    }

    /// Total number of resources across all groups.
    pub fn resource_count(&self) -> usize {
        self.groups.iter().map(|g| g.resources.len()).sum()
    }

    /// Whether the catalog holds no resources at all.
    pub fn is_empty(&self) -> bool {
        self.resource_count() == 0
    }
}
