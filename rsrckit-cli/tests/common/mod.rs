//! Test helper: assemble small fork images on disk for the CLI to open.

/// Build a fork image holding the given `(tag, id, name, payload)` resources,
/// one type group per distinct tag in first-seen order.
pub fn build_fork(resources: &[(&[u8; 4], i16, Option<&[u8]>, &[u8])]) -> Vec<u8> {
    // group by tag, preserving first-seen order
    let mut groups: Vec<(&[u8; 4], Vec<usize>)> = Vec::new();
    for (index, (tag, ..)) in resources.iter().enumerate() {
        match groups.iter_mut().find(|(t, _)| t == tag) {
            Some((_, members)) => members.push(index),
            None => groups.push((*tag, vec![index])),
        }
    }
    let order: Vec<usize> = groups.iter().flat_map(|(_, m)| m.iter().copied()).collect();

    let mut data = Vec::new();
    let mut data_offsets = vec![0u32; resources.len()];
    let mut names = Vec::new();
    let mut name_offsets = vec![-1i16; resources.len()];
    for &index in &order {
        let (_, _, name, payload) = resources[index];
        data_offsets[index] = data.len() as u32;
        data.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        data.extend_from_slice(payload);
        if let Some(name) = name {
            name_offsets[index] = names.len() as i16;
            names.push(name.len() as u8);
            names.extend_from_slice(name);
        }
    }

    let name_list_offset = 32 + 8 * groups.len() + 12 * resources.len();
    let map_length = name_list_offset + names.len();
    let map_offset = 16 + data.len();

    let mut buf = Vec::new();
    buf.extend_from_slice(&16u32.to_be_bytes());
    buf.extend_from_slice(&(map_offset as u32).to_be_bytes());
    buf.extend_from_slice(&(data.len() as u32).to_be_bytes());
    buf.extend_from_slice(&(map_length as u32).to_be_bytes());
    buf.extend_from_slice(&data);

    buf.extend_from_slice(&[0u8; 24]);
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&32u16.to_be_bytes());
    buf.extend_from_slice(&(name_list_offset as u16).to_be_bytes());
    buf.extend_from_slice(&(groups.len() as u16).wrapping_sub(1).to_be_bytes());

    let mut ref_offset = 8 * groups.len();
    for (tag, members) in &groups {
        buf.extend_from_slice(*tag);
        buf.extend_from_slice(&(ref_offset as u16).to_be_bytes());
        buf.extend_from_slice(&(members.len() as u16).wrapping_sub(1).to_be_bytes());
        ref_offset += 12 * members.len();
    }
    for &index in &order {
        let (_, id, ..) = resources[index];
        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&name_offsets[index].to_be_bytes());
        buf.extend_from_slice(&data_offsets[index].to_be_bytes());
        buf.extend_from_slice(&[0u8; 4]);
    }
    buf.extend_from_slice(&names);
    buf
}
