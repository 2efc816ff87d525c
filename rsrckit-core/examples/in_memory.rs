//! Decode a fork image that already lives in memory — the decoder never
//! performs I/O, so any byte source works.

use rsrckit_core::{ResType, ResourceCatalog};

/// A minimal fork: one unnamed 'TEXT' resource, id 128, payload "hi".
fn sample_image() -> Vec<u8> {
    let mut buf = Vec::new();
    // header: data at 16 (6 bytes), map at 22 (52 bytes)
    buf.extend_from_slice(&16u32.to_be_bytes());
    buf.extend_from_slice(&22u32.to_be_bytes());
    buf.extend_from_slice(&6u32.to_be_bytes());
    buf.extend_from_slice(&52u32.to_be_bytes());
    // data section: one length-prefixed record
    buf.extend_from_slice(&2u32.to_be_bytes());
    buf.extend_from_slice(b"hi");
    // map: prelude, fixed fields, one type entry, one reference entry
    buf.extend_from_slice(&[0u8; 24]);
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&32u16.to_be_bytes());
    buf.extend_from_slice(&52u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(b"TEXT");
    buf.extend_from_slice(&8u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&128i16.to_be_bytes());
    buf.extend_from_slice(&(-1i16).to_be_bytes());
    buf.extend_from_slice(&0u32.to_be_bytes());
    buf.extend_from_slice(&0u32.to_be_bytes());
    buf
}

fn main() -> rsrckit_core::Result<()> {
    let catalog = ResourceCatalog::load(sample_image())?;

    let text = ResType::new(*b"TEXT");
    for res in catalog.resources(text) {
        let payload = catalog.data(text, res.id)?;
        println!(
            "'{text}' {} = {:?}",
            res.id,
            String::from_utf8_lossy(&payload)
        );
    }
    Ok(())
}
