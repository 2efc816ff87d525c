pub mod cat;
pub mod extract;
pub mod info;
pub mod list;

use anyhow::{bail, Result};
use rsrckit_core::ResType;

/// Parse a user-supplied type name into a tag, padding short names with
/// spaces the way classic tools accepted them (`snd` means `snd `).
pub fn parse_type(name: &str) -> Result<ResType> {
    let bytes = name.as_bytes();
    if bytes.is_empty() || bytes.len() > 4 {
        bail!("type '{name}' must be 1 to 4 characters");
    }
    let mut tag = [b' '; 4];
    tag[..bytes.len()].copy_from_slice(bytes);
    Ok(ResType::new(tag))
}
