//! File-loading helpers: the external collaborator that hands the decoder a
//! fully buffered fork image.
//!
//! The decoder itself never touches storage; these functions read a file's
//! resource fork (through the named-fork pseudo-path) or a flattened
//! resource file into a [`Bytes`] buffer and hand it to
//! [`ResourceCatalog::load`].

use crate::catalog::ResourceCatalog;
use crate::constants::MAX_FORK_SIZE;
use crate::error::ForkError;
use crate::Result;
use bytes::Bytes;
use std::fs;
use std::path::Path;

#[cfg(feature = "logging")]
use tracing::debug;

/// Pseudo-path suffix exposing a file's resource fork; resolves on macOS,
/// errors elsewhere so callers fall back to the flat file
const NAMED_FORK_SUFFIX: &str = "..namedfork/rsrc";

fn checked(data: Vec<u8>, origin: &Path) -> Result<Bytes> {
    if data.is_empty() {
        return Err(ForkError::Io(format!("{}: empty input", origin.display())));
    }
    if data.len() > MAX_FORK_SIZE {
        return Err(ForkError::Io(format!(
            "{}: {} bytes exceeds the {MAX_FORK_SIZE}-byte fork limit",
            origin.display(),
            data.len()
        )));
    }
    Ok(Bytes::from(data))
}

/// Read a file's resource fork through the named-fork pseudo-path.
pub fn read_fork<P: AsRef<Path>>(path: P) -> Result<Bytes> {
    let fork_path = path.as_ref().join(NAMED_FORK_SUFFIX);
    checked(fs::read(&fork_path)?, path.as_ref())
}

/// Read a flattened resource file's contents.
pub fn read_flat<P: AsRef<Path>>(path: P) -> Result<Bytes> {
    checked(fs::read(path.as_ref())?, path.as_ref())
}

/// Open a file as a resource catalog.
///
/// Tries the true resource fork first and falls back to treating the file's
/// own contents as a flattened resource file; the error reported is the
/// flat attempt's, the one a caller can usually act on.
pub fn open<P: AsRef<Path>>(path: P) -> Result<ResourceCatalog> {
    let path = path.as_ref();
    match read_fork(path).and_then(ResourceCatalog::load) {
        Ok(catalog) => {
            #[cfg(feature = "logging")]
            debug!("{}: loaded from the named fork", path.display());
            Ok(catalog)
        }
        Err(_) => {
            #[cfg(feature = "logging")]
            debug!("{}: no usable named fork, reading the file flat", path.display());
            ResourceCatalog::load(read_flat(path)?)
        }
    }
}
