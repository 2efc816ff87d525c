//! Constants and limits for the resource fork container format

use serde::{Deserialize, Serialize};

/// Size of the fixed fork header: four big-endian u32 fields
pub const HEADER_SIZE: usize = 16;

/// Reserved region following the header, historically system scratch space; ignored on read
pub const HEADER_RESERVED_SIZE: usize = 112;

/// Reserved prelude at the start of the resource map (in-memory header copy plus handle fields)
pub const MAP_PRELUDE_SIZE: usize = 24;

/// Size of the in-memory header copy at the start of the map prelude
pub const MAP_HEADER_COPY_SIZE: usize = 16;

/// Size of one type-list entry: tag(4) + reference-list offset(2) + stored count(2)
pub const TYPE_ENTRY_SIZE: usize = 8;

/// Size of one reference-list entry: id(2) + name offset(2) + attributes/data offset(4) + reserved(4)
pub const REF_ENTRY_SIZE: usize = 12;

/// Length prefix in front of every data record
pub const DATA_PREFIX_SIZE: usize = 4;

/// Name-offset sentinel marking an unnamed resource
pub const NAME_NONE: i16 = -1;

/// Apple's documented ceiling: "The maximum size of the resource fork in a file is 16 megabytes"
pub const MAX_FORK_SIZE: usize = 16 * 1024 * 1024;

/// Counts are stored on disk as count−1, so 0xFFFF denotes zero entries
pub const fn stored_count(raw: u16) -> u16 {
    raw.wrapping_add(1)
}

/// Resource attribute flags (stored as a single byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceAttrs(u8);

impl ResourceAttrs {
    /// No attributes set
    pub const NONE: u8 = 0;

    /// Load into the system heap instead of the application heap
    pub const SYS_HEAP: u8 = 64;

    /// May be purged from memory under pressure
    pub const PURGEABLE: u8 = 32;

    /// Load locked, not relocatable
    pub const LOCKED: u8 = 16;

    /// Protected from modification by the Resource Manager
    pub const PROTECTED: u8 = 8;

    /// Load as soon as the file is opened
    pub const PRELOAD: u8 = 4;

    /// Changed since load (meaningful only to writers)
    pub const CHANGED: u8 = 2;

    /// Create attributes from the raw byte
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Get the raw attribute byte
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Check the system-heap bit
    pub const fn is_sys_heap(&self) -> bool {
        (self.0 & Self::SYS_HEAP) != 0
    }

    /// Check the purgeable bit
    pub const fn is_purgeable(&self) -> bool {
        (self.0 & Self::PURGEABLE) != 0
    }

    /// Check the locked bit
    pub const fn is_locked(&self) -> bool {
        (self.0 & Self::LOCKED) != 0
    }

    /// Check the protected bit
    pub const fn is_protected(&self) -> bool {
        (self.0 & Self::PROTECTED) != 0
    }

    /// Check the preload bit
    pub const fn is_preload(&self) -> bool {
        (self.0 & Self::PRELOAD) != 0
    }

    /// Check the changed bit
    pub const fn is_changed(&self) -> bool {
        (self.0 & Self::CHANGED) != 0
    }

    /// Human-readable labels for the set bits, in display order
    pub fn labels(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.is_sys_heap() {
            out.push("System Heap");
        }
        if self.is_purgeable() {
            out.push("Purgeable");
        }
        if self.is_locked() {
            out.push("Locked");
        }
        if self.is_protected() {
            out.push("Protected");
        }
        if self.is_preload() {
            out.push("Preload");
        }
        if self.is_changed() {
            out.push("Changed");
        }
        out
    }
}

impl core::fmt::Display for ResourceAttrs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.labels().join(", "))
    }
}
