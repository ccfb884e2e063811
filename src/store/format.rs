// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! On-disk layout of the ytree database file.
//!
//! The file opens with a fixed header, followed by the schema area and a
//! pre-allocated data page. All multi-byte fields are little-endian.
//!
//! ## File Layout
//! ```text
//! Offset        | Size            | Content
//! --------------|-----------------|----------------------------
//! 0             | 8               | magic "YTREE01\0"
//! 8             | 4               | schema_offset (u32)
//! 12            | 2               | page_size (u16)
//! 14            | 1               | flags (u8, reserved zero)
//! 15            | 1               | padding
//! 16            | slots * 9       | schema area
//! page_size     | page_size       | first data page
//! ```
//!
//! The schema area holds `page_size / 128` fixed 9-byte slots. A fresh
//! file is fully zeroed past the header, which doubles as "every slot
//! empty" since the empty slot kind is 0.

use crate::error::{YtreeError, YtreeResult};

/// Magic bytes opening every database file.
pub const DB_MAGIC: [u8; 8] = *b"YTREE01\0";

/// Serialized header size; the schema area starts right after.
pub const HEADER_SIZE: usize = 16;

/// Serialized schema slot size.
pub const SLOT_SIZE: usize = 9;

/// Bytes of page per schema slot: a page of 1024 carries 8 slots.
pub const SLOT_DIVISOR: usize = 128;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u16 = 1024;

/// Schema slot kind: vacant.
pub const SLOT_KIND_EMPTY: u8 = 0;

/// Schema slot kind: registered tree.
pub const SLOT_KIND_TREE: u8 = 1;

/// Database file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbHeader {
    /// Byte offset of the schema area.
    pub schema_offset: u32,

    /// Page size in bytes.
    pub page_size: u16,

    /// Reserved flag byte, always zero.
    pub flags: u8,
}

impl DbHeader {
    /// Header for a fresh file with the given page size.
    pub fn new(page_size: u16) -> Self {
        Self {
            schema_offset: HEADER_SIZE as u32,
            page_size,
            flags: 0,
        }
    }

    /// Number of schema slots the file carries.
    pub fn slot_count(&self) -> usize {
        self.page_size as usize / SLOT_DIVISOR
    }

    /// Byte offset of schema slot `index`.
    pub fn slot_offset(&self, index: usize) -> usize {
        self.schema_offset as usize + index * SLOT_SIZE
    }

    /// Byte offset of the first data page.
    pub fn first_page_offset(&self) -> usize {
        self.page_size as usize
    }

    /// Serialise to the fixed 16-byte layout.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];

        // Offset 0: magic (8 bytes)
        bytes[0..8].copy_from_slice(&DB_MAGIC);

        // Offset 8: schema_offset (4 bytes, little-endian)
        bytes[8..12].copy_from_slice(&self.schema_offset.to_le_bytes());

        // Offset 12: page_size (2 bytes, little-endian)
        bytes[12..14].copy_from_slice(&self.page_size.to_le_bytes());

        // Offset 14: flags (1 byte); offset 15 stays zero padding
        bytes[14] = self.flags;

        bytes
    }

    /// Deserialise from a 16-byte slice, validating magic and bounds.
    ///
    /// ## Output
    /// - `Ok(DbHeader)`: Parsed and plausible
    /// - `Err(YtreeError::InvalidHeader)`: Wrong length, bad magic, or a
    ///   page size too small to carry the schema area
    pub fn from_bytes(bytes: &[u8]) -> YtreeResult<Self> {
        if bytes.len() != HEADER_SIZE {
            return Err(YtreeError::InvalidHeader {
                reason: format!("header must be {} bytes, got {}", HEADER_SIZE, bytes.len()),
            });
        }
        if bytes[0..8] != DB_MAGIC {
            return Err(YtreeError::InvalidHeader {
                reason: "bad magic bytes".to_string(),
            });
        }

        let schema_offset = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        let page_size = u16::from_le_bytes([bytes[12], bytes[13]]);
        let flags = bytes[14];

        let header = Self {
            schema_offset,
            page_size,
            flags,
        };
        if (page_size as usize) < SLOT_DIVISOR {
            return Err(YtreeError::InvalidHeader {
                reason: format!("page size {} below minimum {}", page_size, SLOT_DIVISOR),
            });
        }
        if (schema_offset as usize) < HEADER_SIZE
            || header.slot_offset(header.slot_count()) > header.first_page_offset()
        {
            return Err(YtreeError::InvalidHeader {
                reason: "schema area overlaps header or data pages".to_string(),
            });
        }
        Ok(header)
    }
}

/// One entry in the schema area.
///
/// A zeroed slot is vacant; a registered tree records its id, the offset
/// of its root page, and its order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaSlot {
    /// Caller-chosen tree id.
    pub id: u16,

    /// Slot kind, one of the `SLOT_KIND_*` constants.
    pub kind: u8,

    /// Byte offset of the tree's root page.
    pub root_offset: u32,

    /// Tree order (fan-out).
    pub order: u16,
}

impl SchemaSlot {
    /// A vacant slot (all zero).
    pub fn empty() -> Self {
        Self {
            id: 0,
            kind: SLOT_KIND_EMPTY,
            root_offset: 0,
            order: 0,
        }
    }

    /// Whether the slot is vacant.
    pub fn is_empty(&self) -> bool {
        self.kind == SLOT_KIND_EMPTY
    }

    /// Serialise to the fixed 9-byte layout.
    pub fn to_bytes(&self) -> [u8; SLOT_SIZE] {
        let mut bytes = [0u8; SLOT_SIZE];
        bytes[0..2].copy_from_slice(&self.id.to_le_bytes());
        bytes[2] = self.kind;
        bytes[3..7].copy_from_slice(&self.root_offset.to_le_bytes());
        bytes[7..9].copy_from_slice(&self.order.to_le_bytes());
        bytes
    }

    /// Deserialise from a 9-byte slice.
    pub fn from_bytes(bytes: &[u8]) -> YtreeResult<Self> {
        if bytes.len() != SLOT_SIZE {
            return Err(YtreeError::InvalidHeader {
                reason: format!("schema slot must be {} bytes, got {}", SLOT_SIZE, bytes.len()),
            });
        }
        Ok(Self {
            id: u16::from_le_bytes([bytes[0], bytes[1]]),
            kind: bytes[2],
            root_offset: u32::from_le_bytes([bytes[3], bytes[4], bytes[5], bytes[6]]),
            order: u16::from_le_bytes([bytes[7], bytes[8]]),
        })
    }
}
