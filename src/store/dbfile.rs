// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Database file handle for the on-disk prototype.
//!
//! Creates and validates `YTREE01` files, registers trees in the schema
//! area, and allocates fixed-size pages at the end of the file. The file
//! is memory-mapped and held under an exclusive advisory lock for the
//! lifetime of the handle, enforcing the single-mutator model.
//!
//! The in-memory tree never reads or writes this file implicitly; the
//! prototype is a bounded collaborator driven explicitly by callers.
//!
//! ## Example Usage
//!
//! ```no_run
//! use ytree::{DbFile, Order};
//! use ytree::store::format::DEFAULT_PAGE_SIZE;
//!
//! let mut db = DbFile::create("index.ydb", DEFAULT_PAGE_SIZE)?;
//! db.register_tree(0, 1, Order::new(4)?)?;
//! let page = db.allocate_page()?;
//! assert_eq!(page as usize % DEFAULT_PAGE_SIZE as usize, 0);
//! # Ok::<(), ytree::YtreeError>(())
//! ```

use crate::btree::Order;
use crate::error::{YtreeError, YtreeResult};
use crate::store::format::{
    DbHeader, SchemaSlot, HEADER_SIZE, SLOT_DIVISOR, SLOT_KIND_TREE, SLOT_SIZE,
};
use fs2::FileExt;
use memmap2::MmapMut;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Open database file: header, schema area, and data pages under mmap.
pub struct DbFile {
    /// Path the file was opened from.
    path: PathBuf,

    /// File handle; also carries the advisory lock.
    file: File,

    /// Memory-mapped file contents (writable).
    mmap: MmapMut,

    /// Parsed header.
    header: DbHeader,
}

impl std::fmt::Debug for DbFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbFile")
            .field("path", &self.path)
            .field("header", &self.header)
            .field("len", &self.mmap.len())
            .finish()
    }
}

impl DbFile {
    /// Create a fresh database file, truncating any existing content.
    ///
    /// Writes the header, zeroes the schema area, and pre-allocates one
    /// data page; the resulting file is `2 * page_size` bytes.
    ///
    /// ## Input
    /// - `path`: File to create
    /// - `page_size`: Page size in bytes (minimum 128)
    ///
    /// ## Output
    /// - `Ok(DbFile)`: Created, locked, and mapped
    /// - `Err(YtreeError::InvalidHeader)`: Page size below minimum
    /// - `Err(YtreeError::LockFailed)`: Another process holds the file
    /// - `Err(YtreeError::IoError)`: Underlying I/O failure
    pub fn create<P: AsRef<Path>>(path: P, page_size: u16) -> YtreeResult<Self> {
        if (page_size as usize) < SLOT_DIVISOR {
            return Err(YtreeError::InvalidHeader {
                reason: format!("page size {} below minimum {}", page_size, SLOT_DIVISOR),
            });
        }
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&path)
            .map_err(|e| YtreeError::IoError {
                operation: "create_db".to_string(),
                reason: e.to_string(),
            })?;
        Self::lock(&file, &path)?;

        // Reset to a zeroed layout only once the lock is held: header and
        // schema area below the first page boundary, one data page after.
        file.set_len(0).map_err(|e| YtreeError::IoError {
            operation: "truncate_db".to_string(),
            reason: e.to_string(),
        })?;
        file.set_len(2 * page_size as u64)
            .map_err(|e| YtreeError::IoError {
                operation: "size_db".to_string(),
                reason: e.to_string(),
            })?;

        let mut mmap = Self::map(&file)?;
        let header = DbHeader::new(page_size);
        mmap[0..HEADER_SIZE].copy_from_slice(&header.to_bytes());
        // Schema area and data page are already zeroed by set_len.
        mmap.flush().map_err(|e| YtreeError::IoError {
            operation: "flush_db_header".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            path,
            file,
            mmap,
            header,
        })
    }

    /// Open and validate an existing database file.
    ///
    /// ## Output
    /// - `Ok(DbFile)`: Magic and layout check out
    /// - `Err(YtreeError::InvalidHeader)`: Bad magic, truncated file, or
    ///   implausible layout
    /// - `Err(YtreeError::LockFailed)`: Another process holds the file
    pub fn open<P: AsRef<Path>>(path: P) -> YtreeResult<Self> {
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|e| YtreeError::IoError {
                operation: "open_db".to_string(),
                reason: e.to_string(),
            })?;
        Self::lock(&file, &path)?;

        let mmap = Self::map(&file)?;
        if mmap.len() < HEADER_SIZE {
            return Err(YtreeError::InvalidHeader {
                reason: format!("file is only {} bytes", mmap.len()),
            });
        }
        let header = DbHeader::from_bytes(&mmap[0..HEADER_SIZE])?;
        if mmap.len() < 2 * header.page_size as usize {
            return Err(YtreeError::InvalidHeader {
                reason: "file shorter than schema area plus first page".to_string(),
            });
        }

        Ok(Self {
            path,
            file,
            mmap,
            header,
        })
    }

    /// Parsed file header.
    pub fn header(&self) -> DbHeader {
        self.header
    }

    /// Path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read schema slot `index`.
    pub fn slot(&self, index: usize) -> YtreeResult<SchemaSlot> {
        let offset = self.slot_bounds(index)?;
        SchemaSlot::from_bytes(&self.mmap[offset..offset + SLOT_SIZE])
    }

    /// Register a tree in schema slot `index`.
    ///
    /// The slot records the tree id, its order, and the first data page
    /// as its root page offset.
    pub fn register_tree(&mut self, index: usize, id: u16, order: Order) -> YtreeResult<()> {
        let offset = self.slot_bounds(index)?;
        let slot = SchemaSlot {
            id,
            kind: SLOT_KIND_TREE,
            root_offset: self.header.first_page_offset() as u32,
            order: order.value(),
        };
        self.mmap[offset..offset + SLOT_SIZE].copy_from_slice(&slot.to_bytes());
        self.mmap.flush().map_err(|e| YtreeError::IoError {
            operation: "flush_schema_slot".to_string(),
            reason: e.to_string(),
        })
    }

    /// Allocate a fresh page at the end of the file.
    ///
    /// Grows the file by one page and remaps.
    ///
    /// ## Output
    /// - `Ok(offset)`: Byte offset of the zeroed page
    pub fn allocate_page(&mut self) -> YtreeResult<u32> {
        let offset = self.mmap.len();
        let new_len = offset as u64 + self.header.page_size as u64;
        self.file
            .set_len(new_len)
            .map_err(|e| YtreeError::IoError {
                operation: "grow_db".to_string(),
                reason: e.to_string(),
            })?;
        self.mmap = Self::map(&self.file)?;
        Ok(offset as u32)
    }

    /// Number of data pages currently allocated.
    pub fn page_count(&self) -> usize {
        (self.mmap.len() / self.header.page_size as usize).saturating_sub(1)
    }

    fn slot_bounds(&self, index: usize) -> YtreeResult<usize> {
        let available = self.header.slot_count();
        if index >= available {
            return Err(YtreeError::SlotOutOfRange {
                slot: index,
                available,
            });
        }
        Ok(self.header.slot_offset(index))
    }

    fn lock(file: &File, path: &Path) -> YtreeResult<()> {
        file.try_lock_exclusive().map_err(|_| YtreeError::LockFailed {
            path: path.display().to_string(),
        })
    }

    fn map(file: &File) -> YtreeResult<MmapMut> {
        unsafe {
            MmapMut::map_mut(file).map_err(|e| YtreeError::IoError {
                operation: "mmap_db".to_string(),
                reason: e.to_string(),
            })
        }
    }
}

impl Drop for DbFile {
    /// Releases the advisory lock.
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
