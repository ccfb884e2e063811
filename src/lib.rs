// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! ytree - in-memory B+Tree index engine with typed records.
//!
//! An ordered index over signed 32-bit integer keys. Each key maps to a
//! typed record (char, int, float, or opaque bytes) owned by the tree.
//!
//! ## Features
//!
//! - **B+Tree core**: splits, merges, redistribution, and root collapse
//!   with the full set of structural invariants maintained
//! - **Ordered access**: point lookup, inclusive range scans, and lazy
//!   full-tree iteration via the linked leaf chain
//! - **Record lifecycle**: ownership transfer on insert, per-tree release
//!   hook for opaque payloads on delete and purge
//! - **Interactive shell**: single-letter command REPL over a live tree
//! - **Database file prototype**: `YTREE01` header, schema slots, and
//!   page allocation behind an exclusive file lock
//!
//! ## Quick Start
//!
//! ```rust
//! use ytree::{BPlusTree, Record};
//!
//! let mut tree = BPlusTree::new();
//! tree.insert(42, Record::new_int(42))?;
//!
//! assert_eq!(tree.find(42).and_then(|r| r.as_int()), Some(42));
//! assert_eq!(tree.count(), 1);
//! # Ok::<(), ytree::YtreeError>(())
//! ```
//!
//! ## Architecture
//!
//! ytree is organised into modules:
//!
//! - **btree**: the index engine (arena, nodes, tree algorithms, scans,
//!   dumps)
//! - **store**: bounded on-disk prototype (header, schema area, pages);
//!   the in-memory tree stays authoritative
//! - **error**: structured error types shared across the crate

pub mod btree;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use btree::{
    dump_leaves, dump_tree, BPlusTree, Key, NodeId, Order, RangeScan, Record, RecordKind,
    ReleaseHook, TreeStats, DEFAULT_ORDER, MAX_ORDER, MIN_ORDER,
};
pub use error::{YtreeError, YtreeResult};
pub use store::{DbFile, DbHeader, SchemaSlot};
