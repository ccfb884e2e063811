// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Error types for ytree operations.
//!
//! Provides structured error handling with detailed context for debugging.

use std::fmt;

/// Standard Result type for all ytree operations.
pub type YtreeResult<T> = Result<T, YtreeError>;

/// Error types for ytree operations.
#[derive(Debug, Clone)]
pub enum YtreeError {
    /// Tree order outside the supported range.
    InvalidOrder { order: u16, min: u16, max: u16 },

    /// Structural inconsistency discovered during a mutation.
    ///
    /// Indicates a defect in the tree itself (for example a child that is
    /// missing from its parent's pointer table). Mutators surface this
    /// instead of aborting the process.
    CorruptedNode { node: u32, reason: String },

    /// I/O error during database file operations.
    IoError { operation: String, reason: String },

    /// Database file header is malformed (bad magic bytes or layout).
    InvalidHeader { reason: String },

    /// Database file is already locked by another process.
    LockFailed { path: String },

    /// Schema slot index outside the schema area.
    SlotOutOfRange { slot: usize, available: usize },
}

impl fmt::Display for YtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrder { order, min, max } => {
                write!(f, "Invalid B+Tree order: {} (supported: {}..={})", order, min, max)
            }
            Self::CorruptedNode { node, reason } => {
                write!(f, "Corrupted tree node {}: {}", node, reason)
            }
            Self::IoError { operation, reason } => {
                write!(f, "I/O error during '{}': {}", operation, reason)
            }
            Self::InvalidHeader { reason } => {
                write!(f, "Invalid database header: {}", reason)
            }
            Self::LockFailed { path } => {
                write!(f, "Database file '{}' is locked by another process", path)
            }
            Self::SlotOutOfRange { slot, available } => {
                write!(f, "Schema slot {} out of range ({} slots available)", slot, available)
            }
        }
    }
}

impl std::error::Error for YtreeError {}

// Convenience conversion from std::io::Error
impl From<std::io::Error> for YtreeError {
    fn from(err: std::io::Error) -> Self {
        YtreeError::IoError {
            operation: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}
