// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Note storage backends.
//!
//! The browser and edit sessions consume the [`NoteStore`] trait only. The
//! folder store persists one JSON record per note; the memory store backs
//! `--demo` mode and tests.

pub mod folder;
pub mod memory;

pub use folder::NoteFolder;
pub use memory::MemoryStore;

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::model::{Note, NoteId};

/// Read/write access to the external note store.
///
/// Calls are synchronous and offer per-call consistency only: two reads of the
/// same id may observe different notes if a writer ran in between.
pub trait NoteStore: Send + Sync {
    fn get_note(&self, id: NoteId) -> Result<Note, StoreError>;

    /// Replaces the body of an existing note. Title, children and files are
    /// untouched.
    fn update_note(&self, id: NoteId, body: &str) -> Result<(), StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    NotFound {
        id: NoteId,
    },
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "note {id} not found"),
            Self::Io { path, source } => write!(f, "io error at {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "malformed note record at {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}
