// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Folder-backed note store.
//!
//! One `<id>.json` record per note under the notes directory. Every read goes
//! to disk, so a Get in an edit session observes whatever a concurrent Put
//! persisted last. Writes land in a temp file first and are renamed into
//! place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{NoteStore, StoreError};
use crate::model::{Note, NoteId};

const NOTE_FILE_EXT: &str = "json";
const TMP_FILE_EXT: &str = "json.tmp";

#[derive(Debug, Clone)]
pub struct NoteFolder {
    dir: PathBuf,
}

impl NoteFolder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Seeds an empty directory with a root note so a fresh folder is
    /// browsable. Existing folders are left untouched.
    pub fn load_or_init(&self) -> Result<(), StoreError> {
        if self.note_path(NoteId::ROOT).exists() {
            return Ok(());
        }
        fs::create_dir_all(&self.dir)
            .map_err(|source| StoreError::Io { path: self.dir.clone(), source })?;
        self.write_note(NoteId::ROOT, &Note::new("Notes"))
    }

    fn note_path(&self, id: NoteId) -> PathBuf {
        self.dir.join(format!("{id}.{NOTE_FILE_EXT}"))
    }

    fn read_note(&self, id: NoteId) -> Result<Note, StoreError> {
        let path = self.note_path(id);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound { id });
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::Json { path, source })
    }

    /// Writes a temp file and renames atomically into place, so readers never
    /// observe a half-written record.
    fn write_note(&self, id: NoteId, note: &Note) -> Result<(), StoreError> {
        let path = self.note_path(id);
        let tmp = path.with_extension(TMP_FILE_EXT);
        let raw = serde_json::to_string_pretty(note)
            .map_err(|source| StoreError::Json { path: path.clone(), source })?;
        fs::write(&tmp, raw).map_err(|source| StoreError::Io { path: tmp.clone(), source })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io { path, source })
    }
}

impl NoteStore for NoteFolder {
    fn get_note(&self, id: NoteId) -> Result<Note, StoreError> {
        self.read_note(id)
    }

    fn update_note(&self, id: NoteId, body: &str) -> Result<(), StoreError> {
        let mut note = self.read_note(id)?;
        note.set_body(body);
        self.write_note(id, &note)
    }
}

#[cfg(test)]
mod tests;
