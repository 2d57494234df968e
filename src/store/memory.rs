// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{NoteStore, StoreError};
use crate::model::{Note, NoteId};

/// In-memory note store used by `--demo` mode and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: Mutex<HashMap<NoteId, Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: impl IntoIterator<Item = (NoteId, Note)>) -> Self {
        Self { notes: Mutex::new(notes.into_iter().collect()) }
    }

    /// The built-in demo notebook.
    pub fn demo() -> Self {
        Self::with_notes(crate::model::fixtures::demo_notebook())
    }

    pub fn insert(&self, id: NoteId, note: Note) {
        self.lock().insert(id, note);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<NoteId, Note>> {
        self.notes.lock().expect("memory store lock poisoned")
    }
}

impl NoteStore for MemoryStore {
    fn get_note(&self, id: NoteId) -> Result<Note, StoreError> {
        self.lock().get(&id).cloned().ok_or(StoreError::NotFound { id })
    }

    fn update_note(&self, id: NoteId, body: &str) -> Result<(), StoreError> {
        let mut notes = self.lock();
        let note = notes.get_mut(&id).ok_or(StoreError::NotFound { id })?;
        note.set_body(body);
        Ok(())
    }
}
