// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared expand/collapse state for the tree view.
//!
//! One instance lives as long as the browser window. The guard makes "toggle
//! then redraw" a single critical section: the browser renders while still
//! holding the lock it toggled under, so no concurrent toggle can interleave
//! with a render and no render can observe half of a toggle.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::model::NoteId;

/// Expand/collapse flags per note. Absent entries read as collapsed. Entries
/// are never removed; stale ids just sit in the map, which stays bounded by
/// the notes ever seen.
#[derive(Debug, Default)]
pub struct ExpandState {
    inner: Mutex<HashMap<NoteId, bool>>,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> ExpandGuard<'_> {
        ExpandGuard { map: self.inner.lock().expect("expand state lock poisoned") }
    }

    pub fn is_expanded(&self, id: NoteId) -> bool {
        self.lock().is_expanded(id)
    }

    /// Flips the flag, inserting on first touch. Returns the new value.
    pub fn toggle(&self, id: NoteId) -> bool {
        self.lock().toggle(id)
    }
}

/// Exclusive view over the expand map, held across a full redraw.
#[derive(Debug)]
pub struct ExpandGuard<'a> {
    map: MutexGuard<'a, HashMap<NoteId, bool>>,
}

impl ExpandGuard<'_> {
    pub fn is_expanded(&self, id: NoteId) -> bool {
        self.map.get(&id).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, id: NoteId) -> bool {
        let expanded = self.map.entry(id).or_insert(false);
        *expanded = !*expanded;
        *expanded
    }
}
