// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-note edit sessions.
//!
//! Each opened note gets its own window and its own task. A session tracks
//! local dirtiness and guards unsaved edits against an accidental reload: the
//! first Get after an edit only warns, the second one discards.
//!
//! Sessions share nothing. Two sessions on the same note are legal and
//! mutually unaware; the last Put wins.

use std::sync::Arc;

use crate::model::NoteId;
use crate::store::NoteStore;
use crate::window::{EventReceiver, HostIoError, Window, WindowEvent};

pub const PUT_COMMAND: &str = "Put";
pub const GET_COMMAND: &str = "Get";

const SESSION_TAG: &str = "Undo Redo Put Get";

/// Local edit status of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Window content matches the last load or save.
    Clean,
    /// The window has unsaved edits.
    Dirty,
    /// Dirty, and the user has been warned that Get will discard the edits.
    DirtyWarned,
}

pub struct EditSession<W: Window> {
    id: NoteId,
    store: Arc<dyn NoteStore>,
    window: W,
    status: SessionStatus,
}

impl<W: Window> EditSession<W> {
    /// Opens a session: names the window, installs the editing tag and
    /// performs the initial load.
    pub fn open(store: Arc<dyn NoteStore>, window: W, id: NoteId) -> Result<Self, HostIoError> {
        window.set_name(&format!("notes/{id}"))?;
        window.set_tag(SESSION_TAG)?;
        let mut session = Self { id, store, window, status: SessionStatus::Clean };
        session.load()?;
        Ok(session)
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn handle_event(&mut self, event: WindowEvent) -> Result<(), HostIoError> {
        match event {
            WindowEvent::ExecTag { ref text } if text.trim() == PUT_COMMAND => self.save(),
            WindowEvent::ExecTag { ref text } if text.trim() == GET_COMMAND => self.get(),
            WindowEvent::ExecTag { .. } => self.window.forward(&event),
            WindowEvent::Insert { .. } | WindowEvent::Delete { .. } => self.local_edit(),
            // Body executions and looks mean nothing inside a session window.
            WindowEvent::ExecBody { .. } | WindowEvent::Look { .. } => Ok(()),
        }
    }

    /// Replaces the window content with the store's current body.
    ///
    /// A store failure is reported and leaves the previous content and status
    /// in place; the user may Get again once the store recovers.
    fn load(&mut self) -> Result<(), HostIoError> {
        let note = match self.store.get_note(self.id) {
            Ok(note) => note,
            Err(err) => {
                self.window.report_error(&format!("can't open note {}: {err}", self.id))?;
                return Ok(());
            }
        };
        self.window.clear_body()?;
        self.window.append_body(note.body())?;
        self.window.scroll_to_top()?;
        self.window.set_dirty(false)?;
        self.status = SessionStatus::Clean;
        Ok(())
    }

    /// Put: write the full window body back to the store.
    ///
    /// On store failure the session stays dirty and the failure is surfaced;
    /// the user retries by issuing Put again.
    fn save(&mut self) -> Result<(), HostIoError> {
        let body = self.window.read_body()?;
        if let Err(err) = self.store.update_note(self.id, &body) {
            self.window.report_error(&format!("can't save note {}: {err}", self.id))?;
            return Ok(());
        }
        self.status = SessionStatus::Clean;
        self.window.set_dirty(false)
    }

    /// Get: reload from the store, warning once if edits would be lost.
    fn get(&mut self) -> Result<(), HostIoError> {
        match self.status {
            SessionStatus::Dirty => {
                self.window.report_error(&format!(
                    "note {} has unsaved changes, Get again to discard them",
                    self.id
                ))?;
                self.status = SessionStatus::DirtyWarned;
                Ok(())
            }
            SessionStatus::DirtyWarned => {
                // The warning is spent whether or not the load succeeds.
                self.status = SessionStatus::Dirty;
                self.load()
            }
            SessionStatus::Clean => self.load(),
        }
    }

    fn local_edit(&mut self) -> Result<(), HostIoError> {
        if self.status == SessionStatus::Clean {
            self.status = SessionStatus::Dirty;
            self.window.set_dirty(true)?;
        }
        Ok(())
    }
}

/// Drives a session until its window's event stream ends.
///
/// Host failures other than [`HostIoError::Closed`] are surfaced best-effort
/// and the loop keeps consuming events.
pub async fn run_session<W: Window>(mut session: EditSession<W>, mut events: EventReceiver) {
    while let Some(event) = events.recv().await {
        match session.handle_event(event) {
            Ok(()) => {}
            Err(HostIoError::Closed) => break,
            Err(err) => {
                let _ = session.window().report_error(&err.to_string());
            }
        }
    }
}
