// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The tree browser.
//!
//! One long-lived task owns the tree window. It serializes every redraw,
//! interprets tag and body executions, and spawns an edit session task per
//! look event. Sessions are fire-and-forget: the browser neither tracks nor
//! awaits them, and keeps processing events immediately.

use std::sync::Arc;

use crate::model::NoteId;
use crate::outline::{render_outline, resolve_note_at, ResolveError};
use crate::session::{run_session, EditSession};
use crate::store::NoteStore;
use crate::ui::{ExpandGuard, ExpandState};
use crate::window::{EventReceiver, Host, HostIoError, Window, WindowEvent};

pub const REFRESH_COMMAND: &str = "Update";

const BROWSER_NAME: &str = "notes";

pub struct Browser<H: Host> {
    host: Arc<H>,
    store: Arc<dyn NoteStore>,
    expand: Arc<ExpandState>,
    root: NoteId,
    window: H::Window,
}

impl<H: Host + 'static> Browser<H> {
    /// Opens the tree window and performs the initial render.
    pub fn open(
        host: Arc<H>,
        store: Arc<dyn NoteStore>,
        root: NoteId,
    ) -> Result<(Self, EventReceiver), HostIoError> {
        let (window, events) = host.open_window()?;
        window.set_name(BROWSER_NAME)?;
        window.set_tag(REFRESH_COMMAND)?;
        let browser = Self { host, store, expand: Arc::new(ExpandState::new()), root, window };
        browser.redraw()?;
        Ok((browser, events))
    }

    /// The expand state shared with this browser; mainly for tests and
    /// embedders that want to pre-expand branches.
    pub fn expand_state(&self) -> Arc<ExpandState> {
        Arc::clone(&self.expand)
    }

    pub fn window(&self) -> &H::Window {
        &self.window
    }

    pub fn handle_event(&mut self, event: WindowEvent) -> Result<(), HostIoError> {
        match event {
            WindowEvent::ExecTag { ref text } if text.trim() == REFRESH_COMMAND => self.redraw(),
            WindowEvent::ExecTag { .. } => self.window.forward(&event),
            WindowEvent::ExecBody { offset, .. } => self.toggle_at(offset),
            WindowEvent::Look { offset } => self.open_at(offset),
            // Manual edits to the outline are not tracked; the next redraw
            // rewrites the window wholesale.
            WindowEvent::Insert { .. } | WindowEvent::Delete { .. } => Ok(()),
        }
    }

    /// Re-renders the whole outline under the expand-state lock.
    pub fn redraw(&self) -> Result<(), HostIoError> {
        let guard = self.expand.lock();
        self.redraw_locked(&guard)
    }

    fn redraw_locked(&self, expanded: &ExpandGuard<'_>) -> Result<(), HostIoError> {
        let outline = match render_outline(self.store.as_ref(), expanded, self.root) {
            Ok(outline) => outline,
            Err(err) => {
                // Render failed before anything was written; the previous
                // outline stays on screen.
                self.window.report_error(&format!("can't render notes: {err}"))?;
                return Ok(());
            }
        };
        self.window.clear_body()?;
        self.window.append_body(&outline.to_text())?;
        self.window.scroll_to_top()
    }

    /// Body execution: toggle the clicked note and redraw as one critical
    /// section, so no other toggle or redraw can interleave.
    fn toggle_at(&self, offset: usize) -> Result<(), HostIoError> {
        let id = match resolve_note_at(&self.window, offset) {
            Ok(id) => id,
            Err(ResolveError::IdentityNotFound { .. }) => return Ok(()),
            Err(ResolveError::Host(err)) => return Err(err),
        };
        let mut guard = self.expand.lock();
        guard.toggle(id);
        self.redraw_locked(&guard)
    }

    fn open_at(&self, offset: usize) -> Result<(), HostIoError> {
        let id = match resolve_note_at(&self.window, offset) {
            Ok(id) => id,
            Err(ResolveError::IdentityNotFound { .. }) => return Ok(()),
            Err(ResolveError::Host(err)) => return Err(err),
        };
        self.spawn_session(id);
        Ok(())
    }

    /// Spawns the session task and forgets it. A session that fails to open
    /// its window simply never appears; there is nobody to report to once the
    /// host refused the window.
    fn spawn_session(&self, id: NoteId) {
        let host = Arc::clone(&self.host);
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            let Ok((window, events)) = host.open_window() else {
                return;
            };
            if let Ok(session) = EditSession::open(store, window, id) {
                run_session(session, events).await;
            }
        });
    }
}

/// Drives the browser until the tree window's event stream ends.
///
/// Host failures other than [`HostIoError::Closed`] are surfaced best-effort
/// and the loop keeps consuming events.
pub async fn run_browser<H: Host + 'static>(mut browser: Browser<H>, mut events: EventReceiver) {
    while let Some(event) = events.recv().await {
        match browser.handle_event(event) {
            Ok(()) => {}
            Err(HostIoError::Closed) => break,
            Err(err) => {
                let _ = browser.window.report_error(&err.to_string());
            }
        }
    }
}
