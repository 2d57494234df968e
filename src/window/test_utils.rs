// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recording window and host for unit tests.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc;

use super::{EventReceiver, EventSender, Host, HostIoError, Window, WindowEvent};

#[derive(Debug, Default)]
pub(crate) struct MockWindowState {
    pub name: String,
    pub tag: String,
    pub body: String,
    pub dirty: bool,
    pub scrolled_to_top: bool,
    pub errors: Vec<String>,
    pub forwarded: Vec<WindowEvent>,
    pub closed: bool,
}

/// A window that records every operation; `close()` makes all further
/// operations fail with [`HostIoError::Closed`].
#[derive(Debug, Clone, Default)]
pub(crate) struct MockWindow {
    state: Arc<Mutex<MockWindowState>>,
}

impl MockWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(body: &str) -> Self {
        let window = Self::new();
        window.state().body = body.to_owned();
        window
    }

    pub fn state(&self) -> MutexGuard<'_, MockWindowState> {
        self.state.lock().expect("mock window lock poisoned")
    }

    pub fn close(&self) {
        self.state().closed = true;
    }

    fn open_state(&self) -> Result<MutexGuard<'_, MockWindowState>, HostIoError> {
        let state = self.state();
        if state.closed {
            return Err(HostIoError::Closed);
        }
        Ok(state)
    }
}

impl Window for MockWindow {
    fn set_name(&self, name: &str) -> Result<(), HostIoError> {
        self.open_state()?.name = name.to_owned();
        Ok(())
    }

    fn set_tag(&self, tag: &str) -> Result<(), HostIoError> {
        self.open_state()?.tag = tag.to_owned();
        Ok(())
    }

    fn clear_body(&self) -> Result<(), HostIoError> {
        self.open_state()?.body.clear();
        Ok(())
    }

    fn append_body(&self, text: &str) -> Result<(), HostIoError> {
        self.open_state()?.body.push_str(text);
        Ok(())
    }

    fn read_body(&self) -> Result<String, HostIoError> {
        Ok(self.open_state()?.body.clone())
    }

    fn read_line(&self, line: usize) -> Result<String, HostIoError> {
        let state = self.open_state()?;
        Ok(state
            .body
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or_default()
            .to_owned())
    }

    fn set_dirty(&self, dirty: bool) -> Result<(), HostIoError> {
        self.open_state()?.dirty = dirty;
        Ok(())
    }

    fn scroll_to_top(&self) -> Result<(), HostIoError> {
        self.open_state()?.scrolled_to_top = true;
        Ok(())
    }

    fn report_error(&self, message: &str) -> Result<(), HostIoError> {
        self.open_state()?.errors.push(message.to_owned());
        Ok(())
    }

    fn forward(&self, event: &WindowEvent) -> Result<(), HostIoError> {
        self.open_state()?.forwarded.push(event.clone());
        Ok(())
    }
}

/// Host handing out [`MockWindow`]s and keeping a handle to each opened one.
#[derive(Debug, Default)]
pub(crate) struct MockHost {
    opened: Mutex<Vec<(MockWindow, EventSender)>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Windows opened so far, in open order, with the sending half of their
    /// event streams.
    pub fn opened(&self) -> Vec<(MockWindow, EventSender)> {
        self.opened.lock().expect("mock host lock poisoned").clone()
    }
}

impl Host for MockHost {
    type Window = MockWindow;

    fn open_window(&self) -> Result<(MockWindow, EventReceiver), HostIoError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let window = MockWindow::new();
        self.opened
            .lock()
            .expect("mock host lock poisoned")
            .push((window.clone(), tx));
        Ok((window, rx))
    }
}
