// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Host window contract.
//!
//! Windows are owned by the host shell (the TUI, or a scripted window in
//! tests). Core tasks observe user interactions as [`WindowEvent`]s delivered
//! on the window's own channel and write structured text back through
//! [`Window`]. A closed channel is the sole termination signal for the owning
//! task.

use std::fmt;

use tokio::sync::mpsc;

#[cfg(test)]
pub(crate) mod test_utils;

/// One user interaction on a window.
///
/// Offsets are byte offsets into the window body at the time of the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowEvent {
    /// The user executed text in the tag line.
    ExecTag { text: String },
    /// The user executed text inside the body.
    ExecBody { text: String, offset: usize },
    /// Text was inserted into the body.
    Insert { offset: usize, text: String },
    /// A byte range was deleted from the body.
    Delete { start: usize, end: usize },
    /// The user asked to open whatever the offset points at.
    Look { offset: usize },
}

pub type EventSender = mpsc::UnboundedSender<WindowEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<WindowEvent>;

#[derive(Debug)]
pub enum HostIoError {
    /// The window is gone; the owning task should wind down.
    Closed,
    Io { message: String },
}

impl fmt::Display for HostIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => f.write_str("window closed"),
            Self::Io { message } => write!(f, "window io error: {message}"),
        }
    }
}

impl std::error::Error for HostIoError {}

/// Operations a core task may perform against its window.
///
/// The host owns the text; these calls mutate or read the host's copy.
pub trait Window: Send {
    fn set_name(&self, name: &str) -> Result<(), HostIoError>;

    fn set_tag(&self, tag: &str) -> Result<(), HostIoError>;

    fn clear_body(&self) -> Result<(), HostIoError>;

    fn append_body(&self, text: &str) -> Result<(), HostIoError>;

    fn read_body(&self) -> Result<String, HostIoError>;

    /// Content of the 1-based line without its trailing newline. Lines past
    /// the end read as empty.
    fn read_line(&self, line: usize) -> Result<String, HostIoError>;

    /// Sets or clears the visible dirty marker.
    fn set_dirty(&self, dirty: bool) -> Result<(), HostIoError>;

    fn scroll_to_top(&self) -> Result<(), HostIoError>;

    /// Reports a user-visible error through the host's error channel.
    fn report_error(&self, message: &str) -> Result<(), HostIoError>;

    /// Hands an event the core does not interpret back to the host.
    fn forward(&self, event: &WindowEvent) -> Result<(), HostIoError>;
}

/// Creates windows on demand; the browser uses this to open edit sessions.
pub trait Host: Send + Sync {
    type Window: Window + 'static;

    fn open_window(&self) -> Result<(Self::Window, EventReceiver), HostIoError>;
}
