// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Click-to-note resolution.
//!
//! Resolution re-reads the clicked line from the live window rather than from
//! the last render, matching the window's addressed-read model. An intervening
//! redraw can shift line numbers between the click and the re-read; that race
//! is accepted best-effort, the event is dropped whenever no anchor is found.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::NoteId;
use crate::window::{HostIoError, Window};

static NOTE_ANCHOR: OnceLock<Regex> = OnceLock::new();

fn note_anchor() -> &'static Regex {
    NOTE_ANCHOR.get_or_init(|| Regex::new(r"\[(\d+)\]").expect("note anchor regex"))
}

/// 1-based line number containing the byte offset.
///
/// Counts newlines strictly before the offset, so an offset sitting on a
/// newline still belongs to the line that newline terminates. Offsets past the
/// end land on the last line.
pub fn line_for_offset(text: &str, offset: usize) -> usize {
    let upto = offset.min(text.len());
    memchr::memchr_iter(b'\n', &text.as_bytes()[..upto]).count() + 1
}

/// Extracts the first bracketed note id from one outline line.
pub fn note_id_in_line(line: &str) -> Option<NoteId> {
    let captures = note_anchor().captures(line)?;
    captures[1].parse().ok()
}

#[derive(Debug)]
pub enum ResolveError {
    /// The addressed line carries no note anchor; the triggering event should
    /// be dropped.
    IdentityNotFound { line: usize },
    Host(HostIoError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdentityNotFound { line } => write!(f, "no note id on line {line}"),
            Self::Host(source) => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IdentityNotFound { .. } => None,
            Self::Host(source) => Some(source),
        }
    }
}

impl From<HostIoError> for ResolveError {
    fn from(source: HostIoError) -> Self {
        Self::Host(source)
    }
}

/// Maps a byte offset in the displayed outline to the note on that line.
pub fn resolve_note_at<W: Window + ?Sized>(
    window: &W,
    offset: usize,
) -> Result<NoteId, ResolveError> {
    let body = window.read_body()?;
    let line = line_for_offset(&body, offset);
    let content = window.read_line(line)?;
    note_id_in_line(&content).ok_or(ResolveError::IdentityNotFound { line })
}
