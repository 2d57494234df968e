// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Outline rendering.
//!
//! Maps a note tree onto the textual outline shown in the browser window, one
//! line per visible note:
//!
//! ```text
//! <tabs×depth><decoration> [<id>] <title>[ (N files)]
//! ```
//!
//! The bracketed id is the anchor [`locate`] uses to map clicks back to notes;
//! nothing else in a line is machine-parsed.

pub mod locate;

pub use locate::{line_for_offset, note_id_in_line, resolve_note_at, ResolveError};

use crate::model::NoteId;
use crate::store::{NoteStore, StoreError};
use crate::ui::ExpandGuard;

/// One visible note in a rendered outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineLine {
    depth: usize,
    decoration: char,
    id: NoteId,
    title: String,
    file_count: usize,
}

impl OutlineLine {
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `' '` for a leaf, `'+'` collapsed, `'-'` expanded.
    pub fn decoration(&self) -> char {
        self.decoration
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn file_count(&self) -> usize {
        self.file_count
    }

    fn write_text(&self, out: &mut String) {
        for _ in 0..self.depth {
            out.push('\t');
        }
        out.push(self.decoration);
        out.push(' ');
        out.push('[');
        let mut buf = itoa::Buffer::new();
        out.push_str(buf.format(self.id.get()));
        out.push(']');
        out.push(' ');
        out.push_str(&self.title);
        match self.file_count {
            0 => {}
            1 => out.push_str(" (1 file)"),
            n => {
                out.push_str(" (");
                out.push_str(buf.format(n));
                out.push_str(" files)");
            }
        }
        out.push('\n');
    }
}

/// A fully rendered outline; [`Outline::to_text`] is what the browser writes
/// into the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    lines: Vec<OutlineLine>,
}

impl Outline {
    pub fn lines(&self) -> &[OutlineLine] {
        &self.lines
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            line.write_text(&mut out);
        }
        out
    }
}

/// Renders the subtree rooted at `root`, depth-first pre-order, children in
/// store order.
///
/// Recursion into a note's children happens only when the note is expanded at
/// the moment of render; a collapsed note contributes exactly one line. A
/// failed note lookup aborts the whole render with that error and nothing is
/// produced.
///
/// Taking the guard rather than the state makes "toggle + render" one critical
/// section for the caller.
pub fn render_outline(
    store: &dyn NoteStore,
    expanded: &ExpandGuard<'_>,
    root: NoteId,
) -> Result<Outline, StoreError> {
    let mut lines = Vec::new();
    visit(store, expanded, root, 0, &mut lines)?;
    Ok(Outline { lines })
}

fn visit(
    store: &dyn NoteStore,
    expanded: &ExpandGuard<'_>,
    id: NoteId,
    depth: usize,
    lines: &mut Vec<OutlineLine>,
) -> Result<(), StoreError> {
    let note = store.get_note(id)?;
    let is_expanded = expanded.is_expanded(id);
    let decoration = if !note.is_expandable() {
        ' '
    } else if is_expanded {
        '-'
    } else {
        '+'
    };
    lines.push(OutlineLine {
        depth,
        decoration,
        id,
        title: note.title().to_owned(),
        file_count: note.files().len(),
    });
    if is_expanded {
        for &child in note.children() {
            visit(store, expanded, child, depth + 1, lines)?;
        }
    }
    Ok(())
}
