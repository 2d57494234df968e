// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render → resolve round-trip over the whole demo notebook: any offset inside
//! a rendered line resolves back to exactly that line's note.

use galene::model::NoteId;
use galene::outline::{render_outline, resolve_note_at};
use galene::store::{MemoryStore, NoteStore};
use galene::ui::ExpandState;
use galene::window::{HostIoError, Window, WindowEvent};

/// Window frozen on one rendered outline; resolution only reads.
struct FrozenWindow {
    body: String,
}

impl Window for FrozenWindow {
    fn set_name(&self, _name: &str) -> Result<(), HostIoError> {
        Ok(())
    }

    fn set_tag(&self, _tag: &str) -> Result<(), HostIoError> {
        Ok(())
    }

    fn clear_body(&self) -> Result<(), HostIoError> {
        Ok(())
    }

    fn append_body(&self, _text: &str) -> Result<(), HostIoError> {
        Ok(())
    }

    fn read_body(&self) -> Result<String, HostIoError> {
        Ok(self.body.clone())
    }

    fn read_line(&self, line: usize) -> Result<String, HostIoError> {
        Ok(self
            .body
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or_default()
            .to_owned())
    }

    fn set_dirty(&self, _dirty: bool) -> Result<(), HostIoError> {
        Ok(())
    }

    fn scroll_to_top(&self) -> Result<(), HostIoError> {
        Ok(())
    }

    fn report_error(&self, _message: &str) -> Result<(), HostIoError> {
        Ok(())
    }

    fn forward(&self, _event: &WindowEvent) -> Result<(), HostIoError> {
        Ok(())
    }
}

/// Expands every note reachable from the root so the render shows the whole
/// tree.
fn expand_all(store: &MemoryStore, expand: &ExpandState, root: NoteId) {
    let mut pending = vec![root];
    while let Some(id) = pending.pop() {
        let note = store.get_note(id).expect("demo note");
        if note.is_expandable() && !expand.is_expanded(id) {
            expand.toggle(id);
        }
        pending.extend(note.children());
    }
}

#[test]
fn every_rendered_line_resolves_to_its_note() {
    let store = MemoryStore::demo();
    let expand = ExpandState::new();
    expand_all(&store, &expand, NoteId::ROOT);

    let outline = render_outline(&store, &expand.lock(), NoteId::ROOT).expect("render");
    let text = outline.to_text();
    let window = FrozenWindow { body: text.clone() };

    let mut line_start = 0;
    for line in outline.lines() {
        let line_end = line_start
            + text[line_start..].find('\n').expect("rendered lines end in newline");

        for offset in [line_start, line_start + (line_end - line_start) / 2, line_end] {
            let resolved = resolve_note_at(&window, offset).expect("resolve");
            assert_eq!(
                resolved,
                line.id(),
                "offset {offset} between {line_start} and {line_end} resolved wrong"
            );
        }

        line_start = line_end + 1;
    }

    // The demo notebook really was fully expanded.
    assert_eq!(outline.lines().len(), 7);
}

#[test]
fn collapsing_one_branch_keeps_the_rest_resolvable() {
    let store = MemoryStore::demo();
    let expand = ExpandState::new();
    expand_all(&store, &expand, NoteId::ROOT);
    // Collapse "Projects"; its children drop out of the render.
    expand.toggle(NoteId::new(1));

    let outline = render_outline(&store, &expand.lock(), NoteId::ROOT).expect("render");
    let text = outline.to_text();
    let window = FrozenWindow { body: text.clone() };

    assert!(!text.contains("[4]"));
    assert!(!text.contains("[5]"));

    let journal_offset = text.find("[2] Journal").expect("journal line");
    assert_eq!(
        resolve_note_at(&window, journal_offset).expect("resolve"),
        NoteId::new(2)
    );
}
