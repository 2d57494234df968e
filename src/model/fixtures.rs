// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::NoteId;
use super::note::{FileRef, Note};

fn nid(value: u64) -> NoteId {
    NoteId::new(value)
}

/// Demo notebook backing `--demo` mode and most tests.
///
/// Shape: the root has an expandable child per flavor (plain children,
/// children plus an attachment) and one leaf, so every outline decoration
/// shows up somewhere.
pub(crate) fn demo_notebook() -> Vec<(NoteId, Note)> {
    vec![
        (
            nid(0),
            Note::new("Notes").with_children(vec![nid(1), nid(2), nid(3)]),
        ),
        (
            nid(1),
            Note::new("Projects")
                .with_body("Active projects, one child note each.\n")
                .with_children(vec![nid(4), nid(5)]),
        ),
        (
            nid(2),
            Note::new("Journal")
                .with_body("Monthly journals live below.\n")
                .with_children(vec![nid(6)])
                .with_files(vec![FileRef::new("journal/2026.org")]),
        ),
        (
            nid(3),
            Note::new("Reading list").with_body("- The Sciences of the Artificial\n"),
        ),
        (
            nid(4),
            Note::new("Galene")
                .with_body("Terminal outline browser.\n\nNext: folder store docs.\n")
                .with_files(vec![
                    FileRef::new("galene/sketch.txt"),
                    FileRef::new("galene/keys.txt"),
                ]),
        ),
        (
            nid(5),
            Note::new("House").with_body("Gutters, then the fence.\n"),
        ),
        (
            nid(6),
            Note::new("2026-08").with_body("Started the outline browser rework.\n"),
        ),
    ]
}
