// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{NoteFolder, NoteStore, StoreError};
use crate::model::{FileRef, Note, NoteId};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("galene-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

struct NoteFolderTestCtx {
    _tmp: TempDir,
    folder: NoteFolder,
}

impl NoteFolderTestCtx {
    fn new(prefix: &str) -> Self {
        let tmp = TempDir::new(prefix);
        let folder = NoteFolder::new(tmp.path().join("notes"));
        Self { _tmp: tmp, folder }
    }
}

#[fixture]
fn ctx() -> NoteFolderTestCtx {
    NoteFolderTestCtx::new("note-folder")
}

#[rstest]
fn load_or_init_seeds_a_root_note(ctx: NoteFolderTestCtx) {
    let folder = &ctx.folder;

    folder.load_or_init().unwrap();

    let root = folder.get_note(NoteId::ROOT).unwrap();
    assert_eq!(root.title(), "Notes");
    assert!(root.children().is_empty());
}

#[rstest]
fn load_or_init_leaves_existing_root_alone(ctx: NoteFolderTestCtx) {
    let folder = &ctx.folder;
    folder.load_or_init().unwrap();
    folder.update_note(NoteId::ROOT, "kept").unwrap();

    folder.load_or_init().unwrap();

    assert_eq!(folder.get_note(NoteId::ROOT).unwrap().body(), "kept");
}

#[rstest]
fn get_unknown_id_is_not_found(ctx: NoteFolderTestCtx) {
    let folder = &ctx.folder;
    folder.load_or_init().unwrap();

    let err = folder.get_note(NoteId::new(99)).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id } if id == NoteId::new(99)));
}

#[rstest]
fn update_persists_across_instances(ctx: NoteFolderTestCtx) {
    let folder = &ctx.folder;
    folder.load_or_init().unwrap();

    folder.update_note(NoteId::ROOT, "hello\n").unwrap();

    let reopened = NoteFolder::new(folder.dir());
    assert_eq!(reopened.get_note(NoteId::ROOT).unwrap().body(), "hello\n");
}

#[rstest]
fn update_keeps_structure_and_leaves_no_temp_file(ctx: NoteFolderTestCtx) {
    let folder = &ctx.folder;
    folder.load_or_init().unwrap();
    folder
        .write_note(
            NoteId::new(2),
            &Note::new("Journal")
                .with_children(vec![NoteId::new(6)])
                .with_files(vec![FileRef::new("journal/2026.org")]),
        )
        .unwrap();

    folder.update_note(NoteId::new(2), "updated").unwrap();

    let note = folder.get_note(NoteId::new(2)).unwrap();
    assert_eq!(note.body(), "updated");
    assert_eq!(note.children(), [NoteId::new(6)]);
    assert_eq!(note.files().len(), 1);

    let leftovers: Vec<_> = std::fs::read_dir(folder.dir())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[rstest]
fn corrupt_record_is_a_json_error(ctx: NoteFolderTestCtx) {
    let folder = &ctx.folder;
    folder.load_or_init().unwrap();
    std::fs::write(folder.dir().join("5.json"), "{not json").unwrap();

    let err = folder.get_note(NoteId::new(5)).unwrap_err();
    assert!(matches!(err, StoreError::Json { .. }));
}
