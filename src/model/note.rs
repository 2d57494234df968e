// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::NoteId;

/// A path-like reference to a file attached to a note.
///
/// The browser only counts attachments; it never opens them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRef(String);

impl FileRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A titled unit of content with a body, ordered child notes and attached files.
///
/// Child order is a property of the store and is preserved exactly when the
/// outline is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    children: Vec<NoteId>,
    #[serde(default)]
    files: Vec<FileRef>,
}

impl Note {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_children(mut self, children: Vec<NoteId>) -> Self {
        self.children = children;
        self
    }

    pub fn with_files(mut self, files: Vec<FileRef>) -> Self {
        self.files = files;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    pub fn children(&self) -> &[NoteId] {
        &self.children
    }

    pub fn files(&self) -> &[FileRef] {
        &self.files
    }

    /// A note is shown as expandable iff it has at least one child or file.
    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty() || !self.files.is_empty()
    }
}
