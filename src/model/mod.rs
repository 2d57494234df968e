// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Notes are owned by the backing store; the browser reads them and writes
//! bodies back only through the store contract.

pub(crate) mod fixtures;
pub mod ids;
pub mod note;

pub use ids::NoteId;
pub use note::{FileRef, Note};
