// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galene — terminal outline browser and concurrent editor for hierarchical note stores.
//!
//! The browser shows a note tree as an editable text outline; every note can be
//! opened into its own concurrent edit session with an independent load/dirty/save
//! cycle against the backing store.

pub mod browser;
pub mod model;
pub mod outline;
pub mod session;
pub mod store;
pub mod tui;
pub mod ui;
pub mod window;
