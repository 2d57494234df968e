// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galene CLI entrypoint.
//!
//! Runs the interactive browser against a notes folder (default: the current
//! working directory), or against a built-in demo notebook with `--demo`.

use std::error::Error;
use std::sync::Arc;

use galene::browser::{run_browser, Browser};
use galene::model::NoteId;
use galene::store::{MemoryStore, NoteFolder, NoteStore};
use galene::tui::Shell;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<notes-dir>] [--root <id>]\n  {program} --demo\n\nIf notes-dir is omitted, the current working directory is used.\n--demo uses a built-in demo notebook and cannot be combined with notes-dir.\n--root selects the note the outline starts at (default 0).\n\nKeys: ^T expand/collapse, ^O open note, ^U refresh, ^S put, ^G get,\nTab next window, ^W close window, ^Q quit."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    notes_dir: Option<String>,
    root: Option<NoteId>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--root" => {
                if options.root.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let root: NoteId = raw.parse().map_err(|_| ())?;
                options.root = Some(root);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.notes_dir.is_some() {
                    return Err(());
                }
                options.notes_dir = Some(arg);
            }
        }
    }

    if options.demo && options.notes_dir.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "galene".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let store: Arc<dyn NoteStore> = if options.demo {
            Arc::new(MemoryStore::demo())
        } else {
            let dir = options.notes_dir.unwrap_or_else(|| ".".to_owned());
            let folder = NoteFolder::new(dir);
            folder.load_or_init()?;
            Arc::new(folder)
        };
        let root = options.root.unwrap_or(NoteId::ROOT);

        let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;

        let shell = Shell::new();
        let (browser, events) = Browser::open(Arc::new(shell.clone()), store, root)?;
        runtime.spawn(run_browser(browser, events));

        galene::tui::run(shell)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("galene: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};
    use galene::model::NoteId;

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|s| (*s).to_owned()))
    }

    #[test]
    fn defaults_are_empty() {
        assert_eq!(parse(&[]), Ok(CliOptions::default()));
    }

    #[test]
    fn notes_dir_and_root_parse() {
        let options = parse(&["my-notes", "--root", "7"]).expect("parse");
        assert_eq!(options.notes_dir.as_deref(), Some("my-notes"));
        assert_eq!(options.root, Some(NoteId::new(7)));
        assert!(!options.demo);
    }

    #[test]
    fn demo_conflicts_with_notes_dir() {
        assert_eq!(parse(&["--demo", "my-notes"]), Err(()));
        assert_eq!(parse(&["my-notes", "--demo"]), Err(()));
    }

    #[test]
    fn rejects_unknown_flags_and_duplicates() {
        assert_eq!(parse(&["--wat"]), Err(()));
        assert_eq!(parse(&["a", "b"]), Err(()));
        assert_eq!(parse(&["--root", "1", "--root", "2"]), Err(()));
        assert_eq!(parse(&["--root", "x"]), Err(()));
    }
}
