// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory utilities.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::{collections::HashSet, sync::Arc};

use colored::Colorize;
use ignore::WalkBuilder;

/// Return `true` if the file has one of the extensions (case insensitive).
fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// Recursively find all localization files (matching the extensions) under the given paths.
///
/// Files given explicitly are always kept, whatever their extension.
/// The .gitignore rules are respected: ignored files are skipped.
pub fn find_files(paths: &[PathBuf], extensions: &[String]) -> HashSet<PathBuf> {
    let all_paths: Vec<PathBuf> = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };

    let mut found: HashSet<PathBuf> = all_paths.iter().filter(|p| p.is_file()).cloned().collect();
    let dirs: Vec<&PathBuf> = all_paths.iter().filter(|p| !p.is_file()).collect();
    let Some((first, others)) = dirs.split_first() else {
        return found;
    };

    let mut builder = WalkBuilder::new(first);
    for root in others {
        builder.add(root);
    }

    builder.follow_links(false);

    let files = Arc::new(Mutex::new(HashSet::new()));
    builder.build_parallel().run(|| {
        let files = Arc::clone(&files);
        Box::new(move |entry| {
            match entry {
                Ok(dirent) => {
                    if dirent.file_type().is_some_and(|ft| ft.is_file())
                        && has_extension(dirent.path(), extensions)
                        && let Ok(mut files) = files.lock()
                    {
                        files.insert(
                            dirent
                                .path()
                                .strip_prefix("./")
                                .unwrap_or(dirent.path())
                                .to_path_buf(),
                        );
                    }
                }
                Err(err) => {
                    eprintln!("{}: could not read entry: {err}", "Warning".yellow());
                }
            }
            ignore::WalkState::Continue
        })
    });
    if let Ok(mut files) = files.lock() {
        found.extend(files.drain());
    }
    found
}
