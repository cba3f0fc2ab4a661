//! License header stamping.
//!
//! `sg headers <dir>` walks a header tree and prepends the license
//! doc-comment block to every file that does not already carry it. The
//! marker scanned for is a substring of the inserted block itself, so a
//! second run over the same tree updates nothing.

pub mod brief;

use anyhow::{Context, Result};
use brief::Brief;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const HEADER_EXTENSIONS: &[&str] = &[".h", ".hpp"];

/// Substring of `LICENSE_TEMPLATE`; its presence in a file's opening lines
/// marks the file as already stamped.
const LICENSE_MARKER: &str = "GNU General Public License";
const MARKER_SCAN_LINES: usize = 20;

const LICENSE_TEMPLATE: &str = r#"/******************************************************************************
 * Gambit Chess Engine - a chess AI
 * Copyright (C) 2026 The Gambit Chess Engine authors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 *****************************************************************************/

/**
 * @file {filename}
 * @brief {brief}
 */"#;

pub fn run(directory: &Path, summarizer: &dyn Brief) -> Result<()> {
    if !directory.is_dir() {
        println!(
            "{} Directory not found: '{}'",
            "x".red(),
            directory.display()
        );
        return Ok(());
    }

    let files = find_header_files(directory);
    if files.is_empty() {
        println!(
            "{} No header files found under '{}'",
            "!".yellow(),
            directory.display()
        );
        return Ok(());
    }

    println!(
        "Found {} header files, stamping the unlicensed ones...",
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut updated = 0;
    for file in &files {
        pb.set_message(
            file.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        // An unreadable file is skipped rather than stamped blind.
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                pb.println(format!(
                    "{} Skipping unreadable file {}: {e}",
                    "!".yellow(),
                    file.display()
                ));
                pb.inc(1);
                continue;
            }
        };

        if !has_license(&content) {
            stamp_file(file, &content, summarizer)?;
            updated += 1;
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "{} Updated {updated} of {} header files.",
        "✓".green(),
        files.len()
    );
    Ok(())
}

fn find_header_files(directory: &Path) -> Vec<PathBuf> {
    WalkDir::new(directory)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            HEADER_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        })
        .map(|entry| entry.into_path())
        .collect()
}

fn has_license(content: &str) -> bool {
    content
        .lines()
        .take(MARKER_SCAN_LINES)
        .any(|line| line.contains(LICENSE_MARKER))
}

fn stamp_file(path: &Path, content: &str, summarizer: &dyn Brief) -> Result<()> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let brief = summarizer.brief(&filename, content);

    let block = LICENSE_TEMPLATE
        .replace("{filename}", &filename)
        .replace("{brief}", &brief);

    fs::write(path, format!("{block}\n\n{content}"))
        .with_context(|| format!("failed to rewrite '{}'", path.display()))?;
    Ok(())
}
