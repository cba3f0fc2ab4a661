//! Chessboard diagram comments.
//!
//! `sg board --fen <position>` renders a position string as a fixed-width
//! `//`-comment diagram, ready to paste above a test case:
//!
//! ```text
//! // 8 [ R ][   ][   ][ k ][   ][   ][   ][ r ]
//! // ...
//! // 1 [   ][   ][   ][   ][ K ][   ][   ][ R ]
//! //     A    B    C    D    E    F    G    H
//! // R3k2r/1b4bq/8/8/8/8/7B/4K2R w KQkq - 0 1
//! ```
//!
//! The diagram is also piped to the system clipboard when one is reachable;
//! a missing clipboard utility degrades to a printed notice, never a
//! failure.

use anyhow::{Result, bail};
use colored::*;
use regex::Regex;
use std::io::Write;
use std::process::{Command, Stdio};

const EMPTY_BOARD: &str = "8/8/8/8/8/8/8/8 w - - 0 1";
const FILE_AXIS: &str = "//     A    B    C    D    E    F    G    H";
const RANKS: usize = 8;
const FILES: usize = 8;

pub fn run(position: &str, no_copy: bool) -> Result<()> {
    let input = if position.trim().is_empty() {
        EMPTY_BOARD
    } else {
        position
    };

    let diagram = match render(input) {
        Ok(diagram) => diagram,
        Err(e) => {
            println!("{} {e}", "x".red());
            return Ok(());
        }
    };

    println!("{diagram}");

    if !no_copy {
        match copy_to_clipboard(&diagram) {
            Ok(()) => println!("{} Diagram copied to clipboard.", "✓".green()),
            Err(e) => println!("{} Clipboard unavailable: {e}", "!".yellow()),
        }
    }

    Ok(())
}

/// Renders `position` (FEN notation; trailing metadata fields are carried
/// through to the echo line) as a comment diagram.
pub fn render(position: &str) -> Result<String> {
    let board_field = position.split_whitespace().next().unwrap_or_default();

    let shape = Regex::new(r"^([pnbrqkPNBRQK1-8]+/){7}[pnbrqkPNBRQK1-8]+$")?;
    if !shape.is_match(board_field) {
        bail!("malformed board field '{board_field}': expected 8 '/'-separated ranks");
    }

    let mut lines = Vec::with_capacity(RANKS + 2);
    for (i, rank) in board_field.split('/').enumerate() {
        lines.push(format!("// {} {}", RANKS - i, render_rank(rank)?));
    }
    lines.push(FILE_AXIS.to_string());
    lines.push(format!("// {position}"));

    Ok(lines.join("\n"))
}

fn render_rank(rank: &str) -> Result<String> {
    let mut cells = String::new();
    let mut width = 0;

    for c in rank.chars() {
        if let Some(run) = c.to_digit(10) {
            for _ in 0..run {
                cells.push_str("[   ]");
            }
            width += run as usize;
        } else {
            cells.push_str(&format!("[ {c} ]"));
            width += 1;
        }
    }

    if width != FILES {
        bail!("rank '{rank}' spans {width} files, expected {FILES}");
    }
    Ok(cells)
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let candidates: &[(&str, &[&str])] = if cfg!(target_os = "macos") {
        &[("pbcopy", &[])]
    } else if cfg!(windows) {
        &[("clip", &[])]
    } else {
        &[("wl-copy", &[]), ("xclip", &["-selection", "clipboard"])]
    };

    for (bin, args) in candidates {
        let spawned = Command::new(bin)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let Ok(mut child) = spawned else {
            continue;
        };

        if let Some(mut stdin) = child.stdin.take() {
            if stdin.write_all(text.as_bytes()).is_err() {
                let _ = child.wait();
                continue;
            }
        }
        match child.wait() {
            Ok(status) if status.success() => return Ok(()),
            _ => continue,
        }
    }

    bail!("no clipboard utility available")
}
