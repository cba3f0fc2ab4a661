//! CMake source-manifest generation.
//!
//! `sg manifest <root>` discovers the files of a project's conventional
//! `inc/` and `src/` subtrees, buckets them by subdirectory and writes a
//! `sourcelist.cmake`-style variable-list file the build can include.
//!
//! The pipeline is a one-way flow of pure stages:
//!
//! ```text
//! subtree path -> discover -> group -> render -> templated document
//! ```
//!
//! Each invocation recomputes everything and overwrites the output file;
//! ordering is deterministic, so an unchanged tree produces byte-identical
//! output on every run.

pub mod discover;
pub mod group;
pub mod render;

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

use group::FileGroups;

const INCLUDE_SUBTREE: &str = "inc";
const SOURCE_SUBTREE: &str = "src";

const HEADER_EXTENSIONS: &[&str] = &[".h", ".hpp"];
// Sources deliberately accept .h too, so source-adjacent headers end up in
// the manifest.
const SOURCE_EXTENSIONS: &[&str] = &[".cpp", ".h"];

/// Template-input header expanded by `configure_file` at configure time.
const CONFIG_TEMPLATE_HEADER: &str = "engine_config.h.in";
const CONFIG_GENERATED_HEADER: &str = "engine_config.h";

/// Generates the manifest for `root` and writes it to `output`.
///
/// A project missing one of the two subtrees is fine (headers-only or
/// sources-only libraries are valid); missing both is an operator error,
/// reported without writing anything.
pub fn generate(root: &Path, output: &Path, identifier: &str) -> Result<()> {
    let inc_dir = root.join(INCLUDE_SUBTREE);
    let src_dir = root.join(SOURCE_SUBTREE);
    let has_inc = inc_dir.is_dir();
    let has_src = src_dir.is_dir();

    if !has_inc && !has_src {
        println!(
            "{} Neither '{INCLUDE_SUBTREE}' nor '{SOURCE_SUBTREE}' found in '{}'",
            "x".red(),
            root.display()
        );
        return Ok(());
    }

    let ident = identifier.to_uppercase();

    let header_files = if has_inc {
        discover::files_with_extensions(&inc_dir, HEADER_EXTENSIONS)
    } else {
        Vec::new()
    };
    let source_files = if has_src {
        discover::files_with_extensions(&src_dir, SOURCE_EXTENSIONS)
    } else {
        Vec::new()
    };

    let mut header_groups = group::group_by_directory(&header_files);
    if has_inc && inc_dir.join(CONFIG_TEMPLATE_HEADER).is_file() {
        insert_generated_header(&mut header_groups);
    }
    let source_groups = group::group_by_directory(&source_files);

    let include_list = render::render_file_list(&header_groups, &format!("{ident}_INC_DIR"));
    let source_list = render::render_file_list(&source_groups, &format!("{ident}_SRC_DIR"));

    let document = assemble_document(&ident, &include_list, &source_list);
    fs::write(output, document)
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    println!("{} Generated '{}'", "✓".green(), output.display());
    Ok(())
}

/// The configuration-time-generated header does not exist on disk when the
/// manifest is produced, and its template counterpart never passes the
/// header-suffix filter. When the include root carries the template, the
/// generated name is slotted in right after the first root header, where
/// the build expects to find it.
///
/// Runs after grouping so the fixed position survives the group member
/// sort into the rendered text.
fn insert_generated_header(groups: &mut FileGroups) {
    let root_files = groups.root_files_mut();
    root_files.retain(|f| f != CONFIG_TEMPLATE_HEADER);
    let at = root_files.len().min(1);
    root_files.insert(at, CONFIG_GENERATED_HEADER.to_string());
}

fn assemble_document(ident: &str, include_list: &str, source_list: &str) -> String {
    let mut doc = format!(
        r#"set({ident}_SRC_DIR ${{CMAKE_CURRENT_LIST_DIR}}/src)
set({ident}_INC_DIR ${{CMAKE_CURRENT_LIST_DIR}}/inc)

if (CMAKE_BUILD_TYPE MATCHES "Debug")
    set({ident}_VERSION_SUFFIX "-dbg")
elseif(CMAKE_BUILD_TYPE MATCHES "RelWithDebInfo")
    set({ident}_VERSION_SUFFIX "-dbg")
endif()

configure_file(${{{ident}_INC_DIR}}/{CONFIG_TEMPLATE_HEADER} ${{{ident}_INC_DIR}}/{CONFIG_GENERATED_HEADER})

"#
    );

    // A subtree that rendered empty drops its whole assignment, not an
    // empty set(...) wrapper.
    if !include_list.is_empty() {
        doc.push_str(&format!(
            "set({ident}_SOURCE_INCLUDE ${{{ident}_SOURCE_INCLUDE}}\n{include_list}\n)\n\n"
        ));
    }
    if !source_list.is_empty() {
        doc.push_str(&format!(
            "set({ident}_SOURCE ${{{ident}_SOURCE}}\n{source_list}\n)\n\n"
        ));
    }

    doc.push_str(&format!(
        "set({ident}_SOURCE_ALL ${{{ident}_SOURCE}} ${{{ident}_SOURCE_INCLUDE}})\n"
    ));
    doc
}
