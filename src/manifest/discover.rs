use std::path::Path;
use walkdir::WalkDir;

/// Collects every file under `root` whose name ends with one of the given
/// extensions, as `/`-separated paths relative to `root`.
///
/// Directories are visited in the walker's depth-first order with each
/// directory's entries sorted by name. Downstream grouping and rendering
/// depend on this two-level ordering staying stable across runs and
/// platforms.
pub fn files_with_extensions(root: &Path, extensions: &[&str]) -> Vec<String> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !extensions.iter().any(|ext| name.ends_with(ext)) {
            continue;
        }

        if let Ok(rel) = entry.path().strip_prefix(root) {
            let segments: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            files.push(segments.join("/"));
        }
    }

    files
}
