use super::group::{FileGroups, ROOT_KEY};

/// Renders one variable-list body: per group a `##` comment naming the
/// directory, then one `${var}/path` line per file. Groups are separated by
/// a single blank line; the result carries no trailing blank line.
///
/// Referencing files through `var` keeps the emitted list relocatable: the
/// actual filesystem root is bound once, where the list is included.
pub fn render_file_list(groups: &FileGroups, var: &str) -> String {
    let mut out = String::new();

    for (i, (key, members)) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        if key == ROOT_KEY {
            out.push_str("## /...\n");
        } else {
            out.push_str(&format!("## /{key}/...\n"));
        }

        for member in members {
            out.push_str(&format!("    ${{{var}}}/{member}\n"));
        }
    }

    out.trim().to_string()
}
