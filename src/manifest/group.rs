use std::collections::HashMap;

/// Sentinel key for files sitting directly in the subtree root.
pub const ROOT_KEY: &str = ".";

/// Discovered files bucketed by parent directory, held in rendering order:
/// the root bucket first, then named subdirectories ascending
/// lexicographically, members of each bucket sorted.
#[derive(Debug, Default)]
pub struct FileGroups {
    groups: Vec<(String, Vec<String>)>,
}

impl FileGroups {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Mutable access to the root bucket's members, creating the bucket in
    /// its privileged first position when no file sits directly in the
    /// subtree root yet. Callers must leave at least one member behind.
    pub fn root_files_mut(&mut self) -> &mut Vec<String> {
        if self.groups.first().is_none_or(|(key, _)| key != ROOT_KEY) {
            self.groups.insert(0, (ROOT_KEY.to_string(), Vec::new()));
        }
        &mut self.groups[0].1
    }
}

/// Buckets `files` by parent directory; single-segment paths land under the
/// sentinel root key. Members are re-sorted here so the rendered output
/// stays reproducible even if the input sequence ordering ever changes.
pub fn group_by_directory(files: &[String]) -> FileGroups {
    let mut buckets: HashMap<String, Vec<String>> = HashMap::new();
    for file in files {
        buckets.entry(parent_key(file)).or_default().push(file.clone());
    }

    // Root files first, then subdirectories alphabetically.
    let mut keys: Vec<String> = buckets.keys().cloned().collect();
    keys.sort_by_key(|key| (key != ROOT_KEY, key.clone()));

    let groups = keys
        .into_iter()
        .map(|key| {
            let mut members = buckets.remove(&key).unwrap_or_default();
            members.sort();
            (key, members)
        })
        .collect();

    FileGroups { groups }
}

fn parent_key(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((dir, _)) => dir.to_string(),
        None => ROOT_KEY.to_string(),
    }
}
