//! Project file walking

use ignore::WalkBuilder;
use std::path::Path;

/// A file discovered under the project root
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Path relative to the project root
    pub path: String,
    /// Size in bytes
    pub size: u64,
}

/// Walk `root` and collect every non-ignored file.
///
/// Honors .gitignore, global git excludes, and .ignore files. Directories
/// are skipped, and the .git directory is never entered.
pub fn walk_files(root: &Path) -> Vec<FileInfo> {
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .ignore(true)
        .parents(true)
        .build();

    walker
        .flatten()
        .filter_map(|entry| {
            if entry.path().components().any(|c| c.as_os_str() == ".git") {
                return None;
            }
            let metadata = entry.metadata().ok()?;
            if metadata.is_dir() {
                return None;
            }
            let path = entry.path().strip_prefix(root).ok()?.to_str()?;
            if path.is_empty() {
                return None;
            }
            Some(FileInfo {
                path: path.to_string(),
                size: metadata.len(),
            })
        })
        .collect()
}
