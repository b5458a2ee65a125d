//! Project module - file system access for validation and scanning

mod filesystem;

use std::path::{Path, PathBuf};

pub use filesystem::FileInfo;

/// Extensions of files worth scanning for secrets
pub const SCAN_EXTENSIONS: &[&str] = &[
    "js", "ts", "jsx", "tsx", "py", "rb", "php", "java", "go", "rs", "cpp", "c", "yml", "yaml",
    "json", "toml", "env", "config", "conf", "sql", "sh", "bash",
];

/// Files larger than this are skipped by content scans, in bytes
pub const MAX_SCAN_FILE_SIZE: u64 = 1_048_576;

/// Cached view of a project directory
pub struct ProjectContext {
    root: PathBuf,
    file_cache: Vec<FileInfo>,
}

impl ProjectContext {
    /// Create a context for the given root directory
    pub fn new(root: PathBuf) -> Self {
        let file_cache = filesystem::walk_files(&root);
        tracing::debug!(files = file_cache.len(), root = %root.display(), "scanned project");

        Self { root, file_cache }
    }

    /// The project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Project name derived from the root directory name
    pub fn project_name(&self) -> String {
        let resolved = self
            .root
            .canonicalize()
            .unwrap_or_else(|_| self.root.clone());
        resolved
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string()
    }

    /// Check if a file exists
    pub fn file_exists(&self, path: &str) -> bool {
        self.root.join(path).exists()
    }

    /// Read file content
    pub fn read_file(&self, path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(self.root.join(path))
    }

    /// Write file content, replacing any existing file
    pub fn write_file(&self, path: &str, content: &str) -> std::io::Result<()> {
        std::fs::write(self.root.join(path), content)
    }

    /// Files eligible for content scanning: known text extensions, size capped
    pub fn text_files(&self) -> Vec<&FileInfo> {
        self.file_cache
            .iter()
            .filter(|f| f.size <= MAX_SCAN_FILE_SIZE && has_scan_extension(&f.path))
            .collect()
    }
}

/// True when the path ends in one of [`SCAN_EXTENSIONS`].
///
/// Dotfiles like `.env` count: their whole name reads as an extension.
fn has_scan_extension(path: &str) -> bool {
    path.rsplit_once('.')
        .map_or(false, |(_, ext)| SCAN_EXTENSIONS.contains(&ext))
}
