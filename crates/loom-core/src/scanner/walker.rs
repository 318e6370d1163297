//! Snapshot walker: discovers program snapshots in a directory tree

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use sha2::{Digest, Sha256};

/// File name suffix of program snapshots
pub const SNAPSHOT_SUFFIX: &str = ".snapshot.json";

/// A snapshot file discovered during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredSnapshot {
    pub path: PathBuf,
}

impl DiscoveredSnapshot {
    /// sha-256 of the file content as lowercase hex
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn compute_hash(&self) -> std::io::Result<String> {
        let content = std::fs::read(&self.path)?;
        let mut hasher = Sha256::new();
        hasher.update(&content);
        Ok(format!("{:x}", hasher.finalize()))
    }
}

/// Scanner for discovering snapshot files
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    suffix: String,
}

impl Scanner {
    /// Create a new scanner for the given root (directory or single file)
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: SNAPSHOT_SUFFIX.to_string(),
        }
    }

    /// Match a different file name suffix
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Scan and return discovered snapshots, sorted by path
    ///
    /// A root that is itself a file is returned as-is, whatever its name.
    #[must_use]
    pub fn scan(&self) -> Vec<DiscoveredSnapshot> {
        if self.root.is_file() {
            return vec![DiscoveredSnapshot {
                path: self.root.clone(),
            }];
        }

        let mut found: Vec<DiscoveredSnapshot> = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .build()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
            .filter(|path| self.matches(path))
            .map(|path| DiscoveredSnapshot { path })
            .collect();
        found.sort_by(|a, b| a.path.cmp(&b.path));
        found
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }

    /// Get the root being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
