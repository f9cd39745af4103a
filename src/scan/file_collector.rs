use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use log::{debug, trace};
use walkdir::WalkDir;

use crate::scan::types::ScanOptions;

/// Directories and markup files discovered under a scan root
#[derive(Debug, Default)]
pub struct CollectedTree {
    /// Every directory visited during the walk, root included
    pub directories: Vec<PathBuf>,

    /// Files whose extension matched the configured markup set
    pub files: Vec<PathBuf>,
}

/// File collector for finding markup files
#[derive(Debug)]
pub struct FileCollector {
    /// Valid file extensions to collect
    valid_extensions: Vec<String>,

    /// Whether to follow symbolic links during the walk
    follow_links: bool,
}

impl FileCollector {
    /// Create a new file collector with the default markup extensions
    pub fn new() -> Self {
        Self::from_options(&ScanOptions::default())
    }

    /// Create a new file collector with custom file extensions
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self {
            valid_extensions: extensions,
            follow_links: true,
        }
    }

    /// Create a new file collector from scan options
    pub fn from_options(options: &ScanOptions) -> Self {
        Self {
            valid_extensions: options.extensions.clone(),
            follow_links: options.follow_links,
        }
    }

    /// Walk the root and collect all visited directories plus matching files.
    ///
    /// Fails if the root is not a directory; the scan must not start in that
    /// case. Traversal order is whatever the filesystem yields.
    pub fn collect(&self, root: impl AsRef<Path>) -> Result<CollectedTree> {
        let root = root.as_ref();
        if !root.is_dir() {
            bail!("Scan root {} is not a directory", root.display());
        }
        debug!("Collecting markup files from directory: {}", root.display());

        let mut tree = CollectedTree::default();

        for entry in WalkDir::new(root)
            .follow_links(self.follow_links)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if entry.file_type().is_dir() {
                tree.directories.push(path.to_owned());
            } else if entry.file_type().is_file() && self.matches_extension(path) {
                trace!("Found markup file: {}", path.display());
                tree.files.push(path.to_owned());
            }
        }

        debug!(
            "Collected {} markup files across {} directories",
            tree.files.len(),
            tree.directories.len()
        );
        Ok(tree)
    }

    /// Check whether a path carries one of the configured markup extensions
    fn matches_extension(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            if let Some(ext_str) = ext.to_str() {
                return self
                    .valid_extensions
                    .iter()
                    .any(|valid_ext| ext_str.eq_ignore_ascii_case(valid_ext));
            }
        }
        false
    }

    /// Get the list of valid file extensions
    pub fn extensions(&self) -> &[String] {
        &self.valid_extensions
    }
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use anyhow::Result;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn collects_markup_files_recursively() -> Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("sub"))?;
        fs::write(temp.path().join("index.html"), "")?;
        fs::write(temp.path().join("sub/page.vue"), "")?;
        fs::write(temp.path().join("sub/readme.md"), "")?;

        let tree = FileCollector::new().collect(temp.path())?;

        assert_eq!(tree.files.len(), 2, "Should match html and vue only");
        assert_eq!(tree.directories.len(), 2, "Root and sub should be visited");
        Ok(())
    }

    #[test]
    fn extension_match_is_case_insensitive() -> Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("PAGE.HTML"), "")?;

        let tree = FileCollector::new().collect(temp.path())?;

        assert_eq!(tree.files.len(), 1);
        Ok(())
    }

    #[test]
    fn custom_extensions_replace_the_default_set() -> Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("app.svelte"), "")?;
        fs::write(temp.path().join("index.html"), "")?;

        let collector = FileCollector::with_extensions(vec!["svelte".to_string()]);
        let tree = collector.collect(temp.path())?;

        assert_eq!(collector.extensions(), ["svelte".to_string()]);
        assert_eq!(tree.files.len(), 1);
        assert!(tree.files[0].ends_with("app.svelte"));
        Ok(())
    }

    #[test]
    fn rejects_a_root_that_is_not_a_directory() -> Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("plain.html");
        fs::write(&file, "")?;

        let err = FileCollector::new().collect(&file).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));

        let err = FileCollector::new()
            .collect(temp.path().join("missing"))
            .unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
        Ok(())
    }
}
