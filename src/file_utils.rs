use futures::stream::{self, StreamExt};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::CorpusError;

// @module: Directory listing and archive reading

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @resolves: Absolute form of an existing directory
    fn resolve_dir(dir: &Path) -> Result<PathBuf, CorpusError> {
        let root = fs::canonicalize(dir).map_err(|source| CorpusError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

        if !root.is_dir() {
            return Err(CorpusError::DirectoryRead {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            });
        }

        Ok(root)
    }

    /// List the entries of a directory as absolute paths.
    ///
    /// Only the directory itself is enumerated. Entries come back in whatever
    /// order the filesystem reports them.
    pub fn list_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, CorpusError> {
        let dir = dir.as_ref();
        let root = Self::resolve_dir(dir)?;

        let mut entries = Vec::new();
        for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| CorpusError::DirectoryRead {
                path: dir.to_path_buf(),
                source: e.into(),
            })?;
            entries.push(entry.into_path());
        }

        debug!("Listed {} entries in {:?}", entries.len(), root);
        Ok(entries)
    }

    /// List every regular file below a directory, following nested folders
    pub fn list_dir_recursive<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, CorpusError> {
        let dir = dir.as_ref();
        let root = Self::resolve_dir(dir)?;

        let mut files = Vec::new();
        for entry in WalkDir::new(&root).min_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| CorpusError::DirectoryRead {
                path: dir.to_path_buf(),
                source: e.into(),
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        debug!("Found {} files below {:?}", files.len(), root);
        Ok(files)
    }

    /// Keep the paths whose file name ends with `pattern`, preserving order
    pub fn filter_by_suffix(paths: &[PathBuf], pattern: &str) -> Vec<PathBuf> {
        paths
            .iter()
            .filter(|path| {
                path.file_name()
                    .map(|name| name.to_string_lossy().ends_with(pattern))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    /// Read one archive as UTF-8 text
    pub async fn read_archive<P: AsRef<Path>>(path: P) -> Result<String, CorpusError> {
        let path = path.as_ref();
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CorpusError::from_read(path, source))
    }

    /// Read several archives concurrently.
    ///
    /// Contents are returned in the order of `paths` no matter which read
    /// finishes first. The first read to fail aborts the whole batch and the
    /// contents already read are discarded. A `max_concurrent` of zero issues
    /// every read at once.
    pub async fn read_archives<F>(
        paths: &[PathBuf],
        max_concurrent: usize,
        progress_callback: F,
    ) -> Result<Vec<String>, CorpusError>
    where
        F: Fn(usize, usize),
    {
        let total = paths.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let limit = if max_concurrent == 0 { total } else { max_concurrent };

        let mut reads = stream::iter(paths.iter().enumerate())
            .map(|(index, path)| async move { (index, Self::read_archive(path).await) })
            .buffer_unordered(limit);

        let mut slots: Vec<Option<String>> = vec![None; total];
        let mut completed = 0;

        while let Some((index, result)) = reads.next().await {
            slots[index] = Some(result?);
            completed += 1;
            progress_callback(completed, total);
        }

        Ok(slots.into_iter().flatten().collect())
    }
}
