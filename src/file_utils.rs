use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use log::debug;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::errors::CorpusError;

// @module: File and directory utilities

/// A poem file found in the input directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemFile {
    // @field: Filename as text, used for the title and ordering
    pub name: String,

    // @field: Path as listed, used for reading
    pub path: PathBuf,
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    /// List the poem files directly inside `dir` whose names end with `extension`.
    ///
    /// Only regular files count (symlinks are followed when answering that).
    /// Files are returned sorted by name in code point order so ids are stable
    /// across runs. Each keeps its listed path, so names that are not valid
    /// UTF-8 are still read from the right file.
    pub fn list_poem_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PoemFile>, CorpusError> {
        let dir = dir.as_ref();
        if !Self::dir_exists(dir) {
            return Err(CorpusError::InputDirNotFound(dir.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| CorpusError::DirectoryListing {
                path: dir.to_path_buf(),
                source: io::Error::from(e),
            })?;

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(extension) && entry.path().is_file() {
                files.push(PoemFile {
                    name,
                    path: entry.into_path(),
                });
            }
        }

        // Lossy names can collide, the path keeps the order total
        files.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
        debug!("Found {} poem file(s) in {}", files.len(), dir.display());
        Ok(files)
    }

    /// Read a poem file as UTF-8 and return its normalized lines
    pub fn read_poem_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CorpusError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(normalize_lines(&content))
    }

    /// Replace `path` with `content` through a sibling temp file and a rename.
    ///
    /// The destination is either left untouched or fully written. Missing
    /// parent directories are reported, not created.
    pub fn write_atomically<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<(), CorpusError> {
        let path = path.as_ref();
        let to_write_error = |source: io::Error| CorpusError::OutputWrite {
            path: path.to_path_buf(),
            source,
        };

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut temp = NamedTempFile::new_in(&parent).map_err(to_write_error)?;
        temp.write_all(content).map_err(to_write_error)?;
        temp.as_file().sync_all().map_err(to_write_error)?;
        temp.persist(path).map_err(|e| to_write_error(e.error))?;

        Ok(())
    }
}

/// Split text on `\n`, `\r\n` or a lone `\r` and strip trailing whitespace.
///
/// Blank lines stay in place as empty strings. A final terminator does not
/// produce an extra empty line.
pub fn normalize_lines(content: &str) -> Vec<String> {
    let unified = content.replace("\r\n", "\n").replace('\r', "\n");
    unified
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}
