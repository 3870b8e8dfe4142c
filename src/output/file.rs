//! Append-only file output.

use super::Output;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Appends lines to a file opened once at construction.
///
/// The file is never truncated, and each line is a single `write_all` on an
/// `O_APPEND` handle.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileOutput {
    /// Opens `path` for appending, expanding a leading `~` and creating missing parent
    /// directories.
    ///
    /// # Errors
    /// `InvalidOutput` for an empty path, `Io` if the directory or file cannot be created.
    pub fn open(path: impl AsRef<str>) -> Result<Self, crate::Error> {
        let raw = path.as_ref();
        if raw.trim().is_empty() {
            return Err(crate::Error::InvalidOutput(
                "file output needs a path".to_string(),
            ));
        }

        let path = PathBuf::from(shellexpand::tilde(raw).into_owned());
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Resolved location, after `~` expansion.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Output for FileOutput {
    fn write(&self, line: &str) -> Result<(), crate::Error> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.flush()?;
        Ok(())
    }
}
