//! Address book persisted as a versioned JSON document.

use super::traits::AddressBookRepository;
use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Contact};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Format version written by this build.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct DocumentRef<'a> {
    version: u32,
    contacts: &'a [Contact],
}

#[derive(Deserialize)]
struct Document {
    version: u32,
    #[serde(default)]
    contacts: Vec<Contact>,
}

/// Stores the address book in a single JSON file.
///
/// Saves go to a sibling temporary file that is then renamed over the target,
/// so an interrupted save never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        let document: Document = serde_json::from_str(&data)?;
        if document.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: document.version,
                expected: FORMAT_VERSION,
            });
        }

        let book = AddressBook::from_contacts(document.contacts);
        tracing::info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let document = DocumentRef {
            version: FORMAT_VERSION,
            contacts: book.list_all(),
        };
        let json = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(parent, e))?;
        }

        let temp = self.temp_path();
        let written = fs::write(&temp, json)
            .map_err(|e| self.io_error(&temp, e))
            .and_then(|()| fs::rename(&temp, &self.path).map_err(|e| self.io_error(&self.path, e)));

        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&temp) {
                tracing::debug!(path = %temp.display(), error = %cleanup, "Temporary file not removed");
            }
            return Err(e);
        }

        tracing::info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
