//! JSON file backend.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::{Store, StoreError};

/// Indentation used for persisted documents.
const INDENT: &[u8] = b"    ";

/// Document stored as a single pretty-printed JSON file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// target, so a reader never observes a half-written document.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    /// Create a store for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _phantom: PhantomData,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl<T> Clone for JsonFileStore<T> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

impl<T> fmt::Debug for JsonFileStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .finish()
    }
}

impl<T> Store<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    fn load(&self) -> Result<T, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "document absent, using empty value");
                return Ok(T::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, &buf).map_err(|e| self.write_error(e))?;

        if let Err(e) = fs::rename(&tmp, &self.path) {
            // Best effort; the rename error is the one worth reporting.
            let _ = fs::remove_file(&tmp);
            return Err(self.write_error(e));
        }

        tracing::debug!(path = %self.path.display(), bytes = buf.len(), "document saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: i64,
        name: String,
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Vec<Entry>>::new(dir.path().join("absent.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Vec<Entry>>::new(dir.path().join("entries.json"));
        let entries = vec![
            Entry { id: 1, name: "Pen".to_string() },
            Entry { id: 2, name: "Ink".to_string() },
        ];

        store.save(&entries).unwrap();

        assert_eq!(store.load().unwrap(), entries);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        let store = JsonFileStore::<Vec<Entry>>::new(&path);

        store
            .save(&vec![Entry { id: 1, name: "Pen".to_string() }])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n        \"id\": 1"));
    }

    #[test]
    fn test_empty_collection_written_as_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        let store = JsonFileStore::<Vec<Entry>>::new(&path);

        store.save(&Vec::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        fs::write(&path, "[{\"id\": 1,").unwrap();
        let store = JsonFileStore::<Vec<Entry>>::new(&path);

        let err = store.load().unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_empty_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        fs::write(&path, "").unwrap();
        let store = JsonFileStore::<Vec<Entry>>::new(&path);

        assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("entries.json");
        let store = JsonFileStore::<Vec<Entry>>::new(&path);

        store.save(&vec![Entry::default()]).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Vec<Entry>>::new(dir.path().join("entries.json"));

        store.save(&vec![Entry::default()]).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["entries.json".to_string()]);
    }

    #[test]
    fn test_save_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Vec<Entry>>::new(dir.path().join("entries.json"));

        store
            .save(&vec![Entry { id: 1, name: "Pen".to_string() }, Entry::default()])
            .unwrap();
        store.save(&Vec::new()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }
}
