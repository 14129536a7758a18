use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::app_config::StoreSection;
use crate::core::errors::{Result, ShiftSwapError};
use crate::core::models::swap_request::RequestDocument;
use crate::core::traits::request_store::RequestStore;

/// Request store backed by a single pretty-printed JSON file.
///
/// Writes go to a temporary file in the same directory which is then
/// renamed over the target, so readers see either the old document or
/// the new one, never a truncated file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store that reads and writes `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at `{data_dir}/{file}`, falling back to
    /// `requests.json` if the `[store]` section is missing.
    pub fn from_config(data_dir: &Path, store_section: Option<&StoreSection>) -> Self {
        let file = store_section
            .map(|s| s.file.as_str())
            .unwrap_or(StoreSection::DEFAULT_FILE);
        Self::new(data_dir.join(file))
    }

    /// Return the file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    fn serialize(document: &RequestDocument) -> Result<String> {
        serde_json::to_string_pretty(document).map_err(serialize_error)
    }

    /// Write `contents` into a temp file next to the target and return it.
    fn stage(&self, contents: &str) -> Result<NamedTempFile> {
        let parent = self.parent_dir();
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        Ok(tmp)
    }

    /// Create the backing file holding an empty document.
    ///
    /// Uses a no-clobber rename: if the file appeared in the meantime it
    /// is left alone.
    fn initialize(&self) -> Result<()> {
        let empty = Self::serialize(&RequestDocument::default())?;
        let tmp = self.stage(&empty)?;

        match tmp.persist_noclobber(&self.path) {
            Ok(_) => {
                debug!(path = %self.path.display(), "initialized empty request file");
                Ok(())
            }
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(e.error.into()),
        }
    }
}

/// Encoding failures surface as I/O errors; the file on disk is untouched.
fn serialize_error(e: serde_json::Error) -> ShiftSwapError {
    std::io::Error::other(format!("Failed to serialize requests: {e}")).into()
}

impl RequestStore for JsonFileStore {
    fn load(&self) -> Result<RequestDocument> {
        if !self.path.exists() {
            self.initialize()?;
        }

        let content = fs::read_to_string(&self.path)?;
        let document: RequestDocument =
            serde_json::from_str(&content).map_err(|e| ShiftSwapError::CorruptData {
                path: self.path.clone(),
                detail: e.to_string(),
            })?;

        debug!(
            path = %self.path.display(),
            requests = document.requests.len(),
            "loaded request file"
        );
        Ok(document)
    }

    fn save(&self, document: &RequestDocument) -> Result<()> {
        let json = Self::serialize(document)?;
        let tmp = self.stage(&json)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(
            path = %self.path.display(),
            requests = document.requests.len(),
            "saved request file"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::swap_request::{RequestStatus, SwapRequest};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn sample(id: &str) -> SwapRequest {
        let ts = Utc.with_ymd_and_hms(2026, 1, 10, 9, 30, 0).unwrap();
        SwapRequest {
            id: id.to_string(),
            from: "2026-01-12T07:00".into(),
            to: "2026-01-12T15:00".into(),
            with: "Jane Doe".into(),
            reason: "Kid pickup".into(),
            status: RequestStatus::Pending,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn load_missing_file_creates_empty_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data").join("requests.json");
        let store = JsonFileStore::new(path.clone());

        let doc = store.load().unwrap();

        assert!(doc.requests.is_empty());
        assert!(path.exists(), "load should create the backing file");
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({ "requests": [] }));
    }

    #[test]
    fn save_then_load_returns_same_document() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("requests.json"));
        let doc = RequestDocument {
            requests: vec![sample("bbb"), sample("aaa")],
        };

        store.save(&doc).unwrap();

        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn save_overwrites_instead_of_appending() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("requests.json"));

        store
            .save(&RequestDocument {
                requests: vec![sample("one"), sample("two")],
            })
            .unwrap();
        store
            .save(&RequestDocument {
                requests: vec![sample("three")],
            })
            .unwrap();

        let doc = store.load().unwrap();
        assert_eq!(doc.requests.len(), 1);
        assert_eq!(doc.requests[0].id, "three");
    }

    #[test]
    fn save_creates_parent_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dir").join("requests.json");
        let store = JsonFileStore::new(path.clone());

        store.save(&RequestDocument::default()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn save_of_load_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("requests.json");
        let store = JsonFileStore::new(path.clone());
        store
            .save(&RequestDocument {
                requests: vec![sample("x1"), sample("x2")],
            })
            .unwrap();
        let before = fs::read(&path).unwrap();

        store.save(&store.load().unwrap()).unwrap();

        assert_eq!(fs::read(&path).unwrap(), before);
    }

    const FOREIGN_FILE: &str = r#"{
  "requests": [
    {
      "id": "d4e5f6",
      "from": "2026-01-13T07:00",
      "to": "2026-01-13T15:00",
      "with": "John Roe",
      "reason": "Doctor visit",
      "status": "PENDING",
      "createdAt": "2026-01-10T09:30:12.000Z",
      "updatedAt": "2026-01-10T09:30:12.000Z"
    },
    {
      "id": "a1b2c3",
      "from": "2026-01-12T07:00",
      "to": "2026-01-12T15:00",
      "with": "Jane Doe",
      "reason": "Kid pickup",
      "status": "APPROVED",
      "createdAt": "2026-01-10T09:30:12.345Z",
      "updatedAt": "2026-01-10T10:00:00.500Z"
    }
  ]
}"#;

    #[test]
    fn reads_foreign_millisecond_timestamps() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("requests.json");
        fs::write(&path, FOREIGN_FILE).unwrap();
        let store = JsonFileStore::new(path);

        let doc = store.load().unwrap();

        assert_eq!(doc.requests[0].created_at.timestamp_subsec_millis(), 0);
        assert_eq!(doc.requests[1].status, RequestStatus::Approved);
        assert_eq!(doc.requests[1].created_at.timestamp_subsec_millis(), 345);
    }

    #[test]
    fn foreign_file_survives_save_of_load_unchanged() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("requests.json");
        fs::write(&path, FOREIGN_FILE).unwrap();
        let store = JsonFileStore::new(path.clone());

        store.save(&store.load().unwrap()).unwrap();

        let after = fs::read_to_string(&path).unwrap();
        assert!(after.contains("\"createdAt\": \"2026-01-10T09:30:12.000Z\""));
        assert_eq!(after, FOREIGN_FILE);
    }

    #[test]
    fn whole_second_timestamps_keep_millis() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("requests.json");
        let store = JsonFileStore::new(path.clone());

        store
            .save(&RequestDocument {
                requests: vec![sample("zero")],
            })
            .unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"createdAt\": \"2026-01-10T09:30:00.000Z\""));
        assert!(raw.contains("\"updatedAt\": \"2026-01-10T09:30:00.000Z\""));
    }

    #[test]
    fn serialize_failure_is_not_reported_as_corrupt_file() {
        let json_err = serde_json::from_str::<RequestDocument>("{").unwrap_err();

        let err = serialize_error(json_err);

        assert!(matches!(err, ShiftSwapError::Io(_)));
        assert!(err.to_string().contains("Failed to serialize requests"));
    }

    #[test]
    fn invalid_json_is_corrupt_data() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("requests.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(path.clone()).load().unwrap_err();

        assert!(matches!(err, ShiftSwapError::CorruptData { path: ref p, .. } if *p == path));
    }

    #[test]
    fn wrong_shape_is_corrupt_data() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("requests.json");
        fs::write(&path, r#"{"requests": [{"id": "only-an-id"}]}"#).unwrap();

        let err = JsonFileStore::new(path).load().unwrap_err();

        assert!(matches!(err, ShiftSwapError::CorruptData { .. }));
    }

    #[test]
    fn corrupt_file_is_left_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("requests.json");
        fs::write(&path, "[]").unwrap();

        assert!(JsonFileStore::new(path.clone()).load().is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn from_config_defaults_to_requests_json() {
        let store = JsonFileStore::from_config(Path::new(".shiftswap"), None);
        assert_eq!(store.path(), Path::new(".shiftswap/requests.json"));

        let section = StoreSection {
            file: "swaps.json".to_string(),
        };
        let store = JsonFileStore::from_config(Path::new(".shiftswap"), Some(&section));
        assert_eq!(store.path(), Path::new(".shiftswap/swaps.json"));
    }
}
