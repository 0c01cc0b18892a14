//! Storage layer for trainlog.
//!
//! This module persists a [`TrainList`] as a JSON document on disk. Every
//! load of an existing file is checked against the configured JSON Schema
//! before any record is handed to a command.

pub mod schema;

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::StorageConfig;
use crate::error::{Error, Result};
use crate::train::TrainList;

pub use schema::{SchemaValidator, SchemaViolation, DEFAULT_SCHEMA};

/// Indentation used for the stored document.
const INDENT: &[u8] = b"    ";

/// A train list file plus the schema it must satisfy.
#[derive(Debug, Clone)]
pub struct Storage {
    /// Path to the train list file.
    path: PathBuf,
    /// Path to the JSON Schema resource.
    schema_path: PathBuf,
    /// Create missing parent directories on save.
    create_parent_dirs: bool,
}

impl Storage {
    /// Create a storage handle for `path` using the given settings.
    ///
    /// Nothing is read or written until [`Storage::load`] or
    /// [`Storage::save`] is called.
    #[must_use]
    pub fn new(path: impl AsRef<Path>, config: &StorageConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            schema_path: config.schema_path.clone(),
            create_parent_dirs: config.create_parent_dirs,
        }
    }

    /// Get the path to the train list file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the path to the schema resource.
    #[must_use]
    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    /// Load the train list.
    ///
    /// - A missing file yields an empty list.
    /// - A file that fails schema validation yields `None` after a
    ///   `Data validation error` line is written to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the file is not JSON, [`Error::Decode`] if
    /// it matches the schema but not the record type, a schema error if the
    /// schema resource is missing or unusable, and an I/O error if either
    /// file cannot be read.
    pub fn load(&self, out: &mut impl Write) -> Result<Option<TrainList>> {
        if !self.path.exists() {
            debug!("{} does not exist, starting empty", self.path.display());
            return Ok(Some(TrainList::new()));
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|source| Error::FileRead {
            path: self.path.clone(),
            source,
        })?;
        let document: Value = serde_json::from_str(&raw).map_err(|source| Error::Parse {
            path: self.path.clone(),
            source,
        })?;

        let validator = SchemaValidator::from_path(&self.schema_path)?;
        if let Err(violation) = validator.validate(&document) {
            warn!(
                "{} failed validation against {}",
                self.path.display(),
                self.schema_path.display()
            );
            writeln!(out, "Data validation error: {violation}")?;
            return Ok(None);
        }

        let trains: TrainList = serde_json::from_value(document).map_err(|source| Error::Decode {
            path: self.path.clone(),
            source,
        })?;
        debug!("Loaded {} trains from {}", trains.len(), self.path.display());
        Ok(Some(trains))
    }

    /// Load the train list, treating a failed validation as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] in place of the `None` from
    /// [`Storage::load`], plus every error `load` can return.
    pub fn load_required(&self, out: &mut impl Write) -> Result<TrainList> {
        self.load(out)?.ok_or_else(|| Error::InvalidData {
            path: self.path.clone(),
        })
    }

    /// Write the train list, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns an error if a parent directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, trains: &TrainList) -> Result<()> {
        if self.create_parent_dirs {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                        path: parent.to_path_buf(),
                        source,
                    })?;
                }
            }
        }

        let body = to_pretty_vec(trains)?;
        std::fs::write(&self.path, body).map_err(|source| Error::FileWrite {
            path: self.path.clone(),
            source,
        })?;

        info!("Saved {} trains to {}", trains.len(), self.path.display());
        Ok(())
    }
}

/// Serialize with four-space indentation. Non-ASCII text is written as is.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_pretty_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::Train;

    struct Fixture {
        dir: tempfile::TempDir,
        config: StorageConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let schema_path = dir.path().join("scheme.json");
            std::fs::write(&schema_path, DEFAULT_SCHEMA).unwrap();
            let config = StorageConfig {
                schema_path,
                ..StorageConfig::default()
            };
            Self { dir, config }
        }

        fn storage(&self, name: &str) -> Storage {
            Storage::new(self.dir.path().join(name), &self.config)
        }
    }

    fn sample() -> TrainList {
        TrainList::from(vec![
            Train::new(7, "Kyiv", "06:45"),
            Train::new(101, "Berlin", "08:00"),
            Train::new(12, "Rome", "21:10"),
        ])
    }

    #[test]
    fn test_load_nonexistent_is_empty() {
        let fixture = Fixture::new();
        let mut out = Vec::new();
        let loaded = fixture.storage("missing.json").load(&mut out).unwrap();
        assert_eq!(loaded, Some(TrainList::new()));
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_file_does_not_need_schema() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            schema_path: dir.path().join("absent.json"),
            ..StorageConfig::default()
        };
        let storage = Storage::new(dir.path().join("trains.json"), &config);
        assert!(storage.load(&mut Vec::new()).unwrap().is_some());
    }

    #[test]
    fn test_round_trip() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        let trains = sample();

        storage.save(&trains).unwrap();
        let loaded = storage.load(&mut Vec::new()).unwrap().unwrap();
        assert_eq!(loaded, trains);
    }

    #[test]
    fn test_round_trip_empty() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        storage.save(&TrainList::new()).unwrap();
        assert_eq!(std::fs::read_to_string(storage.path()).unwrap(), "[]");
        assert_eq!(
            storage.load(&mut Vec::new()).unwrap(),
            Some(TrainList::new())
        );
    }

    #[test]
    fn test_invalid_document_is_sentinel() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        std::fs::write(storage.path(), r#"[{"num": "ten"}]"#).unwrap();

        let mut out = Vec::new();
        let loaded = storage.load(&mut out).unwrap();
        assert!(loaded.is_none());

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Data validation error:"));
    }

    #[test]
    fn test_load_required_turns_sentinel_into_error() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        std::fs::write(storage.path(), r#"{"not": "a list"}"#).unwrap();

        let err = storage.load_required(&mut Vec::new()).unwrap_err();
        assert!(err.is_invalid_data());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        std::fs::write(storage.path(), "[{").unwrap();

        let err = storage.load(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_integral_float_num_loads_and_round_trips() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        std::fs::write(
            storage.path(),
            r#"[{"num": 1.0, "destination": "Oslo", "start_time": "05:00"}]"#,
        )
        .unwrap();

        let loaded = storage.load(&mut Vec::new()).unwrap().unwrap();
        assert_eq!(loaded.as_slice()[0].destination.as_deref(), Some("Oslo"));

        storage.save(&loaded).unwrap();
        let text = std::fs::read_to_string(storage.path()).unwrap();
        assert!(text.contains("\"num\": 1.0"));
        assert_eq!(storage.load(&mut Vec::new()).unwrap(), Some(loaded));
    }

    #[test]
    fn test_num_beyond_i64_loads_and_round_trips() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        std::fs::write(storage.path(), r#"[{"num": 10000000000000000000}]"#).unwrap();

        let loaded = storage.load(&mut Vec::new()).unwrap().unwrap();
        assert_eq!(
            loaded.as_slice()[0].num.as_ref().and_then(serde_json::Number::as_u64),
            Some(10_000_000_000_000_000_000)
        );

        storage.save(&loaded).unwrap();
        let text = std::fs::read_to_string(storage.path()).unwrap();
        assert!(text.contains("10000000000000000000"));
    }

    #[test]
    fn test_schema_valid_but_undecodable_is_decode_error() {
        let fixture = Fixture::new();
        std::fs::write(&fixture.config.schema_path, r#"{"type": "array"}"#).unwrap();
        let storage = fixture.storage("trains.json");
        std::fs::write(storage.path(), r#"[{"destination": 3}]"#).unwrap();

        let err = storage.load(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(!matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_pretty_vec_is_utf8_without_escapes() {
        let trains = TrainList::from(vec![Train::new(3, "Zürich", "07:00")]);
        let bytes = to_pretty_vec(&trains).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Zürich"));
        assert!(text.starts_with("[\n    {"));
    }

    #[test]
    fn test_extra_keys_keep_their_order_on_rewrite() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        std::fs::write(
            storage.path(),
            r#"[{"zeta": 1, "num": 4, "alpha": 2, "destination": "Riga", "mid": 3}]"#,
        )
        .unwrap();

        let mut loaded = storage.load(&mut Vec::new()).unwrap().unwrap();
        loaded.add(Train::new(5, "Tartu", "09:00"));
        storage.save(&loaded).unwrap();

        let text = std::fs::read_to_string(storage.path()).unwrap();
        let zeta = text.find("\"zeta\"").unwrap();
        let alpha = text.find("\"alpha\"").unwrap();
        let mid = text.find("\"mid\"").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_missing_schema_for_existing_file() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        storage.save(&sample()).unwrap();
        std::fs::remove_file(&fixture.config.schema_path).unwrap();

        let err = storage.load(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::SchemaResourceMissing { .. }));
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        storage
            .save(&TrainList::from(vec![Train::new(1, "Oslo", "05:00")]))
            .unwrap();

        let text = std::fs::read_to_string(storage.path()).unwrap();
        let expected = "[\n    {\n        \"num\": 1,\n        \"destination\": \"Oslo\",\n        \"start_time\": \"05:00\"\n    }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_save_keeps_non_ascii() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        storage
            .save(&TrainList::from(vec![Train::new(3, "Москва", "12:00")]))
            .unwrap();

        let text = std::fs::read_to_string(storage.path()).unwrap();
        assert!(text.contains("Москва"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_save_overwrites() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        storage.save(&sample()).unwrap();
        storage.save(&TrainList::new()).unwrap();
        assert_eq!(
            storage.load(&mut Vec::new()).unwrap(),
            Some(TrainList::new())
        );
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let fixture = Fixture::new();
        let storage = fixture.storage("nested/deeper/trains.json");
        storage.save(&sample()).unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_save_without_parent_dirs_fails() {
        let mut fixture = Fixture::new();
        fixture.config.create_parent_dirs = false;
        let storage = fixture.storage("nested/trains.json");

        let err = storage.save(&sample()).unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));
    }

    #[test]
    fn test_storage_paths() {
        let fixture = Fixture::new();
        let storage = fixture.storage("trains.json");
        assert!(storage.path().ends_with("trains.json"));
        assert_eq!(storage.schema_path(), fixture.config.schema_path);
    }
}
