use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::Store;
use super::path::validate_key;
use crate::error::{Error, Result};
use crate::types::*;

const COUNTER_FILE: &str = "counter.json";
const QUEUE_FILE: &str = "queue.json";
const PERSONS_DIR: &str = "persons";
const COURTS_DIR: &str = "courts";
const RECORD_EXT: &str = "json";

/// FsStore keeps every record as its own JSON file under a data directory:
///
/// ```text
/// <root>/counter.json
/// <root>/queue.json
/// <root>/persons/<id>.json
/// <root>/courts/<id>.json
/// ```
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn counter_path(&self) -> PathBuf {
        self.root.join(COUNTER_FILE)
    }

    fn queue_path(&self) -> PathBuf {
        self.root.join(QUEUE_FILE)
    }

    fn person_path(&self, id: &str) -> Result<PathBuf> {
        validate_key("Person", id)?;
        Ok(self
            .root
            .join(PERSONS_DIR)
            .join(format!("{id}.{RECORD_EXT}")))
    }

    fn court_path(&self, id: &str) -> Result<PathBuf> {
        validate_key("Court", id)?;
        Ok(self
            .root
            .join(COURTS_DIR)
            .join(format!("{id}.{RECORD_EXT}")))
    }
}

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| Error::CorruptRecord {
            key: path.display().to_string(),
            reason: e.to_string(),
        })
}

/// Writes through a sibling temp file so readers never see a partial record.
fn write_record<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| Error::Internal(format!("record path has no parent: {}", path.display())))?;
    fs::create_dir_all(dir)?;

    let json = serde_json::to_vec_pretty(value)?;
    let temp_path = dir.join(format!(".{}.tmp", Uuid::new_v4()));

    if let Err(e) = fs::write(&temp_path, &json) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    Ok(())
}

fn remove_record(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn list_keys(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut keys = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXT) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if stem.starts_with('.') {
            continue;
        }
        keys.push(stem.to_string());
    }

    keys.sort();
    Ok(keys)
}

impl Store for FsStore {
    fn initialize(&self) -> Result<()> {
        fs::create_dir_all(self.root.join(PERSONS_DIR))?;
        fs::create_dir_all(self.root.join(COURTS_DIR))?;
        Ok(())
    }

    fn get_counter(&self) -> Result<Option<Counter>> {
        read_record(&self.counter_path())
    }

    fn put_counter(&self, counter: &Counter) -> Result<()> {
        write_record(&self.counter_path(), counter)
    }

    fn get_person(&self, id: &str) -> Result<Option<Person>> {
        read_record(&self.person_path(id)?)
    }

    fn put_person(&self, id: &str, person: &Person) -> Result<()> {
        write_record(&self.person_path(id)?, person)
    }

    fn delete_person(&self, id: &str) -> Result<bool> {
        remove_record(&self.person_path(id)?)
    }

    fn list_persons(&self) -> Result<Vec<String>> {
        list_keys(&self.root.join(PERSONS_DIR))
    }

    fn get_court(&self, id: &str) -> Result<Option<Court>> {
        read_record(&self.court_path(id)?)
    }

    fn put_court(&self, id: &str, court: &Court) -> Result<()> {
        write_record(&self.court_path(id)?, court)
    }

    fn delete_court(&self, id: &str) -> Result<bool> {
        remove_record(&self.court_path(id)?)
    }

    fn list_courts(&self) -> Result<Vec<String>> {
        list_keys(&self.root.join(COURTS_DIR))
    }

    fn get_queue(&self) -> Result<Option<Queue>> {
        read_record(&self.queue_path())
    }

    fn put_queue(&self, queue: &Queue) -> Result<()> {
        write_record(&self.queue_path(), queue)
    }
}
