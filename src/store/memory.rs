use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::Store;
use super::path::validate_key;
use crate::error::Result;
use crate::types::*;

#[derive(Default)]
struct Records {
    counter: Option<Counter>,
    persons: BTreeMap<String, Person>,
    courts: BTreeMap<String, Court>,
    queue: Option<Queue>,
}

/// In-process store. Nothing survives the value being dropped.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Records>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Store for MemoryStore {
    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    fn get_counter(&self) -> Result<Option<Counter>> {
        Ok(self.records().counter)
    }

    fn put_counter(&self, counter: &Counter) -> Result<()> {
        self.records().counter = Some(*counter);
        Ok(())
    }

    fn get_person(&self, id: &str) -> Result<Option<Person>> {
        validate_key("Person", id)?;
        Ok(self.records().persons.get(id).cloned())
    }

    fn put_person(&self, id: &str, person: &Person) -> Result<()> {
        validate_key("Person", id)?;
        self.records()
            .persons
            .insert(id.to_string(), person.clone());
        Ok(())
    }

    fn delete_person(&self, id: &str) -> Result<bool> {
        validate_key("Person", id)?;
        Ok(self.records().persons.remove(id).is_some())
    }

    fn list_persons(&self) -> Result<Vec<String>> {
        Ok(self.records().persons.keys().cloned().collect())
    }

    fn get_court(&self, id: &str) -> Result<Option<Court>> {
        validate_key("Court", id)?;
        Ok(self.records().courts.get(id).cloned())
    }

    fn put_court(&self, id: &str, court: &Court) -> Result<()> {
        validate_key("Court", id)?;
        self.records().courts.insert(id.to_string(), court.clone());
        Ok(())
    }

    fn delete_court(&self, id: &str) -> Result<bool> {
        validate_key("Court", id)?;
        Ok(self.records().courts.remove(id).is_some())
    }

    fn list_courts(&self) -> Result<Vec<String>> {
        Ok(self.records().courts.keys().cloned().collect())
    }

    fn get_queue(&self) -> Result<Option<Queue>> {
        Ok(self.records().queue.clone())
    }

    fn put_queue(&self, queue: &Queue) -> Result<()> {
        self.records().queue = Some(queue.clone());
        Ok(())
    }
}
