pub mod path;
mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the record persistence interface.
///
/// Each method reads or writes exactly one record. Getters return `Ok(None)`
/// for an absent record and an error for one that exists but cannot be read.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Counter operations
    fn get_counter(&self) -> Result<Option<Counter>>;
    fn put_counter(&self, counter: &Counter) -> Result<()>;

    // Person operations
    fn get_person(&self, id: &str) -> Result<Option<Person>>;
    fn put_person(&self, id: &str, person: &Person) -> Result<()>;
    fn delete_person(&self, id: &str) -> Result<bool>;
    fn list_persons(&self) -> Result<Vec<String>>;

    // Court operations
    fn get_court(&self, id: &str) -> Result<Option<Court>>;
    fn put_court(&self, id: &str, court: &Court) -> Result<()>;
    fn delete_court(&self, id: &str) -> Result<bool>;
    fn list_courts(&self) -> Result<Vec<String>>;

    // Queue operations
    fn get_queue(&self) -> Result<Option<Queue>>;
    fn put_queue(&self, queue: &Queue) -> Result<()>;
}
