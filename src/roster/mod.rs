//! Roster services on top of a [`Store`].
//!
//! [`Roster`] is the single owner of mutations: every operation that writes a
//! record takes the writer lock for its whole read-modify-write, so id
//! allocation, updates and relocations sharing one `Roster` never interleave.
//! Reads go straight to the store. Separate processes pointed at the same data
//! directory are not coordinated.

mod counter;
mod courts;
mod destination;
mod persons;
mod queue;
mod relocate;

use std::sync::{Arc, Mutex, MutexGuard};

pub use destination::Destination;

use crate::auth::CredentialHasher;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::store::{FsStore, Store};

/// Proof that the caller holds the writer lock.
type WriteGuard<'a> = MutexGuard<'a, ()>;

pub struct Roster {
    store: Arc<dyn Store>,
    hasher: CredentialHasher,
    writer: Mutex<()>,
}

impl Roster {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            hasher: CredentialHasher::new(),
            writer: Mutex::new(()),
        }
    }

    /// Opens the file-backed roster living in `config.data_dir`.
    pub fn open(config: &RosterConfig) -> Self {
        Self::new(Arc::new(FsStore::new(config.data_dir.clone())))
    }

    /// Creates the storage layout, the counter and the empty queue.
    ///
    /// Records that already exist are left untouched, so `players_per_court`
    /// only takes effect the first time.
    pub fn initialize(&self, players_per_court: usize) -> Result<()> {
        let guard = self.write_lock();
        self.store.initialize()?;
        self.initialize_counter(&guard, players_per_court)?;
        self.initialize_queue(&guard)?;
        Ok(())
    }

    /// True once the counter record exists.
    pub fn is_initialized(&self) -> Result<bool> {
        Ok(self.store.get_counter()?.is_some())
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    #[must_use]
    pub fn hasher(&self) -> &CredentialHasher {
        &self.hasher
    }

    fn write_lock(&self) -> WriteGuard<'_> {
        self.writer.lock().unwrap_or_else(|e| e.into_inner())
    }
}
