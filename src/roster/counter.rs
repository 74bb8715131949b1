use tracing::info;

use super::{Roster, WriteGuard};
use crate::error::{Error, Result};
use crate::types::{Counter, DEFAULT_PLAYERS_PER_COURT};

impl Roster {
    /// Returns the counter record, creating it with defaults if absent.
    pub fn counter(&self) -> Result<Counter> {
        let guard = self.write_lock();
        self.counter_locked(&guard)
    }

    /// Hands out the next court id. Ids are never reused.
    pub fn allocate_next_court_id(&self) -> Result<u64> {
        let guard = self.write_lock();
        self.allocate_court_id_locked(&guard)
    }

    /// Capacity of every court, without creating the counter.
    pub fn players_per_court(&self) -> Result<usize> {
        Ok(self
            .store
            .get_counter()?
            .map_or(DEFAULT_PLAYERS_PER_COURT, |c| c.players_per_court))
    }

    pub(super) fn initialize_counter(
        &self,
        _guard: &WriteGuard<'_>,
        players_per_court: usize,
    ) -> Result<()> {
        if players_per_court == 0 {
            return Err(Error::Config(
                "players per court must be at least 1".to_string(),
            ));
        }

        if self.store.get_counter()?.is_none() {
            let counter = Counter {
                players_per_court,
                ..Counter::default()
            };
            self.store.put_counter(&counter)?;
            info!(
                next_id = counter.next_id,
                players_per_court, "created court counter"
            );
        }
        Ok(())
    }

    pub(super) fn counter_locked(&self, _guard: &WriteGuard<'_>) -> Result<Counter> {
        if let Some(counter) = self.store.get_counter()? {
            return Ok(counter);
        }

        let counter = Counter::default();
        self.store.put_counter(&counter)?;
        info!(next_id = counter.next_id, "created default court counter");
        Ok(counter)
    }

    pub(super) fn allocate_court_id_locked(&self, guard: &WriteGuard<'_>) -> Result<u64> {
        let mut counter = self.counter_locked(guard)?;
        let id = counter.next_id;
        counter.next_id = id
            .checked_add(1)
            .ok_or_else(|| Error::Internal("court id space exhausted".to_string()))?;
        self.store.put_counter(&counter)?;
        Ok(id)
    }
}
