use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::info;

use super::Roster;
use crate::error::{Error, Result};
use crate::types::{ContainerUpdate, Court};

impl Roster {
    /// Stores a new court under a freshly allocated id and returns that id.
    pub fn create_court(&self, court: &Court) -> Result<String> {
        let guard = self.write_lock();
        let id = self.allocate_court_id_locked(&guard)?.to_string();
        self.store.put_court(&id, court)?;
        info!(id, name = %court.name, "created court");
        Ok(id)
    }

    pub fn load_court(&self, id: &str) -> Result<Court> {
        self.store
            .get_court(id)?
            .ok_or_else(|| Error::NotFound(format!("court {id}")))
    }

    /// Applies a partial update in place; the id is kept.
    pub fn update_court(&self, id: &str, update: &ContainerUpdate) -> Result<Court> {
        let _guard = self.write_lock();
        let mut court = self.load_court(id)?;

        if let Some(players) = &update.players {
            self.validate_players(players)?;
            let capacity = self.players_per_court()?;
            if players.len() > capacity {
                return Err(Error::CapacityExceeded {
                    capacity,
                    occupied: 0,
                    incoming: players.len(),
                });
            }
        }

        if let Some(name) = &update.name {
            court.name.clone_from(name);
        }
        if let Some(players) = &update.players {
            court.players.clone_from(players);
        }

        self.store.put_court(id, &court)?;
        info!(id, "updated court");
        Ok(court)
    }

    /// Court ids in allocation order.
    pub fn list_courts(&self) -> Result<Vec<String>> {
        let mut ids = self.store.list_courts()?;
        ids.sort_by(|a, b| compare_court_ids(a, b));
        Ok(ids)
    }

    /// Deletes a court record. Players still listed on it are dropped with it.
    pub fn remove_court(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock();
        if !self.store.delete_court(id)? {
            return Err(Error::NotFound(format!("court {id}")));
        }
        info!(id, "removed court");
        Ok(())
    }

    pub fn court_exists(&self, id: &str) -> bool {
        matches!(self.store.get_court(id), Ok(Some(_)))
    }

    pub fn court_count(&self) -> Result<usize> {
        Ok(self.store.list_courts()?.len())
    }

    /// Every entry must be a registered player, listed once.
    pub(super) fn validate_players(&self, players: &[String]) -> Result<()> {
        let mut seen = HashSet::with_capacity(players.len());
        for id in players {
            if !seen.insert(id.as_str()) {
                return Err(Error::BadRequest(format!("Player '{id}' is listed twice")));
            }
            if !self.is_player(id) {
                return Err(Error::BadRequest(format!(
                    "'{id}' is not a registered player"
                )));
            }
        }
        Ok(())
    }
}

fn compare_court_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
