use tracing::info;

use super::{Roster, WriteGuard};
use crate::error::{Error, Result};
use crate::types::{Queue, QueueUpdate};

impl Roster {
    pub fn load_queue(&self) -> Result<Queue> {
        self.store
            .get_queue()?
            .ok_or_else(|| Error::NotFound("queue".to_string()))
    }

    pub fn save_queue(&self, queue: &Queue) -> Result<()> {
        let _guard = self.write_lock();
        self.store.put_queue(queue)
    }

    /// Applies a partial update to the queue's container. The queue has no
    /// capacity limit, but every listed player is still validated.
    pub fn update_queue(&self, update: &QueueUpdate) -> Result<Queue> {
        let _guard = self.write_lock();
        let mut queue = self.load_queue()?;

        let Some(container) = &update.container else {
            return Ok(queue);
        };

        if let Some(players) = &container.players {
            self.validate_players(players)?;
        }

        if let Some(name) = &container.name {
            queue.container.name.clone_from(name);
        }
        if let Some(players) = &container.players {
            queue.container.players.clone_from(players);
        }

        self.store.put_queue(&queue)?;
        info!(players = queue.container.players.len(), "updated queue");
        Ok(queue)
    }

    pub(super) fn initialize_queue(&self, _guard: &WriteGuard<'_>) -> Result<()> {
        if self.store.get_queue()?.is_none() {
            self.store.put_queue(&Queue::default())?;
            info!("created empty queue");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::roster::testing::{add_players, memory_roster};
    use crate::store::MemoryStore;
    use crate::types::ContainerUpdate;

    #[test]
    fn test_queue_missing_before_initialize() {
        let roster = Roster::new(Arc::new(MemoryStore::new()));
        assert!(matches!(roster.load_queue(), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_save_load_round_trip() {
        let roster = memory_roster();
        let mut queue = roster.load_queue().unwrap();
        assert_eq!(queue.container.name, "Queue");

        queue.container.players = vec!["p3".to_string(), "p1".to_string()];
        roster.save_queue(&queue).unwrap();
        assert_eq!(roster.load_queue().unwrap(), queue);
    }

    #[test]
    fn test_update_container_has_no_capacity_limit() {
        let roster = memory_roster();
        let ids = ["p1", "p2", "p3", "p4", "p5", "p6"];
        add_players(&roster, &ids);

        let update = QueueUpdate {
            container: Some(ContainerUpdate {
                name: Some("Waiting".to_string()),
                players: Some(ids.map(String::from).to_vec()),
            }),
        };
        let queue = roster.update_queue(&update).unwrap();

        assert_eq!(queue.container.name, "Waiting");
        assert_eq!(queue.container.players.len(), 6);
        assert_eq!(roster.load_queue().unwrap(), queue);
    }

    #[test]
    fn test_update_rejects_unknown_player() {
        let roster = memory_roster();
        add_players(&roster, &["p1"]);

        let update = QueueUpdate {
            container: Some(ContainerUpdate {
                name: Some("Waiting".to_string()),
                players: Some(vec!["p1".to_string(), "ghost".to_string()]),
            }),
        };
        let result = roster.update_queue(&update);

        assert!(matches!(result, Err(Error::BadRequest(_))));
        assert_eq!(roster.load_queue().unwrap().container.name, "Queue");
    }

    #[test]
    fn test_empty_update_is_a_no_op() {
        let roster = memory_roster();
        let before = roster.load_queue().unwrap();
        let after = roster.update_queue(&QueueUpdate::default()).unwrap();
        assert_eq!(before, after);
    }
}
