use super::{Roster, WriteGuard};
use crate::error::Result;
use crate::types::{Court, DestinationRef, Queue};

/// A loaded destination: somewhere that holds player ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Court {
        id: String,
        court: Court,
        capacity: usize,
    },
    Queue(Queue),
}

impl Destination {
    #[must_use]
    pub fn reference(&self) -> DestinationRef {
        match self {
            Self::Court { id, .. } => DestinationRef::Court(id.clone()),
            Self::Queue(_) => DestinationRef::Queue,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Court { court, .. } => &court.name,
            Self::Queue(queue) => &queue.container.name,
        }
    }

    #[must_use]
    pub fn players(&self) -> &[String] {
        match self {
            Self::Court { court, .. } => &court.players,
            Self::Queue(queue) => &queue.container.players,
        }
    }

    pub(super) fn players_mut(&mut self) -> &mut Vec<String> {
        match self {
            Self::Court { court, .. } => &mut court.players,
            Self::Queue(queue) => &mut queue.container.players,
        }
    }

    #[must_use]
    pub fn contains(&self, player_id: &str) -> bool {
        self.players().iter().any(|p| p == player_id)
    }

    /// `None` means unbounded.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Self::Court { capacity, .. } => Some(*capacity),
            Self::Queue(_) => None,
        }
    }

    /// Free seats left, `None` when unbounded.
    #[must_use]
    pub fn remaining_capacity(&self) -> Option<usize> {
        self.capacity()
            .map(|capacity| capacity.saturating_sub(self.players().len()))
    }
}

impl Roster {
    /// Loads whatever `reference` points at.
    pub fn resolve(&self, reference: &DestinationRef) -> Result<Destination> {
        match reference {
            DestinationRef::Court(id) => Ok(Destination::Court {
                id: id.clone(),
                court: self.load_court(id)?,
                capacity: self.players_per_court()?,
            }),
            DestinationRef::Queue => Ok(Destination::Queue(self.load_queue()?)),
        }
    }

    /// Writes a destination back in place.
    pub(super) fn persist(&self, _guard: &WriteGuard<'_>, destination: &Destination) -> Result<()> {
        match destination {
            Destination::Court { id, court, .. } => self.store.put_court(id, court),
            Destination::Queue(queue) => self.store.put_queue(queue),
        }
    }
}
