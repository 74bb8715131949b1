use std::collections::HashSet;

use tracing::{info, warn};

use super::{Destination, Roster};
use crate::error::{Error, Result};
use crate::types::DestinationRef;

impl Roster {
    /// Moves `player_ids` from `source` to `target`.
    ///
    /// Every check runs before anything is mutated. Persisting is two
    /// independent writes, source first: if the target write fails the players
    /// are recorded nowhere and the call returns `Error::Internal`.
    pub fn move_players(
        &self,
        source: &DestinationRef,
        target: &DestinationRef,
        player_ids: &[String],
    ) -> Result<()> {
        check_request(source, target, player_ids)?;

        let guard = self.write_lock();

        let mut from = self
            .resolve(source)
            .map_err(|e| Error::Internal(format!("failed to load source {source}: {e}")))?;
        let mut to = self.resolve(target)?;

        check_location(&from, player_ids)?;
        check_room(&to, player_ids)?;

        from.players_mut().retain(|p| !player_ids.contains(p));
        to.players_mut().extend(player_ids.iter().cloned());

        self.persist(&guard, &from)?;
        if let Err(e) = self.persist(&guard, &to) {
            warn!(
                %source,
                %target,
                players = ?player_ids,
                error = %e,
                "players removed from source but not recorded at target"
            );
            return Err(Error::Internal(format!(
                "players left {source} but could not be recorded at {target}: {e}"
            )));
        }

        info!(
            %source,
            %target,
            from = from.name(),
            to = to.name(),
            players = ?player_ids,
            "moved players"
        );
        Ok(())
    }
}

fn check_request(
    source: &DestinationRef,
    target: &DestinationRef,
    player_ids: &[String],
) -> Result<()> {
    if source == target {
        return Err(Error::BadRequest(format!(
            "Source and target are both {source}"
        )));
    }

    if player_ids.is_empty() {
        return Err(Error::BadRequest("No players to move".to_string()));
    }

    let mut seen = HashSet::with_capacity(player_ids.len());
    if let Some(dup) = player_ids.iter().find(|id| !seen.insert(id.as_str())) {
        return Err(Error::BadRequest(format!("Player '{dup}' is listed twice")));
    }

    Ok(())
}

fn check_location(source: &Destination, player_ids: &[String]) -> Result<()> {
    match player_ids.iter().find(|id| !source.contains(id)) {
        Some(missing) => Err(Error::NotAtSource(missing.clone())),
        None => Ok(()),
    }
}

fn check_room(target: &Destination, player_ids: &[String]) -> Result<()> {
    if let Some(present) = player_ids.iter().find(|id| target.contains(id)) {
        return Err(Error::BadRequest(format!(
            "Player '{present}' is already at {}",
            target.reference()
        )));
    }

    match (target.capacity(), target.remaining_capacity()) {
        (Some(capacity), Some(remaining)) if player_ids.len() > remaining => {
            Err(Error::CapacityExceeded {
                capacity,
                occupied: target.players().len(),
                incoming: player_ids.len(),
            })
        }
        _ => Ok(()),
    }
}
