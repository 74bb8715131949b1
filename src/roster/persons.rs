use tracing::{debug, info};

use super::Roster;
use crate::auth::Session;
use crate::error::{Error, Result};
use crate::store::path::validate_key;
use crate::types::{Person, PersonUpdate, Status};

impl Roster {
    /// True iff a well-formed record exists for `id`.
    pub fn person_exists(&self, id: &str) -> bool {
        matches!(self.store.get_person(id), Ok(Some(_)))
    }

    /// True iff the person loads and is flagged as a player.
    ///
    /// Any failure to load counts as "not a player".
    pub fn is_player(&self, id: &str) -> bool {
        match self.store.get_person(id) {
            Ok(Some(person)) => person.player,
            Ok(None) => false,
            Err(e) => {
                debug!(id, error = %e, "treating unreadable person as non-player");
                false
            }
        }
    }

    pub fn load_person(&self, id: &str) -> Result<Person> {
        self.store
            .get_person(id)?
            .ok_or_else(|| Error::NotFound(format!("person {id}")))
    }

    /// Writes the record as given, creating or replacing it.
    pub fn save_person(&self, id: &str, person: &Person) -> Result<()> {
        let _guard = self.write_lock();
        self.store.put_person(id, person)
    }

    /// Registers a new person and returns the stored record.
    ///
    /// The first person in an empty store becomes admin; everyone after starts
    /// out as normal whatever status was passed in.
    pub fn insert_person(&self, id: &str, mut person: Person) -> Result<Person> {
        validate_key("Person", id)?;
        let _guard = self.write_lock();

        if self.store.get_person(id)?.is_some() {
            return Err(Error::AlreadyExists(format!("person {id}")));
        }

        let bootstrap = self.store.list_persons()?.is_empty();
        person.status = if bootstrap {
            Status::Admin
        } else {
            Status::Normal
        };

        self.store.put_person(id, &person)?;
        info!(id, status = %person.status, player = person.player, "registered person");
        Ok(person)
    }

    pub fn list_persons(&self) -> Result<Vec<String>> {
        self.store.list_persons()
    }

    pub fn person_count(&self) -> Result<usize> {
        Ok(self.store.list_persons()?.len())
    }

    pub fn remove_person(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock();
        if !self.store.delete_person(id)? {
            return Err(Error::NotFound(format!("person {id}")));
        }
        info!(id, "removed person");
        Ok(())
    }

    /// Applies a partial update to a person.
    ///
    /// Changing `status` requires the session's own person to be an admin at
    /// the time of the call.
    pub fn update_person(
        &self,
        id: &str,
        session: &Session,
        update: &PersonUpdate,
    ) -> Result<Person> {
        let _guard = self.write_lock();
        let mut person = self.load_person(id)?;

        if update.status.is_some() {
            let actor = match self.load_person(session.person_id()) {
                Ok(actor) => actor,
                Err(Error::NotFound(_)) => return Err(Error::Unauthorized),
                Err(e) => return Err(e),
            };
            if !actor.status.is_admin() {
                return Err(Error::Unauthorized);
            }
        }

        let hashed_password = update
            .password
            .as_deref()
            .map(|password| self.hasher.hash(password))
            .transpose()?;

        if let Some(first_name) = &update.first_name {
            person.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &update.last_name {
            person.last_name.clone_from(last_name);
        }
        if let Some(email) = &update.email {
            person.email.clone_from(email);
        }
        if let Some(hash) = hashed_password {
            person.hashed_password = hash;
        }
        if let Some(status) = update.status {
            person.status = status;
        }
        if let Some(player) = update.player {
            person.player = player;
        }

        self.store.put_person(id, &person)?;
        info!(id, actor = session.person_id(), "updated person");
        Ok(person)
    }
}
