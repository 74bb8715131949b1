use tracing::debug;

use crate::error::{Error, Result};
use crate::roster::Roster;

/// Proof that a person authenticated. Carries the acting person's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    person_id: String,
}

impl Session {
    /// Wraps an id that an outside issuer has already authenticated.
    #[must_use]
    pub fn for_person(person_id: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
        }
    }

    #[must_use]
    pub fn person_id(&self) -> &str {
        &self.person_id
    }
}

/// Verifies a person's password and issues a session for them.
///
/// Unknown ids and wrong passwords both come back as `Unauthorized`.
pub fn issue_session(roster: &Roster, person_id: &str, password: &str) -> Result<Session> {
    let person = match roster.load_person(person_id) {
        Ok(person) => person,
        Err(Error::NotFound(_)) => return Err(Error::Unauthorized),
        Err(e) => return Err(e),
    };

    if !roster.hasher().verify(password, &person.hashed_password)? {
        debug!(person_id, "rejected password");
        return Err(Error::Unauthorized);
    }

    Ok(Session::for_person(person_id))
}
