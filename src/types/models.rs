use serde::{Deserialize, Serialize};

use super::Status;

/// First identifier handed out to a court.
pub const FIRST_COURT_ID: u64 = 1000;

/// Court capacity used when no configuration says otherwise.
pub const DEFAULT_PLAYERS_PER_COURT: usize = 4;

/// Display name given to the queue when it is first created.
pub const QUEUE_NAME: &str = "Queue";

/// A registered person. The identifier is the record key and is not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "hashedpassword", with = "base64_bytes")]
    pub hashed_password: Vec<u8>,
    pub status: Status,
    pub player: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    pub name: String,
    pub players: Vec<String>,
}

impl Court {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }
}

/// Named, ordered list of players held by the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub players: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queue {
    pub container: Container,
}

impl Default for Queue {
    fn default() -> Self {
        Self {
            container: Container {
                name: QUEUE_NAME.to_string(),
                players: Vec::new(),
            },
        }
    }
}

/// Court id allocator state plus the fixed per-court capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    #[serde(rename = "nextID")]
    pub next_id: u64,
    #[serde(rename = "playersPerCourt")]
    pub players_per_court: usize,
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            next_id: FIRST_COURT_ID,
            players_per_court: DEFAULT_PLAYERS_PER_COURT,
        }
    }
}

mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
