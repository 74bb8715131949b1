use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifies one destination: a court by id, or the queue.
///
/// The textual form is `queue` or `court:<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DestinationRef {
    Court(String),
    Queue,
}

impl DestinationRef {
    #[must_use]
    pub fn court(id: impl Into<String>) -> Self {
        Self::Court(id.into())
    }

    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Court(_) => "court",
            Self::Queue => "queue",
        }
    }
}

impl fmt::Display for DestinationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Court(id) => write!(f, "{}:{id}", self.tag()),
            Self::Queue => f.write_str(self.tag()),
        }
    }
}

impl FromStr for DestinationRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "queue" {
            return Ok(Self::Queue);
        }

        match s.split_once(':') {
            Some(("court", id)) if !id.is_empty() => Ok(Self::Court(id.to_string())),
            Some(("court", _)) => Err(Error::BadRequest(
                "Court reference needs an id, e.g. court:1000".to_string(),
            )),
            _ => Err(Error::BadRequest(format!(
                "Unknown destination '{s}', expected 'queue' or 'court:<id>'"
            ))),
        }
    }
}
