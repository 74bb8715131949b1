//! Typed partial updates.
//!
//! Front ends hand over sparse field maps (`{"Name": "Court A"}`). Each map is
//! parsed into one of the request structs below before anything is touched, so
//! a wrong type anywhere rejects the whole update.

use serde_json::{Map, Value};

use super::Status;
use crate::error::{Error, Result};

/// Fields of a person that may be changed after registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub status: Option<Status>,
    pub player: Option<bool>,
}

impl PersonUpdate {
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = expect_object("update", value)?;
        let mut update = Self::default();

        for (field, value) in fields {
            match field.as_str() {
                "FirstName" => update.first_name = Some(expect_string(field, value)?),
                "LastName" => update.last_name = Some(expect_string(field, value)?),
                "Email" => update.email = Some(expect_string(field, value)?),
                "Password" => {
                    let password = expect_string(field, value)?;
                    if password.is_empty() {
                        return Err(Error::BadRequest("Password cannot be empty".to_string()));
                    }
                    update.password = Some(password);
                }
                "Status" => {
                    let raw = expect_string(field, value)?;
                    let status = Status::parse(&raw).ok_or_else(|| {
                        Error::BadRequest(format!(
                            "Status must be 'normal' or 'admin', got '{raw}'"
                        ))
                    })?;
                    update.status = Some(status);
                }
                "Player" => update.player = Some(expect_bool(field, value)?),
                other => return Err(unknown_field(other)),
            }
        }

        Ok(update)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Fields shared by a court and the queue's container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerUpdate {
    pub name: Option<String>,
    pub players: Option<Vec<String>>,
}

impl ContainerUpdate {
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = expect_object("update", value)?;
        Self::from_fields(fields)
    }

    fn from_fields(fields: &Map<String, Value>) -> Result<Self> {
        let mut update = Self::default();

        for (field, value) in fields {
            match field.as_str() {
                "Name" => update.name = Some(expect_string(field, value)?),
                "Players" => update.players = Some(expect_ids(field, value)?),
                other => return Err(unknown_field(other)),
            }
        }

        Ok(update)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueUpdate {
    pub container: Option<ContainerUpdate>,
}

impl QueueUpdate {
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = expect_object("update", value)?;
        let mut update = Self::default();

        for (field, value) in fields {
            match field.as_str() {
                "Container" => {
                    let nested = expect_object(field, value)?;
                    update.container = Some(ContainerUpdate::from_fields(nested)?);
                }
                other => return Err(unknown_field(other)),
            }
        }

        Ok(update)
    }
}

fn expect_object<'a>(field: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::BadRequest(format!("{field} must be an object")))
}

fn expect_string(field: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::BadRequest(format!("{field} must be a string")))
}

fn expect_bool(field: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::BadRequest(format!("{field} must be a boolean")))
}

fn expect_ids(field: &str, value: &Value) -> Result<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| Error::BadRequest(format!("{field} must be a list of ids")))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| Error::BadRequest(format!("{field} must only contain strings")))
        })
        .collect()
}

fn unknown_field(field: &str) -> Error {
    Error::BadRequest(format!("Unknown field '{field}'"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_person_update_parses_known_fields() {
        let update = PersonUpdate::from_value(&json!({
            "FirstName": "Grace",
            "Status": "admin",
            "Player": true,
        }))
        .unwrap();

        assert_eq!(update.first_name.as_deref(), Some("Grace"));
        assert_eq!(update.status, Some(Status::Admin));
        assert_eq!(update.player, Some(true));
        assert!(update.last_name.is_none());
    }

    #[test]
    fn test_person_update_rejects_wrong_types() {
        let err = PersonUpdate::from_value(&json!({"Player": "yes"})).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));

        let err = PersonUpdate::from_value(&json!({"Email": 12})).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));

        let err = PersonUpdate::from_value(&json!({"Status": "owner"})).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[test]
    fn test_person_update_rejects_unknown_fields() {
        let err = PersonUpdate::from_value(&json!({"Nickname": "x"})).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[test]
    fn test_container_update_players() {
        let update = ContainerUpdate::from_value(&json!({"Players": ["p1", "p2"]})).unwrap();
        assert_eq!(
            update.players,
            Some(vec!["p1".to_string(), "p2".to_string()])
        );

        let err = ContainerUpdate::from_value(&json!({"Players": ["p1", 2]})).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));

        let err = ContainerUpdate::from_value(&json!({"Players": "p1"})).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[test]
    fn test_queue_update_nests_container() {
        let update = QueueUpdate::from_value(&json!({
            "Container": {"Name": "Waiting", "Players": []}
        }))
        .unwrap();
        let container = update.container.unwrap();
        assert_eq!(container.name.as_deref(), Some("Waiting"));
        assert_eq!(container.players, Some(vec![]));

        let err = QueueUpdate::from_value(&json!({"Container": ["p1"]})).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[test]
    fn test_update_must_be_object() {
        assert!(PersonUpdate::from_value(&json!(["FirstName"])).is_err());
        assert!(ContainerUpdate::from_value(&json!(null)).is_err());
    }
}
