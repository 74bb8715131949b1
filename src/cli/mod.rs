mod commands;
mod court;
mod person;
mod prompts;
mod queue;
mod relocate;

pub use commands::{CourtCommands, PersonCommands, QueueCommands};
pub use court::{run_court_create, run_court_list, run_court_remove, run_court_show, run_court_update};
pub use person::{run_person_add, run_person_list, run_person_remove, run_person_show, run_person_update};
pub use queue::{run_queue_show, run_queue_update};
pub use relocate::run_move;

use serde_json::Value;
use tracing::info;

use crate::config::RosterConfig;
use crate::error::{Error, ErrorKind};
use crate::roster::Roster;

/// Exit status for a failed command, by error kind.
pub const EXIT_BAD_REQUEST: i32 = 65;
pub const EXIT_NOT_FOUND: i32 = 66;
pub const EXIT_INTERNAL: i32 = 70;
pub const EXIT_UNAUTHORIZED: i32 = 77;

/// Open the roster in a data directory, checking it has been initialized
pub fn init_roster(data_dir: &str) -> anyhow::Result<Roster> {
    let config = RosterConfig::load(data_dir)?;
    let roster = Roster::open(&config);

    if !roster.is_initialized()? {
        anyhow::bail!(
            "Roster not found in {}. Run 'courtside init' first.",
            config.data_dir().display()
        );
    }

    Ok(roster)
}

pub fn run_init(data_dir: String, players_per_court: Option<usize>) -> anyhow::Result<()> {
    let mut config = RosterConfig::load(&data_dir)?;
    if let Some(players_per_court) = players_per_court {
        config.players_per_court = players_per_court;
    }
    config.validate()?;

    let roster = Roster::open(&config);
    if roster.is_initialized()? {
        anyhow::bail!(
            "Roster already initialized in {}",
            config.data_dir().display()
        );
    }

    if !config.config_path().exists() || players_per_court.is_some() {
        config.save()?;
    }
    roster.initialize(config.players_per_court)?;

    info!(data_dir = %config.data_dir().display(), "roster initialized");

    println!();
    println!("Roster initialized in {}", config.data_dir().display());
    println!("  Players per court: {}", config.players_per_court);
    println!("  The first person added becomes the admin.");
    println!();

    Ok(())
}

/// Parses a `--fields` argument. Malformed JSON is a bad request.
pub fn parse_fields(fields: &str) -> Result<Value, Error> {
    serde_json::from_str(fields)
        .map_err(|e| Error::BadRequest(format!("--fields is not valid JSON: {e}")))
}

/// Maps a failed command to its exit status.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>().map(Error::kind) {
        Some(ErrorKind::BadRequest) => EXIT_BAD_REQUEST,
        Some(ErrorKind::NotFound) => EXIT_NOT_FOUND,
        Some(ErrorKind::Unauthorized) => EXIT_UNAUTHORIZED,
        Some(ErrorKind::Internal) => EXIT_INTERNAL,
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_follows_error_kind() {
        let not_found: anyhow::Error = Error::NotFound("court".to_string()).into();
        assert_eq!(exit_code(&not_found), EXIT_NOT_FOUND);

        let full: anyhow::Error = Error::CapacityExceeded {
            capacity: 4,
            occupied: 4,
            incoming: 1,
        }
        .into();
        assert_eq!(exit_code(&full), EXIT_BAD_REQUEST);

        let denied: anyhow::Error = Error::Unauthorized.into();
        assert_eq!(exit_code(&denied), EXIT_UNAUTHORIZED);

        let broken: anyhow::Error = Error::Internal("disk".to_string()).into();
        assert_eq!(exit_code(&broken), EXIT_INTERNAL);
    }

    #[test]
    fn test_exit_code_for_plain_errors() {
        let err = anyhow::anyhow!("--yes is required");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_parse_fields_rejects_malformed_json() {
        let err = parse_fields("{\"Name\": ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);

        let value = parse_fields(r#"{"Name": "Center"}"#).unwrap();
        assert_eq!(value["Name"], "Center");
    }

    #[test]
    fn test_init_roster_requires_init() {
        let temp = tempfile::TempDir::new().unwrap();
        let data_dir = temp.path().to_string_lossy().to_string();

        assert!(init_roster(&data_dir).is_err());
        run_init(data_dir.clone(), Some(2)).unwrap();

        let roster = init_roster(&data_dir).unwrap();
        assert_eq!(roster.players_per_court().unwrap(), 2);
        assert!(run_init(data_dir, None).is_err());
    }
}
