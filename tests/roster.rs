use std::collections::BTreeSet;
use std::fs;

use tempfile::TempDir;

use courtside::config::RosterConfig;
use courtside::error::{Error, ErrorKind};
use courtside::roster::Roster;
use courtside::types::{Court, DestinationRef, Person, Queue, Status};

fn open_roster(temp: &TempDir, players_per_court: usize) -> Roster {
    let mut config = RosterConfig::with_data_dir(temp.path());
    config.players_per_court = players_per_court;
    let roster = Roster::open(&config);
    roster.initialize(config.players_per_court).unwrap();
    roster
}

fn person(first_name: &str, player: bool) -> Person {
    Person {
        first_name: first_name.to_string(),
        last_name: "Player".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        // Skips argon2 here; these tests never authenticate.
        hashed_password: b"not-a-real-hash".to_vec(),
        status: Status::Normal,
        player,
    }
}

fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Registers players and puts them all in the queue.
fn seat_in_queue(roster: &Roster, players: &[&str]) {
    for id in players {
        roster.insert_person(id, person(id, true)).unwrap();
    }
    let mut queue = roster.load_queue().unwrap();
    queue.container.players.extend(ids(players));
    roster.save_queue(&queue).unwrap();
}

#[test]
fn test_court_ids_and_listing() {
    let temp = TempDir::new().unwrap();
    let roster = open_roster(&temp, 4);

    let first = roster.create_court(&Court::new("Center")).unwrap();
    let second = roster.create_court(&Court::new("North")).unwrap();

    assert_eq!(first, "1000");
    assert_eq!(second, "1001");
    assert_eq!(roster.list_courts().unwrap(), vec!["1000", "1001"]);
    assert_eq!(roster.court_count().unwrap(), 2);
    assert_eq!(roster.counter().unwrap().next_id, 1002);
}

#[test]
fn test_state_survives_reopen() {
    let temp = TempDir::new().unwrap();
    {
        let roster = open_roster(&temp, 3);
        roster.insert_person("ada", person("Ada", true)).unwrap();
        roster.create_court(&Court::new("Center")).unwrap();
    }

    let roster = Roster::open(&RosterConfig::with_data_dir(temp.path()));
    assert!(roster.is_initialized().unwrap());
    assert_eq!(roster.players_per_court().unwrap(), 3);
    assert_eq!(roster.load_person("ada").unwrap().status, Status::Admin);
    assert_eq!(roster.load_court("1000").unwrap().name, "Center");
    assert_eq!(roster.create_court(&Court::new("North")).unwrap(), "1001");
}

#[test]
fn test_first_person_is_admin_then_normal() {
    let temp = TempDir::new().unwrap();
    let roster = open_roster(&temp, 4);

    let mut claimed = person("Ada", false);
    claimed.status = Status::Admin;
    roster.insert_person("bob", person("Bob", false)).unwrap();
    let second = roster.insert_person("ada", claimed).unwrap();

    assert_eq!(roster.load_person("bob").unwrap().status, Status::Admin);
    assert_eq!(second.status, Status::Normal);
    assert_eq!(roster.list_persons().unwrap(), vec!["ada", "bob"]);
}

#[test]
fn test_records_round_trip() {
    let temp = TempDir::new().unwrap();
    let roster = open_roster(&temp, 4);

    let ada = person("Ada", true);
    roster.save_person("ada", &ada).unwrap();
    assert_eq!(roster.load_person("ada").unwrap(), ada);

    let mut court = Court::new("Center");
    court.players = ids(&["ada"]);
    let id = roster.create_court(&court).unwrap();
    assert_eq!(roster.load_court(&id).unwrap(), court);

    let mut queue = Queue::default();
    queue.container.name = "Waiting".to_string();
    roster.save_queue(&queue).unwrap();
    assert_eq!(roster.load_queue().unwrap(), queue);
}

#[test]
fn test_move_preserves_order_and_union() {
    let temp = TempDir::new().unwrap();
    let roster = open_roster(&temp, 4);
    seat_in_queue(&roster, &["p1", "p2", "p3", "p4"]);
    let court = DestinationRef::court(roster.create_court(&Court::new("Center")).unwrap());

    roster
        .move_players(&DestinationRef::Queue, &court, &ids(&["p3", "p1"]))
        .unwrap();

    let queue = roster.resolve(&DestinationRef::Queue).unwrap();
    let target = roster.resolve(&court).unwrap();
    assert_eq!(queue.players().to_vec(), vec!["p2", "p4"]);
    assert_eq!(target.players().to_vec(), vec!["p3", "p1"]);

    let union: BTreeSet<&String> = queue.players().iter().chain(target.players()).collect();
    assert_eq!(union.len(), 4);
}

#[test]
fn test_court_to_queue_move() {
    let temp = TempDir::new().unwrap();
    let roster = open_roster(&temp, 4);
    seat_in_queue(&roster, &["p1", "p2"]);
    let court = DestinationRef::court(roster.create_court(&Court::new("Center")).unwrap());

    roster
        .move_players(&DestinationRef::Queue, &court, &ids(&["p1", "p2"]))
        .unwrap();
    roster
        .move_players(&court, &DestinationRef::Queue, &ids(&["p2"]))
        .unwrap();

    assert_eq!(roster.load_queue().unwrap().container.players, vec!["p2"]);
    assert_eq!(roster.load_court("1000").unwrap().players, vec!["p1"]);
}

#[test]
fn test_move_into_full_court_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let roster = open_roster(&temp, 2);
    seat_in_queue(&roster, &["p1", "p2", "p3"]);
    let court = DestinationRef::court(roster.create_court(&Court::new("Center")).unwrap());
    roster
        .move_players(&DestinationRef::Queue, &court, &ids(&["p1", "p2"]))
        .unwrap();

    let queue_file = temp.path().join("queue.json");
    let court_file = temp.path().join("courts").join("1000.json");
    let queue_before = fs::read(&queue_file).unwrap();
    let court_before = fs::read(&court_file).unwrap();

    let err = roster
        .move_players(&DestinationRef::Queue, &court, &ids(&["p3"]))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::CapacityExceeded {
            capacity: 2,
            occupied: 2,
            incoming: 1
        }
    ));
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(fs::read(&queue_file).unwrap(), queue_before);
    assert_eq!(fs::read(&court_file).unwrap(), court_before);
}

#[test]
fn test_move_of_absent_player_leaves_disk_alone() {
    let temp = TempDir::new().unwrap();
    let roster = open_roster(&temp, 4);
    seat_in_queue(&roster, &["p1"]);
    roster.insert_person("p9", person("P9", true)).unwrap();
    let court = DestinationRef::court(roster.create_court(&Court::new("Center")).unwrap());

    let queue_file = temp.path().join("queue.json");
    let queue_before = fs::read(&queue_file).unwrap();

    let err = roster
        .move_players(&DestinationRef::Queue, &court, &ids(&["p1", "p9"]))
        .unwrap_err();

    assert!(matches!(err, Error::NotAtSource(ref id) if id == "p9"));
    assert_eq!(fs::read(&queue_file).unwrap(), queue_before);
    assert!(roster.load_court("1000").unwrap().players.is_empty());
}

#[test]
fn test_missing_queue_source_is_internal() {
    let temp = TempDir::new().unwrap();
    let roster = open_roster(&temp, 4);
    let court = DestinationRef::court(roster.create_court(&Court::new("Center")).unwrap());
    fs::remove_file(temp.path().join("queue.json")).unwrap();

    let err = roster
        .move_players(&DestinationRef::Queue, &court, &ids(&["p1"]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);

    let err = roster
        .move_players(&court, &DestinationRef::Queue, &ids(&["p1"]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_corrupt_counter_is_internal() {
    let temp = TempDir::new().unwrap();
    let roster = open_roster(&temp, 4);
    fs::write(temp.path().join("counter.json"), b"{\"nextID\": \"soon\"}").unwrap();

    let err = roster.create_court(&Court::new("Center")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[test]
fn test_records_use_documented_layout() {
    let temp = TempDir::new().unwrap();
    let roster = open_roster(&temp, 4);
    roster.insert_person("ada", person("Ada", true)).unwrap();

    let raw = fs::read_to_string(temp.path().join("persons").join("ada.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["firstname"], "Ada");
    assert_eq!(value["status"], "admin");
    assert!(value["hashedpassword"].is_string());

    let raw = fs::read_to_string(temp.path().join("counter.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["nextID"], 1000);
    assert_eq!(value["playersPerCourt"], 4);
}

#[test]
fn test_corrupt_person_record() {
    let temp = TempDir::new().unwrap();
    let roster = open_roster(&temp, 4);
    roster.insert_person("ada", person("Ada", true)).unwrap();
    fs::write(temp.path().join("persons").join("x.json"), b"{ not json").unwrap();

    assert!(!roster.person_exists("x"));
    assert!(!roster.is_player("x"));

    let err = roster.load_person("x").unwrap_err();
    assert!(matches!(err, Error::CorruptRecord { .. }));
    assert_eq!(err.kind(), ErrorKind::Internal);

    assert!(roster.person_exists("ada"));
    assert!(roster.is_player("ada"));
}
