use serde::Serialize;

use crate::roster::Roster;
use crate::types::{ContainerUpdate, Court};

use super::{init_roster, parse_fields};
use super::prompts::confirm_action;

#[derive(Serialize)]
struct CourtOutput {
    id: String,
    name: String,
    players: Vec<String>,
    capacity: usize,
}

fn court_output(roster: &Roster, id: &str, court: Court) -> anyhow::Result<CourtOutput> {
    Ok(CourtOutput {
        id: id.to_string(),
        name: court.name,
        players: court.players,
        capacity: roster.players_per_court()?,
    })
}

fn print_court(output: &CourtOutput) {
    println!(
        "{}  {}  ({}/{})",
        output.id,
        output.name,
        output.players.len(),
        output.capacity
    );
    for player in &output.players {
        println!("  - {player}");
    }
}

pub fn run_court_create(data_dir: String, name: String) -> anyhow::Result<()> {
    let roster = init_roster(&data_dir)?;
    let id = roster.create_court(&Court::new(name.clone()))?;

    println!("Created court \"{}\" with id {}", name, id);

    Ok(())
}

pub fn run_court_list(data_dir: String, json: bool) -> anyhow::Result<()> {
    let roster = init_roster(&data_dir)?;

    let mut courts = Vec::new();
    for id in roster.list_courts()? {
        let court = roster.load_court(&id)?;
        courts.push(court_output(&roster, &id, court)?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&courts)?);
        return Ok(());
    }

    if courts.is_empty() {
        println!("No courts.");
        return Ok(());
    }

    for court in &courts {
        print_court(court);
    }

    Ok(())
}

pub fn run_court_show(data_dir: String, id: String, json: bool) -> anyhow::Result<()> {
    let roster = init_roster(&data_dir)?;
    let output = court_output(&roster, &id, roster.load_court(&id)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_court(&output);
    }

    Ok(())
}

pub fn run_court_remove(
    data_dir: String,
    id: String,
    non_interactive: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let roster = init_roster(&data_dir)?;
    let court = roster.load_court(&id)?;

    let message = if court.players.is_empty() {
        format!("Remove court {} ({})?", id, court.name)
    } else {
        format!(
            "Remove court {} ({})? Its {} player(s) will no longer be placed anywhere.",
            id,
            court.name,
            court.players.len()
        )
    };
    if !confirm_action(&message, yes, non_interactive)? {
        println!("Cancelled.");
        return Ok(());
    }

    roster.remove_court(&id)?;
    println!("Removed court {}", id);

    Ok(())
}

pub fn run_court_update(data_dir: String, id: String, fields: String) -> anyhow::Result<()> {
    let roster = init_roster(&data_dir)?;

    let update = ContainerUpdate::from_value(&parse_fields(&fields)?)?;

    let court = roster.update_court(&id, &update)?;
    print_court(&court_output(&roster, &id, court)?);

    Ok(())
}
