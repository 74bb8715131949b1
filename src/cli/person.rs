use serde::Serialize;

use crate::auth::issue_session;
use crate::error::Error;
use crate::types::{Person, PersonUpdate, Status};

use super::{init_roster, parse_fields};
use super::prompts::{confirm_action, password_or_prompt, text_or_prompt};

#[derive(Serialize)]
struct PersonOutput {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    status: Status,
    player: bool,
}

impl PersonOutput {
    fn new(id: &str, person: &Person) -> Self {
        Self {
            id: id.to_string(),
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            email: person.email.clone(),
            status: person.status,
            player: person.player,
        }
    }
}

fn print_person(output: &PersonOutput) {
    println!("{}", output.id);
    println!("  Name:   {} {}", output.first_name, output.last_name);
    println!("  Email:  {}", output.email);
    println!("  Status: {}", output.status);
    println!("  Player: {}", if output.player { "yes" } else { "no" });
}

#[allow(clippy::too_many_arguments)]
pub fn run_person_add(
    data_dir: String,
    id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    player: bool,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let roster = init_roster(&data_dir)?;

    let id = text_or_prompt(id, "id", "Person id:", non_interactive)?;

    let first_name = text_or_prompt(first_name, "first-name", "First name:", non_interactive)?;
    let last_name = text_or_prompt(last_name, "last-name", "Last name:", non_interactive)?;
    let email = text_or_prompt(email, "email", "Email:", non_interactive)?;
    let password = password_or_prompt(password, true, non_interactive)?;

    let person = Person {
        first_name,
        last_name,
        email,
        hashed_password: roster.hasher().hash(&password)?,
        status: Status::Normal,
        player,
    };
    let person = roster.insert_person(&id, person)?;

    println!();
    println!("Registered \"{}\" as {}", id, person.status);
    println!();

    Ok(())
}

pub fn run_person_list(data_dir: String, json: bool) -> anyhow::Result<()> {
    let roster = init_roster(&data_dir)?;

    let mut people = Vec::new();
    for id in roster.list_persons()? {
        let person = roster.load_person(&id)?;
        people.push(PersonOutput::new(&id, &person));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&people)?);
        return Ok(());
    }

    if people.is_empty() {
        println!("No people registered.");
        return Ok(());
    }

    for person in &people {
        let marker = if person.player { " (player)" } else { "" };
        println!(
            "{}  {} {}  [{}]{}",
            person.id, person.first_name, person.last_name, person.status, marker
        );
    }

    Ok(())
}

pub fn run_person_show(data_dir: String, id: String, json: bool) -> anyhow::Result<()> {
    let roster = init_roster(&data_dir)?;
    let person = roster.load_person(&id)?;
    let output = PersonOutput::new(&id, &person);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_person(&output);
    }

    Ok(())
}

pub fn run_person_remove(
    data_dir: String,
    id: String,
    non_interactive: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let roster = init_roster(&data_dir)?;
    roster.load_person(&id)?;

    let confirmed = confirm_action(&format!("Remove person '{}'?", id), yes, non_interactive)?;
    if !confirmed {
        println!("Cancelled.");
        return Ok(());
    }

    roster.remove_person(&id)?;
    println!("Removed person \"{}\"", id);

    Ok(())
}

pub fn run_person_update(
    data_dir: String,
    id: String,
    acting_as: String,
    password: Option<String>,
    fields: String,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let roster = init_roster(&data_dir)?;

    let update = PersonUpdate::from_value(&parse_fields(&fields)?)?;
    if update.is_empty() {
        return Err(Error::BadRequest("--fields must name at least one field".to_string()).into());
    }

    let password = password_or_prompt(password, false, non_interactive)?;
    let session = issue_session(&roster, &acting_as, &password)?;

    let person = roster.update_person(&id, &session, &update)?;
    print_person(&PersonOutput::new(&id, &person));

    Ok(())
}
