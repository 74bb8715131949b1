use crate::types::{Queue, QueueUpdate};

use super::{init_roster, parse_fields};

fn print_queue(queue: &Queue) {
    println!(
        "{}  ({} waiting)",
        queue.container.name,
        queue.container.players.len()
    );
    for (position, player) in queue.container.players.iter().enumerate() {
        println!("  {}. {player}", position + 1);
    }
}

pub fn run_queue_show(data_dir: String, json: bool) -> anyhow::Result<()> {
    let roster = init_roster(&data_dir)?;
    let queue = roster.load_queue()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&queue)?);
    } else {
        print_queue(&queue);
    }

    Ok(())
}

pub fn run_queue_update(data_dir: String, fields: String) -> anyhow::Result<()> {
    let roster = init_roster(&data_dir)?;

    let update = QueueUpdate::from_value(&parse_fields(&fields)?)?;

    let queue = roster.update_queue(&update)?;
    print_queue(&queue);

    Ok(())
}
