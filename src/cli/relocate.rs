use crate::types::DestinationRef;

use super::init_roster;

pub fn run_move(
    data_dir: String,
    from: String,
    to: String,
    players: Vec<String>,
) -> anyhow::Result<()> {
    let source: DestinationRef = from.parse()?;
    let target: DestinationRef = to.parse()?;

    let roster = init_roster(&data_dir)?;
    roster.move_players(&source, &target, &players)?;

    println!(
        "Moved {} player(s) from {} to {}",
        players.len(),
        source,
        target
    );

    Ok(())
}
