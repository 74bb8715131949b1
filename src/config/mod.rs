mod roster;

pub use roster::{CONFIG_FILE, RosterConfig};
