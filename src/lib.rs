//! # Courtside
//!
//! Keeps a roster of people, a set of courts and a waiting queue on disk, and
//! moves players between courts and the queue without breaking capacity or
//! "one place at a time". Usable as a library or through the `courtside` CLI.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! courtside = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use courtside::config::RosterConfig;
//! use courtside::roster::Roster;
//! use courtside::types::{Court, DestinationRef};
//!
//! let config = RosterConfig::load("./data")?;
//! let roster = Roster::open(&config);
//! roster.initialize(config.players_per_court)?;
//!
//! let id = roster.create_court(&Court::new("Center"))?;
//! roster.move_players(
//!     &DestinationRef::Queue,
//!     &DestinationRef::Court(id),
//!     &["alice".to_string()],
//! )?;
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes CLI module. Disable with `default-features = false`.

pub mod auth;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod roster;
pub mod store;
pub mod types;
