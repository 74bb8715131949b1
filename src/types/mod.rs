mod models;
mod reference;
mod status;
mod update;

pub use models::*;
pub use reference::DestinationRef;
pub use status::Status;
pub use update::{ContainerUpdate, PersonUpdate, QueueUpdate};
