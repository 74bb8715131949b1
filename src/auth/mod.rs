mod password;
mod session;

pub use password::CredentialHasher;
pub use session::{Session, issue_session};
