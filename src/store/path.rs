use crate::error::{Error, Result};

const MAX_KEY_LEN: usize = 255;

/// Checks that a record key can be used as a single file name.
pub fn validate_key(kind: &str, key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(Error::BadRequest(format!("{kind} id cannot be empty")));
    }

    if key.len() > MAX_KEY_LEN {
        return Err(Error::BadRequest(format!(
            "{kind} id cannot exceed {MAX_KEY_LEN} characters"
        )));
    }

    if key == "." || key == ".." || key.starts_with('.') {
        return Err(Error::BadRequest(format!(
            "{kind} id cannot start with a period"
        )));
    }

    const INVALID_CHARS: &[char] = &['/', '\\', '\0', '\n', '\r'];
    if key.chars().any(|c| INVALID_CHARS.contains(&c)) {
        return Err(Error::BadRequest(format!(
            "{kind} id contains invalid characters"
        )));
    }

    Ok(())
}
