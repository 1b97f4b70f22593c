use crate::error::{Error, Result};

/// Trims surrounding whitespace and rejects what is left if empty.
pub fn required_username(input: &str) -> Result<&str> {
    let username = input.trim();
    if username.is_empty() {
        return Err(Error::EmptyUsername);
    }
    Ok(username)
}
