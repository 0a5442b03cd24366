//! The opaque identifier that partitions a client's history. It is
//! generated once and kept in a local file.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::Rng;

const ID_PREFIX: &str = "user_";
const ID_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default location of the identifier file, `<config dir>/chatbox/user_id`
pub fn default_user_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chatbox")
        .join("user_id")
}

/// A new identifier: `user_` followed by 9 random base-36 characters.
pub fn generate_user_id() -> String {
    let mut rng = rand::rng();
    let suffix = (0..ID_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect::<String>();
    format!("{ID_PREFIX}{suffix}")
}

/// Read the identifier stored at `path`, creating and persisting a
/// new one if there isn't one yet. The returned flag is `true` when
/// the identifier was just created.
pub fn load_or_create_user_id(path: &Path) -> Result<(String, bool)> {
    if let Ok(contents) = fs::read_to_string(path) {
        let user_id = contents.trim();
        if !user_id.is_empty() {
            return Ok((user_id.to_string(), false));
        }
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let user_id = generate_user_id();
    fs::write(path, &user_id)
        .with_context(|| format!("Failed to write user id to {}", path.display()))?;

    Ok((user_id, true))
}
