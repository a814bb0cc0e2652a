//! Project-wide constants.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Text-generation endpoint queried once per chat message.
pub const DEFAULT_ENDPOINT: &str = "https://mannoffc-x.hf.space/ai/logic";

/// Fixed `logic` query parameter sent with every request. Asks the model to
/// fence every code sample with triple backticks.
pub const LOGIC_PROMPT: &str = "disetiap start code dan end code harus ada ```";

/// Bot reply when the API answers with anything but a usable result.
pub const PROCESS_ERROR_MESSAGE: &str = "ERROR: COULDN'T PROCESS REQUEST";

/// Bot reply when the request itself fails.
pub const NETWORK_ERROR_MESSAGE: &str = "NETWORK ERROR - TRY AGAIN";

/// Bot greeting that replaces the transcript after `/clear`.
pub const CLEARED_MESSAGE: &str = "Chat cleared. How can I help you?";

/// Preference key holding the theme name.
pub const THEME_KEY: &str = "pixelChatTheme";

/// Preference key holding `"true"`/`"false"` for background music.
pub const MUSIC_KEY: &str = "pixelChatMusic";

/// Default external player used for background music.
pub const DEFAULT_MUSIC_PLAYER: &str = "aplay";

/// Default preference database path: `~/.pixelchat/pixelchat.db`.
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".pixelchat").join("pixelchat.db"))
}
