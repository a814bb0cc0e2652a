//! Startup banner and session summary display.

use std::path::Path;

use crate::app::SessionStats;
use crate::consts::{AUTHOR, HOMEPAGE, REPO};

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub endpoint: &'a str,
    pub theme: &'a str,
    pub music: bool,
    pub music_file: Option<&'a Path>,
    pub preferences: &'a str,
}

pub fn print_banner(info: &BannerInfo) {
    let music = match (info.music, info.music_file) {
        (true, Some(file)) => format!("on ({})", file.display()),
        (true, None) => "on (no --music-file)".to_string(),
        (false, _) => "off".to_string(),
    };
    println!(
        r#"
   ▛▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▜
   ▌          P I X E L   C H A T          ▐
   ▌     8-bit talk, one tile at a time    ▐
   ▙▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▟

   version   {}
   by        {}
   home      {}
   repo      {}
   endpoint  {}
   theme     {}
   music     {}
   prefs     {}

   type /help for commands, /puzzle for a break
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        info.endpoint,
        info.theme,
        music,
        info.preferences,
    );
}

/// Print the session summary and farewell.
pub fn print_session_summary(stats: SessionStats) {
    if stats.messages_sent > 0 || stats.puzzles_solved > 0 {
        println!(
            "session: {} message(s) sent, {} puzzle(s) solved",
            stats.messages_sent, stats.puzzles_solved
        );
    }
    println!("GAME OVER. goodbye.");
}
