//! Persistent user preferences, a key-value table in SQLite.
//!
//! Only two keys are used: the theme name and the background-music flag.
//! Both are read once at startup and written whenever the user changes them.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};

use crate::consts::{MUSIC_KEY, THEME_KEY};
use crate::theme::Theme;

/// Key-value preference store.
pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the store at `path`. Use `":memory:"` for an ephemeral
    /// session. Missing parent directories are created.
    pub fn open(path: &str) -> Result<Self> {
        if path != ":memory:"
            && let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let conn = Connection::open(path).context("failed to open preference database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create config table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let value = conn
            .query_row("SELECT value FROM config WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Upsert a value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    /// Saved theme. Missing means `default`; an unknown name also falls back
    /// to `default`.
    pub fn theme(&self) -> Result<Theme> {
        Ok(match self.get(THEME_KEY)? {
            Some(name) => Theme::from_name_or_default(&name),
            None => Theme::Default,
        })
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.set(THEME_KEY, theme.name())
    }

    /// Music is on only when the stored value is exactly `"true"`.
    pub fn music_enabled(&self) -> Result<bool> {
        Ok(self.get(MUSIC_KEY)?.as_deref() == Some("true"))
    }

    pub fn set_music_enabled(&self, enabled: bool) -> Result<()> {
        self.set(MUSIC_KEY, if enabled { "true" } else { "false" })
    }
}
