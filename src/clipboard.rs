//! Clipboard access for the copy control.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow, bail};

use crate::chat::markup::{COPIED_LABEL, COPY_LABEL};

/// How long the copy control reads `COPIED!` after a successful copy.
pub const FLASH: Duration = Duration::from_secs(1);

pub trait Clipboard: Send {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard. Kept open for the whole session so Wayland does
/// not drop the selection as soon as the handle goes away.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            inner: arboard::Clipboard::new().ok(),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| anyhow!("no clipboard available"))?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}

/// In-process clipboard for tests and headless sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    deny: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write.
    pub fn denied() -> Self {
        Self {
            deny: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.deny {
            bail!("clipboard write denied");
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// Marks which code block was just copied and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFlash {
    pub block: usize,
    pub at: Instant,
}

impl CopyFlash {
    pub fn new(block: usize, at: Instant) -> Self {
        Self { block, at }
    }

    /// Label for `block` at time `now`.
    pub fn label_for(flash: Option<&CopyFlash>, block: usize, now: Instant) -> &'static str {
        match flash {
            Some(f) if f.block == block && now.saturating_duration_since(f.at) < FLASH => {
                COPIED_LABEL
            }
            _ => COPY_LABEL,
        }
    }
}
