//! Button clicks and background music. All of it is best effort.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, bail};
use tokio::process::{Child, Command};

use crate::consts::DEFAULT_MUSIC_PLAYER;

pub trait Audio: Send {
    /// Short feedback sound for a command.
    fn click(&mut self);

    /// Start the background track. A no-op when already playing.
    fn play_music(&mut self) -> Result<()>;

    fn pause_music(&mut self);

    fn is_playing(&mut self) -> bool;
}

/// Audio for a terminal session: the bell for clicks, an external player
/// process for music.
pub struct TerminalAudio {
    sound_effects: bool,
    player: String,
    music_file: Option<PathBuf>,
    child: Option<Child>,
}

impl TerminalAudio {
    pub fn new(player: Option<String>, music_file: Option<PathBuf>, sound_effects: bool) -> Self {
        Self {
            sound_effects,
            player: player.unwrap_or_else(|| DEFAULT_MUSIC_PLAYER.to_string()),
            music_file,
            child: None,
        }
    }
}

impl Audio for TerminalAudio {
    fn click(&mut self) {
        if self.sound_effects {
            eprint!("\x07");
        }
    }

    fn play_music(&mut self) -> Result<()> {
        if self.is_playing() {
            return Ok(());
        }
        let Some(file) = &self.music_file else {
            bail!("no music file configured (use --music-file)");
        };
        let child = Command::new(&self.player)
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to start music player `{}`", self.player))?;
        self.child = Some(child);
        Ok(())
    }

    fn pause_music(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.start_kill();
        }
    }

    fn is_playing(&mut self) -> bool {
        match self.child.as_mut().map(|c| c.try_wait()) {
            Some(Ok(None)) => true,
            Some(_) => {
                self.child = None;
                false
            }
            None => false,
        }
    }
}

/// Audio double for tests: counts clicks and pretends to play. Clones share
/// state, so a test can keep a handle after boxing one into the app.
#[derive(Debug, Clone, Default)]
pub struct MockAudio {
    state: Arc<Mutex<MockAudioState>>,
}

#[derive(Debug, Default)]
struct MockAudioState {
    clicks: usize,
    playing: bool,
    refuse: bool,
}

impl MockAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// A double whose playback always fails, like a blocked autoplay.
    pub fn refusing() -> Self {
        let audio = Self::default();
        audio.state.lock().unwrap().refuse = true;
        audio
    }

    pub fn clicks(&self) -> usize {
        self.state.lock().unwrap().clicks
    }

    pub fn playing(&self) -> bool {
        self.state.lock().unwrap().playing
    }
}

impl Audio for MockAudio {
    fn click(&mut self) {
        self.state.lock().unwrap().clicks += 1;
    }

    fn play_music(&mut self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.refuse {
            bail!("playback blocked");
        }
        state.playing = true;
        Ok(())
    }

    fn pause_music(&mut self) {
        self.state.lock().unwrap().playing = false;
    }

    fn is_playing(&mut self) -> bool {
        self.state.lock().unwrap().playing
    }
}
