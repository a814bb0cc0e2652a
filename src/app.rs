//! The controller. Owns every piece of session state and is the only thing
//! that touches the [`View`].

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, error, warn};

use crate::alert::{Alert, PendingAction};
use crate::audio::{Audio, TerminalAudio};
use crate::chat::markup::{COPIED_LABEL, COPY_LABEL};
use crate::chat::{Message, Transcript};
use crate::client::{Answer, Responder};
use crate::clipboard::{Clipboard, CopyFlash, SystemClipboard};
use crate::config::Config;
use crate::consts::{CLEARED_MESSAGE, NETWORK_ERROR_MESSAGE, PROCESS_ERROR_MESSAGE};
use crate::puzzle::{Board, MoveOutcome};
use crate::theme::Theme;
use crate::view::View;

/// Counters shown in the goodbye summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub messages_sent: u64,
    pub puzzles_solved: u64,
}

pub struct App {
    transcript: Transcript,
    board: Board,
    puzzle_open: bool,
    theme: Theme,
    music_on: bool,
    alert: Option<Alert>,
    copy_flash: Option<CopyFlash>,
    stats: SessionStats,
    responder: Box<dyn Responder>,
    config: Config,
    audio: Box<dyn Audio>,
    /// Opened on first copy unless one was injected.
    clipboard: Option<Box<dyn Clipboard>>,
    view: Box<dyn View>,
}

impl App {
    /// Build with terminal audio (bell only). The system clipboard is opened
    /// on the first copy. Theme and music preferences are read from `config`
    /// here, once.
    pub fn new(
        responder: Box<dyn Responder>,
        config: Config,
        mut view: Box<dyn View>,
    ) -> Result<Self> {
        let theme = config.theme()?;
        let music_on = config.music_enabled()?;
        view.theme_loaded(theme);
        Ok(Self {
            transcript: Transcript::new(),
            board: Board::new(),
            puzzle_open: false,
            theme,
            music_on,
            alert: None,
            copy_flash: None,
            stats: SessionStats::default(),
            responder,
            config,
            audio: Box::new(TerminalAudio::new(None, None, true)),
            clipboard: None,
            view,
        })
    }

    pub fn with_audio(mut self, audio: Box<dyn Audio>) -> Self {
        self.audio = audio;
        self
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Resume background music if it was left on last session. Playback
    /// failure is logged and otherwise ignored.
    pub fn start(&mut self) {
        if self.music_on {
            if let Err(e) = self.audio.play_music() {
                warn!("music autoplay prevented: {e:#}");
            }
            self.view.music_changed(true);
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn puzzle_open(&self) -> bool {
        self.puzzle_open
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn music_on(&self) -> bool {
        self.music_on
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Feedback sound for a command.
    pub fn click(&mut self) {
        self.audio.click();
    }

    // --- Chat ---

    /// Send `text` to the responder and render the reply. Blank input is
    /// dropped without a message or a request. Returns whether anything
    /// was sent.
    pub async fn send_message(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        self.push_message(Message::user(text));
        self.stats.messages_sent += 1;

        self.transcript.show_typing();
        self.view.typing(true).await;

        let reply = match self.responder.ask(text).await {
            Ok(Answer::Text(reply)) => reply,
            Ok(Answer::Unprocessable) => PROCESS_ERROR_MESSAGE.to_string(),
            Err(e) => {
                error!("chat request failed: {e:#}");
                NETWORK_ERROR_MESSAGE.to_string()
            }
        };

        self.transcript.hide_typing();
        self.view.typing(false).await;
        self.push_message(Message::bot(reply));
        true
    }

    fn push_message(&mut self, message: Message) {
        let first_block = self.transcript.code_blocks().len() + 1;
        self.view.message_added(&message, first_block);
        self.transcript.push(message);
    }

    /// Ask for confirmation before wiping the transcript.
    pub fn request_clear_chat(&mut self) {
        self.show_alert(Alert::clear_chat());
    }

    pub fn clear_chat(&mut self) {
        self.transcript.reset(CLEARED_MESSAGE);
        self.copy_flash = None;
        self.view.transcript_reset(&self.transcript);
    }

    /// Copy code block `number` (1-based), or the latest one when `None`.
    ///
    /// A missing block is an error; a clipboard failure is only logged.
    pub fn copy_block(&mut self, number: Option<usize>) -> Result<()> {
        let blocks = self.transcript.code_blocks();
        if blocks.is_empty() {
            bail!("no code blocks in this chat");
        }
        let number = number.unwrap_or(blocks.len());
        let Some(block) = number.checked_sub(1).and_then(|i| blocks.get(i)) else {
            bail!("no code block #{number} (have {})", blocks.len());
        };

        let clipboard = self
            .clipboard
            .get_or_insert_with(|| Box::new(SystemClipboard::new()));
        if let Err(e) = clipboard.write_text(&block.text()) {
            warn!("failed to copy: {e:#}");
            return Ok(());
        }

        self.copy_flash = Some(CopyFlash::new(number, Instant::now()));
        self.view.copy_label_changed(number, COPIED_LABEL);
        Ok(())
    }

    /// Current copy-control label of block `number`.
    pub fn copy_label(&self, number: usize, now: Instant) -> &'static str {
        CopyFlash::label_for(self.copy_flash.as_ref(), number, now)
    }

    /// Revert the copy control once its flash has run out.
    pub fn expire_copy_flash(&mut self, now: Instant) {
        if let Some(flash) = self.copy_flash
            && self.copy_label(flash.block, now) == COPY_LABEL
        {
            self.copy_flash = None;
            self.view.copy_label_changed(flash.block, COPY_LABEL);
        }
    }

    /// Write the transcript to `path`: HTML for `.html`/`.htm`, plain text
    /// otherwise.
    pub fn export(&self, path: &Path) -> Result<()> {
        let is_html = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"));
        let body = if is_html {
            self.transcript.to_html()
        } else {
            self.transcript.to_plain()
        };
        std::fs::write(path, body)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    // --- Settings ---

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.config.set_theme(theme) {
            warn!("failed to save theme: {e:#}");
        }
        self.view.theme_changed(theme);
    }

    /// Pause if playing, otherwise start. The new state is saved either way,
    /// even when playback itself fails.
    pub fn toggle_music(&mut self) {
        if self.audio.is_playing() {
            self.audio.pause_music();
            self.music_on = false;
        } else {
            if let Err(e) = self.audio.play_music() {
                warn!("music playback failed: {e:#}");
            }
            self.music_on = true;
        }
        if let Err(e) = self.config.set_music_enabled(self.music_on) {
            warn!("failed to save music preference: {e:#}");
        }
        self.view.music_changed(self.music_on);
    }

    // --- Puzzle ---

    /// Open (with a fresh shuffle) or close the puzzle.
    pub fn toggle_puzzle(&mut self) {
        self.puzzle_open = !self.puzzle_open;
        if self.puzzle_open {
            self.board.shuffle();
        }
        self.view.puzzle_toggled(self.puzzle_open, &self.board);
    }

    pub fn shuffle_puzzle(&mut self) {
        self.board.shuffle();
        self.view.board_changed(&self.board);
    }

    /// Slide the tile at cell `index`. Illegal moves change nothing.
    pub fn move_tile(&mut self, index: usize) -> MoveOutcome {
        let outcome = self.board.move_tile(index);
        match outcome {
            MoveOutcome::Ignored => debug!(index, "illegal move ignored"),
            MoveOutcome::Moved => self.view.board_changed(&self.board),
            MoveOutcome::Solved { moves } => {
                self.view.board_changed(&self.board);
                self.stats.puzzles_solved += 1;
                self.show_alert(Alert::puzzle_solved(moves));
            }
        }
        outcome
    }

    /// Slide a tile by its number, as the player sees it.
    pub fn slide(&mut self, tile: u8) -> Result<MoveOutcome> {
        if !self.puzzle_open {
            bail!("the puzzle is not open (use /puzzle)");
        }
        if tile == 0 {
            bail!("no tile 0 on the board");
        }
        let index = self
            .board
            .position_of(tile)
            .with_context(|| format!("no tile {tile} on the board"))?;
        Ok(self.move_tile(index))
    }

    // --- Alerts ---

    /// Show `alert`, replacing any alert already pending.
    pub fn show_alert(&mut self, alert: Alert) {
        self.view.alert_shown(&alert);
        self.alert = Some(alert);
    }

    /// Close the pending alert and run its action.
    pub fn confirm_alert(&mut self) {
        let Some(alert) = self.alert.take() else {
            return;
        };
        self.view.alert_closed();
        match alert.action {
            Some(PendingAction::ClearChat) => self.clear_chat(),
            Some(PendingAction::ClosePuzzle) => {
                if self.puzzle_open {
                    self.toggle_puzzle();
                }
            }
            None => {}
        }
    }

    /// Close the pending alert without running its action.
    pub fn dismiss_alert(&mut self) {
        if self.alert.take().is_some() {
            self.view.alert_closed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::MockAudio;
    use crate::client::mock::MockResponder;
    use crate::clipboard::MemoryClipboard;
    use crate::view::recording::{RecordingView, ViewEvent};

    fn app_with(responder: MockResponder) -> (App, RecordingView) {
        let view = RecordingView::new();
        let app = App::new(
            Box::new(responder),
            Config::in_memory().unwrap(),
            Box::new(view.clone()),
        )
        .unwrap()
        .with_audio(Box::new(MockAudio::new()))
        .with_clipboard(Box::new(MemoryClipboard::new()));
        (app, view)
    }

    #[test]
    fn starts_with_defaults() {
        let (app, _) = app_with(MockResponder::new(vec![]));
        assert_eq!(app.theme(), Theme::Default);
        assert!(!app.music_on());
        assert!(!app.puzzle_open());
        assert!(app.board().is_solved());
        assert!(app.alert().is_none());
    }

    #[test]
    fn system_clipboard_is_not_opened_up_front() {
        let app = App::new(
            Box::new(MockResponder::new(vec![])),
            Config::in_memory().unwrap(),
            Box::new(RecordingView::new()),
        )
        .unwrap();
        assert!(app.clipboard.is_none());
    }

    #[test]
    fn reads_saved_preferences() {
        let config = Config::in_memory().unwrap();
        config.set_theme(Theme::Amber).unwrap();
        config.set_music_enabled(true).unwrap();
        let app = App::new(
            Box::new(MockResponder::new(vec![])),
            config,
            Box::new(RecordingView::new()),
        )
        .unwrap();
        assert_eq!(app.theme(), Theme::Amber);
        assert!(app.music_on());
    }

    #[test]
    fn start_resumes_music_and_survives_refusal() {
        let config = Config::in_memory().unwrap();
        config.set_music_enabled(true).unwrap();
        let view = RecordingView::new();
        let mut app = App::new(
            Box::new(MockResponder::new(vec![])),
            config,
            Box::new(view.clone()),
        )
        .unwrap()
        .with_audio(Box::new(MockAudio::refusing()));
        app.start();
        assert!(app.music_on());
        assert_eq!(view.events(), vec![ViewEvent::Music(true)]);
    }

    #[test]
    fn slide_requires_open_puzzle() {
        let (mut app, _) = app_with(MockResponder::new(vec![]));
        assert!(app.slide(15).is_err());
    }

    #[test]
    fn slide_rejects_unknown_tiles() {
        let (mut app, _) = app_with(MockResponder::new(vec![]));
        app.toggle_puzzle();
        assert!(app.slide(0).is_err());
        assert!(app.slide(16).is_err());
    }

    #[test]
    fn dismiss_keeps_state() {
        let (mut app, _) = app_with(MockResponder::new(vec![]));
        app.request_clear_chat();
        app.dismiss_alert();
        assert!(app.alert().is_none());
        assert!(app.transcript().messages().is_empty());
    }

    #[test]
    fn confirm_without_alert_is_noop() {
        let (mut app, view) = app_with(MockResponder::new(vec![]));
        app.confirm_alert();
        assert!(view.events().is_empty());
    }

    /// Puzzle open with tile 15 one slide away from home.
    fn app_one_move_from_solved() -> (App, RecordingView) {
        let (mut app, view) = app_with(MockResponder::new(vec![]));
        let mut tiles = crate::puzzle::SOLVED;
        tiles.swap(14, 15);
        app.board = Board::from_tiles(tiles).unwrap();
        app.puzzle_open = true;
        (app, view)
    }

    #[test]
    fn solving_counts_and_asks_to_close() {
        let (mut app, view) = app_one_move_from_solved();

        assert_eq!(app.slide(15).unwrap(), MoveOutcome::Solved { moves: 1 });

        assert_eq!(app.stats().puzzles_solved, 1);
        assert_eq!(app.alert(), Some(&Alert::puzzle_solved(1)));
        assert_eq!(
            app.alert().unwrap().message,
            "Congratulations! You solved it in 1 moves!"
        );
        assert_eq!(view.events().last(), Some(&ViewEvent::Alert(Alert::puzzle_solved(1))));

        app.confirm_alert();
        assert!(app.alert().is_none());
        assert!(!app.puzzle_open());
        assert!(matches!(
            view.events().last(),
            Some(ViewEvent::Puzzle { open: false, .. })
        ));
    }

    #[test]
    fn dismissing_solved_alert_keeps_puzzle_open() {
        let (mut app, _) = app_one_move_from_solved();
        app.slide(15).unwrap();

        app.dismiss_alert();
        assert!(app.alert().is_none());
        assert!(app.puzzle_open());
        assert!(app.board().is_solved());
        assert_eq!(app.stats().puzzles_solved, 1);
    }

    #[test]
    fn illegal_slide_changes_nothing() {
        let (mut app, view) = app_one_move_from_solved();
        view.clear();
        assert_eq!(app.slide(1).unwrap(), MoveOutcome::Ignored);
        assert!(view.events().is_empty());
        assert_eq!(app.stats().puzzles_solved, 0);
    }

    #[test]
    fn theme_and_music_are_saved_on_change() {
        use crate::consts::{MUSIC_KEY, THEME_KEY};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.db");
        let path = path.to_str().unwrap();

        let mut app = App::new(
            Box::new(MockResponder::new(vec![])),
            Config::open(path).unwrap(),
            Box::new(RecordingView::new()),
        )
        .unwrap()
        .with_audio(Box::new(MockAudio::new()));

        app.set_theme(Theme::Matrix);
        app.toggle_music();

        let saved = Config::open(path).unwrap();
        assert_eq!(saved.get(THEME_KEY).unwrap().as_deref(), Some("matrix"));
        assert_eq!(saved.get(MUSIC_KEY).unwrap().as_deref(), Some("true"));

        app.toggle_music();
        assert_eq!(saved.get(MUSIC_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn music_state_is_saved_even_when_playback_fails() {
        let config = Config::in_memory().unwrap();
        let mut app = App::new(
            Box::new(MockResponder::new(vec![])),
            config,
            Box::new(RecordingView::new()),
        )
        .unwrap()
        .with_audio(Box::new(MockAudio::refusing()));

        app.toggle_music();
        assert!(app.music_on());
        assert!(app.config.music_enabled().unwrap());
    }

    #[test]
    fn saved_preferences_reach_a_new_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.db");
        let path = path.to_str().unwrap();

        {
            let mut app = App::new(
                Box::new(MockResponder::new(vec![])),
                Config::open(path).unwrap(),
                Box::new(RecordingView::new()),
            )
            .unwrap()
            .with_audio(Box::new(MockAudio::new()));
            app.set_theme(Theme::Amber);
        }

        let app = App::new(
            Box::new(MockResponder::new(vec![])),
            Config::open(path).unwrap(),
            Box::new(RecordingView::new()),
        )
        .unwrap();
        assert_eq!(app.theme(), Theme::Amber);
        assert!(!app.music_on());
    }

    #[test]
    fn copy_without_blocks_errors() {
        let (mut app, _) = app_with(MockResponder::new(vec![]));
        assert!(app.copy_block(None).is_err());
    }
}
