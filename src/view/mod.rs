//! Rendering surface. The controller only talks to a [`View`], so chat and
//! puzzle logic run the same against a terminal or a test recorder.

pub mod recording;
pub mod terminal;

use async_trait::async_trait;

use crate::alert::Alert;
use crate::chat::{Message, Transcript};
use crate::puzzle::Board;
use crate::theme::Theme;

#[async_trait]
pub trait View: Send {
    /// A message joined the transcript. Its code blocks are numbered from
    /// `first_block` (1-based, across the whole transcript).
    fn message_added(&mut self, message: &Message, first_block: usize);

    /// Show or hide the typing indicator.
    async fn typing(&mut self, visible: bool);

    /// The transcript was replaced wholesale.
    fn transcript_reset(&mut self, transcript: &Transcript);

    fn puzzle_toggled(&mut self, open: bool, board: &Board);

    fn board_changed(&mut self, board: &Board);

    fn alert_shown(&mut self, alert: &Alert);

    fn alert_closed(&mut self);

    /// The saved theme was read at startup. Adopt it without announcing it.
    fn theme_loaded(&mut self, _theme: Theme) {}

    fn theme_changed(&mut self, theme: Theme);

    fn music_changed(&mut self, on: bool);

    /// The copy control of code block `block` now reads `label`.
    fn copy_label_changed(&mut self, block: usize, label: &'static str);
}
