use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::View;
use crate::alert::Alert;
use crate::chat::{Message, Transcript};
use crate::puzzle::Board;
use crate::theme::Theme;

/// Everything a [`RecordingView`] saw, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Message { message: Message, first_block: usize },
    Typing(bool),
    Reset(Vec<Message>),
    Puzzle { open: bool, tiles: [u8; 16] },
    Board { tiles: [u8; 16], moves: u32 },
    Alert(Alert),
    AlertClosed,
    Theme(Theme),
    Music(bool),
    CopyLabel { block: usize, label: &'static str },
}

/// A view for tests. Clones share one event log.
#[derive(Clone, Default)]
pub struct RecordingView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Messages rendered so far, ignoring resets.
    pub fn messages(&self) -> Vec<Message> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Message { message, .. } => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl View for RecordingView {
    fn message_added(&mut self, message: &Message, first_block: usize) {
        self.record(ViewEvent::Message {
            message: message.clone(),
            first_block,
        });
    }

    async fn typing(&mut self, visible: bool) {
        self.record(ViewEvent::Typing(visible));
    }

    fn transcript_reset(&mut self, transcript: &Transcript) {
        self.record(ViewEvent::Reset(transcript.messages().to_vec()));
    }

    fn puzzle_toggled(&mut self, open: bool, board: &Board) {
        self.record(ViewEvent::Puzzle {
            open,
            tiles: *board.tiles(),
        });
    }

    fn board_changed(&mut self, board: &Board) {
        self.record(ViewEvent::Board {
            tiles: *board.tiles(),
            moves: board.moves(),
        });
    }

    fn alert_shown(&mut self, alert: &Alert) {
        self.record(ViewEvent::Alert(alert.clone()));
    }

    fn alert_closed(&mut self) {
        self.record(ViewEvent::AlertClosed);
    }

    fn theme_changed(&mut self, theme: Theme) {
        self.record(ViewEvent::Theme(theme));
    }

    fn music_changed(&mut self, on: bool) {
        self.record(ViewEvent::Music(on));
    }

    fn copy_label_changed(&mut self, block: usize, label: &'static str) {
        self.record(ViewEvent::CopyLabel { block, label });
    }
}
