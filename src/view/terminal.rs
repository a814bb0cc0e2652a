use async_trait::async_trait;

use super::View;
use crate::alert::Alert;
use crate::chat::markup::{COPY_LABEL, Segment, parse};
use crate::chat::{Message, Sender, Transcript};
use crate::puzzle::Board;
use crate::spinner::TypingIndicator;
use crate::theme::{Palette, RESET, Theme};

/// Renders to stdout; the typing indicator spins on stderr.
pub struct TerminalView {
    palette: Palette,
    typing: Option<TypingIndicator>,
}

impl TerminalView {
    /// Starts on the default palette until the controller hands over the
    /// saved theme.
    pub fn new() -> Self {
        Self {
            palette: Theme::default().palette(),
            typing: None,
        }
    }

    fn sender_label(&self, sender: Sender) -> String {
        let color = match sender {
            Sender::User => self.palette.user,
            Sender::Bot => self.palette.bot,
        };
        format!("{color}{:>4}{RESET}", sender.as_str().to_uppercase())
    }
}

/// Lay out a message for the terminal: text as-is, code blocks boxed and
/// numbered with their copy control.
pub fn render_message(message: &Message, first_block: usize, palette: &Palette) -> String {
    let mut out = String::new();
    let mut block = first_block;

    for segment in parse(&message.content) {
        match segment {
            Segment::Text(text) => out.push_str(&text),
            Segment::Code(code) => {
                let language = code.language().unwrap_or("code");
                out.push_str(&format!(
                    "\n{accent}┌─ #{block} {language} ─ [{COPY_LABEL}]{RESET}\n",
                    accent = palette.accent
                ));
                for line in code.text().lines() {
                    out.push_str(&format!(
                        "{accent}│{RESET} {code}{line}{RESET}\n",
                        accent = palette.accent,
                        code = palette.code
                    ));
                }
                out.push_str(&format!("{}└─{RESET}\n", palette.accent));
                block += 1;
            }
        }
    }
    out
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl View for TerminalView {
    fn message_added(&mut self, message: &Message, first_block: usize) {
        let body = render_message(message, first_block, &self.palette);
        println!("{} │ {}", self.sender_label(message.sender), body.trim_end());
    }

    async fn typing(&mut self, visible: bool) {
        if let Some(indicator) = self.typing.take() {
            indicator.stop().await;
        }
        if visible {
            let label = self.sender_label(Sender::Bot);
            self.typing = Some(TypingIndicator::start(&label, &self.palette));
        }
    }

    fn transcript_reset(&mut self, transcript: &Transcript) {
        println!("{}── chat cleared ──{RESET}", self.palette.accent);
        for (i, message) in transcript.messages().iter().enumerate() {
            self.message_added(message, transcript.code_blocks_before(i) + 1);
        }
    }

    fn puzzle_toggled(&mut self, open: bool, board: &Board) {
        if open {
            println!("{}── 15 PUZZLE ──{RESET}", self.palette.accent);
            println!("slide a tile with /slide <number>, reshuffle with /shuffle");
            self.board_changed(board);
        } else {
            println!("{}── puzzle closed ──{RESET}", self.palette.accent);
        }
    }

    fn board_changed(&mut self, board: &Board) {
        print!("{board}");
        println!("{}MOVES: {}{RESET}", self.palette.accent, board.moves());
    }

    fn alert_shown(&mut self, alert: &Alert) {
        let width = alert.title.len().max(alert.message.len()) + 2;
        let bar = "═".repeat(width);
        println!("{}╔{bar}╗", self.palette.accent);
        println!("║ {:<w$} ║", alert.title, w = width - 2);
        println!("║ {:<w$} ║", alert.message, w = width - 2);
        println!("╚{bar}╝{RESET}");
    }

    fn alert_closed(&mut self) {}

    fn theme_loaded(&mut self, theme: Theme) {
        self.palette = theme.palette();
    }

    fn theme_changed(&mut self, theme: Theme) {
        self.theme_loaded(theme);
        println!("{}theme: {theme}{RESET}", self.palette.accent);
    }

    fn music_changed(&mut self, on: bool) {
        let state = if on { "♪ on" } else { "off" };
        println!("{}music: {state}{RESET}", self.palette.accent);
    }

    fn copy_label_changed(&mut self, block: usize, label: &'static str) {
        // Scrollback is never redrawn; only the flash is printed.
        if label != COPY_LABEL {
            println!("{}[#{block} {label}]{RESET}", self.palette.accent);
        }
    }
}
