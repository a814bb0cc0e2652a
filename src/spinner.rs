//! The typing indicator: three pixel dots pulsing in the theme's accent color
//! while a reply is pending.

use std::io::Write;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::theme::{Palette, RESET};

/// Lit dots per frame; the indicator always spans three cells.
const PULSE: &[usize] = &[0, 1, 2, 3, 2, 1];

const INTERVAL: Duration = Duration::from_millis(160);

const DOT: char = '▪';

/// One frame of the indicator: `label`, then three cells of which the first
/// `lit` hold a dot.
pub fn render_frame(label: &str, accent: &str, lit: usize) -> String {
    let dots: String = (0..3).map(|i| if i < lit { DOT } else { ' ' }).collect();
    format!("{label} {accent}{dots}{RESET}")
}

/// Pulses on stderr from a background task until [`TypingIndicator::stop`].
pub struct TypingIndicator {
    handle: JoinHandle<()>,
    cancel: watch::Sender<bool>,
}

impl TypingIndicator {
    /// Start pulsing after `label` (the bot's sender tag).
    pub fn start(label: &str, palette: &Palette) -> Self {
        let (cancel, mut cancelled) = watch::channel(false);
        let label = label.to_string();
        let accent = palette.accent;

        let handle = tokio::spawn(async move {
            for &lit in PULSE.iter().cycle() {
                // \x1b[2K clears the line, \r returns to its start
                eprint!("\x1b[2K\r{}", render_frame(&label, accent, lit));
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancelled.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self { handle, cancel }
    }

    /// Stop and clear the line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn frames_pulse_up_and_down() {
        let palette = Theme::Matrix.palette();
        assert_eq!(
            render_frame("BOT", palette.accent, 0),
            format!("BOT {}   {RESET}", palette.accent)
        );
        assert_eq!(
            render_frame("BOT", palette.accent, 2),
            format!("BOT {}▪▪ {RESET}", palette.accent)
        );
        assert_eq!(
            render_frame("BOT", palette.accent, 3),
            format!("BOT {}▪▪▪{RESET}", palette.accent)
        );
    }

    #[test]
    fn pulse_stays_within_three_cells() {
        assert!(PULSE.iter().all(|&lit| lit <= 3));
        assert!(PULSE.contains(&0) && PULSE.contains(&3));
    }

    #[tokio::test]
    async fn indicator_starts_and_stops() {
        let indicator = TypingIndicator::start("BOT", &Theme::Amber.palette());
        tokio::time::sleep(Duration::from_millis(200)).await;
        indicator.stop().await;
    }

    #[tokio::test]
    async fn immediate_stop() {
        let indicator = TypingIndicator::start("BOT", &Theme::Default.palette());
        indicator.stop().await;
    }
}
