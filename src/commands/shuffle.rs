use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::app::App;

pub struct ShuffleCommand;

#[async_trait]
impl Command for ShuffleCommand {
    fn name(&self) -> &str {
        "/shuffle"
    }

    fn description(&self) -> &str {
        "reshuffle the puzzle and reset the move counter"
    }

    async fn execute(&self, _args: &str, app: &mut App) -> CommandResult {
        if !app.puzzle_open() {
            eprintln!("  ✗ the puzzle is not open (use /puzzle)");
            return CommandResult::Handled;
        }
        app.shuffle_puzzle();
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_app;

    #[tokio::test]
    async fn needs_open_puzzle() {
        let mut app = test_app();
        ShuffleCommand.execute("", &mut app).await;
        assert!(app.board().is_solved());
    }
}
