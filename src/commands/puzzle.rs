use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::app::App;

pub struct PuzzleCommand;

#[async_trait]
impl Command for PuzzleCommand {
    fn name(&self) -> &str {
        "/puzzle"
    }

    fn aliases(&self) -> &[&str] {
        &["/game"]
    }

    fn description(&self) -> &str {
        "open (and shuffle) or close the 15 puzzle"
    }

    async fn execute(&self, _args: &str, app: &mut App) -> CommandResult {
        app.toggle_puzzle();
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_app;

    #[tokio::test]
    async fn opens_then_closes() {
        let mut app = test_app();
        PuzzleCommand.execute("", &mut app).await;
        assert!(app.puzzle_open());
        assert_eq!(app.board().moves(), 0);
        PuzzleCommand.execute("", &mut app).await;
        assert!(!app.puzzle_open());
    }
}
