use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::app::App;

pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit", "exit", "/exit"]
    }

    fn description(&self) -> &str {
        "exit pixelchat"
    }

    async fn execute(&self, _args: &str, _app: &mut App) -> CommandResult {
        CommandResult::Quit
    }
}
