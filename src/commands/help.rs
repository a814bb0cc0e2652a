use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::app::App;

/// Listed so `/help` shows itself; the registry renders the actual text.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show this help"
    }

    async fn execute(&self, _args: &str, _app: &mut App) -> CommandResult {
        CommandResult::Handled
    }
}
