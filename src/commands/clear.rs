use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::app::App;

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "/clear"
    }

    fn description(&self) -> &str {
        "clear the chat history (asks first)"
    }

    async fn execute(&self, _args: &str, app: &mut App) -> CommandResult {
        app.request_clear_chat();
        CommandResult::Handled
    }
}
