use async_trait::async_trait;
use std::path::Path;

use super::{Command, CommandResult};
use crate::app::App;

pub struct ExportCommand;

#[async_trait]
impl Command for ExportCommand {
    fn name(&self) -> &str {
        "/export"
    }

    fn usage(&self) -> &str {
        "<path>"
    }

    fn description(&self) -> &str {
        "save the chat as HTML (.html) or plain text"
    }

    async fn execute(&self, args: &str, app: &mut App) -> CommandResult {
        if args.is_empty() {
            eprintln!("  ✗ usage: /export <path>");
            return CommandResult::Handled;
        }
        match app.export(Path::new(args)) {
            Ok(()) => println!("  ✓ chat saved to {args}"),
            Err(e) => eprintln!("  ✗ {e:#}"),
        }
        CommandResult::Handled
    }
}
