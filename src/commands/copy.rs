use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::app::App;

pub struct CopyCommand;

#[async_trait]
impl Command for CopyCommand {
    fn name(&self) -> &str {
        "/copy"
    }

    fn usage(&self) -> &str {
        "[n]"
    }

    fn description(&self) -> &str {
        "copy code block n (default: the latest) to the clipboard"
    }

    async fn execute(&self, args: &str, app: &mut App) -> CommandResult {
        let number = if args.is_empty() {
            None
        } else {
            match args.trim_start_matches('#').parse::<usize>() {
                Ok(n) => Some(n),
                Err(_) => {
                    eprintln!("  ✗ not a block number: {args}");
                    return CommandResult::Handled;
                }
            }
        };

        if let Err(e) = app.copy_block(number) {
            eprintln!("  ✗ {e}");
        }
        CommandResult::Handled
    }
}
