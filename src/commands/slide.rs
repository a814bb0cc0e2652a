use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::app::App;
use crate::puzzle::MoveOutcome;

pub struct SlideCommand;

#[async_trait]
impl Command for SlideCommand {
    fn name(&self) -> &str {
        "/slide"
    }

    fn aliases(&self) -> &[&str] {
        &["/s"]
    }

    fn usage(&self) -> &str {
        "<tile>"
    }

    fn description(&self) -> &str {
        "slide a numbered tile into the empty slot"
    }

    async fn execute(&self, args: &str, app: &mut App) -> CommandResult {
        let tile = match args.parse::<u8>() {
            Ok(t) => t,
            Err(_) => {
                eprintln!("  ✗ usage: /slide <tile number>");
                return CommandResult::Handled;
            }
        };

        match app.slide(tile) {
            Ok(MoveOutcome::Ignored) => println!("  tile {tile} is not next to the empty slot"),
            Ok(_) => {}
            Err(e) => eprintln!("  ✗ {e}"),
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_app;

    #[tokio::test]
    async fn slides_when_open() {
        let mut app = test_app();
        app.toggle_puzzle();
        let empty = app.board().empty_index();
        // Any orthogonal neighbour of the empty slot will do.
        let neighbour = if empty % 4 == 0 { empty + 1 } else { empty - 1 };
        let tile = app.board().tiles()[neighbour];

        SlideCommand.execute(&tile.to_string(), &mut app).await;
        assert_eq!(app.board().tiles()[empty], tile);
        assert_eq!(app.board().moves(), 1);
    }

    #[tokio::test]
    async fn garbage_is_handled() {
        let mut app = test_app();
        app.toggle_puzzle();
        assert_eq!(
            SlideCommand.execute("seven", &mut app).await,
            CommandResult::Handled
        );
        assert_eq!(app.board().moves(), 0);
    }
}
