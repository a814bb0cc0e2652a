use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::app::App;

pub struct MusicCommand;

#[async_trait]
impl Command for MusicCommand {
    fn name(&self) -> &str {
        "/music"
    }

    fn description(&self) -> &str {
        "toggle background music"
    }

    async fn execute(&self, _args: &str, app: &mut App) -> CommandResult {
        app.toggle_music();
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_app;

    #[tokio::test]
    async fn toggles_on_and_off() {
        let mut app = test_app();
        MusicCommand.execute("", &mut app).await;
        assert!(app.music_on());
        MusicCommand.execute("", &mut app).await;
        assert!(!app.music_on());
    }
}
