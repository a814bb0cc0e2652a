use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::app::App;
use crate::theme::Theme;

pub struct SettingsCommand;

#[async_trait]
impl Command for SettingsCommand {
    fn name(&self) -> &str {
        "/settings"
    }

    fn description(&self) -> &str {
        "show current theme and music settings"
    }

    async fn execute(&self, _args: &str, app: &mut App) -> CommandResult {
        let music = if app.music_on() { "on" } else { "off" };
        println!("  theme   {} (available: {})", app.theme(), Theme::names());
        println!("  music   {music}");
        println!("  puzzle  {}", if app.puzzle_open() { "open" } else { "closed" });
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_app;

    #[test]
    fn metadata() {
        assert_eq!(SettingsCommand.name(), "/settings");
        assert!(!SettingsCommand.description().is_empty());
    }

    #[tokio::test]
    async fn is_handled() {
        assert_eq!(
            SettingsCommand.execute("", &mut test_app()).await,
            CommandResult::Handled
        );
    }
}
