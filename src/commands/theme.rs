use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::app::App;
use crate::theme::Theme;

pub struct ThemeCommand;

#[async_trait]
impl Command for ThemeCommand {
    fn name(&self) -> &str {
        "/theme"
    }

    fn usage(&self) -> &str {
        "[name]"
    }

    fn description(&self) -> &str {
        "show or switch the color theme"
    }

    async fn execute(&self, args: &str, app: &mut App) -> CommandResult {
        if args.is_empty() {
            for theme in Theme::ALL {
                let marker = if theme == app.theme() { " ← current" } else { "" };
                println!("  {theme}{marker}");
            }
            return CommandResult::Handled;
        }

        match args.parse::<Theme>() {
            Ok(theme) => app.set_theme(theme),
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
    async fn switches_theme() {
        let mut app = test_app();
        ThemeCommand.execute("amber", &mut app).await;
        assert_eq!(app.theme(), Theme::Amber);
    }

    #[tokio::test]
    async fn unknown_theme_keeps_current() {
        let mut app = test_app();
        ThemeCommand.execute("dark", &mut app).await;
        ThemeCommand.execute("plaid", &mut app).await;
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[tokio::test]
    async fn listing_is_handled() {
        let mut app = test_app();
        assert_eq!(
            ThemeCommand.execute("", &mut app).await,
            CommandResult::Handled
        );
        assert_eq!(app.theme(), Theme::Default);
    }
}
