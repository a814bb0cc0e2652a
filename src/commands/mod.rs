//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias resolution,
//! argument splitting, and help generation. Anything that is not a command
//! is chat input.

mod clear;
mod copy;
mod export;
mod help;
mod music;
mod puzzle;
mod quit;
mod settings;
mod shuffle;
mod slide;
mod theme;

use async_trait::async_trait;
use std::sync::Arc;

use crate::app::App;

/// What the REPL should do after a command runs.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Not a command; send the input as a chat message.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Exit the REPL.
    Quit,
}

/// A REPL command.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/theme"`.
    fn name(&self) -> &str;

    /// Alternative names, e.g. `&["/h", "/?"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Argument synopsis for `/help`, e.g. `"<tile>"`.
    fn usage(&self) -> &str {
        ""
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run with everything after the command word (trimmed, may be empty).
    async fn execute(&self, args: &str, app: &mut App) -> CommandResult;
}

/// Holds registered commands.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands.
    pub fn new() -> Self {
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(help::HelpCommand),
            Arc::new(settings::SettingsCommand),
            Arc::new(theme::ThemeCommand),
            Arc::new(music::MusicCommand),
            Arc::new(clear::ClearCommand),
            Arc::new(copy::CopyCommand),
            Arc::new(export::ExportCommand),
            Arc::new(puzzle::PuzzleCommand),
            Arc::new(shuffle::ShuffleCommand),
            Arc::new(slide::SlideCommand),
            Arc::new(quit::QuitCommand),
        ];
        Self { commands }
    }

    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    /// Every recognised command clicks.
    pub async fn dispatch(&self, input: &str, app: &mut App) -> CommandResult {
        let input = input.trim();
        let (cmd, args) = input
            .split_once(char::is_whitespace)
            .map(|(c, a)| (c, a.trim()))
            .unwrap_or((input, ""));

        for command in &self.commands {
            if cmd == command.name() || command.aliases().contains(&cmd) {
                app.click();
                // /help needs the registry to list all commands
                if command.name() == "/help" {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                return command.execute(args, app).await;
            }
        }

        if cmd.starts_with('/') {
            println!("unknown command: {cmd}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// Generate help text from all registered commands.
    pub fn help_text(&self) -> String {
        let entries: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| (format_label(c.name(), c.usage(), c.aliases()), c.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// All registered names and aliases (for duplicate detection).
    pub fn all_triggers(&self) -> Vec<&str> {
        let mut triggers = Vec::new();
        for cmd in &self.commands {
            triggers.push(cmd.name());
            triggers.extend_from_slice(cmd.aliases());
        }
        triggers
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn format_label(name: &str, usage: &str, aliases: &[&str]) -> String {
    let mut label = name.to_string();
    if !usage.is_empty() {
        label.push(' ');
        label.push_str(usage);
    }
    if !aliases.is_empty() {
        label.push_str(&format!(" ({})", aliases.join(", ")));
    }
    label
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::audio::MockAudio;
    use crate::client::mock::MockResponder;
    use crate::clipboard::MemoryClipboard;
    use crate::config::Config;
    use crate::view::recording::RecordingView;

    pub(crate) fn test_app() -> App {
        test_app_with(MockResponder::new(vec![]))
    }

    pub(crate) fn test_app_with(responder: MockResponder) -> App {
        App::new(
            Box::new(responder),
            Config::in_memory().unwrap(),
            Box::new(RecordingView::new()),
        )
        .unwrap()
        .with_audio(Box::new(MockAudio::new()))
        .with_clipboard(Box::new(MemoryClipboard::new()))
    }

    #[test]
    fn all_builtins_registered() {
        let reg = CommandRegistry::new();
        let names = reg.names();
        for name in [
            "/help", "/settings", "/theme", "/music", "/clear", "/copy", "/export", "/puzzle",
            "/shuffle", "/slide", "/quit",
        ] {
            assert!(names.contains(&name), "missing: {name}");
        }
    }

    #[test]
    fn no_duplicate_triggers() {
        let reg = CommandRegistry::new();
        let triggers = reg.all_triggers();
        let mut seen = Vec::new();
        for t in &triggers {
            assert!(!seen.contains(t), "duplicate trigger: {t}");
            seen.push(t);
        }
    }

    #[test]
    fn help_text_includes_all_commands() {
        let reg = CommandRegistry::new();
        let text = reg.help_text();
        for name in reg.names() {
            assert!(text.contains(name), "help missing: {name}");
        }
        assert!(text.contains("/slide <tile>"));
    }

    #[tokio::test]
    async fn unknown_slash_command_is_handled() {
        let reg = CommandRegistry::new();
        let mut app = test_app();
        assert_eq!(
            reg.dispatch("/foobar", &mut app).await,
            CommandResult::Handled
        );
    }

    #[tokio::test]
    async fn chat_text_passes_through() {
        let reg = CommandRegistry::new();
        let mut app = test_app();
        assert_eq!(
            reg.dispatch("hello world", &mut app).await,
            CommandResult::NotACommand
        );
    }

    #[tokio::test]
    async fn commands_click() {
        let reg = CommandRegistry::new();
        let audio = MockAudio::new();
        let mut app = test_app().with_audio(Box::new(audio.clone()));
        reg.dispatch("/help", &mut app).await;
        reg.dispatch("/settings", &mut app).await;
        reg.dispatch("hello", &mut app).await;
        assert_eq!(audio.clicks(), 2);
    }

    #[tokio::test]
    async fn arguments_are_split_off() {
        let reg = CommandRegistry::new();
        let mut app = test_app();
        reg.dispatch("/theme   matrix  ", &mut app).await;
        assert_eq!(app.theme(), crate::theme::Theme::Matrix);
    }

    #[tokio::test]
    async fn extra_command_works() {
        struct PingCommand;

        #[async_trait]
        impl Command for PingCommand {
            fn name(&self) -> &str {
                "/ping"
            }
            fn description(&self) -> &str {
                "pong"
            }
            async fn execute(&self, _args: &str, _app: &mut App) -> CommandResult {
                CommandResult::Handled
            }
        }

        let mut reg = CommandRegistry::new();
        reg.register(Arc::new(PingCommand));
        let mut app = test_app();
        assert_eq!(reg.dispatch("/ping", &mut app).await, CommandResult::Handled);
        assert!(reg.help_text().contains("/ping"));
    }

    #[test]
    fn format_label_variants() {
        assert_eq!(format_label("/music", "", &[]), "/music");
        assert_eq!(format_label("/help", "", &["/h", "/?"]), "/help (/h, /?)");
        assert_eq!(format_label("/slide", "<tile>", &["/s"]), "/slide <tile> (/s)");
    }
}
