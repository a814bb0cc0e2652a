use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use pixelchat::app::App;
use pixelchat::audio::TerminalAudio;
use pixelchat::banner::{BannerInfo, print_banner, print_session_summary};
use pixelchat::client::http::HttpResponder;
use pixelchat::commands::{CommandRegistry, CommandResult};
use pixelchat::config::Config;
use pixelchat::consts::default_db_path;
use pixelchat::view::terminal::TerminalView;

#[derive(Parser)]
#[command(
    name = "pixelchat",
    version,
    about = "Retro pixel chat in your terminal, with a 15 puzzle on the side."
)]
struct Cli {
    /// Text-generation endpoint (queried with ?q=<message>&logic=...)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Preference database path (use :memory: for ephemeral)
    #[arg(short, long)]
    db: Option<String>,

    /// Track for background music
    #[arg(long)]
    music_file: Option<PathBuf>,

    /// Command that plays the music file
    #[arg(long)]
    music_player: Option<String>,

    /// Disable click sounds
    #[arg(long, default_value_t = false)]
    no_sound: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Send a single message, print the reply, and exit
    #[arg(short, long)]
    ask: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let db = match cli.db {
        Some(db) => db,
        None => default_db_path()?.to_string_lossy().into_owned(),
    };
    let config = Config::open(&db)?;

    let responder = HttpResponder::new(cli.endpoint);
    let endpoint = responder.endpoint().to_string();

    let audio = TerminalAudio::new(cli.music_player, cli.music_file.clone(), !cli.no_sound);
    let mut app = App::new(Box::new(responder), config, Box::new(TerminalView::new()))?
        .with_audio(Box::new(audio));

    // Single message mode
    if let Some(message) = cli.ask {
        app.send_message(&message).await;
        return Ok(());
    }

    let preferences = if db == ":memory:" { "ephemeral" } else { db.as_str() };
    print_banner(&BannerInfo {
        endpoint: &endpoint,
        theme: app.theme().name(),
        music: app.music_on(),
        music_file: cli.music_file.as_deref(),
        preferences,
    });
    app.start();

    let commands = CommandRegistry::new();

    // REPL on async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        app.expire_copy_flash(Instant::now());

        if app.alert().is_some() {
            print!("[y/N] ");
        } else {
            print!("\n> ");
        }
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        if app.alert().is_some() {
            if line.trim().eq_ignore_ascii_case("y") {
                app.confirm_alert();
            } else {
                app.dismiss_alert();
            }
            continue;
        }

        match commands.dispatch(&line, &mut app).await {
            CommandResult::Quit => break,
            CommandResult::Handled => {}
            CommandResult::NotACommand => {
                app.send_message(&line).await;
            }
        }
    }

    print_session_summary(app.stats());
    Ok(())
}
