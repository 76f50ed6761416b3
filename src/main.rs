use themed_drawer::app::{App, AppMessage};
use themed_drawer::config::AppConfig;
use themed_drawer::error::AppError;
use themed_drawer::logging::init_tracing;
use themed_drawer::terminal::{setup_panic_hook, TerminalManager};
use themed_drawer::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::path::PathBuf;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
Usage: themed-drawer [--config <path>] [--version] [--help]

Keys:
  m / Enter      open the drawer
  t / Space      toggle dark mode
  1-3, Up/Down   pick a screen while the drawer is open
  Esc / Left     close the drawer
  q / Ctrl+C     quit";

/// Command line flags.
#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<PathBuf>,
    version: bool,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, AppError> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => parsed.version = true,
            "--help" | "-h" => parsed.help = true,
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| AppError::Usage("--config needs a path".to_string()))?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            other => return Err(AppError::Usage(format!("unknown argument {:?}", other))),
        }
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = parse_args(std::env::args().skip(1))?;

    if args.version {
        println!("themed-drawer {}", VERSION);
        return Ok(());
    }
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = AppConfig::load(args.config_path.as_deref())?;
    let log_path = init_tracing(&config);
    tracing::info!(
        "themed-drawer {} starting (log={:?}, transition={}ms, mouse={})",
        VERSION,
        log_path,
        config.drawer_transition_ms,
        config.mouse
    );

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::with_config(&config);
    let mut term_manager = TerminalManager::new(config.mouse)?;

    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));

    term_manager.restore();

    match serde_json::to_string(&app.snapshot()) {
        Ok(state) => tracing::info!("Exiting with state {}", state),
        Err(e) => tracing::warn!("Failed to serialize final state: {}", e),
    }

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw only when state changed
        if app.needs_redraw {
            let snapshot = app.snapshot();
            let hits = &mut app.hit_registry;
            terminal.draw(|f| ui::render(f, &snapshot, hits))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_terminal_event(event),
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            return Ok(());
        }
    }
}
