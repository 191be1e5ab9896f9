//! src/main.rs
//! Terminal entry point: owns the terminal, the event loop and the state.

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event as TerminalEvent, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::{signal, sync::Notify};
use tracing::{error, info, warn};

use rowlab_core::{
    Config, Logger,
    controller::{actions::Action, dispatcher, keymap},
    model::app_state::AppState,
    view::ui::UIRenderer,
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Auto-dismiss granularity for notifications.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _log_guard = Logger::init().context("Failed to initialize logging")?;
    setup_panic_handler();

    let initial_path = std::env::args_os().nth(1).map(PathBuf::from);

    let app = App::new(initial_path)
        .await
        .context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    state: AppState,
    renderer: UIRenderer,
    shutdown: Arc<Notify>,
}

impl App {
    async fn new(initial_path: Option<PathBuf>) -> Result<Self> {
        info!("Starting rowlab TUI");

        let terminal: AppTerminal = setup_terminal().context("Failed to initialize terminal")?;

        let config: Config = Config::load().await.unwrap_or_else(|e| {
            info!("Failed to load config, using defaults: {e}");
            Config::default()
        });

        let mut state = AppState::new(config);
        if let Some(path) = initial_path {
            if let Err(e) = state.open_file(path).await {
                warn!("Initial load failed: {e}");
                state.ui.show_error(format!("Failed to load file: {e}"));
            }
        }

        Ok(Self {
            terminal,
            state,
            renderer: UIRenderer::new(),
            shutdown: Arc::new(Notify::new()),
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();
        info!("Starting event loop");

        let mut event_stream: EventStream = EventStream::new();
        let mut tick = tokio::time::interval(TICK_INTERVAL);

        loop {
            self.render()?;

            tokio::select! {
                // Shutdown signal
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                // Notification auto-dismiss
                _ = tick.tick() => {
                    if !dispatcher::dispatch(&mut self.state, Action::Tick).await {
                        break;
                    }
                }

                // Terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(terminal_event)) = maybe_event {
                        if let Some(action) = Self::map_terminal_event(&self.state, terminal_event) {
                            if !dispatcher::dispatch(&mut self.state, action).await {
                                break;
                            }
                        }
                    }
                }
            }
        }

        info!("Event loop terminated cleanly");
        Ok(())
    }

    fn map_terminal_event(state: &AppState, event: TerminalEvent) -> Option<Action> {
        match event {
            TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => {
                keymap::map_key(key, state.ui.overlay)
            }
            TerminalEvent::Resize(width, height) => Some(Action::Resize(width, height)),
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if self.state.ui.needs_redraw() {
            self.terminal
                .draw(|frame: &mut Frame<'_>| {
                    self.renderer.render(frame, &self.state);
                })
                .context("Failed to draw terminal")?;

            self.state.ui.clear_redraw();
        }

        Ok(())
    }

    fn setup_shutdown_handler(&self) {
        let shutdown: Arc<Notify> = self.shutdown.clone();

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                let mut sigterm =
                    signal(SignalKind::terminate()).expect("Failed to create SIGTERM handler");

                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {e}");
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {e}");
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {panic_info}");
        original_hook(panic_info);
    }));
}
