//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::dashboard::{SPLASH_DURATION, UI_POLL_INTERVAL_MS};
use crate::quote_source::QuoteSource;
use crate::scheduler::RefreshConfig;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the quote.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Source handed to the dashboard when it activates.
    source: Arc<dyn QuoteSource>,

    /// Refresh timing for the dashboard.
    refresh_config: RefreshConfig,

    /// Whether to enable background colors
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        source: Arc<dyn QuoteSource>,
        refresh_config: RefreshConfig,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            source,
            refresh_config,
            ui_config,
        }
    }

    /// Leave the splash screen and start refreshing.
    fn open_dashboard(&mut self) {
        let mut state = DashboardState::new(
            self.source.symbol().to_string(),
            self.refresh_config,
            self.ui_config.clone(),
        );
        state.activate(self.source.clone());
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Release the dashboard's refresh task, if one is running.
    async fn close(&mut self) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.shutdown().await;
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let result = event_loop(terminal, &mut app).await;
    // Release the refresh timer on every exit path, including draw errors.
    app.close().await;
    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= SPLASH_DURATION {
                app.open_dashboard();
                continue;
            }
        }

        // crossterm polling blocks; keep it off the runtime's worker threads.
        let key = tokio::task::block_in_place(|| -> std::io::Result<Option<event::KeyEvent>> {
            if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    return Ok(Some(key));
                }
            }
            Ok(None)
        })?;

        if let Some(key) = key {
            // Skip events that are not KeyEventKind::Press
            if key.kind == event::KeyEventKind::Release {
                continue;
            }

            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                return Ok(());
            }

            if let Screen::Splash = app.current_screen {
                // Any other key skips the splash screen
                app.open_dashboard();
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
