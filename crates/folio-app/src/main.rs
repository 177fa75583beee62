//! folio desktop entry point.
//!
//! Runs the portfolio's landing terminal inside the host terminal. Type a
//! name and press Enter, then try `help`. Enter on an empty prompt or the
//! down arrow continues to the site, `cd <section>` jumps to a section,
//! Escape or Ctrl-C quits.
//!
//! Configuration comes from the TOML file named by the first argument or
//! `FOLIO_CONFIG`; `FOLIO_HOUR` pins the greeting hour.

mod app_state;
mod input;
mod render;

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{cursor, event, execute, terminal};

use app_state::AppState;
use folio_platform::{
    ClockService, DesktopPlatform, FixedClock, MemoryStore, RouteLog, Services,
};
use folio_terminal::TerminalSession;
use folio_types::config::TerminalConfig;

/// Target frame interval (~60fps).
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "Starting folio terminal (char {}ms, line {}ms, fade {}ms)",
        config.char_delay_ms,
        config.line_delay_ms,
        config.transition_delay_ms,
    );

    let clock: Box<dyn ClockService> = match std::env::var("FOLIO_HOUR") {
        Ok(hour) => {
            let hour: u8 = hour.trim().parse().context("FOLIO_HOUR must be 0-23")?;
            Box::new(FixedClock::new(hour)?)
        },
        Err(_) => Box::new(DesktopPlatform::new()),
    };

    // Clones share state: the session writes, the app observes.
    let store = MemoryStore::new();
    let routes = RouteLog::new();
    let services = Services {
        clock,
        store: Box::new(store.clone()),
        navigator: Box::new(routes.clone()),
    };
    let session = TerminalSession::new(config, services);
    let mut state = AppState::new(session, store, routes);

    let mut out = std::io::stdout();
    {
        let _raw = RawMode::enable()?;
        run(&mut state, &mut out)?;
    }

    render::draw_page(&mut out, &state)?;
    log::info!(
        "folio shut down cleanly after {} frames",
        state.frame_counter
    );
    Ok(())
}

/// Raw mode with a hidden cursor, restored on drop even if the frame loop
/// bails out with an error.
struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(std::io::stdout(), cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("failed to leave raw mode: {e}");
        }
        if let Err(e) = execute!(std::io::stdout(), cursor::Show) {
            log::warn!("failed to show cursor: {e}");
        }
    }
}

fn load_config() -> Result<TerminalConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
        .map(PathBuf::from);
    match path {
        Some(path) => TerminalConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(TerminalConfig::default()),
    }
}

fn run(state: &mut AppState, out: &mut impl Write) -> Result<()> {
    let start = Instant::now();
    let mut ticked_ms: u64 = 0;

    loop {
        state.frame_counter += 1;

        if event::poll(FRAME)? {
            loop {
                if let Some(ev) = input::map_event(&event::read()?) {
                    state.session.handle_input(&ev);
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        // Tick by whole elapsed milliseconds so sub-ms remainders carry over.
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let dt = u32::try_from(elapsed_ms - ticked_ms).unwrap_or(u32::MAX);
        ticked_ms = elapsed_ms;
        state.session.tick(dt);

        if state.poll_navigation() {
            return Ok(());
        }
        render::draw_terminal(out, state)?;
    }
}
