//! Terminal chess runner (default binary).
//!
//! Crossterm drives input (keyboard and mouse) and the framebuffer renderer
//! draws the board. Diagnostics go to a log file, never to the terminal.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tui_chess::config::AppConfig;
use tui_chess::core::Game;
use tui_chess::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_chess::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_chess::types::TICK_MS;

const DEFAULT_FILTER: &str = "tui_chess=debug,tui_chess_core=debug";

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config);
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        warn!(%err, "exited with error");
    }
    result
}

/// Logging is best-effort: if the file cannot be opened the game runs silent.
fn init_logging(config: &AppConfig) {
    let Some(path) = config.log_path.as_deref() else {
        return;
    };
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("logging disabled: cannot open {path}: {err}");
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
    {
        eprintln!("logging disabled: cannot install subscriber: {err}");
    }
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = Game::new(
        config.white_name.as_str(),
        config.black_name.as_str(),
        config.clock_ms,
    );
    let view = GameView::new(config.tile_width, config.tile_height);
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&game, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pointer) = handle_mouse_event(mouse) {
                        let geometry = view.geometry(viewport);
                        if let Err(err) = game.handle_pointer(pointer, &geometry) {
                            warn!(%err, "pointer event rejected");
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}
