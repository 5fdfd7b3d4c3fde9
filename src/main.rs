//! Terminal Tetris runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the `term`
//! crate. The loop is single-threaded: each key press or timer expiry is
//! handled to completion before the next event is read.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use classic_tetris::core::GameState;
use classic_tetris::input::{handle_key_event, should_quit};
use classic_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use classic_tetris::types::FRAME_MS;

#[derive(Parser, Debug)]
#[command(name = "classic-tetris", version, about)]
struct Args {
    /// Seed for the piece sequence (defaults to the clock)
    #[arg(long, short)]
    seed: Option<u32>,

    /// Write logs to this file; filter with RUST_LOG (default: info)
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, GameState::new(seed));

    // Always try to restore terminal state.
    let restored = term.exit();
    result?;
    restored
}

/// Logs go to a file because the game owns the terminal.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS as u64);

    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        // Render.
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!(score = game.score(), level = game.level(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let changed = game.apply_action(action);
                        debug!(action = action.as_str(), changed, "input");
                        dirty |= changed;
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Gravity.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            if let Some(outcome) = game.advance(elapsed_ms) {
                dirty |= outcome.changed();
            }
        }
    }
}
