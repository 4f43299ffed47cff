//! Terminal runner (default binary).
//!
//! Owns the frame loop: drains pending key events into the game, ticks the
//! drop clock with a monotonic timestamp, renders a snapshot through the
//! framebuffer renderer, then sleeps until the next frame.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, LevelFilter};

use blockfall::core::GameState;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::logging::FileLogger;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameConfig, DEFAULT_FPS};

/// Falling-block puzzle game for the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with game tuning (drop_interval_ms, row_clear_score, drop_cell_score, seed).
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for the piece randomizer (overrides the config file).
    #[arg(short, long)]
    seed: Option<u32>,
    /// Frames per second of the render loop.
    #[arg(short, long, default_value_t = DEFAULT_FPS)]
    fps: u32,
    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log level used with --log-file.
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        FileLogger::open(path, args.log_level)?.install()?;
    }

    let config = load_config(&args)?;
    info!(
        "starting: seed={:?} drop_interval_ms={} fps={}",
        config.seed, config.drop_interval_ms, args.fps
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, args.fps.max(1));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            GameConfig::from_json_str(&text)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if config.seed.is_none() {
        config.seed = Some(clock_seed());
    }
    Ok(config)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: GameConfig, fps: u32) -> Result<()> {
    let mut game = GameState::new(config);
    let config = game.config();
    info!(
        "session: seed={} drop_interval_ms={} row_clear_score={} drop_cell_score={}",
        game.seed(),
        config.drop_interval_ms,
        config.row_clear_score,
        config.drop_cell_score
    );
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let epoch = Instant::now();
    let frame = Duration::from_secs(1) / fps;
    let mut next_frame = epoch;

    loop {
        // Input first: every event that arrives before the frame deadline is
        // applied before the clock is advanced.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit with score {}", game.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let changed = game.apply_action(action);
                        debug!("{} -> {}", action.as_str(), changed);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            if Instant::now() < next_frame {
                continue;
            }
        }

        let now = Instant::now();
        next_frame = if next_frame + frame < now { now + frame } else { next_frame + frame };

        game.tick(now.duration_since(epoch).as_millis() as u64);
        if let Some(score) = game.take_score_event() {
            debug!("score {}", score);
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
