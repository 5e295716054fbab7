//! Terminal fruit memory-match runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer in
//! `fruit_match::term`. Wall-clock time is measured here and handed to the
//! engine, which owns every game timer.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info, warn};

use fruit_match::core::SessionSnapshot;
use fruit_match::engine::{Game, GameConfig};
use fruit_match::input::{click_position, map_key, should_quit, Cursor, InputCommand};
use fruit_match::term::{FrameBuffer, GameView, HitTarget, TerminalRenderer, Viewport};
use fruit_match::types::{GameAction, FRAME_MS, GRID_COLUMNS};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    for (name, value) in &config.rejected {
        warn!("ignoring {}={:?}: not a valid value", name, value);
    }

    let mut term = TerminalRenderer::new().with_mouse(config.mouse);
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}

/// Send log output to `FRUIT_MATCH_LOG_PATH`; without it logging stays off,
/// since anything on stderr would land on the game screen.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    info!("logging to {}", path);
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = Game::new(config);
    let view = GameView::default();
    let mut cursor = Cursor::new(game.session().len(), GRID_COLUMNS);

    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut last_advance = Instant::now();
    let mut last_viewport = None;
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        if last_viewport != Some(viewport) {
            last_viewport = Some(viewport);
            term.invalidate();
            dirty = true;
        }

        // Render only when something visible changed.
        if dirty {
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Some(cursor.index()), viewport, &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match map_key(key) {
                        Some(InputCommand::Move(direction)) => {
                            dirty |= cursor.move_by(direction);
                        }
                        Some(InputCommand::ActivateFocused) => {
                            let action = GameAction::Activate(cursor.index());
                            dirty |= apply(&mut game, &mut cursor, action);
                        }
                        Some(InputCommand::Restart) => {
                            dirty |= apply(&mut game, &mut cursor, GameAction::Restart);
                        }
                        None => {}
                    }
                }
                Event::Mouse(mouse) => {
                    // Hit-test against the frame that is on screen.
                    let target = click_position(mouse)
                        .and_then(|(x, y)| view.hit_test(&snap, viewport, x, y));
                    match target {
                        Some(HitTarget::Tile(index)) => {
                            cursor.set(index);
                            apply(&mut game, &mut cursor, GameAction::Activate(index));
                            dirty = true;
                        }
                        Some(HitTarget::Restart) => {
                            dirty |= apply(&mut game, &mut cursor, GameAction::Restart);
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Feed whole elapsed milliseconds to the timers; the remainder carries over.
        let elapsed_ms = last_advance.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
        if elapsed_ms > 0 {
            last_advance += Duration::from_millis(u64::from(elapsed_ms));
            dirty |= game.advance(elapsed_ms).changed();
        }
    }
}

/// Apply an action; returns whether the screen needs redrawing.
fn apply(game: &mut Game, cursor: &mut Cursor, action: GameAction) -> bool {
    match game.apply_action(action) {
        Some(outcome) => !outcome.is_ignored(),
        None => {
            cursor.reset_len(game.session().len());
            true
        }
    }
}
