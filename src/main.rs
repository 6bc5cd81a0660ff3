//! Terminal gameplay entrypoint.
//!
//! Single-threaded event loop: render the current snapshot, poll for key
//! events until the next 1000ms gravity tick, feed actions to the engine.
//! The timer keeps firing after a game over; the engine ignores those ticks
//! until the player restarts.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameEngine, GameEvent};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{CellStyle, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, DROP_INTERVAL_MS};

fn main() -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut engine = GameEngine::new(seed);
    engine.start();

    let view = GameView::default();
    let drop_interval = Duration::from_millis(DROP_INTERVAL_MS as u64);
    let mut last_drop = Instant::now();

    // Score at the moment of the last game over, shown until restart.
    // The engine resets its own score immediately, so the shell keeps it.
    let mut final_score: Option<u32> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut fb = view.render(&engine.snapshot(), Viewport::new(w, h));
        if let Some(score) = final_score {
            fb.put_str(0, 0, &format!("final score: {score}"), CellStyle::default());
        }
        term.draw(&fb)?;

        // Poll input with a timeout bounded by the next gravity tick.
        let timeout = drop_interval
            .checked_sub(last_drop.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if action == GameAction::Restart {
                            final_score = None;
                        }
                        engine.apply_action(action);
                    }
                }
            }
        }

        if last_drop.elapsed() >= drop_interval {
            last_drop = Instant::now();
            engine.tick();
        }

        if let Some(GameEvent::GameOver { final_score: score }) = engine.take_last_event() {
            final_score = Some(score);
        }
    }
}
