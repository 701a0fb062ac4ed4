//! Terminal maze runner (default binary).
//!
//! Polls crossterm for key events until the next tick, latches the latest
//! direction, and on each tick applies it and advances the session. Frames
//! are rendered with the framebuffer renderer from `tui_maze::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use tui_maze::core::GameSession;
use tui_maze::input::{should_quit, InputHandler};
use tui_maze::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_maze::{logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(config.log_path.as_deref())?;

    // A malformed map is fatal: refuse to start before touching the terminal.
    let session = config.load_session().inspect_err(|e| error!("{e:#}"))?;
    info!(
        "starting {}x{} maze, {} walls, tick {}ms",
        session.columns(),
        session.rows(),
        session.walls().len(),
        config.tick_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, config.tick_duration());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: GameSession, tick_duration: Duration) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        // Render.
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit after {} ticks", session.tick_count());
                        return Ok(());
                    }
                    if !session.is_over() {
                        input.handle_key_press(key.code);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick. Once the session is over the clock keeps running but nothing advances.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if session.is_over() {
                continue;
            }
            if let Some(direction) = input.take() {
                session.set_direction(direction);
            }
            session.tick();
            dirty = true;
        }
    }
}
