//! Terminal 2048 runner (default binary).
//!
//! Keys and mouse drags come in through crossterm; the board is drawn with
//! the framebuffer renderer. The game has no timers, so the loop blocks on
//! the next terminal event and redraws only after something happened.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::config::PlayArgs;
use tui_2048::core::{new_game, GameRng, GameSnapshot};
use tui_2048::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2048::logging;
use tui_2048::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args = PlayArgs::parse();
    if let Some(path) = &args.log_path {
        logging::init_file(path)?;
    }
    let mut rng = args.rng();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args, &mut rng);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, args: &PlayArgs, rng: &mut GameRng) -> Result<()> {
    let mut game = new_game(rng);
    info!("new game (seed {:?})", args.seed);

    let view = BoardView::default();
    let mut swipes = SwipeTracker::new().with_dead_zone(args.drag_dead_zone);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            needs_redraw = false;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(
                        "quit after {} moves, max tile {}",
                        game.move_count(),
                        snap.max_tile
                    );
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => swipes.handle_mouse_event(mouse),
            Event::Resize(..) => {
                term.invalidate();
                swipes.cancel();
                needs_redraw = true;
                None
            }
            Event::FocusLost => {
                swipes.cancel();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            game.apply_action(action, rng);
            needs_redraw = true;
        }
    }
}
