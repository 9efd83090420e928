//! Terminal blockfall runner.
//!
//! crossterm supplies keys and the alternate screen. Frames go through the
//! framebuffer renderer. Gravity runs on a fixed interval regardless of input.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::engine::{Engine, EngineEvent};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::logging::init_log;
use blockfall::term::{FrameBuffer, GameView, GravityClock, TerminalRenderer, Viewport};
use blockfall::RunConfig;

/// Input poll timeout once gravity has stopped.
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;
    if let Some(path) = &config.log_path {
        init_log(config.log_level, path)?;
    }
    info!("blockfall starting: {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut engine = match config.seed {
        Some(seed) => Engine::seeded(seed),
        None => Engine::from_entropy(),
    };
    info!("piece source seed: {:?}", engine.source().seed());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = engine.snapshot();

    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;
    let mut clock = GravityClock::new(config.gravity_ms, now_ms());

    loop {
        engine.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = clock.until_next_ms(now_ms()).unwrap_or(IDLE_POLL_MS);
        if event::poll(Duration::from_millis(timeout))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit at score {}", engine.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        for _ in 0..clock.poll(now_ms()) {
            if !engine.is_running() {
                break;
            }
            engine.on_gravity_tick();
        }

        let mut topped_out = false;
        for ev in engine.drain_events() {
            match ev {
                EngineEvent::ScoreChanged(score) => info!("score {}", score),
                EngineEvent::GameOver => topped_out = true,
            }
        }
        if topped_out {
            info!("game over: score {} lines {}", engine.score(), engine.lines());
            clock.stop();
        }
    }
}
