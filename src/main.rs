//! Terminal raycaster runner (default binary).
//!
//! Renders the scene at full resolution every tick, previews it in the
//! terminal with half-block glyphs, and streams a Lanczos-downsampled copy
//! to the WLED matrix at the device rate. Set `WLED_HOST` / `WLED_PORT` to
//! point at the device, or `WLED_DISABLED=1` to play without one.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use wled_raycaster::core::{GridMap, PlayerState};
use wled_raycaster::input::{should_quit, HeldActions};
use wled_raycaster::matrix::{MatrixLayout, Streamer};
use wled_raycaster::render::{downsample, draw_weapon, render_scene, PixelBuffer};
use wled_raycaster::term::{preview, status_lines, TerminalRenderer, Viewport};
use wled_raycaster::types::{FRAME_HEIGHT, FRAME_WIDTH, MATRIX_HEIGHT, MATRIX_WIDTH, TICK_MS};

/// Terminal rows reserved for the HUD under the picture.
const HUD_ROWS: u16 = 2;

fn main() -> Result<()> {
    // Everything that can fail fatally is built before touching the
    // terminal, so errors print on a normal screen.
    let grid = GridMap::default_arena()?;
    let layout = MatrixLayout::two_panel_serpentine()?;
    let mut streamer = Streamer::start_from_env(layout);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &grid, &mut streamer);

    // Always try to restore terminal state.
    let _ = term.exit();

    // Blackout and drain, whether we quit cleanly or bailed on an error.
    if let Some(streamer) = streamer {
        streamer.shutdown();
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    grid: &GridMap,
    streamer: &mut Option<Streamer>,
) -> Result<()> {
    let mut player = PlayerState::new(3.5, 3.5, 0.0);
    let mut held = HeldActions::new();
    let mut frame = PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);

    let stream_hud = streamer
        .as_ref()
        .map(|s| (s.target().to_string(), s.stats()));

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        // Render the full-resolution frame once; both outputs feed off it.
        render_scene(&player, grid, &mut frame);
        draw_weapon(&mut frame, player.muzzle_flash);

        let now = Instant::now();
        if let Some(streamer) = streamer.as_mut() {
            if streamer.due(now) {
                let small = downsample(&frame, MATRIX_WIDTH, MATRIX_HEIGHT);
                streamer.offer(&small, now);
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h.saturating_sub(HUD_ROWS));
        let mut picture = preview(&frame, viewport);
        let hud = status_lines(
            &player,
            stream_hud.as_ref().map(|(t, s)| (t.as_str(), s.as_ref())),
            started.elapsed(),
        );
        term.draw_swap(&mut picture, &hud)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        held.key_press(key, Instant::now());
                    }
                    KeyEventKind::Release => {
                        held.key_release(key.code);
                    }
                },
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let actions = held.snapshot(last_tick);
            player.apply_actions(actions, grid);
            player.tick_timers();
        }
    }
}
