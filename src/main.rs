//! Grid Snake headless driver
//!
//! Runs one session with an autopilot at a simulated 60 FPS, then prints the
//! final board as ASCII and a JSON snapshot.
//!
//! Usage: `grid-snake [settings.json] [ticks]`

use std::error::Error;

use glam::Vec2;
use serde::Serialize;

use grid_snake::sim::{Direction, Food, GameState, Shape, SimError, Snake, TickEvent, draw_list, tick};
use grid_snake::{Settings, TickClock};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_TICKS: u64 = 500;

#[derive(Serialize)]
struct Snapshot<'a> {
    tick: u64,
    foods_eaten: u32,
    snake: &'a Snake,
    food: &'a Food,
}

/// Signed shortest offset from `from` to `to` on a wrapping axis
fn wrapped_delta(from: f32, to: f32, extent: f32) -> f32 {
    let mut delta = to - from;
    if delta > extent / 2.0 {
        delta -= extent;
    } else if delta < -extent / 2.0 {
        delta += extent;
    }
    delta
}

/// Steer the head toward the food along the longer axis first
fn autopilot(state: &GameState) -> Direction {
    let settings = state.settings();
    let head = state.snake().head();
    let center = head.pos + Vec2::splat(settings.segment_size / 2.0);
    let food = state.food().pos;

    let dx = wrapped_delta(center.x, food.x, settings.width);
    let dy = wrapped_delta(center.y, food.y, settings.height);
    let horizontal = if dx < 0.0 { Direction::Left } else { Direction::Right };
    let vertical = if dy < 0.0 { Direction::Up } else { Direction::Down };

    let (first, second) = if dx.abs() >= dy.abs() {
        (horizontal, vertical)
    } else {
        (vertical, horizontal)
    };
    if first != head.current.opposite() {
        first
    } else {
        second
    }
}

/// Render the draw list onto a character grid, one cell per stride
fn ascii_frame(state: &GameState) -> String {
    let settings = state.settings();
    let stride = settings.stride();
    let (cols, rows) = (settings.cols() as usize, settings.rows() as usize);
    let mut grid = vec![vec!['.'; cols]; rows];

    for (i, shape) in draw_list(state).into_iter().enumerate() {
        let (pos, glyph) = match shape {
            Shape::Rect { pos, .. } => (pos, if i == 0 { '@' } else { 'o' }),
            Shape::Circle { center, .. } => (center, '*'),
        };
        let col = (pos.x / stride) as usize;
        let row = (pos.y / stride) as usize;
        if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = glyph;
        }
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let max_ticks = match args.next() {
        Some(ticks) => ticks.parse()?,
        None => DEFAULT_TICKS,
    };

    let mut clock = TickClock::new(settings.tick_time);
    let mut state = GameState::new(settings)?;
    let mut foods_eaten = 0u32;

    while state.time_ticks < max_ticks {
        // Input runs every frame, the simulation only on clock ticks
        state.submit_direction(autopilot(&state));
        if !clock.advance(FRAME_DT) {
            continue;
        }

        match tick(&mut state) {
            Ok(TickEvent::Moved) => {}
            Ok(TickEvent::Ate { .. }) => foods_eaten += 1,
            Err(SimError::NoFreeCell { length }) => {
                foods_eaten += 1;
                log::info!("Board filled at length {}, ending session", length);
                break;
            }
            Err(e @ SimError::ChainAtCapacity { .. }) => {
                log::info!("{}, ending session", e);
                break;
            }
        }
    }

    log::info!(
        "Finished after {} ticks: length {}, {} foods eaten",
        state.time_ticks,
        state.len(),
        foods_eaten
    );

    println!("{}", ascii_frame(&state));
    let snapshot = Snapshot {
        tick: state.time_ticks,
        foods_eaten,
        snake: state.snake(),
        food: state.food(),
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
