//! Food placement
//!
//! Rejection sampling over grid cells, capped at `max_placement_attempts`
//! samples. Past the cap every free cell is collected and one is picked
//! uniformly, so a crowded board still finds its last free cell and a full
//! board reports an error instead of spinning.

use glam::Vec2;
use rand::Rng;

use super::error::SimError;
use super::state::GameState;

/// Food centre for grid cell (`col`, `row`)
#[inline]
pub fn cell_food_position(col: u32, row: u32, stride: f32, food_radius: f32) -> Vec2 {
    Vec2::new(col as f32, row as f32) * stride + Vec2::splat(food_radius / 2.0)
}

/// Move the food to a random cell no live segment touches
pub fn relocate_food(state: &mut GameState) -> Result<Vec2, SimError> {
    let stride = state.settings.stride();
    let radius = state.settings.food_radius;
    let (cols, rows) = (state.settings.cols(), state.settings.rows());

    for attempt in 0..state.settings.max_placement_attempts {
        let col = state.rng.random_range(0..cols);
        let row = state.rng.random_range(0..rows);
        let candidate = cell_food_position(col, row, stride, radius);
        if !state.food_touches_snake(candidate) {
            log::debug!(
                "Food placed at cell ({}, {}) after {} attempts",
                col,
                row,
                attempt + 1
            );
            state.food.pos = candidate;
            return Ok(candidate);
        }
    }

    let free: Vec<Vec2> = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (col, row)))
        .map(|(col, row)| cell_food_position(col, row, stride, radius))
        .filter(|&candidate| !state.food_touches_snake(candidate))
        .collect();

    if free.is_empty() {
        log::warn!("No free cell for food, snake length {}", state.snake.len());
        return Err(SimError::NoFreeCell {
            length: state.snake.len(),
        });
    }

    let candidate = free[state.rng.random_range(0..free.len())];
    log::debug!(
        "Food placed by full scan ({} free cells remained)",
        free.len()
    );
    state.food.pos = candidate;
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::{Direction, Segment};

    fn small_settings() -> Settings {
        // 3x2 grid
        Settings {
            width: 90.0,
            height: 60.0,
            max_placement_attempts: 4,
            ..Default::default()
        }
    }

    fn segment_at(col: u32, row: u32) -> Segment {
        Segment::new(
            Vec2::new(col as f32 * 30.0, row as f32 * 30.0),
            Direction::Left,
        )
    }

    #[test]
    fn test_cell_food_position() {
        assert_eq!(cell_food_position(0, 0, 30.0, 10.0), Vec2::new(5.0, 5.0));
        assert_eq!(cell_food_position(2, 1, 30.0, 10.0), Vec2::new(65.0, 35.0));
    }

    #[test]
    fn test_relocate_avoids_snake() {
        let mut state = GameState::new(Settings::default()).unwrap();
        for _ in 0..200 {
            let pos = relocate_food(&mut state).unwrap();
            assert!(!state.food_touches_snake(pos));
            assert_eq!(state.food().pos, pos);
            assert!(pos.x >= 0.0 && pos.x < 960.0);
            assert!(pos.y >= 0.0 && pos.y < 1080.0);
        }
    }

    #[test]
    fn test_relocate_finds_last_free_cell() {
        // Every cell but (2, 1) occupied
        let segments = vec![
            segment_at(2, 0),
            segment_at(1, 0),
            segment_at(0, 0),
            segment_at(0, 1),
            segment_at(1, 1),
        ];
        let mut state =
            GameState::with_layout(small_settings(), segments, Vec2::new(65.0, 35.0)).unwrap();
        for _ in 0..20 {
            let pos = relocate_food(&mut state).unwrap();
            assert_eq!(pos, Vec2::new(65.0, 35.0));
        }
    }

    #[test]
    fn test_relocate_full_board() {
        let segments = vec![
            segment_at(0, 0),
            segment_at(1, 0),
            segment_at(2, 0),
            segment_at(2, 1),
            segment_at(1, 1),
            segment_at(0, 1),
        ];
        // Between cell centres, touching none of them
        let food = Vec2::new(25.0, 25.0);
        let mut state = GameState::with_layout(small_settings(), segments, food).unwrap();
        let err = relocate_food(&mut state).unwrap_err();
        assert_eq!(err, SimError::NoFreeCell { length: 6 });
        assert_eq!(state.food().pos, food);
    }
}
