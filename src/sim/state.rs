//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{touches_food, wrap_position};
use super::food::relocate_food;
use crate::settings::{Settings, SettingsError};

/// Movement heading in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Axis-aligned unit vector
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// One square body segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Top-left corner, grid aligned
    pub pos: Vec2,
    /// Heading applied on every tick
    pub current: Direction,
    /// Turn to take at the start of the next tick (`None` = keep heading)
    pub pending: Option<Direction>,
}

impl Segment {
    pub fn new(pos: Vec2, current: Direction) -> Self {
        Self {
            pos,
            current,
            pending: None,
        }
    }
}

/// Ordered segment chain, head first
#[derive(Debug, Clone, Serialize)]
pub struct Snake {
    segments: Vec<Segment>,
    capacity: usize,
}

impl Snake {
    /// Single-segment snake
    pub fn new(head: Segment, capacity: usize) -> Self {
        Self {
            segments: vec![head],
            capacity: capacity.max(1),
        }
    }

    #[inline]
    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    #[inline]
    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true; a snake always has its head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.segments.len() >= self.capacity
    }

    /// Queue a head turn unless it reverses the current heading.
    /// Returns whether the request was accepted.
    pub fn steer(&mut self, requested: Direction) -> bool {
        let head = &mut self.segments[0];
        if requested == head.current.opposite() {
            return false;
        }
        head.pending = Some(requested);
        true
    }

    /// Append a segment one stride behind the tail, travelling the same way.
    /// Returns false (and leaves the chain untouched) when at capacity.
    pub(crate) fn grow(&mut self, settings: &Settings) -> bool {
        if self.is_full() {
            return false;
        }
        let tail = *self.tail();
        let pos = tail.pos + tail.current.opposite().unit() * settings.stride();
        self.segments.push(Segment::new(
            wrap_position(pos, settings.width, settings.height),
            tail.current,
        ));
        true
    }
}

/// Offset between two cells along one wrapping axis, shortest way round
fn wrapped_gap(a: f32, b: f32, extent: f32) -> f32 {
    let gap = (a - b).abs();
    gap.min(extent - gap)
}

/// Every segment on a grid cell inside the playfield, each one cell away
/// from the segment ahead of it
fn check_chain(segments: &[Segment], settings: &Settings) -> Result<(), SettingsError> {
    let stride = settings.stride();
    let (width, height) = (settings.width, settings.height);

    for segment in segments {
        let pos = segment.pos;
        if !(0.0..width).contains(&pos.x) || !(0.0..height).contains(&pos.y) {
            return Err(SettingsError::Invalid("segment outside the playfield"));
        }
        if (pos / stride).fract() != Vec2::ZERO {
            return Err(SettingsError::Invalid("segment off the grid"));
        }
    }

    for pair in segments.windows(2) {
        let dx = wrapped_gap(pair[0].pos.x, pair[1].pos.x, width);
        let dy = wrapped_gap(pair[0].pos.y, pair[1].pos.y, height);
        let adjacent = (dx == stride && dy == 0.0) || (dx == 0.0 && dy == stride);
        if !adjacent {
            return Err(SettingsError::Invalid("snake segments are not contiguous"));
        }
    }
    Ok(())
}

/// The food item (position is the circle centre)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub pos: Vec2,
    pub radius: f32,
}

/// One play session: snake, food and the placement RNG
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) settings: Settings,
    pub(crate) snake: Snake,
    pub(crate) food: Food,
    pub(crate) rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a session: head centred heading left, food a quarter across
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let stride = settings.stride();
        let (cols, rows) = (settings.cols(), settings.rows());
        let head = Segment::new(
            Vec2::new((cols / 2) as f32 * stride, (rows / 2) as f32 * stride),
            Direction::Left,
        );
        let snake = Snake::new(head, settings.capacity());
        let food = Food {
            pos: Vec2::new(
                (cols / 4) as f32 * stride + settings.food_radius,
                (rows / 2) as f32 * stride + settings.food_radius,
            ),
            radius: settings.food_radius,
        };

        let mut state = Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
            snake,
            food,
            time_ticks: 0,
        };

        // Tiny playfields can put the starting food on the head
        if state.food_touches_snake(state.food.pos) {
            relocate_food(&mut state)
                .map_err(|_| SettingsError::Invalid("playfield has no room for food"))?;
        }

        log::info!(
            "New session: {}x{} playfield, capacity {}, seed {}",
            state.settings.width,
            state.settings.height,
            state.snake.capacity(),
            state.settings.seed
        );

        Ok(state)
    }

    /// Create a session with a custom starting chain and food.
    /// Used by hosts restoring a snapshot and by tests.
    ///
    /// The chain must be on the grid, inside the playfield and contiguous,
    /// and the food must not touch it.
    pub fn with_layout(
        settings: Settings,
        segments: Vec<Segment>,
        food_pos: Vec2,
    ) -> Result<Self, SettingsError> {
        let mut state = Self::new(settings)?;
        if segments.is_empty() {
            return Err(SettingsError::Invalid("snake needs at least a head"));
        }
        if segments.len() > state.snake.capacity {
            return Err(SettingsError::Invalid("snake longer than playfield capacity"));
        }
        check_chain(&segments, &state.settings)?;

        let (width, height) = (state.settings.width, state.settings.height);
        if !(0.0..width).contains(&food_pos.x) || !(0.0..height).contains(&food_pos.y) {
            return Err(SettingsError::Invalid("food outside the playfield"));
        }

        state.snake.segments = segments;
        if state.food_touches_snake(food_pos) {
            return Err(SettingsError::Invalid("food placed on the snake"));
        }
        state.food.pos = food_pos;
        Ok(state)
    }

    /// Queue a head turn (input buffering). Reversals are ignored.
    pub fn submit_direction(&mut self, requested: Direction) -> bool {
        let accepted = self.snake.steer(requested);
        if accepted {
            log::debug!("Queued turn {:?}", requested);
        }
        accepted
    }

    /// Whether any live segment is within collision range of `food_pos`
    pub fn food_touches_snake(&self, food_pos: Vec2) -> bool {
        self.snake
            .segments
            .iter()
            .any(|segment| touches_food(segment.pos, food_pos, &self.settings))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Live segments, head first
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.snake.segments.iter()
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_layout() {
        let state = GameState::new(Settings::default()).unwrap();
        assert_eq!(state.len(), 1);
        let head = state.snake().head();
        assert_eq!(head.pos, Vec2::new(480.0, 540.0));
        assert_eq!(head.current, Direction::Left);
        assert_eq!(head.pending, None);
        assert_eq!(state.food().pos, Vec2::new(250.0, 550.0));
        assert_eq!(state.snake().capacity(), 1152);
    }

    #[test]
    fn test_steer_rejects_reverse() {
        let mut state = GameState::new(Settings::default()).unwrap();
        assert!(!state.submit_direction(Direction::Right));
        assert_eq!(state.snake().head().pending, None);
    }

    #[test]
    fn test_steer_last_accepted_wins() {
        let mut state = GameState::new(Settings::default()).unwrap();
        assert!(state.submit_direction(Direction::Up));
        assert!(state.submit_direction(Direction::Down));
        // Checked against the current heading, not the queued one
        assert!(!state.submit_direction(Direction::Right));
        assert_eq!(state.snake().head().pending, Some(Direction::Down));
    }

    #[test]
    fn test_grow_appends_behind_tail() {
        let settings = Settings::default();
        let mut snake = Snake::new(
            Segment::new(Vec2::new(480.0, 540.0), Direction::Left),
            settings.capacity(),
        );
        assert!(snake.grow(&settings));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail().pos, Vec2::new(510.0, 540.0));
        assert_eq!(snake.tail().current, Direction::Left);
        assert_eq!(snake.tail().pending, None);
    }

    #[test]
    fn test_grow_wraps_behind_edge() {
        let settings = Settings::default();
        let mut snake = Snake::new(
            Segment::new(Vec2::new(930.0, 0.0), Direction::Left),
            settings.capacity(),
        );
        assert!(snake.grow(&settings));
        assert_eq!(snake.tail().pos, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_grow_refused_at_capacity() {
        let settings = Settings::default();
        let mut snake = Snake::new(Segment::new(Vec2::ZERO, Direction::Up), 1);
        assert!(!snake.grow(&settings));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_with_layout_validates_length() {
        let settings = Settings {
            width: 60.0,
            height: 30.0,
            ..Default::default()
        };
        let segments = vec![Segment::new(Vec2::ZERO, Direction::Left); 3];
        assert!(GameState::with_layout(settings.clone(), segments, Vec2::ZERO).is_err());
        assert!(GameState::with_layout(settings, Vec::new(), Vec2::ZERO).is_err());
    }

    #[test]
    fn test_with_layout_rejects_off_playfield_segment() {
        let segments = vec![Segment::new(Vec2::new(2010.0, 30.0), Direction::Left)];
        let err = GameState::with_layout(Settings::default(), segments, Vec2::new(5.0, 5.0));
        assert!(matches!(err, Err(SettingsError::Invalid(_))));

        let segments = vec![Segment::new(Vec2::new(-30.0, 30.0), Direction::Left)];
        let err = GameState::with_layout(Settings::default(), segments, Vec2::new(5.0, 5.0));
        assert!(matches!(err, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_with_layout_rejects_off_grid_segment() {
        let segments = vec![Segment::new(Vec2::new(480.0, 17.0), Direction::Left)];
        let err = GameState::with_layout(Settings::default(), segments, Vec2::new(5.0, 5.0));
        assert!(matches!(err, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_with_layout_rejects_gap_in_chain() {
        let segments = vec![
            Segment::new(Vec2::new(480.0, 540.0), Direction::Left),
            Segment::new(Vec2::new(540.0, 540.0), Direction::Left),
        ];
        let err = GameState::with_layout(Settings::default(), segments, Vec2::new(5.0, 5.0));
        assert!(matches!(err, Err(SettingsError::Invalid(_))));

        // Diagonal neighbours are not contiguous either
        let segments = vec![
            Segment::new(Vec2::new(480.0, 540.0), Direction::Left),
            Segment::new(Vec2::new(510.0, 570.0), Direction::Up),
        ];
        let err = GameState::with_layout(Settings::default(), segments, Vec2::new(5.0, 5.0));
        assert!(matches!(err, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_with_layout_accepts_chain_across_edge() {
        let segments = vec![
            Segment::new(Vec2::new(0.0, 540.0), Direction::Right),
            Segment::new(Vec2::new(930.0, 540.0), Direction::Right),
            Segment::new(Vec2::new(930.0, 510.0), Direction::Down),
        ];
        let state =
            GameState::with_layout(Settings::default(), segments, Vec2::new(5.0, 5.0)).unwrap();
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_with_layout_rejects_food_on_snake() {
        let segments = vec![Segment::new(Vec2::new(480.0, 540.0), Direction::Left)];
        let err = GameState::with_layout(Settings::default(), segments, Vec2::new(490.0, 550.0));
        assert!(matches!(err, Err(SettingsError::Invalid(_))));

        let segments = vec![Segment::new(Vec2::new(480.0, 540.0), Direction::Left)];
        let err = GameState::with_layout(Settings::default(), segments, Vec2::new(-5.0, 5.0));
        assert!(matches!(err, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_direction_opposites() {
        let all = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        for dir in all {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.unit() + dir.opposite().unit(), Vec2::ZERO);
        }
    }
}
