//! Grid Snake - segment chain simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (chain propagation, food, growth)
//! - `settings`: Playfield and timing configuration
//! - `clock`: Fixed-tick accumulator for the host loop

pub mod clock;
pub mod settings;
pub mod sim;

pub use clock::TickClock;
pub use settings::{Settings, SettingsError};

/// Reference configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 960.0;
    pub const SCREEN_HEIGHT: f32 = 1080.0;

    /// Food circle radius
    pub const FOOD_RADIUS: f32 = 10.0;
    /// Side length of a square body segment
    pub const SEGMENT_SIZE: f32 = 20.0;
    /// Gap left between consecutive segments
    pub const SEGMENT_SPACING: f32 = 10.0;

    /// Seconds between simulation ticks
    pub const TICK_TIME: f32 = 0.2;

    /// Random samples tried before falling back to a full free-cell scan
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 256;

    /// Largest grid accepted; keeps cell coordinates exact in f32
    pub const MAX_GRID_CELLS: u64 = 1 << 20;

    /// Default RNG seed
    pub const DEFAULT_SEED: u64 = 0x5EED_5A4E;
}
