//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - Head-to-tail iteration order
//! - No rendering or platform dependencies

pub mod collision;
pub mod error;
pub mod food;
pub mod state;
pub mod tick;
pub mod view;

pub use collision::{segment_center, touches_food, wrap_position};
pub use error::SimError;
pub use food::{cell_food_position, relocate_food};
pub use state::{Direction, Food, GameState, Segment, Snake};
pub use tick::{TickEvent, tick};
pub use view::{Shape, draw_list};
