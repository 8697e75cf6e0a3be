//! Proximity collision and playfield wrap
//!
//! Segments are squares addressed by their top-left corner; food is a circle
//! addressed by its centre. Contact is a centre-to-centre distance test, not
//! a box overlap.

use glam::Vec2;

use crate::settings::Settings;

/// Centre of a segment whose top-left corner is `pos`
#[inline]
pub fn segment_center(pos: Vec2, segment_size: f32) -> Vec2 {
    pos + Vec2::splat(segment_size / 2.0)
}

/// Whether a segment at `segment_pos` is close enough to eat food at `food_pos`
pub fn touches_food(segment_pos: Vec2, food_pos: Vec2, settings: &Settings) -> bool {
    segment_center(segment_pos, settings.segment_size).distance(food_pos)
        <= settings.collision_threshold()
}

/// Wrap one axis coordinate into `[0, extent)`
#[inline]
fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        value + extent
    } else if value >= extent {
        value - extent
    } else {
        value
    }
}

/// Toroidal wrap: leaving one edge re-enters at the opposite edge.
///
/// A segment leaving the left or top edge lands directly on the last cell
/// (x = width - stride), never on x = width, so it has no off-screen tick.
pub fn wrap_position(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap_axis(pos.x, width), wrap_axis(pos.y, height))
}
