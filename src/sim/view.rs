//! Read-only draw list for the presentation layer
//!
//! The simulation never draws. Hosts turn these shapes into whatever their
//! toolkit calls a filled rectangle and a filled circle.

use glam::Vec2;
use serde::Serialize;

use super::state::GameState;

/// A primitive the host should draw this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Shape {
    /// Square body segment (top-left corner and side length)
    Rect { pos: Vec2, size: f32 },
    /// Food circle
    Circle { center: Vec2, radius: f32 },
}

/// Segments head first, then the food
pub fn draw_list(state: &GameState) -> Vec<Shape> {
    let size = state.settings().segment_size;
    let food = state.food();

    let mut shapes = Vec::with_capacity(state.len() + 1);
    shapes.extend(state.segments().map(|segment| Shape::Rect {
        pos: segment.pos,
        size,
    }));
    shapes.push(Shape::Circle {
        center: food.pos,
        radius: food.radius,
    });
    shapes
}
