//! Fixed timestep simulation tick
//!
//! Advances the whole chain one grid step, then resolves food contact.

use super::collision::{touches_food, wrap_position};
use super::error::SimError;
use super::food::relocate_food;
use super::state::GameState;

/// What happened during a successful tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The chain moved; no food was reached
    Moved,
    /// The head ate: the chain grew to `length` and the food moved
    Ate { length: usize },
}

/// Advance the game state by one tick.
///
/// Errors are recoverable end conditions. Movement for the tick has already
/// been applied when one is returned.
pub fn tick(state: &mut GameState) -> Result<TickEvent, SimError> {
    state.time_ticks += 1;
    advance_chain(state);

    if !touches_food(state.snake.head().pos, state.food.pos, &state.settings) {
        return Ok(TickEvent::Moved);
    }

    if !state.snake.grow(&state.settings) {
        log::warn!(
            "Snake reached food at full capacity ({} segments)",
            state.snake.capacity()
        );
        return Err(SimError::ChainAtCapacity {
            capacity: state.snake.capacity(),
        });
    }
    let length = state.snake.len();
    log::info!("Snake ate food on tick {}, length {}", state.time_ticks, length);

    relocate_food(state)?;
    Ok(TickEvent::Ate { length })
}

/// Move every segment one stride, head first.
///
/// Each segment queues its predecessor's freshly updated heading, so a turn
/// travels one segment further down the chain per tick and every segment
/// turns on the cell where the one ahead of it turned.
fn advance_chain(state: &mut GameState) {
    let stride = state.settings.stride();
    let (width, height) = (state.settings.width, state.settings.height);

    let mut leader = None;
    for segment in state.snake.segments_mut() {
        if let Some(turn) = segment.pending.take() {
            segment.current = turn;
        }

        segment.pos = wrap_position(segment.pos + segment.current.unit() * stride, width, height);

        if let Some(ahead) = leader {
            segment.pending = (ahead != segment.current).then_some(ahead);
        }
        leader = Some(segment.current);
    }
}
