use thiserror::Error;

/// Recoverable end conditions reported by a tick.
///
/// The session stays usable after either; the host decides whether the game
/// is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// The head reached food but the chain already fills the playfield.
    /// Nothing grew and the food was left in place.
    #[error("snake is at its capacity of {capacity} segments")]
    ChainAtCapacity { capacity: usize },
    /// The snake grew but every grid cell is occupied, so the food could not
    /// be relocated.
    #[error("no free cell for food (snake length {length})")]
    NoFreeCell { length: usize },
}
