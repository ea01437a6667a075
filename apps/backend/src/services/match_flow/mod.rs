//! Match flow service - bridges the pure match state machine with DB persistence.
//!
//! Every method runs inside a caller-provided transaction: load the game into
//! a `MatchState`, apply one domain transition, then write counters, pointers
//! and history rows back. Nothing here takes locks or commits.

mod lifecycle;
mod persistence;
mod throw_processing;
mod turn_pointers;

pub use lifecycle::LegAdvance;
pub use persistence::LoadedMatch;
pub use throw_processing::ThrowApplied;
pub use turn_pointers::TurnTarget;

/// Match flow service - stateless, generic over the transaction it is handed.
#[derive(Debug, Default, Clone, Copy)]
pub struct MatchFlowService;

impl MatchFlowService {
    pub fn new() -> Self {
        Self
    }
}
