//! Services: transaction-scoped game setup and match flow, plus the
//! lock-and-transaction entry point callers use.

pub mod games;
pub mod match_flow;
pub mod throw_processor;

pub use games::{
    CreatedGame, CreatedPlayer, GameSnapshot, GamesService, NewGame, PlayerRef, PlayerSnapshot,
};
pub use match_flow::{LegAdvance, MatchFlowService, ThrowApplied, TurnTarget};
pub use throw_processor::{ThrowProcessor, ThrowReport, ThrowStatus};
