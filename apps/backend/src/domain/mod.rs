//! Domain layer: pure scoring logic, no storage.

pub mod checkout;
pub mod rules;
pub mod state;
pub mod throws;
pub mod transition;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_checkout;
#[cfg(test)]
mod tests_props_transition;
#[cfg(test)]
mod tests_transition;

// Re-exports for ergonomics
pub use checkout::suggest_checkout;
pub use rules::{FirstThrowMethod, GameMode, MatchRules};
pub use state::{MatchState, PlayerState, Seat};
pub use throws::{validate_raw, validate_throw, Dart, Multiplier, RawThrow};
pub use transition::{HistoryEffect, ThrowOutcome, Transition};
