//! Repository functions returning domain models and `DomainError`.

pub mod games;
pub mod history;
pub mod players;
pub mod profiles;
pub mod throws;
