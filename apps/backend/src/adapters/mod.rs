//! SeaORM adapters. Functions are generic over `ConnectionTrait` and return
//! `DbErr`; the repos layer maps errors to `DomainError`.

pub mod games_sea;
pub mod history_sea;
pub mod players_sea;
pub mod profiles_sea;
pub mod throws_sea;
