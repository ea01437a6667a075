pub mod games;
pub mod legs;
pub mod match_sets;
pub mod players;
pub mod profiles;
pub mod throws;

pub use games::Entity as Games;
pub use games::Model as Game;
pub use legs::Entity as Legs;
pub use legs::Model as Leg;
pub use match_sets::Entity as MatchSets;
pub use match_sets::Model as MatchSet;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use profiles::Entity as Profiles;
pub use profiles::Model as Profile;
pub use throws::Entity as Throws;
pub use throws::Model as Throw;
