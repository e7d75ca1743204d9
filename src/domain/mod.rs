pub mod models;
pub mod outcome;

pub use models::{PlayerStanding, StandingsResult};
pub use outcome::{classify, MatchOutcome};
