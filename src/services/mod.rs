pub mod cancel;
pub mod loader;
pub mod server;

pub use cancel::{cancel_pair, CancelHandle, CancelToken};
pub use loader::{LoadOutcome, StandingsLoader};
pub use server::ServerService;
