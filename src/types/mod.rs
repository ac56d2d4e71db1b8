pub mod errors;
pub mod game_id;

pub use errors::{ExtensionError, ExtensionResult};
pub use game_id::GameId;
