//! Game session logic
//!
//! Attempt validation and the interactive game loop.

mod session;
mod validate;

pub use session::{play_game, read_attempt};
pub use validate::{ValidationError, validate};
