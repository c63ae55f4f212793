pub mod days;
pub mod utils;

pub use utils::error::{PuzzleError, Result};
