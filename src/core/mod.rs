pub mod error;
pub mod types;

pub use error::{HeroError, Result};
pub use types::{Faction, Role};
