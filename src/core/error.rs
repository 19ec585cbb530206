use thiserror::Error;

use crate::core::types::Role;

#[derive(Error, Debug)]
pub enum HeroError {
    #[error("Hero name must not be blank")]
    BlankName,

    #[error("Hero health must be positive, got {0}")]
    NonPositiveHealth(i64),

    #[error("{actual} cannot {}", .expected.action_name())]
    RoleMismatch { expected: Role, actual: Role },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster parse error: {0}")]
    RosterParse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeroError>;
