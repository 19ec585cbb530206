//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Faction a hero is recruited from
///
/// The faction decides which factory builds the hero, and with it the
/// starting health table and the flavour of each action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Faction {
    Human,
    Orc,
}

impl Faction {
    /// All factions in muster order
    pub const ALL: [Faction; 2] = [Faction::Human, Faction::Orc];

    pub fn name(&self) -> &'static str {
        match self {
            Faction::Human => "Human",
            Faction::Orc => "Orc",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Faction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Faction::Human),
            "orc" => Ok(Faction::Orc),
            other => Err(format!("Unknown faction: {}", other)),
        }
    }
}

impl TryFrom<String> for Faction {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Hero archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Role {
    Mage,
    Warrior,
    Archer,
}

impl Role {
    /// All roles in muster order
    pub const ALL: [Role; 3] = [Role::Mage, Role::Warrior, Role::Archer];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Mage => "Mage",
            Role::Warrior => "Warrior",
            Role::Archer => "Archer",
        }
    }

    /// Generic name of the single action this role performs
    pub fn action_name(&self) -> &'static str {
        match self {
            Role::Mage => "cast",
            Role::Warrior => "strike",
            Role::Archer => "shoot",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mage" => Ok(Role::Mage),
            "warrior" => Ok(Role::Warrior),
            "archer" => Ok(Role::Archer),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
