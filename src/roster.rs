//! Party roster loaded from TOML
//!
//! A roster lists who to recruit and in what order. Without a roster file the
//! default party is used: one hero of each role per faction, Human first.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{HeroError, Result};
use crate::core::types::{Faction, Role};
use crate::entity::{factory_for, Hero};

/// One hero to recruit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub faction: Faction,
    pub role: Role,
    pub name: String,
}

impl RosterEntry {
    pub fn new(faction: Faction, role: Role, name: impl Into<String>) -> Self {
        Self {
            faction,
            role,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub heroes: Vec<RosterEntry>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            heroes: vec![
                RosterEntry::new(Faction::Human, Role::Mage, "Elena"),
                RosterEntry::new(Faction::Human, Role::Warrior, "Borislav"),
                RosterEntry::new(Faction::Human, Role::Archer, "Ilya"),
                RosterEntry::new(Faction::Orc, Role::Mage, "Gor'uk"),
                RosterEntry::new(Faction::Orc, Role::Warrior, "Thrag"),
                RosterEntry::new(Faction::Orc, Role::Archer, "Rag"),
            ],
        }
    }
}

impl Roster {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HeroError::RosterParse(e.to_string()))
    }

    /// Load a roster file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let roster = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded {} roster entries from {:?}", roster.len(), path);
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Build every hero through its faction's factory, stopping at the first failure
    pub fn recruit(&self) -> Result<Vec<Hero>> {
        self.heroes
            .iter()
            .map(|entry| {
                let hero = factory_for(entry.faction).create(entry.role, &entry.name)?;
                tracing::debug!(
                    name = hero.name(),
                    faction = %hero.faction(),
                    role = %hero.role(),
                    health = hero.health(),
                    "Recruited hero"
                );
                Ok(hero)
            })
            .collect()
    }
}
