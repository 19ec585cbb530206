//! Hero value type
//!
//! A hero is validated once at construction and never changes afterwards.
//! Combat flavour text comes from the (faction, role) pair; health shown in
//! the action line is always the starting value.

use serde::Serialize;
use std::io::Write;

use crate::core::error::{HeroError, Result};
use crate::core::types::{Faction, Role};

/// Flavour phrase for a hero's action
pub fn action_phrase(faction: Faction, role: Role) -> &'static str {
    match (faction, role) {
        (Faction::Human, Role::Mage) => "casts Fireball",
        (Faction::Human, Role::Warrior) => "strikes with a sword",
        (Faction::Human, Role::Archer) => "shoots an arrow",
        (Faction::Orc, Role::Mage) => "curses the enemy",
        (Faction::Orc, Role::Warrior) => "performs a brutal strike",
        (Faction::Orc, Role::Archer) => "fires a heavy bolt",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    name: String,
    faction: Faction,
    role: Role,
    health: u32,
}

impl Hero {
    /// Build a hero, rejecting blank names and non-positive health
    pub fn new(
        name: impl Into<String>,
        faction: Faction,
        role: Role,
        health: i64,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HeroError::BlankName);
        }
        let health = u32::try_from(health)
            .ok()
            .filter(|h| *h > 0)
            .ok_or(HeroError::NonPositiveHealth(health))?;

        Ok(Self {
            name,
            faction,
            role,
            health,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faction(&self) -> Faction {
        self.faction
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    /// The line this hero prints when it acts
    pub fn action_line(&self) -> String {
        format!(
            "{} ({} {}) {}! - Health: {}",
            self.name,
            self.faction,
            self.role,
            action_phrase(self.faction, self.role),
            self.health
        )
    }

    /// Perform the hero's action, writing one newline-terminated line
    pub fn act<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.action_line())?;
        Ok(())
    }

    pub fn cast_spell<W: Write>(&self, out: &mut W) -> Result<()> {
        self.act_as(Role::Mage, out)
    }

    pub fn strike<W: Write>(&self, out: &mut W) -> Result<()> {
        self.act_as(Role::Warrior, out)
    }

    pub fn shoot<W: Write>(&self, out: &mut W) -> Result<()> {
        self.act_as(Role::Archer, out)
    }

    fn act_as<W: Write>(&self, expected: Role, out: &mut W) -> Result<()> {
        if self.role != expected {
            return Err(HeroError::RoleMismatch {
                expected,
                actual: self.role,
            });
        }
        self.act(out)
    }
}
