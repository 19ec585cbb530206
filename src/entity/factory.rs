//! Faction hero factories
//!
//! Each faction has its own factory that fills in starting health. Callers
//! pick a factory once and then recruit any role through it without knowing
//! which faction they are talking to.

use crate::core::error::Result;
use crate::core::types::{Faction, Role};
use crate::entity::hero::Hero;

// === STARTING HEALTH ===

const HUMAN_MAGE_HEALTH: i64 = 80;
const HUMAN_WARRIOR_HEALTH: i64 = 120;
const HUMAN_ARCHER_HEALTH: i64 = 90;

const ORC_MAGE_HEALTH: i64 = 70;
const ORC_WARRIOR_HEALTH: i64 = 150;
const ORC_ARCHER_HEALTH: i64 = 85;

/// Starting health for a (faction, role) pair
pub fn starting_health(faction: Faction, role: Role) -> i64 {
    match (faction, role) {
        (Faction::Human, Role::Mage) => HUMAN_MAGE_HEALTH,
        (Faction::Human, Role::Warrior) => HUMAN_WARRIOR_HEALTH,
        (Faction::Human, Role::Archer) => HUMAN_ARCHER_HEALTH,
        (Faction::Orc, Role::Mage) => ORC_MAGE_HEALTH,
        (Faction::Orc, Role::Warrior) => ORC_WARRIOR_HEALTH,
        (Faction::Orc, Role::Archer) => ORC_ARCHER_HEALTH,
    }
}

/// Creates the family of heroes belonging to one faction
pub trait HeroFactory {
    fn faction(&self) -> Faction;

    fn create_mage(&self, name: &str) -> Result<Hero>;

    fn create_warrior(&self, name: &str) -> Result<Hero>;

    fn create_archer(&self, name: &str) -> Result<Hero>;

    fn starting_health(&self, role: Role) -> i64 {
        starting_health(self.faction(), role)
    }

    fn create(&self, role: Role, name: &str) -> Result<Hero> {
        match role {
            Role::Mage => self.create_mage(name),
            Role::Warrior => self.create_warrior(name),
            Role::Archer => self.create_archer(name),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HumanHeroFactory;

impl HeroFactory for HumanHeroFactory {
    fn faction(&self) -> Faction {
        Faction::Human
    }

    fn create_mage(&self, name: &str) -> Result<Hero> {
        Hero::new(name, Faction::Human, Role::Mage, HUMAN_MAGE_HEALTH)
    }

    fn create_warrior(&self, name: &str) -> Result<Hero> {
        Hero::new(name, Faction::Human, Role::Warrior, HUMAN_WARRIOR_HEALTH)
    }

    fn create_archer(&self, name: &str) -> Result<Hero> {
        Hero::new(name, Faction::Human, Role::Archer, HUMAN_ARCHER_HEALTH)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrcHeroFactory;

impl HeroFactory for OrcHeroFactory {
    fn faction(&self) -> Faction {
        Faction::Orc
    }

    fn create_mage(&self, name: &str) -> Result<Hero> {
        Hero::new(name, Faction::Orc, Role::Mage, ORC_MAGE_HEALTH)
    }

    fn create_warrior(&self, name: &str) -> Result<Hero> {
        Hero::new(name, Faction::Orc, Role::Warrior, ORC_WARRIOR_HEALTH)
    }

    fn create_archer(&self, name: &str) -> Result<Hero> {
        Hero::new(name, Faction::Orc, Role::Archer, ORC_ARCHER_HEALTH)
    }
}

/// Factory for the given faction
pub fn factory_for(faction: Faction) -> Box<dyn HeroFactory> {
    match faction {
        Faction::Human => Box::new(HumanHeroFactory),
        Faction::Orc => Box::new(OrcHeroFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::HeroError;

    #[test]
    fn test_human_health_table() {
        let factory = HumanHeroFactory;
        assert_eq!(factory.create_mage("Elena").unwrap().health(), 80);
        assert_eq!(factory.create_warrior("Borislav").unwrap().health(), 120);
        assert_eq!(factory.create_archer("Ilya").unwrap().health(), 90);
    }

    #[test]
    fn test_orc_health_table() {
        let factory = OrcHeroFactory;
        assert_eq!(factory.create_mage("Gor'uk").unwrap().health(), 70);
        assert_eq!(factory.create_warrior("Thrag").unwrap().health(), 150);
        assert_eq!(factory.create_archer("Rag").unwrap().health(), 85);
    }

    #[test]
    fn test_factory_stamps_faction_and_role() {
        for faction in Faction::ALL {
            let factory = factory_for(faction);
            assert_eq!(factory.faction(), faction);
            for role in Role::ALL {
                let hero = factory.create(role, "Someone").unwrap();
                assert_eq!(hero.faction(), faction);
                assert_eq!(hero.role(), role);
                assert_eq!(i64::from(hero.health()), factory.starting_health(role));
            }
        }
    }

    #[test]
    fn test_blank_name_rejected_for_every_role() {
        for faction in Faction::ALL {
            let factory = factory_for(faction);
            for role in Role::ALL {
                let err = factory.create(role, "  ").unwrap_err();
                assert!(matches!(err, HeroError::BlankName));
            }
        }
    }

    #[test]
    fn test_table_health_is_positive() {
        for faction in Faction::ALL {
            for role in Role::ALL {
                assert!(starting_health(faction, role) > 0);
            }
        }
    }
}
