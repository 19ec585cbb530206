pub mod factory;
pub mod hero;

pub use factory::{factory_for, starting_health, HeroFactory, HumanHeroFactory, OrcHeroFactory};
pub use hero::Hero;
