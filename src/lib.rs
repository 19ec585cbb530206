//! Hero Factory - faction factories for Human and Orc heroes

pub mod core;
pub mod entity;
pub mod muster;
pub mod roster;
