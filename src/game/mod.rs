// Game simulation: stage geometry, fighters, combat, and the battle driver

pub mod battle;
pub mod combat;
pub mod fighters;
pub mod stage;

// Re-export commonly used types
pub use battle::{Battle, MatchPhase};
pub use combat::{resolve_hits, Hitbox};
pub use fighters::{CharacterProfile, Fighter, FighterState};
pub use stage::{BlastZones, Platform, StageGeometry};

/// Errors raised while assembling a match
#[derive(Debug, thiserror::Error)]
pub enum MatchSetupError {
    #[error("a match requires at least two fighters, got {0}")]
    NotEnoughFighters(usize),

    #[error("stage provides {available} spawn points but {required} are required")]
    NotEnoughSpawnPoints { available: usize, required: usize },
}
