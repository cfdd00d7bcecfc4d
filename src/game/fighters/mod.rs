// Fighter entities
//
// Everything that makes up one combatant:
// - Static character profile (stats)
// - State machine tag for fighter behavior
// - Kinematics, combat state, and the per-tick update
// - Cosmetic hit sparks

mod effects;
mod fighter;
mod profile;
mod state;

// Re-export commonly used types
pub use effects::{HitSpark, SparkField};
pub use fighter::{
    AttackKind, Fighter, FIGHTER_HEIGHT, FIGHTER_WIDTH, GRAVITY, MAX_FALL_SPEED, MAX_JUMPS,
    STARTING_STOCKS,
};
pub use profile::CharacterProfile;
pub use state::FighterState;
