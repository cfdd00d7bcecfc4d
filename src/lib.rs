// Stockfall: a stock-based 2D platform-fighter simulation core.
//
// The crate simulates two-player matches: fighter kinematics, the combat
// state machine, collision against stage geometry, and the damage/knockback
// model. Everything advances in fixed simulation ticks. Rendering, audio,
// menus, and input devices live outside this crate; the embedding layer
// feeds an `InputIntent` per fighter per tick and reads fighter and match
// state back out for display.

pub mod core;
pub mod engine;
pub mod game;

pub use engine::input::{InputIntent, MoveIntent};
pub use game::battle::{Battle, MatchPhase};
pub use game::fighters::{CharacterProfile, Fighter, FighterState};
pub use game::stage::StageGeometry;
