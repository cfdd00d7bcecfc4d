// Engine-level plumbing: frame timing and the input-intent contract

pub mod game_loop;
pub mod input;

pub use game_loop::FrameClock;
pub use input::{InputIntent, MoveIntent};
