// Cross-fighter hit detection and knockback application
//
// Runs once per tick, after every fighter's physics update, so hits are
// always tested against post-movement positions.

use glam::Vec2;
use rand::Rng;

use crate::core::math::spans_overlap;

use super::fighters::{Fighter, FIGHTER_WIDTH};

/// Side length of the square attack hitbox.
pub const HITBOX_SIZE: f32 = 60.0;

/// Damage dealt by a connecting attack.
pub const ATTACK_DAMAGE: f32 = 12.0;

/// Knockback impulse of a connecting attack; x is mirrored by facing.
pub const KNOCKBACK_X: f32 = 10.0;
pub const KNOCKBACK_Y: f32 = -8.0;

/// The active attack region, flush with the attacker's leading edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// The hitbox a fighter's current attack sweeps, if it is attacking.
pub fn active_hitbox(attacker: &Fighter) -> Option<Hitbox> {
    if !attacker.state().is_attacking() {
        return None;
    }

    let x = if attacker.facing_right() {
        attacker.position().x + FIGHTER_WIDTH
    } else {
        attacker.position().x - HITBOX_SIZE
    };

    Some(Hitbox {
        x,
        y: attacker.position().y,
        size: HITBOX_SIZE,
    })
}

/// Whether a hitbox connects with a defender: horizontal extents must
/// overlap and the vertical center distance must stay under the hitbox
/// size (fighters share one body height, so top distance equals center
/// distance).
fn strikes(hitbox: &Hitbox, defender: &Fighter) -> bool {
    spans_overlap(defender.position().x, FIGHTER_WIDTH, hitbox.x, hitbox.size)
        && (defender.position().y - hitbox.y).abs() < HITBOX_SIZE
}

/// Detect and apply every hit for this tick.
///
/// Fighters are scanned as attackers in index order and hits land
/// immediately: a defender stunned by an earlier attacker loses its own
/// still-pending attack this tick. An attacker overlapping several
/// defenders hits each of them independently; there is no
/// de-duplication.
pub fn resolve_hits(fighters: &mut [Fighter], rng: &mut impl Rng) {
    for attacker in 0..fighters.len() {
        let Some(hitbox) = active_hitbox(&fighters[attacker]) else {
            continue;
        };
        let direction = if fighters[attacker].facing_right() {
            1.0
        } else {
            -1.0
        };
        let knockback = Vec2::new(KNOCKBACK_X * direction, KNOCKBACK_Y);

        for defender in 0..fighters.len() {
            if defender == attacker {
                continue;
            }
            if strikes(&hitbox, &fighters[defender]) {
                fighters[defender].take_hit(ATTACK_DAMAGE, knockback, rng);
            }
        }
    }
}
