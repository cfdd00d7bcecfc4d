// Fighter entity: kinematics, combat state, and the per-tick update

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::input::MoveIntent;
use crate::game::stage::StageGeometry;

use super::effects::SparkField;
use super::profile::CharacterProfile;
use super::state::FighterState;

/// Downward acceleration per airborne tick, before per-fighter scaling.
pub const GRAVITY: f32 = 0.9;

/// Terminal fall speed, before per-fighter scaling.
pub const MAX_FALL_SPEED: f32 = 18.0;

/// Fighter bounding box in world units.
pub const FIGHTER_WIDTH: f32 = 40.0;
pub const FIGHTER_HEIGHT: f32 = 60.0;

/// Stocks a fighter enters the match with.
pub const STARTING_STOCKS: u32 = 4;

/// Ground jump plus one mid-air jump.
pub const MAX_JUMPS: u32 = 2;

/// Ticks an attack hitbox stays live.
const ATTACK_FRAMES: u32 = 20;

/// Ticks a dodge lasts; invulnerability covers the whole window.
const DODGE_FRAMES: u32 = 18;

/// Hit stun never exceeds this many ticks.
const MAX_STUN_FRAMES: f32 = 60.0;

/// Invulnerability windows after taking a hit and after respawning.
const HIT_INVULN_FRAMES: u32 = 60;
const RESPAWN_INVULN_FRAMES: u32 = 120;

/// Horizontal velocity decay per tick with no direction held, and the
/// speed below which the fighter settles to a standstill.
const WALK_DAMPING: f32 = 0.85;
const WALK_STOP_THRESHOLD: f32 = 0.5;

/// Shield integrity bounds and per-tick drain/regeneration rates.
const SHIELD_MAX: f32 = 100.0;
const SHIELD_DRAIN_PER_TICK: f32 = 0.5;
const SHIELD_REGEN_PER_TICK: f32 = 0.3;

/// A blocked hit drains shield integrity at this multiple of the damage.
const SHIELD_CHIP_FACTOR: f32 = 2.0;

/// Damage accumulated before knockback doubles on a weight-1.0 fighter.
const KNOCKBACK_DAMAGE_SCALE: f32 = 80.0;

/// Stun ticks per point of accumulated damage.
const STUN_PER_DAMAGE: f32 = 1.5;

/// The requested attack move.
///
/// Every kind currently shares one hitbox shape, damage amount, and
/// duration; the parameter exists so movesets can differentiate later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttackKind {
    #[default]
    Neutral,
}

/// One combatant: position, velocity, combat state, and stocks.
///
/// Fields are private; the battle driver mutates a fighter exclusively
/// through the action methods and `update`, and observers read through
/// the accessors.
#[derive(Debug, Clone)]
pub struct Fighter {
    // Identity
    player: usize,
    profile: CharacterProfile,

    // Kinematics
    position: Vec2,
    velocity: Vec2,
    facing_right: bool,

    // Combat state
    damage: f32,
    stocks: u32,
    state: FighterState,
    shield_health: f32,
    jumps_left: u32,
    fast_falling: bool,
    invuln_frames: u32,
    sparks: SparkField,
}

impl Fighter {
    /// Create a fighter at a spawn point, facing right, with full stocks.
    pub fn new(player: usize, profile: CharacterProfile, spawn: Vec2) -> Self {
        Self {
            player,
            profile,
            position: spawn,
            velocity: Vec2::ZERO,
            facing_right: true,
            damage: 0.0,
            stocks: STARTING_STOCKS,
            state: FighterState::Idle,
            shield_health: SHIELD_MAX,
            jumps_left: MAX_JUMPS,
            fast_falling: false,
            invuln_frames: 0,
            sparks: SparkField::new(),
        }
    }

    // ---------------------------------------------------------------
    // Per-tick update
    // ---------------------------------------------------------------

    /// Advance the fighter one simulation tick against the given stage.
    ///
    /// Order matters and is fixed: timers, gravity, integration, ground
    /// collision, platform collision, blast-zone check, spark decay.
    pub fn update(&mut self, stage: &StageGeometry, rng: &mut impl Rng) {
        self.tick_timers();

        // Gravity applies strictly above ground level.
        if self.position.y < stage.ground_y() {
            let mut gravity = GRAVITY * self.profile.fall_speed;
            if self.fast_falling {
                gravity *= 2.0;
            }
            self.velocity.y += gravity;

            let terminal = MAX_FALL_SPEED * self.profile.fall_speed;
            if self.velocity.y > terminal {
                self.velocity.y = terminal;
            }
        }

        // Integrate. Stun freezes horizontal motion only.
        if !self.state.is_stunned() {
            self.position.x += self.velocity.x;
        }
        self.position.y += self.velocity.y;

        self.resolve_ground(stage);
        self.resolve_platforms(stage);

        if !stage.blast_zones().contains(self.position) && self.stocks > 0 {
            self.respawn(stage, rng);
        }

        self.sparks.decay();
    }

    /// Count down invulnerability and whatever timed state is active.
    /// A state whose countdown reaches zero settles back to `Idle`;
    /// a finished dodge also drops its invulnerability.
    fn tick_timers(&mut self) {
        self.invuln_frames = self.invuln_frames.saturating_sub(1);

        match &mut self.state {
            FighterState::Stunned { frames_left } | FighterState::Attacking { frames_left } => {
                *frames_left = frames_left.saturating_sub(1);
                if *frames_left == 0 {
                    self.state = FighterState::Idle;
                }
            }
            FighterState::Dodging { frames_left } => {
                *frames_left = frames_left.saturating_sub(1);
                if *frames_left == 0 {
                    self.state = FighterState::Idle;
                    self.invuln_frames = 0;
                }
            }
            _ => {}
        }
    }

    fn resolve_ground(&mut self, stage: &StageGeometry) {
        if self.position.y >= stage.ground_y() {
            self.position.y = stage.ground_y();
            self.land();
        }
    }

    /// One-way platform landing: only while moving downward, only when
    /// the horizontal extents overlap and the fighter's feet cross the
    /// platform top this tick.
    fn resolve_platforms(&mut self, stage: &StageGeometry) {
        for platform in stage.platforms() {
            let crossing_top = self.velocity.y > 0.0
                && crate::core::math::spans_overlap(
                    self.position.x,
                    FIGHTER_WIDTH,
                    platform.x,
                    platform.width,
                )
                && self.position.y < platform.top()
                && self.position.y + FIGHTER_HEIGHT >= platform.top();

            if crossing_top {
                self.position.y = platform.top() - FIGHTER_HEIGHT;
                self.land();
            }
        }
    }

    fn land(&mut self) {
        self.velocity.y = 0.0;
        self.jumps_left = MAX_JUMPS;
        self.fast_falling = false;
        if self.state.lands_to_idle() {
            self.state = FighterState::Idle;
        }
    }

    // ---------------------------------------------------------------
    // Actions
    // ---------------------------------------------------------------

    /// Horizontal movement request. Ignored while stunned.
    pub fn steer(&mut self, intent: MoveIntent) {
        if self.state.is_stunned() {
            return;
        }

        match intent {
            MoveIntent::Left => {
                self.velocity.x = -self.profile.speed;
                self.facing_right = false;
                if self.state == FighterState::Idle {
                    self.state = FighterState::Walking;
                }
            }
            MoveIntent::Right => {
                self.velocity.x = self.profile.speed;
                self.facing_right = true;
                if self.state == FighterState::Idle {
                    self.state = FighterState::Walking;
                }
            }
            MoveIntent::Stop => {
                self.velocity.x *= WALK_DAMPING;
                if self.velocity.x.abs() < WALK_STOP_THRESHOLD {
                    self.velocity.x = 0.0;
                    if self.state == FighterState::Walking {
                        self.state = FighterState::Idle;
                    }
                }
            }
        }
    }

    /// Jump if any jumps remain. Ignored while stunned.
    pub fn jump(&mut self) {
        if self.state.is_stunned() || self.jumps_left == 0 {
            return;
        }

        self.velocity.y = -self.profile.jump_power;
        self.jumps_left -= 1;
        self.state = FighterState::Jumping;
    }

    /// Start an attack. Ignored while stunned or mid-attack.
    pub fn attack(&mut self, _kind: AttackKind) {
        if self.state.is_stunned() || self.state.is_attacking() {
            return;
        }

        self.state = FighterState::Attacking {
            frames_left: ATTACK_FRAMES,
        };
    }

    /// Raise or release the shield. Ignored entirely while stunned;
    /// integrity regenerates only on ticks where the shield is down.
    pub fn shield(&mut self, active: bool) {
        if self.state.is_stunned() {
            return;
        }

        if active && self.shield_health > 0.0 {
            self.state = FighterState::Shielding;
            self.shield_health = (self.shield_health - SHIELD_DRAIN_PER_TICK).clamp(0.0, SHIELD_MAX);
        } else {
            if self.state.is_shielding() {
                self.state = FighterState::Idle;
            }
            self.shield_health = (self.shield_health + SHIELD_REGEN_PER_TICK).min(SHIELD_MAX);
        }
    }

    /// Sidestep with a short invulnerability window. Ignored while
    /// stunned or already dodging.
    pub fn dodge(&mut self) {
        if self.state.is_stunned() || self.state.is_dodging() {
            return;
        }

        self.state = FighterState::Dodging {
            frames_left: DODGE_FRAMES,
        };
        self.invuln_frames = DODGE_FRAMES;
    }

    /// Request a fast-fall. Only honored while airborne; the flag stays
    /// set until landing clears it.
    pub fn begin_fast_fall(&mut self, stage: &StageGeometry) {
        if self.position.y < stage.ground_y() {
            self.fast_falling = true;
        }
    }

    /// Receive a hit.
    ///
    /// Invulnerable fighters ignore it entirely. A shielding fighter
    /// ignores the knockback and stun but loses shield integrity at
    /// twice the damage amount. Otherwise the damage accumulates,
    /// velocity is set (not added) to the knockback scaled by the
    /// accumulated-damage multiplier, and the fighter is stunned.
    pub fn take_hit(&mut self, damage: f32, knockback: Vec2, rng: &mut impl Rng) {
        if self.is_invulnerable() || self.state.is_shielding() {
            if self.state.is_shielding() {
                self.shield_health =
                    (self.shield_health - damage * SHIELD_CHIP_FACTOR).clamp(0.0, SHIELD_MAX);
            }
            return;
        }

        self.damage = (self.damage + damage).max(0.0);

        // Accumulated damage amplifies knockback; weight resists it.
        let multiplier = 1.0 + (self.damage / KNOCKBACK_DAMAGE_SCALE) / self.profile.weight;
        self.velocity = knockback * multiplier;

        let stun = (self.damage * STUN_PER_DAMAGE).min(MAX_STUN_FRAMES) as u32;
        self.state = FighterState::Stunned { frames_left: stun };
        self.invuln_frames = HIT_INVULN_FRAMES;

        self.sparks.burst(self.center(), rng);
    }

    /// Lose a stock and, if any remain, re-enter at a random spawn point
    /// with damage cleared and a fresh invulnerability window. A fighter
    /// on its last stock stays eliminated where it fell.
    pub fn respawn(&mut self, stage: &StageGeometry, rng: &mut impl Rng) {
        self.stocks = self.stocks.saturating_sub(1);
        log::info!(
            "player {} ({}) lost a stock, {} remaining",
            self.player + 1,
            self.profile.name,
            self.stocks
        );

        if self.stocks == 0 {
            return;
        }

        if let Some(spawn) = stage.spawn_points().choose(rng) {
            self.position = *spawn;
        }
        self.velocity = Vec2::ZERO;
        self.damage = 0.0;
        self.state = FighterState::Idle;
        self.fast_falling = false;
        self.invuln_frames = RESPAWN_INVULN_FRAMES;
    }

    // ---------------------------------------------------------------
    // Observable state
    // ---------------------------------------------------------------

    pub fn player(&self) -> usize {
        self.player
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn color(&self) -> [u8; 3] {
        self.profile.color
    }

    /// Top-left corner of the bounding box.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::new(FIGHTER_WIDTH / 2.0, FIGHTER_HEIGHT / 2.0)
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn state(&self) -> FighterState {
        self.state
    }

    /// Accumulated damage percent.
    pub fn damage(&self) -> f32 {
        self.damage
    }

    pub fn stocks(&self) -> u32 {
        self.stocks
    }

    pub fn shield_health(&self) -> f32 {
        self.shield_health
    }

    pub fn jumps_left(&self) -> u32 {
        self.jumps_left
    }

    pub fn is_fast_falling(&self) -> bool {
        self.fast_falling
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln_frames > 0
    }

    /// Out of stocks; excluded from respawn and from winning.
    pub fn is_eliminated(&self) -> bool {
        self.stocks == 0
    }

    pub fn sparks(&self) -> &SparkField {
        &self.sparks
    }
}
