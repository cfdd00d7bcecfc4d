// Fighter state machine

/// What a fighter is doing this tick.
///
/// The tag is a single field on the fighter, so mutually exclusive states
/// cannot coexist, and the timed states carry their own countdown: there
/// is no attack timer left ticking after the fighter has stopped
/// attacking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FighterState {
    /// Standing still on ground
    Idle,
    /// Moving horizontally on ground
    Walking,
    /// Airborne after a jump impulse
    Jumping,
    /// Airborne and descending
    Falling,
    /// Swinging; the hitbox is live until the countdown runs out
    Attacking { frames_left: u32 },
    /// Hit-stunned; horizontal control is frozen until the countdown runs out
    Stunned { frames_left: u32 },
    /// Holding shield; integrity drains while held
    Shielding,
    /// Evading, invulnerable until the countdown runs out
    Dodging { frames_left: u32 },
}

impl Default for FighterState {
    fn default() -> Self {
        Self::Idle
    }
}

impl FighterState {
    /// Whether the fighter has an active attack hitbox.
    pub fn is_attacking(&self) -> bool {
        matches!(self, Self::Attacking { .. })
    }

    /// Whether the fighter is hit-stunned. Stunned fighters ignore every
    /// action request and keep their horizontal position frozen.
    pub fn is_stunned(&self) -> bool {
        matches!(self, Self::Stunned { .. })
    }

    pub fn is_shielding(&self) -> bool {
        matches!(self, Self::Shielding)
    }

    pub fn is_dodging(&self) -> bool {
        matches!(self, Self::Dodging { .. })
    }

    /// Whether landing should settle this state back to `Idle`.
    pub fn lands_to_idle(&self) -> bool {
        matches!(self, Self::Jumping | Self::Falling)
    }

    /// A stable lowercase name for HUD and log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walking => "walking",
            Self::Jumping => "jumping",
            Self::Falling => "falling",
            Self::Attacking { .. } => "attacking",
            Self::Stunned { .. } => "stunned",
            Self::Shielding => "shielding",
            Self::Dodging { .. } => "dodging",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(FighterState::default(), FighterState::Idle);
    }

    #[test]
    fn test_state_predicates() {
        assert!(FighterState::Attacking { frames_left: 20 }.is_attacking());
        assert!(FighterState::Stunned { frames_left: 5 }.is_stunned());
        assert!(FighterState::Shielding.is_shielding());
        assert!(FighterState::Dodging { frames_left: 10 }.is_dodging());
        assert!(!FighterState::Idle.is_attacking());
        assert!(!FighterState::Walking.is_stunned());
    }

    #[test]
    fn test_airborne_states_land_to_idle() {
        assert!(FighterState::Jumping.lands_to_idle());
        assert!(FighterState::Falling.lands_to_idle());
        assert!(!FighterState::Walking.lands_to_idle());
        assert!(!FighterState::Attacking { frames_left: 3 }.lands_to_idle());
    }

    #[test]
    fn test_state_names() {
        assert_eq!(FighterState::Idle.name(), "idle");
        assert_eq!(FighterState::Attacking { frames_left: 1 }.name(), "attacking");
        assert_eq!(FighterState::Stunned { frames_left: 1 }.name(), "stunned");
    }

    #[test]
    fn test_timed_states_compare_by_payload() {
        assert_eq!(
            FighterState::Stunned { frames_left: 5 },
            FighterState::Stunned { frames_left: 5 }
        );
        assert_ne!(
            FighterState::Stunned { frames_left: 5 },
            FighterState::Stunned { frames_left: 4 }
        );
    }
}
