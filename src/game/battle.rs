// Battle driver: wires input intents, physics, and combat into one tick
//
// The driver owns the stage, the fighters, and the match RNG. Each tick
// while active it translates intents into fighter actions, advances every
// fighter's physics, resolves combat, and checks for the end of the
// match. A paused battle skips the whole pipeline.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::input::InputIntent;

use super::combat;
use super::fighters::{AttackKind, CharacterProfile, Fighter};
use super::stage::StageGeometry;
use super::MatchSetupError;

/// Coarse lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Assembled but not yet running
    Setup,
    /// Simulating ticks
    Active,
    /// Somebody ran out of stocks
    Ended,
}

/// A running match: stage, fighters, and tick pipeline.
pub struct Battle {
    stage: StageGeometry,
    fighters: Vec<Fighter>,
    phase: MatchPhase,
    elapsed_ticks: u64,
    paused: bool,
    winner: Option<usize>,
    rng: StdRng,
}

impl Battle {
    /// Assemble a match from a stage and one profile per player.
    ///
    /// The seed drives every random decision in the match (respawn
    /// points, spark sizes); replaying with the same seed and intents
    /// reproduces the match exactly.
    pub fn new(
        stage: StageGeometry,
        profiles: Vec<CharacterProfile>,
        seed: u64,
    ) -> Result<Self, MatchSetupError> {
        if profiles.len() < 2 {
            return Err(MatchSetupError::NotEnoughFighters(profiles.len()));
        }
        if stage.spawn_points().len() < profiles.len() {
            return Err(MatchSetupError::NotEnoughSpawnPoints {
                available: stage.spawn_points().len(),
                required: profiles.len(),
            });
        }

        let fighters = profiles
            .into_iter()
            .enumerate()
            .map(|(player, profile)| Fighter::new(player, profile, stage.spawn_points()[player]))
            .collect();

        Ok(Self {
            stage,
            fighters,
            phase: MatchPhase::Setup,
            elapsed_ticks: 0,
            paused: false,
            winner: None,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Leave setup and begin simulating.
    pub fn start(&mut self) {
        if self.phase == MatchPhase::Setup {
            self.phase = MatchPhase::Active;
            log::info!(
                "match started on {}: {}",
                self.stage.name(),
                self.fighters
                    .iter()
                    .map(Fighter::name)
                    .collect::<Vec<_>>()
                    .join(" vs ")
            );
        }
    }

    /// Advance the match one tick.
    ///
    /// `intents` holds one entry per fighter in player order; missing
    /// entries act as an idle pad (no buttons, no direction). Does
    /// nothing unless the match is active and unpaused.
    pub fn tick(&mut self, intents: &[InputIntent]) {
        if self.paused || self.phase != MatchPhase::Active {
            return;
        }

        for (player, fighter) in self.fighters.iter_mut().enumerate() {
            let intent = intents.get(player).copied().unwrap_or_default();
            apply_intent(fighter, intent, &self.stage);
        }

        for fighter in &mut self.fighters {
            fighter.update(&self.stage, &mut self.rng);
        }

        combat::resolve_hits(&mut self.fighters, &mut self.rng);

        self.check_for_match_end();
        self.elapsed_ticks += 1;
    }

    fn check_for_match_end(&mut self) {
        if !self.fighters.iter().any(Fighter::is_eliminated) {
            return;
        }

        self.phase = MatchPhase::Ended;
        self.winner = self
            .fighters
            .iter()
            .find(|fighter| !fighter.is_eliminated())
            .map(Fighter::player);

        match self.winner {
            Some(player) => log::info!(
                "match over after {} ticks, player {} wins",
                self.elapsed_ticks,
                player + 1
            ),
            None => log::info!("match over after {} ticks, draw", self.elapsed_ticks),
        }
    }

    /// Gate the tick pipeline without touching any match state.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            self.paused = paused;
            log::info!("battle {}", if paused { "paused" } else { "resumed" });
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Ticks simulated since the match became active.
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    /// The surviving player's index once the match has ended. `None`
    /// while running, or on the degenerate simultaneous-elimination
    /// draw.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn stage(&self) -> &StageGeometry {
        &self.stage
    }

    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    pub fn fighters_mut(&mut self) -> &mut [Fighter] {
        &mut self.fighters
    }
}

/// Translate one fighter's intent into action calls, in the fixed
/// order movement, jump, fast-fall, attack, shield.
fn apply_intent(fighter: &mut Fighter, intent: InputIntent, stage: &StageGeometry) {
    fighter.steer(intent.movement);
    if intent.jump {
        fighter.jump();
    }
    if intent.fast_fall {
        fighter.begin_fast_fall(stage);
    }
    if intent.attack {
        fighter.attack(AttackKind::Neutral);
    }
    fighter.shield(intent.shield);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::MoveIntent;
    use crate::game::fighters::{FighterState, STARTING_STOCKS};
    use crate::game::stage::BlastZones;
    use glam::Vec2;

    fn arena() -> StageGeometry {
        StageGeometry::new(
            "Arena",
            500.0,
            Vec::new(),
            BlastZones::new(-100.0, 1124.0, -200.0, 700.0),
            vec![Vec2::new(400.0, 300.0), Vec2::new(600.0, 300.0)],
        )
    }

    /// Stage whose right blast zone sits just past player 2's spawn, so
    /// anyone walking right falls out quickly.
    fn cliff_stage() -> StageGeometry {
        StageGeometry::new(
            "Cliff",
            500.0,
            Vec::new(),
            BlastZones::new(-100.0, 650.0, -200.0, 700.0),
            vec![Vec2::new(400.0, 300.0), Vec2::new(600.0, 300.0)],
        )
    }

    fn two_profiles() -> Vec<CharacterProfile> {
        vec![CharacterProfile::default(), CharacterProfile::default()]
    }

    fn active_battle(stage: StageGeometry) -> Battle {
        let mut battle = Battle::new(stage, two_profiles(), 7).unwrap();
        battle.start();
        battle
    }

    #[test]
    fn test_setup_requires_two_fighters() {
        let result = Battle::new(arena(), vec![CharacterProfile::default()], 7);
        assert!(matches!(
            result,
            Err(MatchSetupError::NotEnoughFighters(1))
        ));
    }

    #[test]
    fn test_setup_requires_enough_spawn_points() {
        let stage = StageGeometry::new(
            "Cramped",
            500.0,
            Vec::new(),
            BlastZones::new(-100.0, 1124.0, -200.0, 700.0),
            vec![Vec2::new(400.0, 300.0)],
        );
        let result = Battle::new(stage, two_profiles(), 7);
        assert!(matches!(
            result,
            Err(MatchSetupError::NotEnoughSpawnPoints {
                available: 1,
                required: 2,
            })
        ));
    }

    #[test]
    fn test_fighters_start_on_their_spawn_points() {
        let battle = Battle::new(arena(), two_profiles(), 7).unwrap();
        assert_eq!(battle.phase(), MatchPhase::Setup);
        assert_eq!(battle.fighters()[0].position(), Vec2::new(400.0, 300.0));
        assert_eq!(battle.fighters()[1].position(), Vec2::new(600.0, 300.0));
    }

    #[test]
    fn test_tick_is_inert_during_setup() {
        let mut battle = Battle::new(arena(), two_profiles(), 7).unwrap();
        battle.tick(&[InputIntent::idle(), InputIntent::idle()]);
        assert_eq!(battle.elapsed_ticks(), 0);
        assert_eq!(battle.fighters()[0].position(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_tick_advances_physics() {
        let mut battle = active_battle(arena());
        battle.tick(&[InputIntent::idle(), InputIntent::idle()]);

        assert_eq!(battle.elapsed_ticks(), 1);
        // Spawned in mid-air, both fighters start falling
        assert!(battle.fighters()[0].position().y > 300.0);
        assert!(battle.fighters()[1].position().y > 300.0);
    }

    #[test]
    fn test_intents_drive_fighter_actions() {
        let mut battle = active_battle(arena());
        let jump = InputIntent {
            jump: true,
            ..InputIntent::idle()
        };
        battle.tick(&[jump, InputIntent::moving(MoveIntent::Left)]);

        assert_eq!(
            battle.fighters()[0].jumps_left(),
            crate::game::fighters::MAX_JUMPS - 1
        );
        assert!(!battle.fighters()[1].facing_right());
    }

    #[test]
    fn test_missing_intents_act_as_idle() {
        let mut battle = active_battle(arena());
        battle.fighters_mut()[1].steer(MoveIntent::Right);

        // Only player 1 gets an intent; player 2's pad is idle and damps
        for _ in 0..40 {
            battle.tick(&[InputIntent::idle()]);
        }
        assert_eq!(battle.fighters()[1].velocity().x, 0.0);
    }

    #[test]
    fn test_pause_gates_the_pipeline() {
        let mut battle = active_battle(arena());
        battle.set_paused(true);

        battle.tick(&[InputIntent::idle(), InputIntent::idle()]);
        assert_eq!(battle.elapsed_ticks(), 0);
        assert_eq!(battle.fighters()[0].position(), Vec2::new(400.0, 300.0));

        battle.set_paused(false);
        battle.tick(&[InputIntent::idle(), InputIntent::idle()]);
        assert_eq!(battle.elapsed_ticks(), 1);
    }

    #[test]
    fn test_combat_runs_after_physics() {
        let mut battle = active_battle(arena());

        // Walk the fighters into range, then have player 1 swing
        let approach = [
            InputIntent::moving(MoveIntent::Right),
            InputIntent::moving(MoveIntent::Left),
        ];
        for _ in 0..12 {
            battle.tick(&approach);
        }

        let swing = [
            InputIntent {
                attack: true,
                ..InputIntent::idle()
            },
            InputIntent::idle(),
        ];
        battle.tick(&swing);

        assert!(battle.fighters()[0].state().is_attacking());
        assert_eq!(battle.fighters()[1].damage(), combat::ATTACK_DAMAGE);
        assert!(battle.fighters()[1].state().is_stunned());
    }

    #[test]
    fn test_stock_exhaustion_ends_the_match() {
        let mut battle = active_battle(cliff_stage());

        // Player 2 walks right off the stage forever; every respawn
        // marches straight back out
        let intents = [
            InputIntent::idle(),
            InputIntent::moving(MoveIntent::Right),
        ];
        for _ in 0..4000 {
            if battle.phase() == MatchPhase::Ended {
                break;
            }
            battle.tick(&intents);
        }

        assert_eq!(battle.phase(), MatchPhase::Ended);
        assert_eq!(battle.fighters()[1].stocks(), 0);
        assert_eq!(battle.winner(), Some(0));
    }

    #[test]
    fn test_ended_match_stops_ticking() {
        let mut battle = active_battle(cliff_stage());
        let intents = [
            InputIntent::idle(),
            InputIntent::moving(MoveIntent::Right),
        ];
        while battle.phase() != MatchPhase::Ended {
            battle.tick(&intents);
            assert!(battle.elapsed_ticks() < 4000, "match never ended");
        }

        let ticks = battle.elapsed_ticks();
        battle.tick(&intents);
        assert_eq!(battle.elapsed_ticks(), ticks);
    }

    #[test]
    fn test_winner_keeps_their_stocks() {
        let mut battle = active_battle(cliff_stage());
        let intents = [
            InputIntent::idle(),
            InputIntent::moving(MoveIntent::Right),
        ];
        while battle.phase() != MatchPhase::Ended {
            battle.tick(&intents);
        }
        assert_eq!(battle.fighters()[0].stocks(), STARTING_STOCKS);
    }

    #[test]
    fn test_same_seed_and_script_replays_identically() {
        let script = [
            InputIntent::moving(MoveIntent::Right),
            InputIntent::moving(MoveIntent::Left),
        ];

        let mut first = active_battle(cliff_stage());
        let mut second = active_battle(cliff_stage());

        for _ in 0..600 {
            first.tick(&script);
            second.tick(&script);
        }

        for (a, b) in first.fighters().iter().zip(second.fighters()) {
            assert_eq!(a.position(), b.position());
            assert_eq!(a.velocity(), b.velocity());
            assert_eq!(a.damage(), b.damage());
            assert_eq!(a.stocks(), b.stocks());
        }
        assert_eq!(first.phase(), second.phase());
    }

    #[test]
    fn test_shield_intent_raises_and_drops() {
        let mut battle = active_battle(arena());
        let guard = [
            InputIntent {
                shield: true,
                ..InputIntent::idle()
            },
            InputIntent::idle(),
        ];
        battle.tick(&guard);
        assert_eq!(battle.fighters()[0].state(), FighterState::Shielding);

        battle.tick(&[InputIntent::idle(), InputIntent::idle()]);
        assert_ne!(battle.fighters()[0].state(), FighterState::Shielding);
    }
}
