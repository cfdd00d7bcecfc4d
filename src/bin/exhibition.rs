//! Headless exhibition match
//!
//! Drives a scripted two-player match to exercise the simulation without
//! a window: the choreography below plays the role of the input layer,
//! and log output plays the role of the HUD.

use anyhow::Result;
use clap::Parser;
use log::info;

use stockfall::engine::game_loop::FrameClock;
use stockfall::game::stage::{BlastZones, Platform, StageGeometry};
use stockfall::{Battle, CharacterProfile, Fighter, InputIntent, MatchPhase, MoveIntent};

#[derive(Parser, Debug)]
#[command(name = "exhibition")]
#[command(about = "Run a scripted headless exhibition match")]
struct Args {
    /// Random seed for deterministic matches
    #[arg(long, default_value_t = 64)]
    seed: u64,

    /// Maximum ticks before the match is called off
    #[arg(long, default_value_t = 36_000)]
    max_ticks: u64,

    /// Pace the simulation at 60 ticks per second instead of running
    /// as fast as possible
    #[arg(long)]
    paced: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let stage = proving_grounds();
    let profiles = vec![
        CharacterProfile::new("Crimson", [200, 30, 30], 5.0, 17.0, 1.0, 1.0),
        CharacterProfile::new("Cobalt", [30, 30, 200], 6.5, 17.0, 0.75, 0.9),
    ];

    let mut battle = Battle::new(stage, profiles, args.seed)?;
    battle.start();

    if args.paced {
        run_paced(&mut battle, args.max_ticks);
    } else {
        run_turbo(&mut battle, args.max_ticks);
    }

    report(&battle);
    Ok(())
}

fn run_turbo(battle: &mut Battle, max_ticks: u64) {
    while battle.phase() == MatchPhase::Active && battle.elapsed_ticks() < max_ticks {
        let intents = scripted_intents(battle);
        battle.tick(&intents);
    }
}

fn run_paced(battle: &mut Battle, max_ticks: u64) {
    let mut clock = FrameClock::new();
    while battle.phase() == MatchPhase::Active && battle.elapsed_ticks() < max_ticks {
        for _ in 0..clock.begin_frame() {
            let intents = scripted_intents(battle);
            battle.tick(&intents);
        }
        std::thread::sleep(std::time::Duration::from_millis(2));
    }
}

/// Canned choreography: close the distance, swing on a fixed rhythm,
/// shield on a different one. Both pads run the same script, so the
/// outcome is decided by spawn side, stats, and the match seed.
fn scripted_intents(battle: &Battle) -> [InputIntent; 2] {
    let tick = battle.elapsed_ticks();
    let fighters = battle.fighters();
    [
        choreograph(&fighters[0], &fighters[1], tick),
        choreograph(&fighters[1], &fighters[0], tick),
    ]
}

fn choreograph(me: &Fighter, foe: &Fighter, tick: u64) -> InputIntent {
    let dx = foe.position().x - me.position().x;

    let movement = if dx > 70.0 {
        MoveIntent::Right
    } else if dx < -70.0 {
        MoveIntent::Left
    } else {
        MoveIntent::Stop
    };

    InputIntent {
        movement,
        jump: tick % 240 == 120,
        fast_fall: false,
        attack: dx.abs() <= 90.0 && tick % 25 == (me.player() as u64 * 5),
        shield: dx.abs() <= 90.0 && tick % 97 < 8 && me.player() == 1,
    }
}

fn report(battle: &Battle) {
    for fighter in battle.fighters() {
        info!(
            "player {} ({}): {} stocks left, {:.0}% damage, {}",
            fighter.player() + 1,
            fighter.name(),
            fighter.stocks(),
            fighter.damage(),
            fighter.state().name()
        );
    }

    match (battle.phase(), battle.winner()) {
        (MatchPhase::Ended, Some(player)) => info!(
            "winner: player {} after {} ticks",
            player + 1,
            battle.elapsed_ticks()
        ),
        (MatchPhase::Ended, None) => info!("draw after {} ticks", battle.elapsed_ticks()),
        _ => info!("called off after {} ticks", battle.elapsed_ticks()),
    }
}

fn proving_grounds() -> StageGeometry {
    StageGeometry::new(
        "Proving Grounds",
        500.0,
        vec![
            Platform::new(300.0, 500.0, 400.0, 20.0),
            Platform::new(350.0, 370.0, 100.0, 10.0),
            Platform::new(574.0, 370.0, 100.0, 10.0),
        ],
        BlastZones::new(-100.0, 1124.0, -200.0, 700.0),
        vec![glam::Vec2::new(400.0, 300.0), glam::Vec2::new(600.0, 300.0)],
    )
}
