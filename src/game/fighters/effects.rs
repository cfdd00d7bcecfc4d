// Cosmetic hit sparks
//
// Sparks are purely visual: the renderer reads them, nothing in the
// simulation ever depends on them.

use glam::Vec2;
use rand::Rng;

/// Sparks spawned by a single connecting hit.
pub(crate) const SPARKS_PER_HIT: usize = 12;

/// Ticks a spark stays alive.
pub(crate) const SPARK_LIFETIME: u32 = 20;

/// Spark size range (inclusive).
const SPARK_MIN_SIZE: u32 = 3;
const SPARK_MAX_SIZE: u32 = 8;

/// Hard cap on live sparks per fighter; the oldest are dropped first.
const MAX_SPARKS: usize = 96;

/// A short-lived cosmetic marker spawned where a hit landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitSpark {
    pub position: Vec2,
    pub size: f32,
    pub frames_left: u32,
}

/// The set of live sparks attached to one fighter.
#[derive(Debug, Clone, Default)]
pub struct SparkField {
    sparks: Vec<HitSpark>,
}

impl SparkField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a burst of sparks at `center` with randomized sizes.
    pub fn burst(&mut self, center: Vec2, rng: &mut impl Rng) {
        for _ in 0..SPARKS_PER_HIT {
            self.sparks.push(HitSpark {
                position: center,
                size: rng.gen_range(SPARK_MIN_SIZE..=SPARK_MAX_SIZE) as f32,
                frames_left: SPARK_LIFETIME,
            });
        }
        if self.sparks.len() > MAX_SPARKS {
            self.sparks.drain(..self.sparks.len() - MAX_SPARKS);
        }
    }

    /// Age every spark by one tick and discard the expired ones.
    pub fn decay(&mut self) {
        for spark in &mut self.sparks {
            spark.frames_left = spark.frames_left.saturating_sub(1);
        }
        self.sparks.retain(|spark| spark.frames_left > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &HitSpark> {
        self.sparks.iter()
    }

    pub fn len(&self) -> usize {
        self.sparks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparks.is_empty()
    }
}
