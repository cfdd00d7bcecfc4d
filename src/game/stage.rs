// Stage geometry: ground level, platforms, blast zones, spawn points
//
// A stage is immutable once built. The battle driver owns one and every
// fighter reads it during its physics update; nothing mutates it.

use glam::Vec2;

/// A one-way platform fighters can land on from above.
///
/// Platforms have no side or underside collision: a fighter jumping up
/// through one passes freely and only lands when moving downward across
/// the top surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The y coordinate of the walkable top surface.
    pub fn top(&self) -> f32 {
        self.y
    }
}

/// Rectangular kill boundary surrounding the stage.
///
/// Coordinates follow the stage convention: y grows downward, so `top`
/// is numerically smaller than `bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlastZones {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BlastZones {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Whether a position is still inside the playable volume.
    /// Points exactly on a bound count as inside.
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.left && pos.x <= self.right && pos.y >= self.top && pos.y <= self.bottom
    }
}

/// Static description of a stage: ground level, platform set, blast-zone
/// bounds, and spawn coordinates.
#[derive(Debug, Clone)]
pub struct StageGeometry {
    name: String,
    ground_y: f32,
    platforms: Vec<Platform>,
    blast_zones: BlastZones,
    spawn_points: Vec<Vec2>,
}

impl StageGeometry {
    pub fn new(
        name: impl Into<String>,
        ground_y: f32,
        platforms: Vec<Platform>,
        blast_zones: BlastZones,
        spawn_points: Vec<Vec2>,
    ) -> Self {
        Self {
            name: name.into(),
            ground_y,
            platforms,
            blast_zones,
            spawn_points,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ground level. Fighters at or below this y rest on the ground.
    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn blast_zones(&self) -> &BlastZones {
        &self.blast_zones
    }

    pub fn spawn_points(&self) -> &[Vec2] {
        &self.spawn_points
    }
}
