//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in arena space (units). Origin is the arena's top-left corner,
/// x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// 2D velocity in arena units per nominal tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }

    /// Unit vector toward another position, or zero when the points coincide.
    pub fn direction_to(&self, other: &Position) -> DVec2 {
        (other.0 - self.0).normalize_or_zero()
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }
}

/// Run clock driven by the external frame scheduler.
///
/// The driver supplies a monotonically increasing delta per `advance` call,
/// already clamped to sane bounds (tab-suspension jumps are its problem).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunClock {
    /// Number of simulated frames so far.
    pub frame: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl RunClock {
    /// Advance by one frame of `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.frame += 1;
        self.elapsed_ms += dt_ms;
    }

    /// Elapsed time formatted mm:ss for the HUD.
    pub fn display(&self) -> String {
        let total_secs = (self.elapsed_ms / 1000.0) as u64;
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}
