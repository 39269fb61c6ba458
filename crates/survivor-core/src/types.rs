//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Vector magnitudes at or below this are treated as zero.
pub const EPSILON: f64 = 1e-9;

/// Opaque entity identifier as seen outside the ECS (the entity's bit pattern).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of playing ticks processed.
    pub tick: u64,
    /// Elapsed simulation time in seconds (survival time).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Unit vector in the direction of `v`, or zero for a zero-length or
/// non-finite vector. Never divides by zero.
pub fn normalize_or_zero(v: DVec2) -> DVec2 {
    let len = v.length();
    if !len.is_finite() || len <= EPSILON {
        return DVec2::ZERO;
    }
    v / len
}

/// Unit vector pointing from `from` towards `to` (zero if coincident).
pub fn direction(from: DVec2, to: DVec2) -> DVec2 {
    normalize_or_zero(to - from)
}

/// Heading angle of `v` in radians (`atan2(y, x)`), if `v` is non-negligible.
pub fn heading(v: DVec2) -> Option<f64> {
    if v.length_squared() <= EPSILON * EPSILON {
        None
    } else {
        Some(v.y.atan2(v.x))
    }
}

/// Rotate `v` counter-clockwise by `angle` radians.
pub fn rotate(v: DVec2, angle: f64) -> DVec2 {
    DVec2::from_angle(angle).rotate(v)
}

/// Translate a screen-space point into world space.
///
/// The camera is centred on `camera`, which is drawn at the middle of a
/// viewport of size `viewport`.
pub fn screen_to_world(screen: DVec2, viewport: DVec2, camera: DVec2) -> DVec2 {
    camera + (screen - viewport * 0.5)
}

/// Clamp `p` into `[0, 1]` for use as a probability; non-finite becomes 0.
pub fn probability(p: f64) -> f64 {
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
