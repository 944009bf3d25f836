/// Circular orbit math: pure functions plus the per-body motion record.
///
/// Uses f64 throughout; game.rs converts to f32 only when emitting render commands.

use std::collections::HashMap;
use std::f64::consts::TAU;

use glam::DVec3;
use orrery_engine::ClockSource;

use crate::controls::SceneState;

/// Number of distinct samples on an orbit path (the closing point is extra).
pub const ORBIT_SEGMENTS: usize = 64;

/// Spin added per unpaused frame, as a fraction of the body's angular speed.
pub const SPIN_RATE: f64 = 0.01;

/// Closed polyline approximating a circle of radius `distance` in the XZ plane.
/// Returns `ORBIT_SEGMENTS + 1` points; the last repeats the first.
pub fn generate_path(distance: f64) -> Vec<DVec3> {
    let mut points = Vec::with_capacity(ORBIT_SEGMENTS + 1);
    for i in 0..ORBIT_SEGMENTS {
        let angle = (i as f64 / ORBIT_SEGMENTS as f64) * TAU;
        points.push(DVec3::new(angle.cos() * distance, 0.0, angle.sin() * distance));
    }
    points.push(points[0]);
    points
}

/// Position on a circular orbit at `effective_time`.
pub fn compute_position(effective_time: f64, angular_speed: f64, distance: f64) -> DVec3 {
    let angle = effective_time * angular_speed;
    DVec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
}

/// Orbit paths memoized by exact distance.
#[derive(Default)]
pub struct OrbitPathCache {
    paths: HashMap<u64, Vec<DVec3>>,
}

impl OrbitPathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path for `distance`, generating it on first request.
    pub fn path(&mut self, distance: f64) -> &[DVec3] {
        self.paths
            .entry(distance.to_bits())
            .or_insert_with(|| generate_path(distance))
    }

    /// Previously generated path for `distance`, if any.
    pub fn get(&self, distance: f64) -> Option<&[DVec3]> {
        self.paths.get(&distance.to_bits()).map(Vec::as_slice)
    }

    /// Number of distinct distances generated so far.
    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

/// Mutable motion record for one body.
///
/// Orbital angle and spin are independent channels: the orbit follows the
/// last sampled clock reading, the spin accumulates per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyMotion {
    /// Most recent clock reading consumed while unpaused.
    last_sampled_time: f64,
    /// Rotation about +Y in radians, kept in [0, TAU).
    spin: f64,
}

impl BodyMotion {
    /// Per-frame step. While `scene.paused` the record is left untouched, so
    /// the body freezes exactly where it was and resumes from the live clock.
    pub fn sample(&mut self, clock: &impl ClockSource, scene: &SceneState, angular_speed: f64) {
        if scene.paused {
            return;
        }
        self.last_sampled_time = clock.elapsed_time();
        self.spin = (self.spin + angular_speed * SPIN_RATE).rem_euclid(TAU);
    }

    pub fn last_sampled_time(&self) -> f64 {
        self.last_sampled_time
    }

    pub fn spin(&self) -> f64 {
        self.spin
    }

    pub fn position(&self, angular_speed: f64, distance: f64) -> DVec3 {
        compute_position(self.last_sampled_time, angular_speed, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::FrameClock;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-6;

    fn paused() -> SceneState {
        SceneState { paused: true, ..SceneState::default() }
    }

    #[test]
    fn earth_starts_on_positive_x() {
        let p = compute_position(0.0, 0.3, 25.0);
        assert_eq!(p, DVec3::new(25.0, 0.0, 0.0));
    }

    #[test]
    fn earth_half_orbit_is_opposite() {
        let p = compute_position(PI / 0.3, 0.3, 25.0);
        assert!((p - DVec3::new(-25.0, 0.0, 0.0)).length() < EPS, "p = {p:?}");
    }

    #[test]
    fn position_stays_on_the_circle() {
        for &(speed, distance) in &[(0.5, 15.0), (-0.25, 30.0), (0.06, 70.0)] {
            for step in 0..50 {
                let t = step as f64 * 1.37;
                let p = compute_position(t, speed, distance);
                assert!((p.length() - distance).abs() < EPS, "t={t} p={p:?}");
                assert_eq!(p.y, 0.0);
            }
        }
    }

    #[test]
    fn negative_speed_orbits_the_other_way() {
        let forward = compute_position(1.0, 0.5, 10.0);
        let backward = compute_position(1.0, -0.5, 10.0);
        assert!((forward.x - backward.x).abs() < EPS);
        assert!((forward.z + backward.z).abs() < EPS);
    }

    #[test]
    fn path_is_closed_and_on_the_circle() {
        let path = generate_path(40.0);
        assert_eq!(path.len(), ORBIT_SEGMENTS + 1);
        assert_eq!(path.first(), path.last());
        for p in &path {
            assert!((p.length() - 40.0).abs() < EPS);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn path_samples_are_distinct() {
        let path = generate_path(15.0);
        for pair in path[..ORBIT_SEGMENTS].windows(2) {
            assert!((pair[1] - pair[0]).length() > 1.0);
        }
    }

    #[test]
    fn cache_generates_once_per_distance() {
        let mut cache = OrbitPathCache::new();
        assert!(cache.get(25.0).is_none());
        let first = cache.path(25.0).to_vec();
        let again = cache.path(25.0).to_vec();
        assert_eq!(first, again);
        assert_eq!(cache.len(), 1);

        cache.path(30.0);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(25.0).map(<[DVec3]>::len), Some(ORBIT_SEGMENTS + 1));
    }

    #[test]
    fn sample_tracks_clock_while_running() {
        let mut clock = FrameClock::new();
        let mut motion = BodyMotion::default();
        let running = SceneState::default();
        for _ in 0..3 {
            clock.advance(0.5);
            motion.sample(&clock, &running, 0.3);
        }
        assert_eq!(motion.last_sampled_time(), 1.5);
        assert!((motion.spin() - 3.0 * 0.3 * SPIN_RATE).abs() < 1e-12);
    }

    #[test]
    fn pause_freezes_time_and_spin() {
        let mut clock = FrameClock::new();
        let mut motion = BodyMotion::default();
        clock.advance(2.0);
        motion.sample(&clock, &SceneState::default(), 0.3);
        let frozen = motion;

        for _ in 0..10 {
            clock.advance(0.1);
            motion.sample(&clock, &paused(), 0.3);
            assert_eq!(motion, frozen);
            assert_eq!(motion.position(0.3, 25.0), frozen.position(0.3, 25.0));
        }
    }

    #[test]
    fn resume_jumps_to_live_clock() {
        let mut clock = FrameClock::new();
        let mut motion = BodyMotion::default();
        clock.advance(5.0);
        motion.sample(&clock, &SceneState::default(), 0.3);

        for _ in 0..10 {
            clock.advance(0.02);
            motion.sample(&clock, &paused(), 0.3);
            assert_eq!(motion.last_sampled_time(), 5.0);
        }

        motion.sample(&clock, &SceneState::default(), 0.3);
        assert!((motion.last_sampled_time() - 5.2).abs() < 1e-9);
        assert!(motion.last_sampled_time() >= 5.0);
    }

    #[test]
    fn spin_stays_wrapped() {
        let clock = FrameClock::new();
        let mut motion = BodyMotion::default();
        for _ in 0..10_000 {
            motion.sample(&clock, &SceneState::default(), 0.5);
        }
        assert!(motion.spin() >= 0.0 && motion.spin() < TAU);
    }
}
