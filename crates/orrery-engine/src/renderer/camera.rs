use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Perspective camera placement, applied once when the host mounts the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial eye position in world units.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 30.0, 80.0),
            fov_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Configuration for the host's orbit-drag camera controls.
///
/// The engine never moves the camera itself; it only forwards these flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitControlsConfig {
    pub enable_pan: bool,
    pub enable_zoom: bool,
    pub enable_rotate: bool,
    /// Closest the camera may dolly toward `target`.
    pub min_distance: f32,
    /// Farthest the camera may dolly away from `target`.
    pub max_distance: f32,
    pub target: Vec3,
    pub auto_rotate: bool,
    /// Host-defined auto-rotation rate (one full turn per 60s at 1.0).
    pub auto_rotate_speed: f32,
}

impl Default for OrbitControlsConfig {
    fn default() -> Self {
        Self {
            enable_pan: true,
            enable_zoom: true,
            enable_rotate: true,
            min_distance: 10.0,
            max_distance: 200.0,
            target: Vec3::ZERO,
            auto_rotate: true,
            auto_rotate_speed: 0.5,
        }
    }
}

impl OrbitControlsConfig {
    /// Copy of this configuration with auto-rotation switched on or off.
    pub fn with_auto_rotate(mut self, enabled: bool) -> Self {
        self.auto_rotate = enabled;
        self
    }
}
