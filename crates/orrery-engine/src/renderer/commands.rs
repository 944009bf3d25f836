//! Declarative per-frame scene description.
//!
//! Games rebuild a [`RenderList`] every frame from their data model. The host
//! walks it in order and maps each command onto its own scene graph, so the
//! engine stays independent of any particular rendering library.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::types::EntityId;
use crate::components::color::Color;
use crate::components::mesh::MeshComponent;
use crate::renderer::camera::{CameraConfig, OrbitControlsConfig};

/// Distance fog blending toward `color` between `near` and `far`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogConfig {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

/// Procedural star field surrounding the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    /// Radius of the inner sphere stars are scattered outside of.
    pub radius: f32,
    /// Thickness of the star shell.
    pub depth: f32,
    pub count: u32,
    /// Star size factor.
    pub factor: f32,
    pub saturation: f32,
    pub fade: bool,
    /// Twinkle animation speed.
    pub speed: f32,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            radius: 300.0,
            depth: 60.0,
            count: 50_000,
            factor: 7.0,
            saturation: 0.0,
            fade: true,
            speed: 1.5,
        }
    }
}

/// Stroke style for polylines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub opacity: f32,
    pub width: f32,
    pub dashed: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            opacity: 1.0,
            width: 1.0,
            dashed: false,
        }
    }
}

/// Text style for screen-space labels anchored to world positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub color: Color,
    pub bold: bool,
    pub bordered: bool,
    /// CSS-style scale applied to the label box.
    pub scale: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            bold: false,
            bordered: false,
            scale: 1.0,
        }
    }
}

/// One entry in the frame's scene description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderCommand {
    Background { color: Color },
    Fog(FogConfig),
    AmbientLight { color: Color, intensity: f32 },
    PointLight { position: Vec3, color: Color, intensity: f32 },
    StarField(StarFieldConfig),
    Camera(CameraConfig),
    OrbitControls(OrbitControlsConfig),
    /// A lit mesh. `id` is set for pickable objects so the host can route
    /// pointer events back to the right body.
    Mesh {
        id: Option<EntityId>,
        position: Vec3,
        /// Rotation about the world +Y axis in radians.
        rotation_y: f32,
        /// Uniform scale multiplier.
        scale: f32,
        mesh: MeshComponent,
    },
    Line { points: Vec<Vec3>, style: LineStyle },
    Label { position: Vec3, text: String, style: LabelStyle },
    Panel { position: Vec3, title: String, lines: Vec<String> },
    /// A control-surface button. Clicking it sends a custom input event of `action` kind.
    Button { action: u32, label: String },
}

/// Ordered list of render commands for one frame.
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize the list as a JSON array for the host.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.commands)
    }
}

impl Default for RenderList {
    fn default() -> Self {
        Self::new()
    }
}
