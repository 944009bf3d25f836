use serde::{Deserialize, Serialize};

use crate::components::color::Color;

/// Mesh geometry primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeshShape {
    /// UV sphere; `segments` is used for both width and height subdivisions.
    Sphere { radius: f32, segments: u32 },
}

impl MeshShape {
    /// Bounding radius in local units.
    pub fn radius(&self) -> f32 {
        match *self {
            MeshShape::Sphere { radius, .. } => radius,
        }
    }
}

/// Physically based material parameters for a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: Color,
    /// Self-illumination color.
    pub emissive: Color,
    /// Multiplier on `emissive` (default: 0.0, values > 1 push into HDR range).
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: MeshShape::Sphere { radius: 1.0, segments: 32 },
            color: Color::WHITE,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            metalness: 0.0,
            roughness: 1.0,
        }
    }
}

impl MeshComponent {
    pub fn sphere(radius: f32, segments: u32, color: Color) -> Self {
        Self {
            shape: MeshShape::Sphere { radius, segments },
            color,
            ..Default::default()
        }
    }

    pub fn with_emissive(mut self, emissive: Color, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    pub fn with_surface(mut self, metalness: f32, roughness: f32) -> Self {
        self.metalness = metalness;
        self.roughness = roughness;
        self
    }
}
