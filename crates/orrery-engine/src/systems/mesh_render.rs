use crate::renderer::commands::{RenderCommand, RenderList};
use crate::renderer::instance::{MeshBuffer, MeshInstance};

/// Build the mesh instance buffer from the `Mesh` commands of a render list,
/// in list order. Meshes beyond the buffer capacity are dropped with a warning.
pub fn build_mesh_buffer(commands: &RenderList, buffer: &mut MeshBuffer) {
    buffer.clear();
    let mut dropped = 0usize;
    for command in commands.iter() {
        let RenderCommand::Mesh { id, position, rotation_y, scale, mesh } = command else {
            continue;
        };
        let instance = MeshInstance {
            x: position.x,
            y: position.y,
            z: position.z,
            rotation_y: *rotation_y,
            scale: *scale,
            radius: mesh.shape.radius(),
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            emissive_r: mesh.emissive.r,
            emissive_g: mesh.emissive.g,
            emissive_b: mesh.emissive.b,
            emissive_intensity: mesh.emissive_intensity,
            metalness: mesh.metalness,
            roughness: mesh.roughness,
            id: id.map(|id| id.0 as f32).unwrap_or(-1.0),
        };
        if !buffer.push(instance) {
            dropped += 1;
        }
    }
    if dropped > 0 {
        log::warn!("mesh buffer full: dropped {dropped} meshes");
    }
}
