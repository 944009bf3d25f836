pub mod color;
pub mod mesh;
