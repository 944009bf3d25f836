pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, LoadingText, RenderContext};
pub use api::types::{EntityId, GameEvent};
pub use core::time::{ClockSource, FrameClock};
pub use components::color::{Color, ColorError};
pub use components::mesh::{MeshComponent, MeshShape};
pub use renderer::camera::{CameraConfig, OrbitControlsConfig};
pub use renderer::commands::{
    RenderCommand, RenderList, FogConfig, StarFieldConfig, LineStyle, LabelStyle,
};
pub use renderer::instance::{MeshInstance, MeshBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::{ProtocolLayout, FrameCounts};
pub use systems::mesh_render::build_mesh_buffer;
