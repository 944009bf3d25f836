use serde::{Deserialize, Serialize};

use crate::api::types::{EntityId, GameEvent};
use crate::components::color::Color;
use crate::core::time::{ClockSource, FrameClock};
use crate::input::queue::InputQueue;
use crate::renderer::camera::{CameraConfig, OrbitControlsConfig};
use crate::renderer::commands::{FogConfig, RenderList, StarFieldConfig};

/// Text the host shows while the scene is not mounted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingText {
    pub title: String,
    pub subtitle: String,
}

impl Default for LoadingText {
    fn default() -> Self {
        Self {
            title: "Loading...".to_string(),
            subtitle: String::new(),
        }
    }
}

/// Configuration for the engine and host, provided by the game.
/// Every field has a default, so hosts may override any subset via JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Clear color behind everything.
    pub background: Color,
    /// Distance fog (default: none).
    pub fog: Option<FogConfig>,
    /// Background star field (default: none).
    pub stars: Option<StarFieldConfig>,
    pub camera: CameraConfig,
    pub controls: OrbitControlsConfig,
    /// Maximum number of mesh instances (default: 64).
    pub max_mesh_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Loading overlay text.
    pub loading: LoadingText,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            fog: None,
            stars: None,
            camera: CameraConfig::default(),
            controls: OrbitControlsConfig::default(),
            max_mesh_instances: 64,
            max_events: 32,
            loading: LoadingText::default(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state and allocate entity ids.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick. The clock in `ctx` has already been advanced;
    /// `input` holds everything the host queued since the previous frame.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only pass that describes the frame as an ordered command list.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub clock: FrameClock,
    pub events: Vec<GameEvent>,
    pub config: GameConfig,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            clock: FrameClock::new(),
            events: Vec::with_capacity(config.max_events),
            config,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Elapsed time reported by the frame clock.
    pub fn elapsed_time(&self) -> f64 {
        self.clock.elapsed_time()
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for the per-frame command pass.
pub struct RenderContext<'a> {
    pub commands: &'a mut RenderList,
    pub config: &'a GameConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_sequential() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_eq!(a, EntityId(1));
        assert_eq!(b, EntityId(2));
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent { kind: 1.0, ..Default::default() });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn config_from_partial_json() {
        let config = GameConfig::from_json(
            r#"{ "max_events": 8, "controls": { "auto_rotate": false } }"#,
        )
        .unwrap();
        assert_eq!(config.max_events, 8);
        assert!(!config.controls.auto_rotate);
        assert_eq!(config.max_mesh_instances, 64);
        assert_eq!(config.camera.fov_degrees, 45.0);
        assert_eq!(config.loading, LoadingText::default());
    }

    #[test]
    fn loading_text_can_be_overridden_in_part() {
        let config = GameConfig::from_json(r#"{ "loading": { "subtitle": "Almost there" } }"#).unwrap();
        assert_eq!(config.loading.title, "Loading...");
        assert_eq!(config.loading.subtitle, "Almost there");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GameConfig {
            fog: Some(FogConfig { color: Color::BLACK, near: 30.0, far: 150.0 }),
            ..GameConfig::default()
        };
        let parsed = GameConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(GameConfig::from_json("{ max_events: ").is_err());
    }
}
