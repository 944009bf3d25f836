use orrery_engine::bridge::protocol::HEADER_FLOATS;
use orrery_engine::{
    build_mesh_buffer, ClockSource, EngineContext, FrameCounts, Game, GameConfig, InputEvent,
    InputQueue, MeshBuffer, ProtocolLayout, RenderContext, RenderList,
};

use crate::mount::MountState;

/// Generic game runner that wires up the frame loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly. Dropping the runner discards all scene state.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    commands: RenderList,
    mesh_buffer: MeshBuffer,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    mount: MountState,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let mesh_buffer = MeshBuffer::with_capacity(config.max_mesh_instances);

        Self {
            game,
            ctx: EngineContext::with_config(config),
            input: InputQueue::new(),
            commands: RenderList::new(),
            mesh_buffer,
            layout,
            header: [0.0; HEADER_FLOATS],
            mount: MountState::Loading,
        }
    }

    /// Override the game's configuration with a (partial) JSON document.
    /// Only allowed before the scene is mounted.
    pub fn configure(&mut self, json: &str) -> Result<(), serde_json::Error> {
        if self.mount.is_mounted() {
            log::warn!("configure ignored: scene already mounted");
            return Ok(());
        }
        let config = GameConfig::from_json(json)?;
        self.apply_config(config);
        Ok(())
    }

    fn apply_config(&mut self, config: GameConfig) {
        self.layout = ProtocolLayout::from_config(&config);
        self.mesh_buffer = MeshBuffer::with_capacity(config.max_mesh_instances);
        self.ctx = EngineContext::with_config(config);
    }

    /// Mount the scene. Call once the host has a rendering context.
    pub fn init(&mut self) {
        if self.mount.is_mounted() {
            return;
        }
        self.game.init(&mut self.ctx);
        self.mount = MountState::Mounted;
    }

    /// Record that the host failed to create a rendering context.
    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::error!("scene mount failed: {reason}");
        self.mount = MountState::Failed { reason };
        self.input.drain();
    }

    /// Queue an input event for the next frame. Dropped unless mounted.
    pub fn push_input(&mut self, event: InputEvent) {
        if !self.mount.is_mounted() {
            log::debug!("input dropped: scene not mounted");
            return;
        }
        self.input.push(event);
    }

    /// Run one frame: advance the clock, update the game, rebuild the frame.
    pub fn tick(&mut self, dt: f64) {
        if !self.mount.is_mounted() {
            return;
        }

        self.ctx.clear_frame_data();
        self.ctx.clock.advance(dt);

        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        self.commands.clear();
        {
            let mut render_ctx = RenderContext {
                commands: &mut self.commands,
                config: &self.ctx.config,
            };
            self.game.render(&mut render_ctx);
        }

        build_mesh_buffer(&self.commands, &mut self.mesh_buffer);

        self.header = self.layout.header(FrameCounts {
            frame: self.ctx.clock.frame(),
            mesh_instances: self.mesh_buffer.instance_count(),
            events: self.ctx.events.len() as u32,
            elapsed_time: self.ctx.clock.elapsed_time(),
        });
    }

    // ---- Accessors read by the host via wasm_bindgen exports ----

    pub fn mount_state(&self) -> &MountState {
        &self.mount
    }

    /// JSON for the loading/fallback overlay, or "null" once mounted.
    pub fn fallback_json(&self) -> String {
        to_json_or(&self.mount.fallback(&self.ctx.config.loading), "null")
    }

    /// The frame's render commands as a JSON array.
    pub fn frame_json(&self) -> String {
        self.commands.to_json().unwrap_or_else(|err| {
            log::error!("failed to serialize frame: {err}");
            "[]".to_string()
        })
    }

    pub fn config_json(&self) -> String {
        to_json_or(&self.ctx.config, "{}")
    }

    pub fn elapsed_time(&self) -> f64 {
        self.ctx.elapsed_time()
    }

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn mesh_instances_ptr(&self) -> *const f32 {
        self.mesh_buffer.instances_ptr()
    }

    pub fn mesh_instance_count(&self) -> u32 {
        self.mesh_buffer.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    pub fn max_mesh_instances(&self) -> u32 {
        self.layout.max_mesh_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    #[cfg(test)]
    fn game(&self) -> &G {
        &self.game
    }
}

fn to_json_or<T: serde::Serialize>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("failed to serialize: {err}");
        fallback.to_string()
    })
}
