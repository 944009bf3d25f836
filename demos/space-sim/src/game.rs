/// Space Simulation: eight planets on circular orbits around a glowing sun.
///
/// Motion reads a single shared pause flag; hover and click only change how a
/// planet is drawn. Every frame is described as an ordered render-command list.

use orrery_engine::*;
use glam::{Quat, Vec3};

use crate::bodies::{self, BodyDesc};
use crate::controls::{self, ControlAction, SceneState};
use crate::interaction::InteractionMap;
use crate::orbit::{BodyMotion, OrbitPathCache};

// ── Game event kinds to the host ─────────────────────────────────────

const EVENT_SCENE_STATE: f32 = 1.0;
const EVENT_DETAILS: f32 = 2.0;

// ── Scene dressing ───────────────────────────────────────────────────

const FOG_NEAR: f32 = 30.0;
const FOG_FAR: f32 = 150.0;
const AMBIENT_INTENSITY: f32 = 0.3;
const SUN_LIGHT_INTENSITY: f32 = 3.0;

// ── Orbit lines ──────────────────────────────────────────────────────

const ORBIT_OPACITY: f32 = 0.2;
const ORBIT_LINE_WIDTH: f32 = 0.5;

// ── Overlay anchors (local offsets, in body radii) ───────────────────

const LABEL_LIFT: f32 = 1.5;
const PANEL_OFFSET: f32 = 2.0;

const LOADING_TITLE: &str = "Loading Space Simulation...";
const LOADING_SUBTITLE: &str = "Preparing the universe for you...";

/// Map a local-space offset on a body to world space.
fn local_to_world(position: Vec3, rotation_y: f32, scale: f32, offset: Vec3) -> Vec3 {
    position + Quat::from_rotation_y(rotation_y) * (offset * scale)
}

/// Runtime record for one catalog planet.
struct Planet {
    id: EntityId,
    desc: &'static BodyDesc,
    color: Color,
    motion: BodyMotion,
}

impl Planet {
    fn position(&self) -> Vec3 {
        self.motion
            .position(self.desc.angular_speed, self.desc.distance)
            .as_vec3()
    }
}

pub struct SpaceSimulation {
    scene: SceneState,
    planets: Vec<Planet>,
    interactions: InteractionMap,
    paths: OrbitPathCache,
}

impl SpaceSimulation {
    pub fn new() -> Self {
        Self {
            scene: SceneState::default(),
            planets: Vec::with_capacity(bodies::PLANET_COUNT),
            interactions: InteractionMap::new(),
            paths: OrbitPathCache::new(),
        }
    }

    fn handle_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::Custom { kind, .. } => match ControlAction::from_kind(*kind) {
                    Some(action) => self.scene.apply(action),
                    None => log::warn!("unknown control kind {kind}"),
                },
                _ => {
                    self.interactions.apply(event);
                }
            }
        }
    }

    // ── Drawing ────────────────────────────────────────────────────

    fn draw_environment(&self, ctx: &mut RenderContext) {
        let config = ctx.config;
        ctx.commands.push(RenderCommand::Background { color: config.background });
        if let Some(fog) = config.fog {
            ctx.commands.push(RenderCommand::Fog(fog));
        }
        ctx.commands.push(RenderCommand::AmbientLight {
            color: Color::WHITE,
            intensity: AMBIENT_INTENSITY,
        });
        ctx.commands.push(RenderCommand::PointLight {
            position: Vec3::ZERO,
            color: Color::from_hex_or(bodies::SUN_COLOR, Color::WHITE),
            intensity: SUN_LIGHT_INTENSITY,
        });
        if let Some(stars) = config.stars {
            ctx.commands.push(RenderCommand::StarField(stars));
        }
        ctx.commands.push(RenderCommand::Camera(config.camera));
        ctx.commands.push(RenderCommand::OrbitControls(
            config.controls.with_auto_rotate(self.scene.auto_rotate),
        ));
    }

    fn draw_sun(&self, commands: &mut RenderList) {
        let mesh = MeshComponent::sphere(
            bodies::SUN_RADIUS,
            bodies::SUN_SEGMENTS,
            Color::from_hex_or(bodies::SUN_COLOR, Color::WHITE),
        )
        .with_emissive(
            Color::from_hex_or(bodies::SUN_EMISSIVE, Color::WHITE),
            bodies::SUN_EMISSIVE_INTENSITY,
        )
        .with_surface(bodies::SUN_METALNESS, bodies::SUN_ROUGHNESS);

        // Decorative: the sun takes no pointer input.
        commands.push(RenderCommand::Mesh {
            id: None,
            position: Vec3::ZERO,
            rotation_y: 0.0,
            scale: 1.0,
            mesh,
        });
    }

    fn draw_planet(&self, planet: &Planet, commands: &mut RenderList) {
        let desc = planet.desc;
        let state = self.interactions.get(planet.id);

        if let Some(path) = self.paths.get(desc.distance) {
            commands.push(RenderCommand::Line {
                points: path.iter().map(|p| p.as_vec3()).collect(),
                style: LineStyle {
                    color: Color::WHITE,
                    opacity: ORBIT_OPACITY,
                    width: ORBIT_LINE_WIDTH,
                    dashed: true,
                },
            });
        }

        let position = planet.position();
        let rotation_y = planet.motion.spin() as f32;
        let scale = state.mesh_scale();

        commands.push(RenderCommand::Mesh {
            id: Some(planet.id),
            position,
            rotation_y,
            scale,
            mesh: MeshComponent::sphere(desc.radius, bodies::PLANET_SEGMENTS, planet.color)
                .with_emissive(planet.color, bodies::PLANET_EMISSIVE_INTENSITY)
                .with_surface(bodies::PLANET_METALNESS, bodies::PLANET_ROUGHNESS),
        });

        commands.push(RenderCommand::Label {
            position: local_to_world(position, rotation_y, scale, Vec3::Y * desc.radius * LABEL_LIFT),
            text: desc.name.to_string(),
            style: state.label_style(),
        });

        if state.details_visible {
            commands.push(RenderCommand::Panel {
                position: local_to_world(position, rotation_y, scale, Vec3::X * desc.radius * PANEL_OFFSET),
                title: desc.name.to_string(),
                lines: desc.detail_lines(),
            });
        }
    }
}

impl Default for SpaceSimulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SpaceSimulation {
    fn config(&self) -> GameConfig {
        GameConfig {
            background: Color::BLACK,
            fog: Some(FogConfig { color: Color::BLACK, near: FOG_NEAR, far: FOG_FAR }),
            stars: Some(StarFieldConfig::default()),
            max_mesh_instances: bodies::PLANET_COUNT + 1,
            max_events: 8,
            loading: LoadingText {
                title: LOADING_TITLE.to_string(),
                subtitle: LOADING_SUBTITLE.to_string(),
            },
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.scene = SceneState::default();

        self.planets.clear();
        for desc in &bodies::PLANETS {
            let id = ctx.next_id();
            self.interactions.register(id);
            self.paths.path(desc.distance);
            self.planets.push(Planet {
                id,
                desc,
                color: Color::from_hex_or(desc.color, Color::WHITE),
                motion: BodyMotion::default(),
            });
        }

        log::info!(
            "space-sim: {} planets, {} orbit paths",
            self.planets.len(),
            self.paths.len()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // Toggles land before any body samples the clock, so every planet
        // sees the same pause flag this frame.
        self.handle_input(input);

        for planet in &mut self.planets {
            planet.motion.sample(&ctx.clock, &self.scene, planet.desc.angular_speed);
        }

        ctx.emit_event(GameEvent {
            kind: EVENT_SCENE_STATE,
            a: if self.scene.paused { 1.0 } else { 0.0 },
            b: if self.scene.auto_rotate { 1.0 } else { 0.0 },
            c: 0.0,
        });
        ctx.emit_event(GameEvent {
            kind: EVENT_DETAILS,
            a: self.interactions.details_visible_count() as f32,
            b: 0.0,
            c: 0.0,
        });
    }

    fn render(&self, ctx: &mut RenderContext) {
        self.draw_environment(ctx);
        self.draw_sun(ctx.commands);
        for planet in &self.planets {
            self.draw_planet(planet, ctx.commands);
        }
        controls::render_controls(&self.scene, ctx.commands);
    }
}
