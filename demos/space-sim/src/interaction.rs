/// Per-body pointer state: hover and detail-panel visibility.
///
/// Presentation only; nothing here feeds back into motion.

use std::collections::HashMap;

use orrery_engine::{Color, EntityId, InputEvent, LabelStyle};

/// Mesh scale multiplier while hovered.
pub const HOVER_SCALE: f32 = 1.2;
/// Label box scale while hovered.
const HOVER_LABEL_SCALE: f32 = 1.1;
const HOVER_LABEL_COLOR: Color = Color::new(1.0, 235.0 / 255.0, 59.0 / 255.0); // #ffeb3b

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: bool,
    pub details_visible: bool,
}

impl InteractionState {
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    /// Flip the detail panel.
    pub fn toggle_details(&mut self) {
        self.details_visible = !self.details_visible;
    }

    pub fn mesh_scale(&self) -> f32 {
        if self.hovered { HOVER_SCALE } else { 1.0 }
    }

    pub fn label_style(&self) -> LabelStyle {
        if self.hovered {
            LabelStyle {
                color: HOVER_LABEL_COLOR,
                bold: true,
                bordered: true,
                scale: HOVER_LABEL_SCALE,
            }
        } else {
            LabelStyle::default()
        }
    }
}

/// Interaction records keyed by body id.
#[derive(Default)]
pub struct InteractionMap {
    states: HashMap<EntityId, InteractionState>,
}

impl InteractionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `id` with both flags cleared.
    pub fn register(&mut self, id: EntityId) {
        self.states.insert(id, InteractionState::default());
    }

    /// Current state of `id` (cleared if untracked).
    pub fn get(&self, id: EntityId) -> InteractionState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    /// Route a pointer event to its target. Returns false for events that are
    /// not pointer events or that target an untracked body.
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        let target = match *event {
            InputEvent::PointerEnter { target }
            | InputEvent::PointerLeave { target }
            | InputEvent::Click { target } => target,
            InputEvent::Custom { .. } => return false,
        };
        let Some(state) = self.states.get_mut(&target) else {
            log::warn!("pointer event for unknown body {target:?}");
            return false;
        };
        match event {
            InputEvent::PointerEnter { .. } => state.pointer_enter(),
            InputEvent::PointerLeave { .. } => state.pointer_leave(),
            InputEvent::Click { .. } => state.toggle_details(),
            InputEvent::Custom { .. } => {}
        }
        log::debug!("{target:?}: {state:?}");
        true
    }

    /// Number of bodies currently showing their detail panel.
    pub fn details_visible_count(&self) -> usize {
        self.states.values().filter(|s| s.details_visible).count()
    }
}
