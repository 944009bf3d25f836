/// Scene-wide view flags and the two-button control surface that flips them.

use orrery_engine::{RenderCommand, RenderList};

// ── Custom event kinds from the host ─────────────────────────────────

pub const CUSTOM_TOGGLE_AUTO_ROTATE: u32 = 1;
pub const CUSTOM_TOGGLE_PAUSE: u32 = 2;

/// Global flags for one mounted scene.
///
/// `paused` is the single authority every body consults when deciding
/// whether to sample the clock; bodies only ever read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneState {
    pub paused: bool,
    pub auto_rotate: bool,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            paused: false,
            auto_rotate: true,
        }
    }
}

/// A user-facing toggle on the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    ToggleAutoRotate,
    TogglePause,
}

impl ControlAction {
    /// Buttons in display order.
    pub const ALL: [ControlAction; 2] = [ControlAction::ToggleAutoRotate, ControlAction::TogglePause];

    pub fn from_kind(kind: u32) -> Option<Self> {
        match kind {
            CUSTOM_TOGGLE_AUTO_ROTATE => Some(ControlAction::ToggleAutoRotate),
            CUSTOM_TOGGLE_PAUSE => Some(ControlAction::TogglePause),
            _ => None,
        }
    }

    pub fn kind(self) -> u32 {
        match self {
            ControlAction::ToggleAutoRotate => CUSTOM_TOGGLE_AUTO_ROTATE,
            ControlAction::TogglePause => CUSTOM_TOGGLE_PAUSE,
        }
    }

    /// Button label for the current state (names the action a click performs).
    pub fn label(self, state: &SceneState) -> &'static str {
        match self {
            ControlAction::ToggleAutoRotate if state.auto_rotate => "Stop Rotation",
            ControlAction::ToggleAutoRotate => "Start Rotation",
            ControlAction::TogglePause if state.paused => "Resume",
            ControlAction::TogglePause => "Pause",
        }
    }
}

impl SceneState {
    pub fn apply(&mut self, action: ControlAction) {
        match action {
            ControlAction::ToggleAutoRotate => self.auto_rotate = !self.auto_rotate,
            ControlAction::TogglePause => self.paused = !self.paused,
        }
        log::debug!("{action:?} -> paused={} auto_rotate={}", self.paused, self.auto_rotate);
    }
}

/// Append the control surface buttons for `state`.
pub fn render_controls(state: &SceneState, commands: &mut RenderList) {
    for action in ControlAction::ALL {
        commands.push(RenderCommand::Button {
            action: action.kind(),
            label: action.label(state).to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_running_with_auto_rotate() {
        let state = SceneState::default();
        assert!(!state.paused);
        assert!(state.auto_rotate);
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut state = SceneState::default();
        state.apply(ControlAction::TogglePause);
        assert!(state.paused);
        state.apply(ControlAction::TogglePause);
        assert_eq!(state, SceneState::default());

        state.apply(ControlAction::ToggleAutoRotate);
        state.apply(ControlAction::ToggleAutoRotate);
        assert_eq!(state, SceneState::default());
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = SceneState::default();
        state.apply(ControlAction::ToggleAutoRotate);
        assert!(!state.paused);
        assert!(!state.auto_rotate);
    }

    #[test]
    fn labels_follow_state() {
        let mut state = SceneState::default();
        assert_eq!(ControlAction::ToggleAutoRotate.label(&state), "Stop Rotation");
        assert_eq!(ControlAction::TogglePause.label(&state), "Pause");

        state.apply(ControlAction::ToggleAutoRotate);
        state.apply(ControlAction::TogglePause);
        assert_eq!(ControlAction::ToggleAutoRotate.label(&state), "Start Rotation");
        assert_eq!(ControlAction::TogglePause.label(&state), "Resume");
    }

    #[test]
    fn kinds_round_trip() {
        for action in ControlAction::ALL {
            assert_eq!(ControlAction::from_kind(action.kind()), Some(action));
        }
        assert_eq!(ControlAction::from_kind(99), None);
    }

    #[test]
    fn control_surface_has_two_buttons_in_order() {
        let mut list = RenderList::new();
        render_controls(&SceneState::default(), &mut list);
        let labels: Vec<_> = list
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Button { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Stop Rotation", "Pause"]);
    }
}
