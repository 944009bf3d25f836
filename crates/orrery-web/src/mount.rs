use orrery_engine::LoadingText;
use serde::Serialize;

/// Lifecycle of the mounted scene as seen by the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MountState {
    /// Waiting for the rendering context; the host shows the fallback.
    Loading,
    /// The scene is mounted and ticking.
    Mounted,
    /// The host could not create a rendering context.
    Failed { reason: String },
}

impl MountState {
    /// Numeric code for cheap polling across the wasm boundary.
    pub fn code(&self) -> u32 {
        match self {
            MountState::Loading => 0,
            MountState::Mounted => 1,
            MountState::Failed { .. } => 2,
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self, MountState::Mounted)
    }

    /// Overlay the host should display in this state, or None once mounted.
    /// A failure keeps the game's title and shows the reason underneath.
    pub fn fallback(&self, text: &LoadingText) -> Option<LoadingText> {
        match self {
            MountState::Loading => Some(text.clone()),
            MountState::Mounted => None,
            MountState::Failed { reason } => Some(LoadingText {
                title: text.title.clone(),
                subtitle: reason.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text() -> LoadingText {
        LoadingText {
            title: "Loading Orbits".into(),
            subtitle: "One moment".into(),
        }
    }

    #[test]
    fn fallback_hidden_once_mounted() {
        assert_eq!(MountState::Loading.fallback(&text()), Some(text()));
        assert!(MountState::Mounted.fallback(&text()).is_none());
    }

    #[test]
    fn failure_reason_replaces_subtitle() {
        let shown = MountState::Failed { reason: "WebGL unavailable".into() }
            .fallback(&text())
            .unwrap();
        assert_eq!(shown.title, "Loading Orbits");
        assert_eq!(shown.subtitle, "WebGL unavailable");
    }

    #[test]
    fn state_serializes_with_tag() {
        let json = serde_json::to_string(&MountState::Mounted).unwrap();
        assert_eq!(json, r#"{"state":"mounted"}"#);
        assert_eq!(MountState::Failed { reason: String::new() }.code(), 2);
    }
}
