/// Shared memory layout between the engine and the host renderer.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 8 floats]
/// [Mesh instances: max_mesh_instances × 16 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Scene overlays (labels, panels, buttons, orbit lines) travel separately as
/// JSON; only the per-mesh hot path uses the float layout.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_MAX_MESH_INSTANCES: usize = 2;
pub const HEADER_MESH_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_ELAPSED_TIME: usize = 6;
pub const HEADER_RESERVED: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per mesh instance (wire format, never changes).
pub const MESH_INSTANCE_FLOATS: usize = 16;

/// Floats per game event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout derived from the game's capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_mesh_instances: usize,
    pub max_events: usize,

    /// Size of the mesh section in floats.
    pub mesh_data_floats: usize,
    /// Size of the event section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where mesh data begins.
    pub mesh_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

/// Per-frame values written into the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameCounts {
    pub frame: u64,
    pub mesh_instances: u32,
    pub events: u32,
    pub elapsed_time: f64,
}

impl ProtocolLayout {
    pub fn new(max_mesh_instances: usize, max_events: usize) -> Self {
        let mesh_data_floats = max_mesh_instances * MESH_INSTANCE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let mesh_data_offset = HEADER_FLOATS;
        let event_data_offset = mesh_data_offset + mesh_data_floats;
        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_mesh_instances,
            max_events,
            mesh_data_floats,
            event_data_floats,
            mesh_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_mesh_instances, config.max_events)
    }

    /// Fill a header block for the current frame.
    pub fn header(&self, counts: FrameCounts) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_FRAME_COUNTER] = counts.frame as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_MAX_MESH_INSTANCES] = self.max_mesh_instances as f32;
        header[HEADER_MESH_INSTANCE_COUNT] = counts.mesh_instances as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = counts.events.min(self.max_events as u32) as f32;
        header[HEADER_ELAPSED_TIME] = counts.elapsed_time as f32;
        header[HEADER_RESERVED] = 0.0;
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let config = GameConfig::default();
        let layout = ProtocolLayout::from_config(&config);

        assert_eq!(layout.max_mesh_instances, config.max_mesh_instances);
        assert_eq!(layout.mesh_data_floats, config.max_mesh_instances * 16);
        assert_eq!(layout.event_data_floats, config.max_events * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 20);

        assert_eq!(layout.mesh_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, HEADER_FLOATS + 10 * MESH_INSTANCE_FLOATS);
        assert_eq!(
            layout.buffer_total_floats,
            layout.event_data_offset + 20 * EVENT_FLOATS
        );
    }

    #[test]
    fn header_reports_counts() {
        let layout = ProtocolLayout::new(16, 4);
        let header = layout.header(FrameCounts {
            frame: 12,
            mesh_instances: 9,
            events: 7,
            elapsed_time: 2.5,
        });
        assert_eq!(header[HEADER_FRAME_COUNTER], 12.0);
        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_MESH_INSTANCE_COUNT], 9.0);
        assert_eq!(header[HEADER_EVENT_COUNT], 4.0); // clamped to capacity
        assert_eq!(header[HEADER_ELAPSED_TIME], 2.5);
    }
}
