//! Shared buffer layout between Rust and the page.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Instances: max_instances × 8 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written once into the header at init; the host reads them
//! back to compute section offsets.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_ATLAS_SPLIT: usize = 4;
pub const HEADER_MAX_EVENTS: usize = 5;
pub const HEADER_EVENT_COUNT: usize = 6;
pub const HEADER_WORLD_WIDTH: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per render instance (wire format, never changes).
pub const INSTANCE_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_events: usize,

    pub instance_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_events: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let event_data_offset = instance_data_offset + instance_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_instances,
            max_events,
            instance_data_floats,
            event_data_floats,
            instance_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_events)
    }

    /// Header values for one frame. The frame counter wraps at f32 precision
    /// limits long after any realistic session.
    pub fn header(
        &self,
        frame: u32,
        instance_count: u32,
        atlas_split: u32,
        event_count: u32,
        world_width: f32,
    ) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_FRAME_COUNTER] = frame as f32;
        header[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        header[HEADER_INSTANCE_COUNT] = instance_count as f32;
        header[HEADER_ATLAS_SPLIT] = atlas_split as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = event_count as f32;
        header[HEADER_WORLD_WIDTH] = world_width;
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

        assert_eq!(layout.max_instances, config.max_instances);
        assert_eq!(layout.instance_data_floats, config.max_instances * 8);
        assert_eq!(layout.event_data_floats, config.max_events * 4);
        assert_eq!(
            layout.buffer_total_bytes,
            (HEADER_FLOATS + config.max_instances * 8 + config.max_events * 4) * 4
        );
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20);
        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, layout.instance_data_offset + layout.instance_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn header_fields_land_at_their_indices() {
        let layout = ProtocolLayout::new(256, 16);
        let header = layout.header(9, 40, 30, 2, 1280.0);
        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_FRAME_COUNTER], 9.0);
        assert_eq!(header[HEADER_MAX_INSTANCES], 256.0);
        assert_eq!(header[HEADER_INSTANCE_COUNT], 40.0);
        assert_eq!(header[HEADER_ATLAS_SPLIT], 30.0);
        assert_eq!(header[HEADER_MAX_EVENTS], 16.0);
        assert_eq!(header[HEADER_EVENT_COUNT], 2.0);
        assert_eq!(header[HEADER_WORLD_WIDTH], 1280.0);
    }
}
