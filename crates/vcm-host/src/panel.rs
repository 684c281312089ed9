//! Panel state: the values a host UI collects between operator runs.
//!
//! This is the single source of truth for what the next command reads.
//! Hosts write it from their widgets; the dispatcher only reads it.

use serde::{Deserialize, Serialize};
use vcm_core::{Channel, ChannelSet, Mesh};

/// Source/destination addressing and the active channel set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelState {
    /// Source color layer name.
    pub src_layer: String,
    /// Source channel.
    pub src_channel: Channel,
    /// Destination color layer name.
    pub dst_layer: String,
    /// Destination channel.
    pub dst_channel: Channel,
    /// Channels touched by fill and invert.
    pub active_channels: ChannelSet,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            src_layer: String::new(),
            src_channel: Channel::R,
            dst_layer: String::new(),
            dst_channel: Channel::R,
            active_channels: ChannelSet::RGB,
        }
    }
}

impl PanelState {
    /// Point both layer pickers at the mesh's first layer when they are
    /// unset or name a layer the mesh no longer has.
    pub fn sync_layers(&mut self, mesh: &Mesh) {
        let Some(first) = mesh.layer_names().next() else {
            return;
        };
        for picker in [&mut self.src_layer, &mut self.dst_layer] {
            if mesh.layer(picker.as_str()).is_none() {
                first.clone_into(picker);
            }
        }
    }

    /// Set a channel picker from a host id, falling back to red for ids it
    /// does not know.
    pub fn set_src_channel_id(&mut self, id: &str) {
        self.src_channel = Channel::from_id(id);
    }

    /// See [`PanelState::set_src_channel_id`].
    pub fn set_dst_channel_id(&mut self, id: &str) {
        self.dst_channel = Channel::from_id(id);
    }
}

/// Entries for a layer picker, in mesh order. Empty when the mesh has no
/// color layers.
pub fn layer_items(mesh: &Mesh) -> Vec<String> {
    mesh.layer_names().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcm_core::ColorLayer;

    #[test]
    fn test_layer_items_follow_mesh_order() {
        let mut mesh = Mesh::new(1);
        assert!(layer_items(&mesh).is_empty());
        mesh.add_layer(ColorLayer::new("base", 1)).unwrap();
        mesh.add_layer(ColorLayer::new("ao", 1)).unwrap();
        assert_eq!(layer_items(&mesh), vec!["base", "ao"]);
    }

    #[test]
    fn test_sync_layers_repairs_stale_names() {
        let mut mesh = Mesh::new(1);
        mesh.add_layer(ColorLayer::new("base", 1)).unwrap();
        mesh.add_layer(ColorLayer::new("ao", 1)).unwrap();
        let mut panel = PanelState {
            dst_layer: "ao".to_string(),
            src_layer: "gone".to_string(),
            ..PanelState::default()
        };
        panel.sync_layers(&mesh);
        assert_eq!(panel.src_layer, "base");
        assert_eq!(panel.dst_layer, "ao");
    }

    #[test]
    fn test_channel_ids_fall_back_to_red() {
        let mut panel = PanelState::default();
        panel.set_src_channel_id("B");
        panel.set_dst_channel_id("?");
        assert_eq!(panel.src_channel, Channel::B);
        assert_eq!(panel.dst_channel, Channel::R);
    }
}
