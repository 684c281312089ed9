//! Operator commands a host sends to the dispatcher.
//!
//! Each variant carries only the operator's own options; layer and channel
//! addressing comes from [`PanelState`](crate::panel::PanelState). Follows the
//! `#[serde(tag = "type", content = "data")]` layout used for IPC messages.

use serde::{Deserialize, Serialize};

/// One run of a vertex color operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum VertexColorCommand {
    /// Convert the source layer to luminosity into the destination.
    RgbToGrayscale {
        /// Put the grayscale value in all channels of the destination.
        all_channels: bool,
    },

    /// Copy or swap the source channel into the destination channel.
    CopyChannel {
        /// Swap source and destination channels instead of copying.
        swap: bool,
        /// Put the copied value in all channels of the destination.
        all_channels: bool,
    },

    /// Fill the active channels of the active layer.
    Fill {
        /// Value to fill channel(s) with.
        value: f32,
        /// Clear inactive channel(s).
        clear_inactive: bool,
    },

    /// Invert the active channels of the active layer.
    Invert,
}

impl VertexColorCommand {
    /// Short label for logs and undo history entries.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::RgbToGrayscale { .. } => "RGB to grayscale",
            Self::CopyChannel { .. } => "Copy channel data",
            Self::Fill { .. } => "Fill",
            Self::Invert => "Invert",
        }
    }
}
