//! Request objects for the four color operations.
//!
//! A host collects layer names, channel ids, values and flags from its UI and
//! packs them into one of these structs. Operations never read UI state; the
//! request is the whole contract.

use serde::{Deserialize, Serialize};

use crate::channel::{Channel, ChannelSet};

/// RGB → luminosity conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuminosityRequest {
    /// Layer the RGB values are read from.
    pub src_layer: String,
    /// Layer the luminosity is written to. May equal `src_layer`.
    pub dst_layer: String,
    /// Channel receiving the luminosity when `broadcast` is off.
    pub dst_channel: Channel,
    /// Write the luminosity into R, G and B of the destination.
    pub broadcast: bool,
}

/// Single-channel copy or swap between two layer/channel addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Source layer name.
    pub src_layer: String,
    /// Destination layer name. May equal `src_layer`.
    pub dst_layer: String,
    /// Channel read from the source.
    pub src_channel: Channel,
    /// Channel written in the destination. Ignored when `broadcast` is set.
    pub dst_channel: Channel,
    /// Exchange the two channels instead of copying. Ignored when
    /// `broadcast` is set.
    pub swap: bool,
    /// Replicate the source channel into all three destination channels.
    pub broadcast: bool,
}

/// Set the active channels of the active layer to one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillRequest {
    /// Channels receiving `value`.
    pub channels: ChannelSet,
    /// Fill value, clamped to `[0, 1]` before use.
    pub value: f32,
    /// Zero the channels not in `channels` instead of leaving them.
    pub clear_inactive: bool,
}

impl Default for FillRequest {
    /// Fill every channel with white, keeping nothing.
    fn default() -> Self {
        Self {
            channels: ChannelSet::RGB,
            value: 1.0,
            clear_inactive: false,
        }
    }
}

/// Complement the active channels of the active layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvertRequest {
    /// Channels to invert.
    pub channels: ChannelSet,
}

impl Default for InvertRequest {
    fn default() -> Self {
        Self {
            channels: ChannelSet::RGB,
        }
    }
}
