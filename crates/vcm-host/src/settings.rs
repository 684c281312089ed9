//! Operator defaults and their loading from disk and the environment.

use std::path::Path;

use serde::{Deserialize, Serialize};
use vcm_core::{Channel, ChannelSet, LoopColor};

use crate::command::VertexColorCommand;
use crate::error::HostError;
use crate::panel::PanelState;

/// Default fill value.
const DEFAULT_FILL_VALUE: f32 = 1.0;

/// Default brush value.
const DEFAULT_BRUSH_VALUE: f32 = 1.0;

/// Environment variable overriding [`Settings::fill_value`].
pub const ENV_FILL_VALUE: &str = "VCM_FILL_VALUE";
/// Environment variable overriding [`Settings::active_channels`], e.g. `RG`.
pub const ENV_ACTIVE_CHANNELS: &str = "VCM_ACTIVE_CHANNELS";

/// Defaults for the operator options and the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Channels active when a panel is first shown.
    pub active_channels: ChannelSet,
    /// Value of the paint brush color on active channels.
    pub brush_value: f32,
    /// Fill value offered by the fill operator.
    pub fill_value: f32,
    /// Whether fill clears inactive channels.
    pub clear_inactive: bool,
    /// Whether grayscale conversion writes all destination channels.
    pub grayscale_all_channels: bool,
    /// Whether channel copy writes all destination channels.
    pub copy_all_channels: bool,
    /// Whether channel copy swaps instead.
    pub swap_channels: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            active_channels: ChannelSet::RGB,
            brush_value: DEFAULT_BRUSH_VALUE,
            fill_value: DEFAULT_FILL_VALUE,
            clear_inactive: false,
            grayscale_all_channels: true,
            copy_all_channels: false,
            swap_channels: false,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, HostError> {
        let text = std::fs::read_to_string(path).map_err(|source| HostError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&text)?;
        tracing::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Apply `VCM_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, HostError> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, HostError> {
        if let Some(value) = lookup(ENV_FILL_VALUE) {
            self.fill_value = value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| HostError::EnvOverride {
                    var: ENV_FILL_VALUE,
                    value: value.clone(),
                })?;
        }
        if let Some(value) = lookup(ENV_ACTIVE_CHANNELS) {
            self.active_channels = parse_channel_list(&value)?;
        }
        Ok(self)
    }

    /// Draw color for a paint brush restricted to `channels`: the brush
    /// value on active channels, black elsewhere.
    pub fn brush_color(&self, channels: ChannelSet) -> LoopColor {
        let value = if self.brush_value.is_nan() {
            0.0
        } else {
            self.brush_value.clamp(0.0, 1.0)
        };
        channels
            .slots()
            .map(|active| if active { value } else { 0.0 })
    }

    /// Fresh panel state using these defaults.
    pub fn panel(&self) -> PanelState {
        PanelState {
            active_channels: self.active_channels,
            ..PanelState::default()
        }
    }

    /// The grayscale command with default options.
    pub fn grayscale_command(&self) -> VertexColorCommand {
        VertexColorCommand::RgbToGrayscale {
            all_channels: self.grayscale_all_channels,
        }
    }

    /// The copy-channel command with default options.
    pub fn copy_command(&self) -> VertexColorCommand {
        VertexColorCommand::CopyChannel {
            swap: self.swap_channels,
            all_channels: self.copy_all_channels,
        }
    }

    /// The fill command with default options.
    pub fn fill_command(&self) -> VertexColorCommand {
        VertexColorCommand::Fill {
            value: self.fill_value,
            clear_inactive: self.clear_inactive,
        }
    }
}

/// Parse a channel list such as `RGB`, `r,b` or `G B`. Unknown ids are an
/// error here, unlike the lenient panel pickers.
fn parse_channel_list(list: &str) -> Result<ChannelSet, HostError> {
    list.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_string().parse::<Channel>().map_err(HostError::from))
        .collect()
}
