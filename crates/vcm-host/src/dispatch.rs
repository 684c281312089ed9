//! Command dispatch: the only place a host command turns into a mesh edit.
//!
//! The host sends a [`VertexColorCommand`]; the dispatcher combines it with
//! the current [`PanelState`] into a core request, runs it against the mesh,
//! and reports the outcome.

use vcm_core::{
    FillRequest, InvertRequest, LuminosityRequest, Mesh, Outcome, TransferRequest, ops,
};

use crate::command::VertexColorCommand;
use crate::error::HostError;
use crate::panel::PanelState;

/// A command resolved against panel state, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Luminosity(LuminosityRequest),
    Transfer(TransferRequest),
    Fill(FillRequest),
    Invert(InvertRequest),
}

impl Request {
    /// Build the core request for `command` from the panel's addressing.
    pub fn from_command(command: &VertexColorCommand, panel: &PanelState) -> Self {
        match *command {
            VertexColorCommand::RgbToGrayscale { all_channels } => {
                Self::Luminosity(LuminosityRequest {
                    src_layer: panel.src_layer.clone(),
                    dst_layer: panel.dst_layer.clone(),
                    dst_channel: panel.dst_channel,
                    broadcast: all_channels,
                })
            }
            VertexColorCommand::CopyChannel { swap, all_channels } => {
                Self::Transfer(TransferRequest {
                    src_layer: panel.src_layer.clone(),
                    dst_layer: panel.dst_layer.clone(),
                    src_channel: panel.src_channel,
                    dst_channel: panel.dst_channel,
                    swap,
                    broadcast: all_channels,
                })
            }
            VertexColorCommand::Fill {
                value,
                clear_inactive,
            } => Self::Fill(FillRequest {
                channels: panel.active_channels,
                value,
                clear_inactive,
            }),
            VertexColorCommand::Invert => Self::Invert(InvertRequest {
                channels: panel.active_channels,
            }),
        }
    }

    /// Run the request against `mesh`.
    pub fn apply(&self, mesh: &mut Mesh) -> Result<Outcome, HostError> {
        let outcome = match self {
            Self::Luminosity(request) => ops::convert(mesh, request)?,
            Self::Transfer(request) => ops::transfer(mesh, request)?,
            Self::Fill(request) => ops::fill(mesh, request)?,
            Self::Invert(request) => ops::invert(mesh, request)?,
        };
        Ok(outcome)
    }
}

/// Execute one host command.
///
/// Failures leave the mesh untouched and are logged before being returned so
/// the host can report them to the user. A same-address copy comes back as
/// [`Outcome::SkippedSameAddress`]; the core already logs it.
pub fn execute(
    mesh: &mut Mesh,
    panel: &PanelState,
    command: &VertexColorCommand,
) -> Result<Outcome, HostError> {
    let request = Request::from_command(command, panel);
    request
        .apply(mesh)
        .inspect_err(|e| tracing::warn!("{} failed: {e}", command.label()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcm_core::{Channel, ChannelSet};

    #[test]
    fn test_copy_command_maps_panel_addressing() {
        let panel = PanelState {
            src_layer: "a".to_string(),
            src_channel: Channel::G,
            dst_layer: "b".to_string(),
            dst_channel: Channel::B,
            active_channels: ChannelSet::EMPTY,
        };
        let request = Request::from_command(
            &VertexColorCommand::CopyChannel {
                swap: true,
                all_channels: false,
            },
            &panel,
        );
        assert_eq!(
            request,
            Request::Transfer(TransferRequest {
                src_layer: "a".to_string(),
                dst_layer: "b".to_string(),
                src_channel: Channel::G,
                dst_channel: Channel::B,
                swap: true,
                broadcast: false,
            })
        );
    }

    #[test]
    fn test_fill_and_invert_use_active_channels() {
        let panel = PanelState {
            active_channels: ChannelSet::EMPTY.with(Channel::R),
            ..PanelState::default()
        };
        let fill = Request::from_command(
            &VertexColorCommand::Fill {
                value: 0.2,
                clear_inactive: true,
            },
            &panel,
        );
        assert_eq!(
            fill,
            Request::Fill(FillRequest {
                channels: panel.active_channels,
                value: 0.2,
                clear_inactive: true,
            })
        );
        let invert = Request::from_command(&VertexColorCommand::Invert, &panel);
        assert_eq!(
            invert,
            Request::Invert(InvertRequest {
                channels: panel.active_channels
            })
        );
    }

    #[test]
    fn test_same_address_copy_passes_outcome_through() {
        let mut mesh = Mesh::new(2);
        mesh.add_layer(vcm_core::ColorLayer::new("Col", 2)).unwrap();
        let panel = PanelState {
            src_layer: "Col".to_string(),
            dst_layer: "Col".to_string(),
            ..PanelState::default()
        };
        let outcome = execute(
            &mut mesh,
            &panel,
            &VertexColorCommand::CopyChannel {
                swap: false,
                all_channels: false,
            },
        )
        .unwrap();
        assert_eq!(outcome, Outcome::SkippedSameAddress);
        assert!(!mesh.is_dirty());
    }
}
