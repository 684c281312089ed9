//! Fill the active channels of the active layer with one value.

use rayon::prelude::*;

use crate::channel::{ChannelSet, SLOT_COUNT};
use crate::error::{Outcome, VertexColorError};
use crate::mesh::Mesh;
use crate::request::FillRequest;

/// What a fill does to one sample slot.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SlotAction {
    Set(f32),
    Keep,
}

/// Per-slot actions, decided once before the pass.
fn slot_actions(channels: ChannelSet, value: f32, clear_inactive: bool) -> [SlotAction; SLOT_COUNT] {
    channels.slots().map(|active| {
        if active {
            SlotAction::Set(value)
        } else if clear_inactive {
            SlotAction::Set(0.0)
        } else {
            SlotAction::Keep
        }
    })
}

/// Clamp a requested fill value into the channel domain. NaN becomes 0.
fn clamp_value(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Fill the active layer (created when the mesh has none) and make it the
/// mesh's active layer.
pub fn fill(mesh: &mut Mesh, request: &FillRequest) -> Result<Outcome, VertexColorError> {
    let value = clamp_value(request.value);
    if value != request.value {
        tracing::debug!("fill: value {} clamped to {value}", request.value);
    }
    let layer = mesh.active_or_create()?;
    let actions = slot_actions(request.channels, value, request.clear_inactive);

    mesh.layer_at_mut(layer)
        .colors_mut()
        .par_iter_mut()
        .for_each(|color| {
            for (slot, action) in color.iter_mut().zip(actions) {
                if let SlotAction::Set(v) = action {
                    *slot = v;
                }
            }
        });

    mesh.set_active_layer(layer);
    mesh.mark_dirty();
    let loops = mesh.loop_count();
    tracing::debug!(
        "fill [{}] = {value} (clear_inactive={}) over {loops} loops",
        request.channels,
        request.clear_inactive,
    );
    Ok(Outcome::Applied { loops })
}
