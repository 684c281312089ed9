//! RGB → luminosity conversion.
//!
//! Reduces each source sample to a single luma value with the ITU-R BT.601
//! weights and writes it into one channel of the destination, or into all
//! three for a greyscale result.
//!
//! ```text
//! Y = 0.299 R + 0.587 G + 0.114 B
//! ```

use rayon::prelude::*;

use crate::error::{Outcome, VertexColorError};
use crate::mesh::{LoopColor, Mesh};
use crate::request::LuminosityRequest;

/// ITU-R BT.601 luma weights.
const LUMA_BT601: [f32; 3] = [0.299, 0.587, 0.114];

/// BT.601 luma of one sample.
pub fn rgb_to_luminosity(rgb: LoopColor) -> f32 {
    LUMA_BT601[0] * rgb[0] + LUMA_BT601[1] * rgb[1] + LUMA_BT601[2] * rgb[2]
}

/// Convert the source layer to luminosity and store it in the destination.
///
/// Source and destination may be the same layer: every loop computes its
/// luma from its own pre-write sample before writing.
pub fn convert(mesh: &mut Mesh, request: &LuminosityRequest) -> Result<Outcome, VertexColorError> {
    let src = mesh.resolve(&request.src_layer)?;
    let dst = mesh.resolve(&request.dst_layer)?;

    let broadcast = request.broadcast;
    let slot = request.dst_channel.index();
    let write = move |out: &mut LoopColor, rgb: LoopColor| {
        // Weights sum to one; clamp only absorbs f32 rounding at white.
        let luma = rgb_to_luminosity(rgb).clamp(0.0, 1.0);
        if broadcast {
            *out = [luma; 3];
        } else {
            out[slot] = luma;
        }
    };

    if src == dst {
        mesh.layer_at_mut(dst)
            .colors_mut()
            .par_iter_mut()
            .for_each(|color| {
                let rgb = *color;
                write(color, rgb);
            });
    } else {
        let (src_layer, dst_layer) = mesh.layer_pair_mut(src, dst);
        dst_layer
            .colors_mut()
            .par_iter_mut()
            .zip(src_layer.colors().par_iter())
            .for_each(|(out, rgb)| write(out, *rgb));
    }

    mesh.mark_dirty();
    let loops = mesh.loop_count();
    tracing::debug!(
        "luminosity {:?} -> {:?}.{} (broadcast={broadcast}) over {loops} loops",
        request.src_layer,
        request.dst_layer,
        request.dst_channel,
    );
    Ok(Outcome::Applied { loops })
}
