//! Single-channel copy and swap between two layer/channel addresses.
//!
//! Three modes:
//! - **broadcast**: `dst[i] = (s, s, s)` with `s = src[i][src_channel]`.
//!   Always a copy; `swap` is ignored.
//! - **copy**: `dst[i][dst_channel] = src[i][src_channel]`.
//! - **swap**: both values of loop `i` are read before either is written,
//!   so the two addresses may live in the same layer.
//!
//! Copying or swapping a channel onto itself is reported as
//! [`Outcome::SkippedSameAddress`] and leaves the mesh untouched.

use rayon::prelude::*;

use crate::error::{Outcome, VertexColorError};
use crate::mesh::Mesh;
use crate::request::TransferRequest;

/// Copy or swap one channel between two layers.
pub fn transfer(mesh: &mut Mesh, request: &TransferRequest) -> Result<Outcome, VertexColorError> {
    let src = mesh.resolve(&request.src_layer)?;
    let dst = mesh.resolve(&request.dst_layer)?;

    let sc = request.src_channel.index();
    let dc = request.dst_channel.index();
    let same_layer = src == dst;

    if request.broadcast {
        if request.swap {
            tracing::debug!("transfer: broadcast implies copy, ignoring swap");
        }
        if same_layer {
            mesh.layer_at_mut(src)
                .colors_mut()
                .par_iter_mut()
                .for_each(|color| *color = [color[sc]; 3]);
        } else {
            let (src_layer, dst_layer) = mesh.layer_pair_mut(src, dst);
            dst_layer
                .colors_mut()
                .par_iter_mut()
                .zip(src_layer.colors().par_iter())
                .for_each(|(out, color)| *out = [color[sc]; 3]);
        }
    } else {
        if same_layer && sc == dc {
            tracing::info!(
                "transfer: source and destination are both {:?}.{}, nothing to do",
                request.src_layer,
                request.src_channel,
            );
            return Ok(Outcome::SkippedSameAddress);
        }

        match (same_layer, request.swap) {
            (true, true) => mesh
                .layer_at_mut(src)
                .colors_mut()
                .par_iter_mut()
                .for_each(|color| color.swap(sc, dc)),
            (true, false) => mesh
                .layer_at_mut(src)
                .colors_mut()
                .par_iter_mut()
                .for_each(|color| color[dc] = color[sc]),
            (false, true) => {
                let (src_layer, dst_layer) = mesh.layer_pair_mut(src, dst);
                src_layer
                    .colors_mut()
                    .par_iter_mut()
                    .zip(dst_layer.colors_mut().par_iter_mut())
                    .for_each(|(s, d)| {
                        let src_val = s[sc];
                        let dst_val = d[dc];
                        d[dc] = src_val;
                        s[sc] = dst_val;
                    });
            }
            (false, false) => {
                let (src_layer, dst_layer) = mesh.layer_pair_mut(src, dst);
                dst_layer
                    .colors_mut()
                    .par_iter_mut()
                    .zip(src_layer.colors().par_iter())
                    .for_each(|(d, s)| d[dc] = s[sc]);
            }
        }
    }

    mesh.mark_dirty();
    let loops = mesh.loop_count();
    tracing::debug!(
        "transfer {:?}.{} -> {:?}.{} (swap={}, broadcast={}) over {loops} loops",
        request.src_layer,
        request.src_channel,
        request.dst_layer,
        request.dst_channel,
        request.swap && !request.broadcast,
        request.broadcast,
    );
    Ok(Outcome::Applied { loops })
}
