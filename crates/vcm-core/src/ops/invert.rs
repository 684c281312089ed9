//! Complement the active channels of the active layer.

use rayon::prelude::*;

use crate::error::{Outcome, VertexColorError};
use crate::mesh::Mesh;
use crate::request::InvertRequest;

/// Replace every active channel value `v` with `1 - v`.
///
/// Values already in `[0, 1]` stay in `[0, 1]`, so no clamp is applied.
pub fn invert(mesh: &mut Mesh, request: &InvertRequest) -> Result<Outcome, VertexColorError> {
    let layer = mesh.active_or_create()?;
    let active = request.channels.slots();

    mesh.layer_at_mut(layer)
        .colors_mut()
        .par_iter_mut()
        .for_each(|color| {
            for (value, on) in color.iter_mut().zip(active) {
                if on {
                    *value = 1.0 - *value;
                }
            }
        });

    mesh.set_active_layer(layer);
    mesh.mark_dirty();
    let loops = mesh.loop_count();
    tracing::debug!("invert [{}] over {loops} loops", request.channels);
    Ok(Outcome::Applied { loops })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{Channel, ChannelSet};
    use crate::mesh::ColorLayer;

    const EPSILON: f32 = 1e-6;

    fn mesh() -> Mesh {
        let mut mesh = Mesh::new(2);
        mesh.add_layer(ColorLayer::from_colors(
            "Col",
            vec![[0.25, 0.5, 1.0], [0.0, 0.3, 0.9]],
        ))
        .unwrap();
        mesh
    }

    #[test]
    fn test_invert_selected_channels_only() {
        let mut mesh = mesh();
        let request = InvertRequest {
            channels: ChannelSet::EMPTY.with(Channel::R).with(Channel::B),
        };
        invert(&mut mesh, &request).unwrap();
        let layer = mesh.layer("Col").unwrap();
        assert_eq!(layer.get(0), [0.75, 0.5, 0.0]);
        assert_eq!(layer.get(1)[1], 0.3);
        assert!((layer.get(1)[2] - 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_invert_twice_is_identity() {
        let mut mesh = mesh();
        let before = mesh.layer("Col").unwrap().clone();
        invert(&mut mesh, &InvertRequest::default()).unwrap();
        invert(&mut mesh, &InvertRequest::default()).unwrap();
        let after = mesh.layer("Col").unwrap();
        for (a, b) in after.colors().iter().zip(before.colors()) {
            for c in 0..3 {
                assert!((a[c] - b[c]).abs() < EPSILON, "ch{c}: {} vs {}", a[c], b[c]);
            }
        }
        assert_eq!(mesh.revision(), 2);
    }

    #[test]
    fn test_invert_empty_set_marks_dirty_without_change() {
        let mut mesh = mesh();
        let before = mesh.layers().to_vec();
        invert(
            &mut mesh,
            &InvertRequest {
                channels: ChannelSet::EMPTY,
            },
        )
        .unwrap();
        assert_eq!(mesh.layers(), before.as_slice());
        assert!(mesh.is_dirty());
    }

    #[test]
    fn test_invert_creates_white_layer_then_blackens_it() {
        let mut mesh = Mesh::new(3);
        invert(&mut mesh, &InvertRequest::default()).unwrap();
        let layer = mesh.active_layer().unwrap();
        assert!(layer.colors().iter().all(|c| *c == [0.0; 3]));
    }

    #[test]
    fn test_invert_without_layer_capacity() {
        let mut mesh = Mesh::with_layer_limit(3, 0);
        let err = invert(&mut mesh, &InvertRequest::default()).unwrap_err();
        assert_eq!(err, VertexColorError::NoLayer);
        assert!(mesh.layers().is_empty());
        assert!(!mesh.is_dirty());
        assert_eq!(mesh.revision(), 0);
    }
}
