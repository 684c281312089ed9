//! Mesh and color layer representation.
//!
//! A mesh is reduced to what color editing needs: the number of loops (one
//! per face corner) and the named color layers attached to it. Every layer
//! stores exactly one sample per loop, in loop order.

use serde::{Deserialize, Serialize};

use crate::error::VertexColorError;

/// One color sample, `[R, G, B]` in `[0, 1]`.
pub type LoopColor = [f32; 3];

/// Color given to every loop of a freshly created layer.
pub const DEFAULT_LAYER_COLOR: LoopColor = [1.0, 1.0, 1.0];

/// Base name for layers created by the mesh itself.
const DEFAULT_LAYER_NAME: &str = "Col";

/// Layer capacity used by [`Mesh::new`].
pub const DEFAULT_MAX_LAYERS: usize = 8;

/// Position of a layer inside its mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(usize);

/// A named, loop-indexed array of color samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorLayer {
    name: String,
    colors: Vec<LoopColor>,
}

impl ColorLayer {
    /// Layer of `loop_count` samples, all set to [`DEFAULT_LAYER_COLOR`].
    pub fn new(name: impl Into<String>, loop_count: usize) -> Self {
        Self::from_colors(name, vec![DEFAULT_LAYER_COLOR; loop_count])
    }

    /// Layer from existing per-loop samples.
    pub fn from_colors(name: impl Into<String>, colors: Vec<LoopColor>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Layer from a flat `[r0, g0, b0, r1, ...]` buffer.
    pub fn from_flat(name: impl Into<String>, flat: &[f32]) -> Result<Self, VertexColorError> {
        let colors: &[LoopColor] = bytemuck::try_cast_slice(flat)
            .map_err(|_| VertexColorError::MalformedBuffer { len: flat.len() })?;
        Ok(Self::from_colors(name, colors.to_vec()))
    }

    /// Layer name, unique within its mesh.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of samples (equals the mesh loop count once attached).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the layer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Sample of loop `index`.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn get(&self, index: usize) -> LoopColor {
        self.colors[index]
    }

    /// Overwrite the sample of loop `index`.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn set(&mut self, index: usize, color: LoopColor) {
        self.colors[index] = color;
    }

    /// All samples in loop order.
    pub fn colors(&self) -> &[LoopColor] {
        &self.colors
    }

    pub(crate) fn colors_mut(&mut self) -> &mut [LoopColor] {
        &mut self.colors
    }

    /// Samples as a flat float slice, three floats per loop.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }
}

/// Mutable sample view of a layer attached to a mesh.
#[derive(Debug)]
pub struct LayerMut<'a>(&'a mut ColorLayer);

impl LayerMut<'_> {
    /// Layer name.
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Number of samples, always the mesh loop count.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mesh has no loops.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sample of loop `index`.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn get(&self, index: usize) -> LoopColor {
        self.0.get(index)
    }

    /// Overwrite the sample of loop `index`.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn set(&mut self, index: usize, color: LoopColor) {
        self.0.set(index, color);
    }

    /// All samples in loop order, writable in place.
    pub fn colors_mut(&mut self) -> &mut [LoopColor] {
        self.0.colors_mut()
    }
}

/// A polygon mesh as seen by the color operations.
#[derive(Debug, Clone)]
pub struct Mesh {
    loop_count: usize,
    layers: Vec<ColorLayer>,
    active: Option<LayerId>,
    max_layers: usize,
    revision: u64,
    dirty: bool,
}

impl Mesh {
    /// Mesh with `loop_count` loops, no color layers and room for
    /// [`DEFAULT_MAX_LAYERS`] layers.
    pub fn new(loop_count: usize) -> Self {
        Self::with_layer_limit(loop_count, DEFAULT_MAX_LAYERS)
    }

    /// Mesh that accepts at most `max_layers` color layers. A limit of 0
    /// means the host does not allow the mesh to grow layers at all.
    pub fn with_layer_limit(loop_count: usize, max_layers: usize) -> Self {
        Self {
            loop_count,
            layers: Vec::new(),
            active: None,
            max_layers,
            revision: 0,
            dirty: false,
        }
    }

    /// Number of loops (face corners).
    pub fn loop_count(&self) -> usize {
        self.loop_count
    }

    /// Attach a layer built by the host. The first layer attached becomes
    /// active.
    pub fn add_layer(&mut self, layer: ColorLayer) -> Result<LayerId, VertexColorError> {
        if self.layer(layer.name()).is_some() {
            return Err(VertexColorError::DuplicateLayer { name: layer.name });
        }
        if layer.len() != self.loop_count {
            return Err(VertexColorError::LoopCountMismatch {
                expected: self.loop_count,
                actual: layer.len(),
                name: layer.name,
            });
        }
        if self.layers.len() >= self.max_layers {
            return Err(VertexColorError::LayerLimit {
                max: self.max_layers,
            });
        }
        let id = LayerId(self.layers.len());
        self.layers.push(layer);
        if self.active.is_none() {
            self.active = Some(id);
        }
        Ok(id)
    }

    /// Create a white layer with a fresh `Col`, `Col.001`, ... name.
    pub fn create_layer(&mut self) -> Result<LayerId, VertexColorError> {
        let name = self.unique_layer_name();
        tracing::debug!("creating color layer {name:?} ({} loops)", self.loop_count);
        self.add_layer(ColorLayer::new(name, self.loop_count))
    }

    fn unique_layer_name(&self) -> String {
        if self.layer(DEFAULT_LAYER_NAME).is_none() {
            return DEFAULT_LAYER_NAME.to_string();
        }
        (1..)
            .map(|n| format!("{DEFAULT_LAYER_NAME}.{n:03}"))
            .find(|candidate| self.layer(candidate).is_none())
            .unwrap_or_default()
    }

    /// Detach and return the named layer.
    pub fn remove_layer(&mut self, name: &str) -> Option<ColorLayer> {
        let LayerId(index) = self.find(name)?;
        let layer = self.layers.remove(index);
        self.active = match self.active {
            Some(LayerId(a)) if a == index => (!self.layers.is_empty()).then_some(LayerId(0)),
            Some(LayerId(a)) if a > index => Some(LayerId(a - 1)),
            other => other,
        };
        Some(layer)
    }

    fn find(&self, name: &str) -> Option<LayerId> {
        self.layers
            .iter()
            .position(|layer| layer.name == name)
            .map(LayerId)
    }

    /// Look up a layer by name, failing with `LayerNotFound`.
    pub fn resolve(&self, name: &str) -> Result<LayerId, VertexColorError> {
        self.find(name).ok_or_else(|| VertexColorError::LayerNotFound {
            name: name.to_string(),
        })
    }

    /// The named layer, if present.
    pub fn layer(&self, name: &str) -> Option<&ColorLayer> {
        self.find(name).map(|id| &self.layers[id.0])
    }

    /// Sample access to the named layer. The handle can rewrite samples but
    /// not the layer's name or length.
    pub fn layer_mut(&mut self, name: &str) -> Option<LayerMut<'_>> {
        self.find(name).map(|id| LayerMut(&mut self.layers[id.0]))
    }

    pub(crate) fn layer_at_mut(&mut self, id: LayerId) -> &mut ColorLayer {
        &mut self.layers[id.0]
    }

    /// Two distinct layers borrowed mutably at once.
    pub(crate) fn layer_pair_mut(
        &mut self,
        first: LayerId,
        second: LayerId,
    ) -> (&mut ColorLayer, &mut ColorLayer) {
        debug_assert_ne!(first, second, "layer pair must be distinct");
        if first.0 < second.0 {
            let (head, tail) = self.layers.split_at_mut(second.0);
            (&mut head[first.0], &mut tail[0])
        } else {
            let (head, tail) = self.layers.split_at_mut(first.0);
            (&mut tail[0], &mut head[second.0])
        }
    }

    /// Layers in creation order.
    pub fn layers(&self) -> &[ColorLayer] {
        &self.layers
    }

    /// Layer names in creation order, for host pickers.
    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(ColorLayer::name)
    }

    /// The active layer, if any.
    pub fn active_layer(&self) -> Option<&ColorLayer> {
        self.active.map(|id| &self.layers[id.0])
    }

    /// Make `id` the active layer. Ids come from this mesh's own lookups
    /// within one call; hosts go through [`Mesh::set_active_layer_by_name`].
    pub(crate) fn set_active_layer(&mut self, id: LayerId) {
        debug_assert!(id.0 < self.layers.len(), "stale layer id {id:?}");
        self.active = Some(id);
    }

    /// Make the named layer active.
    pub fn set_active_layer_by_name(&mut self, name: &str) -> Result<(), VertexColorError> {
        let id = self.resolve(name)?;
        self.set_active_layer(id);
        Ok(())
    }

    /// The active layer, falling back to the first layer, creating one when
    /// the mesh has none.
    pub fn active_or_create(&mut self) -> Result<LayerId, VertexColorError> {
        if let Some(id) = self.active {
            return Ok(id);
        }
        if !self.layers.is_empty() {
            return Ok(LayerId(0));
        }
        self.create_layer().map_err(|err| {
            tracing::debug!("cannot create a color layer: {err}");
            VertexColorError::NoLayer
        })
    }

    /// Signal that color data changed and the host should redraw.
    pub fn mark_dirty(&mut self) {
        self.revision += 1;
        self.dirty = true;
    }

    /// Whether color data changed since the last [`Mesh::take_dirty`].
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Number of times color data has been marked dirty.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
