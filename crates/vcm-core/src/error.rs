//! Error and outcome types shared by every operation.

/// Failures detected before an operation touches any loop data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VertexColorError {
    #[error("color layer not found: {name:?}")]
    LayerNotFound { name: String },

    #[error("mesh has no active color layer and none can be created")]
    NoLayer,

    #[error("color layer {name:?} already exists")]
    DuplicateLayer { name: String },

    #[error("mesh already holds the maximum of {max} color layers")]
    LayerLimit { max: usize },

    #[error("layer {name:?} has {actual} samples, mesh has {expected} loops")]
    LoopCountMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("flat color buffer of {len} floats is not a whole number of RGB samples")]
    MalformedBuffer { len: usize },
}

/// Host-supplied channel id that names no channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized channel identifier: {0:?}")]
pub struct ParseChannelError(pub String);

/// What a successful operation did to the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The pass ran over `loops` loops and the mesh was marked dirty.
    Applied { loops: usize },
    /// Source and destination name the same layer and channel; nothing was
    /// written.
    SkippedSameAddress,
}

impl Outcome {
    /// Whether the mesh was modified.
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}
