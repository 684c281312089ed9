use std::path::PathBuf;

use vcm_core::{ParseChannelError, VertexColorError};

/// Errors surfaced to the host application.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Color(#[from] VertexColorError),

    #[error(transparent)]
    Channel(#[from] ParseChannelError),

    #[error("failed to read settings from {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    SettingsFormat(#[from] serde_json::Error),

    #[error("invalid value for {var}: {value:?}")]
    EnvOverride { var: &'static str, value: String },
}
