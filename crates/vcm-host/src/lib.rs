//! Host shim for Vertex Color Master.
//!
//! Turns operator commands plus panel state into calls on `vcm-core`. The
//! host application owns the UI, undo and redraw; this crate only carries
//! state between its widgets and the core operations.

mod error;

pub mod command;
pub mod dispatch;
pub mod panel;
pub mod settings;
pub mod shared;

pub use command::VertexColorCommand;
pub use dispatch::{Request, execute};
pub use error::HostError;
pub use panel::{PanelState, layer_items};
pub use settings::Settings;
pub use shared::SharedMesh;
