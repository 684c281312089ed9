//! A mesh shared between host threads.
//!
//! Operations need exclusive access to a mesh for the whole pass. The handle
//! holds the mesh behind a mutex and runs each command under the lock, so two
//! commands never interleave on the same mesh.

use std::sync::Arc;

use parking_lot::Mutex;
use vcm_core::{Mesh, Outcome};

use crate::command::VertexColorCommand;
use crate::dispatch;
use crate::error::HostError;
use crate::panel::PanelState;

/// Cloneable handle to a mesh owned by the host.
#[derive(Debug, Clone)]
pub struct SharedMesh {
    inner: Arc<Mutex<Mesh>>,
}

impl SharedMesh {
    /// Wrap a mesh.
    pub fn new(mesh: Mesh) -> Self {
        Self {
            inner: Arc::new(Mutex::new(mesh)),
        }
    }

    /// Execute a command while holding the mesh lock.
    pub fn execute(
        &self,
        panel: &PanelState,
        command: &VertexColorCommand,
    ) -> Result<Outcome, HostError> {
        let mut mesh = self.inner.lock();
        dispatch::execute(&mut mesh, panel, command)
    }

    /// Run `f` with shared read access to the mesh.
    pub fn read<R>(&self, f: impl FnOnce(&Mesh) -> R) -> R {
        f(&*self.inner.lock())
    }

    /// Run `f` with exclusive access to the mesh.
    pub fn write<R>(&self, f: impl FnOnce(&mut Mesh) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// Read and clear the mesh's dirty flag; hosts poll this to schedule a
    /// redraw.
    pub fn take_dirty(&self) -> bool {
        self.inner.lock().take_dirty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use vcm_core::ColorLayer;

    #[test]
    fn test_commands_from_threads_serialize() {
        let mut mesh = Mesh::new(64);
        mesh.add_layer(ColorLayer::from_colors("Col", vec![[0.25; 3]; 64]))
            .unwrap();
        let shared = SharedMesh::new(mesh);
        let panel = PanelState::default();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                let panel = panel.clone();
                thread::spawn(move || {
                    shared
                        .execute(&panel, &VertexColorCommand::Invert)
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_applied());
        }

        // an even number of inversions is the identity
        shared.read(|mesh| {
            assert_eq!(mesh.revision(), 4);
            assert!(mesh.layer("Col").unwrap().colors().iter().all(|c| *c == [0.25; 3]));
        });
        assert!(shared.take_dirty());
        assert!(!shared.take_dirty());
    }
}
