//! Active camera resolution.

use crate::prism_debug;
use crate::renderer::{CameraHandle, Renderer};

/// Return the renderer's active camera, creating and framing one if needed
///
/// Only the first call on a renderer without a camera creates and resets
/// one; later calls hand back the same camera untouched.
pub fn ensure_active_camera(renderer: &Renderer) -> CameraHandle {
    if let Some(camera) = renderer.active_camera() {
        return camera;
    }

    prism_debug!("prism::CameraResolver", "No active camera, creating one");
    let camera = renderer.create_active_camera();
    renderer.reset_camera();
    camera
}

#[cfg(test)]
#[path = "camera_resolver_tests.rs"]
mod tests;
