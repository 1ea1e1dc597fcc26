/*!
# Prism Pipeline

A composable render-pass pipeline for immediate-mode graphics devices.

Each frame is rendered by a chain of passes. A pass prepares device state,
hands the same `RenderState` to the pass it owns, and puts the state back
when it is done. The `CameraPass` is the usual head of such a chain: it
resolves the active camera, selects the draw/read buffers for the window
(double buffering, stereo, offscreen targets), restricts viewport and scissor
to the renderer's tile, clears it, and delegates.

## Architecture

- **GraphicsDevice**: Object-safe seam to the graphics API
- **GraphicsState**: State cache in front of a device, with scoped save/restore guards
- **Window / Renderer**: Frame configuration read by the passes
- **Camera**: Viewing parameters, framed around visible bounds on demand
- **RenderPass**: Pipeline stage trait (`CameraPass`, `SequencePass`, `CustomPass`)

Backends implement `GraphicsDevice`; applications build a pass chain and call
`render` once per frame per renderer.
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod device;
pub mod camera;
pub mod window;
pub mod renderer;
pub mod pass;

// Main prism namespace module
pub mod prism {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::diagnostics::Diagnostics;

    // Logging sub-module (types only; the prism_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Device seam, state cache and guards
    pub mod device {
        pub use crate::device::*;
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod window {
        pub use crate::window::*;
    }

    pub mod renderer {
        pub use crate::renderer::*;
    }

    // Passes and the per-call render state
    pub mod pass {
        pub use crate::pass::*;
    }
}

// Re-export math library at crate root
pub use glam;
