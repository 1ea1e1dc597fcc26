//! Graphics device module
//!
//! The opaque immediate-mode device seam, the state cache every pass goes
//! through, and the scoped save/restore guards built on top of it.

mod graphics_device;
mod graphics_state;
mod scoped_state;

pub use graphics_device::{
    GraphicsDevice, Rect2D, Extent2D, Capabilities, ClearMask,
    device_error_name,
};
pub use graphics_state::GraphicsState;
pub use scoped_state::{
    SavedValue, SavedViewport, SavedScissor, SavedCapability,
    StateGuard, ScopedViewport, ScopedScissor, ScopedCapability,
};

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_device;
