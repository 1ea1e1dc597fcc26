//! Render pass module
//!
//! A render pass is one stage of a frame. Stages nest: a pass sets up
//! state and hands the same `RenderState` to the pass it owns.

mod render_pass;
mod camera_pass;
mod sequence_pass;
mod custom_pass;
pub mod camera_resolver;
pub mod target_selector;

pub use render_pass::{RenderPass, RenderState, RenderTarget};
pub use camera_pass::CameraPass;
pub use sequence_pass::SequencePass;
pub use custom_pass::CustomPass;

// Recording passes for tests
#[cfg(test)]
pub mod mock_pass;
