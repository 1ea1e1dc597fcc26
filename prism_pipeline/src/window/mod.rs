//! Render window module
//!
//! The per-frame configuration a camera pass reads (buffering, stereo,
//! default framebuffer, buffer identifiers) and the graphics state of the
//! window's context.

mod window;

pub use window::{Window, WindowDesc, StereoType, ColorBuffer};
