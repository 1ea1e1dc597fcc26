//! Renderer module
//!
//! A renderer draws one viewport of a window: it owns the active camera,
//! the erase/picking flags, and the background used when clearing.

mod renderer;

pub use renderer::{Renderer, RendererDesc, CameraHandle};
