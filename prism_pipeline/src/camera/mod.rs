//! Camera module: the viewing parameters a camera pass resolves.
//!
//! Projection matrices are built by the stages that consume the camera;
//! this module only stores the view and frames it around content bounds.

mod bounds;
mod camera;

pub use bounds::AABB;
pub use camera::Camera;
