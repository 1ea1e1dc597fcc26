/// Camera: position, orientation, and stereo eye selection.
///
/// The camera pass only creates and frames a default camera and keeps the
/// eye flag consistent with the window's stereo mode. Everything else is
/// read by the nested stages that build projection matrices.

use glam::{Mat4, Vec3};
use crate::prism_warn;
use super::bounds::AABB;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    focal_point: Vec3,
    view_up: Vec3,
    view_angle: f32,
    clipping_range: [f32; 2],
    left_eye: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            focal_point: Vec3::ZERO,
            view_up: Vec3::Y,
            view_angle: 30.0,
            clipping_range: [0.01, 1000.01],
            left_eye: true,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn focal_point(&self) -> Vec3 {
        self.focal_point
    }

    pub fn view_up(&self) -> Vec3 {
        self.view_up
    }

    /// Vertical view angle in degrees
    pub fn view_angle(&self) -> f32 {
        self.view_angle
    }

    /// Near and far clipping distances
    pub fn clipping_range(&self) -> [f32; 2] {
        self.clipping_range
    }

    /// True while rendering the left eye of a stereo pair
    pub fn is_left_eye(&self) -> bool {
        self.left_eye
    }

    /// Distance between position and focal point
    pub fn distance(&self) -> f32 {
        self.position.distance(self.focal_point)
    }

    /// Unit vector from position towards the focal point
    pub fn direction_of_projection(&self) -> Vec3 {
        (self.focal_point - self.position).normalize_or(Vec3::NEG_Z)
    }

    /// World-to-view transform
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.focal_point, self.view_up)
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_focal_point(&mut self, focal_point: Vec3) {
        self.focal_point = focal_point;
    }

    pub fn set_view_up(&mut self, view_up: Vec3) {
        self.view_up = view_up.normalize_or(Vec3::Y);
    }

    pub fn set_view_angle(&mut self, degrees: f32) {
        self.view_angle = degrees.clamp(0.00000001, 179.0);
    }

    pub fn set_clipping_range(&mut self, near: f32, far: f32) {
        self.clipping_range = [near.min(far), near.max(far)];
    }

    pub fn set_left_eye(&mut self, left_eye: bool) {
        self.left_eye = left_eye;
    }

    // ===== FRAMING =====

    /// Move the camera so `bounds` fills the view.
    ///
    /// Keeps the direction of projection, aims at the bounds centre, and backs
    /// off until the bounding sphere fits the view angle.
    pub fn reset_to_bounds(&mut self, bounds: &AABB) {
        let view_plane_normal = -self.direction_of_projection();
        let center = bounds.center();

        let mut radius = bounds.radius();
        if radius == 0.0 {
            radius = 1.0;
        }

        let half_angle = self.view_angle.to_radians() * 0.5;
        let distance = radius / half_angle.sin();

        if self.view_up.dot(view_plane_normal).abs() > 0.999 {
            prism_warn!("prism::Camera",
                "Resetting view-up since view plane normal is parallel");
            let up = self.view_up;
            self.view_up = Vec3::new(-up.z, up.x, up.y);
        }

        self.focal_point = center;
        self.position = center + view_plane_normal * distance;

        let far = distance + radius;
        let near = (distance - radius).max(0.001 * far);
        self.clipping_range = [near, far];
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
