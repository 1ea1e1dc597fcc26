//! Draw/read target selection.
//!
//! Decides which buffers the device draws into and reads from for one
//! render call, and keeps the camera eye flag in line with forced-eye
//! stereo modes.
//!
//! | target    | stereo                | double buffered | single buffered |
//! |-----------|-----------------------|-----------------|-----------------|
//! | offscreen | any                   | untouched       | untouched       |
//! | screen    | off                   | back            | front           |
//! | screen    | crystal eyes, left    | back-left       | front-left      |
//! | screen    | crystal eyes, right   | back-right      | front-right     |
//! | screen    | left / right          | untouched, eye forced | untouched, eye forced |
//! | screen    | other                 | untouched       | untouched       |

use crate::camera::Camera;
use crate::device::Rect2D;
use crate::error::Result;
use crate::prism_trace;
use crate::window::{ColorBuffer, StereoType, Window};
use super::render_pass::RenderState;

const SOURCE: &str = "prism::TargetSelector";

/// Configure the device's draw/read buffers and return the drawable rectangle
///
/// With an offscreen target the rectangle is the target's last size at the
/// origin and no buffer is touched. On screen, a non-zero default
/// framebuffer is rebound first and the rectangle is the renderer's tile.
pub fn select_target(state: &RenderState<'_>, window: &Window, camera: &mut Camera) -> Result<Rect2D> {
    if let Some(target) = state.target() {
        let size = target.last_size();
        prism_trace!(SOURCE, "Offscreen target {}x{}", size.width, size.height);
        return Ok(Rect2D::from_extent(size));
    }

    let framebuffer = window.default_framebuffer();
    if framebuffer != 0 {
        window.state().bind_framebuffer(framebuffer)?;
    }

    let area = state.tiled_size_and_origin();

    if !window.is_stereo_render() {
        let buffer = if window.is_double_buffered() {
            ColorBuffer::Back
        } else {
            ColorBuffer::Front
        };
        select_color_buffer(window, buffer)?;
        return Ok(area);
    }

    match window.stereo_type() {
        StereoType::CrystalEyes => {
            let buffer = match (camera.is_left_eye(), window.is_double_buffered()) {
                (true, true) => ColorBuffer::BackLeft,
                (true, false) => ColorBuffer::FrontLeft,
                (false, true) => ColorBuffer::BackRight,
                (false, false) => ColorBuffer::FrontRight,
            };
            select_color_buffer(window, buffer)?;
        }
        // Buffers for forced-eye modes are the window's business.
        StereoType::Left => camera.set_left_eye(true),
        StereoType::Right => camera.set_left_eye(false),
        _ => {}
    }

    Ok(area)
}

/// Draw into and read from the same color buffer
fn select_color_buffer(window: &Window, buffer: ColorBuffer) -> Result<()> {
    let id = window.buffer_id(buffer);
    prism_trace!(SOURCE, "Draw/read buffer {:?} (0x{:04X})", buffer, id);
    window.state().draw_buffer(id)?;
    window.state().read_buffer(id)
}

#[cfg(test)]
#[path = "target_selector_tests.rs"]
mod tests;
