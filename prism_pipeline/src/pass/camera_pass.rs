/// CameraPass: per-frame viewing setup in front of a nested pass.
///
/// One call of `render` resolves the active camera, selects the draw/read
/// target, restricts viewport and scissor to the renderer's tile, clears it,
/// then hands the same `RenderState` to the delegate. Viewport, scissor and
/// the scissor test are restored when `render` returns, whichever way it
/// returns.

use std::fmt;
use crate::device::Capabilities;
use crate::error::Result;
use crate::window::Window;
use crate::{prism_error, prism_trace, prism_warn};
use super::camera_resolver::ensure_active_camera;
use super::render_pass::{RenderPass, RenderState};
use super::target_selector::select_target;

const SOURCE: &str = "prism::CameraPass";

pub struct CameraPass {
    delegate_pass: Option<Box<dyn RenderPass>>,
    rendered_props: u32,
    aspect_ratio_override: f64,
}

impl CameraPass {
    /// Create a pass without a delegate
    pub fn new() -> Self {
        Self {
            delegate_pass: None,
            rendered_props: 0,
            aspect_ratio_override: 1.0,
        }
    }

    /// Builder form of `set_delegate_pass`
    pub fn with_delegate_pass(mut self, pass: impl RenderPass + 'static) -> Self {
        self.delegate_pass = Some(Box::new(pass));
        self
    }

    // ===== DELEGATE =====

    /// Replace the nested pass; the previous one is dropped
    pub fn set_delegate_pass(&mut self, pass: Option<Box<dyn RenderPass>>) {
        self.delegate_pass = pass;
    }

    pub fn delegate_pass(&self) -> Option<&dyn RenderPass> {
        self.delegate_pass.as_deref()
    }

    pub fn delegate_pass_mut(&mut self) -> Option<&mut (dyn RenderPass + 'static)> {
        self.delegate_pass.as_deref_mut()
    }

    /// Remove the nested pass and hand it back to the caller
    pub fn take_delegate_pass(&mut self) -> Option<Box<dyn RenderPass>> {
        self.delegate_pass.take()
    }

    // ===== ASPECT RATIO =====

    /// Aspect ratio handed to projection setup; stored, not interpreted here
    pub fn aspect_ratio_override(&self) -> f64 {
        self.aspect_ratio_override
    }

    pub fn set_aspect_ratio_override(&mut self, ratio: f64) {
        self.aspect_ratio_override = ratio;
    }
}

impl Default for CameraPass {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CameraPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let delegate = self.delegate_pass.as_ref().map_or("(none)", |pass| pass.name());
        write!(f, "CameraPass(aspect_ratio_override: {}, delegate_pass: {})",
            self.aspect_ratio_override, delegate)
    }
}

impl RenderPass for CameraPass {
    fn render(&mut self, state: &RenderState<'_>) -> Result<()> {
        self.rendered_props = 0;

        let renderer = state.renderer();
        let window = state.window();
        let gl = window.state();

        let camera = ensure_active_camera(renderer);

        window.make_current()?;
        gl.drain_errors();

        let area = select_target(state, window, &mut camera.borrow_mut())?;
        prism_trace!(SOURCE, "Render area {}x{} at ({}, {})", area.width, area.height, area.x, area.y);

        // Dropped in reverse order at the end of this call.
        let _viewport = gl.scoped_viewport();
        let _scissor = gl.scoped_scissor();
        let _scissor_test = gl.scoped_capability(Capabilities::SCISSOR_TEST);

        gl.set_viewport(area)?;
        gl.enable(Capabilities::SCISSOR_TEST)?;
        gl.set_scissor(area)?;

        // Picking reads back what is already in the buffers.
        if window.erase() && renderer.erase() && !renderer.is_picking() {
            renderer.clear()?;
        }

        gl.check_errors("failed after camera initialization");

        let outcome = match self.delegate_pass.as_deref_mut() {
            Some(delegate) => {
                gl.mark_debug_event("Start CameraPass delegate")?;
                let result = delegate.render(state);
                let end_marker = gl.mark_debug_event("End CameraPass delegate");
                match result {
                    Ok(()) => {
                        self.rendered_props = self.rendered_props.saturating_add(delegate.rendered_prop_count());
                        end_marker
                    }
                    Err(err) => {
                        // The delegate's error wins over a rejected marker.
                        if let Err(marker_err) = end_marker {
                            prism_error!(SOURCE, "End marker rejected after delegate failure: {}", marker_err);
                        }
                        Err(err)
                    }
                }
            }
            None => {
                prism_warn!(SOURCE, "No delegate pass, nothing rendered");
                Ok(())
            }
        };

        gl.check_errors("failed after delegate pass");
        outcome
    }

    fn release_graphics_resources(&mut self, window: &Window) {
        if let Some(delegate) = self.delegate_pass.as_deref_mut() {
            delegate.release_graphics_resources(window);
        }
    }

    fn rendered_prop_count(&self) -> u32 {
        self.rendered_props
    }

    fn name(&self) -> &str {
        "CameraPass"
    }
}

#[cfg(test)]
#[path = "camera_pass_tests.rs"]
mod tests;
