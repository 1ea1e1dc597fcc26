/// Recording passes and fixtures for unit tests

use std::sync::{Arc, Mutex};
use crate::device::{Capabilities, Extent2D, Rect2D};
use crate::device::mock_device::{shared_mock_window, DeviceSpy};
use crate::error::{Error, Result};
use crate::renderer::{Renderer, RendererDesc};
use crate::window::{Window, WindowDesc};
use super::{RenderPass, RenderState, RenderTarget};

// ============================================================================
// Fixtures
// ============================================================================

/// Renderer over a MockDevice-backed window
pub fn mock_renderer(window: WindowDesc, desc: RendererDesc) -> (Renderer, DeviceSpy) {
    let (window, spy) = shared_mock_window(window);
    (Renderer::new(window, desc).unwrap(), spy)
}

/// Offscreen target with a fixed size
pub struct TestTarget(pub Extent2D);

impl RenderTarget for TestTarget {
    fn last_size(&self) -> Extent2D {
        self.0
    }
}

// ============================================================================
// Mock pass
// ============================================================================

/// What a MockPass saw and how often it was called
#[derive(Debug, Default, Clone)]
pub struct PassRecord {
    pub renders: u32,
    pub releases: u32,
    pub dropped: bool,
    pub viewport: Option<Rect2D>,
    pub scissor: Option<Rect2D>,
    pub scissor_test: Option<bool>,
    pub left_eye: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeed,
    Fail,
    Panic,
}

pub struct MockPass {
    count: u32,
    outcome: Outcome,
    scramble_state: bool,
    rendered: u32,
    record: Arc<Mutex<PassRecord>>,
}

impl MockPass {
    /// Pass reporting `count` rendered props
    pub fn new(count: u32) -> (Self, Arc<Mutex<PassRecord>>) {
        let record = Arc::new(Mutex::new(PassRecord::default()));
        let pass = Self {
            count,
            outcome: Outcome::Succeed,
            scramble_state: false,
            rendered: 0,
            record: record.clone(),
        };
        (pass, record)
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Overwrite viewport, scissor, and scissor test while rendering
    pub fn scrambling_state(mut self) -> Self {
        self.scramble_state = true;
        self
    }
}

impl Drop for MockPass {
    fn drop(&mut self) {
        if let Ok(mut record) = self.record.lock() {
            record.dropped = true;
        }
    }
}

impl RenderPass for MockPass {
    fn render(&mut self, state: &RenderState<'_>) -> Result<()> {
        self.rendered = 0;
        let gl = state.window().state();
        {
            let mut record = self.record.lock().unwrap();
            record.renders += 1;
            record.viewport = Some(gl.viewport());
            record.scissor = Some(gl.scissor());
            record.scissor_test = Some(gl.is_enabled(Capabilities::SCISSOR_TEST));
            record.left_eye = state.renderer().active_camera().map(|c| c.borrow().is_left_eye());
        }

        if self.scramble_state {
            gl.set_viewport(Rect2D::new(1, 2, 3, 4))?;
            gl.set_scissor(Rect2D::new(5, 6, 7, 8))?;
            gl.disable(Capabilities::SCISSOR_TEST)?;
        }

        match self.outcome {
            Outcome::Succeed => {
                self.rendered = self.count;
                Ok(())
            }
            Outcome::Fail => Err(Error::PassFailed("mock pass failure".to_string())),
            Outcome::Panic => panic!("mock pass panic"),
        }
    }

    fn release_graphics_resources(&mut self, _window: &Window) {
        self.record.lock().unwrap().releases += 1;
    }

    fn rendered_prop_count(&self) -> u32 {
        self.rendered
    }

    fn name(&self) -> &str {
        "MockPass"
    }
}
