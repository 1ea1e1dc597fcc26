/// Mock graphics device for unit tests (no GPU required)
///
/// Every command is appended to a shared call log so tests can assert on
/// the exact device traffic a pass produced.

use std::rc::Rc;
use std::sync::{Arc, Mutex};
use crate::error::Result;
use crate::prism_bail;
use crate::window::{Window, WindowDesc};
use super::{GraphicsDevice, Rect2D, Capabilities, ClearMask};

// ============================================================================
// Device calls
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    MakeCurrent,
    BindFramebuffer(u32),
    DrawBuffer(u32),
    ReadBuffer(u32),
    Viewport(Rect2D),
    Scissor(Rect2D),
    Enable(Capabilities),
    Disable(Capabilities),
    ClearColor([f32; 4]),
    ClearDepth(f32),
    Clear(ClearMask),
    DebugEvent(String),
}

// ============================================================================
// Spy (shared with the test)
// ============================================================================

#[derive(Clone, Default)]
pub struct DeviceSpy {
    calls: Arc<Mutex<Vec<DeviceCall>>>,
    errors: Arc<Mutex<Vec<u32>>>,
    reject: Arc<Mutex<Option<fn(&DeviceCall) -> bool>>>,
}

impl DeviceSpy {
    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn count(&self, predicate: impl Fn(&DeviceCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    pub fn draw_buffers(&self) -> Vec<u32> {
        self.calls().into_iter().filter_map(|c| match c {
            DeviceCall::DrawBuffer(id) => Some(id),
            _ => None,
        }).collect()
    }

    pub fn read_buffers(&self) -> Vec<u32> {
        self.calls().into_iter().filter_map(|c| match c {
            DeviceCall::ReadBuffer(id) => Some(id),
            _ => None,
        }).collect()
    }

    pub fn clear_count(&self) -> usize {
        self.count(|c| matches!(c, DeviceCall::Clear(_)))
    }

    /// Queue a deferred error returned by the next `take_error()`
    pub fn push_error(&self, code: u32) {
        self.errors.lock().unwrap().push(code);
    }

    pub fn pending_errors(&self) -> usize {
        self.errors.lock().unwrap().len()
    }

    /// Make the device reject every call matching `predicate`
    pub fn reject_when(&self, predicate: fn(&DeviceCall) -> bool) {
        *self.reject.lock().unwrap() = Some(predicate);
    }
}

// ============================================================================
// Mock device
// ============================================================================

pub struct MockDevice {
    spy: DeviceSpy,
}

impl MockDevice {
    pub fn new() -> (Self, DeviceSpy) {
        let spy = DeviceSpy::default();
        (Self { spy: spy.clone() }, spy)
    }

    fn record(&mut self, call: DeviceCall) -> Result<()> {
        let rejected = self.spy.reject.lock().unwrap().map_or(false, |p| p(&call));
        if rejected {
            prism_bail!("prism::MockDevice", "Rejected {:?}", call);
        }
        self.spy.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl GraphicsDevice for MockDevice {
    fn make_current(&mut self) -> Result<()> {
        self.record(DeviceCall::MakeCurrent)
    }

    fn bind_framebuffer(&mut self, framebuffer: u32) -> Result<()> {
        self.record(DeviceCall::BindFramebuffer(framebuffer))
    }

    fn draw_buffer(&mut self, buffer: u32) -> Result<()> {
        self.record(DeviceCall::DrawBuffer(buffer))
    }

    fn read_buffer(&mut self, buffer: u32) -> Result<()> {
        self.record(DeviceCall::ReadBuffer(buffer))
    }

    fn viewport(&mut self, rect: Rect2D) -> Result<()> {
        self.record(DeviceCall::Viewport(rect))
    }

    fn scissor(&mut self, rect: Rect2D) -> Result<()> {
        self.record(DeviceCall::Scissor(rect))
    }

    fn enable(&mut self, capabilities: Capabilities) -> Result<()> {
        self.record(DeviceCall::Enable(capabilities))
    }

    fn disable(&mut self, capabilities: Capabilities) -> Result<()> {
        self.record(DeviceCall::Disable(capabilities))
    }

    fn clear_color(&mut self, rgba: [f32; 4]) -> Result<()> {
        self.record(DeviceCall::ClearColor(rgba))
    }

    fn clear_depth(&mut self, depth: f32) -> Result<()> {
        self.record(DeviceCall::ClearDepth(depth))
    }

    fn clear(&mut self, mask: ClearMask) -> Result<()> {
        self.record(DeviceCall::Clear(mask))
    }

    fn mark_debug_event(&mut self, label: &str) -> Result<()> {
        self.record(DeviceCall::DebugEvent(label.to_string()))
    }

    fn take_error(&mut self) -> Option<u32> {
        let mut errors = self.spy.errors.lock().unwrap();
        if errors.is_empty() {
            None
        } else {
            Some(errors.remove(0))
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Window backed by a MockDevice
pub fn mock_window(desc: WindowDesc) -> (Window, DeviceSpy) {
    let (device, spy) = MockDevice::new();
    let window = Window::new(desc, Box::new(device)).unwrap();
    (window, spy)
}

/// Shared window backed by a MockDevice
pub fn shared_mock_window(desc: WindowDesc) -> (Rc<Window>, DeviceSpy) {
    let (window, spy) = mock_window(desc);
    (Rc::new(window), spy)
}
