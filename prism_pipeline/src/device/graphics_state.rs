/// Graphics state cache
///
/// Owns the window's device and shadows the state that passes save and
/// restore (viewport, scissor, enabled capabilities). Redundant state calls
/// are filtered out before they reach the device.
///
/// All methods take `&self`: a pass holds scoped guards on the state while
/// it keeps applying new values through the same state. The pipeline is
/// single-threaded, so `Cell`/`RefCell` are enough.

use std::cell::{Cell, RefCell};
use crate::error::Result;
use crate::{prism_debug, prism_error, prism_trace};
use super::graphics_device::{
    GraphicsDevice, Rect2D, Capabilities, ClearMask, device_error_name,
};
use super::scoped_state::{ScopedViewport, ScopedScissor, ScopedCapability};

const SOURCE: &str = "prism::GraphicsState";

pub struct GraphicsState {
    device: RefCell<Box<dyn GraphicsDevice>>,
    viewport: Cell<Rect2D>,
    scissor: Cell<Rect2D>,
    enabled: Cell<Capabilities>,
}

impl GraphicsState {
    /// Wrap a freshly created device.
    ///
    /// `initial` is the device's default viewport and scissor (the full
    /// drawable). No capability starts enabled.
    pub fn new(device: Box<dyn GraphicsDevice>, initial: Rect2D) -> Self {
        Self {
            device: RefCell::new(device),
            viewport: Cell::new(initial),
            scissor: Cell::new(initial),
            enabled: Cell::new(Capabilities::empty()),
        }
    }

    // ===== CACHED STATE =====

    pub fn viewport(&self) -> Rect2D {
        self.viewport.get()
    }

    pub fn set_viewport(&self, rect: Rect2D) -> Result<()> {
        if self.viewport.get() == rect {
            return Ok(());
        }
        self.device.borrow_mut().viewport(rect)?;
        self.viewport.set(rect);
        Ok(())
    }

    pub fn scissor(&self) -> Rect2D {
        self.scissor.get()
    }

    pub fn set_scissor(&self, rect: Rect2D) -> Result<()> {
        if self.scissor.get() == rect {
            return Ok(());
        }
        self.device.borrow_mut().scissor(rect)?;
        self.scissor.set(rect);
        Ok(())
    }

    /// True if every capability in `capabilities` is enabled
    pub fn is_enabled(&self, capabilities: Capabilities) -> bool {
        self.enabled.get().contains(capabilities)
    }

    pub fn enabled_capabilities(&self) -> Capabilities {
        self.enabled.get()
    }

    pub fn enable(&self, capabilities: Capabilities) -> Result<()> {
        let missing = capabilities - self.enabled.get();
        if missing.is_empty() {
            return Ok(());
        }
        self.device.borrow_mut().enable(missing)?;
        self.enabled.set(self.enabled.get() | missing);
        Ok(())
    }

    pub fn disable(&self, capabilities: Capabilities) -> Result<()> {
        let present = capabilities & self.enabled.get();
        if present.is_empty() {
            return Ok(());
        }
        self.device.borrow_mut().disable(present)?;
        self.enabled.set(self.enabled.get() - present);
        Ok(())
    }

    pub fn set_enabled(&self, capabilities: Capabilities, enabled: bool) -> Result<()> {
        if enabled {
            self.enable(capabilities)
        } else {
            self.disable(capabilities)
        }
    }

    // ===== SCOPED GUARDS =====

    /// Save the viewport; restored when the guard drops
    pub fn scoped_viewport(&self) -> ScopedViewport<'_> {
        ScopedViewport::capture(self)
    }

    /// Save the scissor rectangle; restored when the guard drops
    pub fn scoped_scissor(&self) -> ScopedScissor<'_> {
        ScopedScissor::capture(self)
    }

    /// Save whether `capability` is enabled; restored when the guard drops
    pub fn scoped_capability(&self, capability: Capabilities) -> ScopedCapability<'_> {
        ScopedCapability::capture(self, capability)
    }

    // ===== PASS-THROUGH COMMANDS =====

    pub fn make_current(&self) -> Result<()> {
        self.device.borrow_mut().make_current()
    }

    pub fn bind_framebuffer(&self, framebuffer: u32) -> Result<()> {
        self.device.borrow_mut().bind_framebuffer(framebuffer)
    }

    pub fn draw_buffer(&self, buffer: u32) -> Result<()> {
        self.device.borrow_mut().draw_buffer(buffer)
    }

    pub fn read_buffer(&self, buffer: u32) -> Result<()> {
        self.device.borrow_mut().read_buffer(buffer)
    }

    pub fn clear_color(&self, rgba: [f32; 4]) -> Result<()> {
        self.device.borrow_mut().clear_color(rgba)
    }

    pub fn clear_depth(&self, depth: f32) -> Result<()> {
        self.device.borrow_mut().clear_depth(depth)
    }

    pub fn clear(&self, mask: ClearMask) -> Result<()> {
        self.device.borrow_mut().clear(mask)
    }

    pub fn mark_debug_event(&self, label: &str) -> Result<()> {
        prism_trace!(SOURCE, "Debug event: {}", label);
        self.device.borrow_mut().mark_debug_event(label)
    }

    // ===== DEVICE ERRORS =====

    /// Discard errors left over by earlier work. Returns how many were dropped.
    pub fn drain_errors(&self) -> usize {
        let mut device = self.device.borrow_mut();
        let mut drained = 0;
        while let Some(code) = device.take_error() {
            prism_debug!(SOURCE, "Discarding stale device error {} (0x{:04X})",
                device_error_name(code), code);
            drained += 1;
        }
        drained
    }

    /// Log every pending device error with `context`. Returns true if none were pending.
    pub fn check_errors(&self, context: &str) -> bool {
        let mut device = self.device.borrow_mut();
        let mut clean = true;
        while let Some(code) = device.take_error() {
            prism_error!(SOURCE, "{}: {} (0x{:04X})", context, device_error_name(code), code);
            clean = false;
        }
        clean
    }
}

#[cfg(test)]
#[path = "graphics_state_tests.rs"]
mod tests;
