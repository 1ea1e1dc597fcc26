/// GraphicsDevice trait - the immediate-mode device seam
///
/// Passes never talk to a device directly: every call goes through
/// `GraphicsState`, which owns the device and caches the state it sets.

use bitflags::bitflags;
use crate::error::Result;

/// Immediate-mode graphics device
///
/// The encoding of each command (GL calls, a command buffer, a trace file)
/// belongs to the implementation. Commands return `Err` when the device
/// rejects them outright; deferred errors are reported through `take_error()`.
pub trait GraphicsDevice: Send {
    /// Make this device's context current on the calling thread
    fn make_current(&mut self) -> Result<()>;

    /// Bind a framebuffer object (0 is the window-system framebuffer)
    fn bind_framebuffer(&mut self, framebuffer: u32) -> Result<()>;

    /// Select the color buffer written by draw commands
    fn draw_buffer(&mut self, buffer: u32) -> Result<()>;

    /// Select the color buffer read back by pixel reads
    fn read_buffer(&mut self, buffer: u32) -> Result<()>;

    /// Set the viewport rectangle
    fn viewport(&mut self, rect: Rect2D) -> Result<()>;

    /// Set the scissor rectangle
    fn scissor(&mut self, rect: Rect2D) -> Result<()>;

    /// Enable one or more capabilities
    fn enable(&mut self, capabilities: Capabilities) -> Result<()>;

    /// Disable one or more capabilities
    fn disable(&mut self, capabilities: Capabilities) -> Result<()>;

    /// Set the color used by color clears (RGBA)
    fn clear_color(&mut self, rgba: [f32; 4]) -> Result<()>;

    /// Set the depth used by depth clears
    fn clear_depth(&mut self, depth: f32) -> Result<()>;

    /// Clear the selected buffers of the current draw target
    fn clear(&mut self, mask: ClearMask) -> Result<()>;

    /// Insert a debug event visible in graphics debuggers
    fn mark_debug_event(&mut self, _label: &str) -> Result<()> {
        Ok(())
    }

    /// Pop the oldest pending device error code, if any
    fn take_error(&mut self) -> Option<u32>;
}

/// 2D pixel rectangle (viewport, scissor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect2D {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect2D {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle anchored at the origin
    pub fn from_extent(extent: Extent2D) -> Self {
        Self::new(0, 0, extent.width, extent.height)
    }
}

/// 2D size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent2D {
    pub width: u32,
    pub height: u32,
}

impl Extent2D {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

bitflags! {
    /// Device capabilities toggled with enable/disable
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        const SCISSOR_TEST = 1 << 0;
        const DEPTH_TEST   = 1 << 1;
        const STENCIL_TEST = 1 << 2;
        const BLEND        = 1 << 3;
        const CULL_FACE    = 1 << 4;
    }
}

bitflags! {
    /// Buffers affected by a clear
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearMask: u32 {
        const COLOR   = 1 << 0;
        const DEPTH   = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

/// Human-readable name of a device error code
pub fn device_error_name(code: u32) -> &'static str {
    match code {
        0x0000 => "GL_NO_ERROR",
        0x0500 => "GL_INVALID_ENUM",
        0x0501 => "GL_INVALID_VALUE",
        0x0502 => "GL_INVALID_OPERATION",
        0x0503 => "GL_STACK_OVERFLOW",
        0x0504 => "GL_STACK_UNDERFLOW",
        0x0505 => "GL_OUT_OF_MEMORY",
        0x0506 => "GL_INVALID_FRAMEBUFFER_OPERATION",
        _ => "unknown device error",
    }
}
