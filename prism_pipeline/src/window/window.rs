/// Render window: frame configuration plus the context's graphics state.

use rustc_hash::FxHashMap;
use crate::device::{GraphicsDevice, GraphicsState, Rect2D, Extent2D};
use crate::error::{Error, Result};
use crate::{prism_debug, prism_error};

const SOURCE: &str = "prism::Window";

/// Stereo display modes
///
/// Only `CrystalEyes` needs the camera pass to pick per-eye buffers;
/// `Left`/`Right` pin the camera eye; the other modes are composited by the
/// window itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StereoType {
    CrystalEyes,
    RedBlue,
    Interlaced,
    Left,
    Right,
    Dresden,
    Anaglyph,
    Checkerboard,
    SplitViewportHorizontal,
    Fake,
    Emulate,
}

/// Named color buffers of an on-screen window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBuffer {
    Front,
    Back,
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl ColorBuffer {
    /// Device identifier used when the window does not override it
    pub fn default_id(self) -> u32 {
        match self {
            ColorBuffer::FrontLeft => 0x0400,
            ColorBuffer::FrontRight => 0x0401,
            ColorBuffer::BackLeft => 0x0402,
            ColorBuffer::BackRight => 0x0403,
            ColorBuffer::Front => 0x0404,
            ColorBuffer::Back => 0x0405,
        }
    }
}

/// Window creation descriptor
#[derive(Debug, Clone)]
pub struct WindowDesc {
    /// Drawable size in pixels
    pub width: u32,
    pub height: u32,
    /// Render into the back buffer and swap
    pub double_buffer: bool,
    /// Stereo rendering active
    pub stereo_render: bool,
    pub stereo_type: StereoType,
    /// Renderers may clear this window
    pub erase: bool,
    /// Framebuffer object the window renders into (0 = window-system framebuffer)
    pub default_framebuffer: u32,
    /// Normalized region of the full display covered by this window `[x0, y0, x1, y1]`
    pub tile_viewport: [f32; 4],
}

impl Default for WindowDesc {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            double_buffer: true,
            stereo_render: false,
            stereo_type: StereoType::RedBlue,
            erase: true,
            default_framebuffer: 0,
            tile_viewport: [0.0, 0.0, 1.0, 1.0],
        }
    }
}

pub struct Window {
    size: Extent2D,
    double_buffer: bool,
    stereo_render: bool,
    stereo_type: StereoType,
    erase: bool,
    default_framebuffer: u32,
    tile_viewport: [f32; 4],
    buffer_ids: FxHashMap<ColorBuffer, u32>,
    state: GraphicsState,
}

impl Window {
    /// Create a window around a device whose context is already created
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for an empty drawable or a malformed
    /// tile viewport.
    pub fn new(desc: WindowDesc, device: Box<dyn GraphicsDevice>) -> Result<Self> {
        if desc.width == 0 || desc.height == 0 {
            let msg = format!("Window size {}x{} is empty", desc.width, desc.height);
            prism_error!(SOURCE, "{}", msg);
            return Err(Error::InvalidConfig(msg));
        }

        let [x0, y0, x1, y1] = desc.tile_viewport;
        if !(x0 < x1 && y0 < y1) {
            let msg = format!("Tile viewport {:?} is malformed", desc.tile_viewport);
            prism_error!(SOURCE, "{}", msg);
            return Err(Error::InvalidConfig(msg));
        }

        let size = Extent2D::new(desc.width, desc.height);
        prism_debug!(SOURCE, "Window created ({}x{}, double_buffer={}, stereo={:?}/{})",
            size.width, size.height, desc.double_buffer, desc.stereo_type, desc.stereo_render);

        Ok(Self {
            size,
            double_buffer: desc.double_buffer,
            stereo_render: desc.stereo_render,
            stereo_type: desc.stereo_type,
            erase: desc.erase,
            default_framebuffer: desc.default_framebuffer,
            tile_viewport: desc.tile_viewport,
            buffer_ids: FxHashMap::default(),
            state: GraphicsState::new(device, Rect2D::from_extent(size)),
        })
    }

    // ===== CONFIGURATION =====

    pub fn size(&self) -> Extent2D {
        self.size
    }

    pub fn is_double_buffered(&self) -> bool {
        self.double_buffer
    }

    pub fn is_stereo_render(&self) -> bool {
        self.stereo_render
    }

    pub fn set_stereo_render(&mut self, stereo_render: bool) {
        self.stereo_render = stereo_render;
    }

    pub fn stereo_type(&self) -> StereoType {
        self.stereo_type
    }

    pub fn set_stereo_type(&mut self, stereo_type: StereoType) {
        self.stereo_type = stereo_type;
    }

    pub fn erase(&self) -> bool {
        self.erase
    }

    pub fn set_erase(&mut self, erase: bool) {
        self.erase = erase;
    }

    pub fn default_framebuffer(&self) -> u32 {
        self.default_framebuffer
    }

    pub fn tile_viewport(&self) -> [f32; 4] {
        self.tile_viewport
    }

    /// Device identifier of a named color buffer
    pub fn buffer_id(&self, buffer: ColorBuffer) -> u32 {
        self.buffer_ids
            .get(&buffer)
            .copied()
            .unwrap_or_else(|| buffer.default_id())
    }

    /// Override the identifier of a named color buffer (e.g. an FBO attachment)
    pub fn set_buffer_id(&mut self, buffer: ColorBuffer, id: u32) {
        self.buffer_ids.insert(buffer, id);
    }

    // ===== CONTEXT =====

    pub fn make_current(&self) -> Result<()> {
        self.state.make_current()
    }

    /// Graphics state of this window's context
    pub fn state(&self) -> &GraphicsState {
        &self.state
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
