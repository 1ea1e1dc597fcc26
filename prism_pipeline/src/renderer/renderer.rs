/// Renderer: one viewport of a window.
///
/// The active camera is created lazily and shared with the stages that
/// render through it, so it lives behind `Rc<RefCell<_>>`. The renderer
/// itself is reached through a shared `RenderState`, hence the `Cell`s.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::camera::{Camera, AABB};
use crate::device::{ClearMask, Rect2D};
use crate::error::{Error, Result};
use crate::window::Window;
use crate::{prism_debug, prism_error};

const SOURCE: &str = "prism::Renderer";

/// Shared handle to a renderer's active camera
pub type CameraHandle = Rc<RefCell<Camera>>;

/// Renderer creation descriptor
#[derive(Debug, Clone)]
pub struct RendererDesc {
    /// Normalized window region `[x0, y0, x1, y1]`
    pub viewport: [f32; 4],
    /// Clear before rendering
    pub erase: bool,
    /// Layered over other renderers: never clear color
    pub transparent: bool,
    /// Keep the depth buffer of previous renderers
    pub preserve_depth: bool,
    pub background: [f32; 3],
    pub background_alpha: f32,
}

impl Default for RendererDesc {
    fn default() -> Self {
        Self {
            viewport: [0.0, 0.0, 1.0, 1.0],
            erase: true,
            transparent: false,
            preserve_depth: false,
            background: [0.0, 0.0, 0.0],
            background_alpha: 0.0,
        }
    }
}

pub struct Renderer {
    window: Rc<Window>,
    viewport: [f32; 4],
    erase: bool,
    transparent: bool,
    preserve_depth: bool,
    background: [f32; 3],
    background_alpha: f32,
    active_camera: RefCell<Option<CameraHandle>>,
    picking: Cell<bool>,
    visible_bounds: Cell<Option<AABB>>,
}

impl Renderer {
    /// Create a renderer drawing into `window`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the viewport is not an ordered
    /// rectangle inside `[0, 1]`.
    pub fn new(window: Rc<Window>, desc: RendererDesc) -> Result<Self> {
        let [x0, y0, x1, y1] = desc.viewport;
        let in_range = desc.viewport.iter().all(|v| (0.0..=1.0).contains(v));
        if !in_range || x0 > x1 || y0 > y1 {
            let msg = format!("Renderer viewport {:?} is not a normalized rectangle", desc.viewport);
            prism_error!(SOURCE, "{}", msg);
            return Err(Error::InvalidConfig(msg));
        }

        Ok(Self {
            window,
            viewport: desc.viewport,
            erase: desc.erase,
            transparent: desc.transparent,
            preserve_depth: desc.preserve_depth,
            background: desc.background,
            background_alpha: desc.background_alpha,
            active_camera: RefCell::new(None),
            picking: Cell::new(false),
            visible_bounds: Cell::new(None),
        })
    }

    // ===== WINDOW =====

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_handle(&self) -> &Rc<Window> {
        &self.window
    }

    // ===== CAMERA =====

    pub fn is_active_camera_created(&self) -> bool {
        self.active_camera.borrow().is_some()
    }

    pub fn active_camera(&self) -> Option<CameraHandle> {
        self.active_camera.borrow().clone()
    }

    pub fn set_active_camera(&self, camera: Option<CameraHandle>) {
        *self.active_camera.borrow_mut() = camera;
    }

    /// Install a default camera as the active one and return it
    pub fn create_active_camera(&self) -> CameraHandle {
        let camera: CameraHandle = Rc::new(RefCell::new(Camera::new()));
        self.set_active_camera(Some(camera.clone()));
        camera
    }

    /// Frame the active camera around the visible bounds
    ///
    /// Creates the active camera first if there is none. Without visible
    /// content the unit cube is framed.
    pub fn reset_camera(&self) {
        let camera = self.active_camera().unwrap_or_else(|| self.create_active_camera());
        let bounds = self.visible_bounds().unwrap_or(AABB::UNIT_CUBE);
        prism_debug!(SOURCE, "Resetting camera to bounds {:?}", bounds);
        camera.borrow_mut().reset_to_bounds(&bounds);
    }

    /// Bounds of the visible content, maintained by the scene owner
    pub fn visible_bounds(&self) -> Option<AABB> {
        self.visible_bounds.get()
    }

    pub fn set_visible_bounds(&self, bounds: Option<AABB>) {
        self.visible_bounds.set(bounds);
    }

    // ===== FLAGS =====

    pub fn erase(&self) -> bool {
        self.erase
    }

    pub fn set_erase(&mut self, erase: bool) {
        self.erase = erase;
    }

    /// True while rendering ids for selection; picking never clears
    pub fn is_picking(&self) -> bool {
        self.picking.get()
    }

    pub fn set_picking(&self, picking: bool) {
        self.picking.set(picking);
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn preserves_depth(&self) -> bool {
        self.preserve_depth
    }

    pub fn viewport(&self) -> [f32; 4] {
        self.viewport
    }

    pub fn background(&self) -> [f32; 3] {
        self.background
    }

    pub fn background_alpha(&self) -> f32 {
        self.background_alpha
    }

    // ===== TILING =====

    /// Pixel rectangle of this renderer inside the window's tile
    ///
    /// The normalized viewport is clipped to the tile viewport and mapped so
    /// the tile spans the whole drawable.
    pub fn tiled_size_and_origin(&self) -> Rect2D {
        let size = self.window.size();
        let [tx0, ty0, tx1, ty1] = self.window.tile_viewport();
        let [x0, y0, x1, y1] = self.viewport;

        let to_x = |u: f32| ((u - tx0) / (tx1 - tx0) * size.width as f32).round() as i32;
        let to_y = |v: f32| ((v - ty0) / (ty1 - ty0) * size.height as f32).round() as i32;

        let left = to_x(x0.max(tx0));
        let bottom = to_y(y0.max(ty0));
        let right = to_x(x1.min(tx1));
        let top = to_y(y1.min(ty1));

        Rect2D::new(
            left,
            bottom,
            (right - left).max(0) as u32,
            (top - bottom).max(0) as u32,
        )
    }

    // ===== CLEAR =====

    /// Clear the current draw target
    ///
    /// Color is cleared to the background unless the renderer is transparent;
    /// depth is cleared to 1.0 unless it is preserved.
    pub fn clear(&self) -> Result<()> {
        let state = self.window.state();
        let mut mask = ClearMask::empty();

        if !self.transparent {
            let [r, g, b] = self.background;
            state.clear_color([r, g, b, self.background_alpha])?;
            mask |= ClearMask::COLOR;
        }

        if !self.preserve_depth {
            state.clear_depth(1.0)?;
            mask |= ClearMask::DEPTH;
        }

        if !mask.is_empty() {
            state.clear(mask)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
