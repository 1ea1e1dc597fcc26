/// RenderPass trait and the per-call RenderState.

use crate::device::{Extent2D, Rect2D};
use crate::error::Result;
use crate::renderer::Renderer;
use crate::window::Window;

/// One stage of the rendering pipeline
///
/// Passes own their nested passes and forward both operations to them.
pub trait RenderPass: Send {
    /// Render one frame for the renderer in `state`
    fn render(&mut self, state: &RenderState<'_>) -> Result<()>;

    /// Release GPU resources tied to `window`'s context
    ///
    /// Called on teardown or context loss, any number of times, with or
    /// without a prior `render`.
    fn release_graphics_resources(&mut self, window: &Window);

    /// Number of props drawn by the last `render`
    fn rendered_prop_count(&self) -> u32;

    /// Name used in diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Offscreen render target owned outside the pipeline
///
/// When a `RenderState` carries one, its owner has already bound it and
/// selected its draw/read buffers.
pub trait RenderTarget {
    /// Size the target was last allocated with
    fn last_size(&self) -> Extent2D;
}

/// Immutable bundle handed down a pass chain for one render call
#[derive(Clone, Copy)]
pub struct RenderState<'a> {
    renderer: &'a Renderer,
    target: Option<&'a dyn RenderTarget>,
}

impl<'a> RenderState<'a> {
    /// Render on screen through `renderer`'s window
    pub fn new(renderer: &'a Renderer) -> Self {
        Self { renderer, target: None }
    }

    /// Render into an offscreen target instead of the window buffers
    pub fn with_target(mut self, target: &'a dyn RenderTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn renderer(&self) -> &'a Renderer {
        self.renderer
    }

    pub fn target(&self) -> Option<&'a dyn RenderTarget> {
        self.target
    }

    pub fn window(&self) -> &'a Window {
        self.renderer.window()
    }

    /// On-screen tile of the renderer
    pub fn tiled_size_and_origin(&self) -> Rect2D {
        self.renderer.tiled_size_and_origin()
    }
}
