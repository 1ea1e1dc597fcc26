/// Closure-backed leaf pass.
///
/// Wraps application drawing code as a `RenderPass` without a dedicated
/// type. The render closure returns the number of props it drew.

use crate::error::Result;
use crate::window::Window;
use super::render_pass::{RenderPass, RenderState};

type RenderCallback = Box<dyn FnMut(&RenderState<'_>) -> Result<u32> + Send>;
type ReleaseCallback = Box<dyn FnMut(&Window) + Send>;

pub struct CustomPass {
    name: String,
    render_callback: RenderCallback,
    release_callback: Option<ReleaseCallback>,
    rendered_props: u32,
}

impl CustomPass {
    pub fn new<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: FnMut(&RenderState<'_>) -> Result<u32> + Send + 'static,
    {
        Self {
            name: name.into(),
            render_callback: Box::new(callback),
            release_callback: None,
            rendered_props: 0,
        }
    }

    /// Run `callback` when graphics resources are released
    pub fn with_release<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Window) + Send + 'static,
    {
        self.release_callback = Some(Box::new(callback));
        self
    }
}

impl RenderPass for CustomPass {
    fn render(&mut self, state: &RenderState<'_>) -> Result<()> {
        self.rendered_props = 0;
        self.rendered_props = (self.render_callback)(state)?;
        Ok(())
    }

    fn release_graphics_resources(&mut self, window: &Window) {
        if let Some(callback) = self.release_callback.as_mut() {
            callback(window);
        }
    }

    fn rendered_prop_count(&self) -> u32 {
        self.rendered_props
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[path = "custom_pass_tests.rs"]
mod tests;
