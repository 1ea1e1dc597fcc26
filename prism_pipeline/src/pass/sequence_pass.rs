/// Ordered list of passes rendered one after another.

use crate::error::Result;
use crate::prism_error;
use crate::window::Window;
use super::render_pass::{RenderPass, RenderState};

const SOURCE: &str = "prism::SequencePass";

#[derive(Default)]
pub struct SequencePass {
    passes: Vec<Box<dyn RenderPass>>,
    rendered_props: u32,
}

impl SequencePass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `add_pass`
    pub fn with_pass(mut self, pass: impl RenderPass + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Append a pass; it renders after every pass already added
    pub fn add_pass(&mut self, pass: Box<dyn RenderPass>) {
        self.passes.push(pass);
    }

    pub fn passes(&self) -> &[Box<dyn RenderPass>] {
        &self.passes
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Drop every pass
    pub fn clear(&mut self) {
        self.passes.clear();
    }
}

impl RenderPass for SequencePass {
    /// Render every pass in order, stopping at the first failure
    ///
    /// The count sums the passes that completed before the failure.
    fn render(&mut self, state: &RenderState<'_>) -> Result<()> {
        self.rendered_props = 0;

        for (index, pass) in self.passes.iter_mut().enumerate() {
            if let Err(err) = pass.render(state) {
                prism_error!(SOURCE, "Pass {} ({}) failed: {}", index, pass.name(), err);
                return Err(err);
            }
            self.rendered_props = self.rendered_props.saturating_add(pass.rendered_prop_count());
        }
        Ok(())
    }

    fn release_graphics_resources(&mut self, window: &Window) {
        for pass in &mut self.passes {
            pass.release_graphics_resources(window);
        }
    }

    fn rendered_prop_count(&self) -> u32 {
        self.rendered_props
    }

    fn name(&self) -> &str {
        "SequencePass"
    }
}

#[cfg(test)]
#[path = "sequence_pass_tests.rs"]
mod tests;
