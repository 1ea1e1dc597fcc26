/// Scoped save/restore of device state.
///
/// A guard records one piece of state when it is created and writes it back
/// when it is dropped: on normal return, on `?` early return, and during
/// panic unwinding. Guards borrow the `GraphicsState` immutably, so the
/// protected region keeps changing state through the same reference.
///
/// Guards nest: an outer guard restores the value it saw before any inner
/// guard was created, because locals drop in reverse order.

use crate::error::Result;
use crate::prism_error;
use super::graphics_device::{Rect2D, Capabilities};
use super::graphics_state::GraphicsState;

/// A recorded piece of state that knows how to write itself back
pub trait SavedValue {
    fn restore(&self, state: &GraphicsState) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedViewport(pub Rect2D);

impl SavedValue for SavedViewport {
    fn restore(&self, state: &GraphicsState) -> Result<()> {
        state.set_viewport(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedScissor(pub Rect2D);

impl SavedValue for SavedScissor {
    fn restore(&self, state: &GraphicsState) -> Result<()> {
        state.set_scissor(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedCapability {
    pub capability: Capabilities,
    pub enabled: bool,
}

impl SavedValue for SavedCapability {
    fn restore(&self, state: &GraphicsState) -> Result<()> {
        state.set_enabled(self.capability, self.enabled)
    }
}

/// Restores `V` into the state when dropped
pub struct StateGuard<'a, V: SavedValue> {
    state: &'a GraphicsState,
    saved: V,
}

pub type ScopedViewport<'a> = StateGuard<'a, SavedViewport>;
pub type ScopedScissor<'a> = StateGuard<'a, SavedScissor>;
pub type ScopedCapability<'a> = StateGuard<'a, SavedCapability>;

impl<'a, V: SavedValue> StateGuard<'a, V> {
    /// Guard an already recorded value
    pub fn from_saved(state: &'a GraphicsState, saved: V) -> Self {
        Self { state, saved }
    }

    /// The value that will be restored
    pub fn saved(&self) -> &V {
        &self.saved
    }
}

impl<'a> StateGuard<'a, SavedViewport> {
    pub fn capture(state: &'a GraphicsState) -> Self {
        Self::from_saved(state, SavedViewport(state.viewport()))
    }
}

impl<'a> StateGuard<'a, SavedScissor> {
    pub fn capture(state: &'a GraphicsState) -> Self {
        Self::from_saved(state, SavedScissor(state.scissor()))
    }
}

impl<'a> StateGuard<'a, SavedCapability> {
    pub fn capture(state: &'a GraphicsState, capability: Capabilities) -> Self {
        let enabled = state.is_enabled(capability);
        Self::from_saved(state, SavedCapability { capability, enabled })
    }
}

impl<V: SavedValue> Drop for StateGuard<'_, V> {
    fn drop(&mut self) {
        // Drop cannot propagate, so a rejected restore is only reported.
        if let Err(err) = self.saved.restore(self.state) {
            prism_error!("prism::GraphicsState", "Failed to restore saved state: {}", err);
        }
    }
}

#[cfg(test)]
#[path = "scoped_state_tests.rs"]
mod tests;
