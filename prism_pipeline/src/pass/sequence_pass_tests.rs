/// Tests for SequencePass

use super::*;
use std::sync::{Arc, Mutex};
use crate::error::Error;
use crate::renderer::RendererDesc;
use crate::pass::CustomPass;
use crate::pass::mock_pass::{mock_renderer, MockPass, Outcome};
use crate::window::WindowDesc;

// ============================================================================
// Tests: Render
// ============================================================================

#[test]
fn test_empty_sequence_renders_nothing() {
    let (renderer, spy) = mock_renderer(WindowDesc::default(), RendererDesc::default());
    let mut sequence = SequencePass::new();

    sequence.render(&RenderState::new(&renderer)).unwrap();

    assert!(sequence.is_empty());
    assert_eq!(sequence.rendered_prop_count(), 0);
    assert!(spy.calls().is_empty());
}

#[test]
fn test_passes_render_in_order() {
    let (renderer, _spy) = mock_renderer(WindowDesc::default(), RendererDesc::default());
    let order = Arc::new(Mutex::new(Vec::new()));
    let mut sequence = SequencePass::new();
    for label in ["opaque", "translucent", "overlay"] {
        let order = order.clone();
        sequence.add_pass(Box::new(CustomPass::new(label, move |_| {
            order.lock().unwrap().push(label);
            Ok(0)
        })));
    }

    sequence.render(&RenderState::new(&renderer)).unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["opaque", "translucent", "overlay"]);
}

#[test]
fn test_counts_are_summed() {
    let (renderer, _spy) = mock_renderer(WindowDesc::default(), RendererDesc::default());
    let (first, _) = MockPass::new(3);
    let (second, _) = MockPass::new(4);
    let mut sequence = SequencePass::new().with_pass(first).with_pass(second);
    let state = RenderState::new(&renderer);

    sequence.render(&state).unwrap();
    assert_eq!(sequence.rendered_prop_count(), 7);

    sequence.render(&state).unwrap();
    assert_eq!(sequence.rendered_prop_count(), 7);
}

#[test]
fn test_count_saturates_instead_of_overflowing() {
    let (renderer, _spy) = mock_renderer(WindowDesc::default(), RendererDesc::default());
    let (huge, _) = MockPass::new(u32::MAX);
    let (more, _) = MockPass::new(10);
    let mut sequence = SequencePass::new().with_pass(huge).with_pass(more);

    sequence.render(&RenderState::new(&renderer)).unwrap();

    assert_eq!(sequence.rendered_prop_count(), u32::MAX);
}

#[test]
fn test_first_failure_stops_sequence() {
    let (renderer, _spy) = mock_renderer(WindowDesc::default(), RendererDesc::default());
    let (first, first_record) = MockPass::new(2);
    let (failing, _) = MockPass::new(5);
    let (last, last_record) = MockPass::new(1);
    let mut sequence = SequencePass::new()
        .with_pass(first)
        .with_pass(failing.with_outcome(Outcome::Fail))
        .with_pass(last);

    let result = sequence.render(&RenderState::new(&renderer));

    assert!(matches!(result, Err(Error::PassFailed(_))));
    assert_eq!(first_record.lock().unwrap().renders, 1);
    assert_eq!(last_record.lock().unwrap().renders, 0);
    assert_eq!(sequence.rendered_prop_count(), 2);
}

// ============================================================================
// Tests: Release and ownership
// ============================================================================

#[test]
fn test_release_reaches_every_pass() {
    let (renderer, _spy) = mock_renderer(WindowDesc::default(), RendererDesc::default());
    let (first, first_record) = MockPass::new(0);
    let (second, second_record) = MockPass::new(0);
    let mut sequence = SequencePass::new().with_pass(first).with_pass(second);

    sequence.release_graphics_resources(renderer.window());

    assert_eq!(first_record.lock().unwrap().releases, 1);
    assert_eq!(second_record.lock().unwrap().releases, 1);
}

#[test]
fn test_clear_drops_passes() {
    let (pass, record) = MockPass::new(0);
    let mut sequence = SequencePass::new().with_pass(pass);
    assert_eq!(sequence.len(), 1);
    assert_eq!(sequence.passes()[0].name(), "MockPass");

    sequence.clear();

    assert!(sequence.is_empty());
    assert!(record.lock().unwrap().dropped);
}
