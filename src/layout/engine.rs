//! Layout engine
//!
//! The engine is the main entry point for layout. One reflow:
//!
//! 1. Resolves the breakpoint cascade for every node (one effective style
//!    per node per pass)
//! 2. Sizes the root against the viewport
//! 3. Walks the tree depth-first, running the flex algorithm for each
//!    container's direct children
//! 4. Runs the positioning resolver as a final whole-tree pass
//! 5. Diffs computed geometry against the previous pass and reports
//!    whether anything moved, so the caller can decide about repainting
//!
//! # Determinism and state
//!
//! A reflow is a pure function of `(tree shape, style declarations,
//! viewport, scroll offsets)`. The engine keeps no state across reflows
//! except the previous pass's geometry for the damage comparison; the tree
//! is exclusively owned by the caller between reflows and the engine never
//! mutates structural shape.
//!
//! # Concurrency
//!
//! Synchronous and single-threaded by contract: flex distribution and
//! containing-block resolution need a globally consistent snapshot, so
//! exactly one reflow runs at a time and the caller serializes triggers
//! (coalescing resize events to the latest size is the caller's job;
//! each reflow is O(tree size), not incremental).
//!
//! # Examples
//!
//! ```
//! use fastlayout::layout::LayoutEngine;
//! use fastlayout::tree::NodeBuilder;
//! use fastlayout::Size;
//!
//! let mut root = NodeBuilder::new()
//!   .class("flex-row gap-10")
//!   .child(NodeBuilder::new().class("w-1/2 h-40"))
//!   .child(NodeBuilder::new().class("grow h-40"))
//!   .build();
//!
//! let mut engine = LayoutEngine::new();
//! let changed = engine.reflow(&mut root, Size::new(800.0, 600.0));
//! assert!(changed);
//! assert_eq!(root.children[0].computed_box().unwrap().width(), 400.0);
//!
//! // Identical inputs: identical geometry, nothing to repaint.
//! assert!(!engine.reflow(&mut root, Size::new(800.0, 600.0)));
//! ```

use crate::geometry::Point;
use crate::geometry::Rect;
use crate::geometry::Size;
use crate::layout::flex;
use crate::layout::positioned;
use crate::style::resolve;
use crate::tree::IntrinsicSizer;
use crate::tree::LayoutNode;
use crate::tree::NodeId;
use crate::tree::StoredSizes;
use rustc_hash::FxHashMap;

/// The layout engine
///
/// Holds the pluggable intrinsic-size provider and the previous pass's
/// geometry for damage comparison. Cheap to create; create one per
/// independent tree so damage maps do not mix.
pub struct LayoutEngine {
  sizer: Box<dyn IntrinsicSizer>,
  previous: FxHashMap<NodeId, Rect>,
}

impl Default for LayoutEngine {
  fn default() -> Self {
    Self::new()
  }
}

impl LayoutEngine {
  /// Creates an engine using sizes stored on the nodes themselves
  pub fn new() -> Self {
    Self::with_sizer(Box::new(StoredSizes))
  }

  /// Creates an engine with an external intrinsic-size provider
  ///
  /// The provider is consulted synchronously during the measure phase for
  /// leaves without definite sizes (text measurement, image dimensions).
  pub fn with_sizer(sizer: Box<dyn IntrinsicSizer>) -> Self {
    Self {
      sizer,
      previous: FxHashMap::default(),
    }
  }

  /// Performs one full reflow of the tree
  ///
  /// Returns true when any node's computed box differs from the previous
  /// pass (including the first pass over a tree). The root fills the
  /// viewport on any axis where its size spec is auto.
  pub fn reflow(&mut self, root: &mut LayoutNode, viewport: Size) -> bool {
    let viewport = viewport.clamp_non_negative();
    resolve_styles(root, viewport.width);

    let width = root
      .effective
      .width
      .resolve(viewport.width)
      .unwrap_or(viewport.width);
    let height = root
      .effective
      .height
      .resolve(viewport.height)
      .unwrap_or(viewport.height);
    root.computed = Rect::new(Point::ZERO, Size::new(width, height).clamp_non_negative());
    root.laid_out = true;

    flex::layout_subtree(root, self.sizer.as_ref());
    positioned::apply_positioning(root, viewport, self.sizer.as_ref());

    let mut current = FxHashMap::default();
    collect_geometry(root, &mut current);
    let changed = current != self.previous;
    self.previous = current;
    changed
  }
}

/// Cascade pass: one effective style per node, pure in the viewport width
fn resolve_styles(node: &mut LayoutNode, viewport_width: f32) {
  node.effective = resolve(&node.style, viewport_width);
  for child in &mut node.children {
    resolve_styles(child, viewport_width);
  }
}

fn collect_geometry(node: &LayoutNode, out: &mut FxHashMap<NodeId, Rect>) {
  out.insert(node.id(), node.computed);
  for child in &node.children {
    collect_geometry(child, out);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tree::NodeBuilder;

  #[test]
  fn root_auto_fills_viewport() {
    let mut root = NodeBuilder::new().class("flex-row").build();
    let mut engine = LayoutEngine::new();
    engine.reflow(&mut root, Size::new(640.0, 480.0));
    assert_eq!(
      root.computed_box().unwrap(),
      Rect::from_xywh(0.0, 0.0, 640.0, 480.0)
    );
  }

  #[test]
  fn root_size_specs_resolve_against_viewport() {
    let mut root = NodeBuilder::new().class("w-1/2 h-100").build();
    let mut engine = LayoutEngine::new();
    engine.reflow(&mut root, Size::new(800.0, 600.0));
    assert_eq!(
      root.computed_box().unwrap().size,
      Size::new(400.0, 100.0)
    );
  }

  #[test]
  fn first_reflow_reports_change() {
    let mut root = NodeBuilder::new().class("flex-row").build();
    let mut engine = LayoutEngine::new();
    assert!(engine.reflow(&mut root, Size::new(100.0, 100.0)));
  }

  #[test]
  fn identical_reflow_reports_no_change() {
    let mut root = NodeBuilder::new()
      .class("flex-row gap-4")
      .child(NodeBuilder::new().class("grow h-20"))
      .build();
    let mut engine = LayoutEngine::new();
    assert!(engine.reflow(&mut root, Size::new(500.0, 300.0)));
    assert!(!engine.reflow(&mut root, Size::new(500.0, 300.0)));
  }

  #[test]
  fn viewport_resize_reports_change() {
    let mut root = NodeBuilder::new()
      .class("flex-row")
      .child(NodeBuilder::new().class("w-1/2 h-10"))
      .build();
    let mut engine = LayoutEngine::new();
    engine.reflow(&mut root, Size::new(400.0, 300.0));
    assert!(engine.reflow(&mut root, Size::new(600.0, 300.0)));
  }

  #[test]
  fn negative_viewport_clamps_to_zero() {
    let mut root = NodeBuilder::new()
      .class("flex-row")
      .child(NodeBuilder::new().class("w-1/2"))
      .build();
    let mut engine = LayoutEngine::new();
    engine.reflow(&mut root, Size::new(-100.0, -100.0));
    assert_eq!(root.computed_box().unwrap().size, Size::ZERO);
    assert_eq!(root.children[0].computed_box().unwrap().size, Size::ZERO);
  }

  #[test]
  fn effective_style_recomputed_per_pass() {
    let mut root = NodeBuilder::new().class("flex-col md:flex-row").build();
    let mut engine = LayoutEngine::new();
    engine.reflow(&mut root, Size::new(500.0, 500.0));
    assert_eq!(
      root.effective_style().direction,
      crate::style::types::Direction::Column
    );
    engine.reflow(&mut root, Size::new(900.0, 500.0));
    assert_eq!(
      root.effective_style().direction,
      crate::style::types::Direction::Row
    );
  }
}
