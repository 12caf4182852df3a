//! Positioned layout resolution
//!
//! A whole-tree pass that runs after flow layout has produced a base box
//! for every node. It applies the three positioning schemes that deviate
//! from normal flow:
//!
//! - **Relative**: the flow box is offset by the resolved insets; the
//!   space the node reserved in flow is untouched, so siblings never move
//! - **Absolute**: the box is recomputed against the *containing block*,
//!   the content box of the nearest ancestor whose position is not static,
//!   falling back to the viewport. Set inset edges pin the corresponding
//!   edges; opposing edges with an auto size imply the size; unset axes
//!   fall back to the hypothetical static-flow position. When the resolved
//!   size differs from the flow hypothesis, the node's subtree is re-laid
//!   against the final box before descendants resolve
//! - **Sticky**: the flow box is clamped against the visible window of the
//!   nearest scrolling ancestor so the thresholded edge never scrolls past
//!   its inset, without ever escaping the parent's content box
//!
//! Containing blocks are established top-down, so a descendant always
//! resolves against a fully-resolved ancestor (outside-in order).
//!
//! The pass works in absolute coordinates internally and converts back to
//! parent-content-relative coordinates before storing any result.

use crate::geometry::Point;
use crate::geometry::Rect;
use crate::geometry::Size;
use crate::layout::flex;
use crate::tree::IntrinsicSizer;
use crate::tree::LayoutNode;

/// The reference rectangle absolute children resolve insets against
#[derive(Debug, Clone, Copy)]
struct ContainingBlock {
  /// Content box of the establishing ancestor, absolute coordinates
  rect: Rect,
  /// Whether this is the viewport fallback (no positioned ancestor)
  from_viewport: bool,
}

/// The visible window of the nearest scrolling ancestor
///
/// Expressed in layout-space absolute coordinates: the scroller's content
/// box translated by its current scroll offset.
#[derive(Debug, Clone, Copy)]
struct ScrollWindow {
  window: Rect,
}

/// Resolves positioning for the whole tree
///
/// `root`'s computed box and every descendant's flow box must already be
/// set. The viewport acts as the initial containing block and as the
/// scroll window when no clipping ancestor exists.
pub(crate) fn apply_positioning(root: &mut LayoutNode, viewport: Size, sizer: &dyn IntrinsicSizer) {
  let viewport_rect = Rect::new(Point::ZERO, viewport);
  let cb = ContainingBlock {
    rect: viewport_rect,
    from_viewport: true,
  };
  let scroll = ScrollWindow {
    window: viewport_rect,
  };
  resolve_node(root, viewport_rect, cb, scroll, sizer);
}

fn resolve_node(
  node: &mut LayoutNode,
  parent_content: Rect,
  cb: ContainingBlock,
  scroll: ScrollWindow,
  sizer: &dyn IntrinsicSizer,
) {
  use crate::style::types::Position;

  match node.effective.position {
    Position::Static => {}
    Position::Relative => apply_relative(node),
    Position::Absolute => {
      // Flow layout sized this box, and the subtree below it, against the
      // parent's content box. Insets and sizes resolve against the
      // containing block instead, so if that changes the size the subtree
      // must be re-laid before descendants resolve.
      let hypothetical_size = node.computed.size;
      apply_absolute(node, parent_content, cb);
      if node.computed.size != hypothetical_size {
        flex::layout_subtree(node, sizer);
      }
    }
    Position::Sticky => apply_sticky(node, parent_content, scroll),
  }

  // This node is fully resolved; establish the context its children see.
  let border_abs = Rect::new(
    parent_content.origin.translate(node.computed.origin),
    node.computed.size,
  );
  let content_abs = border_abs.inset_by(node.effective.padding);

  let child_cb = if node.effective.position.establishes_containing_block() {
    ContainingBlock {
      rect: content_abs,
      from_viewport: false,
    }
  } else {
    cb
  };
  let child_scroll = if node.effective.overflow.is_scroll_container() {
    ScrollWindow {
      window: Rect::new(
        content_abs.origin.translate(node.scroll_offset()),
        content_abs.size,
      ),
    }
  } else {
    scroll
  };

  for child in &mut node.children {
    resolve_node(child, content_abs, child_cb, child_scroll, sizer);
  }
}

/// Offsets a relative node's flow box by its insets
///
/// Left takes precedence over right and top over bottom when opposing
/// edges are both set; the reserved flow space is not altered.
fn apply_relative(node: &mut LayoutNode) {
  let inset = node.effective.inset;
  let dx = match (inset.left, inset.right) {
    (Some(left), _) => left,
    (None, Some(right)) => -right,
    (None, None) => 0.0,
  };
  let dy = match (inset.top, inset.bottom) {
    (Some(top), _) => top,
    (None, Some(bottom)) => -bottom,
    (None, None) => 0.0,
  };
  node.computed = node.computed.translate(Point::new(dx, dy));
}

/// Recomputes an absolute node's box against its containing block
fn apply_absolute(node: &mut LayoutNode, parent_content: Rect, cb: ContainingBlock) {
  if cb.from_viewport {
    log::debug!(
      "absolute node {} has no positioned ancestor; using the viewport",
      node.id().value()
    );
  }
  let inset = node.effective.inset;
  let hypothetical = Rect::new(
    parent_content.origin.translate(node.computed.origin),
    node.computed.size,
  );

  // Sizes re-resolve against the containing block; opposing insets with an
  // auto size imply the distance between the pinned edges.
  let width = match node.effective.width.resolve(cb.rect.width()) {
    Some(resolved) => resolved,
    None => match (inset.left, inset.right) {
      (Some(left), Some(right)) => (cb.rect.width() - left - right).max(0.0),
      _ => hypothetical.width(),
    },
  };
  let height = match node.effective.height.resolve(cb.rect.height()) {
    Some(resolved) => resolved,
    None => match (inset.top, inset.bottom) {
      (Some(top), Some(bottom)) => (cb.rect.height() - top - bottom).max(0.0),
      _ => hypothetical.height(),
    },
  };

  let x = match (inset.left, inset.right) {
    (Some(left), _) => cb.rect.x() + left,
    (None, Some(right)) => cb.rect.right() - right - width,
    (None, None) => hypothetical.x(),
  };
  let y = match (inset.top, inset.bottom) {
    (Some(top), _) => cb.rect.y() + top,
    (None, Some(bottom)) => cb.rect.bottom() - bottom - height,
    (None, None) => hypothetical.y(),
  };

  // Back to parent-content-relative coordinates.
  node.computed = Rect::new(
    Point::new(x - parent_content.x(), y - parent_content.y()),
    Size::new(width, height).clamp_non_negative(),
  );
}

/// Clamps a sticky node's flow box against its scroll window
///
/// Each set inset edge is a sticky threshold. The node is shifted the
/// minimum amount that keeps the thresholded edge inside the window, and
/// never beyond its parent's content box (a sticky node does not escape
/// its original flow container).
fn apply_sticky(node: &mut LayoutNode, parent_content: Rect, scroll: ScrollWindow) {
  let inset = node.effective.inset;
  let flow_abs = Rect::new(
    parent_content.origin.translate(node.computed.origin),
    node.computed.size,
  );
  let window = scroll.window;

  let mut dx = 0.0f32;
  let mut dy = 0.0f32;

  if let Some(top) = inset.top {
    let push = (window.y() + top) - flow_abs.y();
    let room = (parent_content.bottom() - flow_abs.bottom()).max(0.0);
    dy = push.clamp(0.0, room);
  } else if let Some(bottom) = inset.bottom {
    let push = (window.bottom() - bottom) - flow_abs.bottom();
    let room = (parent_content.y() - flow_abs.y()).min(0.0);
    dy = push.clamp(room, 0.0);
  }

  if let Some(left) = inset.left {
    let push = (window.x() + left) - flow_abs.x();
    let room = (parent_content.right() - flow_abs.right()).max(0.0);
    dx = push.clamp(0.0, room);
  } else if let Some(right) = inset.right {
    let push = (window.right() - right) - flow_abs.right();
    let room = (parent_content.x() - flow_abs.x()).min(0.0);
    dx = push.clamp(room, 0.0);
  }

  node.computed = node.computed.translate(Point::new(dx, dy));
}
