//! The layout node tree
//!
//! [`LayoutNode`] is the engine's view of one widget: a parsed style
//! declaration, an ordered child list (document order), an optional
//! intrinsic content size for leaves, and the per-pass computed state the
//! engine maintains (effective style and computed box).
//!
//! # Ownership
//!
//! Nodes exclusively own their children; the root is owned by the caller.
//! The engine never changes structural shape; it mutates only computed
//! geometry, effective style, and nothing else. Structural mutation between
//! reflows (adding/removing children) is the widget layer's business.
//!
//! # Construction
//!
//! Trees are built with [`NodeBuilder`], a fluent builder that finalizes
//! into an immutable structural shape before any reflow runs. This keeps
//! mutation-during-layout impossible by construction.
//!
//! ```
//! use fastlayout::tree::NodeBuilder;
//!
//! let root = NodeBuilder::new()
//!   .class("flex-row gap-8 p-16")
//!   .child(NodeBuilder::new().class("w-1/3"))
//!   .child(NodeBuilder::new().class("grow"))
//!   .build();
//! assert_eq!(root.children.len(), 2);
//! ```

use crate::error::GeometryError;
use crate::error::MeasureError;
use crate::geometry::Point;
use crate::geometry::Rect;
use crate::geometry::Size;
use crate::style::parse_cached;
use crate::style::types::EffectiveStyle;
use crate::style::types::StyleDeclaration;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Opaque, process-unique node identity
///
/// Used to correlate computed geometry across reflows (the damage diff) and
/// in diagnostics. Identity is assigned at construction and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
  fn next() -> Self {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    Self(NEXT.fetch_add(1, Ordering::Relaxed))
  }

  /// The raw identity value
  pub fn value(self) -> u64 {
    self.0
  }
}

/// One node in the layout tree
#[derive(Debug, Clone)]
pub struct LayoutNode {
  id: NodeId,
  /// Parsed style declaration, shared via the parse cache
  pub style: Arc<StyleDeclaration>,
  /// Children in document order. Never reordered by the engine; the flex
  /// algorithm derives an order permutation per pass instead.
  pub children: Vec<LayoutNode>,
  /// Intrinsic content size, supplied externally for leaf/text nodes.
  /// `None` for pure containers.
  pub intrinsic_size: Option<Size>,
  /// Scroll offset; only meaningful when `overflow` clips
  scroll_offset: Point,
  /// Cascade result for the current pass
  pub(crate) effective: EffectiveStyle,
  /// Computed box relative to the parent's content origin
  pub(crate) computed: Rect,
  /// Whether any reflow has produced a box for this node
  pub(crate) laid_out: bool,
}

impl LayoutNode {
  /// Creates a bare node from a parsed declaration
  pub fn new(style: Arc<StyleDeclaration>) -> Self {
    Self {
      id: NodeId::next(),
      style,
      children: Vec::new(),
      intrinsic_size: None,
      scroll_offset: Point::ZERO,
      effective: EffectiveStyle::default(),
      computed: Rect::ZERO,
      laid_out: false,
    }
  }

  /// This node's identity
  pub fn id(&self) -> NodeId {
    self.id
  }

  /// The computed box from the most recent reflow
  ///
  /// Parent-relative coordinates. Fails only when no reflow has run yet.
  pub fn computed_box(&self) -> Result<Rect, GeometryError> {
    if !self.laid_out {
      return Err(GeometryError::NotLaidOut {
        node_id: self.id.0,
      });
    }
    Ok(self.computed)
  }

  /// The effective (post-cascade) style of the most recent reflow
  pub fn effective_style(&self) -> &EffectiveStyle {
    &self.effective
  }

  /// Current scroll offset
  pub fn scroll_offset(&self) -> Point {
    self.scroll_offset
  }

  /// Sets the scroll offset for a clipping node
  ///
  /// Takes effect on the next reflow; sticky descendants are re-clamped
  /// then. Offsets are clamped at zero (content cannot scroll backwards).
  pub fn set_scroll_offset(&mut self, offset: Point) {
    self.scroll_offset = Point::new(offset.x.max(0.0), offset.y.max(0.0));
  }

  /// Depth-first search for a node by id
  pub fn find(&self, id: NodeId) -> Option<&LayoutNode> {
    if self.id == id {
      return Some(self);
    }
    self.children.iter().find_map(|child| child.find(id))
  }

  /// Mutable depth-first search for a node by id
  pub fn find_mut(&mut self, id: NodeId) -> Option<&mut LayoutNode> {
    if self.id == id {
      return Some(self);
    }
    self
      .children
      .iter_mut()
      .find_map(|child| child.find_mut(id))
  }
}

/// Fluent builder finalizing into an immutable [`LayoutNode`]
#[derive(Debug, Default)]
pub struct NodeBuilder {
  class: String,
  intrinsic_size: Option<Size>,
  children: Vec<LayoutNode>,
}

impl NodeBuilder {
  /// Starts an empty builder
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the utility-class string (replacing any previous one)
  pub fn class(mut self, class_string: &str) -> Self {
    self.class = class_string.to_string();
    self
  }

  /// Sets the externally measured intrinsic content size
  pub fn intrinsic_size(mut self, width: f32, height: f32) -> Self {
    self.intrinsic_size = Some(Size::new(width, height));
    self
  }

  /// Appends a child (document order)
  pub fn child(mut self, child: impl Into<LayoutNode>) -> Self {
    self.children.push(child.into());
    self
  }

  /// Appends children in iteration order
  pub fn children(mut self, children: impl IntoIterator<Item = LayoutNode>) -> Self {
    self.children.extend(children);
    self
  }

  /// Finalizes into a node, parsing the class string through the cache
  pub fn build(self) -> LayoutNode {
    let mut node = LayoutNode::new(parse_cached(&self.class));
    node.intrinsic_size = self.intrinsic_size;
    node.children = self.children;
    node
  }
}

impl From<NodeBuilder> for LayoutNode {
  fn from(builder: NodeBuilder) -> Self {
    builder.build()
  }
}

/// Synchronous intrinsic-size provider
///
/// Leaf content measurement (text shaping, image dimensions) lives outside
/// the engine. Implementations are called during the measure phase of a
/// reflow, once per leaf that needs a content size. Failures are degraded
/// to a zero size by the engine, with a warning, rather than aborting the
/// reflow.
pub trait IntrinsicSizer {
  /// Measures a node's intrinsic content size within the available space
  fn measure(&self, node: &LayoutNode, available: Size) -> Result<Size, MeasureError>;
}

/// Default provider: the size stored on the node itself
///
/// Leaves without a stored size measure as zero, which is the documented
/// degradation for indeterminate content.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredSizes;

impl IntrinsicSizer for StoredSizes {
  fn measure(&self, node: &LayoutNode, _available: Size) -> Result<Size, MeasureError> {
    Ok(node.intrinsic_size.unwrap_or(Size::ZERO))
  }
}
