//! Style value types
//!
//! The enumerated keyword values a style declaration can carry, the
//! declaration itself, and the partial patch type used for breakpoint
//! overrides. Parsing produces these once per class string; the breakpoint
//! cascade recomputes an [`EffectiveStyle`] from them on every pass.

use crate::geometry::EdgeOffsets;
use crate::geometry::Insets;

/// Main-axis direction of a flex container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
  /// Children flow left to right; the main axis is horizontal
  #[default]
  Row,
  /// Children flow top to bottom; the main axis is vertical
  Column,
}

/// Wrapping behavior of a flex container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wrap {
  /// All children stay on a single line
  #[default]
  NoWrap,
  /// Children that do not fit start a new line
  Wrap,
  /// Like `Wrap`, but lines stack in reverse on the cross axis
  WrapReverse,
}

/// Cross-axis alignment applied by a container to its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
  Start,
  Center,
  End,
  /// Children with an auto cross size fill the line
  #[default]
  Stretch,
}

/// Per-child override of the container's [`AlignItems`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignSelf {
  /// Defer to the container's `align-items`
  #[default]
  Auto,
  Start,
  Center,
  End,
  Stretch,
}

impl AlignSelf {
  /// Resolves against the container's `align-items` value
  pub fn resolve(self, container: AlignItems) -> AlignItems {
    match self {
      AlignSelf::Auto => container,
      AlignSelf::Start => AlignItems::Start,
      AlignSelf::Center => AlignItems::Center,
      AlignSelf::End => AlignItems::End,
      AlignSelf::Stretch => AlignItems::Stretch,
    }
  }
}

/// Main-axis distribution of free space within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
  #[default]
  Start,
  Center,
  End,
  /// Free space goes between children; first and last touch the edges
  SpaceBetween,
  /// Free space splits around every child, half-size at the line edges
  SpaceAround,
  /// Free space splits evenly between and around children
  SpaceEvenly,
}

/// Positioning scheme of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
  /// Normal flow; insets are ignored
  #[default]
  Static,
  /// Normal flow, then offset by insets without affecting siblings
  Relative,
  /// Removed from flow; placed against the nearest positioned ancestor
  Absolute,
  /// Normal-flow box clamped against the nearest scrolling ancestor
  Sticky,
}

impl Position {
  /// Whether a node with this position establishes a containing block for
  /// absolutely positioned descendants
  pub fn establishes_containing_block(self) -> bool {
    !matches!(self, Position::Static)
  }

  /// Whether the flex algorithm excludes this node from flow distribution
  pub fn is_out_of_flow(self) -> bool {
    matches!(self, Position::Absolute | Position::Sticky)
  }
}

/// Overflow handling, which also marks a node as a scroll container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
  /// Content may paint outside the box; not a scroll container
  #[default]
  Visible,
  /// Content is clipped; scroll offset applies but no scrollbars
  Hidden,
  /// Horizontally scrollable
  ScrollX,
  /// Vertically scrollable
  ScrollY,
}

impl Overflow {
  /// Whether this node clips content and acts as a scrolling ancestor for
  /// sticky descendants
  pub fn is_scroll_container(self) -> bool {
    !matches!(self, Overflow::Visible)
  }
}

/// One axis of a node's preferred size
///
/// Fractions resolve against the parent's content size using the floor
/// rounding policy documented on [`SizeSpec::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeSpec {
  /// Sized from content (intrinsic size, or stretch where alignment says so)
  #[default]
  Auto,
  /// Fixed pixel length
  Px(f32),
  /// Numerator/denominator fraction of the parent's content size
  Fraction(u32, u32),
  /// Percentage (0..=100) of the parent's content size. No class token
  /// produces this; it exists for embedders constructing styles in code.
  Percent(f32),
  /// The whole of the parent's content size
  Full,
}

impl SizeSpec {
  /// Resolves this spec against a definite base length, or `None` for auto
  ///
  /// Fractions use `floor(base * n / d)`: deterministic and never
  /// overlapping, with any sub-pixel remainder left as trailing free space
  /// rather than redistributed. Results are clamped at zero.
  pub fn resolve(self, base: f32) -> Option<f32> {
    let resolved = match self {
      SizeSpec::Auto => return None,
      SizeSpec::Px(px) => px,
      SizeSpec::Fraction(num, den) => {
        if den == 0 {
          return None;
        }
        (base.max(0.0) * num as f32 / den as f32).floor()
      }
      SizeSpec::Percent(pct) => base.max(0.0) * pct / 100.0,
      SizeSpec::Full => base,
    };
    Some(resolved.max(0.0))
  }

  /// Whether this spec resolves to a definite length given a definite base
  pub fn is_definite(self) -> bool {
    !matches!(self, SizeSpec::Auto) && !matches!(self, SizeSpec::Fraction(_, 0))
  }
}

/// A flex item's hypothetical main-axis size before grow/shrink
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FlexBasis {
  /// Fall back to the item's main-axis size spec, then its content size
  #[default]
  Auto,
  /// Fixed pixel length
  Px(f32),
  /// Fraction of the container's definite main-axis size
  Fraction(u32, u32),
  /// Percentage (0..=100) of the container's definite main-axis size. No
  /// class token produces this; it exists for embedders constructing
  /// styles in code.
  Percent(f32),
  /// The container's whole main-axis size
  Full,
}

/// `order-first` sorts before every explicit integer order
pub const ORDER_FIRST: i32 = i32::MIN;
/// `order-last` sorts after every explicit integer order
pub const ORDER_LAST: i32 = i32::MAX;

/// A fully resolved style: the result of the breakpoint cascade
///
/// Exactly one of these exists per node per layout pass; it is a pure
/// function of the declaration and the viewport width and never mutated
/// across nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveStyle {
  pub direction: Direction,
  pub wrap: Wrap,
  /// Growth factor for positive free space (default 0)
  pub grow: f32,
  /// Shrink factor for negative free space (default 1)
  pub shrink: f32,
  pub basis: FlexBasis,
  pub align_items: AlignItems,
  pub align_self: AlignSelf,
  pub justify_content: JustifyContent,
  /// Visual ordering key; document order breaks ties
  pub order: i32,
  pub position: Position,
  pub inset: Insets,
  pub width: SizeSpec,
  pub height: SizeSpec,
  pub overflow: Overflow,
  pub padding: EdgeOffsets,
  /// Spacing between adjacent items on the main axis and between wrap
  /// lines on the cross axis
  pub gap: f32,
}

impl Default for EffectiveStyle {
  fn default() -> Self {
    Self {
      direction: Direction::default(),
      wrap: Wrap::default(),
      grow: 0.0,
      shrink: 1.0,
      basis: FlexBasis::default(),
      align_items: AlignItems::default(),
      align_self: AlignSelf::default(),
      justify_content: JustifyContent::default(),
      order: 0,
      position: Position::default(),
      inset: Insets::NONE,
      width: SizeSpec::default(),
      height: SizeSpec::default(),
      overflow: Overflow::default(),
      padding: EdgeOffsets::ZERO,
      gap: 0.0,
    }
  }
}

impl EffectiveStyle {
  /// Applies a partial patch on top of this style
  ///
  /// Only fields the patch explicitly sets replace the running value;
  /// unset fields fall through. Inset and padding edges merge per edge so
  /// `md:top-0` does not clear a base `left-4`.
  pub fn apply(&mut self, patch: &StylePatch) {
    if let Some(v) = patch.direction {
      self.direction = v;
    }
    if let Some(v) = patch.wrap {
      self.wrap = v;
    }
    if let Some(v) = patch.grow {
      self.grow = v;
    }
    if let Some(v) = patch.shrink {
      self.shrink = v;
    }
    if let Some(v) = patch.basis {
      self.basis = v;
    }
    if let Some(v) = patch.align_items {
      self.align_items = v;
    }
    if let Some(v) = patch.align_self {
      self.align_self = v;
    }
    if let Some(v) = patch.justify_content {
      self.justify_content = v;
    }
    if let Some(v) = patch.order {
      self.order = v;
    }
    if let Some(v) = patch.position {
      self.position = v;
    }
    if let Some(v) = patch.inset_top {
      self.inset.top = Some(v);
    }
    if let Some(v) = patch.inset_right {
      self.inset.right = Some(v);
    }
    if let Some(v) = patch.inset_bottom {
      self.inset.bottom = Some(v);
    }
    if let Some(v) = patch.inset_left {
      self.inset.left = Some(v);
    }
    if let Some(v) = patch.width {
      self.width = v;
    }
    if let Some(v) = patch.height {
      self.height = v;
    }
    if let Some(v) = patch.overflow {
      self.overflow = v;
    }
    if let Some(v) = patch.padding_top {
      self.padding.top = v;
    }
    if let Some(v) = patch.padding_right {
      self.padding.right = v;
    }
    if let Some(v) = patch.padding_bottom {
      self.padding.bottom = v;
    }
    if let Some(v) = patch.padding_left {
      self.padding.left = v;
    }
    if let Some(v) = patch.gap {
      self.gap = v;
    }
  }
}

/// A partial style: only explicitly set fields participate in merging
///
/// Used both while accumulating tokens tier by tier during parsing and as
/// the stored form of each breakpoint override.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StylePatch {
  pub direction: Option<Direction>,
  pub wrap: Option<Wrap>,
  pub grow: Option<f32>,
  pub shrink: Option<f32>,
  pub basis: Option<FlexBasis>,
  pub align_items: Option<AlignItems>,
  pub align_self: Option<AlignSelf>,
  pub justify_content: Option<JustifyContent>,
  pub order: Option<i32>,
  pub position: Option<Position>,
  pub inset_top: Option<f32>,
  pub inset_right: Option<f32>,
  pub inset_bottom: Option<f32>,
  pub inset_left: Option<f32>,
  pub width: Option<SizeSpec>,
  pub height: Option<SizeSpec>,
  pub overflow: Option<Overflow>,
  pub padding_top: Option<f32>,
  pub padding_right: Option<f32>,
  pub padding_bottom: Option<f32>,
  pub padding_left: Option<f32>,
  pub gap: Option<f32>,
}

impl StylePatch {
  /// Whether this patch sets no fields at all
  pub fn is_empty(&self) -> bool {
    *self == StylePatch::default()
  }
}

/// An immutable parsed style declaration
///
/// Created once when a class string is parsed and shared between nodes via
/// `Arc` through the parse cache. The base tier already has defaults folded
/// in; overrides stay partial and are applied by the cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDeclaration {
  /// The base (no breakpoint prefix) tier with defaults applied
  pub base: EffectiveStyle,
  /// Breakpoint overrides as a sparse association list sorted by ascending
  /// threshold; later (larger) matching thresholds override earlier ones
  pub overrides: Vec<(f32, StylePatch)>,
  /// Recognized non-layout tokens, preserved verbatim in source order for
  /// the painting collaborator
  pub passthrough: Vec<String>,
}

impl Default for StyleDeclaration {
  fn default() -> Self {
    Self {
      base: EffectiveStyle::default(),
      overrides: Vec::new(),
      passthrough: Vec::new(),
    }
  }
}
