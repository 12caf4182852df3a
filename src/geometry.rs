//! Core geometry types for layout
//!
//! This module provides the geometric primitives the layout engine computes
//! with and reports back to callers. All units are CSS pixels.
//!
//! # Coordinate System
//!
//! The coordinate system has its origin at the top-left corner:
//! - Positive X extends to the right
//! - Positive Y extends downward
//!
//! Computed boxes are expressed relative to the parent node's content
//! origin; only the positioning pass ever works in absolute coordinates,
//! and it converts back before storing results.

use std::fmt;

/// A 2D point in CSS pixel space
///
/// # Examples
///
/// ```
/// use fastlayout::Point;
///
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x, 10.0);
/// assert_eq!(Point::ZERO, Point::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
  /// X coordinate (increases to the right)
  pub x: f32,
  /// Y coordinate (increases downward)
  pub y: f32,
}

impl Point {
  /// The origin (0, 0)
  pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

  /// Creates a new point at the given coordinates
  pub const fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }

  /// Translates this point by another point's coordinates
  ///
  /// # Examples
  ///
  /// ```
  /// use fastlayout::Point;
  ///
  /// let moved = Point::new(10.0, 20.0).translate(Point::new(5.0, -3.0));
  /// assert_eq!(moved, Point::new(15.0, 17.0));
  /// ```
  pub fn translate(self, other: Point) -> Self {
    Self {
      x: self.x + other.x,
      y: self.y + other.y,
    }
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// A 2D size in CSS pixels
///
/// Both dimensions are kept non-negative by the engine; every sizing path
/// clamps at zero before storing a result.
///
/// # Examples
///
/// ```
/// use fastlayout::Size;
///
/// let size = Size::new(100.0, 50.0);
/// assert_eq!(size.width, 100.0);
/// assert_eq!(size.height, 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
  /// Width (horizontal extent)
  pub width: f32,
  /// Height (vertical extent)
  pub height: f32,
}

impl Size {
  /// A size with zero width and height
  pub const ZERO: Self = Self {
    width: 0.0,
    height: 0.0,
  };

  /// Creates a new size with the given dimensions
  pub const fn new(width: f32, height: f32) -> Self {
    Self { width, height }
  }

  /// Returns this size with both dimensions clamped to be non-negative
  ///
  /// # Examples
  ///
  /// ```
  /// use fastlayout::Size;
  ///
  /// let s = Size::new(-4.0, 8.0).clamp_non_negative();
  /// assert_eq!(s, Size::new(0.0, 8.0));
  /// ```
  pub fn clamp_non_negative(self) -> Self {
    Self {
      width: self.width.max(0.0),
      height: self.height.max(0.0),
    }
  }
}

impl fmt::Display for Size {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}x{}", self.width, self.height)
  }
}

/// A rectangle defined by an origin and a size
///
/// The computed box of every laid-out node is one of these, with the origin
/// relative to the parent node's content origin.
///
/// # Examples
///
/// ```
/// use fastlayout::Rect;
///
/// let rect = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);
/// assert_eq!(rect.x(), 10.0);
/// assert_eq!(rect.right(), 110.0);
/// assert_eq!(rect.bottom(), 70.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
  /// The top-left corner of the rectangle
  pub origin: Point,
  /// The width and height of the rectangle
  pub size: Size,
}

impl Rect {
  /// A zero-sized rectangle at the origin
  pub const ZERO: Self = Self {
    origin: Point::ZERO,
    size: Size::ZERO,
  };

  /// Creates a new rectangle from an origin point and size
  pub const fn new(origin: Point, size: Size) -> Self {
    Self { origin, size }
  }

  /// Creates a rectangle from x, y, width, height components
  pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
    Self {
      origin: Point::new(x, y),
      size: Size::new(width, height),
    }
  }

  /// X coordinate of the left edge
  pub fn x(&self) -> f32 {
    self.origin.x
  }

  /// Y coordinate of the top edge
  pub fn y(&self) -> f32 {
    self.origin.y
  }

  /// Width of the rectangle
  pub fn width(&self) -> f32 {
    self.size.width
  }

  /// Height of the rectangle
  pub fn height(&self) -> f32 {
    self.size.height
  }

  /// X coordinate of the right edge
  pub fn right(&self) -> f32 {
    self.origin.x + self.size.width
  }

  /// Y coordinate of the bottom edge
  pub fn bottom(&self) -> f32 {
    self.origin.y + self.size.height
  }

  /// Returns this rectangle translated by the given delta
  pub fn translate(self, delta: Point) -> Self {
    Self {
      origin: self.origin.translate(delta),
      size: self.size,
    }
  }

  /// Returns this rectangle shrunk inward by the given edge offsets
  ///
  /// Used to derive a content box from a border box and padding. The
  /// resulting size is clamped at zero when the offsets exceed the
  /// available space.
  ///
  /// # Examples
  ///
  /// ```
  /// use fastlayout::{Rect, EdgeOffsets};
  ///
  /// let outer = Rect::from_xywh(0.0, 0.0, 100.0, 60.0);
  /// let inner = outer.inset_by(EdgeOffsets::all(10.0));
  /// assert_eq!(inner, Rect::from_xywh(10.0, 10.0, 80.0, 40.0));
  /// ```
  pub fn inset_by(self, offsets: EdgeOffsets) -> Self {
    Self {
      origin: Point::new(self.origin.x + offsets.left, self.origin.y + offsets.top),
      size: Size::new(
        self.size.width - offsets.horizontal(),
        self.size.height - offsets.vertical(),
      )
      .clamp_non_negative(),
    }
  }
}

impl fmt::Display for Rect {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.origin, self.size)
  }
}

/// Resolved offsets for the four edges of a box
///
/// Used for padding, where every edge has a concrete pixel value. For
/// position insets, where edges may be unset, see [`Insets`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeOffsets {
  pub top: f32,
  pub right: f32,
  pub bottom: f32,
  pub left: f32,
}

impl EdgeOffsets {
  /// Offsets of zero on all edges
  pub const ZERO: Self = Self {
    top: 0.0,
    right: 0.0,
    bottom: 0.0,
    left: 0.0,
  };

  /// Creates offsets with individual values per edge (top, right, bottom, left)
  pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
    Self {
      top,
      right,
      bottom,
      left,
    }
  }

  /// Creates offsets with the same value on every edge
  pub const fn all(value: f32) -> Self {
    Self::new(value, value, value, value)
  }

  /// Sum of the left and right offsets
  pub fn horizontal(&self) -> f32 {
    self.left + self.right
  }

  /// Sum of the top and bottom offsets
  pub fn vertical(&self) -> f32 {
    self.top + self.bottom
  }
}

/// Optional per-edge offsets for positioned nodes
///
/// `None` means the edge is unset (`auto`): the positioning pass leaves that
/// edge to the static-position fallback. Set edges pin the node's edge to
/// the corresponding edge of its containing block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
  pub top: Option<f32>,
  pub right: Option<f32>,
  pub bottom: Option<f32>,
  pub left: Option<f32>,
}

impl Insets {
  /// Insets with every edge unset
  pub const NONE: Self = Self {
    top: None,
    right: None,
    bottom: None,
    left: None,
  };

  /// Returns true when no edge is set
  pub fn is_none(&self) -> bool {
    self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn point_translate() {
    let p = Point::new(1.0, 2.0).translate(Point::new(3.0, 4.0));
    assert_eq!(p, Point::new(4.0, 6.0));
  }

  #[test]
  fn size_clamps_negative_dimensions() {
    assert_eq!(Size::new(-1.0, -2.0).clamp_non_negative(), Size::ZERO);
  }

  #[test]
  fn rect_edges() {
    let r = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
  }

  #[test]
  fn rect_inset_clamps_to_zero_size() {
    let r = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
    let inner = r.inset_by(EdgeOffsets::all(20.0));
    assert_eq!(inner.size, Size::ZERO);
    assert_eq!(inner.origin, Point::new(20.0, 20.0));
  }

  #[test]
  fn edge_offsets_axis_sums() {
    let e = EdgeOffsets::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(e.horizontal(), 6.0);
    assert_eq!(e.vertical(), 4.0);
  }

  #[test]
  fn insets_none_detection() {
    assert!(Insets::NONE.is_none());
    let mut insets = Insets::NONE;
    insets.left = Some(4.0);
    assert!(!insets.is_none());
  }
}
