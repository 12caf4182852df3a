//! Flex container layout
//!
//! The two-pass sizing and positioning algorithm for flex containers. Given
//! a container whose own box is already known, this module sizes and places
//! the container's direct children inside its content box:
//!
//! 1. Partition children into normal flow (static/relative) and out of
//!    flow (absolute/sticky, handled by the positioning pass)
//! 2. Sequence flow children by `order`, stable on document order
//! 3. Resolve each child's flex basis to a definite main-axis length
//! 4. Form wrap lines (if wrapping) by accumulating bases and gaps
//! 5. Distribute free space per line: grow when positive, shrink
//!    proportionally to `shrink × basis` when negative, never below zero
//! 6. Size the cross axis per line and stretch where alignment says so
//! 7. Place along the main axis per `justify-content`, then along the
//!    cross axis per `align-self`/`align-items`
//!
//! Out-of-flow children still receive a hypothetical static-position box
//! here (the slot the next in-flow child in visual order occupies), which
//! the positioning resolver uses as the fallback origin for unset inset
//! axes. They take part in neither line formation nor space distribution.
//!
//! The canonical child sequence is never reordered; visual order is a
//! per-pass index permutation.

use crate::geometry::Point;
use crate::geometry::Rect;
use crate::geometry::Size;
use crate::style::types::AlignItems;
use crate::style::types::Direction;
use crate::style::types::FlexBasis;
use crate::style::types::JustifyContent;
use crate::style::types::SizeSpec;
use crate::style::types::Wrap;
use crate::tree::IntrinsicSizer;
use crate::tree::LayoutNode;

/// Tolerance for accumulated float error in line-fitting comparisons
const FIT_EPSILON: f32 = 0.001;

/// Extracts the main-axis component of a size
fn main(size: Size, direction: Direction) -> f32 {
  match direction {
    Direction::Row => size.width,
    Direction::Column => size.height,
  }
}

/// Extracts the cross-axis component of a size
fn cross(size: Size, direction: Direction) -> f32 {
  match direction {
    Direction::Row => size.height,
    Direction::Column => size.width,
  }
}

/// Builds a size from main/cross components
fn size_from_axes(main: f32, cross: f32, direction: Direction) -> Size {
  match direction {
    Direction::Row => Size::new(main, cross),
    Direction::Column => Size::new(cross, main),
  }
}

/// Builds a point from main/cross components
fn point_from_axes(main: f32, cross: f32, direction: Direction) -> Point {
  match direction {
    Direction::Row => Point::new(main, cross),
    Direction::Column => Point::new(cross, main),
  }
}

/// The per-pass visual ordering: indices into `children` sorted by
/// `(order, document index)`
///
/// Stable by construction: the sort key carries the document index as the
/// tie-break, so equal `order` values keep document order.
pub(crate) fn visual_order(children: &[LayoutNode]) -> Vec<usize> {
  let mut permutation: Vec<usize> = (0..children.len()).collect();
  permutation.sort_by_key(|&i| (children[i].effective.order, i));
  permutation
}

/// Measures a subtree's intrinsic size, bottoming out at leaf sizes
///
/// Pure containers aggregate their flow children along their own main
/// axis (sum plus gaps) and take the max on the cross axis; leaves ask the
/// external provider. Padding is added on both axes. A provider failure
/// degrades to zero with a warning, per the error-handling contract.
pub(crate) fn measure_intrinsic(node: &LayoutNode, sizer: &dyn IntrinsicSizer) -> Size {
  let style = &node.effective;
  if node.children.is_empty() {
    let content = match sizer.measure(node, Size::new(f32::INFINITY, f32::INFINITY)) {
      Ok(size) => size.clamp_non_negative(),
      Err(error) => {
        log::warn!("intrinsic measure failed for node {}: {error}", node.id().value());
        Size::ZERO
      }
    };
    return Size::new(
      content.width + style.padding.horizontal(),
      content.height + style.padding.vertical(),
    );
  }

  let direction = style.direction;
  let mut main_sum = 0.0;
  let mut cross_max: f32 = 0.0;
  let mut flow_count = 0usize;
  for child in &node.children {
    if child.effective.position.is_out_of_flow() {
      continue;
    }
    let outer = intrinsic_outer_size(child, sizer);
    main_sum += main(outer, direction);
    cross_max = cross_max.max(cross(outer, direction));
    flow_count += 1;
  }
  if flow_count > 1 {
    main_sum += style.gap * (flow_count - 1) as f32;
  }
  let content = size_from_axes(main_sum, cross_max, direction);
  Size::new(
    content.width + style.padding.horizontal(),
    content.height + style.padding.vertical(),
  )
}

/// A child's contribution to its parent's intrinsic size
///
/// Fixed pixel specs are definite without any base and take precedence over
/// the measured content size; everything else resolves recursively.
fn intrinsic_outer_size(child: &LayoutNode, sizer: &dyn IntrinsicSizer) -> Size {
  let measured = measure_intrinsic(child, sizer);
  let width = match child.effective.width {
    SizeSpec::Px(px) => px.max(0.0),
    _ => measured.width,
  };
  let height = match child.effective.height {
    SizeSpec::Px(px) => px.max(0.0),
    _ => measured.height,
  };
  Size::new(width, height)
}

/// Resolves a flow child's flex basis to a definite main-axis length
///
/// `auto` falls back to the child's own main-axis size spec when that is
/// definite, then to the intrinsic content size, then to zero. Fractions
/// and `full` resolve against the container's definite main size.
fn resolve_basis(
  child: &LayoutNode,
  available_main: f32,
  direction: Direction,
  sizer: &dyn IntrinsicSizer,
) -> f32 {
  let base = available_main.max(0.0);
  match child.effective.basis {
    FlexBasis::Px(px) => px.max(0.0),
    FlexBasis::Full => base,
    FlexBasis::Fraction(num, den) => SizeSpec::Fraction(num, den)
      .resolve(base)
      .unwrap_or(0.0),
    FlexBasis::Percent(pct) => SizeSpec::Percent(pct).resolve(base).unwrap_or(0.0),
    FlexBasis::Auto => {
      let own_spec = match direction {
        Direction::Row => child.effective.width,
        Direction::Column => child.effective.height,
      };
      match own_spec.resolve(base) {
        Some(resolved) => resolved,
        None => main(intrinsic_outer_size(child, sizer), direction),
      }
    }
  }
}

/// Distributes free space over a line's bases (§grow/shrink)
///
/// Positive free space goes to children proportionally to their grow
/// factors; a deficit is taken proportionally to `shrink × basis`, clamped
/// so no child drops below zero. Returns the final main sizes.
pub(crate) fn distribute_free_space(
  bases: &[f32],
  grows: &[f32],
  shrinks: &[f32],
  free_space: f32,
) -> Vec<f32> {
  let mut sizes = bases.to_vec();
  if free_space > 0.0 {
    let total_grow: f32 = grows.iter().sum();
    if total_grow > 0.0 {
      for (size, grow) in sizes.iter_mut().zip(grows) {
        *size += free_space * grow / total_grow;
      }
    }
  } else if free_space < 0.0 {
    let scaled: Vec<f32> = shrinks
      .iter()
      .zip(bases)
      .map(|(shrink, basis)| shrink * basis)
      .collect();
    let total_scaled: f32 = scaled.iter().sum();
    if total_scaled > 0.0 {
      let deficit = -free_space;
      for (size, scaled) in sizes.iter_mut().zip(&scaled) {
        *size = (*size - deficit * scaled / total_scaled).max(0.0);
      }
    }
  }
  sizes
}

/// Main-axis spacing for a line: `(leading offset, spacing between items)`
///
/// The between-item spacing includes the container gap. Free space is
/// clamped at zero so impossible constraints degrade to start-aligned
/// overflow instead of negative spacing.
pub(crate) fn justify_spacing(
  justify: JustifyContent,
  free_space: f32,
  item_count: usize,
  gap: f32,
) -> (f32, f32) {
  let free = free_space.max(0.0);
  let count = item_count as f32;
  match justify {
    JustifyContent::Start => (0.0, gap),
    JustifyContent::Center => (free / 2.0, gap),
    JustifyContent::End => (free, gap),
    JustifyContent::SpaceBetween => {
      if item_count > 1 {
        (0.0, gap + free / (count - 1.0))
      } else {
        (0.0, gap)
      }
    }
    JustifyContent::SpaceAround => {
      if item_count > 0 {
        let around = free / count;
        (around / 2.0, gap + around)
      } else {
        (0.0, gap)
      }
    }
    JustifyContent::SpaceEvenly => {
      if item_count > 0 {
        let evenly = free / (count + 1.0);
        (evenly, gap + evenly)
      } else {
        (0.0, gap)
      }
    }
  }
}

/// One formed wrap line: indices into the flow-child permutation
struct Line {
  children: Vec<usize>,
  cross_size: f32,
}

/// Lays out the direct children of a flex container
///
/// The container's own `computed` box must already be set (by its parent,
/// or to the viewport for the root). Every child, in flow or not,
/// receives a computed box relative to this container's origin; the engine
/// then recurses into each child.
pub(crate) fn layout_container(node: &mut LayoutNode, sizer: &dyn IntrinsicSizer) {
  if node.children.is_empty() {
    return;
  }

  let style = node.effective.clone();
  let direction = style.direction;
  // Child origins are relative to this container's content origin, so the
  // content box here starts at zero; padding only shrinks the size.
  let content = Rect::new(
    Point::ZERO,
    Size::new(
      node.computed.width() - style.padding.horizontal(),
      node.computed.height() - style.padding.vertical(),
    )
    .clamp_non_negative(),
  );
  let available_main = main(content.size, direction).max(0.0);
  let available_cross = cross(content.size, direction).max(0.0);

  let permutation = visual_order(&node.children);
  let flow: Vec<usize> = permutation
    .iter()
    .copied()
    .filter(|&i| !node.children[i].effective.position.is_out_of_flow())
    .collect();

  // Basis resolution and hypothetical cross sizes.
  let bases: Vec<f32> = flow
    .iter()
    .map(|&i| resolve_basis(&node.children[i], available_main, direction, sizer))
    .collect();
  let hypothetical_cross: Vec<f32> = flow
    .iter()
    .map(|&i| {
      let child = &node.children[i];
      let spec = match direction {
        Direction::Row => child.effective.height,
        Direction::Column => child.effective.width,
      };
      spec
        .resolve(available_cross)
        .unwrap_or_else(|| cross(intrinsic_outer_size(child, sizer), direction))
    })
    .collect();

  // Wrap line formation. A child that cannot fit starts a new line; the
  // first child of a line always fits.
  let wrapping = !matches!(style.wrap, Wrap::NoWrap);
  let mut lines: Vec<Line> = Vec::new();
  let mut line_start = 0usize;
  if wrapping {
    let mut cursor = 0.0;
    for slot in 0..flow.len() {
      let advance = if slot == line_start { bases[slot] } else { style.gap + bases[slot] };
      if slot > line_start && cursor + advance > available_main + FIT_EPSILON {
        lines.push(Line {
          children: (line_start..slot).collect(),
          cross_size: 0.0,
        });
        line_start = slot;
        cursor = bases[slot];
      } else {
        cursor += advance;
      }
    }
  }
  if line_start < flow.len() || lines.is_empty() {
    lines.push(Line {
      children: (line_start..flow.len()).collect(),
      cross_size: 0.0,
    });
  }

  // Cross sizing: a single non-wrapped line fills the container's definite
  // cross size; wrapped lines are content-sized from their tallest child.
  let single_line = !wrapping && lines.len() == 1;
  for line in &mut lines {
    line.cross_size = if single_line {
      available_cross
    } else {
      line
        .children
        .iter()
        .map(|&slot| hypothetical_cross[slot])
        .fold(0.0, f32::max)
    };
  }

  // Grow/shrink per line, then placement.
  let mut main_sizes = vec![0.0f32; flow.len()];
  for line in &lines {
    let line_bases: Vec<f32> = line.children.iter().map(|&slot| bases[slot]).collect();
    let grows: Vec<f32> = line
      .children
      .iter()
      .map(|&slot| node.children[flow[slot]].effective.grow.max(0.0))
      .collect();
    let shrinks: Vec<f32> = line
      .children
      .iter()
      .map(|&slot| node.children[flow[slot]].effective.shrink.max(0.0))
      .collect();
    let gaps = style.gap * line.children.len().saturating_sub(1) as f32;
    let free = available_main - line_bases.iter().sum::<f32>() - gaps;
    let resolved = distribute_free_space(&line_bases, &grows, &shrinks, free);
    for (&slot, size) in line.children.iter().zip(resolved) {
      main_sizes[slot] = size;
    }
  }

  // Cross-axis stacking order of lines; wrap-reverse reverses only this.
  let line_order: Vec<usize> = if matches!(style.wrap, Wrap::WrapReverse) {
    (0..lines.len()).rev().collect()
  } else {
    (0..lines.len()).collect()
  };
  let mut line_cross_starts = vec![0.0f32; lines.len()];
  let mut cross_cursor = 0.0;
  for &line_index in &line_order {
    line_cross_starts[line_index] = cross_cursor;
    cross_cursor += lines[line_index].cross_size + style.gap;
  }

  // Place flow children; remember each one's slot geometry for the
  // static-position fallback of out-of-flow siblings.
  let mut slot_origins = vec![Point::ZERO; flow.len()];
  let mut end_cursor = content.origin;
  for (line_index, line) in lines.iter().enumerate() {
    let line_cross_start = line_cross_starts[line_index];
    let occupied: f32 = line.children.iter().map(|&slot| main_sizes[slot]).sum();
    let gaps = style.gap * line.children.len().saturating_sub(1) as f32;
    let free = available_main - occupied - gaps;
    let (leading, spacing) = justify_spacing(
      style.justify_content,
      free,
      line.children.len(),
      style.gap,
    );

    let mut main_cursor = leading;
    for &slot in &line.children {
      let child_index = flow[slot];
      let align = node.children[child_index]
        .effective
        .align_self
        .resolve(style.align_items);
      let cross_spec_is_auto = match direction {
        Direction::Row => !node.children[child_index].effective.height.is_definite(),
        Direction::Column => !node.children[child_index].effective.width.is_definite(),
      };
      let cross_size = if cross_spec_is_auto && align == AlignItems::Stretch {
        line.cross_size
      } else {
        hypothetical_cross[slot]
      };
      let cross_offset = match align {
        AlignItems::Start | AlignItems::Stretch => 0.0,
        AlignItems::Center => ((line.cross_size - cross_size) / 2.0).max(0.0),
        AlignItems::End => (line.cross_size - cross_size).max(0.0),
      };

      let origin = content.origin.translate(point_from_axes(
        main_cursor,
        line_cross_start + cross_offset,
        direction,
      ));
      let size = size_from_axes(main_sizes[slot].max(0.0), cross_size.max(0.0), direction);
      slot_origins[slot] = origin;

      let child = &mut node.children[child_index];
      child.computed = Rect::new(origin, size);
      child.laid_out = true;

      main_cursor += main_sizes[slot] + spacing;
      end_cursor = content.origin.translate(point_from_axes(
        main_cursor,
        line_cross_start,
        direction,
      ));
    }
  }
  if flow.is_empty() {
    end_cursor = content.origin;
  }

  // Hypothetical boxes for out-of-flow children: sized from their own
  // specs (intrinsic fallback), placed at the slot the next in-flow child
  // in visual order occupies, or after the last flow child.
  for (visual_position, &child_index) in permutation.iter().enumerate() {
    if !node.children[child_index].effective.position.is_out_of_flow() {
      continue;
    }
    let fallback_origin = permutation[visual_position..]
      .iter()
      .find_map(|&later| {
        flow
          .iter()
          .position(|&flow_index| flow_index == later)
          .map(|slot| slot_origins[slot])
      })
      .unwrap_or(end_cursor);

    let child = &node.children[child_index];
    let width = child
      .effective
      .width
      .resolve(content.size.width)
      .unwrap_or_else(|| intrinsic_outer_size(child, sizer).width);
    let height = child
      .effective
      .height
      .resolve(content.size.height)
      .unwrap_or_else(|| intrinsic_outer_size(child, sizer).height);

    let child = &mut node.children[child_index];
    child.computed = Rect::new(fallback_origin, Size::new(width, height).clamp_non_negative());
    child.laid_out = true;
  }
}

/// Depth-first flow layout of a whole subtree: parents size children,
/// then recurse
pub(crate) fn layout_subtree(node: &mut LayoutNode, sizer: &dyn IntrinsicSizer) {
  layout_container(node, sizer);
  for child in &mut node.children {
    layout_subtree(child, sizer);
  }
}
