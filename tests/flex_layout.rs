//! Flow layout scenarios: sizing, distribution, wrapping, ordering.

use fastlayout::layout::LayoutEngine;
use fastlayout::tree::NodeBuilder;
use fastlayout::{LayoutNode, Size};

fn reflow(root: &mut LayoutNode, width: f32, height: f32) {
  LayoutEngine::new().reflow(root, Size::new(width, height));
}

fn assert_close(actual: f32, expected: f32, context: &str) {
  assert!(
    (actual - expected).abs() < 0.01,
    "{context}: expected {expected}, got {actual}"
  );
}

#[test]
fn grow_items_conserve_container_space() {
  // Only grow items, no fixed bases: children exactly fill the container
  // minus gaps.
  let mut root = NodeBuilder::new()
    .class("flex-row gap-10 w-300 h-50")
    .child(NodeBuilder::new().class("grow"))
    .child(NodeBuilder::new().class("grow"))
    .child(NodeBuilder::new().class("grow"))
    .build();
  reflow(&mut root, 300.0, 50.0);

  let total: f32 = root
    .children
    .iter()
    .map(|c| c.computed_box().unwrap().width())
    .sum();
  assert_close(total, 300.0 - 2.0 * 10.0, "sum of grown widths");
}

#[test]
fn grow_factors_split_proportionally() {
  let mut root = NodeBuilder::new()
    .class("flex-row w-400 h-50")
    .child(NodeBuilder::new().class("grow-1"))
    .child(NodeBuilder::new().class("grow-3"))
    .build();
  reflow(&mut root, 400.0, 50.0);

  assert_close(
    root.children[0].computed_box().unwrap().width(),
    100.0,
    "grow-1 share",
  );
  assert_close(
    root.children[1].computed_box().unwrap().width(),
    300.0,
    "grow-3 share",
  );
}

#[test]
fn thirds_fill_a_row_without_overlap() {
  let mut root = NodeBuilder::new()
    .class("flex-row w-100 h-20")
    .child(NodeBuilder::new().class("w-1/3 h-20"))
    .child(NodeBuilder::new().class("w-1/3 h-20"))
    .child(NodeBuilder::new().class("w-1/3 h-20"))
    .build();
  reflow(&mut root, 100.0, 20.0);

  // floor(100 / 3) each, placed adjacently: equal, no overlap, no gap.
  for (i, child) in root.children.iter().enumerate() {
    let boxed = child.computed_box().unwrap();
    assert_eq!(boxed.width(), 33.0, "child {i} width");
    assert_eq!(boxed.x(), 33.0 * i as f32, "child {i} x");
  }
}

#[test]
fn order_permutes_visual_sequence_only() {
  // Document order A,B,C,D,E with orders [1,2,first,last,3] lays out as
  // C,A,B,E,D on the main axis.
  let mut root = NodeBuilder::new()
    .class("flex-row w-500 h-20")
    .child(NodeBuilder::new().class("order-1 w-50 h-20"))
    .child(NodeBuilder::new().class("order-2 w-50 h-20"))
    .child(NodeBuilder::new().class("order-first w-50 h-20"))
    .child(NodeBuilder::new().class("order-last w-50 h-20"))
    .child(NodeBuilder::new().class("order-3 w-50 h-20"))
    .build();
  let ids: Vec<_> = root.children.iter().map(|c| c.id()).collect();
  reflow(&mut root, 500.0, 20.0);

  let x_of = |i: usize| root.children[i].computed_box().unwrap().x();
  // Visual sequence C, A, B, E, D.
  assert_eq!(x_of(2), 0.0);
  assert_eq!(x_of(0), 50.0);
  assert_eq!(x_of(1), 100.0);
  assert_eq!(x_of(4), 150.0);
  assert_eq!(x_of(3), 200.0);

  // Document order is untouched for every other purpose.
  let after: Vec<_> = root.children.iter().map(|c| c.id()).collect();
  assert_eq!(ids, after);
}

#[test]
fn shrink_distributes_deficit_by_weighted_basis() {
  let mut root = NodeBuilder::new()
    .class("flex-row w-100 h-20")
    .child(NodeBuilder::new().class("w-80 h-20"))
    .child(NodeBuilder::new().class("w-120 h-20"))
    .build();
  reflow(&mut root, 100.0, 20.0);

  // Deficit 100 split 80:120 across the bases.
  assert_close(root.children[0].computed_box().unwrap().width(), 40.0, "first");
  assert_close(root.children[1].computed_box().unwrap().width(), 60.0, "second");
}

#[test]
fn shrink_zero_refuses_to_give_up_space() {
  let mut root = NodeBuilder::new()
    .class("flex-row w-100 h-20")
    .child(NodeBuilder::new().class("w-80 shrink-0 h-20"))
    .child(NodeBuilder::new().class("w-80 h-20"))
    .build();
  reflow(&mut root, 100.0, 20.0);

  assert_eq!(root.children[0].computed_box().unwrap().width(), 80.0);
  assert_close(root.children[1].computed_box().unwrap().width(), 20.0, "shrunk");
}

#[test]
fn impossible_constraints_clamp_to_zero_not_negative() {
  let mut root = NodeBuilder::new()
    .class("flex-row w-10 h-10")
    .child(NodeBuilder::new().class("w-500 h-10"))
    .child(NodeBuilder::new().class("w-500 h-10"))
    .build();
  reflow(&mut root, 10.0, 10.0);

  for child in &root.children {
    let boxed = child.computed_box().unwrap();
    assert!(boxed.width() >= 0.0);
    assert!(boxed.height() >= 0.0);
  }
}

#[test]
fn wrap_starts_a_new_line_when_bases_overflow() {
  let mut root = NodeBuilder::new()
    .class("flex-row flex-wrap w-100 h-100")
    .child(NodeBuilder::new().class("w-40 h-10"))
    .child(NodeBuilder::new().class("w-40 h-10"))
    .child(NodeBuilder::new().class("w-40 h-10"))
    .build();
  reflow(&mut root, 100.0, 100.0);

  let boxes: Vec<_> = root
    .children
    .iter()
    .map(|c| c.computed_box().unwrap())
    .collect();
  assert_eq!((boxes[0].x(), boxes[0].y()), (0.0, 0.0));
  assert_eq!((boxes[1].x(), boxes[1].y()), (40.0, 0.0));
  assert_eq!((boxes[2].x(), boxes[2].y()), (0.0, 10.0), "third child wraps");
}

#[test]
fn wrap_reverse_flips_line_stacking_only() {
  let mut root = NodeBuilder::new()
    .class("flex-row flex-wrap-reverse w-100 h-100")
    .child(NodeBuilder::new().class("w-40 h-10"))
    .child(NodeBuilder::new().class("w-40 h-10"))
    .child(NodeBuilder::new().class("w-40 h-10"))
    .build();
  reflow(&mut root, 100.0, 100.0);

  let boxes: Vec<_> = root
    .children
    .iter()
    .map(|c| c.computed_box().unwrap())
    .collect();
  // Second line stacks first; order within each line is unchanged.
  assert_eq!((boxes[2].x(), boxes[2].y()), (0.0, 0.0));
  assert_eq!((boxes[0].x(), boxes[0].y()), (0.0, 10.0));
  assert_eq!((boxes[1].x(), boxes[1].y()), (40.0, 10.0));
}

#[test]
fn gap_separates_wrap_lines_on_the_cross_axis() {
  let mut root = NodeBuilder::new()
    .class("flex-row flex-wrap gap-8 w-100 h-100")
    .child(NodeBuilder::new().class("w-60 h-10"))
    .child(NodeBuilder::new().class("w-60 h-10"))
    .build();
  reflow(&mut root, 100.0, 100.0);

  assert_eq!(root.children[1].computed_box().unwrap().y(), 18.0);
}

#[test]
fn justify_between_pushes_items_apart() {
  let mut root = NodeBuilder::new()
    .class("flex-row justify-between w-300 h-20")
    .child(NodeBuilder::new().class("w-50 h-20"))
    .child(NodeBuilder::new().class("w-50 h-20"))
    .child(NodeBuilder::new().class("w-50 h-20"))
    .build();
  reflow(&mut root, 300.0, 20.0);

  let xs: Vec<f32> = root
    .children
    .iter()
    .map(|c| c.computed_box().unwrap().x())
    .collect();
  assert_eq!(xs, vec![0.0, 125.0, 250.0]);
}

#[test]
fn justify_center_and_end_offset_the_run() {
  let mut center = NodeBuilder::new()
    .class("flex-row justify-center w-200 h-20")
    .child(NodeBuilder::new().class("w-100 h-20"))
    .build();
  reflow(&mut center, 200.0, 20.0);
  assert_eq!(center.children[0].computed_box().unwrap().x(), 50.0);

  let mut end = NodeBuilder::new()
    .class("flex-row justify-end w-200 h-20")
    .child(NodeBuilder::new().class("w-100 h-20"))
    .build();
  reflow(&mut end, 200.0, 20.0);
  assert_eq!(end.children[0].computed_box().unwrap().x(), 100.0);
}

#[test]
fn auto_cross_size_stretches_to_the_container() {
  let mut root = NodeBuilder::new()
    .class("flex-row w-200 h-60")
    .child(NodeBuilder::new().class("w-30"))
    .build();
  reflow(&mut root, 200.0, 60.0);
  assert_eq!(root.children[0].computed_box().unwrap().height(), 60.0);
}

#[test]
fn self_center_overrides_container_stretch() {
  let mut root = NodeBuilder::new()
    .class("flex-row w-200 h-60")
    .child(NodeBuilder::new().class("w-30 h-20 self-center"))
    .build();
  reflow(&mut root, 200.0, 60.0);
  let boxed = root.children[0].computed_box().unwrap();
  assert_eq!(boxed.height(), 20.0);
  assert_eq!(boxed.y(), 20.0);
}

#[test]
fn column_direction_grows_along_height() {
  let mut root = NodeBuilder::new()
    .class("flex-col w-100 h-200")
    .child(NodeBuilder::new().class("h-50"))
    .child(NodeBuilder::new().class("grow"))
    .build();
  reflow(&mut root, 100.0, 200.0);

  let first = root.children[0].computed_box().unwrap();
  let second = root.children[1].computed_box().unwrap();
  assert_eq!(first.height(), 50.0);
  assert_eq!(second.y(), 50.0);
  assert_eq!(second.height(), 150.0);
  assert_eq!(second.width(), 100.0, "column cross axis stretches width");
}

#[test]
fn padding_shrinks_the_content_box() {
  let mut root = NodeBuilder::new()
    .class("flex-row p-10 w-100 h-50")
    .child(NodeBuilder::new().class("grow"))
    .build();
  reflow(&mut root, 100.0, 50.0);

  let boxed = root.children[0].computed_box().unwrap();
  // Child coordinates are relative to the content origin.
  assert_eq!(boxed.x(), 0.0);
  assert_eq!(boxed.width(), 80.0);
  assert_eq!(boxed.height(), 30.0);
}

#[test]
fn leaf_intrinsic_sizes_feed_auto_bases() {
  let mut root = NodeBuilder::new()
    .class("flex-row w-300 h-50")
    .child(NodeBuilder::new().intrinsic_size(120.0, 24.0))
    .child(NodeBuilder::new().class("grow"))
    .build();
  reflow(&mut root, 300.0, 50.0);

  assert_eq!(root.children[0].computed_box().unwrap().width(), 120.0);
  assert_eq!(root.children[1].computed_box().unwrap().width(), 180.0);
}

#[test]
fn container_auto_size_bottoms_out_at_leaf_intrinsics() {
  // The middle container has no definite size anywhere; its basis comes
  // from its children's intrinsic sizes.
  let mut root = NodeBuilder::new()
    .class("flex-row w-400 h-100")
    .child(
      NodeBuilder::new()
        .class("flex-row gap-10")
        .child(NodeBuilder::new().intrinsic_size(30.0, 10.0))
        .child(NodeBuilder::new().intrinsic_size(50.0, 10.0)),
    )
    .child(NodeBuilder::new().class("grow"))
    .build();
  reflow(&mut root, 400.0, 100.0);

  assert_eq!(
    root.children[0].computed_box().unwrap().width(),
    30.0 + 10.0 + 50.0
  );
}
