//! fastlayout — a flexbox layout engine for utility-class styled widget trees
//!
//! Turns a tree of nodes annotated with atomic utility-class style strings
//! (`"flex-row gap-8 md:w-1/2"`) plus a viewport size into concrete pixel
//! geometry for every node. Re-run a reflow whenever the viewport, the tree,
//! or a scroll offset changes; the engine reports whether anything moved so
//! the caller knows when a repaint is warranted.
//!
//! Rendering, hit-testing, text shaping, and the widget object model live
//! outside this crate: intrinsic content sizes arrive through the pluggable
//! [`tree::IntrinsicSizer`] seam, and the output is nothing but per-node
//! parent-relative boxes.
//!
//! # Example
//!
//! ```
//! use fastlayout::layout::LayoutEngine;
//! use fastlayout::tree::NodeBuilder;
//! use fastlayout::Size;
//!
//! let mut root = NodeBuilder::new()
//!   .class("flex-col gap-16 p-16")
//!   .child(NodeBuilder::new().class("h-48"))
//!   .child(NodeBuilder::new().class("grow flex-row justify-between"))
//!   .build();
//!
//! let mut engine = LayoutEngine::new();
//! engine.reflow(&mut root, Size::new(1280.0, 720.0));
//! let header = root.children[0].computed_box().unwrap();
//! assert_eq!(header.height(), 48.0);
//! ```

pub mod error;
pub mod geometry;
pub mod layout;
pub mod style;
pub mod tree;

pub use error::{Error, Result};
pub use geometry::{EdgeOffsets, Insets, Point, Rect, Size};
pub use layout::LayoutEngine;
pub use style::{parse, parse_cached, resolve, BreakpointScale, EffectiveStyle, StyleDeclaration};
pub use tree::{IntrinsicSizer, LayoutNode, NodeBuilder, NodeId};
