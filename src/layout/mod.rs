//! Layout algorithms
//!
//! Three cooperating pieces, mirroring the pass order of a reflow:
//!
//! - [`flex`]: sizes and places a container's direct children in flow
//! - [`positioned`]: the whole-tree relative/absolute/sticky adjustment
//! - [`engine`]: the orchestrator callers drive

pub mod engine;
pub(crate) mod flex;
pub(crate) mod positioned;

pub use engine::LayoutEngine;
