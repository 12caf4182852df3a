//! Error types for fastlayout
//!
//! The layout contract is deliberately almost infallible: style parsing
//! ignores tokens it cannot understand and a reflow degrades bad input to
//! deterministic defaults rather than aborting, because a partial layout is
//! preferable to blocking the caller's render loop. What remains fallible:
//!
//! - Intrinsic size measurement, which calls out to an external provider
//!   (text shaping etc.) that may fail
//! - Geometry queries made before any reflow has run
//!
//! All errors use the `thiserror` crate for minimal boilerplate and proper
//! error trait implementations.

use thiserror::Error;

/// Result type alias for fastlayout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for fastlayout
#[derive(Error, Debug, Clone)]
pub enum Error {
  /// Intrinsic size measurement error
  #[error("Measure error: {0}")]
  Measure(#[from] MeasureError),

  /// Computed geometry query error
  #[error("Geometry error: {0}")]
  Geometry(#[from] GeometryError),
}

/// Errors reported by an external intrinsic-size provider
///
/// The engine never propagates these out of a reflow; a failed measurement
/// is logged and degraded to a zero intrinsic size. They surface to callers
/// only when a provider is invoked directly.
#[derive(Error, Debug, Clone)]
pub enum MeasureError {
  /// The provider has no measurement for this node
  #[error("No intrinsic size available for node {node_id}")]
  Unavailable { node_id: u64 },

  /// The provider failed while measuring
  #[error("Measurement failed for node {node_id}: {reason}")]
  Failed { node_id: u64, reason: String },
}

/// Errors from querying computed geometry
#[derive(Error, Debug, Clone)]
pub enum GeometryError {
  /// The tree has not been laid out yet
  #[error("Node {node_id} has no computed box: no reflow has run")]
  NotLaidOut { node_id: u64 },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn measure_error_display_includes_node() {
    let error = MeasureError::Failed {
      node_id: 7,
      reason: "shaper unavailable".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("node 7"));
    assert!(display.contains("shaper unavailable"));
  }

  #[test]
  fn error_from_measure_error() {
    let error: Error = MeasureError::Unavailable { node_id: 3 }.into();
    assert!(matches!(error, Error::Measure(_)));
  }

  #[test]
  fn error_from_geometry_error() {
    let error: Error = GeometryError::NotLaidOut { node_id: 1 }.into();
    assert!(matches!(error, Error::Geometry(_)));
  }

  #[test]
  fn error_trait_implemented() {
    let error = Error::Geometry(GeometryError::NotLaidOut { node_id: 0 });
    let _: &dyn std::error::Error = &error;
  }
}
