//! Responsive breakpoints and the style cascade
//!
//! Breakpoint-prefixed tokens (`md:flex-row`) are stored on the declaration
//! as partial overrides keyed by pixel threshold. The cascade resolves one
//! effective style per node per pass: starting from the base tier, every
//! override whose threshold is at or below the viewport width is applied in
//! ascending threshold order, field by field.
//!
//! Widening the viewport can therefore only apply additional overrides on
//! top of the ones already applied, never skip or reorder them — the
//! cascade is monotonic in the viewport width.

use crate::style::types::EffectiveStyle;
use crate::style::types::StyleDeclaration;

/// The named breakpoints and their min-width pixel thresholds
///
/// The default scale carries the conventional utility-class thresholds.
/// Embedders with different design systems can substitute their own; the
/// parser consults the scale when turning a `md:` prefix into a threshold.
///
/// # Examples
///
/// ```
/// use fastlayout::style::BreakpointScale;
///
/// let scale = BreakpointScale::default();
/// assert_eq!(scale.threshold("md"), Some(768.0));
/// assert_eq!(scale.threshold("xs"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointScale {
  /// (name, min-width threshold) pairs, ascending by threshold
  entries: Vec<(String, f32)>,
}

impl Default for BreakpointScale {
  fn default() -> Self {
    Self::new(&[("sm", 640.0), ("md", 768.0), ("lg", 1024.0), ("xl", 1280.0)])
  }
}

impl BreakpointScale {
  /// Creates a scale from (name, threshold) pairs
  ///
  /// Entries are sorted by ascending threshold regardless of input order so
  /// the cascade invariant holds by construction.
  pub fn new(entries: &[(&str, f32)]) -> Self {
    let mut entries: Vec<(String, f32)> = entries
      .iter()
      .map(|(name, threshold)| (name.to_string(), *threshold))
      .collect();
    entries.sort_by(|a, b| a.1.total_cmp(&b.1));
    Self { entries }
  }

  /// Looks up the threshold for a breakpoint name
  pub fn threshold(&self, name: &str) -> Option<f32> {
    self
      .entries
      .iter()
      .find(|(n, _)| n == name)
      .map(|(_, threshold)| *threshold)
  }
}

/// Resolves a declaration against a viewport width
///
/// Pure function of `(declaration, viewport_width)`: the base tier, then
/// every override with `threshold <= viewport_width` applied in ascending
/// threshold order. Unset override fields fall through to the running
/// value.
///
/// # Examples
///
/// ```
/// use fastlayout::style::{parse, resolve};
/// use fastlayout::style::types::Direction;
///
/// let decl = parse("flex-col md:flex-row");
/// assert_eq!(resolve(&decl, 400.0).direction, Direction::Column);
/// assert_eq!(resolve(&decl, 800.0).direction, Direction::Row);
/// ```
pub fn resolve(declaration: &StyleDeclaration, viewport_width: f32) -> EffectiveStyle {
  let mut effective = declaration.base.clone();
  for (threshold, patch) in &declaration.overrides {
    if *threshold <= viewport_width {
      effective.apply(patch);
    }
  }
  effective
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::style::parse;
  use crate::style::types::Direction;
  use crate::style::types::JustifyContent;

  #[test]
  fn default_scale_thresholds() {
    let scale = BreakpointScale::default();
    assert_eq!(scale.threshold("sm"), Some(640.0));
    assert_eq!(scale.threshold("md"), Some(768.0));
    assert_eq!(scale.threshold("lg"), Some(1024.0));
    assert_eq!(scale.threshold("xl"), Some(1280.0));
  }

  #[test]
  fn custom_scale_sorts_entries() {
    let scale = BreakpointScale::new(&[("wide", 1200.0), ("narrow", 480.0)]);
    assert_eq!(scale.threshold("narrow"), Some(480.0));
    assert_eq!(scale.threshold("wide"), Some(1200.0));
  }

  #[test]
  fn narrow_viewport_keeps_base_tier() {
    let decl = parse("justify-start lg:justify-center");
    let effective = resolve(&decl, 500.0);
    assert_eq!(effective.justify_content, JustifyContent::Start);
  }

  #[test]
  fn overrides_apply_in_ascending_threshold_order() {
    let decl = parse("flex-col sm:flex-row lg:flex-col");
    assert_eq!(resolve(&decl, 320.0).direction, Direction::Column);
    assert_eq!(resolve(&decl, 700.0).direction, Direction::Row);
    assert_eq!(resolve(&decl, 1280.0).direction, Direction::Column);
  }

  #[test]
  fn boundary_width_applies_override() {
    // Thresholds are min-width: equality counts as matching.
    let decl = parse("flex-col md:flex-row");
    assert_eq!(resolve(&decl, 768.0).direction, Direction::Row);
    assert_eq!(resolve(&decl, 767.9).direction, Direction::Column);
  }

  #[test]
  fn unset_fields_fall_through_across_tiers() {
    let decl = parse("justify-between md:flex-col");
    let effective = resolve(&decl, 900.0);
    assert_eq!(effective.direction, Direction::Column);
    assert_eq!(effective.justify_content, JustifyContent::SpaceBetween);
  }
}
