//! Utility-class style parser
//!
//! Turns a whitespace-separated class string (`"flex-row gap-4 md:w-1/2"`)
//! into a [`StyleDeclaration`]. The grammar is a fixed set of token
//! prefixes; tokens are applied left to right, so a later token for the
//! same property wins within its breakpoint tier.
//!
//! # Error tolerance
//!
//! Unknown or malformed tokens never fail the declaration. They are kept
//! verbatim in [`StyleDeclaration::passthrough`] (visual tokens like
//! `text-center` or `bg-slate-900` carry no layout weight but the painting
//! collaborator still wants them) and logged at debug level.
//!
//! # Caching
//!
//! A class string is parsed once. [`parse_cached`] interns declarations by
//! string identity behind a process-wide map, so attaching the same class
//! string to many nodes shares one `Arc` and parsing never runs per frame.

use crate::style::breakpoints::BreakpointScale;
use crate::style::types::AlignItems;
use crate::style::types::AlignSelf;
use crate::style::types::Direction;
use crate::style::types::FlexBasis;
use crate::style::types::JustifyContent;
use crate::style::types::Overflow;
use crate::style::types::Position;
use crate::style::types::SizeSpec;
use crate::style::types::StyleDeclaration;
use crate::style::types::StylePatch;
use crate::style::types::Wrap;
use crate::style::types::ORDER_FIRST;
use crate::style::types::ORDER_LAST;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;

/// Parses a class string with the default breakpoint scale
///
/// # Examples
///
/// ```
/// use fastlayout::style::parse;
/// use fastlayout::style::types::{Direction, SizeSpec};
///
/// let decl = parse("flex-col w-1/2 gap-8");
/// assert_eq!(decl.base.direction, Direction::Column);
/// assert_eq!(decl.base.width, SizeSpec::Fraction(1, 2));
/// assert_eq!(decl.base.gap, 8.0);
/// ```
pub fn parse(class_string: &str) -> StyleDeclaration {
  parse_with_scale(class_string, &BreakpointScale::default())
}

/// Parses a class string, resolving breakpoint prefixes against `scale`
pub fn parse_with_scale(class_string: &str, scale: &BreakpointScale) -> StyleDeclaration {
  let mut base = StylePatch::default();
  // Sparse association list; first-seen order, sorted once at the end.
  let mut overrides: Vec<(f32, StylePatch)> = Vec::new();
  let mut passthrough = Vec::new();

  for token in class_string.split_whitespace() {
    let (patch, bare) = match token.split_once(':') {
      Some((prefix, rest)) => match scale.threshold(prefix) {
        Some(threshold) => {
          let index = match overrides.iter().position(|(t, _)| *t == threshold) {
            Some(index) => index,
            None => {
              overrides.push((threshold, StylePatch::default()));
              overrides.len() - 1
            }
          };
          (&mut overrides[index].1, rest)
        }
        None => {
          log::debug!("unknown breakpoint prefix in token {token:?}; passing through");
          passthrough.push(token.to_string());
          continue;
        }
      },
      None => (&mut base, token),
    };

    if !apply_token(patch, bare) {
      log::debug!("token {token:?} carries no layout weight; passing through");
      passthrough.push(token.to_string());
    }
  }

  overrides.sort_by(|a, b| a.0.total_cmp(&b.0));

  let mut declaration = StyleDeclaration {
    base: Default::default(),
    overrides,
    passthrough,
  };
  declaration.base.apply(&base);
  declaration
}

/// Parses a class string through the process-wide cache
///
/// Repeated calls with the same class string return the same shared
/// declaration without re-tokenizing. Only the default breakpoint scale is
/// cached; custom scales go through [`parse_with_scale`].
pub fn parse_cached(class_string: &str) -> Arc<StyleDeclaration> {
  static CACHE: OnceLock<Mutex<FxHashMap<String, Arc<StyleDeclaration>>>> = OnceLock::new();
  let cache = CACHE.get_or_init(|| Mutex::new(FxHashMap::default()));
  let mut cache = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
  if let Some(declaration) = cache.get(class_string) {
    return declaration.clone();
  }
  let declaration = Arc::new(parse(class_string));
  cache.insert(class_string.to_string(), declaration.clone());
  declaration
}

/// Applies one bare (prefix-stripped) token to a patch
///
/// Returns false when the token is not part of the layout grammar.
fn apply_token(patch: &mut StylePatch, token: &str) -> bool {
  match token {
    "flex-row" => patch.direction = Some(Direction::Row),
    "flex-col" => patch.direction = Some(Direction::Column),
    "flex-wrap" => patch.wrap = Some(Wrap::Wrap),
    "flex-nowrap" => patch.wrap = Some(Wrap::NoWrap),
    "flex-wrap-reverse" => patch.wrap = Some(Wrap::WrapReverse),
    "flex-grow" | "grow" => patch.grow = Some(1.0),
    "flex-shrink" | "shrink" => patch.shrink = Some(1.0),
    "relative" => patch.position = Some(Position::Relative),
    "absolute" => patch.position = Some(Position::Absolute),
    "sticky" => patch.position = Some(Position::Sticky),
    "static" => patch.position = Some(Position::Static),
    "order-first" => patch.order = Some(ORDER_FIRST),
    "order-last" => patch.order = Some(ORDER_LAST),
    "overflow-visible" => patch.overflow = Some(Overflow::Visible),
    "overflow-hidden" => patch.overflow = Some(Overflow::Hidden),
    "overflow-x-scroll" => patch.overflow = Some(Overflow::ScrollX),
    // Vertical scrolling is the common case for the bare form.
    "overflow-scroll" | "overflow-y-scroll" => patch.overflow = Some(Overflow::ScrollY),
    _ => return apply_prefixed_token(patch, token),
  }
  true
}

fn apply_prefixed_token(patch: &mut StylePatch, token: &str) -> bool {
  let Some((prefix, value)) = token.split_once('-') else {
    return false;
  };
  match prefix {
    "w" => match parse_size_spec(value) {
      Some(spec) => patch.width = Some(spec),
      None => return false,
    },
    "h" => match parse_size_spec(value) {
      Some(spec) => patch.height = Some(spec),
      None => return false,
    },
    "basis" => match parse_basis(value) {
      Some(basis) => patch.basis = Some(basis),
      None => return false,
    },
    "grow" => match parse_non_negative(value) {
      Some(factor) => patch.grow = Some(factor),
      None => return false,
    },
    "shrink" => match parse_non_negative(value) {
      Some(factor) => patch.shrink = Some(factor),
      None => return false,
    },
    "order" => match value.parse::<i32>() {
      Ok(order) => patch.order = Some(order),
      Err(_) => return false,
    },
    "items" => match parse_align_items(value) {
      Some(align) => patch.align_items = Some(align),
      None => return false,
    },
    "self" => match parse_align_self(value) {
      Some(align) => patch.align_self = Some(align),
      None => return false,
    },
    "justify" => match parse_justify(value) {
      Some(justify) => patch.justify_content = Some(justify),
      None => return false,
    },
    "top" => match parse_non_negative(value) {
      Some(px) => patch.inset_top = Some(px),
      None => return false,
    },
    "right" => match parse_non_negative(value) {
      Some(px) => patch.inset_right = Some(px),
      None => return false,
    },
    "bottom" => match parse_non_negative(value) {
      Some(px) => patch.inset_bottom = Some(px),
      None => return false,
    },
    "left" => match parse_non_negative(value) {
      Some(px) => patch.inset_left = Some(px),
      None => return false,
    },
    "inset" => match parse_non_negative(value) {
      Some(px) => {
        patch.inset_top = Some(px);
        patch.inset_right = Some(px);
        patch.inset_bottom = Some(px);
        patch.inset_left = Some(px);
      }
      None => return false,
    },
    "gap" => match parse_non_negative(value) {
      Some(px) => patch.gap = Some(px),
      None => return false,
    },
    "p" => match parse_non_negative(value) {
      Some(px) => {
        patch.padding_top = Some(px);
        patch.padding_right = Some(px);
        patch.padding_bottom = Some(px);
        patch.padding_left = Some(px);
      }
      None => return false,
    },
    "px" => match parse_non_negative(value) {
      Some(px) => {
        patch.padding_left = Some(px);
        patch.padding_right = Some(px);
      }
      None => return false,
    },
    "py" => match parse_non_negative(value) {
      Some(px) => {
        patch.padding_top = Some(px);
        patch.padding_bottom = Some(px);
      }
      None => return false,
    },
    "pt" => match parse_non_negative(value) {
      Some(px) => patch.padding_top = Some(px),
      None => return false,
    },
    "pr" => match parse_non_negative(value) {
      Some(px) => patch.padding_right = Some(px),
      None => return false,
    },
    "pb" => match parse_non_negative(value) {
      Some(px) => patch.padding_bottom = Some(px),
      None => return false,
    },
    "pl" => match parse_non_negative(value) {
      Some(px) => patch.padding_left = Some(px),
      None => return false,
    },
    _ => return false,
  }
  true
}

/// `full`, `auto`, `n/d`, or a bare pixel count
fn parse_size_spec(value: &str) -> Option<SizeSpec> {
  match value {
    "full" => Some(SizeSpec::Full),
    "auto" => Some(SizeSpec::Auto),
    _ => {
      if let Some((num, den)) = parse_fraction(value) {
        Some(SizeSpec::Fraction(num, den))
      } else {
        parse_non_negative(value).map(SizeSpec::Px)
      }
    }
  }
}

/// `0`, `auto`, `full`, `n/d`, or a bare pixel count
fn parse_basis(value: &str) -> Option<FlexBasis> {
  match value {
    "auto" => Some(FlexBasis::Auto),
    "full" => Some(FlexBasis::Full),
    _ => {
      if let Some((num, den)) = parse_fraction(value) {
        Some(FlexBasis::Fraction(num, den))
      } else {
        parse_non_negative(value).map(FlexBasis::Px)
      }
    }
  }
}

fn parse_align_items(value: &str) -> Option<AlignItems> {
  match value {
    "start" => Some(AlignItems::Start),
    "center" => Some(AlignItems::Center),
    "end" => Some(AlignItems::End),
    "stretch" => Some(AlignItems::Stretch),
    _ => None,
  }
}

fn parse_align_self(value: &str) -> Option<AlignSelf> {
  match value {
    "auto" => Some(AlignSelf::Auto),
    "start" => Some(AlignSelf::Start),
    "center" => Some(AlignSelf::Center),
    "end" => Some(AlignSelf::End),
    "stretch" => Some(AlignSelf::Stretch),
    _ => None,
  }
}

fn parse_justify(value: &str) -> Option<JustifyContent> {
  match value {
    "start" => Some(JustifyContent::Start),
    "center" => Some(JustifyContent::Center),
    "end" => Some(JustifyContent::End),
    "between" => Some(JustifyContent::SpaceBetween),
    "around" => Some(JustifyContent::SpaceAround),
    "evenly" => Some(JustifyContent::SpaceEvenly),
    _ => None,
  }
}

/// `n/d` with a non-zero denominator
fn parse_fraction(value: &str) -> Option<(u32, u32)> {
  let (num, den) = value.split_once('/')?;
  let num = num.parse::<u32>().ok()?;
  let den = den.parse::<u32>().ok()?;
  if den == 0 {
    return None;
  }
  Some((num, den))
}

/// A non-negative pixel count (`12`, `0.5`)
fn parse_non_negative(value: &str) -> Option<f32> {
  let parsed = value.parse::<f32>().ok()?;
  if !parsed.is_finite() || parsed < 0.0 {
    return None;
  }
  Some(parsed)
}
