//! Style parsing and resolution
//!
//! Three stages, each pure:
//!
//! 1. [`parse`] tokenizes a utility-class string into an immutable
//!    [`StyleDeclaration`] (once per class string)
//! 2. [`resolve`] cascades the declaration's breakpoint overrides against
//!    the current viewport width into one [`EffectiveStyle`] per node per
//!    layout pass
//! 3. The layout passes read only the effective style

pub mod breakpoints;
pub mod parser;
pub mod types;

pub use breakpoints::resolve;
pub use breakpoints::BreakpointScale;
pub use parser::parse;
pub use parser::parse_cached;
pub use parser::parse_with_scale;
pub use types::EffectiveStyle;
pub use types::StyleDeclaration;
pub use types::StylePatch;
