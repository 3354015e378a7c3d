//! Declaration values and their codecs.
//!
//! Everything here is a pure function over strings: a declaration set maps
//! property names to raw values, and each codec decodes (or encodes) one
//! family of values.
//!
//! - [`color`]: named and hex colors, canonical `#RRGGBBAA` output
//! - [`value`]: numbers, pixel lengths, opacities
//! - [`shadow`]: the `<h> <v> [radius] [color]` shorthand and its opacity
//! - [`declarations`]: the ordered [`DeclarationSet`] itself
//! - [`error`]: [`ValueError`] and [`StylesheetError`]

pub mod color;
pub mod declarations;
pub mod error;
pub mod shadow;
pub mod value;

pub use color::Color;
pub use declarations::DeclarationSet;
pub use error::{StylesheetError, ValueError};
pub use shadow::{opacity_key, shadow_key, Offset, ShadowConfig};
pub use value::{format_number, format_pixels, parse_number, parse_opacity, parse_pixels};
