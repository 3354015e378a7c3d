//! Common imports in one line.
//!
//! ```rust
//! use viewcss::prelude::*;
//!
//! let sheet = StyleSheet::from_rules([
//!     (".title", DeclarationSet::from_pairs([("color", "red")])),
//! ]);
//! let mut label = ViewElement::label("label");
//! apply_style(&mut label, "title", &sheet);
//! assert_eq!(label.foreground(), Some(Color::rgb(255, 0, 0)));
//! ```

pub use crate::apply::{apply_style, css, css_text, css_text_for, set_css_text};
pub use crate::element::{Capabilities, Element, ViewElement};
pub use crate::serialize::element_css;
pub use crate::style::{Color, DeclarationSet, ShadowConfig};
pub use crate::stylesheet::{set_rules, shared_table, StyleSheet};
pub use crate::text::RichText;
