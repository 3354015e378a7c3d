//! Marked-up text rendering.
//!
//! Two stages, usable separately:
//!
//! 1. [`scan`] turns text with `<span class=...>` / `<a class=... href=...>`
//!    markup into [`TextRun`]s, each with resolved declarations.
//! 2. [`compose`] turns the runs into [`RichText`]: plain text plus
//!    attribute ranges in UTF-16 code units.
//!
//! [`render`] runs both.
//!
//! ```rust
//! use viewcss::{Capabilities, DeclarationSet, StyleSheet};
//! use viewcss::text::render;
//!
//! let sheet = StyleSheet::from_rules([
//!     (".color", DeclarationSet::from_pairs([("color", "#0000FFFF")])),
//! ]);
//! let base = DeclarationSet::from_pairs([("color", "#00FF00FF")]);
//!
//! let rich = render("some <span class=\"color\">stuff</span>", &base, &sheet, Capabilities::label());
//! assert_eq!(rich.text(), "some stuff");
//! assert_eq!(rich.attributes_at(5).and_then(|a| a.foreground).map(|c| c.to_css()),
//!            Some("#0000FFFF".to_string()));
//! ```

mod compositor;
mod scanner;

pub use compositor::{compose, AttributeRange, RichText, TextAttributes, TEXT_SHADOW_BASE};
pub use scanner::{scan, TextRun};

use crate::element::Capabilities;
use crate::style::DeclarationSet;
use crate::stylesheet::StyleSheet;

/// Scans and composes in one step.
pub fn render(
    text: &str,
    base: &DeclarationSet,
    sheet: &StyleSheet,
    capabilities: Capabilities,
) -> RichText {
    compose(&scan(text, base, sheet), capabilities)
}
