//! # ViewCSS - CSS-style Rules for UI Elements
//!
//! `viewcss` styles UI elements from CSS-like rules and renders text with
//! inline `<span>` / `<a>` markup into attributed rich text. It also goes the
//! other way, reading an element's visual state back as CSS declarations.
//!
//! ## Core Concepts
//!
//! - [`StyleSheet`]: selectors (`type.class`, `.class`) mapped to
//!   [`DeclarationSet`]s, loaded from CSS, YAML or JSON
//! - [`StyleTable`]: the active stylesheet, swapped atomically on
//!   [`set_rules`]
//! - [`Element`]: what the engine needs from a UI element, with
//!   [`Capabilities`] saying which attributes it supports
//! - [`text::render`]: marked-up text to [`RichText`] (UTF-16 ranges)
//! - [`element_css`]: element state back to declarations
//! - Value codecs: [`Color`], [`ShadowConfig`], pixel and number parsers
//!
//! ## Quick Start
//!
//! ```rust
//! use viewcss::{apply_style, css_text_for, Element, StyleSheet, ViewElement};
//!
//! let sheet = StyleSheet::from_css(r#"
//!     ns_object.view { background-color: red; color: #00FF00FF; }
//!     .color { color: #0000FFFF; }
//! "#).unwrap();
//!
//! let mut label = ViewElement::label("ns_object");
//! apply_style(&mut label, "view", &sheet);
//! assert_eq!(label.background().map(|c| c.to_css()), Some("#FF0000FF".to_string()));
//!
//! let rich = css_text_for(
//!     &label,
//!     "some <a class=\"color\" href=\"https://www.example.com\">stuff</a>",
//!     &sheet,
//! );
//! assert_eq!(rich.text(), "some stuff");
//!
//! let link = rich.attributes_at(5).unwrap();
//! assert_eq!(link.len(), 3);
//! assert_eq!(link.link.as_deref(), Some("https://www.example.com"));
//! ```
//!
//! ## Degrading, Not Failing
//!
//! Style and text input is loosely structured external content. A value
//! that does not decode is dropped (and logged through the `log` facade)
//! while the rest of the rule still applies; malformed markup is kept as
//! literal text. Only loading a whole stylesheet document returns an error.
//!
//! ## Reverse Serialization
//!
//! ```rust
//! use viewcss::{shadow_css, Color, Offset, ShadowLayer, ViewElement};
//!
//! let mut label = ViewElement::label("label");
//! *label.shadow_layer_mut() = ShadowLayer {
//!     offset: Offset::new(2.0, 3.0),
//!     radius: 5.0,
//!     color: Some(Color::rgb(0, 0, 255)),
//!     opacity: 0.6,
//! };
//!
//! let css = shadow_css(&label, "text");
//! assert_eq!(css.get("text-shadow"), Some("2px 3px 5px #0000FFFF"));
//! assert_eq!(css.get("text-shadow-opacity"), Some("0.6"));
//! ```

pub mod apply;
pub mod element;
pub mod prelude;
pub mod serialize;
pub mod style;
pub mod stylesheet;
pub mod text;

// Value codecs
pub use style::{
    format_number, format_pixels, opacity_key, parse_number, parse_opacity, parse_pixels,
    shadow_key, Color, DeclarationSet, Offset, ShadowConfig, StylesheetError, ValueError,
};

// Stylesheets and resolution
pub use stylesheet::{
    parse_css, parse_json, parse_yaml, set_rules, shared_table, Selector, StyleSheet,
    StyleTable, StylesheetFormat, STYLESHEET_EXTENSIONS,
};

// Elements
pub use element::{Capabilities, Element, ShadowLayer, ViewElement};

// Text
pub use text::{AttributeRange, RichText, TextAttributes, TextRun};

// Application and serialization
pub use apply::{
    apply_declarations, apply_style, css, css_text, css_text_for, resolve_element, set_css_text,
};
pub use serialize::{color_css, element_css, shadow_css};

// Markup diagnostics
pub use viewcss_markup::{strip_markup, validate_markup, MarkupError, MarkupErrorKind, MarkupErrors};
