//! Applying resolved styles to elements.
//!
//! ```rust
//! use viewcss::{apply_style, css_text, set_css_text, Element, DeclarationSet, StyleSheet, ViewElement};
//!
//! let sheet = StyleSheet::from_rules([
//!     ("label.title", DeclarationSet::from_pairs([("color", "red")])),
//! ]);
//!
//! let mut title = ViewElement::label("label");
//! apply_style(&mut title, "title", &sheet);
//! assert_eq!(title.foreground().map(|c| c.to_css()), Some("#FF0000FF".to_string()));
//!
//! set_css_text(&mut title, "<span class=\"none\">Hello</span>", &sheet);
//! assert_eq!(css_text(&title).as_deref(), Some("Hello"));
//! ```

use crate::element::Element;
use crate::style::{Color, DeclarationSet, ShadowConfig};
use crate::stylesheet::{shared_table, StyleSheet};
use crate::text::{render, RichText, TEXT_SHADOW_BASE};

/// Resolves the element's own declarations against `sheet`.
pub fn resolve_element<E: Element + ?Sized>(element: &E, sheet: &StyleSheet) -> DeclarationSet {
    sheet.resolve(element.type_name(), element.classes())
}

/// Assigns `class` to the element and applies its resolved style.
///
/// Returns the declarations that were resolved.
pub fn apply_style<E: Element + ?Sized>(
    element: &mut E,
    class: &str,
    sheet: &StyleSheet,
) -> DeclarationSet {
    element.add_class(class);
    let css = resolve_element(element, sheet);
    apply_declarations(element, &css);
    css
}

/// [`apply_style`] against the process-wide table.
pub fn css<E: Element + ?Sized>(element: &mut E, class: &str) -> DeclarationSet {
    apply_style(element, class, &shared_table().snapshot())
}

/// Writes the decodable properties of `css` through the element's accessors.
///
/// Handles `color`, `background-color` and `text-shadow` with its opacity.
/// Properties that fail to decode are left as they were.
pub fn apply_declarations<E: Element + ?Sized>(element: &mut E, css: &DeclarationSet) {
    let capabilities = element.capabilities();

    if capabilities.foreground {
        if let Some(color) = decode_color(css, "color") {
            element.set_foreground(color);
        }
    }
    if capabilities.background {
        if let Some(color) = decode_color(css, "background-color") {
            element.set_background(color);
        }
    }
    if capabilities.shadow {
        let shadow = ShadowConfig::from_declarations(css, TEXT_SHADOW_BASE);
        if shadow.offset.is_some() {
            element.set_shadow(&shadow);
        }
    }
}

fn decode_color(css: &DeclarationSet, key: &str) -> Option<Color> {
    let raw = css.get(key)?;
    match Color::parse(raw) {
        Ok(color) => Some(color),
        Err(err) => {
            log::warn!("dropping {}: {}", key, err);
            None
        }
    }
}

/// Renders marked-up `text` in the element's style, without storing it.
pub fn css_text_for<E: Element + ?Sized>(element: &E, text: &str, sheet: &StyleSheet) -> RichText {
    let base = resolve_element(element, sheet);
    render(text, &base, sheet, element.capabilities())
}

/// Renders marked-up `text` in the element's style and stores it on the
/// element.
pub fn set_css_text<E: Element + ?Sized>(element: &mut E, text: &str, sheet: &StyleSheet) {
    let rich = css_text_for(element, text, sheet);
    element.set_rich_text(rich);
}

/// The element's current text, markup stripped.
pub fn css_text<E: Element + ?Sized>(element: &E) -> Option<String> {
    element.rich_text().map(|rich| rich.text().to_string())
}
