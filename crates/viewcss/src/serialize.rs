//! Reading an element's visual state back as CSS.
//!
//! The output is the declaration set a stylesheet rule would need to
//! reproduce the element's current look. Neutral values are omitted: unset
//! colors, a shadow with zero opacity, a zero radius, an opacity of exactly 1.

use crate::element::Element;
use crate::style::DeclarationSet;
use crate::text::TEXT_SHADOW_BASE;

/// `<base>-shadow` and `<base>-shadow-opacity` for the element's shadow layer.
pub fn shadow_css<E: Element + ?Sized>(element: &E, base: &str) -> DeclarationSet {
    element
        .shadow()
        .map(|layer| layer.to_config().to_declarations(base))
        .unwrap_or_default()
}

/// `color` and `background-color`, where set.
pub fn color_css<E: Element + ?Sized>(element: &E) -> DeclarationSet {
    let mut css = DeclarationSet::new();
    if let Some(color) = element.foreground() {
        css.insert("color", color.to_css());
    }
    if let Some(color) = element.background() {
        css.insert("background-color", color.to_css());
    }
    css
}

/// Every property the element exposes.
pub fn element_css<E: Element + ?Sized>(element: &E) -> DeclarationSet {
    let mut css = color_css(element);
    css.merge(&shadow_css(element, TEXT_SHADOW_BASE));
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Capabilities, ShadowLayer, ViewElement};
    use crate::style::{Color, Offset};

    fn shadowed(opacity: f64) -> ViewElement {
        let mut element = ViewElement::label("label");
        *element.shadow_layer_mut() = ShadowLayer {
            offset: Offset::new(2.0, 3.0),
            radius: 5.0,
            color: Some(Color::rgb(0, 0, 255)),
            opacity,
        };
        element
    }

    fn decls(pairs: &[(&str, &str)]) -> DeclarationSet {
        DeclarationSet::from_pairs(pairs.iter().copied())
    }

    // =========================================================================
    // Shadow
    // =========================================================================

    #[test]
    fn test_shadow_with_opacity() {
        assert_eq!(
            shadow_css(&shadowed(0.6), "text"),
            decls(&[
                ("text-shadow", "2px 3px 5px #0000FFFF"),
                ("text-shadow-opacity", "0.6")
            ])
        );
    }

    #[test]
    fn test_shadow_full_opacity_omits_opacity() {
        assert_eq!(
            shadow_css(&shadowed(1.0), "text"),
            decls(&[("text-shadow", "2px 3px 5px #0000FFFF")])
        );
    }

    #[test]
    fn test_shadow_zero_opacity_is_empty() {
        assert!(shadow_css(&shadowed(0.0), "text").is_empty());
    }

    #[test]
    fn test_shadow_without_color() {
        let mut element = shadowed(0.6);
        element.shadow_layer_mut().color = None;
        assert_eq!(
            shadow_css(&element, "text").get("text-shadow"),
            Some("2px 3px 5px")
        );
    }

    #[test]
    fn test_shadow_zero_radius() {
        let mut element = shadowed(0.6);
        element.shadow_layer_mut().radius = 0.0;
        assert_eq!(
            shadow_css(&element, "text").get("text-shadow"),
            Some("2px 3px #0000FFFF")
        );
    }

    #[test]
    fn test_shadow_empty_base() {
        let css = shadow_css(&shadowed(0.6), "");
        assert!(css.contains_key("shadow"));
        assert!(css.contains_key("shadow-opacity"));
    }

    #[test]
    fn test_no_shadow_capability() {
        let element = ViewElement::new("text", Capabilities::none());
        assert!(shadow_css(&element, "text").is_empty());
    }

    // =========================================================================
    // Colors and full element
    // =========================================================================

    #[test]
    fn test_color_css() {
        let mut element = ViewElement::label("label");
        assert!(color_css(&element).is_empty());

        element.set_foreground(Color::rgb(0, 255, 0));
        element.set_background(Color::rgb(255, 0, 0));
        assert_eq!(
            color_css(&element),
            decls(&[("color", "#00FF00FF"), ("background-color", "#FF0000FF")])
        );
    }

    #[test]
    fn test_element_css() {
        let mut element = shadowed(0.6);
        element.set_foreground(Color::rgba(0, 255, 0, 128));
        assert_eq!(
            element_css(&element),
            decls(&[
                ("color", "#00FF0080"),
                ("text-shadow", "2px 3px 5px #0000FFFF"),
                ("text-shadow-opacity", "0.6")
            ])
        );
    }
}
