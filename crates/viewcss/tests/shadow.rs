//! Integration tests for shadows: stylesheet → element → CSS and back.

use proptest::prelude::*;
use viewcss::{
    apply_style, element_css, shadow_css, Color, DeclarationSet, Element, Offset, ShadowConfig,
    ShadowLayer, StyleSheet, ViewElement,
};

fn glow_sheet(shadow: &str, opacity: Option<&str>) -> StyleSheet {
    let mut declarations = DeclarationSet::from_pairs([("text-shadow", shadow)]);
    if let Some(opacity) = opacity {
        declarations.insert("text-shadow-opacity", opacity);
    }
    StyleSheet::from_rules([(".glow", declarations)])
}

#[test]
fn stylesheet_shadow_reads_back_identically() {
    let sheet = glow_sheet("2px 3px 5px #0000FFFF", Some("0.6"));
    let mut label = ViewElement::label("label");
    apply_style(&mut label, "glow", &sheet);

    assert_eq!(
        shadow_css(&label, "text"),
        DeclarationSet::from_pairs([
            ("text-shadow", "2px 3px 5px #0000FFFF"),
            ("text-shadow-opacity", "0.6"),
        ])
    );
}

#[test]
fn missing_opacity_defaults_to_opaque() {
    let sheet = glow_sheet("2px 3px blue", None);
    let mut label = ViewElement::label("label");
    apply_style(&mut label, "glow", &sheet);

    assert_eq!(label.shadow().map(|layer| layer.opacity), Some(1.0));
    assert_eq!(
        element_css(&label),
        DeclarationSet::from_pairs([("text-shadow", "2px 3px #0000FFFF")])
    );
}

#[test]
fn incomplete_shadow_is_ignored() {
    let sheet = glow_sheet("20px", Some("0.5"));
    let mut label = ViewElement::label("label");
    apply_style(&mut label, "glow", &sheet);

    assert_eq!(label.shadow(), Some(ShadowLayer::default()));
    assert!(shadow_css(&label, "text").is_empty());
}

#[test]
fn button_shadow_serializes_without_background() {
    let sheet = StyleSheet::from_rules([(
        ".b",
        DeclarationSet::from_pairs([
            ("background-color", "red"),
            ("color", "white"),
            ("text-shadow", "1px 1px"),
        ]),
    )]);
    let mut button = ViewElement::button("button");
    apply_style(&mut button, "b", &sheet);

    assert_eq!(
        element_css(&button),
        DeclarationSet::from_pairs([("color", "#FFFFFFFF"), ("text-shadow", "1px 1px")])
    );
}

fn arb_layer() -> impl Strategy<Value = ShadowLayer> {
    (
        -50i32..50,
        -50i32..50,
        0u32..20,
        proptest::option::of(any::<(u8, u8, u8, u8)>()),
        1u32..=100,
    )
        .prop_map(|(w, h, radius, color, opacity)| ShadowLayer {
            offset: Offset::new(f64::from(w), f64::from(h)),
            radius: f64::from(radius),
            color: color.map(|(r, g, b, a)| Color::rgba(r, g, b, a)),
            opacity: f64::from(opacity) / 100.0,
        })
}

proptest! {
    #[test]
    fn element_shadow_roundtrips_through_css(layer in arb_layer()) {
        let mut source = ViewElement::label("label");
        *source.shadow_layer_mut() = layer;

        let css = shadow_css(&source, "text");
        let decoded = ShadowConfig::from_declarations(&css, "text");

        let mut target = ViewElement::label("label");
        target.set_shadow(&decoded);
        prop_assert_eq!(target.shadow(), Some(layer));
    }
}
