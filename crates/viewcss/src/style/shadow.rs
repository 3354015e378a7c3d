//! The shadow shorthand: `<h> <v> [radius] [color]` plus a companion opacity.
//!
//! A shadow is declared under `<base>-shadow` with its opacity under
//! `<base>-shadow-opacity`, e.g. `text-shadow` / `text-shadow-opacity`. An
//! empty base gives plain `shadow` / `shadow-opacity`.
//!
//! # Decoding
//!
//! Tokens are consumed left to right by a small state machine:
//!
//! | State | Token is a length | Otherwise |
//! |-------|-------------------|-----------|
//! | `AwaitH` | h offset → `AwaitV` | reject shorthand |
//! | `AwaitV` | v offset → `AwaitRadiusOrColor` | reject shorthand |
//! | `AwaitRadiusOrColor` | radius → `AwaitColor` | try as color → `Done` |
//! | `AwaitColor` | try as color → `Done` | try as color → `Done` |
//!
//! Ending in `AwaitH` or `AwaitV` rejects the whole shorthand: a lone h offset
//! is not a shadow. A color that fails to parse is dropped on its own.
//!
//! # Encoding
//!
//! A fully transparent shadow is no shadow, so opacity `0` emits nothing.
//! Otherwise the shorthand omits a zero radius and a missing color, and the
//! opacity key is only written when it differs from `1`.
//!
//! ```rust
//! use viewcss::style::{DeclarationSet, ShadowConfig};
//!
//! let css = DeclarationSet::from_pairs([("text-shadow", "20px 40px blue")]);
//! let shadow = ShadowConfig::from_declarations(&css, "text");
//! assert_eq!(shadow.radius, None);
//! assert_eq!(shadow.opacity, Some(1.0));
//!
//! let back = shadow.to_declarations("text");
//! assert_eq!(back.get("text-shadow"), Some("20px 40px #0000FFFF"));
//! assert_eq!(back.get("text-shadow-opacity"), None);
//! ```

use super::color::Color;
use super::declarations::DeclarationSet;
use super::value::{format_number, format_pixels, parse_opacity, parse_pixels};

/// Shadow offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub width: f64,
    pub height: f64,
}

impl Offset {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A decoded shadow.
///
/// `offset` is set only when both h and v offsets were parsed; `opacity` is
/// only meaningful alongside an offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShadowConfig {
    pub offset: Option<Offset>,
    pub radius: Option<f64>,
    pub color: Option<Color>,
    pub opacity: Option<f64>,
}

/// Key of the shorthand property for `base`.
pub fn shadow_key(base: &str) -> String {
    if base.is_empty() {
        "shadow".to_string()
    } else {
        format!("{}-shadow", base)
    }
}

/// Key of the companion opacity property for `base`.
pub fn opacity_key(base: &str) -> String {
    format!("{}-opacity", shadow_key(base))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    AwaitH,
    AwaitV { h: f64 },
    AwaitRadiusOrColor,
    AwaitColor,
    Done,
}

impl ShadowConfig {
    /// Parses the bare shorthand value, without opacity.
    pub fn parse_shorthand(value: &str) -> ShadowConfig {
        let mut config = ShadowConfig::default();
        let mut state = State::AwaitH;

        for token in value.split_whitespace() {
            state = match state {
                State::AwaitH => match parse_pixels(token) {
                    Ok(h) => State::AwaitV { h },
                    Err(_) => break,
                },
                State::AwaitV { h } => match parse_pixels(token) {
                    Ok(v) => {
                        config.offset = Some(Offset::new(h, v));
                        State::AwaitRadiusOrColor
                    }
                    Err(_) => break,
                },
                State::AwaitRadiusOrColor => match parse_pixels(token) {
                    Ok(radius) => {
                        config.radius = Some(radius);
                        State::AwaitColor
                    }
                    Err(_) => config.read_color(token),
                },
                State::AwaitColor => config.read_color(token),
                State::Done => {
                    log::debug!("ignoring trailing shadow token '{}'", token);
                    State::Done
                }
            };
        }

        if config.offset.is_none() {
            if !value.trim().is_empty() {
                log::warn!("shadow '{}' needs both h and v offsets; ignored", value);
            }
            return ShadowConfig::default();
        }
        config
    }

    fn read_color(&mut self, token: &str) -> State {
        match Color::parse(token) {
            Ok(color) => self.color = Some(color),
            Err(err) => log::warn!("dropping shadow color: {}", err),
        }
        State::Done
    }

    /// Decodes `<base>-shadow` and `<base>-shadow-opacity` from `css`.
    ///
    /// Opacity defaults to `1.0` when an offset is present and stays `None`
    /// without one, whatever the opacity property says.
    pub fn from_declarations(css: &DeclarationSet, base: &str) -> ShadowConfig {
        let mut config = css
            .get(&shadow_key(base))
            .map(Self::parse_shorthand)
            .unwrap_or_default();

        if config.offset.is_some() {
            config.opacity = Some(Self::opacity_from(css, base).unwrap_or(1.0));
        }
        config
    }

    /// Reads only the companion opacity property.
    pub fn set_opacity(&mut self, css: &DeclarationSet, base: &str) {
        self.opacity = Self::opacity_from(css, base);
    }

    fn opacity_from(css: &DeclarationSet, base: &str) -> Option<f64> {
        let raw = css.get(&opacity_key(base))?;
        match parse_opacity(raw) {
            Ok(opacity) => Some(opacity),
            Err(err) => {
                log::warn!("dropping {}: {}", opacity_key(base), err);
                None
            }
        }
    }

    /// Encodes this shadow as `<base>-shadow` / `<base>-shadow-opacity`.
    ///
    /// Returns an empty set when there is no offset or the opacity is `0`.
    pub fn to_declarations(&self, base: &str) -> DeclarationSet {
        let mut css = DeclarationSet::new();
        let Some(offset) = self.offset else {
            return css;
        };
        if self.opacity == Some(0.0) {
            return css;
        }

        let mut shorthand = format!(
            "{} {}",
            format_pixels(offset.width),
            format_pixels(offset.height)
        );
        if let Some(radius) = self.radius.filter(|r| *r != 0.0) {
            shorthand.push(' ');
            shorthand.push_str(&format_pixels(radius));
        }
        if let Some(color) = self.color {
            shorthand.push(' ');
            shorthand.push_str(&color.to_css());
        }
        css.insert(shadow_key(base), shorthand);

        if let Some(opacity) = self.opacity.filter(|o| *o != 1.0) {
            css.insert(opacity_key(base), format_number(opacity));
        }
        css
    }

    pub fn is_visible(&self) -> bool {
        self.offset.is_some() && self.opacity != Some(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn text(shadow: &str) -> ShadowConfig {
        ShadowConfig::from_declarations(&DeclarationSet::from_pairs([("text-shadow", shadow)]), "text")
    }

    fn blue() -> Color {
        Color::parse("blue").unwrap()
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    #[test]
    fn test_empty_shorthand_ignored() {
        assert_eq!(text(""), ShadowConfig::default());
    }

    #[test]
    fn test_lone_h_offset_ignored() {
        assert_eq!(text("20px"), ShadowConfig::default());
    }

    #[test]
    fn test_non_length_head_ignored() {
        assert_eq!(text("blue 20px 40px"), ShadowConfig::default());
        assert_eq!(text("20px blue"), ShadowConfig::default());
    }

    #[test]
    fn test_offset_defaults_opacity() {
        let shadow = text("20px 40px");
        assert_eq!(shadow.offset, Some(Offset::new(20.0, 40.0)));
        assert_eq!(shadow.radius, None);
        assert_eq!(shadow.color, None);
        assert_eq!(shadow.opacity, Some(1.0));
    }

    #[test]
    fn test_radius() {
        let shadow = text("20px 40px 5px");
        assert_eq!(shadow.radius, Some(5.0));
        assert_eq!(shadow.color, None);
    }

    #[test]
    fn test_radius_and_color() {
        let shadow = text("20px 40px 5px #0000FFFF");
        assert_eq!(shadow.radius, Some(5.0));
        assert_eq!(shadow.color, Some(blue()));
    }

    #[test]
    fn test_skips_radius_for_color() {
        let shadow = text("20px 40px #0000FFFF");
        assert_eq!(shadow.offset, Some(Offset::new(20.0, 40.0)));
        assert_eq!(shadow.radius, None);
        assert_eq!(shadow.color, Some(blue()));
        assert_eq!(shadow.opacity, Some(1.0));
    }

    #[test]
    fn test_bad_color_dropped_alone() {
        let shadow = text("20px 40px 5px notacolor");
        assert_eq!(shadow.offset, Some(Offset::new(20.0, 40.0)));
        assert_eq!(shadow.radius, Some(5.0));
        assert_eq!(shadow.color, None);
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        let shadow = text("1px 2px 3px red 4px");
        assert_eq!(shadow.color, Some(Color::rgb(255, 0, 0)));
        assert_eq!(shadow.radius, Some(3.0));
    }

    #[test]
    fn test_explicit_opacity() {
        let css = DeclarationSet::from_pairs([
            ("text-shadow", "20px 40px #0000FFFF"),
            ("text-shadow-opacity", "0.5"),
        ]);
        let shadow = ShadowConfig::from_declarations(&css, "text");
        assert_eq!(shadow.opacity, Some(0.5));
    }

    #[test]
    fn test_opacity_without_offset_ignored() {
        let css = DeclarationSet::from_pairs([("text-shadow-opacity", "0.5")]);
        assert_eq!(ShadowConfig::from_declarations(&css, "text").opacity, None);
    }

    #[test]
    fn test_invalid_opacity_falls_back_to_default() {
        let css = DeclarationSet::from_pairs([
            ("text-shadow", "1px 1px"),
            ("text-shadow-opacity", "lots"),
        ]);
        assert_eq!(ShadowConfig::from_declarations(&css, "text").opacity, Some(1.0));
    }

    #[test]
    fn test_set_opacity_without_base() {
        let mut shadow = ShadowConfig::default();
        shadow.set_opacity(&DeclarationSet::from_pairs([("shadow-opacity", "0.25")]), "");
        assert_eq!(shadow.opacity, Some(0.25));

        shadow.set_opacity(&DeclarationSet::from_pairs([("shadow-opacity", "x")]), "");
        assert_eq!(shadow.opacity, None);
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    fn sample() -> ShadowConfig {
        ShadowConfig {
            offset: Some(Offset::new(2.0, 3.0)),
            radius: Some(5.0),
            color: Some(blue()),
            opacity: Some(0.6),
        }
    }

    #[test]
    fn test_to_declarations_full() {
        let css = sample().to_declarations("text");
        assert_eq!(css.get("text-shadow"), Some("2px 3px 5px #0000FFFF"));
        assert_eq!(css.get("text-shadow-opacity"), Some("0.6"));
    }

    #[test]
    fn test_to_declarations_skips_opaque() {
        let css = ShadowConfig {
            opacity: Some(1.0),
            ..sample()
        }
        .to_declarations("text");
        assert_eq!(css.get("text-shadow"), Some("2px 3px 5px #0000FFFF"));
        assert!(!css.contains_key("text-shadow-opacity"));
    }

    #[test]
    fn test_to_declarations_transparent_is_empty() {
        let css = ShadowConfig {
            opacity: Some(0.0),
            ..sample()
        }
        .to_declarations("text");
        assert!(css.is_empty());
    }

    #[test]
    fn test_to_declarations_skips_missing_color() {
        let css = ShadowConfig {
            color: None,
            ..sample()
        }
        .to_declarations("text");
        assert_eq!(css.get("text-shadow"), Some("2px 3px 5px"));
        assert_eq!(css.get("text-shadow-opacity"), Some("0.6"));
    }

    #[test]
    fn test_to_declarations_skips_zero_radius() {
        let css = ShadowConfig {
            radius: Some(0.0),
            ..sample()
        }
        .to_declarations("text");
        assert_eq!(css.get("text-shadow"), Some("2px 3px #0000FFFF"));
    }

    #[test]
    fn test_keys_for_empty_base() {
        assert_eq!(shadow_key(""), "shadow");
        assert_eq!(opacity_key(""), "shadow-opacity");
        assert_eq!(opacity_key("layer"), "layer-shadow-opacity");
    }

    proptest! {
        #[test]
        fn declarations_roundtrip(
            h in -50i32..50,
            v in -50i32..50,
            radius in proptest::option::of(1u32..40),
            color in proptest::option::of(any::<(u8, u8, u8, u8)>()),
            opacity in 1u32..=100,
        ) {
            let config = ShadowConfig {
                offset: Some(Offset::new(f64::from(h), f64::from(v))),
                radius: radius.map(f64::from),
                color: color.map(|(r, g, b, a)| Color::rgba(r, g, b, a)),
                opacity: Some(f64::from(opacity) / 100.0),
            };
            let decoded = ShadowConfig::from_declarations(&config.to_declarations("text"), "text");
            prop_assert_eq!(decoded, config);
        }
    }
}
