//! The element interface between the style engine and a host UI toolkit.
//!
//! An [`Element`] names itself (type name plus ordered classes), declares
//! which visual attributes it supports through [`Capabilities`], and exposes
//! accessors for them. Styling code never switches on concrete widget
//! types: it asks for capabilities and writes through the accessors, which
//! do nothing for attributes an element does not have.
//!
//! | Kind | foreground | background | shadow | link |
//! |------|:---:|:---:|:---:|:---:|
//! | [`Capabilities::label`] | ✓ | ✓ | ✓ | ✓ |
//! | [`Capabilities::button`] | ✓ | | ✓ | ✓ |
//! | [`Capabilities::view`] | | ✓ | ✓ | |
//!
//! [`ViewElement`] is a headless implementation that stores every attribute
//! in memory. Hosts wrap their own widgets; tests use `ViewElement`.

use crate::style::{Color, Offset, ShadowConfig};
use crate::text::RichText;

/// Visual attributes an element supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub foreground: bool,
    pub background: bool,
    pub shadow: bool,
    pub link: bool,
}

impl Capabilities {
    /// Text display: colors, shadow and links.
    pub const fn label() -> Self {
        Self {
            foreground: true,
            background: true,
            shadow: true,
            link: true,
        }
    }

    /// Buttons draw their own background, so only the title colors apply.
    pub const fn button() -> Self {
        Self {
            foreground: true,
            background: false,
            shadow: true,
            link: true,
        }
    }

    /// A plain container without text.
    pub const fn view() -> Self {
        Self {
            foreground: false,
            background: true,
            shadow: true,
            link: false,
        }
    }

    pub const fn all() -> Self {
        Self::label()
    }

    pub const fn none() -> Self {
        Self {
            foreground: false,
            background: false,
            shadow: false,
            link: false,
        }
    }
}

/// Shadow state as a rendering layer holds it.
///
/// Unlike [`ShadowConfig`], every field except the color always has a value.
/// The default layer has zero opacity, which means no visible shadow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShadowLayer {
    pub offset: Offset,
    pub radius: f64,
    pub color: Option<Color>,
    pub opacity: f64,
}

impl ShadowLayer {
    /// Writes the fields `config` defines, leaving the others untouched.
    pub fn apply(&mut self, config: &ShadowConfig) {
        if let Some(offset) = config.offset {
            self.offset = offset;
        }
        if let Some(radius) = config.radius {
            self.radius = radius;
        }
        if let Some(color) = config.color {
            self.color = Some(color);
        }
        if let Some(opacity) = config.opacity {
            self.opacity = opacity;
        }
    }

    /// The layer as a fully populated [`ShadowConfig`].
    pub fn to_config(&self) -> ShadowConfig {
        ShadowConfig {
            offset: Some(self.offset),
            radius: Some(self.radius),
            color: self.color,
            opacity: Some(self.opacity),
        }
    }
}

/// A styleable UI element.
///
/// Only [`type_name`](Element::type_name), [`classes`](Element::classes),
/// [`add_class`](Element::add_class) and
/// [`capabilities`](Element::capabilities) are required. Accessor defaults
/// report nothing and ignore writes.
pub trait Element {
    /// Type name used in `type.class` selectors.
    fn type_name(&self) -> &str;

    /// Assigned classes, in assignment order.
    fn classes(&self) -> &[String];

    /// Appends a class; a class already present is not added twice.
    fn add_class(&mut self, class: &str);

    fn capabilities(&self) -> Capabilities;

    fn foreground(&self) -> Option<Color> {
        None
    }

    fn set_foreground(&mut self, _color: Color) {}

    fn background(&self) -> Option<Color> {
        None
    }

    fn set_background(&mut self, _color: Color) {}

    fn shadow(&self) -> Option<ShadowLayer> {
        None
    }

    fn set_shadow(&mut self, _config: &ShadowConfig) {}

    /// Link target of the element as a whole. Links inside marked-up text
    /// live on the runs of [`rich_text`](Element::rich_text) instead.
    fn link(&self) -> Option<&str> {
        None
    }

    fn set_link(&mut self, _target: &str) {}

    fn rich_text(&self) -> Option<&RichText> {
        None
    }

    fn set_rich_text(&mut self, _text: RichText) {}
}

/// In-memory [`Element`] for headless hosts and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewElement {
    type_name: String,
    classes: Vec<String>,
    capabilities: Capabilities,
    foreground: Option<Color>,
    background: Option<Color>,
    shadow: ShadowLayer,
    link: Option<String>,
    rich_text: Option<RichText>,
}

impl ViewElement {
    pub fn new(type_name: impl Into<String>, capabilities: Capabilities) -> Self {
        Self {
            type_name: type_name.into(),
            classes: Vec::new(),
            capabilities,
            foreground: None,
            background: None,
            shadow: ShadowLayer::default(),
            link: None,
            rich_text: None,
        }
    }

    pub fn label(type_name: impl Into<String>) -> Self {
        Self::new(type_name, Capabilities::label())
    }

    pub fn button(type_name: impl Into<String>) -> Self {
        Self::new(type_name, Capabilities::button())
    }

    /// Builder form of [`Element::add_class`].
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Direct access to the shadow layer, for hosts mirroring a real one.
    pub fn shadow_layer_mut(&mut self) -> &mut ShadowLayer {
        &mut self.shadow
    }
}

impl Element for ViewElement {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn foreground(&self) -> Option<Color> {
        self.foreground.filter(|_| self.capabilities.foreground)
    }

    fn set_foreground(&mut self, color: Color) {
        if self.capabilities.foreground {
            self.foreground = Some(color);
        }
    }

    fn background(&self) -> Option<Color> {
        self.background.filter(|_| self.capabilities.background)
    }

    fn set_background(&mut self, color: Color) {
        if self.capabilities.background {
            self.background = Some(color);
        }
    }

    fn shadow(&self) -> Option<ShadowLayer> {
        self.capabilities.shadow.then_some(self.shadow)
    }

    fn set_shadow(&mut self, config: &ShadowConfig) {
        if self.capabilities.shadow {
            self.shadow.apply(config);
        }
    }

    fn link(&self) -> Option<&str> {
        self.link.as_deref().filter(|_| self.capabilities.link)
    }

    fn set_link(&mut self, target: &str) {
        if self.capabilities.link {
            self.link = Some(target.to_string());
        }
    }

    fn rich_text(&self) -> Option<&RichText> {
        self.rich_text.as_ref()
    }

    fn set_rich_text(&mut self, text: RichText) {
        self.rich_text = Some(text);
    }
}
