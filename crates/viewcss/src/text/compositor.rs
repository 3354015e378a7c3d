//! Runs to rich text.
//!
//! The compositor concatenates run texts and gives each run one
//! [`AttributeRange`], with offsets in UTF-16 code units as host text
//! surfaces index them. Attributes are decoded from the run's declarations
//! and filtered by the element's [`Capabilities`]; anything undecodable is
//! simply absent.

use viewcss_markup::utf16_len;

use super::scanner::TextRun;
use crate::element::Capabilities;
use crate::style::{Color, ShadowConfig};

/// Property base used for text shadows (`text-shadow`).
pub const TEXT_SHADOW_BASE: &str = "text";

/// Decoded visual attributes of one range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextAttributes {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub link: Option<String>,
    pub shadow: Option<ShadowConfig>,
}

impl TextAttributes {
    /// Number of attributes set.
    pub fn len(&self) -> usize {
        usize::from(self.foreground.is_some())
            + usize::from(self.background.is_some())
            + usize::from(self.link.is_some())
            + usize::from(self.shadow.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decodes the attributes of `run` that `capabilities` allows.
    pub fn from_run(run: &TextRun, capabilities: Capabilities) -> Self {
        let css = &run.declarations;
        let decode_color = |key: &str| {
            let raw = css.get(key)?;
            Color::parse(raw)
                .map_err(|err| log::warn!("dropping {}: {}", key, err))
                .ok()
        };

        let mut attributes = TextAttributes::default();
        if capabilities.foreground {
            attributes.foreground = decode_color("color");
        }
        if capabilities.background {
            attributes.background = decode_color("background-color");
        }
        if capabilities.link {
            attributes.link = run.link.clone();
        }
        if capabilities.shadow {
            let shadow = ShadowConfig::from_declarations(css, TEXT_SHADOW_BASE);
            attributes.shadow = shadow.is_visible().then_some(shadow);
        }
        attributes
    }
}

/// One styled range, in UTF-16 code units.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRange {
    pub start: usize,
    pub len: usize,
    pub attributes: TextAttributes,
}

impl AttributeRange {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end()
    }
}

/// Plain text plus non-overlapping attribute ranges covering all of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichText {
    text: String,
    ranges: Vec<AttributeRange>,
}

impl RichText {
    /// Text without any attributes.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = utf16_len(&text);
        let ranges = if len == 0 {
            Vec::new()
        } else {
            vec![AttributeRange {
                start: 0,
                len,
                attributes: TextAttributes::default(),
            }]
        };
        Self { text, ranges }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn ranges(&self) -> &[AttributeRange] {
        &self.ranges
    }

    /// Length in UTF-16 code units.
    pub fn utf16_len(&self) -> usize {
        self.ranges.last().map_or(0, AttributeRange::end)
    }

    /// Attributes at a UTF-16 offset, or `None` past the end.
    pub fn attributes_at(&self, offset: usize) -> Option<&TextAttributes> {
        let index = self.ranges.partition_point(|range| range.end() <= offset);
        self.ranges
            .get(index)
            .filter(|range| range.contains(offset))
            .map(|range| &range.attributes)
    }
}

/// Builds rich text from scanned runs.
pub fn compose(runs: &[TextRun], capabilities: Capabilities) -> RichText {
    let mut text = String::new();
    let mut ranges = Vec::with_capacity(runs.len());
    let mut offset = 0;

    for run in runs {
        let len = utf16_len(&run.text);
        if len == 0 {
            continue;
        }
        text.push_str(&run.text);
        ranges.push(AttributeRange {
            start: offset,
            len,
            attributes: TextAttributes::from_run(run, capabilities),
        });
        offset += len;
    }

    RichText { text, ranges }
}
