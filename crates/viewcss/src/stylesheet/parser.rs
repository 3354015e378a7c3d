//! Stylesheet sources: YAML, JSON, and format detection by file extension.
//!
//! YAML and JSON documents share one schema, a mapping from selector to a
//! mapping of property names to raw values:
//!
//! ```yaml
//! ns_object.view:
//!   background-color: red
//!   color: "#00FF00FF"
//!
//! .glow:
//!   text-shadow: 2px 3px 5px blue
//!   text-shadow-opacity: 0.6
//! ```
//!
//! Scalar values that YAML would read as numbers or booleans are kept in
//! their textual form. Note that `#` starts a YAML comment, so hex colors
//! must be quoted.

use std::path::Path;

use serde::Deserialize;

use super::css_parser::parse_css;
use super::sheet::StyleSheet;
use crate::style::{DeclarationSet, StylesheetError};

/// Recognized stylesheet file extensions in priority order.
pub const STYLESHEET_EXTENSIONS: &[&str] = &[".css", ".yaml", ".yml", ".json"];

/// Source format of a stylesheet document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylesheetFormat {
    Css,
    Yaml,
    Json,
}

impl StylesheetFormat {
    /// Detects the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "css" => Some(StylesheetFormat::Css),
            "yaml" | "yml" => Some(StylesheetFormat::Yaml),
            "json" => Some(StylesheetFormat::Json),
            _ => None,
        }
    }

    /// Parses `source` in this format.
    pub fn parse(self, source: &str) -> Result<StyleSheet, StylesheetError> {
        match self {
            StylesheetFormat::Css => parse_css(source),
            StylesheetFormat::Yaml => parse_yaml(source),
            StylesheetFormat::Json => parse_json(source),
        }
    }
}

/// Ordered `selector -> declarations` document.
///
/// A sequence of pairs rather than a map keeps document order, which
/// decides the winner when two keys name the same selector.
#[derive(Default)]
struct RuleDocument(Vec<(String, DeclarationSet)>);

impl<'de> Deserialize<'de> for RuleDocument {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> serde::de::Visitor<'de> for DocumentVisitor {
            type Value = RuleDocument;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a mapping of selectors to declarations")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(RuleDocument::default())
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<Self::Value, A::Error> {
                let mut rules = Vec::new();
                while let Some((selector, declarations)) =
                    access.next_entry::<String, Option<DeclarationSet>>()?
                {
                    rules.push((selector, declarations.unwrap_or_default()));
                }
                Ok(RuleDocument(rules))
            }
        }

        deserializer.deserialize_any(DocumentVisitor)
    }
}

/// Parses a YAML stylesheet.
pub fn parse_yaml(yaml: &str) -> Result<StyleSheet, StylesheetError> {
    let document: RuleDocument = serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
        path: None,
        message: e.to_string(),
    })?;
    Ok(StyleSheet::from_rules(document.0))
}

/// Parses a JSON stylesheet.
pub fn parse_json(json: &str) -> Result<StyleSheet, StylesheetError> {
    let document: RuleDocument = serde_json::from_str(json).map_err(|e| StylesheetError::Parse {
        path: None,
        message: e.to_string(),
    })?;
    Ok(StyleSheet::from_rules(document.0))
}

/// Reads and parses a stylesheet file, choosing the parser by extension.
pub fn load_file(path: &Path) -> Result<StyleSheet, StylesheetError> {
    let format = StylesheetFormat::from_path(path).ok_or_else(|| {
        StylesheetError::UnsupportedFormat {
            path: path.to_path_buf(),
        }
    })?;

    let source = std::fs::read_to_string(path).map_err(|e| StylesheetError::Load {
        message: format!("{}: {}", path.display(), e),
    })?;

    let sheet = format.parse(&source).map_err(|e| e.with_path(path))?;
    log::debug!("loaded {} rules from {}", sheet.len(), path.display());
    Ok(sheet.with_source(path))
}
