//! Stylesheets: loading, the selector model, resolution and the active table.
//!
//! A stylesheet maps selectors (`type.class` or `.class`) to declaration
//! sets. It can be built in code, or loaded from CSS, YAML or JSON:
//!
//! ```rust
//! use viewcss::StyleSheet;
//!
//! let sheet = StyleSheet::from_css(r#"
//!     ns_object.view { background-color: red; color: #00FF00FF; }
//!     .color { color: #0000FFFF; }
//! "#).unwrap();
//!
//! let resolved = sheet.resolve("ns_object", &["view", "color"]);
//! assert_eq!(resolved.get("background-color"), Some("red"));
//! assert_eq!(resolved.get("color"), Some("#0000FFFF"));
//! ```
//!
//! See [`sheet`] for the resolution order and [`table`] for the swappable
//! process-wide table.

mod css_parser;
mod parser;
mod selector;
pub mod sheet;
pub mod table;

use std::path::Path;

pub use css_parser::parse_css;
pub use parser::{load_file, parse_json, parse_yaml, StylesheetFormat, STYLESHEET_EXTENSIONS};
pub use selector::Selector;
pub use sheet::StyleSheet;
pub use table::{set_rules, shared_table, StyleTable};

use crate::style::StylesheetError;

impl StyleSheet {
    /// Parses CSS text.
    pub fn from_css(css: &str) -> Result<Self, StylesheetError> {
        parse_css(css)
    }

    /// Parses a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        parse_yaml(yaml)
    }

    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self, StylesheetError> {
        parse_json(json)
    }

    /// Loads a stylesheet file, picking the format from its extension.
    ///
    /// The path is remembered for [`StyleTable::reload`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        load_file(path.as_ref())
    }
}
