//! Selector keys.
//!
//! Two forms are supported: `type.class` (an element type with a class) and
//! `.class` (any element with the class).

use std::fmt;

use crate::style::StylesheetError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `type.class`
    TypeClass { type_name: String, class: String },
    /// `.class`
    Class(String),
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

impl Selector {
    /// Parses a selector key.
    ///
    /// # Errors
    ///
    /// [`StylesheetError::InvalidSelector`] for anything outside the two
    /// supported forms.
    pub fn parse(s: &str) -> Result<Self, StylesheetError> {
        let s = s.trim();
        let invalid = || StylesheetError::InvalidSelector {
            selector: s.to_string(),
            path: None,
        };

        let (type_name, class) = s.split_once('.').ok_or_else(invalid)?;
        if !is_identifier(class) || !(type_name.is_empty() || is_identifier(type_name)) {
            return Err(invalid());
        }

        Ok(if type_name.is_empty() {
            Selector::Class(class.to_string())
        } else {
            Selector::TypeClass {
                type_name: type_name.to_string(),
                class: class.to_string(),
            }
        })
    }

    pub fn type_class(type_name: &str, class: &str) -> Self {
        Selector::TypeClass {
            type_name: type_name.to_string(),
            class: class.to_string(),
        }
    }

    pub fn class(class: &str) -> Self {
        Selector::Class(class.to_string())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::TypeClass { type_name, class } => write!(f, "{}.{}", type_name, class),
            Selector::Class(class) => write!(f, ".{}", class),
        }
    }
}
