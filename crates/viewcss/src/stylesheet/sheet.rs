//! An immutable set of rules and the resolver over it.
//!
//! # Resolution
//!
//! For an element of type `T` with classes `[c1, c2, ...]`, matching rules
//! are merged left to right, later values overwriting earlier ones:
//!
//! 1. `T.c1` (the type with the element's primary class)
//! 2. `.c1`, `.c2`, ... in the order the classes were assigned
//!
//! There is no specificity weighting beyond that order: a later-assigned
//! class beats the type rule for the same property.
//!
//! ```rust
//! use viewcss::{DeclarationSet, StyleSheet};
//!
//! let sheet = StyleSheet::from_rules([
//!     ("type.view", DeclarationSet::from_pairs([("color", "red"), ("background-color", "blue")])),
//!     (".x", DeclarationSet::from_pairs([("color", "green")])),
//! ]);
//!
//! let resolved = sheet.resolve("type", &["view", "x"]);
//! assert_eq!(resolved.get("color"), Some("green"));
//! assert_eq!(resolved.get("background-color"), Some("blue"));
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::selector::Selector;
use crate::style::DeclarationSet;

/// Selector → declarations, loaded wholesale and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: HashMap<Selector, DeclarationSet>,
    /// Source file path (for reload support).
    source_path: Option<PathBuf>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sheet from `selector -> declarations` pairs.
    ///
    /// Keys that are not valid selectors are skipped with a warning. A
    /// selector given twice merges its declarations, the later winning.
    pub fn from_rules<K, I>(rules: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, DeclarationSet)>,
    {
        let mut sheet = Self::new();
        for (key, declarations) in rules {
            match Selector::parse(key.as_ref()) {
                Ok(selector) => sheet.add_rule(selector, &declarations),
                Err(err) => log::warn!("skipping rule: {}", err),
            }
        }
        sheet
    }

    /// Merges `declarations` into the rule for `selector`.
    pub(crate) fn add_rule(&mut self, selector: Selector, declarations: &DeclarationSet) {
        self.rules
            .entry(selector)
            .or_default()
            .merge(declarations);
    }

    pub(crate) fn with_source(mut self, path: &Path) -> Self {
        self.source_path = Some(path.to_path_buf());
        self
    }

    /// Returns the source file path, if this sheet was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Declarations of one rule, if present.
    pub fn get(&self, selector: &Selector) -> Option<&DeclarationSet> {
        self.rules.get(selector)
    }

    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.rules.keys()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolves the effective declarations for an element.
    ///
    /// An element with no classes, or with nothing matching, resolves to an
    /// empty set.
    pub fn resolve<S: AsRef<str>>(&self, type_name: &str, classes: &[S]) -> DeclarationSet {
        let mut resolved = DeclarationSet::new();

        if let Some(primary) = classes.first() {
            let selector = Selector::type_class(type_name, primary.as_ref());
            if let Some(declarations) = self.rules.get(&selector) {
                resolved.merge(declarations);
            }
        }
        resolved.merge(&self.resolve_classes(classes));
        resolved
    }

    /// Merges the class-only rules for `classes`, in order.
    pub fn resolve_classes<S: AsRef<str>>(&self, classes: &[S]) -> DeclarationSet {
        let mut resolved = DeclarationSet::new();
        for class in classes {
            if let Some(declarations) = self.rules.get(&Selector::class(class.as_ref())) {
                resolved.merge(declarations);
            }
        }
        resolved
    }
}
