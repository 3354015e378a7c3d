//! The style table: a swappable snapshot of the active stylesheet.
//!
//! A [`StyleTable`] holds an `Arc<StyleSheet>` behind a lock. Replacing the
//! rules swaps the pointer in one step, so a reader always sees either the
//! old sheet or the new one, never a mix. Readers clone the `Arc` and release
//! the lock before resolving.
//!
//! Most hosts use the process-wide table:
//!
//! ```rust
//! use viewcss::{set_rules, shared_table, DeclarationSet, StyleSheet};
//!
//! set_rules(StyleSheet::from_rules([
//!     (".color", DeclarationSet::from_pairs([("color", "#0000FFFF")])),
//! ]));
//!
//! let resolved = shared_table().resolve("label", &["color"]);
//! assert_eq!(resolved.get("color"), Some("#0000FFFF"));
//! ```
//!
//! Code that wants isolation (tests, multiple windows with different themes)
//! can own a `StyleTable` directly and pass it around.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use super::parser::load_file;
use super::sheet::StyleSheet;
use crate::style::{DeclarationSet, StylesheetError};

/// Holder of the active stylesheet.
///
/// A fresh table is empty, and every lookup against it resolves to an empty
/// declaration set.
#[derive(Debug, Default)]
pub struct StyleTable {
    current: RwLock<Arc<StyleSheet>>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(sheet: StyleSheet) -> Self {
        Self {
            current: RwLock::new(Arc::new(sheet)),
        }
    }

    /// Replaces the whole rule set, returning the previous snapshot.
    pub fn set_rules(&self, sheet: StyleSheet) -> Arc<StyleSheet> {
        let next = Arc::new(sheet);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Drops every rule.
    pub fn clear(&self) {
        self.set_rules(StyleSheet::new());
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<StyleSheet> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Resolves against the current snapshot.
    pub fn resolve<S: AsRef<str>>(&self, type_name: &str, classes: &[S]) -> DeclarationSet {
        self.snapshot().resolve(type_name, classes)
    }

    /// Loads a stylesheet file and makes it current.
    ///
    /// On error the current rules stay in place.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<(), StylesheetError> {
        let sheet = load_file(path.as_ref())?;
        self.set_rules(sheet);
        Ok(())
    }

    /// Re-reads the file the current sheet was loaded from.
    ///
    /// Sheets built in memory have nothing to reload; this is then a no-op.
    /// On error the current rules stay in place.
    pub fn reload(&self) -> Result<(), StylesheetError> {
        let snapshot = self.snapshot();
        match snapshot.source_path() {
            Some(path) => self.load_file(path),
            None => Ok(()),
        }
    }
}

static SHARED_TABLE: Lazy<StyleTable> = Lazy::new(StyleTable::new);

/// The process-wide style table.
pub fn shared_table() -> &'static StyleTable {
    &SHARED_TABLE
}

/// Replaces the rules of the process-wide table.
pub fn set_rules(sheet: StyleSheet) {
    let previous = SHARED_TABLE.set_rules(sheet);
    log::debug!("replaced shared style table ({} rules before)", previous.len());
}
