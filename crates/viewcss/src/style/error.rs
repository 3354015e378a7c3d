//! Style-related error types.
//!
//! [`ValueError`] covers single declaration values and is always recovered by
//! the caller: the property is dropped and everything else keeps resolving.
//! [`StylesheetError`] covers loading a whole stylesheet document.

use std::path::PathBuf;

use thiserror::Error;

/// A declaration value that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Unknown color name or malformed hex literal.
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// Unparseable number or length token.
    #[error("invalid value '{0}'")]
    InvalidValue(String),
}

/// Error type for stylesheet loading failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StylesheetError {
    /// Syntax error in the stylesheet source.
    #[error("failed to parse stylesheet{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the underlying parser.
        message: String,
    },

    /// Selector outside the supported `type.class` / `.class` grammar.
    #[error("invalid selector '{selector}'{}", location(.path))]
    InvalidSelector {
        selector: String,
        path: Option<PathBuf>,
    },

    /// File extension with no matching parser.
    #[error("unsupported stylesheet format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// File loading error.
    #[error("failed to load stylesheet: {message}")]
    Load { message: String },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl StylesheetError {
    /// Attaches a source path to errors that carry one.
    pub(crate) fn with_path(self, source: &std::path::Path) -> Self {
        match self {
            StylesheetError::Parse { message, .. } => StylesheetError::Parse {
                path: Some(source.to_path_buf()),
                message,
            },
            StylesheetError::InvalidSelector { selector, .. } => {
                StylesheetError::InvalidSelector {
                    selector,
                    path: Some(source.to_path_buf()),
                }
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_error_display() {
        let err = ValueError::InvalidColor("#12".to_string());
        assert_eq!(err.to_string(), "invalid color '#12'");

        let err = ValueError::InvalidValue("12em".to_string());
        assert_eq!(err.to_string(), "invalid value '12em'");
    }

    #[test]
    fn test_parse_error_display_with_path() {
        let err = StylesheetError::Parse {
            path: None,
            message: "unexpected token".to_string(),
        }
        .with_path(std::path::Path::new("themes/main.css"));
        let msg = err.to_string();
        assert!(msg.contains("themes/main.css"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_invalid_selector_display() {
        let err = StylesheetError::InvalidSelector {
            selector: "div > p".to_string(),
            path: None,
        };
        assert_eq!(err.to_string(), "invalid selector 'div > p'");
    }
}
