//! CSS stylesheet parsing.
//!
//! The parser is built on top of `cssparser`, so comments, escapes and
//! string tokens are handled the way a browser would. Only the subset the
//! resolver understands is kept:
//!
//! - **Selectors**: `type.class` and `.class`, optionally comma-separated
//!   (`.title, label.header { ... }`).
//! - **Declarations**: any `property: value;` pair. Values are stored raw
//!   (exactly as written, trimmed) and decoded later by the value codecs.
//! - **At-rules** (`@media`, `@import`, ...) are skipped.
//!
//! A rule whose selectors are all unsupported is skipped with a warning, and
//! so is a malformed declaration; the rest of the document still loads.
//!
//! # Example
//!
//! ```css
//! /* Type-scoped rule */
//! ns_object.view {
//!     background-color: red;
//!     color: #00FF00FF;
//! }
//!
//! .color { color: #0000FFFF; }
//!
//! .glow {
//!     text-shadow: 2px 3px 5px blue;
//!     text-shadow-opacity: 0.6;
//! }
//! ```

use std::borrow::Cow;

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

use super::selector::Selector;
use super::sheet::StyleSheet;
use crate::style::{DeclarationSet, StylesheetError};

/// Parses CSS text into a [`StyleSheet`].
///
/// # Errors
///
/// Returns [`StylesheetError::Parse`] only when the document contains
/// content but not a single rule could be read from it.
pub fn parse_css(css: &str) -> Result<StyleSheet, StylesheetError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut css_parser = StyleSheetParser {
        sheet: StyleSheet::new(),
        rules: 0,
    };
    let mut first_error = None;

    let rule_list_parser = cssparser::StyleSheetParser::new(&mut parser, &mut css_parser);
    for result in rule_list_parser {
        if let Err((err, source)) = result {
            log::warn!("skipping CSS rule '{}': {:?}", source.trim(), err.kind);
            first_error.get_or_insert_with(|| format!("{:?} in '{}'", err.kind, source.trim()));
        }
    }

    if css_parser.rules == 0 {
        if let Some(message) = first_error {
            return Err(StylesheetError::Parse {
                path: None,
                message,
            });
        }
    }

    Ok(css_parser.sheet)
}

struct StyleSheetParser {
    sheet: StyleSheet,
    rules: usize,
}

impl<'i> QualifiedRuleParser<'i> for StyleSheetParser {
    type Prelude = Vec<Selector>;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        let prelude = strip_comments(input.slice_from(start));

        let mut selectors = Vec::new();
        for key in prelude.split(',') {
            match Selector::parse(key) {
                Ok(selector) => selectors.push(selector),
                Err(err) => log::warn!("skipping selector: {}", err),
            }
        }

        if selectors.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        Ok(selectors)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut decl_parser = RawDeclarationParser;
        let rule_parser = RuleBodyParser::new(input, &mut decl_parser);

        let mut declarations = DeclarationSet::new();
        for result in rule_parser {
            match result {
                Ok((name, value)) => {
                    declarations.insert(name, value);
                }
                Err((_, source)) => log::warn!("skipping declaration '{}'", source.trim()),
            }
        }

        for selector in prelude {
            self.sheet.add_rule(selector, &declarations);
        }
        self.rules += 1;
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for StyleSheetParser {
    type Prelude = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        log::debug!("ignoring @{} rule", name.as_ref());
        // Counts as handled so the document is not reported as unreadable.
        self.rules += 1;
        while input.next().is_ok() {}
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        while input.next().is_ok() {}
        Ok(())
    }

    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        Ok(())
    }
}

/// Removes `/* ... */` comments from raw source, leaving quoted strings alone.
///
/// A comment separates tokens, so it collapses to a single space together
/// with the whitespace that follows it.
fn strip_comments(raw: &str) -> Cow<'_, str> {
    if !raw.contains("/*") {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut quote = None;
    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == q {
                    quote = None;
                }
            }
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                out.push(c);
            }
            None if c == '/' && chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for inner in chars.by_ref() {
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    prev = inner;
                }
                while chars.peek().is_some_and(|next| next.is_whitespace()) {
                    chars.next();
                }
                if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                    out.push(' ');
                }
            }
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

struct RawDeclarationParser;

impl<'i> DeclarationParser<'i> for RawDeclarationParser {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next().is_ok() {}
        let value = strip_comments(input.slice_from(start));
        let value = value.trim();

        if value.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        Ok((name.as_ref().to_string(), value.to_string()))
    }
}

impl<'i> AtRuleParser<'i> for RawDeclarationParser {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for RawDeclarationParser {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for RawDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(pairs: &[(&str, &str)]) -> DeclarationSet {
        DeclarationSet::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_parse_type_and_class_rules() {
        let css = r#"
            ns_object.view {
                background-color: red;
                color: #00FF00FF;
            }
            .color { color: #0000FFFF; }
        "#;
        let sheet = parse_css(css).unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(
            sheet.get(&Selector::type_class("ns_object", "view")),
            Some(&decls(&[("background-color", "red"), ("color", "#00FF00FF")]))
        );
        assert_eq!(
            sheet.get(&Selector::class("color")),
            Some(&decls(&[("color", "#0000FFFF")]))
        );
    }

    #[test]
    fn test_raw_values_preserved() {
        let css = ".glow { text-shadow: 2px 3px 5px blue; text-shadow-opacity: 0.6 }";
        let sheet = parse_css(css).unwrap();
        let rule = sheet.get(&Selector::class("glow")).unwrap();
        assert_eq!(rule.get("text-shadow"), Some("2px 3px 5px blue"));
        assert_eq!(rule.get("text-shadow-opacity"), Some("0.6"));
    }

    #[test]
    fn test_selector_list() {
        let sheet = parse_css(".a, label.b { color: red; }").unwrap();
        assert!(sheet.get(&Selector::class("a")).is_some());
        assert!(sheet.get(&Selector::type_class("label", "b")).is_some());
    }

    #[test]
    fn test_comments_ignored() {
        let css = "/* header */ .a { /* inline */ color: red; }";
        let sheet = parse_css(css).unwrap();
        assert_eq!(
            sheet.get(&Selector::class("a")),
            Some(&decls(&[("color", "red")]))
        );
    }

    #[test]
    fn test_comment_inside_value() {
        let css = ".a { color: red /* brand */; text-shadow: 2px /* x */ 3px blue; }";
        let sheet = parse_css(css).unwrap();
        assert_eq!(
            sheet.get(&Selector::class("a")),
            Some(&decls(&[("color", "red"), ("text-shadow", "2px 3px blue")]))
        );
    }

    #[test]
    fn test_comment_inside_selector() {
        let sheet = parse_css(".a /* brand */ { color: red; }").unwrap();
        assert_eq!(
            sheet.get(&Selector::class("a")),
            Some(&decls(&[("color", "red")]))
        );

        let sheet = parse_css(".a, /* second */ label.b { color: red; }").unwrap();
        assert!(sheet.get(&Selector::type_class("label", "b")).is_some());
    }

    #[test]
    fn test_strip_comments_keeps_strings() {
        assert_eq!(strip_comments("red"), "red");
        assert_eq!(strip_comments("a /* x */ b"), "a b");
        assert_eq!(strip_comments("a/**/b"), "a b");
        assert_eq!(strip_comments("\"/* kept */\" x"), "\"/* kept */\" x");
        assert_eq!(strip_comments("red /* unterminated"), "red ");
    }

    #[test]
    fn test_repeated_rules_merge() {
        let css = ".a { color: red; background-color: blue; } .a { color: green; }";
        let sheet = parse_css(css).unwrap();
        assert_eq!(
            sheet.get(&Selector::class("a")),
            Some(&decls(&[("color", "green"), ("background-color", "blue")]))
        );
    }

    #[test]
    fn test_unsupported_selector_skipped() {
        let css = "div > p { color: red; } .ok { color: blue; }";
        let sheet = parse_css(css).unwrap();
        assert_eq!(sheet.len(), 1);
        assert!(sheet.get(&Selector::class("ok")).is_some());
    }

    #[test]
    fn test_media_rules_skipped() {
        let css = "@media (prefers-color-scheme: dark) { .a { color: white; } } .b { color: red; }";
        let sheet = parse_css(css).unwrap();
        assert!(sheet.get(&Selector::class("a")).is_none());
        assert!(sheet.get(&Selector::class("b")).is_some());
    }

    #[test]
    fn test_empty_declaration_skipped() {
        let sheet = parse_css(".a { color: ; background-color: red }").unwrap();
        assert_eq!(
            sheet.get(&Selector::class("a")),
            Some(&decls(&[("background-color", "red")]))
        );
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_css("").unwrap().is_empty());
        assert!(parse_css("  /* nothing */ ").unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_document_errors() {
        let result = parse_css("this is not css");
        assert!(matches!(result, Err(StylesheetError::Parse { .. })));
    }
}
