//! Inline markup scanner for styled text.
//!
//! This crate splits text containing `<span class="...">...</span>` and
//! `<a class="..." href="...">...</a>` markup into flat [`Segment`]s: plain
//! slices of the input, each optionally tagged with the [`MarkupTag`] that
//! enclosed it. It knows nothing about styles; resolving a tag's `class`
//! into declarations is the caller's job.
//!
//! # Example
//!
//! ```rust
//! use viewcss_markup::{scan, strip_markup, TagName};
//!
//! let segments = scan(r#"some <a class="color" href="https://www.example.com">stuff</a>"#);
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].text, "some ");
//!
//! let tag = segments[1].tag.as_ref().unwrap();
//! assert_eq!(tag.name, TagName::Anchor);
//! assert_eq!(tag.class, Some("color"));
//! assert_eq!(tag.href, Some("https://www.example.com"));
//!
//! assert_eq!(strip_markup("a <span class=\"x\">b</span> c"), "a b c");
//! ```
//!
//! # Offsets
//!
//! Segment offsets count UTF-16 code units of the stripped output, since that
//! is how attributed-string hosts index text. A scanner counting `char`s would
//! misplace every boundary after an emoji sequence such as `🤷🏻‍♀️` (5 chars,
//! 7 UTF-16 units).
//!
//! # Degradation
//!
//! Tags do not nest. Anything that is not a well-formed, closed, supported tag
//! is kept as literal text rather than failing the scan:
//!
//! - an opening tag with no matching close tag
//! - a close tag with no opening tag
//! - tags other than `span` and `a`, or tags with unparseable attributes
//! - any markup inside an open tag's content
//!
//! [`validate_markup`] reports those cases without changing the scan result.

use std::fmt;

use thiserror::Error;

/// The inline tags the scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagName {
    /// `<span>`: styled text.
    Span,
    /// `<a>`: styled text with a link target.
    Anchor,
}

impl TagName {
    /// Matches a tag name, ignoring ASCII case.
    pub fn parse(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("span") {
            Some(TagName::Span)
        } else if name.eq_ignore_ascii_case("a") {
            Some(TagName::Anchor)
        } else {
            None
        }
    }

    /// The lowercase tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagName::Span => "span",
            TagName::Anchor => "a",
        }
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag that enclosed a segment of text.
///
/// `start` and `end` are UTF-16 offsets of the enclosed text within the
/// stripped output, not within the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupTag<'a> {
    pub name: TagName,
    /// Raw `class` attribute; may hold several space-separated class names.
    pub class: Option<&'a str>,
    /// `href` attribute. Always `None` for `<span>`.
    pub href: Option<&'a str>,
    pub start: usize,
    pub end: usize,
}

impl<'a> MarkupTag<'a> {
    /// Class names listed in the `class` attribute, in order.
    pub fn classes(&self) -> impl Iterator<Item = &'a str> {
        self.class.unwrap_or("").split_whitespace()
    }
}

/// A contiguous slice of the stripped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The text, borrowed verbatim from the input.
    pub text: &'a str,
    /// UTF-16 offset of the segment within the stripped output.
    pub start: usize,
    /// Length of the segment in UTF-16 code units.
    pub len: usize,
    /// The enclosing tag, or `None` for text outside any tag.
    pub tag: Option<MarkupTag<'a>>,
}

/// Why a piece of markup was kept as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupErrorKind {
    /// An opening tag without a matching close tag.
    Unterminated,
    /// A close tag without an opening tag.
    Unbalanced,
    /// A tag inside another tag's content.
    Nested,
    /// Something `<...>` shaped that is not a supported tag.
    UnsupportedTag,
}

/// A single degraded piece of markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} markup '{raw}' at offset {position}")]
pub struct MarkupError {
    pub kind: MarkupErrorKind,
    /// The raw markup as it appears in the input.
    pub raw: String,
    /// UTF-16 offset of the markup within the stripped output.
    pub position: usize,
}

impl fmt::Display for MarkupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MarkupErrorKind::Unterminated => "unterminated",
            MarkupErrorKind::Unbalanced => "unbalanced",
            MarkupErrorKind::Nested => "nested",
            MarkupErrorKind::UnsupportedTag => "unsupported",
        })
    }
}

/// Every markup problem found in one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupErrors {
    pub errors: Vec<MarkupError>,
}

impl fmt::Display for MarkupErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "malformed markup: {}", messages.join("; "))
    }
}

impl std::error::Error for MarkupErrors {}

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Splits `input` into plain and tagged segments.
///
/// Concatenating the segments' text yields [`strip_markup`]`(input)`. Empty
/// segments are never produced.
pub fn scan(input: &str) -> Vec<Segment<'_>> {
    Scanner::new(input).run().0
}

/// Returns `input` with supported tags removed and their content kept.
pub fn strip_markup(input: &str) -> String {
    scan(input).iter().map(|s| s.text).collect()
}

/// Checks `input` for markup that [`scan`] would keep as literal text.
pub fn validate_markup(input: &str) -> Result<(), MarkupErrors> {
    let (_, errors) = Scanner::new(input).run();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(MarkupErrors { errors })
    }
}

/// Attributes of an opening tag, still borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenTag<'a> {
    name: TagName,
    class: Option<&'a str>,
    href: Option<&'a str>,
}

/// Token types produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// `<span ...>` or `<a ...>`
    Open(OpenTag<'a>, &'a str),
    /// `</span>` or `</a>`
    Close(TagName, &'a str),
    /// `<...>` that is not a supported tag (passed through as text).
    Invalid(&'a str),
}

impl<'a> Token<'a> {
    fn raw(&self) -> &'a str {
        match self {
            Token::Text(raw) | Token::Open(_, raw) | Token::Close(_, raw) | Token::Invalid(raw) => {
                raw
            }
        }
    }
}

/// Tokenizer for inline tags. Yields tokens with their byte offsets.
struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Finds the byte index of the `>` closing the tag that starts at `s[0]`.
    ///
    /// Quoted attribute values may contain `>`. Returns `None` if another `<`
    /// appears first or the input ends.
    fn tag_end(s: &str) -> Option<usize> {
        let mut quote: Option<u8> = None;
        for (i, &b) in s.as_bytes().iter().enumerate().skip(1) {
            match quote {
                Some(q) if b == q => quote = None,
                Some(_) => {}
                None => match b {
                    b'"' | b'\'' => quote = Some(b),
                    b'<' => return None,
                    b'>' => return Some(i),
                    _ => {}
                },
            }
        }
        None
    }

    fn classify(full: &'a str) -> Token<'a> {
        let inner = &full[1..full.len() - 1];

        if let Some(name) = inner.strip_prefix('/') {
            return match TagName::parse(name.trim_end()) {
                Some(tag) => Token::Close(tag, full),
                None => Token::Invalid(full),
            };
        }

        let name_end = inner
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(inner.len());
        let Some(name) = TagName::parse(&inner[..name_end]) else {
            return Token::Invalid(full);
        };

        match parse_attributes(&inner[name_end..]) {
            Some((class, href)) => Token::Open(
                OpenTag {
                    name,
                    class,
                    href: if name == TagName::Anchor { href } else { None },
                },
                full,
            ),
            None => Token::Invalid(full),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let remaining = &self.input[start..];

        let token = match remaining.find('<') {
            Some(0) => match Self::tag_end(remaining) {
                Some(end) => {
                    self.pos += end + 1;
                    Self::classify(&remaining[..=end])
                }
                None => {
                    // A '<' that never closes is text up to the next '<'
                    let next = remaining[1..]
                        .find('<')
                        .map_or(remaining.len(), |p| p + 1);
                    self.pos += next;
                    Token::Text(&remaining[..next])
                }
            },
            Some(bracket_pos) => {
                self.pos += bracket_pos;
                Token::Text(&remaining[..bracket_pos])
            }
            None => {
                self.pos = self.input.len();
                Token::Text(remaining)
            }
        };

        Some((start, token))
    }
}

/// Parses `key="value"` pairs. Returns `(class, href)`.
///
/// Unknown attributes are accepted and ignored. Returns `None` when the
/// attribute list is not well formed.
fn parse_attributes(s: &str) -> Option<(Option<&str>, Option<&str>)> {
    let bytes = s.as_bytes();
    let mut class = None;
    let mut href = None;
    let mut i = 0;

    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }

        let key_start = i;
        while i < bytes.len()
            && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'-' | b'_' | b':'))
        {
            i += 1;
        }
        if i == key_start {
            return None;
        }
        let key = &s[key_start..i];

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let value = if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i >= bytes.len() {
                return None;
            }
            if bytes[i] == b'"' || bytes[i] == b'\'' {
                let quote = bytes[i];
                let value_start = i + 1;
                let close = s[value_start..].bytes().position(|b| b == quote)?;
                i = value_start + close + 1;
                &s[value_start..value_start + close]
            } else {
                let value_start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                &s[value_start..i]
            }
        } else {
            ""
        };

        if key.eq_ignore_ascii_case("class") {
            class = Some(value);
        } else if key.eq_ignore_ascii_case("href") {
            href = Some(value);
        }
    }

    Some((class, href))
}

fn close_slot(name: TagName) -> usize {
    match name {
        TagName::Span => 0,
        TagName::Anchor => 1,
    }
}

/// Pairs opening and closing tags and builds segments.
struct Scanner<'a> {
    input: &'a str,
    tokens: Vec<(usize, Token<'a>)>,
    /// For each token, the index of the first later close tag of each name.
    next_close: Vec<[Option<usize>; 2]>,
    segments: Vec<Segment<'a>>,
    errors: Vec<MarkupError>,
    offset: usize,
    /// Byte range of untagged input not yet emitted, and its UTF-16 length.
    pending: Option<(usize, usize, usize)>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        let tokens: Vec<_> = Tokenizer::new(input).collect();

        let mut next_close = vec![[None; 2]; tokens.len()];
        let mut seen = [None; 2];
        for (index, (_, token)) in tokens.iter().enumerate().rev() {
            next_close[index] = seen;
            if let Token::Close(name, _) = token {
                seen[close_slot(*name)] = Some(index);
            }
        }

        Self {
            input,
            tokens,
            next_close,
            segments: Vec::new(),
            errors: Vec::new(),
            offset: 0,
            pending: None,
        }
    }

    fn run(mut self) -> (Vec<Segment<'a>>, Vec<MarkupError>) {
        let mut i = 0;
        while i < self.tokens.len() {
            let (at, token) = self.tokens[i];
            match token {
                Token::Open(tag, raw) => {
                    if let Some(close) = self.matching_close(i, tag.name) {
                        self.flush_pending();
                        let input = self.input;
                        let content = &input[at + raw.len()..self.tokens[close].0];
                        self.check_nested(i + 1, close);
                        self.emit_tagged(tag, content);
                        i = close + 1;
                        continue;
                    }
                    log::debug!("unterminated <{}> kept as text", tag.name);
                    self.report(MarkupErrorKind::Unterminated, raw);
                    self.extend_pending(at, raw);
                }
                Token::Close(name, raw) => {
                    log::debug!("orphan </{}> kept as text", name);
                    self.report(MarkupErrorKind::Unbalanced, raw);
                    self.extend_pending(at, raw);
                }
                Token::Invalid(raw) => {
                    self.report(MarkupErrorKind::UnsupportedTag, raw);
                    self.extend_pending(at, raw);
                }
                Token::Text(raw) => self.extend_pending(at, raw),
            }
            i += 1;
        }
        self.flush_pending();
        (self.segments, self.errors)
    }

    /// The first close tag of the same name after `open`.
    fn matching_close(&self, open: usize, name: TagName) -> Option<usize> {
        self.next_close[open][close_slot(name)]
    }

    /// Reports markup inside a tag's content, which stays literal.
    fn check_nested(&mut self, from: usize, to: usize) {
        let mut position = self.offset;
        for index in from..to {
            let token = self.tokens[index].1;
            if !matches!(token, Token::Text(_)) {
                self.errors.push(MarkupError {
                    kind: MarkupErrorKind::Nested,
                    raw: token.raw().to_string(),
                    position,
                });
            }
            position += utf16_len(token.raw());
        }
    }

    fn report(&mut self, kind: MarkupErrorKind, raw: &str) {
        let position = self.offset + self.pending_len();
        self.errors.push(MarkupError {
            kind,
            raw: raw.to_string(),
            position,
        });
    }

    fn pending_len(&self) -> usize {
        self.pending.map_or(0, |(_, _, len)| len)
    }

    fn extend_pending(&mut self, at: usize, raw: &str) {
        let end = at + raw.len();
        let len = utf16_len(raw);
        self.pending = Some(match self.pending {
            Some((start, _, pending)) => (start, end, pending + len),
            None => (at, end, len),
        });
    }

    fn flush_pending(&mut self) {
        if let Some((start, end, _)) = self.pending.take() {
            let input = self.input;
            self.push(&input[start..end], None);
        }
    }

    fn emit_tagged(&mut self, tag: OpenTag<'a>, text: &'a str) {
        let len = utf16_len(text);
        let markup = MarkupTag {
            name: tag.name,
            class: tag.class,
            href: tag.href,
            start: self.offset,
            end: self.offset + len,
        };
        self.push(text, Some(markup));
    }

    fn push(&mut self, text: &'a str, tag: Option<MarkupTag<'a>>) {
        if text.is_empty() {
            return;
        }
        let len = utf16_len(text);
        self.segments.push(Segment {
            text,
            start: self.offset,
            len,
            tag,
        });
        self.offset += len;
    }
}
