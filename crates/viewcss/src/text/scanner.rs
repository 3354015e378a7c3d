//! Marked-up text to styled runs.
//!
//! Builds on [`viewcss_markup::scan`]: each segment outside a tag carries the
//! base declarations unchanged, and each tagged segment carries the base
//! merged with the tag's class rules (the tag winning). An `<a>` tag also
//! carries its `href` as the run's link.
//!
//! Runs are maximal: empty segments are dropped and neighbours that end up
//! with the same declarations and link are joined, so concatenating all run
//! texts gives exactly the markup-stripped input.

use viewcss_markup::Segment;

use crate::style::DeclarationSet;
use crate::stylesheet::StyleSheet;

/// A contiguous slice of plain text with its resolved style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub declarations: DeclarationSet,
    pub link: Option<String>,
}

impl TextRun {
    fn continues(&self, declarations: &DeclarationSet, link: Option<&str>) -> bool {
        self.link.as_deref() == link && self.declarations == *declarations
    }
}

/// Splits `text` into runs, resolving tag classes against `sheet`.
pub fn scan(text: &str, base: &DeclarationSet, sheet: &StyleSheet) -> Vec<TextRun> {
    let mut runs: Vec<TextRun> = Vec::new();

    for segment in viewcss_markup::scan(text) {
        if segment.text.is_empty() {
            continue;
        }
        let (declarations, link) = resolve_segment(&segment, base, sheet);

        if let Some(last) = runs.last_mut() {
            if last.continues(&declarations, link) {
                last.text.push_str(segment.text);
                continue;
            }
        }
        runs.push(TextRun {
            text: segment.text.to_string(),
            declarations,
            link: link.map(str::to_string),
        });
    }
    runs
}

fn resolve_segment<'a>(
    segment: &Segment<'a>,
    base: &DeclarationSet,
    sheet: &StyleSheet,
) -> (DeclarationSet, Option<&'a str>) {
    match &segment.tag {
        None => (base.clone(), None),
        Some(tag) => {
            let classes: Vec<&str> = tag.classes().collect();
            let declarations = base.merged(&sheet.resolve_classes(&classes));
            (declarations, tag.href)
        }
    }
}
