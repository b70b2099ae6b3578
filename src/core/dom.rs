// src/core/dom.rs
//! Document locator.
//!
//! Wraps a parsed HTML tree and answers the two query shapes the page specs
//! need:
//! - **anchor lookup**: the single element with a given `id`;
//! - **relative queries**: elements matching a [`Match`] below the root or below
//!   an anchor, the element *immediately following* an anchor, and the extent of
//!   a wiki section (siblings up to the next heading of the same level).
//!
//! Queries are written as code on top of the tree rather than as CSS strings, so
//! "the list items in the block right after this heading" reads as exactly that.
//! Nothing here caches between calls; a [`Document`] lives for one request.

use scraper::{ElementRef, Html, Node};
use scraper::node::Element;

use crate::core::sanitize::normalize_ws;
use crate::error::{Error, Result};

/// How to treat recoverable markup errors reported by the HTML parser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Drop parser diagnostics silently. Wiki output is never clean.
    #[default]
    Lenient,
    /// Any parser diagnostic fails the parse with [`Error::Malformed`].
    Strict,
}

/// Element predicate used by every relative query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Match<'q> {
    Any,
    Tag(&'q str),
    Class(&'q str),
    TagClass(&'q str, &'q str),
}

impl Match<'_> {
    pub fn matches(&self, el: ElementRef<'_>) -> bool {
        let e = el.value();
        match *self {
            Match::Any => true,
            Match::Tag(tag) => e.name().eq_ignore_ascii_case(tag),
            Match::Class(class) => has_class(e, class),
            Match::TagClass(tag, class) => e.name().eq_ignore_ascii_case(tag) && has_class(e, class),
        }
    }
}

fn has_class(e: &Element, class: &str) -> bool {
    e.classes().any(|c| c == class)
}

/// A parsed page.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse `src` as a full HTML document.
    ///
    /// Empty input and input without any markup are rejected in both modes;
    /// everything else is handed to the (error-recovering) HTML5 parser.
    pub fn parse(src: &str, mode: ParseMode) -> Result<Self> {
        if src.trim().is_empty() {
            return Err(Error::Malformed(s!("empty document")));
        }
        if !src.contains('<') {
            return Err(Error::Malformed(s!("no markup found")));
        }

        let html = Html::parse_document(src);

        if mode == ParseMode::Strict {
            if let Some(first) = html.errors.first() {
                return Err(Error::Malformed(format!(
                    "{} parse error(s), first: {}",
                    html.errors.len(),
                    first
                )));
            }
        }
        Ok(Self { html })
    }

    /// Same as [`Document::parse`] for raw bytes; non-UTF-8 input is malformed.
    pub fn from_bytes(bytes: &[u8], mode: ParseMode) -> Result<Self> {
        let src = std::str::from_utf8(bytes)
            .map_err(|e| Error::Malformed(format!("not UTF-8: {e}")))?;
        Self::parse(src, mode)
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// First element (document order) whose `id` equals `id`, case-sensitive.
    pub fn by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        elements(self.root()).find(|e| e.value().id() == Some(id))
    }

    /// First `id` from `ids` that exists on the page, tried in order.
    pub fn by_any_id(&self, ids: &[&str]) -> Option<ElementRef<'_>> {
        ids.iter().find_map(|id| self.by_id(id))
    }

    /// All elements under the root matching `m`, in document order.
    pub fn find(&self, m: Match<'_>) -> Vec<ElementRef<'_>> {
        descendants(self.root(), m)
    }

    pub fn first(&self, m: Match<'_>) -> Option<ElementRef<'_>> {
        first_descendant(self.root(), m)
    }
}

/// Every element below `el` (excluding `el`), depth-first in document order.
fn elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.descendants().skip(1).filter_map(ElementRef::wrap)
}

pub fn descendants<'a>(el: ElementRef<'a>, m: Match<'_>) -> Vec<ElementRef<'a>> {
    elements(el).filter(|e| m.matches(*e)).collect()
}

pub fn first_descendant<'a>(el: ElementRef<'a>, m: Match<'_>) -> Option<ElementRef<'a>> {
    elements(el).find(|e| m.matches(*e))
}

/// Direct element children of `el` matching `m`.
pub fn children<'a>(el: ElementRef<'a>, m: Match<'_>) -> Vec<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| m.matches(*e))
        .collect()
}

/// The element right after `el` among its siblings; text and comments are skipped.
pub fn next_sibling_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Items matching `item` inside the block that immediately follows `anchor`,
/// provided that block matches `block`. Anything else yields no items.
pub fn adjacent_items<'a>(
    anchor: ElementRef<'a>,
    block: Match<'_>,
    item: Match<'_>,
) -> Vec<ElementRef<'a>> {
    match next_sibling_element(anchor) {
        Some(b) if block.matches(b) => descendants(b, item),
        _ => Vec::new(),
    }
}

/// `1..=6` for `h1`..`h6`, `None` for anything else.
pub fn heading_level(el: ElementRef<'_>) -> Option<u8> {
    let name = el.value().name().as_bytes();
    match name {
        [b'h' | b'H', d @ b'1'..=b'6'] => Some(*d - b'0'),
        _ => None,
    }
}

/// Sibling elements following `heading` up to (not including) the next heading
/// of the same or a higher level. Wiki pages have no per-section container, so
/// this is what "the section under this heading" means.
pub fn section_blocks<'a>(heading: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let level = heading_level(heading).unwrap_or(6);
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|e| heading_level(*e).is_none_or(|l| l > level))
        .collect()
}

/// All elements matching `m` inside a section (the blocks themselves included).
pub fn section_find<'a>(heading: ElementRef<'a>, m: Match<'_>) -> Vec<ElementRef<'a>> {
    let mut out = Vec::new();
    for block in section_blocks(heading) {
        if m.matches(block) {
            out.push(block);
        }
        out.extend(descendants(block, m));
    }
    out
}

/// Visible text with whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Visible text, skipping any subtree whose root matches `skip`
/// (e.g. the nested list inside a list item).
pub fn text_excluding(el: ElementRef<'_>, skip: Match<'_>) -> String {
    let mut buf = s!();
    collect_text(el, skip, &mut buf);
    normalize_ws(&buf)
}

fn collect_text(el: ElementRef<'_>, skip: Match<'_>, buf: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => buf.push_str(t),
            Node::Element(_) => {
                if let Some(e) = ElementRef::wrap(child) {
                    if !skip.matches(e) {
                        collect_text(e, skip, buf);
                    }
                }
            }
            _ => {}
        }
    }
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}
