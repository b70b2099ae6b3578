// src/specs/rfc.rs
//! Scraping *spec* for a single RFC page.
//!
//! Layout (DokuWiki):
//! - `<h1>PHP RFC: Title</h1>` followed by a `div.level1` whose first `<ul>` is
//!   the metadata list (`Version: 0.9`, `Status: Draft`, …).
//! - A change-log section (`#changelog` and friends): a table or a list.
//! - A vote section (`#vote` and friends): narrative paragraphs, then one
//!   `table.doodle` per question.
//!
//! Sections are bounded by DOM position (everything after the heading up to the
//! next heading of the same level). A section that isn't on the page leaves its
//! field empty.

use scraper::ElementRef;

use crate::config::options::Loads;
use crate::core::dom::{self, Document, Match, ParseMode};
use crate::core::sanitize::{split_key_value, strip_prefix_ci};
use crate::data::{Map, Rfc, Value};
use crate::error::Result;

pub const CHANGE_LOG_ANCHORS: &[&str] =
    &["changelog", "change_log", "changes", "version_history", "revision_history"];
pub const VOTE_ANCHORS: &[&str] = &["vote", "votes", "voting", "proposed_voting_choices"];

const TITLE_PREFIX: &str = "PHP RFC:";
const CLOSED_MARKER: &str = "This poll has been closed";

/// Fills an [`Rfc`] from one parsed page. Each `load_*` is independent and
/// only ever touches its own fields.
pub struct RfcBuilder {
    doc: Document,
    rfc: Rfc,
}

impl RfcBuilder {
    pub fn new(doc: Document) -> Self {
        Self { doc, rfc: Rfc::new() }
    }

    pub fn from_html(html: &str, mode: ParseMode) -> Result<Self> {
        Ok(Self::new(Document::parse(html, mode)?))
    }

    pub fn load_name(&mut self) -> &mut Self {
        if let Some(name) = parse_name(&self.doc) {
            self.rfc.name = name;
        }
        self
    }

    pub fn load_details(&mut self) -> &mut Self {
        if let Some(details) = parse_details(&self.doc) {
            self.rfc.set_details(details);
        }
        self
    }

    pub fn load_change_log(&mut self) -> &mut Self {
        if let Some(log) = parse_change_log(&self.doc) {
            self.rfc.set_change_log(log);
        }
        self
    }

    pub fn load_votes(&mut self) -> &mut Self {
        if let Some((votes, description)) = parse_votes(&self.doc) {
            self.rfc.set_votes(votes);
            self.rfc.set_vote_description(description);
        }
        self
    }

    /// Name always, the rest per `loads`.
    pub fn load(&mut self, loads: Loads) -> &mut Self {
        self.load_name();
        if loads.details { self.load_details(); }
        if loads.change_log { self.load_change_log(); }
        if loads.votes { self.load_votes(); }
        self
    }

    pub fn rfc(&self) -> &Rfc { &self.rfc }

    /// Finish; the parsed document is dropped here.
    pub fn into_rfc(self) -> Rfc { self.rfc }
}

/* ---------------- name ---------------- */

pub fn parse_name(doc: &Document) -> Option<String> {
    let h1 = doc.first(Match::Tag("h1"))?;
    Some(s!(strip_prefix_ci(&dom::text_of(h1), TITLE_PREFIX)))
}

/* ---------------- details ---------------- */

/// Metadata list under the page title. `None` if the page has no title or the
/// block after it holds no list.
pub fn parse_details(doc: &Document) -> Option<Map> {
    let h1 = doc.first(Match::Tag("h1"))?;
    let block = dom::next_sibling_element(h1)?;
    let list = if block.value().name() == "ul" {
        block
    } else {
        dom::first_descendant(block, Match::Tag("ul"))?
    };
    Some(list_to_map(list))
}

/// `Key: value` items → mapping. An item holding a nested list maps to a
/// nested mapping (its inline value, if any, kept under `summary`). Items with
/// no `:` are keyed by their 1-based position.
fn list_to_map(list: ElementRef<'_>) -> Map {
    let mut map = Map::new();
    for (i, li) in dom::children(list, Match::Tag("li")).into_iter().enumerate() {
        let text = dom::text_excluding(li, Match::Tag("ul"));
        let (key, inline) = match split_key_value(&text, &[":"]) {
            Some((k, v)) => (s!(k), s!(v)),
            None => ((i + 1).to_string(), text.clone()),
        };

        let value = match dom::first_descendant(li, Match::Tag("ul")) {
            Some(nested) => {
                let mut inner = list_to_map(nested);
                if !inline.is_empty() {
                    inner.shift_insert(0, s!("summary"), Value::Scalar(inline));
                }
                Value::Mapping(inner)
            }
            None => Value::Scalar(inline),
        };
        map.insert(key, value);
    }
    map
}

/* ---------------- change log ---------------- */

pub fn parse_change_log(doc: &Document) -> Option<Map> {
    let heading = doc.by_any_id(CHANGE_LOG_ANCHORS)?;

    if let Some(table) = dom::section_find(heading, Match::Tag("table")).into_iter().next() {
        return Some(table_to_map(table));
    }
    let list = dom::section_find(heading, Match::Tag("ul")).into_iter().next()?;

    let mut log = Map::new();
    for li in dom::children(list, Match::Tag("li")) {
        let text = dom::text_excluding(li, Match::Tag("ul"));
        let (label, note) = split_key_value(&text, &[" - ", " – ", ": ", ":"])
            .map(|(k, v)| (s!(k), s!(v)))
            .unwrap_or((text, s!()));

        let value = match dom::first_descendant(li, Match::Tag("ul")) {
            Some(nested) => {
                let mut items: Vec<Value> = Vec::new();
                if !note.is_empty() { items.push(Value::Scalar(note)); }
                items.extend(
                    dom::children(nested, Match::Tag("li"))
                        .into_iter()
                        .map(|n| Value::Scalar(dom::text_of(n))),
                );
                Value::Sequence(items)
            }
            None => Value::Scalar(note),
        };
        log.insert(label, value);
    }
    Some(log)
}

/// First cell is the key, the remaining cells (as a sequence) the value.
/// Header rows made of `th` only are skipped.
fn table_to_map(table: ElementRef<'_>) -> Map {
    let mut map = Map::new();
    for tr in dom::descendants(table, Match::Tag("tr")) {
        let cells = dom::children(tr, Match::Tag("td"));
        let Some((first, rest)) = cells.split_first() else { continue };
        let rest = rest.iter().map(|c| Value::Scalar(dom::text_of(*c))).collect();
        map.insert(dom::text_of(*first), Value::Sequence(rest));
    }
    map
}

/* ---------------- votes ---------------- */

/// Vote records keyed by question, plus the narrative that precedes the first
/// table. `None` when the page has no vote section.
pub fn parse_votes(doc: &Document) -> Option<(Map, String)> {
    let heading = doc.by_any_id(VOTE_ANCHORS)?;

    let mut description: Vec<String> = Vec::new();
    let mut votes = Map::new();
    let mut seen_table = false;
    let mut polls = 0;

    for block in dom::section_blocks(heading) {
        let walk = std::iter::once(block).chain(dom::descendants(block, Match::Any));
        for el in walk {
            if Match::TagClass("table", "doodle").matches(el) {
                seen_table = true;
                polls += 1;
                let (question, record) = parse_doodle(el, polls);
                votes.insert(question, record);
            } else if !seen_table && Match::Tag("p").matches(el) {
                let text = dom::text_of(el);
                if !text.is_empty() { description.push(text); }
            }
        }
    }

    logd!("votes: {} question(s) under #{}", votes.len(), heading.value().id().unwrap_or(""));
    Some((votes, description.join("\n")))
}

/// One doodle poll:
///
/// ```text
/// <tr><th colspan=3>Question</th></tr>
/// <tr><td>Real name</td><td>Yes</td><td>No</td></tr>      ← choices
/// <tr><td><a>voter</a></td><td><img/></td><td></td></tr>   ← one per voter
/// <tr><td>Final result:</td><td>12</td><td>3</td></tr>     ← counts
/// <tr><td colspan=3>This poll has been closed.</td></tr>
/// ```
///
/// Returns the question key and a record mapping with `question`, `choices`,
/// `votes` (voter → chosen options), `counts` and `closed`.
fn parse_doodle(table: ElementRef<'_>, position: usize) -> (String, Value) {
    let rows = dom::descendants(table, Match::Tag("tr"));
    let mut rows = rows.into_iter();

    let mut question = s!();
    let mut choices: Vec<String> = Vec::new();
    let mut voters = Map::new();
    let mut counts = Map::new();

    // Title row (a single `th`), then the choices row whatever its cell type.
    let mut head = rows.next();
    if let Some(tr) = head {
        if let [th] = cells(tr).as_slice() {
            if th.value().name() == "th" {
                question = dom::text_of(*th);
                head = rows.next();
            }
        }
    }
    if let Some(tr) = head {
        choices = cells(tr).iter().skip(1).map(|c| dom::text_of(*c)).collect();
    }

    for tr in rows {
        let row = cells(tr);
        let Some((first, marks)) = row.split_first() else { continue };
        let label = dom::text_of(*first);
        let lower = label.to_ascii_lowercase();

        if lower.starts_with("count") || lower.starts_with("final result") {
            for (choice, cell) in choices.iter().zip(marks) {
                counts.insert(choice.clone(), Value::Scalar(dom::text_of(*cell)));
            }
            continue;
        }

        let Some(link) = dom::first_descendant(*first, Match::Tag("a")) else { continue };
        let picked: Vec<Value> = choices
            .iter()
            .zip(marks)
            .filter(|(_, cell)| is_marked(**cell))
            .map(|(choice, _)| Value::Scalar(choice.clone()))
            .collect();
        voters.insert(dom::text_of(link), Value::Sequence(picked));
    }

    let closed = dom::text_of(table).contains(CLOSED_MARKER);
    let key = if question.is_empty() { format!("Question {position}") } else { question.clone() };

    let mut record = Map::new();
    record.insert(s!("question"), Value::Scalar(question));
    record.insert(s!("choices"), Value::from(choices));
    record.insert(s!("votes"), Value::Mapping(voters));
    record.insert(s!("counts"), Value::Mapping(counts));
    record.insert(s!("closed"), Value::from(if closed { "yes" } else { "no" }));
    (key, Value::Mapping(record))
}

fn cells(tr: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "td" | "th"))
        .collect()
}

/// A voter's cell counts as chosen when it shows the tick image or any text.
fn is_marked(cell: ElementRef<'_>) -> bool {
    dom::first_descendant(cell, Match::Tag("img")).is_some() || !dom::text_of(cell).is_empty()
}
