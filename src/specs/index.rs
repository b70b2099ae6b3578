// src/specs/index.rs
//! Scraping *spec* for the RFC index page.
//!
//! The index groups proposals by lifecycle phase. Each phase is a heading with
//! a fixed `id`, immediately followed by a `div.level2` holding the list:
//!
//! ```html
//! <h2 id="accepted">Accepted</h2>
//! <div class="level2">
//!   <ul><li class="level1"><div class="li"><a href="/rfc/enumerations">Enumerations</a></div></li></ul>
//! </div>
//! ```
//!
//! There is no per-phase container, so the list is found by adjacency to the
//! heading, not by a class path from the root.

use indexmap::IndexMap;

use crate::core::dom::{self, Document, Match};
use crate::core::sanitize::basename;

/// `(title, slug)`; the slug is the last path segment of the link.
pub type Entry = (String, String);
/// Entry title → entry, for one phase.
pub type Entries = IndexMap<String, Entry>;
/// Phase label (heading text) → entries.
pub type SectionList = IndexMap<String, Entries>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    InVoting,
    Discussion,
    Draft,
    Accepted,
    Declined,
    Withdrawn,
    Inactive,
}

impl Phase {
    /// Fixed listing order.
    pub const ALL: [Phase; 7] = [
        Phase::InVoting,
        Phase::Discussion,
        Phase::Draft,
        Phase::Accepted,
        Phase::Declined,
        Phase::Withdrawn,
        Phase::Inactive,
    ];

    /// Heading `id` on the index page.
    pub fn anchor(self) -> &'static str {
        match self {
            Phase::InVoting => "in_voting_phase",
            Phase::Discussion => "under_discussion",
            Phase::Draft => "in_draft",
            Phase::Accepted => "accepted",
            Phase::Declined => "declined",
            Phase::Withdrawn => "withdrawn",
            Phase::Inactive => "inactive",
        }
    }

    /// Case-sensitive inverse of [`Phase::anchor`].
    pub fn from_anchor(anchor: &str) -> Option<Phase> {
        Phase::ALL.into_iter().find(|p| p.anchor() == anchor)
    }
}

/// Entries listed under one phase, or `None` when the page has no such heading
/// (the phase is simply empty right now).
///
/// Items without a link are skipped. A repeated title replaces the earlier
/// entry's value but keeps its position.
pub fn list_section(doc: &Document, phase: Phase) -> Option<SectionList> {
    let heading = doc.by_id(phase.anchor())?;
    let label = dom::text_of(heading);

    let mut entries = Entries::new();
    for item in dom::adjacent_items(heading, Match::Class("level2"), Match::Class("li")) {
        let Some(link) = dom::first_descendant(item, Match::Tag("a")) else {
            logd!("{}: list item without a link: {:?}", phase.anchor(), dom::text_of(item));
            continue;
        };
        let title = dom::text_of(link);
        let slug = s!(basename(dom::attr(link, "href").unwrap_or_default()));
        entries.insert(title.clone(), (title, slug));
    }

    let mut list = SectionList::new();
    list.insert(label, entries);
    Some(list)
}

/// Lists for several phases merged into one mapping, in the order requested.
/// An empty `phases` means all of [`Phase::ALL`].
///
/// Merging is by label only: if two phases carried the same heading text, the
/// later phase's entries replace the earlier group wholesale.
pub fn list_sections(doc: &Document, phases: &[Phase]) -> SectionList {
    let phases: &[Phase] = if phases.is_empty() { &Phase::ALL } else { phases };

    let mut lists = SectionList::new();
    for &phase in phases {
        if let Some(list) = list_section(doc, phase) {
            lists.extend(list);
        }
    }
    lists
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::ParseMode;

    fn doc(body: &str) -> Document {
        Document::parse(&format!("<html><body>{body}</body></html>"), ParseMode::Lenient).unwrap()
    }

    #[test]
    fn anchors_round_trip() {
        for p in Phase::ALL {
            assert_eq!(Phase::from_anchor(p.anchor()), Some(p));
        }
        assert_eq!(Phase::from_anchor("Accepted"), None);
    }

    #[test]
    fn reads_titles_and_slugs() {
        let d = doc(r#"
            <h2 id="accepted">Accepted</h2>
            <div class="level2"><ul>
              <li class="level1"><div class="li"><a href="/rfc/enumerations" class="wikilink1">Enumerations</a></div></li>
              <li class="level1"><div class="li"><a href="https://wiki.php.net/rfc/match_expression_v2">Match expression v2</a></div></li>
              <li class="level1"><div class="li"><a href="/rfc/nullsafe_operator/">Nullsafe operator</a></div></li>
            </ul></div>
        "#);
        let list = list_section(&d, Phase::Accepted).unwrap();
        let entries = &list["Accepted"];
        assert_eq!(entries.len(), 3);
        assert_eq!(entries["Enumerations"], (s!("Enumerations"), s!("enumerations")));
        assert_eq!(entries["Match expression v2"].1, "match_expression_v2");
        assert_eq!(entries["Nullsafe operator"].1, "nullsafe_operator");
    }

    #[test]
    fn missing_heading_is_none() {
        let d = doc("<h2 id='declined'>Declined</h2><div class='level2'></div>");
        for p in Phase::ALL.into_iter().filter(|p| *p != Phase::Declined) {
            assert!(list_section(&d, p).is_none(), "{p:?}");
        }
        let empty = list_section(&d, Phase::Declined).unwrap();
        assert!(empty["Declined"].is_empty());
    }

    #[test]
    fn unlinked_items_are_skipped() {
        let d = doc(r#"
            <h2 id="in_draft">In Draft</h2>
            <div class="level2"><ul>
              <li><div class="li">placeholder, no link yet</div></li>
              <li><div class="li"><a href="/rfc/x">X</a></div></li>
            </ul></div>
        "#);
        let list = list_section(&d, Phase::Draft).unwrap();
        assert_eq!(list["In Draft"].keys().collect::<Vec<_>>(), vec!["X"]);
    }
}
