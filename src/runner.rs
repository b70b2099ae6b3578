// src/runner.rs
//
// Request-level entry points. Each call fetches one page from its source,
// parses it once, runs the requested extraction and drops the document before
// returning.

use crate::config::consts::INDEX_KEY;
use crate::config::options::Loads;
use crate::core::dom::{Document, ParseMode};
use crate::data::Rfc;
use crate::error::Result;
use crate::source::PageSource;
use crate::specs::index::{self, Phase, SectionList};
use crate::specs::rfc::RfcBuilder;
use crate::store;

/// Fetch and digest one proposal.
pub fn get_rfc(
    source: &dyn PageSource,
    id: &str,
    loads: Loads,
    mode: ParseMode,
) -> Result<Rfc> {
    let html = source.rfc_page(id)?;
    let t = std::time::Instant::now();
    let rfc = rfc_from_html(&html, loads, mode)?;
    logd!("{id}: extracted in {:?} ({} details, {} changes, {} questions)",
        t.elapsed(), rfc.details().len(), rfc.change_log().len(), rfc.votes().len());
    Ok(rfc)
}

/// Digest a page already in hand.
pub fn rfc_from_html(html: &str, loads: Loads, mode: ParseMode) -> Result<Rfc> {
    let mut builder = RfcBuilder::from_html(html, mode)?;
    builder.load(loads);
    Ok(builder.into_rfc())
}

/// Index page lists for `phases` (empty = all, in the fixed order).
pub fn get_lists(source: &dyn PageSource, phases: &[Phase], mode: ParseMode) -> Result<SectionList> {
    let html = source.index_page()?;
    lists_from_html(&html, phases, mode)
}

pub fn lists_from_html(html: &str, phases: &[Phase], mode: ParseMode) -> Result<SectionList> {
    let doc = Document::parse(html, mode)?;
    let lists = index::list_sections(&doc, phases);
    logd!("index: {} group(s)", lists.len());
    Ok(lists)
}

/// Fetch pages and keep raw copies in the store.
/// `ids` are proposal ids; `with_index` also saves the index page.
pub fn save_pages(
    source: &dyn PageSource,
    dir: &std::path::Path,
    ids: &[String],
    with_index: bool,
) -> Result<Vec<std::path::PathBuf>> {
    let mut written = Vec::with_capacity(ids.len() + 1);
    if with_index {
        let html = source.index_page()?;
        written.push(store::save_page(dir, INDEX_KEY, &html)?);
    }
    for id in ids {
        match source.rfc_page(id) {
            Ok(html) => written.push(store::save_page(dir, id, &html)?),
            Err(e) => {
                loge!("{id}: {e}");
                return Err(e);
            }
        }
    }
    Ok(written)
}
