// src/source.rs
//
// Where raw HTML comes from. The extractors never see this; they get a parsed
// `Document` built from whatever a `PageSource` returned. Sources either hand
// back the whole page or fail.

use std::{fs, path::PathBuf};

use crate::config::consts::INDEX_KEY;
use crate::config::options::SourceKind;
use crate::core::net;
use crate::error::{Error, Result};
use crate::store;

pub trait PageSource {
    /// Raw HTML of one proposal page.
    fn rfc_page(&self, id: &str) -> Result<String>;

    /// Raw HTML of the index page listing all proposals.
    fn index_page(&self) -> Result<String>;
}

/// The live wiki.
pub struct Wiki {
    pub base_url: String,
    pub index_url: String,
}

impl PageSource for Wiki {
    fn rfc_page(&self, id: &str) -> Result<String> {
        net::http_get(&net::rfc_url(&self.base_url, id))
    }

    fn index_page(&self) -> Result<String> {
        net::http_get(&self.index_url)
    }
}

/// Pages saved earlier into the local store.
pub struct Stored {
    pub dir: PathBuf,
}

impl PageSource for Stored {
    fn rfc_page(&self, id: &str) -> Result<String> {
        store::load_page(&self.dir, id)
    }

    fn index_page(&self) -> Result<String> {
        store::load_page(&self.dir, INDEX_KEY)
    }
}

/// One HTML file answering every request (handy for saved pages and tests).
pub struct LocalFile(pub PathBuf);

impl LocalFile {
    fn read(&self) -> Result<String> {
        let bytes = fs::read(&self.0)?;
        String::from_utf8(bytes)
            .map_err(|e| Error::Malformed(format!("{}: not UTF-8: {e}", self.0.display())))
    }
}

impl PageSource for LocalFile {
    fn rfc_page(&self, _id: &str) -> Result<String> { self.read() }
    fn index_page(&self) -> Result<String> { self.read() }
}

/// In-memory pages keyed by id; `index` for the index page.
#[derive(Default)]
pub struct Memory {
    pub pages: std::collections::HashMap<String, String>,
}

impl Memory {
    pub fn with(mut self, key: &str, html: &str) -> Self {
        self.pages.insert(s!(key), s!(html));
        self
    }
}

impl PageSource for Memory {
    fn rfc_page(&self, id: &str) -> Result<String> {
        self.pages.get(id).cloned().ok_or_else(|| Error::NotStored(s!(id)))
    }

    fn index_page(&self) -> Result<String> {
        self.rfc_page(INDEX_KEY)
    }
}

pub fn from_kind(kind: &SourceKind) -> Box<dyn PageSource> {
    match kind {
        SourceKind::Wiki { base_url, index_url } => Box::new(Wiki {
            base_url: base_url.clone(),
            index_url: index_url.clone(),
        }),
        SourceKind::Stored { dir } => Box::new(Stored { dir: dir.clone() }),
        SourceKind::File(path) => Box::new(LocalFile(path.clone())),
    }
}
