// src/config/options.rs
use std::path::PathBuf;

use crate::core::dom::ParseMode;
use crate::csv::Delim;
use crate::specs::index::Phase;
use super::consts::*;

/// Where pages come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Live wiki over HTTP.
    Wiki { base_url: String, index_url: String },
    /// Pages saved earlier with `save`.
    Stored { dir: PathBuf },
    /// A single HTML file on disk, served for every request.
    File(PathBuf),
}

impl Default for SourceKind {
    fn default() -> Self {
        SourceKind::Wiki {
            base_url: s!(WIKI_BASE_URL),
            index_url: s!(WIKI_INDEX_URL),
        }
    }
}

/// Which parts of a proposal page to extract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Loads {
    pub details: bool,
    pub change_log: bool,
    pub votes: bool,
}

impl Default for Loads {
    fn default() -> Self {
        Self { details: true, change_log: true, votes: true }
    }
}

impl Loads {
    pub const NONE: Loads = Loads { details: false, change_log: false, votes: false };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Table,
}

impl OutputFormat {
    /// Delimiter for the delimited formats; `None` for the aligned table.
    pub fn delim(&self) -> Option<Delim> {
        match self {
            OutputFormat::Csv => Some(Delim::Csv),
            OutputFormat::Tsv => Some(Delim::Tsv),
            OutputFormat::Table => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Index page lists for the given phases (empty = all).
    List { phases: Vec<Phase> },
    /// One proposal: name, details, change log, vote summary.
    Digest { id: String },
    /// Voter rows for one question of one proposal.
    Votes { id: String, question: Option<String> },
    /// Fetch from the wiki and keep a copy in the store.
    Save { ids: Vec<String>, index: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub source: SourceKind,
    pub loads: Loads,
    pub format: OutputFormat,
    pub include_headers: bool,
    pub parse_mode: ParseMode,
    pub store_dir: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            command: Command::List { phases: Vec::new() },
            source: SourceKind::default(),
            loads: Loads::default(),
            format: OutputFormat::Table,
            include_headers: false,
            parse_mode: ParseMode::Lenient,
            store_dir: PathBuf::from(STORE_DIR),
        }
    }
}
