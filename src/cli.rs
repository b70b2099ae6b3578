// src/cli.rs
use std::io::Write;
use std::path::PathBuf;

use crate::config::consts::STORE_DIR;
use crate::config::options::{Command, Loads, Options, OutputFormat, SourceKind};
use crate::core::dom::ParseMode;
use crate::csv::{render_table, rows_to_string};
use crate::data::Rfc;
use crate::error::{Error, Result};
use crate::rows::{self, Row};
use crate::source::{self, Wiki};
use crate::specs::index::{Phase, SectionList};
use crate::runner;

pub const HELP: &str = include_str!("cli_help.txt");

/// What `main` should do after parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    Run(Options),
    Help,
}

pub fn parse_args<I>(args: I) -> Result<Parsed>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter().peekable();

    let Some(cmd) = args.next() else { return Ok(Parsed::Help) };
    let mut positional: Vec<String> = Vec::new();
    let mut phases: Vec<Phase> = Vec::new();
    let mut with_index = false;

    let missing = |flag: &str| Error::Usage(format!("Missing value for {flag}"));

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-h" | "--help" => return Ok(Parsed::Help),
            "--phase" => {
                let v = args.next().ok_or_else(|| missing("--phase"))?;
                let p = Phase::from_anchor(&v)
                    .ok_or_else(|| Error::Usage(format!("Unknown phase: {v}")))?;
                phases.push(p); }
            "--no-details" => opts.loads.details = false,
            "--no-changelog" => opts.loads.change_log = false,
            "--no-votes" => opts.loads.votes = false,
            "--index" => with_index = true,
            "--base-url" | "--index-url" => {
                let v = args.next().ok_or_else(|| missing(&a))?;
                let (mut base, mut index) = match &opts.source {
                    SourceKind::Wiki { base_url, index_url } => (base_url.clone(), index_url.clone()),
                    _ => return Err(Error::Usage(format!("{a} conflicts with --store/--file"))),
                };
                if a == "--base-url" { base = v } else { index = v }
                opts.source = SourceKind::Wiki { base_url: base, index_url: index }; }
            "--store" => {
                // Optional directory: the next argument unless it is a flag.
                let dir = match args.peek() {
                    Some(v) if !v.starts_with('-') => args.next().map(PathBuf::from),
                    _ => None,
                }.unwrap_or_else(|| PathBuf::from(STORE_DIR));
                opts.store_dir = dir.clone();
                opts.source = SourceKind::Stored { dir }; }
            "--store-dir" => {
                let v = args.next().ok_or_else(|| missing("--store-dir"))?;
                opts.store_dir = PathBuf::from(v); }
            "--file" => {
                let v = args.next().ok_or_else(|| missing("--file"))?;
                opts.source = SourceKind::File(PathBuf::from(v)); }
            "--format" => {
                let v = args.next().ok_or_else(|| missing("--format"))?;
                opts.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => OutputFormat::Csv,
                    "tsv" => OutputFormat::Tsv,
                    "table" => OutputFormat::Table,
                    other => return Err(Error::Usage(format!("Unknown format: {other}"))),
                }; }
            "--headers" => opts.include_headers = true,
            "--strict" => opts.parse_mode = ParseMode::Strict,
            other if other.starts_with("--") => return Err(Error::Usage(format!("Unknown arg: {other}"))),
            _ => positional.push(a),
        }
    }

    let mut positional = positional.into_iter();
    opts.command = match cmd.as_str() {
        "list" => Command::List { phases },
        "digest" => Command::Digest {
            id: positional.next().ok_or_else(|| Error::Usage(s!("digest needs an RFC id")))?,
        },
        "votes" => Command::Votes {
            id: positional.next().ok_or_else(|| Error::Usage(s!("votes needs an RFC id")))?,
            question: positional.next(),
        },
        "save" => {
            let ids: Vec<String> = positional.by_ref().collect();
            if ids.is_empty() && !with_index {
                return Err(Error::Usage(s!("save needs RFC ids and/or --index")));
            }
            Command::Save { ids, index: with_index }
        }
        "-h" | "--help" | "help" => return Ok(Parsed::Help),
        other => return Err(Error::Usage(format!("Unknown command: {other}"))),
    };
    if let Some(extra) = positional.next() {
        return Err(Error::Usage(format!("Unexpected argument: {extra}")));
    }

    Ok(Parsed::Run(opts))
}

/// Execute a parsed command, writing its output to `out`.
pub fn run<W: Write>(opts: &Options, out: &mut W) -> Result<()> {
    match &opts.command {
        Command::List { phases } => {
            let src = source::from_kind(&opts.source);
            let lists = runner::get_lists(src.as_ref(), phases, opts.parse_mode)?;
            let headers = row!["Phase", "Title", "Slug"];
            emit(out, opts, &section_rows(&lists), &headers)?;
        }
        Command::Digest { id } => {
            let src = source::from_kind(&opts.source);
            let rfc = runner::get_rfc(src.as_ref(), id, opts.loads, opts.parse_mode)?;
            write_digest(out, opts, &rfc)?;
        }
        Command::Votes { id, question } => {
            let src = source::from_kind(&opts.source);
            let loads = Loads { votes: true, ..Loads::NONE };
            let rfc = runner::get_rfc(src.as_ref(), id, loads, opts.parse_mode)?;
            match question {
                Some(q) => {
                    let rows = rows::votes_to_rows(&rfc, q)?;
                    emit(out, opts, &rows, &row!["Voter", "Choice"])?;
                }
                None => {
                    for key in rows::vote_keys(&rfc) {
                        writeln!(out, "{key}")?;
                    }
                }
            }
        }
        Command::Save { ids, index } => {
            let wiki = match &opts.source {
                SourceKind::Wiki { base_url, index_url } => Wiki {
                    base_url: base_url.clone(),
                    index_url: index_url.clone(),
                },
                _ => return Err(Error::Usage(s!("save reads from the wiki; drop --store/--file"))),
            };
            for path in runner::save_pages(&wiki, &opts.store_dir, ids, *index)? {
                writeln!(out, "Saved {}", path.display())?;
            }
        }
    }
    Ok(())
}

/// `[phase label, title, slug]` per entry, in listing order.
pub fn section_rows(lists: &SectionList) -> Vec<Row> {
    let mut rows = Vec::new();
    for (label, entries) in lists {
        for (title, slug) in entries.values() {
            rows.push(vec![label.clone(), title.clone(), slug.clone()]);
        }
    }
    rows
}

fn write_digest<W: Write>(out: &mut W, opts: &Options, rfc: &Rfc) -> Result<()> {
    if !rfc.name.is_empty() {
        writeln!(out, "{}", rfc.name)?;
        writeln!(out)?;
    }
    if opts.loads.details && !rfc.details().is_empty() {
        writeln!(out, "# Details")?;
        emit(out, opts, &rows::details_to_rows(rfc), &row!["Field", "Value"])?;
        writeln!(out)?;
    }
    if opts.loads.change_log && !rfc.change_log().is_empty() {
        writeln!(out, "# Change log")?;
        emit(out, opts, &rows::change_log_to_rows(rfc), &row!["Version", "Change"])?;
        writeln!(out)?;
    }
    if opts.loads.votes && !rfc.votes().is_empty() {
        writeln!(out, "# Votes")?;
        if !rfc.vote_description().is_empty() {
            writeln!(out, "{}", rfc.vote_description())?;
        }
        emit(out, opts, &rows::vote_summary_rows(rfc), &row!["Question", "Result"])?;
    }
    Ok(())
}

fn emit<W: Write>(out: &mut W, opts: &Options, rows: &[Row], headers: &[String]) -> Result<()> {
    let headers = opts.include_headers.then_some(headers);
    let text = match opts.format.delim() {
        Some(delim) => rows_to_string(rows, headers, delim),
        None => render_table(rows, headers),
    };
    out.write_all(text.as_bytes())?;
    Ok(())
}
