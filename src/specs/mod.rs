// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows where the data lives in one kind of wiki page and how to
//! pull it out through the `core::dom` locator:
//! - `index` – the RFC index: proposals grouped by lifecycle phase.
//! - `rfc`   – one proposal page: name, details list, change log, vote tables.
//!
//! Specs only extract. Fetching, storing and formatting live elsewhere
//! (`source`, `store`, `csv`). A spec never fails because a section is missing;
//! it leaves the matching field empty.
pub mod index;
pub mod rfc;
