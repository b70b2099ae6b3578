// src/csv.rs
//
// Presentation: rows → text. Pure functions, no knowledge of where rows came from.
use std::io::{self, Write};

use crate::rows::Row;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

/* ---------------- Delimited ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Rows (optionally preceded by a header row) as one CSV/TSV string.
pub fn rows_to_string(rows: &[Row], headers: Option<&[String]>, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let sep = delim.sep();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Aligned table ---------------- */

/// Space-aligned columns for the terminal. Ragged rows are fine: missing
/// cells are blank. Trailing padding is trimmed.
pub fn render_table(rows: &[Row], headers: Option<&[String]>) -> String {
    let all: Vec<&[String]> = headers.into_iter().chain(rows.iter().map(Vec::as_slice)).collect();

    let cols = all.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; cols];
    for r in &all {
        for (i, cell) in r.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = s!();
    for (n, r) in all.iter().enumerate() {
        let mut line = s!();
        for (i, cell) in r.iter().enumerate() {
            if i > 0 { line.push_str("  "); }
            line.push_str(cell);
            let pad = widths[i] - cell.chars().count();
            line.extend(std::iter::repeat_n(' ', pad));
        }
        out.push_str(line.trim_end());
        out.push('\n');

        if n == 0 && headers.is_some() {
            let rule: usize = widths.iter().sum::<usize>() + 2 * cols.saturating_sub(1);
            out.push_str(&"-".repeat(rule));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let rows = vec![row!["plain", "has,comma", "has \"quote\""]];
        assert_eq!(
            rows_to_string(&rows, None, Delim::Csv),
            "plain,\"has,comma\",\"has \"\"quote\"\"\"\n"
        );
        assert_eq!(rows_to_string(&rows, None, Delim::Tsv), "plain\thas,comma\t\"has \"\"quote\"\"\"\n");
    }

    #[test]
    fn headers_come_first() {
        let headers = row!["Key", "Value"];
        let rows = vec![row!["Status", "Draft"]];
        assert_eq!(rows_to_string(&rows, Some(headers.as_slice()), Delim::Csv), "Key,Value\nStatus,Draft\n");
    }

    #[test]
    fn table_aligns_ragged_rows() {
        let rows = vec![row!["a", "1"], row!["longer", "2", "3"]];
        assert_eq!(render_table(&rows, None), "a       1\nlonger  2  3\n");
    }

    #[test]
    fn table_header_rule() {
        let headers = row!["K", "V"];
        let rows = vec![row!["ab", "c"]];
        assert_eq!(render_table(&rows, Some(headers.as_slice())), "K   V\n-----\nab  c\n");
    }
}
