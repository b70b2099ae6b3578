// src/store.rs
//
// Raw page cache: one `<key>.html` file per proposal id under the store dir.
// The index page lives under the reserved key `index`.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::STORE_EXT;
use crate::core::sanitize::sanitize_key;
use crate::error::{Error, Result};

pub fn page_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(join!(&sanitize_key(key), ".", STORE_EXT))
}

/// Write (or overwrite) the stored copy of `key`. Returns the file written.
pub fn save_page(dir: &Path, key: &str, html: &str) -> Result<PathBuf> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Usage(format!("store path is not a directory: {}", dir.display())));
    }
    fs::create_dir_all(dir)?;

    let path = page_path(dir, key);
    fs::write(&path, html)?;
    logf!("stored {key} ({} bytes) at {}", html.len(), path.display());
    Ok(path)
}

/// Previously stored HTML for `key`.
pub fn load_page(dir: &Path, key: &str) -> Result<String> {
    let path = page_path(dir, key);
    match fs::read_to_string(&path) {
        Ok(html) => Ok(html),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotStored(s!(key))),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            Err(Error::Malformed(format!("{}: not UTF-8", path.display())))
        }
        Err(e) => Err(e.into()),
    }
}

/// Keys currently in the store, sorted.
pub fn stored_keys(dir: &Path) -> Result<Vec<String>> {
    let mut keys = Vec::new();
    if !dir.exists() { return Ok(keys); }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }
        if path.extension().and_then(|s| s.to_str()) != Some(STORE_EXT) { continue; }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            keys.push(s!(stem));
        }
    }
    keys.sort_unstable();
    Ok(keys)
}
