// src/config/consts.rs

// Net config
pub const WIKI_BASE_URL: &str = "https://wiki.php.net/rfc";
pub const WIKI_INDEX_URL: &str = "https://wiki.php.net/rfc";
pub const USER_AGENT: &str = "rfc_digest/0.3";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Local store
pub const STORE_DIR: &str = ".rfc_digest/store";
pub const STORE_EXT: &str = "html";
/// Store key the index page is saved under.
pub const INDEX_KEY: &str = "index";

// Logging
pub const LOG_FILE: &str = ".rfc_digest/debug.log";
