// src/core/net.rs
//
// Blocking HTTP GET. The wiki only serves HTTPS and redirects plain HTTP, so
// redirects are followed; the final response must be 200 with a UTF-8 body.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// `base` + `/` + `id`, without doubling the slash.
pub fn rfc_url(base: &str, id: &str) -> String {
    join!(base.trim_end_matches('/'), "/", id)
}

pub fn client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .map_err(|e| Error::Net(format!("http client: {e}")))
}

pub fn http_get(url: &str) -> Result<String> {
    get_with(&client()?, url)
}

/// GET `url` with an existing client.
pub fn get_with(client: &Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .map_err(|e| Error::Net(format!("GET {url}: {e}")))?;
    let status = resp.status();
    let bytes = resp
        .bytes()
        .map_err(|e| Error::Net(format!("GET {url}: reading body: {e}")))?;
    logd!("GET {url}: {status}, {} bytes", bytes.len());

    body_of(status, &bytes, url)
}

/// Status check + body decode. Non-200 and bodies that aren't UTF-8 fail the
/// whole request; callers never see a partial document.
fn body_of(status: StatusCode, body: &[u8], url: &str) -> Result<String> {
    if status != StatusCode::OK {
        return Err(Error::Net(format!("HTTP error: {status} {url}")));
    }
    String::from_utf8(body.to_vec())
        .map_err(|e| Error::Malformed(format!("{url}: body is not UTF-8: {e}")))
}
