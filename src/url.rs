//! The URL adapter: turns a URL string into `(host, path segments,
//! query multimap)`.

use std::str::FromStr;

use http::Uri;
use percent_encoding::percent_decode_str;

use crate::error::UrlAdapterError;

/// The decomposed form of an input URL, ready for the path walker and the
/// leaf query matcher.
pub(crate) struct ParsedUrl {
    /// Lower-cased host, including the port if the URL carried one.
    pub(crate) host: String,
    /// Non-empty, percent-decoded path components, in order.
    pub(crate) path_segments: Vec<String>,
    /// The decoded query multimap; a key may repeat with several values.
    pub(crate) query: Vec<(String, Vec<String>)>,
}

/// Parses an absolute URL string. The scheme is accepted but otherwise
/// ignored (http and https route identically); only an authority
/// (host, optionally with port) and path/query are required.
pub(crate) fn parse(url: &str) -> Result<ParsedUrl, UrlAdapterError> {
    let uri = Uri::from_str(url).map_err(|err| UrlAdapterError::new(url, err.to_string()))?;

    let host = uri
        .authority()
        .ok_or_else(|| UrlAdapterError::new(url, "url has no host"))?
        .as_str()
        .to_lowercase();

    let decoded_path = decode(uri.path()).map_err(|err| UrlAdapterError::new(url, err))?;
    let path_segments = decoded_path
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();

    let query = parse_query(uri.query().unwrap_or("")).map_err(|err| UrlAdapterError::new(url, err))?;

    Ok(ParsedUrl { host, path_segments, query })
}

/// Parses a raw query string into an ordered multimap, percent-decoding
/// keys and values and treating `+` as a literal space the way HTML form
/// encoding (and Go's `net/url.ParseQuery`, which the reference
/// implementation is built on) does.
fn parse_query(raw: &str) -> Result<Vec<(String, Vec<String>)>, String> {
    let mut query: Vec<(String, Vec<String>)> = Vec::new();

    if raw.is_empty() {
        return Ok(query);
    }

    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }

        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };

        let key = decode(&key.replace('+', " "))?;
        let value = decode(&value.replace('+', " "))?;

        match query.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => query.push((key, vec![value])),
        }
    }

    Ok(query)
}

fn decode(raw: &str) -> Result<String, String> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .map_err(|err| format!("invalid percent-encoding: {err}"))
}
