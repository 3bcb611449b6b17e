//! Query-string to search-qualifier translation.
//!
//! Inbound requests carry arbitrary `key=value` pairs; the upstream search
//! API takes a single `key:value,key:value` qualifier fragment. Parsing is
//! strict, but the service applies it leniently: a malformed query string
//! degrades to an unfiltered search instead of failing the request.

use log::warn;
use thiserror::Error;

/// Error types for query-string parsing
#[derive(Debug, Error)]
pub enum FilterError {
    /// A `%` escape without two hex digits, e.g. `%ZZ`
    #[error("invalid percent-encoding in {0:?}")]
    InvalidEncoding(String),

    /// Percent-decoded bytes were not valid UTF-8
    #[error("query component is not valid UTF-8: {0:?}")]
    InvalidUtf8(String),
}

/// An ordered set of unique filter attributes parsed from a query string.
///
/// Insertion order is preserved, so the rendered fragment is deterministic
/// for a given request. The first value wins when a key repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    params: Vec<(String, String)>,
}

impl SearchFilter {
    /// Parse a raw query string into filter attributes.
    ///
    /// Splits on `&` and `=` and percent-decodes both halves (`+` is a
    /// space). Pairs with an empty key are skipped; a bare key keeps an
    /// empty value.
    pub fn parse(raw: &str) -> Result<Self, FilterError> {
        let mut params: Vec<(String, String)> = Vec::new();

        for pair in raw.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (decode_component(k)?, decode_component(v)?),
                None => (decode_component(pair)?, String::new()),
            };
            if key.is_empty() {
                continue;
            }
            // First value wins
            if params.iter().any(|(k, _)| *k == key) {
                continue;
            }
            params.push((key, value));
        }

        Ok(Self { params })
    }

    /// Number of attributes in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Render the upstream qualifier fragment: `key1:value1,key2:value2`.
    ///
    /// Comma-separated, no trailing delimiter. Values containing `:` or `,`
    /// are rendered as-is; the upstream API treats an unparsable qualifier
    /// as a bare search term.
    #[must_use]
    pub fn fragment(&self) -> String {
        let mut out = String::with_capacity(self.params.len() * 16);
        for (key, value) in &self.params {
            if !out.is_empty() {
                out.push(',');
            }
            out.push_str(key);
            out.push(':');
            out.push_str(value);
        }
        out
    }
}

/// Lenient translation of a raw query string into a qualifier fragment.
///
/// Parse failures are logged and degrade to an empty fragment, so an
/// unfilterable request still proceeds as an unfiltered search.
#[must_use]
pub fn search_fragment(raw: &str) -> String {
    match SearchFilter::parse(raw) {
        Ok(filter) => filter.fragment(),
        Err(err) => {
            warn!("failed to parse query parameters: {err}");
            String::new()
        }
    }
}

/// Percent-decode one query-string component, treating `+` as a space.
///
/// Every `%` must introduce a two-hex-digit escape, matching the strictness
/// of standard query parsers.
fn decode_component(component: &str) -> Result<String, FilterError> {
    let bytes = component.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let complete = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !complete {
                return Err(FilterError::InvalidEncoding(component.to_string()));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let spaced = component.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Ok(decoded.into_owned()),
        Err(_) => Err(FilterError::InvalidUtf8(component.to_string())),
    }
}
