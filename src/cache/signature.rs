// Request signatures used as cache keys.
// Normalizes an endpoint path plus its options so equivalent requests share one entry.

use std::collections::BTreeMap;
use std::fmt;

/// Header that callers are not allowed to override.
const ACCEPT_HEADER: &str = "accept";

/// Query parameters and extra headers for a single API request.
///
/// Both maps are ordered, so two option sets with the same effective fields compare
/// and hash equal no matter the order they were built in.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestOptions {
    query: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter, replacing any previous value for the same key.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let _ = self.query.insert(key.into(), value.to_string());
        self
    }

    /// Add an extra request header. Header names are case-insensitive and stored
    /// lowercased. Attempts to set `Accept` are ignored.
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        let name = name.as_ref().to_ascii_lowercase();
        if name == ACCEPT_HEADER {
            tracing::debug!("ignoring Accept header override");
            return self;
        }
        let _ = self.headers.insert(name, value.into());
        self
    }

    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn header_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Cache key: endpoint path plus normalized options.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSignature {
    path: String,
    options: RequestOptions,
}

impl RequestSignature {
    pub fn new(path: impl Into<String>, options: RequestOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }
}

impl fmt::Display for RequestSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        let mut sep = '?';
        for (key, value) in self.options.query_pairs() {
            write!(f, "{sep}{key}={value}")?;
            sep = '&';
        }
        for (name, value) in self.options.header_pairs() {
            write!(f, " [{name}: {value}]")?;
        }
        Ok(())
    }
}
