//! Shareable page location.
//!
//! The pagination state can mirror its page number into an external,
//! shareable holder so that reopening the same location reproduces the same
//! page. `QueryString` is the URL-query flavour of such a holder.

use std::sync::{Arc, Mutex};

use tracing::trace;

/// Name of the query parameter that carries the page number.
pub const PAGE_PARAM: &str = "page";

/// An external holder of the current page number.
pub trait PageLocation: Send {
    /// Read the page number, if the location carries a usable one.
    fn read_page(&self) -> Option<usize>;

    /// Record a committed page number.
    fn write_page(&mut self, page: usize);
}

/// An in-memory URL query string, e.g. `?page=2&sort=name`.
///
/// Parameter order is preserved; only the `page` parameter is touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    params: Vec<(String, String)>,
}

impl QueryString {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string. A leading `?` is optional.
    pub fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();

        Self { params }
    }

    /// Replace the whole query, as an external navigation would.
    pub fn set_query(&mut self, query: &str) {
        *self = Self::parse(query);
    }

    /// Get the first value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a parameter, replacing its first occurrence or appending it.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.params.push((key.to_string(), value)),
        }
    }

    /// Render the query with a leading `?`, or an empty string when empty.
    pub fn to_query(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }

        let pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("?{}", pairs.join("&"))
    }
}

impl PageLocation for QueryString {
    fn read_page(&self) -> Option<usize> {
        self.get(PAGE_PARAM)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|page| *page > 0)
    }

    fn write_page(&mut self, page: usize) {
        self.set(PAGE_PARAM, page.to_string());
        trace!(query = %self.to_query(), "Page written to query");
    }
}

/// A location shared between the table and its host.
///
/// The host keeps a clone to observe written pages and to simulate
/// external navigation.
impl<T: PageLocation> PageLocation for Arc<Mutex<T>> {
    fn read_page(&self) -> Option<usize> {
        match self.lock() {
            Ok(location) => location.read_page(),
            Err(poisoned) => poisoned.into_inner().read_page(),
        }
    }

    fn write_page(&mut self, page: usize) {
        match self.lock() {
            Ok(mut location) => location.write_page(page),
            Err(poisoned) => poisoned.into_inner().write_page(page),
        }
    }
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    let decoded = urlencoding::decode(&raw).map(|s| s.into_owned()).ok();
    decoded.unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_read_page() {
        let query = QueryString::parse("?page=3&sort=name");
        assert_eq!(query.read_page(), Some(3));
        assert_eq!(query.get("sort"), Some("name"));
    }

    #[test]
    fn test_read_page_missing_or_invalid() {
        assert_eq!(QueryString::parse("").read_page(), None);
        assert_eq!(QueryString::parse("?page=abc").read_page(), None);
        assert_eq!(QueryString::parse("?page=0").read_page(), None);
    }

    #[test]
    fn test_write_page_preserves_other_params() {
        let mut query = QueryString::parse("sort=name&page=1&dir=asc");
        query.write_page(4);
        assert_eq!(query.to_query(), "?sort=name&page=4&dir=asc");
    }

    #[test]
    fn test_write_page_appends() {
        let mut query = QueryString::new();
        query.write_page(2);
        assert_eq!(query.to_query(), "?page=2");
    }

    #[test]
    fn test_encoding_roundtrip() {
        let mut query = QueryString::new();
        query.set("q", "john doe&co");
        let rendered = query.to_query();
        assert_eq!(rendered, "?q=john%20doe%26co");
        assert_eq!(QueryString::parse(&rendered).get("q"), Some("john doe&co"));
    }

    #[test]
    fn test_shared_location() {
        let shared = Arc::new(Mutex::new(QueryString::parse("?page=2")));
        let mut handle = Arc::clone(&shared);
        assert_eq!(handle.read_page(), Some(2));

        handle.write_page(5);
        assert_eq!(shared.lock().unwrap().to_query(), "?page=5");
    }

    #[test]
    fn test_empty_query_renders_empty() {
        assert_eq!(QueryString::new().to_query(), "");
    }
}
