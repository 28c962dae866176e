//! Hash-fragment locations.
//!
//! The navigable path lives after the `#` marker, so the app can be served
//! as static files. A location accepts any of:
//! - a full URL: `https://example.com/#/article/42?ref=home`
//! - a bare fragment: `#/aboutme`
//! - a plain path: `/research`

use std::fmt;

use serde::Serialize;
use url::{form_urlencoded, Url};

/// A parsed in-app location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Path used for matching, always starting with `/`.
    pub path: String,
    /// Decoded query pairs in declaration order.
    pub query: Vec<(String, String)>,
    /// Query text exactly as requested, used to rebuild the location.
    #[serde(skip)]
    raw_query: Option<String>,
    /// Nested fragment after the path (`#/page#section`).
    pub hash: Option<String>,
}

impl Location {
    /// Parse a URL, fragment or path into a location. Never fails: an
    /// unparseable or empty input resolves to the root path.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        let fragment = if input.contains("://") {
            match Url::parse(input) {
                Ok(url) => url.fragment().unwrap_or_default().to_string(),
                Err(_) => String::new(),
            }
        } else if let Some(rest) = input.strip_prefix('#') {
            rest.to_string()
        } else {
            input.to_string()
        };

        Self::from_fragment(&fragment)
    }

    fn from_fragment(fragment: &str) -> Self {
        let (rest, hash) = match fragment.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (fragment, None),
        };

        let (path, raw_query) = match rest.split_once('?') {
            Some((path, query)) if !query.is_empty() => (path, Some(query.to_string())),
            Some((path, _)) => (path, None),
            None => (rest, None),
        };
        let query = raw_query
            .as_deref()
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            path,
            query,
            raw_query,
            hash,
        }
    }

    /// First query value for `name`.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Path plus query and nested fragment.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.raw_query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }
        full
    }

    /// The `href` a link to this location carries.
    pub fn href(&self) -> String {
        format!("#{}", self.full_path())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_path() {
        let loc = Location::parse("/research");
        assert_eq!(loc.path, "/research");
        assert!(loc.query.is_empty());
        assert_eq!(loc.hash, None);
    }

    #[test]
    fn test_parse_fragment() {
        let loc = Location::parse("#/article/42?ref=home");
        assert_eq!(loc.path, "/article/42");
        assert_eq!(loc.query_value("ref"), Some("home"));
        assert_eq!(loc.href(), "#/article/42?ref=home");
    }

    #[test]
    fn test_parse_full_url() {
        let loc = Location::parse("https://blog.example.com/#/aboutme#contact");
        assert_eq!(loc.path, "/aboutme");
        assert_eq!(loc.hash.as_deref(), Some("contact"));

        // No fragment means the root of the app
        let loc = Location::parse("https://blog.example.com/");
        assert_eq!(loc.path, "/");
    }

    #[test]
    fn test_query_text_kept_verbatim() {
        let loc = Location::parse("#/article/42?q=a%20b&tag=c+d");
        assert_eq!(loc.query_value("q"), Some("a b"));
        assert_eq!(loc.query_value("tag"), Some("c d"));
        assert_eq!(loc.full_path(), "/article/42?q=a%20b&tag=c+d");
        assert_eq!(loc.href(), "#/article/42?q=a%20b&tag=c+d");

        // Same pairs, different spelling: distinct locations
        assert_ne!(Location::parse("/x?q=a%20b").full_path(), Location::parse("/x?q=a+b").full_path());

        // A bare `?` carries no query
        assert_eq!(Location::parse("/research?").full_path(), "/research");
    }

    #[test]
    fn test_empty_input_is_root() {
        assert_eq!(Location::parse("").path, "/");
        assert_eq!(Location::parse("#").path, "/");
        assert_eq!(Location::parse("#aboutme").path, "/aboutme");
    }
}
