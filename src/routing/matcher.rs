//! Path pattern matching.
//!
//! # Responsibilities
//! - Parse route patterns (`/aboutme`, `/article/:id`, `/*any`)
//! - Match a requested path and capture placeholder values
//! - Build a concrete path back from captured values (reverse lookup)
//!
//! # Design Decisions
//! - Static segments compare case-insensitively
//! - Empty segments are ignored, so trailing slashes are tolerated
//! - Captured values are percent-decoded; built paths are percent-encoded
//! - A placeholder never matches an empty segment
//! - No regex: a single pass over the segments

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::routing::RouteError;

/// Values captured from placeholder segments, keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured value for `name`, if the pattern had that placeholder.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll(String),
}

impl Segment {
    fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Param(name) | Segment::CatchAll(name) => Some(name),
        }
    }
}

/// A compiled route pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern such as `/article/:id`.
    pub fn parse(source: &str) -> Result<Self, RouteError> {
        if !source.starts_with('/') {
            return Err(invalid(source, "must start with '/'"));
        }

        let parts: Vec<&str> = split_segments(source).collect();
        let mut segments: Vec<Segment> = Vec::with_capacity(parts.len());

        for (i, part) in parts.iter().enumerate() {
            let segment = if let Some(name) = part.strip_prefix(':') {
                check_name(source, name)?;
                Segment::Param(name.to_string())
            } else if let Some(name) = part.strip_prefix('*') {
                check_name(source, name)?;
                if i + 1 != parts.len() {
                    return Err(invalid(source, "catch-all must be the last segment"));
                }
                Segment::CatchAll(name.to_string())
            } else {
                Segment::Static(part.to_string())
            };

            if let Some(name) = segment.param_name() {
                if segments.iter().any(|s| s.param_name() == Some(name)) {
                    return Err(invalid(source, format!("param '{}' appears twice", name)));
                }
            }
            segments.push(segment);
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The pattern text as declared.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True if the pattern ends in a catch-all segment.
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll(_)))
    }

    /// Pattern with placeholder names erased and static text lowercased.
    /// Two patterns with the same shape match exactly the same paths.
    pub fn shape(&self) -> String {
        let mut shape = String::new();
        for segment in &self.segments {
            shape.push('/');
            match segment {
                Segment::Static(text) => shape.push_str(&text.to_lowercase()),
                Segment::Param(_) => shape.push(':'),
                Segment::CatchAll(_) => shape.push('*'),
            }
        }
        if shape.is_empty() {
            shape.push('/');
        }
        shape
    }

    /// Match `path` (no query or fragment) and capture placeholder values.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let mut params = Params::new();
        let mut parts = split_segments(path);

        for segment in &self.segments {
            match segment {
                Segment::Static(expected) => {
                    let part = decode(parts.next()?);
                    if part.to_lowercase() != expected.to_lowercase() {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let part = parts.next()?;
                    params.insert(name.as_str(), decode(part));
                }
                Segment::CatchAll(name) => {
                    let rest: Vec<String> = parts.by_ref().map(decode).collect();
                    params.insert(name.as_str(), rest.join("/"));
                }
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }

    /// Build a concrete path from `params`.
    pub fn build(&self, params: &Params) -> Result<String, RouteError> {
        let mut path = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Static(text) => {
                    path.push('/');
                    path.push_str(text);
                }
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| RouteError::MissingParam {
                            pattern: self.source.clone(),
                            param: name.clone(),
                        })?;
                    path.push('/');
                    path.push_str(&urlencoding::encode(value));
                }
                Segment::CatchAll(name) => {
                    let rest = params.get(name).unwrap_or_default();
                    for piece in rest.split('/').filter(|p| !p.is_empty()) {
                        path.push('/');
                        path.push_str(&urlencoding::encode(piece));
                    }
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for PathPattern {}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for PathPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

fn check_name(pattern: &str, name: &str) -> Result<(), RouteError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(invalid(pattern, format!("bad placeholder name '{}'", name)))
    }
}

fn invalid(pattern: &str, reason: impl Into<String>) -> RouteError {
    RouteError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_match() {
        let pattern = PathPattern::parse("/aboutme").unwrap();
        assert!(pattern.matches("/aboutme").is_some());
        assert!(pattern.matches("/aboutme/").is_some());
        assert!(pattern.matches("/AboutMe").is_some()); // Case insensitive
        assert!(pattern.matches("/about").is_none());
        assert!(pattern.matches("/aboutme/more").is_none());
    }

    #[test]
    fn test_root_pattern() {
        let pattern = PathPattern::parse("/").unwrap();
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("").is_some());
        assert!(pattern.matches("/research").is_none());
    }

    #[test]
    fn test_param_capture() {
        let pattern = PathPattern::parse("/article/:id").unwrap();

        let params = pattern.matches("/article/42").unwrap();
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.len(), 1);

        // Placeholder needs a non-empty segment
        assert!(pattern.matches("/article").is_none());
        assert!(pattern.matches("/article/").is_none());
        assert!(pattern.matches("/article/42/comments").is_none());
    }

    #[test]
    fn test_param_is_percent_decoded() {
        let pattern = PathPattern::parse("/article/:id").unwrap();
        let params = pattern.matches("/article/hello%20world").unwrap();
        assert_eq!(params.get("id"), Some("hello world"));
    }

    #[test]
    fn test_catch_all() {
        let pattern = PathPattern::parse("/*any").unwrap();
        assert!(pattern.is_catch_all());

        let params = pattern.matches("/no/such/page").unwrap();
        assert_eq!(params.get("any"), Some("no/such/page"));

        let params = pattern.matches("/").unwrap();
        assert_eq!(params.get("any"), Some(""));
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(PathPattern::parse("article").is_err());
        assert!(PathPattern::parse("/article/:").is_err());
        assert!(PathPattern::parse("/*rest/tail").is_err());
        assert!(PathPattern::parse("/:id/:id").is_err());
    }

    #[test]
    fn test_build() {
        let pattern = PathPattern::parse("/article/:id").unwrap();
        let params: Params = [("id", "a b")].into_iter().collect();
        assert_eq!(pattern.build(&params).unwrap(), "/article/a%20b");

        let err = pattern.build(&Params::new()).unwrap_err();
        assert!(matches!(err, RouteError::MissingParam { .. }));

        let root = PathPattern::parse("/").unwrap();
        assert_eq!(root.build(&Params::new()).unwrap(), "/");
    }

    #[test]
    fn test_shape() {
        let a = PathPattern::parse("/article/:id").unwrap();
        let b = PathPattern::parse("/Article/:slug/").unwrap();
        assert_eq!(a.shape(), b.shape());
        assert_eq!(PathPattern::parse("/").unwrap().shape(), "/");
    }
}
