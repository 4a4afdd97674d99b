use percent_encoding::percent_decode_str;
use std::fmt;

/// A single URL-decoded path segment. Never contains a `/` separator of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutingPathSegment(String);

impl RoutingPathSegment {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for RoutingPathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hierarchical route key. The empty segment list is the root path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RoutingPath {
    segments: Vec<RoutingPathSegment>,
}

impl RoutingPath {
    pub const ROOT: RoutingPath = RoutingPath {
        segments: Vec::new(),
    };

    /// Parses a raw URI path. Never fails: empty tokens are dropped, so `""`, `"/"` and `"//"` are
    /// all root, and each surviving token is percent-decoded.
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split('/')
            .filter(|token| !token.trim().is_empty())
            .map(|token| RoutingPathSegment(percent_decode_str(token).decode_utf8_lossy().into_owned()))
            .collect();

        Self { segments }
    }

    pub fn segments(&self) -> &[RoutingPathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// First segment, or `None` at root.
    pub fn head(&self) -> Option<&RoutingPathSegment> {
        self.segments.first()
    }

    /// The path with its first segment removed. Root maps to root.
    pub fn tail(&self) -> RoutingPath {
        if self.segments.len() < 2 {
            return RoutingPath::ROOT;
        }

        RoutingPath {
            segments: self.segments[1..].to_vec(),
        }
    }
}

impl fmt::Display for RoutingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }

        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
