/// Cursor: a location in the host document
///
/// Written as `$.meta.networks[0].range` or `meta.networks.0.range`; both
/// produce the nodes `meta`, `networks`, `0`, `range`.
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^\[\]]*)((?:\[[^\[\]]+\])*)$").unwrap());
static INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[\]]+)\]").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cursor {
    nodes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid path '{path}': {reason}")]
pub struct CursorParseError {
    pub path: String,
    pub reason: String,
}

impl Cursor {
    /// The document root
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_nodes<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nodes: nodes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_root(&self) -> bool {
        self.nodes.is_empty()
    }

    /// A new cursor one level deeper
    pub fn child(&self, node: impl Into<String>) -> Self {
        let mut nodes = self.nodes.clone();
        nodes.push(node.into());
        Self { nodes }
    }

    pub fn parent(&self) -> Option<Self> {
        if self.nodes.is_empty() {
            return None;
        }
        Some(Self {
            nodes: self.nodes[..self.nodes.len() - 1].to_vec(),
        })
    }

    /// `self` is `other` or nested somewhere beneath it.
    pub fn under(&self, other: &Cursor) -> bool {
        self.nodes.starts_with(&other.nodes)
    }
}

impl FromStr for Cursor {
    type Err = CursorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| CursorParseError {
            path: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix("$.")
            .or_else(|| trimmed.strip_prefix('$'))
            .unwrap_or(trimmed);

        if body.is_empty() {
            return Ok(Cursor::root());
        }

        let mut nodes = Vec::new();
        for segment in body.split('.') {
            let caps = SEGMENT
                .captures(segment)
                .ok_or_else(|| fail("unbalanced brackets"))?;

            let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let indices = caps.get(2).map(|m| m.as_str()).unwrap_or("");

            if name.is_empty() && indices.is_empty() {
                return Err(fail("empty path segment"));
            }
            if !name.is_empty() {
                nodes.push(name.to_string());
            }
            for idx in INDEX.captures_iter(indices) {
                nodes.push(idx[1].to_string());
            }
        }

        Ok(Cursor { nodes })
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.join("."))
    }
}

#[cfg(test)]
#[path = "test_cursor.rs"]
mod tests;
