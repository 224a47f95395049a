/// In-memory document tree and the reference-resolution capability
use super::cursor::Cursor;
use super::value::Value;
use anyhow::{Context, Result, anyhow};
use std::path::Path;

/// Capability supplied by the host: look a path up in the document.
pub trait ReferenceResolver: Sync {
    fn resolve_reference(&self, path: &Cursor) -> Result<Value>;
}

/// A document held entirely in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(raw).context("invalid JSON document")?;
        Ok(Self::new(Value::from_json(json)))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let table: toml::Value = toml::from_str(raw).context("invalid TOML document")?;
        Ok(Self::new(Value::from_toml(table)))
    }

    /// Load by extension; anything that is not `.toml` is read as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read document: {}", path.display()))?;

        let is_toml = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&raw).with_context(|| format!("in {}", path.display()))
        } else {
            Self::from_json_str(&raw).with_context(|| format!("in {}", path.display()))
        }
    }

    pub fn get(&self, path: &Cursor) -> Option<&Value> {
        let mut current = &self.root;
        for node in path.nodes() {
            current = step(current, node)?;
        }
        Some(current)
    }

    /// Every location in the tree, depth-first, parents before children.
    /// The root itself is not listed.
    pub fn locations(&self) -> Vec<Cursor> {
        let mut out = Vec::new();
        collect_locations(&self.root, &Cursor::root(), &mut out);
        out
    }
}

impl ReferenceResolver for Document {
    fn resolve_reference(&self, path: &Cursor) -> Result<Value> {
        self.get(path)
            .cloned()
            .ok_or_else(|| anyhow!("`$.{}` could not be found in the datastructure", path))
    }
}

/// One step down the tree. List elements are addressed by position, or by
/// the element whose `name` field matches.
fn step<'a>(value: &'a Value, node: &str) -> Option<&'a Value> {
    match value {
        Value::Mapping(map) => map.get(node),
        Value::Sequence(items) => {
            if let Ok(idx) = node.parse::<usize>() {
                return items.get(idx);
            }
            items.iter().find(|item| match item {
                Value::Mapping(map) => map.get("name").and_then(Value::as_str) == Some(node),
                _ => false,
            })
        }
        _ => None,
    }
}

fn collect_locations(value: &Value, here: &Cursor, out: &mut Vec<Cursor>) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                let at = here.child(key.as_str());
                out.push(at.clone());
                collect_locations(child, &at, out);
            }
        }
        Value::Sequence(items) => {
            for (idx, child) in items.iter().enumerate() {
                let at = here.child(idx.to_string());
                out.push(at.clone());
                collect_locations(child, &at, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "test_document.rs"]
mod tests;
