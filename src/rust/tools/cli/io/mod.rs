use std::path::Path;

use anyhow::{Context, Result};

use crate::language::{Argument, Cursor, Document, Value};

/// Classify a command-line token: `$.path` is a reference, `$NAME` an
/// environment variable, anything else a literal string.
pub fn parse_token(token: &str) -> Result<Argument> {
    if let Some(path) = token.strip_prefix("$.") {
        let cursor: Cursor = path
            .parse()
            .with_context(|| format!("invalid reference '{}'", token))?;
        return Ok(Argument::Reference(cursor));
    }

    if let Some(name) = token.strip_prefix('$') {
        if !name.is_empty() {
            return Ok(Argument::EnvVar(name.to_string()));
        }
    }

    Ok(Argument::literal(token))
}

pub fn parse_tokens(tokens: &[String]) -> Result<Vec<Argument>> {
    tokens.iter().map(|t| parse_token(t)).collect()
}

/// The document to resolve references against; empty when none was given.
pub fn load_document(path: Option<&Path>) -> Result<Document> {
    match path {
        Some(path) => Document::load(path),
        None => Ok(Document::new(Value::Mapping(Default::default()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token() {
        assert_eq!(
            parse_token("$.meta.net").unwrap(),
            Argument::Reference("meta.net".parse().unwrap())
        );
        assert_eq!(
            parse_token("$SUBNET").unwrap(),
            Argument::EnvVar("SUBNET".to_string())
        );
        assert_eq!(parse_token("-1").unwrap(), Argument::literal("-1"));
        assert_eq!(parse_token("$").unwrap(), Argument::literal("$"));
        assert!(parse_token("$.a..b").is_err());
    }

    #[test]
    fn test_empty_document_without_path() {
        let doc = load_document(None).unwrap();
        assert!(doc.locations().is_empty());
    }
}
