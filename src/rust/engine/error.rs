use crate::addr::RangeError;
use crate::language::Value;

/// Stable error categories reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ArgumentCount,
    ArgumentType,
    ReferenceResolution,
    Parse,
    Coercion,
    Bounds,
    UnknownOperator,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::ArgumentCount => "ArgumentCountError",
            ErrorKind::ArgumentType => "ArgumentTypeError",
            ErrorKind::ReferenceResolution => "ReferenceResolutionError",
            ErrorKind::Parse => "ParseError",
            ErrorKind::Coercion => "CoercionError",
            ErrorKind::Bounds => "BoundsError",
            ErrorKind::UnknownOperator => "UnknownOperatorError",
        }
    }

    pub fn help(self) -> Option<&'static str> {
        match self {
            ErrorKind::ArgumentCount => {
                Some("usage: (( ips <ip-or-cidr> <index> [count] ))")
            }
            ErrorKind::Parse => Some("expected an address like 10.0.0.5 or a block like 10.0.0.0/24"),
            ErrorKind::Coercion => Some("index and count must be whole numbers"),
            ErrorKind::Bounds => Some("keep |index| and index + count within the size of the block"),
            _ => None,
        }
    }
}

/// Failure of a single operator call. Never carries a partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OperatorError {
    #[error("{operator} requires {expected} arguments, got {found}")]
    ArgumentCount {
        operator: String,
        expected: String,
        found: usize,
    },

    #[error("argument #{index}: {message}")]
    ArgumentType { index: usize, message: String },

    #[error("argument #{index}: unable to resolve `{path}`: {message}")]
    ReferenceResolution {
        index: usize,
        path: String,
        message: String,
    },

    #[error("argument #{index}: {source}")]
    Parse {
        index: usize,
        #[source]
        source: RangeError,
    },

    #[error("argument #{index}: expected an integer, got {found} '{value}'")]
    Coercion {
        index: usize,
        found: &'static str,
        value: String,
    },

    #[error("{source}")]
    Bounds {
        #[source]
        source: RangeError,
    },

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
}

impl OperatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OperatorError::ArgumentCount { .. } => ErrorKind::ArgumentCount,
            OperatorError::ArgumentType { .. } => ErrorKind::ArgumentType,
            OperatorError::ReferenceResolution { .. } => ErrorKind::ReferenceResolution,
            OperatorError::Parse { .. } => ErrorKind::Parse,
            OperatorError::Coercion { .. } => ErrorKind::Coercion,
            OperatorError::Bounds { .. } => ErrorKind::Bounds,
            OperatorError::UnknownOperator(_) => ErrorKind::UnknownOperator,
        }
    }

    /// Position of the offending argument, when one can be blamed
    pub fn argument_index(&self) -> Option<usize> {
        match self {
            OperatorError::ArgumentType { index, .. }
            | OperatorError::ReferenceResolution { index, .. }
            | OperatorError::Parse { index, .. }
            | OperatorError::Coercion { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Map a resolver failure; parse failures always blame the first argument.
    pub fn from_range(err: RangeError) -> Self {
        if err.is_bounds() {
            OperatorError::Bounds { source: err }
        } else {
            OperatorError::Parse {
                index: 0,
                source: err,
            }
        }
    }

    pub fn coercion(index: usize, value: &Value) -> Self {
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_json().to_string(),
        };
        OperatorError::Coercion {
            index,
            found: value.type_name(),
            value: rendered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_mapping() {
        let parse = OperatorError::from_range(RangeError::Parse {
            input: "x".to_string(),
        });
        assert_eq!(parse.kind(), ErrorKind::Parse);
        assert_eq!(parse.argument_index(), Some(0));

        let bounds = OperatorError::from_range(RangeError::IndexOutOfBlock {
            index: 999,
            block: "10.0.0.0/24".to_string(),
        });
        assert_eq!(bounds.kind(), ErrorKind::Bounds);
        assert_eq!(
            bounds.to_string(),
            "start index 999 exceeds size of block 10.0.0.0/24"
        );
    }

    #[test]
    fn test_coercion_message() {
        let err = OperatorError::coercion(1, &Value::from("ten"));
        assert_eq!(
            err.to_string(),
            "argument #1: expected an integer, got string 'ten'"
        );
        assert_eq!(err.kind().code(), "CoercionError");

        let err = OperatorError::coercion(2, &Value::Float(1.5));
        assert_eq!(
            err.to_string(),
            "argument #2: expected an integer, got float '1.5'"
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        let kinds = [
            ErrorKind::ArgumentCount,
            ErrorKind::ArgumentType,
            ErrorKind::ReferenceResolution,
            ErrorKind::Parse,
            ErrorKind::Coercion,
            ErrorKind::Bounds,
            ErrorKind::UnknownOperator,
        ];
        let codes: std::collections::HashSet<_> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), kinds.len());
    }
}
