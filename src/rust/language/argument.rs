/// Operator call arguments, as handed over by the host's call-syntax parser
use super::cursor::Cursor;
use super::document::ReferenceResolver;
use super::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A value written inline at the call site
    Literal(Value),
    /// A path to another location in the document
    Reference(Cursor),
    /// `$NAME`, read from the process environment
    EnvVar(String),
    /// `a || b`: `a` if it can be resolved, otherwise `b`
    Or(Box<Argument>, Box<Argument>),
    /// A nested operator call
    Call { name: String, args: Vec<Argument> },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("environment variable ${name} is not set")]
pub struct EnvVarError {
    pub name: String,
}

impl Argument {
    pub fn literal(value: impl Into<Value>) -> Self {
        Argument::Literal(value.into())
    }

    pub fn reference(path: Cursor) -> Self {
        Argument::Reference(path)
    }

    pub fn or(left: Argument, right: Argument) -> Self {
        Argument::Or(Box::new(left), Box::new(right))
    }

    pub fn as_reference(&self) -> Option<&Cursor> {
        match self {
            Argument::Reference(path) => Some(path),
            _ => None,
        }
    }

    /// Reduce environment variables and `||` alternatives to a plain
    /// literal or reference. Other kinds come back untouched.
    pub fn simplify(&self, resolver: &dyn ReferenceResolver) -> Result<Argument, EnvVarError> {
        self.simplify_with(resolver, &|name: &str| std::env::var(name).ok())
    }

    pub fn simplify_with(
        &self,
        resolver: &dyn ReferenceResolver,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Argument, EnvVarError> {
        match self {
            Argument::EnvVar(name) => env(name)
                .map(|v| Argument::Literal(Value::String(v)))
                .ok_or_else(|| EnvVarError { name: name.clone() }),
            Argument::Or(left, right) => match left.simplify_with(resolver, env) {
                Ok(Argument::Reference(path)) if resolver.resolve_reference(&path).is_err() => {
                    right.simplify_with(resolver, env)
                }
                Ok(resolved) => Ok(resolved),
                Err(_) => right.simplify_with(resolver, env),
            },
            other => Ok(other.clone()),
        }
    }
}

#[cfg(test)]
#[path = "test_argument.rs"]
mod tests;
