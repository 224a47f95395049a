/// Operator plumbing: the trait every operator implements, the values it
/// hands back, and the registry a host builds at startup.
use super::error::OperatorError;
use super::ips::IpsOperator;
use crate::addr::RangePolicy;
use crate::language::{Argument, Cursor, ReferenceResolver, Value};
use crate::tools::logger::Logger;
use anyhow::Result;
use std::collections::HashMap;

/// Host evaluation pass an operator runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Merge,
    Param,
    Eval,
}

/// Static capability declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub min_args: usize,
    /// `None` for variadic operators
    pub max_args: Option<usize>,
    /// No side effects; identical inputs give identical output
    pub pure: bool,
}

impl Signature {
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min_args && self.max_args.is_none_or(|max| count <= max)
    }

    pub fn describe(&self) -> String {
        match self.max_args {
            Some(max) if max == self.min_args => format!("exactly {}", max),
            Some(max) => format!("{} to {}", self.min_args, max),
            None => format!("at least {}", self.min_args),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Substitute the call site with the value
    Replace,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub kind: ResponseKind,
    pub value: Value,
}

impl Response {
    pub fn replace(value: Value) -> Self {
        Self {
            kind: ResponseKind::Replace,
            value,
        }
    }
}

/// Everything an operator may look at while running one call site
pub struct Evaluation<'a> {
    /// Location of the call site
    pub here: Cursor,
    pub resolver: &'a dyn ReferenceResolver,
    pub policy: RangePolicy,
    pub logger: &'a Logger,
}

impl<'a> Evaluation<'a> {
    pub fn new(here: Cursor, resolver: &'a dyn ReferenceResolver, logger: &'a Logger) -> Self {
        Self {
            here,
            resolver,
            policy: RangePolicy::default(),
            logger,
        }
    }

    pub fn with_policy(mut self, policy: RangePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Trait for pluggable operators
pub trait Operator: Send + Sync {
    /// Name used at call sites, e.g. `ips`
    fn name(&self) -> &str;

    fn signature(&self) -> Signature;

    fn phase(&self) -> Phase;

    /// One-time initialisation before any call runs
    fn setup(&mut self) -> Result<()> {
        Ok(())
    }

    /// Locations that must be evaluated before this call can run
    fn dependencies(&self, args: &[Argument], locations: &[Cursor], auto: &[Cursor])
    -> Vec<Cursor>;

    fn run(&self, ev: &Evaluation<'_>, args: &[Argument]) -> Result<Response, OperatorError>;
}

/// Operator registry
pub struct OperatorRegistry {
    operators: HashMap<String, Box<dyn Operator>>,
}

impl OperatorRegistry {
    /// Registry with every built-in operator
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(IpsOperator));
        registry
    }

    pub fn empty() -> Self {
        Self {
            operators: HashMap::new(),
        }
    }

    pub fn register(&mut self, operator: Box<dyn Operator>) {
        self.operators.insert(operator.name().to_string(), operator);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Operator> {
        self.operators.get(name).map(|op| op.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn setup_all(&mut self) -> Result<()> {
        for operator in self.operators.values_mut() {
            operator.setup()?;
        }
        Ok(())
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "test_operator.rs"]
mod tests;
