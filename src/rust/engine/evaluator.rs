/// Runs operator call sites against a document.
///
/// Call sites handed to `evaluate_all` must be independent of each other;
/// ordering between dependent calls is the host scheduler's business.
use super::error::OperatorError;
use super::operator::{Evaluation, OperatorRegistry, Response};
use crate::addr::RangePolicy;
use crate::language::{Argument, Cursor, ReferenceResolver};
use crate::platform::config::AppConfig;
use crate::tools::logger::Logger;
use rayon::prelude::*;

/// One directive occurrence in the document
#[derive(Debug, Clone, PartialEq)]
pub struct CallSite {
    pub location: Cursor,
    pub operator: String,
    pub args: Vec<Argument>,
}

impl CallSite {
    pub fn new(location: Cursor, operator: impl Into<String>, args: Vec<Argument>) -> Self {
        Self {
            location,
            operator: operator.into(),
            args,
        }
    }
}

pub struct Evaluator {
    registry: OperatorRegistry,
    policy: RangePolicy,
    logger: Logger,
}

impl Evaluator {
    pub fn new(registry: OperatorRegistry) -> Self {
        Self {
            registry,
            policy: RangePolicy::default(),
            logger: Logger::new(),
        }
    }

    pub fn from_config(registry: OperatorRegistry, config: &AppConfig) -> Self {
        Self {
            registry,
            policy: config.range_policy(),
            logger: Logger::with_debug(config.log.debug),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    pub fn evaluate(
        &self,
        resolver: &dyn ReferenceResolver,
        call: &CallSite,
    ) -> Result<Response, OperatorError> {
        let operator = self
            .registry
            .get(&call.operator)
            .ok_or_else(|| OperatorError::UnknownOperator(call.operator.clone()))?;

        let ev = Evaluation::new(call.location.clone(), resolver, &self.logger)
            .with_policy(self.policy);
        operator.run(&ev, &call.args)
    }

    /// Evaluate independent call sites in parallel. Results come back in
    /// input order.
    pub fn evaluate_all(
        &self,
        resolver: &dyn ReferenceResolver,
        calls: &[CallSite],
    ) -> Vec<Result<Response, OperatorError>> {
        calls
            .par_iter()
            .map(|call| self.evaluate(resolver, call))
            .collect()
    }

    /// Dependency edges for one call site; unknown operators have none.
    pub fn dependencies_of(
        &self,
        call: &CallSite,
        locations: &[Cursor],
        auto: &[Cursor],
    ) -> Vec<Cursor> {
        self.registry
            .get(&call.operator)
            .map(|op| op.dependencies(&call.args, locations, auto))
            .unwrap_or_default()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(OperatorRegistry::new())
    }
}

#[cfg(test)]
#[path = "test_evaluator.rs"]
mod tests;
