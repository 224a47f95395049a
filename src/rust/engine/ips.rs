/// `(( ips <ip-or-cidr> <index> [count] ))`
///
/// Usage:
/// - `(( ips "10.0.0.0/24" 5 ))` → `10.0.0.5`
/// - `(( ips "10.0.0.0/24" -1 ))` → `10.0.0.255`
/// - `(( ips meta.net 0 3 ))` → `[10.0.0.0, 10.0.0.1, 10.0.0.2]`
use super::dependencies::dependencies;
use super::error::OperatorError;
use super::operator::{Evaluation, Operator, Phase, Response, Signature};
use crate::addr::{Resolved, resolve_with};
use crate::language::{Argument, Cursor, Value};

pub struct IpsOperator;

impl Operator for IpsOperator {
    fn name(&self) -> &str {
        "ips"
    }

    fn signature(&self) -> Signature {
        Signature {
            min_args: 2,
            max_args: Some(3),
            pure: true,
        }
    }

    fn phase(&self) -> Phase {
        Phase::Eval
    }

    fn dependencies(&self, args: &[Argument], locations: &[Cursor], auto: &[Cursor]) -> Vec<Cursor> {
        dependencies(args, locations, auto)
    }

    fn run(&self, ev: &Evaluation<'_>, args: &[Argument]) -> Result<Response, OperatorError> {
        ev.logger.debug(format!("running (( ips ... )) operation at $.{}", ev.here));
        let result = self.evaluate(ev, args);
        ev.logger.debug(format!("done with (( ips ... )) operation at $.{}", ev.here));
        result
    }
}

impl IpsOperator {
    fn evaluate(&self, ev: &Evaluation<'_>, args: &[Argument]) -> Result<Response, OperatorError> {
        let signature = self.signature();
        if !signature.accepts(args.len()) {
            return Err(OperatorError::ArgumentCount {
                operator: self.name().to_string(),
                expected: signature.describe(),
                found: args.len(),
            });
        }

        let vals = args
            .iter()
            .enumerate()
            .map(|(i, arg)| resolve_argument(ev, i, arg))
            .collect::<Result<Vec<_>, _>>()?;

        let first = match &vals[0] {
            Value::String(s) => s.as_str(),
            other => {
                return Err(OperatorError::ArgumentType {
                    index: 0,
                    message: format!(
                        "expected an IP address or CIDR block string, got a {}",
                        other.type_name()
                    ),
                });
            }
        };
        let index = integer_argument(1, &vals[1])?;
        let count = vals.get(2).map(|v| integer_argument(2, v)).transpose()?;

        let resolved =
            resolve_with(ev.policy, first, index, count).map_err(OperatorError::from_range)?;

        let value = match resolved {
            Resolved::Single(addr) => Value::String(addr),
            Resolved::Range(list) => Value::Sequence(list.into_iter().map(Value::String).collect()),
        };

        Ok(Response::replace(value))
    }
}

/// Turn one argument into a concrete value.
fn resolve_argument(ev: &Evaluation<'_>, i: usize, arg: &Argument) -> Result<Value, OperatorError> {
    let logger = ev.logger;

    let arg = arg.simplify(ev.resolver).map_err(|e| {
        logger.debug(format!("     [{}]: resolution failed\n    error: {}", i, e));
        OperatorError::ReferenceResolution {
            index: i,
            path: format!("${}", e.name),
            message: e.to_string(),
        }
    })?;

    match arg {
        Argument::Literal(value) => {
            logger.debug(format!("  arg[{}]: found literal {:?}", i, value));
            Ok(value)
        }
        Argument::Reference(path) => {
            logger.debug(format!("  arg[{}]: trying to resolve reference $.{}", i, path));
            ev.resolver.resolve_reference(&path).map_err(|e| {
                logger.debug(format!("     [{}]: resolution failed\n    error: {}", i, e));
                OperatorError::ReferenceResolution {
                    index: i,
                    path: path.to_string(),
                    message: e.to_string(),
                }
            })
        }
        other => {
            logger.debug(format!("  arg[{}]: I don't know what to do with {:?}", i, other));
            Err(OperatorError::ArgumentType {
                index: i,
                message: "ips operator only accepts literals and key reference arguments"
                    .to_string(),
            })
        }
    }
}

fn integer_argument(index: usize, value: &Value) -> Result<i64, OperatorError> {
    if !value.is_scalar() {
        return Err(OperatorError::ArgumentType {
            index,
            message: format!("expected a scalar, got a {}", value.type_name()),
        });
    }
    value
        .as_integer()
        .ok_or_else(|| OperatorError::coercion(index, value))
}

#[cfg(test)]
#[path = "test_ips.rs"]
mod tests;
