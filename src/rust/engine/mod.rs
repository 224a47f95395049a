//! Operator plumbing: the `ips` operator, dependency discovery, the
//! operator registry and the call-site evaluator.

pub mod dependencies;
pub mod error;
pub mod evaluator;
pub mod ips;
pub mod operator;

pub use dependencies::dependencies;
pub use error::{ErrorKind, OperatorError};
pub use evaluator::{CallSite, Evaluator};
pub use ips::IpsOperator;
pub use operator::{
    Evaluation, Operator, OperatorRegistry, Phase, Response, ResponseKind, Signature,
};
