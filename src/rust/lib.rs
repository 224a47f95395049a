pub mod addr;
pub mod engine;
pub mod language;
pub mod platform;
pub mod tools;

pub use crate::addr::{RangeError, RangePolicy, Resolved, resolve, resolve_with};
pub use crate::engine::{dependencies, IpsOperator, Operator, OperatorError, OperatorRegistry};
pub use crate::language::{Argument, Cursor, Document, ReferenceResolver, Value};
