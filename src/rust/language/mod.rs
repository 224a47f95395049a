pub mod argument;
pub mod cursor;
pub mod document;
pub mod value;

pub use argument::{Argument, EnvVarError};
pub use cursor::{Cursor, CursorParseError};
pub use document::{Document, ReferenceResolver};
pub use value::Value;
