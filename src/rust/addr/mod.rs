//! Address arithmetic: fixed-width addresses, blocks and range resolution.

pub mod address;
pub mod block;
pub mod resolver;

pub use address::{Address, Family};
pub use block::{Block, BlockParseError};
pub use resolver::{RangeError, RangePolicy, Resolved, resolve, resolve_with};
