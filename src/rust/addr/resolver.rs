/// Address-range resolution
///
/// Turns `(first, index, count?)` into one address or an ordered run of
/// addresses. `first` is either a block (`10.0.0.0/24`) or a bare address
/// (`10.0.0.5`):
///
/// - block: the index is bounds-checked against the block capacity and a
///   negative index counts backwards from the end of the block;
/// - bare address: the index is applied as-is, unless the policy asks for
///   strict handling.
use super::address::Address;
use super::block::Block;

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Single(String),
    Range(Vec<String>),
}

impl Resolved {
    pub fn is_single(&self) -> bool {
        matches!(self, Resolved::Single(_))
    }

    pub fn addresses(&self) -> Vec<&str> {
        match self {
            Resolved::Single(s) => vec![s.as_str()],
            Resolved::Range(list) => list.iter().map(String::as_str).collect(),
        }
    }
}

/// Knobs for how bare addresses are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangePolicy {
    /// Reject offsets that would wrap past either end of the address space
    /// when `first` has no prefix.
    pub strict_bare_addresses: bool,
}

impl RangePolicy {
    pub fn strict() -> Self {
        Self {
            strict_bare_addresses: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("unable to parse '{input}' as an IP address or CIDR block")]
    Parse { input: String },

    #[error("start index {index} exceeds size of block {block}")]
    IndexOutOfBlock { index: i64, block: String },

    #[error("start index {index} and count {count} would exceed size of block {block}")]
    RangeOutOfBlock {
        index: u128,
        count: i64,
        block: String,
    },

    #[error("offset {offset} from {address} leaves the address space")]
    OutsideAddressSpace { address: String, offset: i128 },
}

impl RangeError {
    /// True for every variant that reports a bounds violation.
    pub fn is_bounds(&self) -> bool {
        !matches!(self, RangeError::Parse { .. })
    }
}

/// Parsed form of the first argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Block(Block),
    Bare(Address),
}

impl Origin {
    /// Try block notation first, then a bare address.
    pub fn parse(input: &str) -> Result<Self, RangeError> {
        if let Ok(block) = input.parse::<Block>() {
            return Ok(Origin::Block(block));
        }

        input
            .parse::<Address>()
            .map(Origin::Bare)
            .map_err(|_| RangeError::Parse {
                input: input.to_string(),
            })
    }

    pub fn base(&self) -> Address {
        match self {
            Origin::Block(block) => block.network(),
            Origin::Bare(address) => *address,
        }
    }
}

/// Resolve with the default (lenient) policy.
pub fn resolve(first: &str, index: i64, count: Option<i64>) -> Result<Resolved, RangeError> {
    resolve_with(RangePolicy::default(), first, index, count)
}

pub fn resolve_with(
    policy: RangePolicy,
    first: &str,
    index: i64,
    count: Option<i64>,
) -> Result<Resolved, RangeError> {
    let origin = Origin::parse(first)?;
    let base = origin.base();

    // Offsets live in i128 and are applied modulo 2^width, so a start
    // beyond i128::MAX (only possible for near-/0 IPv6 blocks) still lands
    // on the right address.
    let start: i128 = match origin {
        Origin::Block(block) => {
            let capacity = block.capacity();
            if index.unsigned_abs() as u128 > capacity {
                return Err(RangeError::IndexOutOfBlock {
                    index,
                    block: first.to_string(),
                });
            }
            if index < 0 {
                block
                    .capacity_wrapping()
                    .wrapping_sub(index.unsigned_abs() as u128) as i128
            } else {
                index as i128
            }
        }
        Origin::Bare(_) => index as i128,
    };

    let offset_of = |n: i128| -> Result<Address, RangeError> {
        match origin {
            Origin::Bare(address) if policy.strict_bare_addresses => address
                .checked_add(n)
                .ok_or_else(|| RangeError::OutsideAddressSpace {
                    address: address.to_string(),
                    offset: n,
                }),
            _ => Ok(base.wrapping_add(n)),
        }
    };

    let Some(count) = count else {
        return Ok(Resolved::Single(offset_of(start)?.to_string()));
    };

    if let Origin::Block(block) = origin {
        if count > 0 {
            let whole_space = block.host_bits() == 128;
            let fits = match (start as u128).checked_add(count as u128) {
                Some(end) => whole_space || end <= block.capacity(),
                None => whole_space && (start as u128).wrapping_add(count as u128) == 0,
            };
            if !fits {
                return Err(RangeError::RangeOutOfBlock {
                    index: start as u128,
                    count,
                    block: first.to_string(),
                });
            }
        }
    }

    let mut addresses = Vec::with_capacity(count.clamp(0, 1 << 16) as usize);
    for step in 0..count.max(0) {
        addresses.push(offset_of(start.wrapping_add(step as i128))?.to_string());
    }

    Ok(Resolved::Range(addresses))
}

#[cfg(test)]
#[path = "test_resolver.rs"]
mod tests;
