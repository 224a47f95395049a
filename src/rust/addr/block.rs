use super::address::Address;
use std::fmt;
use std::str::FromStr;

/// An address block in `address/prefix` notation.
///
/// The stored address is always the network address: host bits are cleared
/// on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    network: Address,
    prefix: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockParseError {
    #[error("missing '/' prefix separator")]
    MissingPrefix,
    #[error("invalid address '{0}'")]
    InvalidAddress(String),
    #[error("invalid prefix length '{0}'")]
    InvalidPrefix(String),
    #[error("prefix length {prefix} exceeds address width {width}")]
    PrefixTooLong { prefix: u32, width: u32 },
}

impl Block {
    pub fn new(address: Address, prefix: u32) -> Result<Self, BlockParseError> {
        let width = address.width();
        if prefix > width {
            return Err(BlockParseError::PrefixTooLong { prefix, width });
        }

        Ok(Self {
            network: address.mask(prefix),
            prefix,
        })
    }

    pub fn network(&self) -> Address {
        self.network
    }

    pub fn prefix(&self) -> u32 {
        self.prefix
    }

    /// Bits left for addressing inside the block
    pub fn host_bits(&self) -> u32 {
        self.network.width() - self.prefix
    }

    /// Number of addresses in the block, edges included.
    ///
    /// A /0 IPv6 block holds 2^128 addresses; that saturates to `u128::MAX`.
    pub fn capacity(&self) -> u128 {
        1u128.checked_shl(self.host_bits()).unwrap_or(u128::MAX)
    }

    /// Capacity reduced modulo 2^128 (zero for a /0 IPv6 block).
    pub(crate) fn capacity_wrapping(&self) -> u128 {
        1u128.checked_shl(self.host_bits()).unwrap_or(0)
    }
}

impl FromStr for Block {
    type Err = BlockParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = s.split_once('/').ok_or(BlockParseError::MissingPrefix)?;

        let address: Address = addr
            .parse()
            .map_err(|_| BlockParseError::InvalidAddress(addr.to_string()))?;

        // Only plain decimal digits; no sign, no whitespace.
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BlockParseError::InvalidPrefix(prefix.to_string()));
        }
        let prefix: u32 = prefix
            .parse()
            .map_err(|_| BlockParseError::InvalidPrefix(prefix.to_string()))?;

        Block::new(address, prefix)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

#[cfg(test)]
#[path = "test_block.rs"]
mod tests;
