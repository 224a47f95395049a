/// Fixed-width address arithmetic
///
/// An address is treated as one unsigned integer (32 bits for IPv4, 128 bits
/// for IPv6). Addition carries across the whole width and wraps silently at
/// the top or bottom of the address space.
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of bits in an address of this family
    pub fn width(self) -> u32 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Mask covering every bit of the family's width
    pub fn full_mask(self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }

    /// Largest representable address value
    pub fn max_value(self) -> u128 {
        self.full_mask()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    value: u128,
    family: Family,
}

impl Address {
    pub fn new(family: Family, value: u128) -> Self {
        Self {
            value: value & family.full_mask(),
            family,
        }
    }

    pub fn v4(addr: Ipv4Addr) -> Self {
        Self::new(Family::V4, u32::from(addr) as u128)
    }

    pub fn v6(addr: Ipv6Addr) -> Self {
        Self::new(Family::V6, u128::from(addr))
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    pub fn width(&self) -> u32 {
        self.family.width()
    }

    /// Clear every bit past the first `prefix` bits.
    pub fn mask(&self, prefix: u32) -> Self {
        let width = self.width();
        let prefix = prefix.min(width);
        let host_bits = width - prefix;
        let host_mask = if host_bits >= 128 {
            u128::MAX
        } else {
            (1u128 << host_bits) - 1
        };
        Self::new(self.family, self.value & !host_mask)
    }

    /// Signed addition modulo 2^width.
    pub fn wrapping_add(&self, offset: i128) -> Self {
        Self::new(self.family, self.value.wrapping_add(offset as u128))
    }

    /// Signed addition that reports leaving the address space instead of wrapping.
    pub fn checked_add(&self, offset: i128) -> Option<Self> {
        let result = if offset >= 0 {
            self.value.checked_add(offset as u128)?
        } else {
            self.value.checked_sub(offset.unsigned_abs())?
        };

        if result > self.family.max_value() {
            return None;
        }

        Some(Self::new(self.family, result))
    }

    pub fn to_ip(&self) -> IpAddr {
        match self.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(self.value as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(self.value)),
        }
    }

    /// Network-order bytes (4 or 16 of them)
    pub fn octets(&self) -> Vec<u8> {
        match self.to_ip() {
            IpAddr::V4(ip) => ip.octets().to_vec(),
            IpAddr::V6(ip) => ip.octets().to_vec(),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Address::v4(v4),
            IpAddr::V6(v6) => Address::v6(v6),
        }
    }
}

impl FromStr for Address {
    type Err = std::net::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<IpAddr>().map(Address::from)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ip())
    }
}

#[cfg(test)]
#[path = "test_address.rs"]
mod tests;
