//! IPv4 CIDR network value type.
//!
//! The allocator passes these around by value; all range math is done on
//! the 32-bit address space, with the prefix length validated at parse time.

use crate::error::{Error, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub const MAX_PREFIX_LEN: u8 = 32;

/// An IPv4 network in CIDR notation: `addr/mask`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    pub addr: Ipv4Addr,
    pub mask: u8,
}

/// Bit mask selecting the network part of an address for a prefix length.
fn prefix_bits(len: u8) -> u32 {
    // Shift through u64 so len == 0 does not overflow the shift count.
    let right_len = MAX_PREFIX_LEN - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

impl Ipv4 {
    /// Parse `"a.b.c.d/p"` into a network.
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let invalid = || Error::InvalidCidrFormat {
            cidr: addr_cidr.to_string(),
        };

        let trimmed = addr_cidr.trim();
        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() != 2 {
            return Err(invalid());
        }
        let addr = Ipv4Addr::from_str(parts[0]).map_err(|_| invalid())?;
        let mask = u8::from_str(parts[1]).map_err(|_| invalid())?;
        if mask > MAX_PREFIX_LEN {
            return Err(invalid());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// First address of the network (the address with host bits cleared).
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & prefix_bits(self.mask))
    }

    /// Last address of the network (the broadcast address).
    pub fn hi(&self) -> Ipv4Addr {
        let bits = prefix_bits(self.mask);
        Ipv4Addr::from((u32::from(self.addr) & bits) | !bits)
    }

    /// Network address as an unsigned integer; the address-ordering key.
    pub fn numeric_address(&self) -> u32 {
        u32::from(self.lo())
    }

    /// Number of addresses covered: `2^(32 - mask)`; the size-ordering key.
    pub fn host_capacity(&self) -> u64 {
        1u64 << (MAX_PREFIX_LEN - self.mask)
    }

    /// Check if a single address falls inside this network.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    /// True iff this network's range is a subset of `other`'s.
    pub fn is_within(&self, other: &Ipv4) -> bool {
        other.lo() <= self.lo() && self.hi() <= other.hi()
    }

    /// Containment in either direction. Two valid CIDR blocks are either
    /// disjoint or nested, so this is exactly the "in use" collision test
    /// the allocator applies to candidate blocks.
    pub fn contains_or_within(&self, other: &Ipv4) -> bool {
        self.is_within(other) || other.is_within(self)
    }

    /// Same network base, forced prefix length. Only used to shrink a block
    /// (`len >= self.mask`), so the base stays aligned.
    pub fn with_prefix(&self, len: u8) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: len,
        }
    }

    /// The block of the same size immediately after this one, or `None` at
    /// the top of the 32-bit address space.
    pub fn next_block(&self) -> Option<Ipv4> {
        let next = u64::from(self.numeric_address()) + self.host_capacity();
        if next > u64::from(u32::MAX) {
            return None;
        }
        Some(Ipv4 {
            addr: Ipv4Addr::from(next as u32),
            mask: self.mask,
        })
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|_| de::Error::custom(format!("invalid CIDR format: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let net = Ipv4::new("10.2.0.0/16").unwrap();
        assert_eq!(net.addr, Ipv4Addr::new(10, 2, 0, 0));
        assert_eq!(net.mask, 16);
        assert_eq!(net.to_string(), "10.2.0.0/16");

        // Whitespace is tolerated, the address itself is not rewritten
        let net = Ipv4::new(" 192.168.1.0/24 ").unwrap();
        assert_eq!(net.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_new_invalid() {
        for bad in ["10.0.0.0", "10.0.0.0/33", "10.0.0/24", "abc/16", "10.0.0.0/x", ""] {
            let err = Ipv4::new(bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidCidrFormat { ref cidr } if cidr == bad),
                "expected InvalidCidrFormat for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_lo_hi() {
        let net = Ipv4::new("10.2.4.7/22").unwrap();
        assert_eq!(net.lo(), Ipv4Addr::new(10, 2, 4, 0));
        assert_eq!(net.hi(), Ipv4Addr::new(10, 2, 7, 255));

        let all = Ipv4::new("0.0.0.0/0").unwrap();
        assert_eq!(all.lo(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(all.hi(), Ipv4Addr::new(255, 255, 255, 255));

        let host = Ipv4::new("10.0.0.1/32").unwrap();
        assert_eq!(host.lo(), host.hi());
    }

    #[test]
    fn test_host_capacity() {
        assert_eq!(Ipv4::new("10.0.0.0/16").unwrap().host_capacity(), 65_536);
        assert_eq!(Ipv4::new("10.0.0.0/24").unwrap().host_capacity(), 256);
        assert_eq!(Ipv4::new("10.0.0.0/29").unwrap().host_capacity(), 8);
        assert_eq!(Ipv4::new("10.0.0.0/32").unwrap().host_capacity(), 1);
        assert_eq!(Ipv4::new("0.0.0.0/0").unwrap().host_capacity(), 1u64 << 32);
    }

    #[test]
    fn test_contains_address() {
        let net = Ipv4::new("10.2.0.0/20").unwrap();
        assert!(net.contains(Ipv4Addr::new(10, 2, 0, 0)));
        assert!(net.contains(Ipv4Addr::new(10, 2, 15, 255)));
        assert!(!net.contains(Ipv4Addr::new(10, 2, 16, 0)));
    }

    #[test]
    fn test_containment_either_direction() {
        let space = Ipv4::new("10.2.0.0/16").unwrap();
        let subnet = Ipv4::new("10.2.4.0/24").unwrap();
        let other = Ipv4::new("10.3.0.0/24").unwrap();

        assert!(subnet.is_within(&space));
        assert!(!space.is_within(&subnet));
        assert!(subnet.contains_or_within(&space));
        assert!(space.contains_or_within(&subnet));
        assert!(!subnet.contains_or_within(&other));

        // A block collides with itself
        assert!(subnet.contains_or_within(&subnet));
    }

    #[test]
    fn test_with_prefix() {
        let space = Ipv4::new("10.2.0.0/16").unwrap();
        let cut = space.with_prefix(20);
        assert_eq!(cut.to_string(), "10.2.0.0/20");
        assert!(cut.is_within(&space));
    }

    #[test]
    fn test_next_block() {
        let net = Ipv4::new("10.2.0.0/24").unwrap();
        assert_eq!(net.next_block().unwrap().to_string(), "10.2.1.0/24");

        let net = Ipv4::new("10.2.255.0/24").unwrap();
        assert_eq!(net.next_block().unwrap().to_string(), "10.3.0.0/24");

        let net = Ipv4::new("40.23.19.0/30").unwrap();
        assert_eq!(net.next_block().unwrap().to_string(), "40.23.19.4/30");

        // Top of the address space
        let net = Ipv4::new("255.255.255.0/24").unwrap();
        assert!(net.next_block().is_none());
    }

    #[test]
    fn test_ordering() {
        let a = Ipv4::new("10.0.0.0/24").unwrap();
        let b = Ipv4::new("10.0.1.0/24").unwrap();
        let c = Ipv4::new("10.0.0.0/24").unwrap();
        assert!(a < b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_serde_round_trip() {
        let net = Ipv4::new("10.2.4.0/28").unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, "\"10.2.4.0/28\"");
        let back: Ipv4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);

        let bad: std::result::Result<Ipv4, _> = serde_json::from_str("\"10.2.4.0\"");
        assert!(bad.is_err(), "bare address without prefix must not parse");
    }
}
