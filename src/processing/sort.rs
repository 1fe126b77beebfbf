//! Network pool ordering.
//!
//! Both orderings are total and deterministic, which makes the block a
//! given allocation request receives reproducible. Each function returns a
//! new sequence and leaves its input untouched.

use crate::models::Ipv4;
use itertools::Itertools;
use std::cmp::Reverse;

/// Sort ascending by numeric network address.
///
/// Address ties (impossible in a valid non-overlapping pool) break by
/// shorter prefix first.
pub fn sort_by_address(networks: &[Ipv4]) -> Vec<Ipv4> {
    networks
        .iter()
        .copied()
        .sorted_by_key(|n| (n.numeric_address(), n.mask))
        .collect()
}

/// Sort descending by host capacity; capacity ties break ascending by
/// numeric network address.
pub fn sort_by_capacity(networks: &[Ipv4]) -> Vec<Ipv4> {
    networks
        .iter()
        .copied()
        .sorted_by_key(|n| (Reverse(n.host_capacity()), n.numeric_address()))
        .collect()
}
