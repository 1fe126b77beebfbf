//! Free block search within one address-space prefix.
//!
//! A scanning first-fit allocator, not a buddy allocator. The scan order is
//! part of the observable contract: the used pool is walked largest-first
//! (address-ascending on capacity ties), and candidates of each used
//! block's canonical size are probed upward from that block's base until
//! one clears every existing subnet while staying inside the prefix.

use super::divide::divide;
use super::sort::sort_by_capacity;
use crate::models::Ipv4;

/// Find the next available canonical-sized block inside `prefix`, given the
/// subnets already carved from it. Returns `None` when the prefix has no
/// room left.
pub fn find_free_block(prefix: Ipv4, used: &[Ipv4]) -> Option<Ipv4> {
    if used.is_empty() {
        // The whole prefix is free; the first canonical-sized block at its
        // base address needs no search.
        let block = divide(prefix);
        log::debug!("prefix {prefix} is empty, taking {block}");
        return Some(block);
    }

    for pool in sort_by_capacity(used) {
        let mut candidate = divide(pool);
        while candidate.is_within(&prefix) {
            if used.iter().all(|u| !candidate.contains_or_within(u)) {
                log::debug!("found free block {candidate} in prefix {prefix}");
                return Some(candidate);
            }
            candidate = match candidate.next_block() {
                Some(next) => next,
                None => break,
            };
        }
    }

    log::debug!("no free block of any canonical size left in prefix {prefix}");
    None
}
