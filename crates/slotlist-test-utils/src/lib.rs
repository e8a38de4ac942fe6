//! Test fixtures and invariant checks for slotlist development.
//!
//! Provides [`audit`], which checks the occupancy/chain partition of a
//! list, plus helpers that read list contents back in chain order.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashSet;

use slotlist_core::{ByteNode, Node};
use slotlist_pool::{Occupancy, PoolList};

/// Check every structural invariant of `list`.
///
/// - `len() <= capacity()`
/// - the chain from the head visits exactly `len()` distinct slots
/// - every visited slot is occupied, every other slot is free and vacant
/// - the tail has no successor
///
/// Returns a description of the first violation found.
pub fn audit<N: Node + PartialEq>(list: &PoolList<'_, N>) -> Result<(), String> {
    if list.len() > list.capacity() {
        return Err(format!(
            "len {} exceeds capacity {}",
            list.len(),
            list.capacity()
        ));
    }

    let mut reachable = HashSet::new();
    let mut cursor = list.head();
    while let Some(index) = cursor {
        if !reachable.insert(index.get()) {
            return Err(format!("cycle through slot {index}"));
        }
        if reachable.len() > list.capacity() {
            return Err("chain longer than pool".into());
        }
        let slot = list
            .slot(index)
            .ok_or_else(|| format!("chain leaves pool at slot {index}"))?;
        if slot.occupancy() != Occupancy::Occupied {
            return Err(format!("free slot {index} is linked"));
        }
        cursor = slot.next();
    }

    if reachable.len() != list.len() {
        return Err(format!(
            "chain has {} nodes, len is {}",
            reachable.len(),
            list.len()
        ));
    }

    let vacant = N::vacant();
    for (i, slot) in list.slots().iter().enumerate() {
        if reachable.contains(&i) {
            continue;
        }
        if slot.occupancy() != Occupancy::Free {
            return Err(format!("slot {i} is occupied but unreachable"));
        }
        if slot.next().is_some() {
            return Err(format!("free slot {i} still has a link"));
        }
        if *slot.node() != vacant {
            return Err(format!("free slot {i} holds stale data"));
        }
    }
    Ok(())
}

/// Byte values in chain order.
pub fn byte_values(list: &PoolList<'_, ByteNode>) -> Vec<u8> {
    list.iter().map(|(_, n)| n.data).collect()
}

/// Number of slots marked occupied.
pub fn occupied_slots<N: Node>(list: &PoolList<'_, N>) -> usize {
    list.slots().iter().filter(|s| !s.is_free()).count()
}
