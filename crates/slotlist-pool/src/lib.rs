//! Singly-linked list over a fixed, caller-owned pool of node slots.
//!
//! The engine never allocates: every node lives in a slot of the storage
//! the caller hands to [`PoolList::new`], and running out of free slots is
//! an ordinary [`ListError::PoolExhausted`] return rather than a panic.
//!
//! # Architecture
//!
//! ```text
//! PoolList<'a, N: Node>
//! ├── &'a mut [Slot<N>]        caller-owned pool, one shape per list
//! │   └── Slot { next, occupancy, node }
//! ├── head: Option<SlotIndex>  first slot of the chain
//! └── count                    slots reachable from head
//!
//! AnyPoolList      runtime-tagged wrapper over the three typed lists
//! LockedPoolList   spin-lock wrapper for callers that share a list
//! ```
//!
//! # Invariants
//!
//! - `0 <= len() <= capacity()`.
//! - Exactly `len()` slots are [`Occupancy::Occupied`], and those are the
//!   slots reachable from the head.
//! - Every free slot holds the vacant node value.
//!
//! Failed operations leave the list untouched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod any;
pub mod config;
mod dump;
pub mod list;
pub mod locked;
pub mod slot;

pub use any::{AnyNode, AnyNodeRef, AnyPoolList, AnyStorage, Payload};
pub use config::{PoolConfig, MAX_CAPACITY};
pub use list::{Chain, Iter, PoolList};
pub use locked::LockedPoolList;
pub use slot::{Occupancy, Slot, SlotIndex};

pub use slotlist_core::{
    BufferNode, ByteNode, ListError, MessageNode, Node, SerialPacket, Timestamp, Variant,
    ITEM_BUF_MAX_SIZE,
};
