//! Singly-linked lists over fixed, caller-owned node pools.
//!
//! Nodes are drawn from storage the caller declares up front (inline, in a
//! static, or boxed), so allocation is deterministic and running out of
//! slots is an ordinary error value.
//!
//! ```
//! use slotlist::prelude::*;
//!
//! let mut storage = Slot::<ByteNode>::array::<3>();
//! let mut list = PoolList::new(&mut storage)?;
//! list.append(1)?;
//! list.append(2)?;
//! list.prepend(0)?;
//! list.append(3).unwrap_err(); // pool exhausted
//!
//! let values: Vec<u8> = list.iter().map(|(_, n)| n.data).collect();
//! assert_eq!(values, [0, 1, 2]);
//! # Ok::<(), ListError>(())
//! ```
//!
//! # Crate structure
//!
//! | Module | Source crate | Contents |
//! |--------|-------------|----------|
//! | [`types`] | `slotlist-core` | Node shapes, variant tag, serial packet, errors |
//! | [`pool`] | `slotlist-pool` | The list engine, slots, tagged surface, locking |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod prelude;

/// Node shapes, variant tags, and the error taxonomy (`slotlist-core`).
pub use slotlist_core as types;

/// The pool list engine, slots, the tagged surface and the locked
/// wrapper (`slotlist-pool`).
///
/// Most users only need what the [`prelude`] re-exports.
pub use slotlist_pool as pool;

pub use slotlist_core::{ListError, Variant};
pub use slotlist_pool::{AnyPoolList, LockedPoolList, PoolList, Slot};
