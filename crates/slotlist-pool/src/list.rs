//! The pool list engine.
//!
//! [`PoolList`] binds to a caller-owned slice of [`Slot`]s and threads a
//! singly-linked chain through the occupied ones. Slot search is a linear
//! scan in index order; the chain has no back links, so operations on the
//! tail walk from the head.
//!
//! | operation              | cost          |
//! |------------------------|---------------|
//! | `find_available_slot`  | O(capacity)   |
//! | `append`               | O(capacity + len) |
//! | `prepend`              | O(capacity)   |
//! | `remove_first`         | O(1)          |
//! | `remove_last`          | O(len)        |
//! | `get_last` / `last`    | O(len)        |

use std::iter::FusedIterator;

use log::{debug, trace, warn};
use smallvec::SmallVec;
use slotlist_core::{ListError, Node, Variant};

use crate::config::MAX_CAPACITY;
use crate::slot::{Occupancy, Slot, SlotIndex};

/// Chain order as a list of slot indices.
///
/// Inline for pools of up to 16 linked nodes.
pub type Chain = SmallVec<[SlotIndex; 16]>;

/// A singly-linked list whose nodes live in a fixed pool of slots.
///
/// The pool belongs to the caller for the whole lifetime of the list; the
/// list never frees or reallocates it. The node shape `N` fixes the
/// variant, so storage of the wrong shape cannot be bound.
#[derive(Debug)]
pub struct PoolList<'a, N: Node> {
    slots: &'a mut [Slot<N>],
    head: Option<SlotIndex>,
    count: usize,
}

impl<'a, N: Node> PoolList<'a, N> {
    /// Bind to `storage` and wipe every slot to free.
    ///
    /// The pool capacity is the length of `storage`. Returns
    /// [`ListError::CapacityOverflow`] if it exceeds [`MAX_CAPACITY`].
    pub fn new(storage: &'a mut [Slot<N>]) -> Result<Self, ListError> {
        let capacity = storage.len();
        if capacity > MAX_CAPACITY {
            warn!(
                "refusing {} pool of {capacity} slots (max {MAX_CAPACITY})",
                N::VARIANT
            );
            return Err(ListError::CapacityOverflow {
                capacity,
                max: MAX_CAPACITY,
            });
        }
        let mut list = Self {
            slots: storage,
            head: None,
            count: 0,
        };
        list.wipe();
        debug!("bound {} pool of {capacity} slots", N::VARIANT);
        Ok(list)
    }

    /// Empty the list and wipe every slot, keeping the storage binding.
    pub fn reset(&mut self) {
        self.wipe();
        debug!("reset {} pool of {} slots", N::VARIANT, self.capacity());
    }

    fn wipe(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.release();
        }
        self.head = None;
        self.count = 0;
    }

    // ── Inspection ──────────────────────────────────────────────

    /// The node shape this list holds.
    pub fn variant(&self) -> Variant {
        N::VARIANT
    }

    /// Number of slots in the pool.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of linked nodes.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// First slot of the chain.
    pub fn head(&self) -> Option<SlotIndex> {
        self.head
    }

    /// The slot at `index`, free or occupied.
    pub fn slot(&self, index: SlotIndex) -> Option<&Slot<N>> {
        self.slots.get(index.get())
    }

    /// The chain successor of `index`.
    pub fn next_of(&self, index: SlotIndex) -> Option<SlotIndex> {
        self.slot(index).and_then(Slot::next)
    }

    /// The whole pool in index order.
    pub fn slots(&self) -> &[Slot<N>] {
        &*self.slots
    }

    /// Linked nodes in chain order.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            slots: &*self.slots,
            cursor: self.head,
            remaining: self.count,
        }
    }

    /// Slot indices in chain order.
    pub fn chain(&self) -> Chain {
        self.iter().map(|(index, _)| index).collect()
    }

    /// The node at the head of the chain.
    pub fn first(&self) -> Option<&N> {
        self.head.map(|i| &self.slots[i.get()].node)
    }

    /// The node at the tail of the chain.
    pub fn last(&self) -> Option<&N> {
        self.tail().map(|i| &self.slots[i.get()].node)
    }

    /// The node at the tail of the chain, optionally copied into `out`.
    ///
    /// Returns `Ok(None)` for an empty list, leaving `out` untouched.
    /// Copy-out is not defined for buffer nodes and returns
    /// [`ListError::UnsupportedVariant`].
    pub fn get_last(&self, out: Option<&mut N>) -> Result<Option<&N>, ListError> {
        let Some(last) = self.last() else {
            return Ok(None);
        };
        if let Some(out) = out {
            last.copy_into(out)?;
        }
        Ok(Some(last))
    }

    /// First free slot in index order, or `None` when the pool is full.
    pub fn find_available_slot(&self) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(Slot::is_free)
            .map(SlotIndex::from_usize)
    }

    // ── Linking ─────────────────────────────────────────────────

    /// Copy `payload` into a free slot and link it as the new tail.
    ///
    /// Returns the slot used. Fails with [`ListError::PoolExhausted`] when
    /// no slot is free, or with the node's own validation error (for
    /// buffers, [`ListError::BufferTooLarge`]); the list is unchanged on
    /// failure.
    pub fn append(&mut self, payload: N::Payload<'_>) -> Result<SlotIndex, ListError> {
        let index = self.acquire(payload)?;
        match self.tail() {
            Some(tail) => self.slots[tail.get()].next = Some(index),
            None => self.head = Some(index),
        }
        self.count += 1;
        trace!("append {} -> slot {index} (len {})", N::VARIANT, self.count);
        Ok(index)
    }

    /// Copy `payload` into a free slot and link it as the new head.
    ///
    /// On an empty list this is exactly [`append`](Self::append). Same
    /// failure modes.
    pub fn prepend(&mut self, payload: N::Payload<'_>) -> Result<SlotIndex, ListError> {
        let Some(old_head) = self.head else {
            return self.append(payload);
        };
        let index = self.acquire(payload)?;
        self.slots[index.get()].next = Some(old_head);
        self.head = Some(index);
        self.count += 1;
        trace!("prepend {} -> slot {index} (len {})", N::VARIANT, self.count);
        Ok(index)
    }

    /// Alias for [`prepend`](Self::prepend).
    pub fn push(&mut self, payload: N::Payload<'_>) -> Result<SlotIndex, ListError> {
        self.prepend(payload)
    }

    /// Alias for [`remove_first`](Self::remove_first).
    pub fn pop(&mut self) -> Result<(), ListError> {
        self.remove_first()
    }

    /// Unlink the head and return its slot to the pool.
    pub fn remove_first(&mut self) -> Result<(), ListError> {
        let head = self.nonempty_head()?;
        let slot = &mut self.slots[head.get()];
        self.head = slot.next;
        slot.release();
        self.count -= 1;
        trace!("remove_first {} <- slot {head} (len {})", N::VARIANT, self.count);
        Ok(())
    }

    /// Unlink the tail and return its slot to the pool.
    pub fn remove_last(&mut self) -> Result<(), ListError> {
        let head = self.nonempty_head()?;
        let mut prev = None;
        let mut tail = head;
        while let Some(next) = self.slots[tail.get()].next {
            prev = Some(tail);
            tail = next;
        }
        self.slots[tail.get()].release();
        match prev {
            Some(p) => self.slots[p.get()].next = None,
            None => self.head = None,
        }
        self.count -= 1;
        trace!("remove_last {} <- slot {tail} (len {})", N::VARIANT, self.count);
        Ok(())
    }

    /// Claim the first free slot and load `payload` into it.
    ///
    /// The slot comes back occupied but unlinked. Nothing changes if the
    /// pool is full or the payload is rejected.
    fn acquire(&mut self, payload: N::Payload<'_>) -> Result<SlotIndex, ListError> {
        let index = self.ensure_available()?;
        let slot = &mut self.slots[index.get()];
        slot.node.load(payload)?;
        slot.occupancy = Occupancy::Occupied;
        slot.next = None;
        Ok(index)
    }

    /// The first free slot, or [`ListError::PoolExhausted`].
    pub(crate) fn ensure_available(&self) -> Result<SlotIndex, ListError> {
        self.find_available_slot().ok_or_else(|| {
            debug!("{} pool exhausted at {} slots", N::VARIANT, self.capacity());
            ListError::PoolExhausted {
                capacity: self.capacity(),
            }
        })
    }

    fn nonempty_head(&self) -> Result<SlotIndex, ListError> {
        self.head.ok_or_else(|| {
            debug!("{} list is empty", N::VARIANT);
            ListError::EmptyList
        })
    }

    fn tail(&self) -> Option<SlotIndex> {
        let mut cursor = self.head?;
        while let Some(next) = self.slots[cursor.get()].next {
            cursor = next;
        }
        Some(cursor)
    }
}

impl<'l, N: Node> IntoIterator for &'l PoolList<'_, N> {
    type Item = (SlotIndex, &'l N);
    type IntoIter = Iter<'l, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Chain-order iterator over a [`PoolList`].
///
/// Yields each linked slot's index and node, head first.
#[derive(Clone, Debug)]
pub struct Iter<'l, N> {
    slots: &'l [Slot<N>],
    cursor: Option<SlotIndex>,
    remaining: usize,
}

impl<'l, N> Iterator for Iter<'l, N> {
    type Item = (SlotIndex, &'l N);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.cursor?;
        let slot = &self.slots[index.get()];
        self.cursor = slot.next;
        self.remaining -= 1;
        Some((index, &slot.node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N> ExactSizeIterator for Iter<'_, N> {}

impl<N> FusedIterator for Iter<'_, N> {}
