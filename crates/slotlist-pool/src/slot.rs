//! Pool slots and slot indices.
//!
//! A [`Slot`] is one element of a pool. It carries the common header every
//! node shape shares (the link to the next slot in the chain and the
//! occupancy flag) followed by the node itself.

use std::fmt;

use slotlist_core::Node;

/// Position of a slot within its pool.
///
/// Only meaningful for the pool that produced it, and only until the next
/// mutating call on that pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub(crate) u16);

impl SlotIndex {
    /// Index into the pool slice.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Caller guarantees `index <= MAX_CAPACITY`; pools are checked for
    /// that at construction.
    pub(crate) fn from_usize(index: usize) -> Self {
        Self(index as u16)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a slot currently holds a linked node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Occupancy {
    /// Available for the next insert.
    #[default]
    Free,
    /// Holds a node reachable from the chain head.
    Occupied,
}

/// One element of a pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot<N> {
    pub(crate) next: Option<SlotIndex>,
    pub(crate) occupancy: Occupancy,
    pub(crate) node: N,
}

impl<N: Node> Slot<N> {
    /// A free slot holding the vacant node.
    pub fn vacant() -> Self {
        Self {
            next: None,
            occupancy: Occupancy::Free,
            node: N::vacant(),
        }
    }

    /// A fixed-size array of free slots, for pools declared inline or in a
    /// static.
    pub fn array<const K: usize>() -> [Self; K] {
        std::array::from_fn(|_| Self::vacant())
    }

    /// A heap block of `capacity` free slots.
    pub fn boxed(capacity: usize) -> Box<[Self]> {
        (0..capacity).map(|_| Self::vacant()).collect()
    }

    /// The next slot in the chain, if any.
    pub fn next(&self) -> Option<SlotIndex> {
        self.next
    }

    /// Current occupancy.
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Whether the slot is available.
    pub fn is_free(&self) -> bool {
        self.occupancy == Occupancy::Free
    }

    /// The node stored in this slot.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Return the slot to the free pool, wiping its node.
    pub(crate) fn release(&mut self) {
        self.next = None;
        self.occupancy = Occupancy::Free;
        self.node.vacate();
    }
}

impl<N: Node> Default for Slot<N> {
    fn default() -> Self {
        Self::vacant()
    }
}
