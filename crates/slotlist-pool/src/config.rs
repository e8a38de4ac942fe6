//! Pool configuration for the runtime-tagged surface.

use std::mem::size_of;

use slotlist_core::{BufferNode, ByteNode, ListError, MessageNode, Variant};

use crate::slot::Slot;

/// Largest pool a list can be bound to, in slots.
///
/// Slot indices are 16 bits wide.
pub const MAX_CAPACITY: usize = u16::MAX as usize;

/// Shape and size of a pool.
///
/// Immutable once built; [`AnyStorage::allocate`](crate::AnyStorage::allocate)
/// turns it into zeroed storage of the matching node type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Node shape held by every slot.
    pub variant: Variant,
    /// Number of slots.
    pub capacity: u16,
}

impl PoolConfig {
    /// A pool of `capacity` slots of `variant`.
    pub const fn new(variant: Variant, capacity: u16) -> Self {
        Self { variant, capacity }
    }

    /// Resolve a raw variant tag.
    ///
    /// Returns [`ListError::UnknownVariant`] for an undefined tag.
    pub fn from_tag(tag: u8, capacity: u16) -> Result<Self, ListError> {
        Ok(Self::new(Variant::from_tag(tag)?, capacity))
    }

    /// Number of slots as a `usize`.
    pub fn slots(&self) -> usize {
        usize::from(self.capacity)
    }

    /// Size of one slot in bytes, for buffer slots of `CAP` bytes.
    pub fn slot_bytes<const CAP: usize>(&self) -> usize {
        match self.variant {
            Variant::Byte => size_of::<Slot<ByteNode>>(),
            Variant::Message => size_of::<Slot<MessageNode>>(),
            Variant::Buffer => size_of::<Slot<BufferNode<CAP>>>(),
        }
    }

    /// Size of the whole pool in bytes, for buffer slots of `CAP` bytes.
    pub fn storage_bytes<const CAP: usize>(&self) -> usize {
        self.slot_bytes::<CAP>() * self.slots()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_rejects_undefined() {
        assert_eq!(
            PoolConfig::from_tag(0, 5),
            Err(ListError::UnknownVariant { tag: 0 })
        );
        assert_eq!(
            PoolConfig::from_tag(1, 5),
            Ok(PoolConfig::new(Variant::Byte, 5))
        );
    }

    #[test]
    fn buffer_storage_scales_with_cap() {
        let cfg = PoolConfig::new(Variant::Buffer, 4);
        assert!(cfg.slot_bytes::<1024>() >= 1024);
        assert_eq!(cfg.storage_bytes::<1024>(), cfg.slot_bytes::<1024>() * 4);
    }

    #[test]
    fn max_capacity_fits_u16() {
        assert_eq!(MAX_CAPACITY, 65_535);
        assert_eq!(PoolConfig::new(Variant::Byte, u16::MAX).slots(), MAX_CAPACITY);
    }
}
