//! Runtime-tagged surface over the three typed lists.
//!
//! Callers that carry the node shape as a raw tag byte, and hand payloads
//! around as optional values with an optional length, go through
//! [`AnyPoolList`]. It checks the tag and the payload shape against the
//! bound storage, then dispatches to the typed [`PoolList`].

use std::fmt;

use log::warn;
use slotlist_core::{
    BufferNode, ByteNode, ListError, MessageNode, Node, Variant, ITEM_BUF_MAX_SIZE,
};

use crate::config::PoolConfig;
use crate::list::PoolList;
use crate::slot::{Slot, SlotIndex};

/// Payload for an insert on the tagged surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload<'p> {
    /// For byte lists.
    Byte(u8),
    /// For message lists; copied whole.
    Message(&'p MessageNode),
    /// For buffer lists; the insert's length selects the prefix to copy.
    Bytes(&'p [u8]),
}

impl Payload<'_> {
    /// The variant this payload belongs to.
    pub fn variant(&self) -> Variant {
        match self {
            Self::Byte(_) => Variant::Byte,
            Self::Message(_) => Variant::Message,
            Self::Bytes(_) => Variant::Buffer,
        }
    }
}

/// An owned node of any shape, used as a copy-out target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyNode<const CAP: usize = ITEM_BUF_MAX_SIZE> {
    /// A byte node.
    Byte(ByteNode),
    /// A message node.
    Message(MessageNode),
    /// A buffer node, boxed to keep the enum small.
    Buffer(Box<BufferNode<CAP>>),
}

impl<const CAP: usize> AnyNode<CAP> {
    /// The vacant node of `variant`.
    pub fn vacant(variant: Variant) -> Self {
        match variant {
            Variant::Byte => Self::Byte(ByteNode::vacant()),
            Variant::Message => Self::Message(MessageNode::vacant()),
            Variant::Buffer => Self::Buffer(Box::default()),
        }
    }

    /// The variant of this node.
    pub fn variant(&self) -> Variant {
        match self {
            Self::Byte(_) => Variant::Byte,
            Self::Message(_) => Variant::Message,
            Self::Buffer(_) => Variant::Buffer,
        }
    }
}

/// A borrowed node of any shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnyNodeRef<'l, const CAP: usize = ITEM_BUF_MAX_SIZE> {
    /// A byte node.
    Byte(&'l ByteNode),
    /// A message node.
    Message(&'l MessageNode),
    /// A buffer node.
    Buffer(&'l BufferNode<CAP>),
}

impl<const CAP: usize> AnyNodeRef<'_, CAP> {
    /// The variant of this node.
    pub fn variant(&self) -> Variant {
        match self {
            Self::Byte(_) => Variant::Byte,
            Self::Message(_) => Variant::Message,
            Self::Buffer(_) => Variant::Buffer,
        }
    }
}

impl<const CAP: usize> fmt::Display for AnyNodeRef<'_, CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(n) => fmt::Display::fmt(n, f),
            Self::Message(n) => fmt::Display::fmt(n, f),
            Self::Buffer(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// Caller-owned slot storage of a shape chosen at runtime.
#[derive(Debug)]
pub enum AnyStorage<const CAP: usize = ITEM_BUF_MAX_SIZE> {
    /// Byte slots.
    Byte(Box<[Slot<ByteNode>]>),
    /// Message slots.
    Message(Box<[Slot<MessageNode>]>),
    /// Buffer slots of `CAP` bytes each.
    Buffer(Box<[Slot<BufferNode<CAP>>]>),
}

impl<const CAP: usize> AnyStorage<CAP> {
    /// Zeroed storage for `config`.
    pub fn allocate(config: &PoolConfig) -> Self {
        let n = config.slots();
        match config.variant {
            Variant::Byte => Self::Byte(Slot::boxed(n)),
            Variant::Message => Self::Message(Slot::boxed(n)),
            Variant::Buffer => Self::Buffer(Slot::boxed(n)),
        }
    }

    /// The node shape of these slots.
    pub fn variant(&self) -> Variant {
        match self {
            Self::Byte(_) => Variant::Byte,
            Self::Message(_) => Variant::Message,
            Self::Buffer(_) => Variant::Buffer,
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        match self {
            Self::Byte(s) => s.len(),
            Self::Message(s) => s.len(),
            Self::Buffer(s) => s.len(),
        }
    }
}

#[derive(Clone, Copy)]
enum End {
    Front,
    Back,
}

fn insert_at<N: Node>(
    list: &mut PoolList<'_, N>,
    end: End,
    payload: N::Payload<'_>,
) -> Result<SlotIndex, ListError> {
    match end {
        End::Front => list.prepend(payload),
        End::Back => list.append(payload),
    }
}

fn mismatch(expected: Variant, found: Variant) -> ListError {
    warn!("variant mismatch: {expected} list given {found}");
    ListError::VariantMismatch { expected, found }
}

/// A pool list whose node shape was picked by a runtime tag.
#[derive(Debug)]
pub enum AnyPoolList<'a, const CAP: usize = ITEM_BUF_MAX_SIZE> {
    /// Bound to byte slots.
    Byte(PoolList<'a, ByteNode>),
    /// Bound to message slots.
    Message(PoolList<'a, MessageNode>),
    /// Bound to buffer slots.
    Buffer(PoolList<'a, BufferNode<CAP>>),
}

impl<'a, const CAP: usize> AnyPoolList<'a, CAP> {
    /// Bind a list of variant `tag` to `storage`, wiping every slot.
    ///
    /// Fails with [`ListError::UnknownVariant`] if `tag` names no variant,
    /// and with [`ListError::VariantMismatch`] if `storage` holds another
    /// shape.
    pub fn bind(tag: u8, storage: &'a mut AnyStorage<CAP>) -> Result<Self, ListError> {
        let variant = Variant::from_tag(tag).map_err(|e| {
            warn!("cannot bind list: {e}");
            e
        })?;
        if variant != storage.variant() {
            return Err(mismatch(storage.variant(), variant));
        }
        Ok(match storage {
            AnyStorage::Byte(s) => Self::Byte(PoolList::new(s)?),
            AnyStorage::Message(s) => Self::Message(PoolList::new(s)?),
            AnyStorage::Buffer(s) => Self::Buffer(PoolList::new(s)?),
        })
    }

    /// The node shape this list holds.
    pub fn variant(&self) -> Variant {
        match self {
            Self::Byte(l) => l.variant(),
            Self::Message(l) => l.variant(),
            Self::Buffer(l) => l.variant(),
        }
    }

    /// Number of linked nodes.
    pub fn len(&self) -> usize {
        match self {
            Self::Byte(l) => l.len(),
            Self::Message(l) => l.len(),
            Self::Buffer(l) => l.len(),
        }
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots in the pool.
    pub fn capacity(&self) -> usize {
        match self {
            Self::Byte(l) => l.capacity(),
            Self::Message(l) => l.capacity(),
            Self::Buffer(l) => l.capacity(),
        }
    }

    /// See [`PoolList::reset`].
    pub fn reset(&mut self) {
        match self {
            Self::Byte(l) => l.reset(),
            Self::Message(l) => l.reset(),
            Self::Buffer(l) => l.reset(),
        }
    }

    /// See [`PoolList::find_available_slot`].
    pub fn find_available_slot(&self) -> Option<SlotIndex> {
        match self {
            Self::Byte(l) => l.find_available_slot(),
            Self::Message(l) => l.find_available_slot(),
            Self::Buffer(l) => l.find_available_slot(),
        }
    }

    /// Insert at the tail.
    ///
    /// `payload` is required ([`ListError::NullArgument`]) and must match
    /// the list's shape ([`ListError::VariantMismatch`]). Buffer lists also
    /// require `aux`, the number of payload bytes to copy:
    /// [`ListError::MissingLength`] without it, [`ListError::BufferTooLarge`]
    /// past the slot capacity, [`ListError::PayloadTooShort`] past the end
    /// of the payload. Other shapes ignore `aux`.
    pub fn append(
        &mut self,
        payload: Option<Payload<'_>>,
        aux: Option<usize>,
    ) -> Result<SlotIndex, ListError> {
        self.insert(End::Back, payload, aux)
    }

    /// Insert at the head. Same rules as [`append`](Self::append).
    pub fn prepend(
        &mut self,
        payload: Option<Payload<'_>>,
        aux: Option<usize>,
    ) -> Result<SlotIndex, ListError> {
        self.insert(End::Front, payload, aux)
    }

    fn insert(
        &mut self,
        end: End,
        payload: Option<Payload<'_>>,
        aux: Option<usize>,
    ) -> Result<SlotIndex, ListError> {
        let payload = payload.ok_or(ListError::NullArgument)?;
        match (self, payload) {
            (Self::Byte(l), Payload::Byte(b)) => insert_at(l, end, b),
            (Self::Message(l), Payload::Message(m)) => insert_at(l, end, m),
            (Self::Buffer(l), Payload::Bytes(bytes)) => {
                l.ensure_available()?;
                let len = aux.ok_or(ListError::MissingLength)?;
                if len > CAP {
                    return Err(ListError::BufferTooLarge { len, max: CAP });
                }
                let prefix = bytes.get(..len).ok_or(ListError::PayloadTooShort {
                    len,
                    available: bytes.len(),
                })?;
                insert_at(l, end, prefix)
            }
            (list, payload) => Err(mismatch(list.variant(), payload.variant())),
        }
    }

    /// See [`PoolList::remove_first`].
    pub fn remove_first(&mut self) -> Result<(), ListError> {
        match self {
            Self::Byte(l) => l.remove_first(),
            Self::Message(l) => l.remove_first(),
            Self::Buffer(l) => l.remove_first(),
        }
    }

    /// See [`PoolList::remove_last`].
    pub fn remove_last(&mut self) -> Result<(), ListError> {
        match self {
            Self::Byte(l) => l.remove_last(),
            Self::Message(l) => l.remove_last(),
            Self::Buffer(l) => l.remove_last(),
        }
    }

    /// The tail node, optionally copied into `out`.
    ///
    /// `out` must be of the list's shape ([`ListError::VariantMismatch`]);
    /// buffer lists reject copy-out with [`ListError::UnsupportedVariant`].
    pub fn get_last(
        &self,
        out: Option<&mut AnyNode<CAP>>,
    ) -> Result<Option<AnyNodeRef<'_, CAP>>, ListError> {
        match (self, out) {
            (Self::Byte(l), None) => Ok(l.get_last(None)?.map(AnyNodeRef::Byte)),
            (Self::Byte(l), Some(AnyNode::Byte(o))) => {
                Ok(l.get_last(Some(o))?.map(AnyNodeRef::Byte))
            }
            (Self::Message(l), None) => Ok(l.get_last(None)?.map(AnyNodeRef::Message)),
            (Self::Message(l), Some(AnyNode::Message(o))) => {
                Ok(l.get_last(Some(o))?.map(AnyNodeRef::Message))
            }
            (Self::Buffer(l), None) => Ok(l.get_last(None)?.map(AnyNodeRef::Buffer)),
            (Self::Buffer(l), Some(AnyNode::Buffer(o))) => {
                Ok(l.get_last(Some(&mut **o))?.map(AnyNodeRef::Buffer))
            }
            (list, Some(out)) => Err(mismatch(list.variant(), out.variant())),
        }
    }

    /// See [`PoolList::dump`].
    pub fn dump(&self) {
        match self {
            Self::Byte(l) => l.dump(),
            Self::Message(l) => l.dump(),
            Self::Buffer(l) => l.dump(),
        }
    }
}

impl<const CAP: usize> fmt::Display for AnyPoolList<'_, CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(l) => fmt::Display::fmt(l, f),
            Self::Message(l) => fmt::Display::fmt(l, f),
            Self::Buffer(l) => fmt::Display::fmt(l, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byte_storage(n: u16) -> AnyStorage<8> {
        AnyStorage::allocate(&PoolConfig::new(Variant::Byte, n))
    }

    fn buffer_storage(n: u16) -> AnyStorage<8> {
        AnyStorage::allocate(&PoolConfig::new(Variant::Buffer, n))
    }

    #[test]
    fn allocate_matches_config() {
        let s = AnyStorage::<8>::allocate(&PoolConfig::new(Variant::Message, 3));
        assert_eq!(s.variant(), Variant::Message);
        assert_eq!(s.capacity(), 3);
    }

    #[test]
    fn bind_rejects_unknown_tag() {
        let mut s = byte_storage(2);
        assert_eq!(
            AnyPoolList::bind(0, &mut s).unwrap_err(),
            ListError::UnknownVariant { tag: 0 }
        );
        assert_eq!(
            AnyPoolList::bind(9, &mut s).unwrap_err(),
            ListError::UnknownVariant { tag: 9 }
        );
    }

    #[test]
    fn bind_rejects_storage_of_other_shape() {
        let mut s = byte_storage(2);
        assert_eq!(
            AnyPoolList::bind(Variant::Buffer.tag(), &mut s).unwrap_err(),
            ListError::VariantMismatch {
                expected: Variant::Byte,
                found: Variant::Buffer,
            }
        );
    }

    #[test]
    fn missing_payload_is_null_argument() {
        let mut s = byte_storage(2);
        let mut list = AnyPoolList::bind(1, &mut s).unwrap();
        assert_eq!(list.append(None, None), Err(ListError::NullArgument));
        assert_eq!(list.prepend(None, Some(1)), Err(ListError::NullArgument));
        assert!(list.is_empty());
    }

    #[test]
    fn payload_of_other_shape_is_rejected() {
        let mut s = byte_storage(2);
        let mut list = AnyPoolList::bind(1, &mut s).unwrap();
        assert_eq!(
            list.append(Some(Payload::Bytes(&[1])), Some(1)),
            Err(ListError::VariantMismatch {
                expected: Variant::Byte,
                found: Variant::Buffer,
            })
        );
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn byte_list_ignores_aux() {
        let mut s = byte_storage(2);
        let mut list = AnyPoolList::bind(1, &mut s).unwrap();
        list.append(Some(Payload::Byte(4)), Some(999)).unwrap();
        list.prepend(Some(Payload::Byte(3)), None).unwrap();
        assert_eq!(list.to_string().lines().nth(1), Some("item data: 3 (slot 1)"));
    }

    #[test]
    fn buffer_length_contract() {
        let mut s = buffer_storage(2);
        let mut list = AnyPoolList::bind(3, &mut s).unwrap();
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];

        assert_eq!(
            list.append(Some(Payload::Bytes(&data)), None),
            Err(ListError::MissingLength)
        );
        assert_eq!(
            list.append(Some(Payload::Bytes(&data)), Some(9)),
            Err(ListError::BufferTooLarge { len: 9, max: 8 })
        );
        assert_eq!(
            list.append(Some(Payload::Bytes(&data[..2])), Some(3)),
            Err(ListError::PayloadTooShort {
                len: 3,
                available: 2,
            })
        );
        assert!(list.is_empty());

        list.prepend(Some(Payload::Bytes(&data)), Some(4)).unwrap();
        match list.get_last(None).unwrap() {
            Some(AnyNodeRef::Buffer(b)) => assert_eq!(b.data(), &[1, 2, 3, 4]),
            other => panic!("expected buffer node, got {other:?}"),
        }
    }

    #[test]
    fn buffer_exhaustion_precedes_length_checks() {
        let mut s = buffer_storage(1);
        let mut list = AnyPoolList::bind(3, &mut s).unwrap();
        list.append(Some(Payload::Bytes(&[1])), Some(1)).unwrap();
        assert_eq!(
            list.append(Some(Payload::Bytes(&[1])), None),
            Err(ListError::PoolExhausted { capacity: 1 })
        );
    }

    #[test]
    fn get_last_copy_out_checks_shape() {
        let mut s = AnyStorage::<8>::allocate(&PoolConfig::new(Variant::Message, 2));
        let mut list = AnyPoolList::bind(2, &mut s).unwrap();
        let msg = MessageNode::default().with_timestamp(42);
        list.append(Some(Payload::Message(&msg)), None).unwrap();

        let mut wrong = AnyNode::vacant(Variant::Byte);
        assert_eq!(
            list.get_last(Some(&mut wrong)).unwrap_err(),
            ListError::VariantMismatch {
                expected: Variant::Message,
                found: Variant::Byte,
            }
        );

        let mut out = AnyNode::vacant(Variant::Message);
        let last = list.get_last(Some(&mut out)).unwrap();
        assert_eq!(last, Some(AnyNodeRef::Message(&msg)));
        assert_eq!(out, AnyNode::Message(msg));
    }

    #[test]
    fn get_last_copy_out_unsupported_for_buffer() {
        let mut s = buffer_storage(1);
        let mut list = AnyPoolList::bind(3, &mut s).unwrap();
        list.append(Some(Payload::Bytes(&[1])), Some(1)).unwrap();
        let mut out = AnyNode::vacant(Variant::Buffer);
        assert!(matches!(
            list.get_last(Some(&mut out)),
            Err(ListError::UnsupportedVariant { .. })
        ));
    }

    #[test]
    fn removal_and_reset_dispatch() {
        let mut s = byte_storage(3);
        let mut list = AnyPoolList::bind(1, &mut s).unwrap();
        assert_eq!(list.remove_last(), Err(ListError::EmptyList));
        list.append(Some(Payload::Byte(1)), None).unwrap();
        list.append(Some(Payload::Byte(2)), None).unwrap();
        list.remove_first().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.find_available_slot().map(SlotIndex::get), Some(0));
        list.reset();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 3);
        assert_eq!(list.variant(), Variant::Byte);
    }
}
