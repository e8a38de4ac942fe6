//! The three node shapes a pool can hold.
//!
//! A pool is typed by exactly one shape, so the storage a list is bound to
//! always matches its variant. The [`Node`] trait is sealed: the set of
//! shapes is closed and every list operation can rely on it.

use std::fmt;

use crate::error::ListError;
use crate::packet::SerialPacket;
use crate::time::Timestamp;
use crate::variant::Variant;

/// Default per-slot capacity of a [`BufferNode`]: 150 KiB, enough for a
/// compressed 640x480 JPEG frame.
pub const ITEM_BUF_MAX_SIZE: usize = 150 * 1024;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ByteNode {}
    impl Sealed for super::MessageNode {}
    impl<const CAP: usize> Sealed for super::BufferNode<CAP> {}
}

/// A node shape that can live in a pool slot.
pub trait Node: sealed::Sealed + Clone + fmt::Debug + fmt::Display {
    /// The variant tag for this shape.
    const VARIANT: Variant;

    /// What an insert copies into a slot of this shape.
    type Payload<'p>: Copy;

    /// The zeroed value a free slot holds.
    fn vacant() -> Self;

    /// Wipe this node back to [`Node::vacant`] in place.
    fn vacate(&mut self);

    /// Copy `payload` into this node.
    ///
    /// Validates before writing: on error the node is untouched.
    fn load(&mut self, payload: Self::Payload<'_>) -> Result<(), ListError>;

    /// Copy this node's full contents into `out`.
    fn copy_into(&self, out: &mut Self) -> Result<(), ListError>;
}

// ── Byte ────────────────────────────────────────────────────────

/// A node holding a single byte.
///
/// Used for parsing inbound serial streams one byte at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ByteNode {
    /// The stored byte.
    pub data: u8,
}

impl ByteNode {
    /// A node holding `data`.
    pub const fn new(data: u8) -> Self {
        Self { data }
    }
}

impl Node for ByteNode {
    const VARIANT: Variant = Variant::Byte;
    type Payload<'p> = u8;

    fn vacant() -> Self {
        Self { data: 0 }
    }

    fn vacate(&mut self) {
        self.data = 0;
    }

    fn load(&mut self, payload: u8) -> Result<(), ListError> {
        self.data = payload;
        Ok(())
    }

    fn copy_into(&self, out: &mut Self) -> Result<(), ListError> {
        *out = *self;
        Ok(())
    }
}

impl fmt::Display for ByteNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item data: {}", self.data)
    }
}

// ── Message ─────────────────────────────────────────────────────

/// A node holding a serial frame and its retransmit schedule.
///
/// Inserts copy the whole structure, so the caller fills in the schedule
/// before handing it to the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MessageNode {
    /// The frame to transmit.
    pub packet: SerialPacket,
    /// When the message was queued.
    pub timestamp: u32,
    /// When the message was last transmitted.
    pub last_tx: u32,
    /// Number of transmissions so far.
    pub tx_count: u16,
    /// Transmission limit.
    pub max_tx: u16,
    /// Milliseconds between transmissions.
    pub tx_interval_ms: u16,
}

impl MessageNode {
    /// A message carrying `packet` with an empty schedule.
    pub const fn new(packet: SerialPacket) -> Self {
        Self {
            packet,
            timestamp: 0,
            last_tx: 0,
            tx_count: 0,
            max_tx: 0,
            tx_interval_ms: 0,
        }
    }

    /// Set the queue timestamp.
    pub const fn with_timestamp(mut self, timestamp: u32) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the transmission limit and interval.
    pub const fn with_schedule(mut self, max_tx: u16, tx_interval_ms: u16) -> Self {
        self.max_tx = max_tx;
        self.tx_interval_ms = tx_interval_ms;
        self
    }
}

impl Node for MessageNode {
    const VARIANT: Variant = Variant::Message;
    type Payload<'p> = &'p MessageNode;

    fn vacant() -> Self {
        Self::new(SerialPacket::ZERO)
    }

    fn vacate(&mut self) {
        *self = Self::vacant();
    }

    fn load(&mut self, payload: &MessageNode) -> Result<(), ListError> {
        *self = *payload;
        Ok(())
    }

    fn copy_into(&self, out: &mut Self) -> Result<(), ListError> {
        *out = *self;
        Ok(())
    }
}

impl fmt::Display for MessageNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ ts: {}, last_tx: {}, max_tx: {}, tx: {}, tx_interval_ms: {} }}",
            self.timestamp, self.last_tx, self.max_tx, self.tx_count, self.tx_interval_ms
        )
    }
}

// ── Buffer ──────────────────────────────────────────────────────

/// A node holding up to `CAP` bytes and the time they were captured.
///
/// Storage is inline, so a slot is always `CAP` bytes wide regardless of
/// how much of it is in use. Pools of the default 150 KiB shape belong on
/// the heap or in a static, not on the stack.
#[derive(Clone, PartialEq, Eq)]
pub struct BufferNode<const CAP: usize = ITEM_BUF_MAX_SIZE> {
    buf: [u8; CAP],
    len: usize,
    captured_at: Option<Timestamp>,
}

impl<const CAP: usize> BufferNode<CAP> {
    /// Per-slot capacity in bytes.
    pub const CAPACITY: usize = CAP;

    /// The bytes in use.
    pub fn data(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of bytes in use.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no bytes are in use.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// When the bytes were copied in, or `None` for a free slot.
    pub fn captured_at(&self) -> Option<Timestamp> {
        self.captured_at
    }
}

impl<const CAP: usize> Default for BufferNode<CAP> {
    fn default() -> Self {
        Self::vacant()
    }
}

impl<const CAP: usize> Node for BufferNode<CAP> {
    const VARIANT: Variant = Variant::Buffer;
    type Payload<'p> = &'p [u8];

    fn vacant() -> Self {
        Self {
            buf: [0; CAP],
            len: 0,
            captured_at: None,
        }
    }

    fn vacate(&mut self) {
        self.buf.fill(0);
        self.len = 0;
        self.captured_at = None;
    }

    fn load(&mut self, payload: &[u8]) -> Result<(), ListError> {
        let len = payload.len();
        if len > CAP {
            return Err(ListError::BufferTooLarge { len, max: CAP });
        }
        self.buf[..len].copy_from_slice(payload);
        self.buf[len..].fill(0);
        self.len = len;
        self.captured_at = Some(Timestamp::now());
        Ok(())
    }

    fn copy_into(&self, _out: &mut Self) -> Result<(), ListError> {
        Err(ListError::UnsupportedVariant {
            variant: Variant::Buffer,
            operation: "get_last copy-out",
        })
    }
}

impl<const CAP: usize> fmt::Debug for BufferNode<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferNode")
            .field("capacity", &CAP)
            .field("len", &self.len)
            .field("captured_at", &self.captured_at)
            .finish()
    }
}

impl<const CAP: usize> fmt::Display for BufferNode<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ len: {}, ts: ", self.len)?;
        match self.captured_at {
            Some(ts) => write!(f, "{ts}")?,
            None => write!(f, "-")?,
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_load_and_copy() {
        let mut n = ByteNode::vacant();
        n.load(42).unwrap();
        let mut out = ByteNode::default();
        n.copy_into(&mut out).unwrap();
        assert_eq!(out.data, 42);
        n.vacate();
        assert_eq!(n, ByteNode::vacant());
    }

    #[test]
    fn message_copies_whole_structure() {
        let src = MessageNode::new(SerialPacket::from_bytes([7; SerialPacket::SIZE]))
            .with_timestamp(1000)
            .with_schedule(3, 250);
        let mut n = MessageNode::vacant();
        n.load(&src).unwrap();
        assert_eq!(n, src);

        let mut out = MessageNode::vacant();
        n.copy_into(&mut out).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn buffer_load_records_len_and_time() {
        let mut n = BufferNode::<8>::vacant();
        assert_eq!(n.captured_at(), None);
        n.load(&[1, 2, 3]).unwrap();
        assert_eq!(n.data(), &[1, 2, 3]);
        assert_eq!(n.len(), 3);
        assert!(n.captured_at().is_some());
    }

    #[test]
    fn buffer_load_at_capacity_is_accepted() {
        let mut n = BufferNode::<4>::vacant();
        n.load(&[9; 4]).unwrap();
        assert_eq!(n.data(), &[9; 4]);
    }

    #[test]
    fn buffer_too_large_leaves_node_untouched() {
        let mut n = BufferNode::<4>::vacant();
        n.load(&[1, 2]).unwrap();
        let before = n.clone();
        let err = n.load(&[0; 5]).unwrap_err();
        assert_eq!(err, ListError::BufferTooLarge { len: 5, max: 4 });
        assert_eq!(n, before);
    }

    #[test]
    fn shorter_reload_clears_tail() {
        let mut n = BufferNode::<4>::vacant();
        n.load(&[1, 2, 3, 4]).unwrap();
        n.load(&[5]).unwrap();
        assert_eq!(n.data(), &[5]);
        assert_eq!(n.buf, [5, 0, 0, 0]);
    }

    #[test]
    fn buffer_copy_out_is_unsupported() {
        let n = BufferNode::<4>::vacant();
        let mut out = BufferNode::<4>::vacant();
        assert_eq!(
            n.copy_into(&mut out),
            Err(ListError::UnsupportedVariant {
                variant: Variant::Buffer,
                operation: "get_last copy-out",
            })
        );
    }

    #[test]
    fn variant_constants() {
        assert_eq!(ByteNode::VARIANT, Variant::Byte);
        assert_eq!(MessageNode::VARIANT, Variant::Message);
        assert_eq!(BufferNode::<1>::VARIANT, Variant::Buffer);
        assert_eq!(BufferNode::<ITEM_BUF_MAX_SIZE>::CAPACITY, 150 * 1024);
    }
}
