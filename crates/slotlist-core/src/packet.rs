//! The opaque serial packet carried by message nodes.

use std::fmt;

const PACKET_SIZE: usize = 11;

/// A fixed-size serial protocol frame.
///
/// The list copies these bytes verbatim and never interprets them: framing,
/// field layout and CRC belong to the protocol that produced the frame.
/// The size is the packed size of that frame (head, length, type, id, four
/// data bytes and a trailing CRC-8).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct SerialPacket([u8; PACKET_SIZE]);

impl SerialPacket {
    /// Size of a frame in bytes.
    pub const SIZE: usize = PACKET_SIZE;

    /// An all-zero frame.
    pub const ZERO: Self = Self([0; Self::SIZE]);

    /// Wrap raw frame bytes.
    pub const fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self(bytes)
    }

    /// The raw frame bytes.
    pub const fn as_bytes(&self) -> &[u8; Self::SIZE] {
        &self.0
    }

    /// Mutable access to the raw frame bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8; Self::SIZE] {
        &mut self.0
    }

    /// Consume the packet, returning its bytes.
    pub const fn into_bytes(self) -> [u8; Self::SIZE] {
        self.0
    }
}

impl From<[u8; SerialPacket::SIZE]> for SerialPacket {
    fn from(bytes: [u8; SerialPacket::SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for SerialPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerialPacket(")?;
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        write!(f, ")")
    }
}
