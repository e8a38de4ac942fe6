//! Message fixtures with recognisable packets.
//!
//! The list treats packets as opaque, so tests tag each frame with an id
//! written into bytes 4..6 (little endian) and read it back the same way.

use slotlist_core::{MessageNode, SerialPacket};
use slotlist_pool::PoolList;

/// Byte offset of the test id inside a frame.
const ID_OFFSET: usize = 4;

/// A frame carrying `id`.
pub fn packet_with_id(id: u16) -> SerialPacket {
    let mut bytes = [0u8; SerialPacket::SIZE];
    bytes[0] = 0xA5;
    bytes[ID_OFFSET..ID_OFFSET + 2].copy_from_slice(&id.to_le_bytes());
    SerialPacket::from_bytes(bytes)
}

/// The id written by [`packet_with_id`].
pub fn packet_id(packet: &SerialPacket) -> u16 {
    let b = packet.as_bytes();
    u16::from_le_bytes([b[ID_OFFSET], b[ID_OFFSET + 1]])
}

/// A message carrying `id`, queued at `timestamp`.
pub fn message(id: u16, timestamp: u32) -> MessageNode {
    MessageNode::new(packet_with_id(id))
        .with_timestamp(timestamp)
        .with_schedule(3, 100)
}

/// Message ids in chain order.
pub fn message_ids(list: &PoolList<'_, MessageNode>) -> Vec<u16> {
    list.iter().map(|(_, m)| packet_id(&m.packet)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_packet() {
        assert_eq!(packet_id(&packet_with_id(0xBEEF)), 0xBEEF);
        assert_eq!(message(7, 1).timestamp, 1);
    }
}
