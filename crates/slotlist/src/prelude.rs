//! Common imports for slotlist users.
//!
//! ```
//! use slotlist::prelude::*;
//! ```

pub use slotlist_core::{
    BufferNode, ByteNode, ListError, MessageNode, Node, SerialPacket, Timestamp, Variant,
    ITEM_BUF_MAX_SIZE,
};
pub use slotlist_pool::{
    AnyNode, AnyPoolList, AnyStorage, LockedPoolList, Occupancy, Payload, PoolConfig, PoolList,
    Slot, SlotIndex,
};
