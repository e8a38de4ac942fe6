//! Core types for the slotlist pool-backed linked list.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! three node shapes a pool can hold, the variant tag that names them, the
//! opaque serial packet carried by message nodes, and the error taxonomy
//! shared by every list operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod node;
pub mod packet;
pub mod time;
pub mod variant;

pub use error::ListError;
pub use node::{BufferNode, ByteNode, MessageNode, Node, ITEM_BUF_MAX_SIZE};
pub use packet::SerialPacket;
pub use time::Timestamp;
pub use variant::Variant;
