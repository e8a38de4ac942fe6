//! Walkthrough drivers and a stderr logger for benchmarks and examples.
//!
//! - [`byte_walkthrough`]: five-slot byte pool filled by appends, refilled
//!   by prepends, then reshuffled
//! - [`message_walkthrough`]: the same sequence over message nodes, ending
//!   with a copy-out of the tail
//! - [`logger`]: a minimal `log` backend for running them by hand

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod logger;

use log::info;
use slotlist_core::{ByteNode, ListError, MessageNode, Timestamp};
use slotlist_pool::{PoolList, Slot};
use slotlist_test_utils::fixtures::{message, message_ids, packet_id};
use slotlist_test_utils::byte_values;

/// Pool size used by both walkthroughs.
pub const WALKTHROUGH_SLOTS: usize = 5;

/// Run the byte walkthrough, dumping after each phase.
///
/// Returns the final chain: `[255, 2, 1, 0, 100]`.
pub fn byte_walkthrough() -> Result<Vec<u8>, ListError> {
    let mut storage = Slot::<ByteNode>::array::<WALKTHROUGH_SLOTS>();
    let mut fifo = PoolList::new(&mut storage)?;
    info!("init done");

    let mut v = 123u8;
    while fifo.append(v).is_ok() {
        v = v.wrapping_add(1);
    }
    info!("append done");
    fifo.dump();
    fifo.reset();

    let mut v = 0u8;
    while fifo.prepend(v).is_ok() {
        v = v.wrapping_add(1);
    }
    info!("prepend done");
    fifo.dump();

    fifo.remove_first()?;
    fifo.remove_first()?;
    fifo.prepend(255)?;
    fifo.append(99)?;
    if let Err(e) = fifo.append(123) {
        info!("append 123 rejected: {e}");
    }
    fifo.remove_last()?;
    fifo.append(100)?;
    fifo.dump();

    Ok(byte_values(&fifo))
}

/// Run the message walkthrough, dumping after each phase.
///
/// Returns the chain ids before the final `remove_last` and the id copied
/// out of the tail afterwards: `([255, 3, 2, 1, 100], 1)`.
pub fn message_walkthrough() -> Result<(Vec<u16>, u16), ListError> {
    let mut storage = Slot::<MessageNode>::array::<WALKTHROUGH_SLOTS>();
    let mut queue = PoolList::new(&mut storage)?;
    let now = || u32::try_from(Timestamp::now().secs()).unwrap_or(u32::MAX);
    info!("init msg done");

    let mut id = 123u16;
    while queue.append(&message(id, now())).is_ok() {
        id += 1;
    }
    info!("append done");
    queue.dump();
    queue.reset();

    let mut id = 1u16;
    while queue.prepend(&message(id, now())).is_ok() {
        id += 1;
    }
    info!("prepend done");
    queue.dump();

    queue.remove_first()?;
    queue.remove_first()?;
    queue.prepend(&message(255, now()))?;
    queue.append(&message(99, now()))?;
    if let Err(e) = queue.append(&message(123, now())) {
        info!("append id 123 rejected: {e}");
    }
    queue.remove_last()?;
    queue.append(&message(100, now()))?;
    queue.dump();
    let ids = message_ids(&queue);

    queue.remove_last()?;
    let mut tail = MessageNode::default();
    queue.get_last(Some(&mut tail))?;
    info!("tail copied out: {tail}");

    Ok((ids, packet_id(&tail.packet)))
}
