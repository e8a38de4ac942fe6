//! Integration test: the byte and message walkthroughs.
//!
//! Fills a five-slot pool to exhaustion with appends, then with prepends,
//! and finishes with a mixed sequence of removals and inserts whose final
//! chain order is known.

use slotlist_core::{ByteNode, ListError, MessageNode};
use slotlist_pool::{PoolList, Slot};
use slotlist_test_utils::fixtures::{message, message_ids, packet_id};
use slotlist_test_utils::{audit, byte_values};

#[test]
fn byte_walkthrough() {
    let mut storage = Slot::<ByteNode>::array::<5>();
    let mut fifo = PoolList::new(&mut storage).unwrap();

    let mut v = 123u8;
    while fifo.append(v).is_ok() {
        v += 1;
    }
    assert_eq!(v, 128, "sixth append must fail");
    assert_eq!(fifo.append(v), Err(ListError::PoolExhausted { capacity: 5 }));
    assert_eq!(byte_values(&fifo), [123, 124, 125, 126, 127]);
    audit(&fifo).unwrap();

    fifo.reset();
    let mut v = 0u8;
    while fifo.prepend(v).is_ok() {
        v += 1;
    }
    assert_eq!(byte_values(&fifo), [4, 3, 2, 1, 0]);
    audit(&fifo).unwrap();

    fifo.remove_first().unwrap();
    fifo.remove_first().unwrap();
    fifo.prepend(255).unwrap();
    fifo.append(99).unwrap();
    assert_eq!(
        fifo.append(123),
        Err(ListError::PoolExhausted { capacity: 5 })
    );
    fifo.remove_last().unwrap();
    fifo.append(100).unwrap();

    assert_eq!(byte_values(&fifo), [255, 2, 1, 0, 100]);
    assert_eq!(fifo.len(), 5);
    audit(&fifo).unwrap();

    let dump = fifo.to_string();
    let data: Vec<&str> = dump.lines().skip(1).collect();
    assert_eq!(data.len(), 5);
    assert!(data[0].starts_with("item data: 255 "));
    assert!(data[4].starts_with("item data: 100 "));
}

#[test]
fn message_walkthrough() {
    let mut storage = Slot::<MessageNode>::array::<5>();
    let mut queue = PoolList::new(&mut storage).unwrap();

    let mut id = 123u16;
    while queue.append(&message(id, u32::from(id))).is_ok() {
        id += 1;
    }
    assert_eq!(message_ids(&queue), [123, 124, 125, 126, 127]);

    queue.reset();
    let mut id = 1u16;
    while queue.prepend(&message(id, 0)).is_ok() {
        id += 1;
    }
    assert_eq!(message_ids(&queue), [5, 4, 3, 2, 1]);

    queue.remove_first().unwrap();
    queue.remove_first().unwrap();
    queue.prepend(&message(255, 0)).unwrap();
    queue.append(&message(99, 0)).unwrap();
    assert!(queue.append(&message(123, 0)).is_err());
    queue.remove_last().unwrap();
    queue.append(&message(100, 0)).unwrap();
    assert_eq!(message_ids(&queue), [255, 3, 2, 1, 100]);
    audit(&queue).unwrap();

    queue.remove_last().unwrap();
    let mut out = MessageNode::default();
    let last = queue.get_last(Some(&mut out)).unwrap().copied();
    assert_eq!(last, Some(out));
    assert_eq!(packet_id(&out.packet), 1);
    assert_eq!(out.max_tx, 3);
    audit(&queue).unwrap();
}
