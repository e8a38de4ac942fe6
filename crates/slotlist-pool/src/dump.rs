//! Human-readable dump of a list's contents.
//!
//! The text form is the list header followed by one line per linked node
//! in chain order, each tagged with the slot it occupies.

use std::fmt;

use log::debug;
use slotlist_core::Node;

use crate::list::PoolList;

impl<N: Node> fmt::Display for PoolList<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "list items: {} max poolsize: {}",
            self.len(),
            self.capacity()
        )?;
        for (index, node) in self.iter() {
            writeln!(f, "{node} (slot {index})")?;
        }
        Ok(())
    }
}

impl<N: Node> PoolList<'_, N> {
    /// Emit the dump through the `log` facade at debug level.
    pub fn dump(&self) {
        debug!(
            target: "slotlist::dump",
            "{} list items: {} max poolsize: {}",
            self.variant(),
            self.len(),
            self.capacity()
        );
        for (index, node) in self.iter() {
            debug!(target: "slotlist::dump", "{node} (slot {index})");
        }
    }
}
