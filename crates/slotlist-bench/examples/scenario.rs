//! Walkthrough example over byte and message pools.
//!
//! Runs both walkthroughs with every list dump routed to stderr.
//! Pass a level (`trace`, `debug`, `info`, ...) as the first argument to
//! change verbosity; the default is `debug`, which shows the dumps.

use log::LevelFilter;
use slotlist_bench::{byte_walkthrough, logger, message_walkthrough};

fn main() {
    let level = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Debug);
    if let Err(e) = logger::init(level) {
        eprintln!("logger already installed: {e}");
    }

    println!("=== slotlist walkthrough ===\n");

    match byte_walkthrough() {
        Ok(order) => println!("byte pool final order: {order:?}"),
        Err(e) => println!("byte walkthrough failed: {e}"),
    }

    match message_walkthrough() {
        Ok((ids, tail)) => {
            println!("message pool ids before last removal: {ids:?}");
            println!("tail id after removal: {tail}");
        }
        Err(e) => println!("message walkthrough failed: {e}"),
    }
}
