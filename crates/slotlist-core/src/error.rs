//! Error taxonomy for pool list operations.
//!
//! Every fallible operation returns one of these to its immediate caller.
//! None are retried internally and none are fatal: a failed call leaves
//! the list exactly as it was.

use std::error::Error;
use std::fmt;

use crate::variant::Variant;

/// Errors returned by pool list operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// A required argument was absent (no payload on the dynamic surface).
    NullArgument,
    /// Every slot in the pool is occupied.
    PoolExhausted {
        /// Number of slots in the pool.
        capacity: usize,
    },
    /// An unlink was attempted on an empty chain.
    EmptyList,
    /// A buffer-variant insert arrived without a byte length.
    MissingLength,
    /// A buffer-variant insert asked for more bytes than a slot holds.
    BufferTooLarge {
        /// Requested length in bytes.
        len: usize,
        /// Fixed per-slot maximum in bytes.
        max: usize,
    },
    /// A raw variant tag that names no variant.
    UnknownVariant {
        /// The offending tag.
        tag: u8,
    },
    /// The operation has no defined behaviour for this variant.
    UnsupportedVariant {
        /// The variant the list is bound to.
        variant: Variant,
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// The caller's storage has more slots than a pool can index.
    CapacityOverflow {
        /// Number of slots offered.
        capacity: usize,
        /// Largest supported pool.
        max: usize,
    },
    /// A payload, output node, or storage block of one variant was handed
    /// to a list bound to another.
    VariantMismatch {
        /// The variant the list is bound to.
        expected: Variant,
        /// The variant that was supplied.
        found: Variant,
    },
    /// The declared buffer length exceeds the bytes actually supplied.
    PayloadTooShort {
        /// Declared length in bytes.
        len: usize,
        /// Bytes available in the payload.
        available: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullArgument => write!(f, "required argument is missing"),
            Self::PoolExhausted { capacity } => {
                write!(f, "pool exhausted: all {capacity} slots are occupied")
            }
            Self::EmptyList => write!(f, "list is empty"),
            Self::MissingLength => write!(f, "buffer insert requires a byte length"),
            Self::BufferTooLarge { len, max } => {
                write!(f, "buffer too large: {len} bytes, slot holds at most {max}")
            }
            Self::UnknownVariant { tag } => write!(f, "unknown list variant tag {tag}"),
            Self::UnsupportedVariant { variant, operation } => {
                write!(f, "{operation} is not supported for {variant} lists")
            }
            Self::CapacityOverflow { capacity, max } => {
                write!(f, "pool of {capacity} slots exceeds the maximum of {max}")
            }
            Self::VariantMismatch { expected, found } => {
                write!(f, "variant mismatch: list holds {expected} nodes, got {found}")
            }
            Self::PayloadTooShort { len, available } => {
                write!(
                    f,
                    "payload too short: length {len} declared, {available} bytes supplied"
                )
            }
        }
    }
}

impl Error for ListError {}
