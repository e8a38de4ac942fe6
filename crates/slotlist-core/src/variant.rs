//! The node-shape tag a pool list is bound to.

use std::fmt;

use crate::error::ListError;

/// Which of the three node shapes a pool holds.
///
/// Chosen once when a list is bound to its storage and fixed for the
/// lifetime of that binding. The discriminants are the raw tags used by
/// callers that carry the variant as a byte; tag `0` is reserved for
/// "undefined" and never names a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Variant {
    /// One unsigned byte per node.
    Byte = 1,
    /// An opaque serial packet plus retransmit scheduling metadata.
    Message = 2,
    /// A bounded byte buffer with its length and capture time.
    Buffer = 3,
}

impl Variant {
    /// The reserved tag that never names a variant.
    pub const UNDEFINED_TAG: u8 = 0;

    /// All variants in tag order.
    pub const ALL: [Variant; 3] = [Variant::Byte, Variant::Message, Variant::Buffer];

    /// Raw tag for this variant.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Resolve a raw tag.
    ///
    /// Returns [`ListError::UnknownVariant`] for the undefined tag and for
    /// any value outside `1..=3`.
    pub fn from_tag(tag: u8) -> Result<Self, ListError> {
        match tag {
            1 => Ok(Self::Byte),
            2 => Ok(Self::Message),
            3 => Ok(Self::Buffer),
            _ => Err(ListError::UnknownVariant { tag }),
        }
    }

    /// Short lowercase name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Message => "message",
            Self::Buffer => "buffer",
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = ListError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_tag(tag)
    }
}

impl From<Variant> for u8 {
    fn from(v: Variant) -> Self {
        v.tag()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
