//! Node identifiers, orientations and handles
//!
//! A handle is a node visited in one orientation. Its encoding
//! `2 * id + is_reverse` is also the alphabet of the compressed path index:
//! symbol `0` is reserved for the end marker and `symbol ^ 1` is the other
//! orientation of the same node.

use serde::{Deserialize, Serialize};
use std::fmt;

pub use gbwt::{Pos, ENDMARKER};

/// Node identifier. Valid identifiers are positive.
pub type NodeId = u64;

/// Symbol in the compressed index alphabet.
pub type Symbol = usize;

/// Strand of a node visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    Forward,
    Reverse,
}

impl Orientation {
    #[inline]
    pub fn from_reverse(is_reverse: bool) -> Self {
        if is_reverse {
            Orientation::Reverse
        } else {
            Orientation::Forward
        }
    }

    #[inline]
    pub fn is_reverse(self) -> bool {
        self == Orientation::Reverse
    }

    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Reverse,
            Orientation::Reverse => Orientation::Forward,
        }
    }
}

/// Oriented node, the atomic unit of traversal
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Handle(u64);

impl Handle {
    #[inline]
    pub fn new(id: NodeId, orientation: Orientation) -> Self {
        Handle((id << 1) | orientation.is_reverse() as u64)
    }

    #[inline]
    pub fn forward(id: NodeId) -> Self {
        Self::new(id, Orientation::Forward)
    }

    #[inline]
    pub fn reverse(id: NodeId) -> Self {
        Self::new(id, Orientation::Reverse)
    }

    #[inline]
    pub fn id(self) -> NodeId {
        self.0 >> 1
    }

    #[inline]
    pub fn orientation(self) -> Orientation {
        Orientation::from_reverse(self.is_reverse())
    }

    #[inline]
    pub fn is_reverse(self) -> bool {
        self.0 & 1 == 1
    }

    /// Same node, other orientation
    #[inline]
    pub fn flip(self) -> Self {
        Handle(self.0 ^ 1)
    }

    /// Index symbol for this handle
    #[inline]
    pub fn to_symbol(self) -> Symbol {
        self.0 as Symbol
    }

    /// Decode an index symbol. Returns `None` for the end marker and for
    /// symbol `1`, which would be the reverse orientation of node `0`.
    #[inline]
    pub fn from_symbol(symbol: Symbol) -> Option<Self> {
        if symbol < 2 {
            None
        } else {
            Some(Handle(symbol as u64))
        }
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({})", self)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strand = if self.is_reverse() { '-' } else { '+' };
        write!(f, "{}{}", self.id(), strand)
    }
}
