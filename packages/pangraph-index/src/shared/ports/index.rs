//! Compressed path index capabilities
//!
//! The core never looks inside an index: it queries positions and record
//! sizes, feeds symbol sequences to a construction sink, and asks partial
//! indexes to merge themselves.

use crate::errors::Result;
use crate::shared::models::{Pos, Symbol};

/// Query side of a compressed multi-string index
pub trait IndexQuery {
    /// Number of stored sequences. With both orientations inserted, sequence
    /// `2 * i` is path `i` and `2 * i + 1` its reverse.
    fn sequences(&self) -> usize;

    /// Alphabet size: every stored symbol is below this
    fn sigma(&self) -> usize;

    /// Smallest symbol that may have a record
    fn first_node(&self) -> Symbol;

    /// Does the symbol have no occurrences
    fn is_empty_record(&self, symbol: Symbol) -> bool;

    /// Size of the compressed record of `symbol` in bytes, `0` if empty
    fn record_bytes(&self, symbol: Symbol) -> usize;

    /// First position of the sequence, or `None` if it is out of range or
    /// empty
    fn start(&self, sequence: usize) -> Option<Pos>;

    /// Follow the sequence from `pos` to its next position. Returns `None`
    /// where the sequence ends.
    fn lf(&self, pos: Pos) -> Option<Pos>;

    /// Successor position of every visit to `symbol`, in record order. A
    /// sequence ending at the visit has an end marker position.
    fn decompressed_record(&self, symbol: Symbol) -> Option<Vec<Pos>>;
}

/// Construction sink for one (partial) index
pub trait IndexBuilder {
    type Index;

    /// Insert a path given as index symbols, optionally with its reverse
    fn insert(&mut self, path: &[Symbol], both_orientations: bool) -> Result<()>;

    /// Finish construction
    fn finish(self) -> Result<Self::Index>;
}

/// Merge of partial indexes built by independent jobs
pub trait IndexMerge: Sized {
    /// Merge the parts in job order. Sequence ids of part `j` follow those of
    /// parts `0..j`.
    fn merge(parts: Vec<Self>) -> Result<Self>;
}
