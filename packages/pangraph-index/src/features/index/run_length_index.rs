//! Run-length compressed multi-string index over handle symbols
//!
//! One record per symbol: record 0 belongs to the end marker and lists the
//! first symbol of every sequence in sequence order; the records of
//! `first_node..sigma` follow. Records live in a `gbwt::bwt::BWT`.

use gbwt::bwt::{BWTBuilder, Record, BWT};

use crate::shared::models::{Pos, Symbol, ENDMARKER};
use crate::shared::ports::IndexQuery;

/// Compressed index of paths as symbol sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLengthIndex {
    pub(super) bwt: BWT,
    pub(super) first_node: Symbol,
    pub(super) sigma: usize,
    pub(super) sequences: usize,
}

impl Default for RunLengthIndex {
    fn default() -> Self {
        let mut builder = BWTBuilder::new();
        builder.append(&[], &[]);
        Self {
            bwt: BWT::from(builder),
            first_node: 1,
            sigma: 1,
            sequences: 0,
        }
    }
}

impl RunLengthIndex {
    /// Record index of the symbol
    #[inline]
    fn to_comp(&self, symbol: Symbol) -> Option<usize> {
        if symbol == ENDMARKER {
            Some(0)
        } else if symbol >= self.first_node && symbol < self.sigma {
            Some(symbol - self.first_node + 1)
        } else {
            None
        }
    }

    /// Does the index contain any node symbols
    pub fn has_nodes(&self) -> bool {
        self.first_node < self.sigma
    }

    /// Total size of the non-empty records in bytes
    pub fn bytes(&self) -> usize {
        (0..self.sigma)
            .filter(|&symbol| symbol == ENDMARKER || symbol >= self.first_node)
            .map(|symbol| self.record_bytes(symbol))
            .sum()
    }

    /// Record of the symbol, or `None` if it has no occurrences
    pub fn record(&self, symbol: Symbol) -> Option<Record<'_>> {
        self.bwt.record(self.to_comp(symbol)?)
    }

    /// Symbols of the sequence, or an empty vector for an invalid id
    pub fn extract(&self, sequence: usize) -> Vec<Symbol> {
        let mut result = Vec::new();
        let mut pos = self.start(sequence);
        while let Some(curr) = pos {
            result.push(curr.node);
            pos = self.lf(curr);
        }
        result
    }
}

impl IndexQuery for RunLengthIndex {
    fn sequences(&self) -> usize {
        self.sequences
    }

    fn sigma(&self) -> usize {
        self.sigma
    }

    fn first_node(&self) -> Symbol {
        self.first_node
    }

    fn is_empty_record(&self, symbol: Symbol) -> bool {
        self.record(symbol).is_none()
    }

    fn record_bytes(&self, symbol: Symbol) -> usize {
        self.to_comp(symbol)
            .and_then(|comp| self.bwt.compressed_record(comp))
            .map_or(0, |(edges, runs)| edges.len() + runs.len())
    }

    fn start(&self, sequence: usize) -> Option<Pos> {
        if sequence >= self.sequences {
            return None;
        }
        self.lf(Pos::new(ENDMARKER, sequence))
    }

    fn lf(&self, pos: Pos) -> Option<Pos> {
        self.record(pos.node)?.lf(pos.offset)
    }

    fn decompressed_record(&self, symbol: Symbol) -> Option<Vec<Pos>> {
        self.record(symbol).map(|record| record.decompress())
    }
}
