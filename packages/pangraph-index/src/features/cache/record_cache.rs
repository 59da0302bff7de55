//! Decompressed record cache
//!
//! Large records are slow to traverse in compressed form: every LF step
//! scans the runs from the start of the record. The cache decompresses the
//! records whose encoding exceeds a byte threshold once, and extraction
//! uses the precomputed LF targets for them.
//!
//! The cache is built once and never mutated, so any number of threads can
//! extract through a shared reference.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::PartitionConfig;
use crate::shared::models::{Pos, Symbol, ENDMARKER};
use crate::shared::ports::IndexQuery;

/// Read-through cache of decompressed records in front of an index
pub struct RecordCache<'a, I: IndexQuery + ?Sized> {
    index: &'a I,
    cache: FxHashMap<Symbol, Vec<Pos>>,
}

/// Positions sampled along a sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSamples {
    /// `(sequence offset, index position)` pairs, by increasing offset
    pub samples: Vec<(usize, Pos)>,
    /// Total length of the sequence
    pub length: usize,
}

impl<'a, I: IndexQuery + ?Sized> RecordCache<'a, I> {
    /// Cache every non-empty record longer than `bytes` bytes
    ///
    /// With `bytes == 0`, every non-empty record is cached.
    pub fn new(index: &'a I, bytes: usize) -> Self {
        let mut cache = FxHashMap::default();
        for symbol in index.first_node()..index.sigma() {
            if index.record_bytes(symbol) <= bytes || index.is_empty_record(symbol) {
                continue;
            }
            if let Some(record) = index.decompressed_record(symbol) {
                cache.insert(symbol, record);
            }
        }

        let result = Self { index, cache };
        debug!(
            threshold = bytes,
            records = result.len(),
            positions = result.decompressed_positions(),
            "built record cache"
        );
        result
    }

    /// The underlying index
    pub fn index(&self) -> &'a I {
        self.index
    }

    /// Number of sequences in the index
    pub fn sequences(&self) -> usize {
        self.index.sequences()
    }

    /// Number of cached records
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Is the record of `symbol` cached
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.cache.contains_key(&symbol)
    }

    /// Total number of visits in the cached records
    pub fn decompressed_positions(&self) -> usize {
        self.cache.values().map(Vec::len).sum()
    }

    /// LF step through the cache, falling back to the index
    #[inline]
    pub fn lf(&self, pos: Pos) -> Option<Pos> {
        match self.cache.get(&pos.node) {
            Some(record) => record
                .get(pos.offset)
                .copied()
                .filter(|next| next.node != ENDMARKER),
            None => self.index.lf(pos),
        }
    }

    /// Symbols of the sequence, or an empty vector for an invalid id
    ///
    /// Performance: one hash lookup per step plus a run scan on misses
    pub fn extract(&self, sequence: usize) -> Vec<Symbol> {
        let mut result = Vec::new();
        if sequence >= self.sequences() {
            return result;
        }

        let mut pos = self.index.start(sequence);
        while let Some(curr) = pos {
            result.push(curr.node);
            pos = self.lf(curr);
        }
        result
    }

    /// Sample a position of the sequence at least every `interval` units
    ///
    /// Offsets are measured with `symbol_length`, typically the sequence
    /// length of the node. The first position is always sampled.
    pub fn sample_positions<F>(
        &self,
        sequence: usize,
        interval: usize,
        symbol_length: F,
    ) -> PositionSamples
    where
        F: Fn(Symbol) -> usize,
    {
        let mut result = PositionSamples::default();
        if sequence >= self.sequences() {
            return result;
        }

        let mut next_sample = 0;
        let mut pos = self.index.start(sequence);
        while let Some(curr) = pos {
            if result.length >= next_sample {
                result.samples.push((result.length, curr));
                next_sample = result.length + interval;
            }
            result.length += symbol_length(curr.node);
            pos = self.lf(curr);
        }
        result
    }
}

/// Build the record cache with the byte threshold from the configuration
pub fn build_record_cache<'a, I>(index: &'a I, config: &PartitionConfig) -> RecordCache<'a, I>
where
    I: IndexQuery + ?Sized,
{
    RecordCache::new(index, config.record_cache_bytes)
}
