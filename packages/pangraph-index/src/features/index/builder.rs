//! Construction of a run-length index from symbol sequences
//!
//! Visits to a symbol are sorted by their reverse prefix: the symbols
//! preceding the visit, read backwards, with the start of the sequence
//! sorting before any symbol. Visits with identical reverse prefixes are
//! ordered by sequence id. The builder keeps every sequence in memory and
//! sorts the visits directly.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use gbwt::bwt::{BWTBuilder, BWT};
use tracing::debug;

use super::record;
use super::run_length_index::RunLengthIndex;
use crate::errors::{PangraphError, Result};
use crate::shared::models::{Pos, Symbol, ENDMARKER};
use crate::shared::ports::IndexBuilder;

/// Collects sequences for a [`RunLengthIndex`]
#[derive(Debug, Clone, Default)]
pub struct RunLengthIndexBuilder {
    sequences: Vec<Vec<Symbol>>,
}

/// Visit `offset` of sequence `sequence`
#[derive(Debug, Clone, Copy)]
struct Visit {
    sequence: usize,
    offset: usize,
}

impl RunLengthIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sequences inserted so far
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    fn successor(&self, visit: Visit) -> Symbol {
        self.sequences[visit.sequence]
            .get(visit.offset + 1)
            .copied()
            .unwrap_or(ENDMARKER)
    }

    fn predecessor(&self, visit: Visit) -> Symbol {
        match visit.offset {
            0 => ENDMARKER,
            offset => self.sequences[visit.sequence][offset - 1],
        }
    }

    fn cmp_reverse_prefix(&self, a: Visit, b: Visit) -> Ordering {
        let prefix_a = self.sequences[a.sequence][..a.offset].iter().rev();
        let prefix_b = self.sequences[b.sequence][..b.offset].iter().rev();
        prefix_a
            .cmp(prefix_b)
            .then(a.sequence.cmp(&b.sequence))
    }
}

/// Number of sequences whose last symbol is below `symbol`; an empty
/// sequence counts as ending with the end marker
pub(super) fn ends_before(ends_by_last: &BTreeMap<Symbol, usize>, symbol: Symbol) -> usize {
    ends_by_last.range(..symbol).map(|(_, count)| count).sum()
}

impl IndexBuilder for RunLengthIndexBuilder {
    type Index = RunLengthIndex;

    fn insert(&mut self, path: &[Symbol], both_orientations: bool) -> Result<()> {
        if let Some(&bad) = path.iter().find(|&&symbol| symbol < 2) {
            return Err(PangraphError::structure(format!(
                "symbol {} is reserved and cannot appear inside a path",
                bad
            )));
        }
        self.sequences.push(path.to_vec());
        if both_orientations {
            self.sequences
                .push(path.iter().rev().map(|&symbol| symbol ^ 1).collect());
        }
        Ok(())
    }

    fn finish(self) -> Result<RunLengthIndex> {
        let mut visits: BTreeMap<Symbol, Vec<Visit>> = BTreeMap::new();
        let mut ends_by_last: BTreeMap<Symbol, usize> = BTreeMap::new();
        for (sequence, symbols) in self.sequences.iter().enumerate() {
            for (offset, &symbol) in symbols.iter().enumerate() {
                visits
                    .entry(symbol)
                    .or_default()
                    .push(Visit { sequence, offset });
            }
            *ends_by_last
                .entry(symbols.last().copied().unwrap_or(ENDMARKER))
                .or_default() += 1;
        }
        for list in visits.values_mut() {
            list.sort_by(|&a, &b| self.cmp_reverse_prefix(a, b));
        }

        let (first_node, sigma) = match (visits.keys().next(), visits.keys().next_back()) {
            (Some(&first), Some(&last)) => (first, last + 1),
            _ => (1, 1),
        };

        // Visits to `w` arrive sorted by predecessor, so the offset of edge
        // `v -> w` is the number of visits to `w` with a smaller predecessor.
        let edge_offset = |from: Symbol, to: Symbol| -> usize {
            if to == ENDMARKER {
                return ends_before(&ends_by_last, from);
            }
            let Some(list) = visits.get(&to) else {
                return 0;
            };
            list.partition_point(|&visit| self.predecessor(visit) < from)
        };
        let encode = |from: Symbol, successors: &[Symbol], builder: &mut BWTBuilder| {
            let mut targets: Vec<Symbol> = successors.to_vec();
            targets.sort_unstable();
            targets.dedup();
            let edges: Vec<Pos> = targets
                .into_iter()
                .map(|to| Pos::new(to, edge_offset(from, to)))
                .collect();
            record::append(builder, &edges, successors);
        };

        let mut builder = BWTBuilder::new();

        let first_symbols: Vec<Symbol> = self
            .sequences
            .iter()
            .map(|symbols| symbols.first().copied().unwrap_or(ENDMARKER))
            .collect();
        encode(ENDMARKER, &first_symbols, &mut builder);

        for symbol in first_node..sigma {
            let successors: Vec<Symbol> = visits
                .get(&symbol)
                .map(|list| list.iter().map(|&visit| self.successor(visit)).collect())
                .unwrap_or_default();
            encode(symbol, &successors, &mut builder);
        }

        let index = RunLengthIndex {
            bwt: BWT::from(builder),
            first_node,
            sigma,
            sequences: self.sequences.len(),
        };
        debug!(
            sequences = index.sequences,
            sigma,
            bytes = index.bytes(),
            "built run-length index"
        );
        Ok(index)
    }
}
