//! Fast merge of partial indexes over disjoint alphabets
//!
//! Partial indexes built by independent jobs share no node symbols, so the
//! record of every node comes unchanged from the single part that has it.
//! Only two things depend on the other parts:
//!
//! - the end marker record, which is the concatenation of the parts' end
//!   marker records in job order;
//! - the offset of each edge into the end marker, which counts the
//!   sequences ending with a smaller symbol across all parts.

use std::collections::BTreeMap;

use gbwt::bwt::{BWTBuilder, BWT};
use tracing::debug;

use super::builder::ends_before;
use super::record;
use super::run_length_index::RunLengthIndex;
use crate::errors::{PangraphError, Result};
use crate::shared::models::{Pos, Symbol, ENDMARKER};
use crate::shared::ports::{IndexMerge, IndexQuery};

impl IndexMerge for RunLengthIndex {
    fn merge(parts: Vec<Self>) -> Result<Self> {
        let with_nodes = || parts.iter().filter(|part| part.has_nodes());
        let (first_node, sigma) = match (
            with_nodes().map(|part| part.first_node).min(),
            with_nodes().map(|part| part.sigma).max(),
        ) {
            (Some(first), Some(sigma)) => (first, sigma),
            _ => (1, 1),
        };

        let mut owner: Vec<Option<usize>> = vec![None; sigma - first_node];
        let mut ends_by_last: BTreeMap<Symbol, usize> = BTreeMap::new();
        let mut first_symbols: Vec<Symbol> = Vec::new();
        for (job, part) in parts.iter().enumerate() {
            for symbol in part.first_node..part.sigma {
                if part.is_empty_record(symbol) {
                    continue;
                }
                let slot = &mut owner[symbol - first_node];
                if let Some(other) = *slot {
                    return Err(PangraphError::merge(format!(
                        "symbol {} occurs in the indexes of jobs {} and {}",
                        symbol, other, job
                    )));
                }
                *slot = Some(job);
                let ends = decompress(part, symbol)?
                    .iter()
                    .filter(|pos| pos.node == ENDMARKER)
                    .count();
                if ends > 0 {
                    *ends_by_last.entry(symbol).or_default() += ends;
                }
            }

            if !part.is_empty_record(ENDMARKER) {
                let starts = decompress(part, ENDMARKER)?;
                let empty = starts.iter().filter(|pos| pos.node == ENDMARKER).count();
                if empty > 0 {
                    *ends_by_last.entry(ENDMARKER).or_default() += empty;
                }
                first_symbols.extend(starts.iter().map(|pos| pos.node));
            }
        }

        let mut builder = BWTBuilder::new();

        let mut targets = first_symbols.clone();
        targets.sort_unstable();
        targets.dedup();
        let edges: Vec<Pos> = targets.into_iter().map(|to| Pos::new(to, 0)).collect();
        record::append(&mut builder, &edges, &first_symbols);

        let mut rewritten = 0usize;
        for symbol in first_node..sigma {
            let Some(job) = owner[symbol - first_node] else {
                builder.append(&[], &[]);
                continue;
            };
            let record = parts[job].record(symbol).ok_or_else(|| {
                PangraphError::merge(format!("record of symbol {} is missing", symbol))
            })?;
            if record::copy(&mut builder, record, || ends_before(&ends_by_last, symbol)) {
                rewritten += 1;
            }
        }

        let sequences = parts.iter().map(|part| part.sequences).sum();
        let merged = RunLengthIndex {
            bwt: BWT::from(builder),
            first_node,
            sigma,
            sequences,
        };
        debug!(
            parts = parts.len(),
            sequences,
            sigma,
            rewritten,
            bytes = merged.bytes(),
            "merged partial indexes"
        );
        Ok(merged)
    }
}

fn decompress(part: &RunLengthIndex, symbol: Symbol) -> Result<Vec<Pos>> {
    part.decompressed_record(symbol).ok_or_else(|| {
        PangraphError::merge(format!("record of symbol {} is missing", symbol))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::index::RunLengthIndexBuilder;
    use crate::shared::ports::IndexBuilder;
    use pretty_assertions::assert_eq;

    fn build(paths: &[&[Symbol]]) -> RunLengthIndex {
        let mut builder = RunLengthIndexBuilder::new();
        for path in paths {
            builder.insert(path, true).unwrap();
        }
        builder.finish().unwrap()
    }

    #[test]
    fn test_merge_equals_monolithic_build() {
        let job0: &[&[Symbol]] = &[&[10, 12, 14], &[10, 14]];
        let job1: &[&[Symbol]] = &[&[2, 4], &[6]];

        let merged =
            RunLengthIndex::merge(vec![build(job0), build(job1)]).unwrap();
        let monolithic = build(&[job0[0], job0[1], job1[0], job1[1]]);
        assert_eq!(merged, monolithic);
        assert_eq!(merged.extract(4), vec![2, 4]);
        assert_eq!(merged.extract(7), vec![7]);
    }

    #[test]
    fn test_overlapping_alphabets_rejected() {
        let err = RunLengthIndex::merge(vec![build(&[&[2, 4]]), build(&[&[4, 6]])]).unwrap_err();
        assert!(matches!(err, PangraphError::Merge(_)));
    }

    #[test]
    fn test_merge_with_empty_parts() {
        let part = build(&[&[2, 4]]);
        let merged = RunLengthIndex::merge(vec![
            RunLengthIndex::default(),
            part.clone(),
            RunLengthIndex::default(),
        ])
        .unwrap();
        assert_eq!(merged, part);

        let nothing = RunLengthIndex::merge(Vec::new()).unwrap();
        assert_eq!(nothing, RunLengthIndex::default());
    }
}
