//! Node records of the run-length index
//!
//! The record of a symbol lists, for every visit to it in sorted order, the
//! symbol visited next. It is stored as the distinct successors ("edges")
//! followed by runs of successor ranks:
//!
//! ```text
//! outdegree, (successor delta, offset) * outdegree, RLE(rank, length) *
//! ```
//!
//! The offset of an edge `v -> w` is the number of visits in the record of
//! `w` that sort before the visits coming from `v`. Encoding and LF queries
//! are those of `gbwt::bwt`; this module turns successor sequences into runs.

use gbwt::bwt::{BWTBuilder, Record};
use gbwt::support::{RLEIter, Run};
use gbwt::{Pos, ENDMARKER};

use crate::shared::models::Symbol;

/// Append the record of a symbol from its successor sequence and edge offsets
///
/// `edges` must list every successor in `successors` exactly once, sorted by
/// symbol. An empty successor sequence appends an empty record.
pub fn append(builder: &mut BWTBuilder, edges: &[Pos], successors: &[Symbol]) {
    if successors.is_empty() {
        builder.append(&[], &[]);
        return;
    }

    let rank_of = |symbol: Symbol| edges.partition_point(|edge| edge.node < symbol);
    let mut runs: Vec<Run> = Vec::new();
    for &symbol in successors {
        let rank = rank_of(symbol);
        match runs.last_mut() {
            Some(run) if run.value == rank => run.len += 1,
            _ => runs.push(Run::new(rank, 1)),
        }
    }
    builder.append(edges, &runs);
}

/// Append a copy of `record`
///
/// If the record has an edge to the end marker, its offset is replaced with
/// `end_offset()` and `true` is returned.
pub fn copy<F>(builder: &mut BWTBuilder, record: Record<'_>, end_offset: F) -> bool
where
    F: FnOnce() -> usize,
{
    let (_, mut edges, bwt) = record.into_raw_parts();
    let runs: Vec<Run> = RLEIter::with_sigma(bwt, edges.len()).collect();
    let rewritten = match edges.first_mut() {
        Some(edge) if edge.node == ENDMARKER => {
            edge.offset = end_offset();
            true
        }
        _ => false,
    };
    builder.append(&edges, &runs);
    rewritten
}
