//! Partitioned construction against monolithic construction
//!
//! - merged partial indexes equal one index over all paths in job order
//! - the record cache never changes what extraction returns
//! - extraction through a shared cache is safe from many threads

mod common;

use common::*;
use pangraph_index::{
    assign_paths, build_record_cache, insert_paths, plan_construction_jobs, ConstructionPipeline,
    HandleGraph, IndexBuilder, IndexMerge, IndexQuery, MemoryGraph, PangraphError,
    PartitionConfig, PathHandle, RecordCache, RunLengthIndex, RunLengthIndexBuilder, Symbol,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rayon::prelude::*;

/// One index over every routed path, inserted in job order
fn monolithic(graph: &MemoryGraph, assigned: &[Vec<PathHandle>]) -> RunLengthIndex {
    let mut builder = RunLengthIndexBuilder::new();
    for (job, paths) in assigned.iter().enumerate() {
        insert_paths(graph, paths, &mut builder, job).unwrap();
    }
    builder.finish().unwrap()
}

/// Both orientations of every routed path, in job order
fn expected_sequences(graph: &MemoryGraph, assigned: &[Vec<PathHandle>]) -> Vec<Vec<Symbol>> {
    assigned
        .iter()
        .flatten()
        .flat_map(|&path| [path_symbols(graph, path), reverse_symbols(graph, path)])
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_merged_equals_monolithic(
        graph in arb_graph_with_paths(30, 40, 12),
        num_jobs in 1usize..6,
        parallel_jobs in 1usize..4,
    ) {
        let config = PartitionConfig::default()
            .with_approximate_num_jobs(num_jobs)
            .with_parallel_jobs(parallel_jobs);
        let outcome = ConstructionPipeline::new(config)
            .unwrap()
            .run(&graph, |_| RunLengthIndexBuilder::new())
            .unwrap();

        let jobs = plan_construction_jobs(&graph, graph.node_count() / num_jobs);
        let assigned = assign_paths(&graph, &jobs, None, None);
        prop_assert_eq!(&outcome.jobs, &jobs);
        prop_assert_eq!(&outcome.index, &monolithic(&graph, &assigned));
        assert_sequences(&outcome.index, &expected_sequences(&graph, &assigned));
        prop_assert_eq!(outcome.metadata.paths().len() * 2, outcome.index.sequences());
    }

    #[test]
    fn prop_cache_preserves_extraction(
        graph in arb_graph_with_paths(30, 40, 12),
        threshold in prop_oneof![Just(0usize), 1usize..16, Just(usize::MAX)],
    ) {
        let jobs = plan_construction_jobs(&graph, graph.node_count());
        let assigned = assign_paths(&graph, &jobs, None, None);
        let index = monolithic(&graph, &assigned);
        let cache = RecordCache::new(&index, threshold);

        for sequence in 0..index.sequences() {
            prop_assert_eq!(cache.extract(sequence), index.extract(sequence));
        }
        prop_assert!(cache.extract(index.sequences()).is_empty());
        if threshold == usize::MAX {
            prop_assert!(cache.is_empty());
        }
    }
}

#[test]
fn test_zero_threshold_caches_every_used_record() {
    let mut graph = graph_with_edges(
        1..=4,
        &[(1, false, 2, false), (2, false, 3, false), (2, false, 4, false)],
    );
    add_walks(&mut graph, &[(0, false, vec![0, 0]), (0, false, vec![0, 1])]);
    let jobs = plan_construction_jobs(&graph, 4);
    let assigned = assign_paths(&graph, &jobs, None, None);
    let index = monolithic(&graph, &assigned);

    let cache = RecordCache::new(&index, 0);
    let used = (index.first_node()..index.sigma())
        .filter(|&symbol| !index.is_empty_record(symbol))
        .count();
    assert_eq!(cache.len(), used);
    // Two paths of three nodes in both orientations
    assert_eq!(cache.decompressed_positions(), 12);
}

#[test]
fn test_concurrent_extraction() {
    let mut graph = graph_with_edges(
        1..=6,
        &[
            (1, false, 2, false),
            (2, false, 3, false),
            (1, false, 3, false),
            (4, false, 5, true),
            (5, true, 6, false),
        ],
    );
    let walks: Vec<Walk> = (0..24)
        .map(|i| (if i % 2 == 0 { 0 } else { 3 }, false, vec![i, i + 1]))
        .collect();
    add_walks(&mut graph, &walks);

    let config = PartitionConfig::default()
        .with_approximate_num_jobs(2)
        .with_parallel_jobs(2)
        .with_record_cache_bytes(0);
    let outcome = ConstructionPipeline::new(config.clone())
        .unwrap()
        .run(&graph, |_| RunLengthIndexBuilder::new())
        .unwrap();
    let cache = build_record_cache(&outcome.index, &config);
    assert!(!cache.is_empty());

    let extracted: Vec<Vec<Symbol>> = (0..outcome.index.sequences())
        .into_par_iter()
        .map(|sequence| cache.extract(sequence))
        .collect();
    for (sequence, symbols) in extracted.iter().enumerate() {
        assert_eq!(symbols, &outcome.index.extract(sequence));
    }
}

#[test]
fn test_merge_rejects_shared_nodes() {
    let mut left = RunLengthIndexBuilder::new();
    left.insert(&[2, 4], true).unwrap();
    let mut right = RunLengthIndexBuilder::new();
    right.insert(&[4, 6], true).unwrap();

    let parts = vec![left.finish().unwrap(), right.finish().unwrap()];
    assert!(matches!(
        RunLengthIndex::merge(parts),
        Err(PangraphError::Merge(_))
    ));
}

#[test]
fn test_sample_positions_with_node_lengths() {
    let mut builder = RunLengthIndexBuilder::new();
    builder.insert(&[2, 4, 6, 8, 10], true).unwrap();
    let index = builder.finish().unwrap();
    let cache = RecordCache::new(&index, 0);

    // Node lengths 10, 20, 30, 40, 50
    let samples = cache.sample_positions(0, 25, |symbol| 10 * (symbol / 2));
    assert_eq!(samples.length, 150);
    let offsets: Vec<usize> = samples.samples.iter().map(|(offset, _)| *offset).collect();
    assert_eq!(offsets, vec![0, 30, 60, 100]);
    assert!(cache.sample_positions(5, 25, |_| 1).samples.is_empty());
}
