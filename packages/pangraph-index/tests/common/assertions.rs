//! Custom assertions for test verification

use std::collections::HashMap;

use pangraph_index::{
    ConstructionJobs, EdgeDirection, Handle, HandleGraph, NodeId, RunLengthIndex, Symbol,
};

/// Assert that every edge between ordered handles goes forward in `order`
pub fn assert_topological<G: HandleGraph + ?Sized>(graph: &G, order: &[Handle]) {
    let rank: HashMap<Handle, usize> = order.iter().enumerate().map(|(i, &h)| (h, i)).collect();
    assert_eq!(rank.len(), order.len(), "order repeats a handle: {:?}", order);
    for &handle in order {
        graph.follow_edges(handle, EdgeDirection::Right, &mut |next| {
            if let Some(&next_rank) = rank.get(&next) {
                assert!(
                    rank[&handle] < next_rank,
                    "edge {} -> {} goes backwards in {:?}",
                    handle,
                    next,
                    order
                );
            }
            true
        });
    }
}

/// Assert the structural guarantees of a job partition
pub fn assert_valid_jobs<G: HandleGraph + ?Sized>(
    graph: &G,
    jobs: &ConstructionJobs,
    size_bound: usize,
) {
    let mut nodes: Vec<NodeId> = Vec::new();
    graph.for_each_handle(&mut |handle| {
        nodes.push(handle.id());
        true
    });

    // Every node in exactly one component and job
    let mut counts = vec![0usize; jobs.size()];
    for &node in &nodes {
        let job = jobs
            .job(node)
            .unwrap_or_else(|| panic!("node {} has no job", node));
        counts[job] += 1;

        let component = jobs
            .component(node)
            .unwrap_or_else(|| panic!("node {} has no component", node));
        assert!(
            jobs.weakly_connected_components()[component].contains(&node),
            "component {} does not contain node {}",
            component,
            node
        );
        assert_eq!(
            jobs.job_for_component(component),
            Some(job),
            "node {} and its component {} are in different jobs",
            node,
            component
        );
    }
    assert_eq!(counts, jobs.nodes_per_job());
    assert_eq!(
        jobs.nodes_per_job().iter().sum::<usize>(),
        graph.node_count()
    );

    // Components are packed in order, and jobs above the bound hold one
    let per_job = jobs.components_per_job();
    let flattened: Vec<usize> = per_job.iter().flatten().copied().collect();
    assert_eq!(flattened, (0..jobs.components()).collect::<Vec<_>>());
    for (job, components) in per_job.iter().enumerate() {
        assert!(!components.is_empty(), "job {} is empty", job);
        if jobs.nodes_per_job()[job] > size_bound {
            assert_eq!(components.len(), 1, "oversized job {} is shared", job);
        }
    }
}

/// Assert that the index stores exactly these sequences, in order
pub fn assert_sequences(index: &RunLengthIndex, expected: &[Vec<Symbol>]) {
    use pangraph_index::IndexQuery;

    assert_eq!(index.sequences(), expected.len());
    for (i, sequence) in expected.iter().enumerate() {
        assert_eq!(&index.extract(i), sequence, "sequence {}", i);
    }
}
