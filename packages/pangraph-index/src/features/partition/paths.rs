//! Routing paths to construction jobs

use tracing::{debug, warn};

use super::jobs::ConstructionJobs;
use crate::errors::Result;
use crate::shared::models::{PathHandle, PathSense, Symbol};
use crate::shared::ports::{IndexBuilder, MetadataRecorder, PathHandleGraph};

/// Assign generic and reference paths to the job of their first node
///
/// Haplotype paths are not routed. Paths rejected by `path_filter`, empty
/// paths, and paths starting outside every job are skipped. Each routed path
/// is registered with `metadata` together with its job.
pub fn assign_paths<G>(
    graph: &G,
    jobs: &ConstructionJobs,
    mut metadata: Option<&mut dyn MetadataRecorder>,
    path_filter: Option<&dyn Fn(PathHandle) -> bool>,
) -> Vec<Vec<PathHandle>>
where
    G: PathHandleGraph + ?Sized,
{
    let mut result: Vec<Vec<PathHandle>> = vec![Vec::new(); jobs.size()];
    let mut unroutable = 0usize;

    graph.for_each_path(&mut |path| {
        let Some(path_metadata) = graph.path_metadata(path) else {
            return true;
        };
        if !matches!(path_metadata.sense, PathSense::Generic | PathSense::Reference) {
            return true;
        }
        if path_filter.is_some_and(|accept| !accept(path)) {
            return true;
        }
        let Some(first) = graph.first_step(path) else {
            return true;
        };
        let Some(job) = jobs.job(first.id()).filter(|&job| job < result.len()) else {
            unroutable += 1;
            return true;
        };

        result[job].push(path);
        if let Some(recorder) = metadata.as_mut() {
            recorder.add_path(&path_metadata, job);
        }
        true
    });

    if unroutable > 0 {
        warn!(unroutable, "paths starting outside the construction jobs were skipped");
    }
    debug!(
        jobs = result.len(),
        paths = result.iter().map(Vec::len).sum::<usize>(),
        "assigned paths to jobs"
    );
    result
}

/// Insert the paths into an index builder in both orientations
///
/// Returns the number of symbols inserted in the forward orientation.
pub fn insert_paths<G, B>(
    graph: &G,
    paths: &[PathHandle],
    builder: &mut B,
    job: usize,
) -> Result<usize>
where
    G: PathHandleGraph + ?Sized,
    B: IndexBuilder,
{
    if !paths.is_empty() {
        debug!(job, paths = paths.len(), "inserting paths");
    }
    let mut buffer: Vec<Symbol> = Vec::new();
    let mut symbols = 0;
    for &path in paths {
        buffer.clear();
        graph.for_each_step(path, &mut |handle| {
            buffer.push(handle.to_symbol());
            true
        });
        builder.insert(&buffer, true)?;
        symbols += buffer.len();
    }
    Ok(symbols)
}
