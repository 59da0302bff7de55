//! Read-only path-bearing graph capability

use super::graph::HandleGraph;
use crate::shared::models::{Handle, PathHandle, PathMetadata, PathSense};

/// Graph with embedded paths
pub trait PathHandleGraph: HandleGraph {
    /// Number of paths of all senses
    fn path_count(&self) -> usize;

    /// Visit every path in path handle order. Returns `false` if the
    /// iteratee stopped the iteration.
    fn for_each_path(&self, iteratee: &mut dyn FnMut(PathHandle) -> bool) -> bool;

    /// Full identity tuple of the path, or `None` for an unknown handle
    fn path_metadata(&self, path: PathHandle) -> Option<PathMetadata>;

    fn path_sense(&self, path: PathHandle) -> Option<PathSense> {
        self.path_metadata(path).map(|metadata| metadata.sense)
    }

    /// Handle visited by the first step, or `None` for an empty path
    fn first_step(&self, path: PathHandle) -> Option<Handle>;

    /// Visit the handles of the path in order. Returns `false` if the
    /// iteratee stopped the iteration.
    fn for_each_step(&self, path: PathHandle, iteratee: &mut dyn FnMut(Handle) -> bool) -> bool;

    /// Visit the paths with the given sense
    fn for_each_path_of_sense(
        &self,
        sense: PathSense,
        iteratee: &mut dyn FnMut(PathHandle) -> bool,
    ) -> bool {
        self.for_each_path(&mut |path| {
            if self.path_sense(path) == Some(sense) {
                iteratee(path)
            } else {
                true
            }
        })
    }

    /// Collect the handles of the path
    fn scan_path(&self, path: PathHandle) -> Vec<Handle> {
        let mut result = Vec::new();
        self.for_each_step(path, &mut |handle| {
            result.push(handle);
            true
        });
        result
    }
}
