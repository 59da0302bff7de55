//! Union-Find (Disjoint Set Union) over a dense node id range
//!
//! - Path splitting: each step of `find` relinks the child to its grandparent
//! - Union by rank: the shorter tree goes under the taller one
//!
//! Elements are node ids in `[offset, offset + n)`. The structure is built
//! once by the component finder and read through [`DisjointSets::sets`];
//! there is no removal.

use rustc_hash::FxHashMap;

use crate::shared::models::NodeId;

/// Union-Find with path splitting and union by rank
#[derive(Debug, Clone)]
pub struct DisjointSets {
    /// Parent pointers (self-loop = root)
    parent: Vec<usize>,

    /// Rank (tree height upper bound). At most ~log(n).
    rank: Vec<u8>,

    /// Node `i` is stored at `i - offset`
    offset: NodeId,

    /// Number of disjoint sets
    set_count: usize,
}

impl DisjointSets {
    /// Create `n` singleton sets for node ids `[offset, offset + n)`
    pub fn new(n: usize, offset: NodeId) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            offset,
            set_count: n,
        }
    }

    /// Total number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    #[inline]
    pub fn count(&self) -> usize {
        self.set_count
    }

    /// Is the node id inside the represented range
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node >= self.offset && node - self.offset < self.len() as NodeId
    }

    #[inline]
    fn element(&self, node: NodeId) -> usize {
        debug_assert!(self.contains(node), "node {} outside union-find range", node);
        (node - self.offset) as usize
    }

    fn find_element(&mut self, mut element: usize) -> usize {
        while self.parent[element] != element {
            let next = self.parent[element];
            self.parent[element] = self.parent[next];
            element = next;
        }
        element
    }

    /// Find the representative of the set containing `node`
    ///
    /// Complexity: O(α(n)) amortized
    #[inline]
    pub fn find(&mut self, node: NodeId) -> NodeId {
        let element = self.element(node);
        self.find_element(element) as NodeId + self.offset
    }

    /// Union the sets containing `a` and `b`
    ///
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let (ea, eb) = (self.element(a), self.element(b));
        let mut root_a = self.find_element(ea);
        let mut root_b = self.find_element(eb);
        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] < self.rank[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        if self.rank[root_a] == self.rank[root_b] {
            self.rank[root_a] += 1;
        }

        self.set_count -= 1;
        true
    }

    /// Check if two nodes are in the same set
    #[inline]
    pub fn connected(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Group the node ids by set
    ///
    /// Nodes rejected by `include_node` are skipped. Sets are listed in the
    /// order their representative is first encountered while scanning the
    /// ids in ascending order, and nodes inside a set are ascending.
    pub fn sets<F>(&mut self, mut include_node: F) -> Vec<Vec<NodeId>>
    where
        F: FnMut(NodeId) -> bool,
    {
        let mut result: Vec<Vec<NodeId>> = Vec::new();
        let mut root_to_set: FxHashMap<usize, usize> = FxHashMap::default();

        for element in 0..self.len() {
            let node = element as NodeId + self.offset;
            if !include_node(node) {
                continue;
            }
            let root = self.find_element(element);
            let set = *root_to_set.entry(root).or_insert_with(|| {
                result.push(Vec::new());
                result.len() - 1
            });
            result[set].push(node);
        }

        result
    }
}
