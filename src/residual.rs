use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use itertools::Itertools;

use crate::capacity::{min_capacity, Capacity};
use crate::graph::{GraphSpec, NodePair};

/// Dense residual capacities together with the traversal adjacency of an input graph.
///
/// Capacities are directed, but `neighbors` is symmetric: every input edge `(u, v)` makes `v` a
/// neighbour of `u` and `u` a neighbour of `v`, in input order. That is what lets the search walk
/// back along reverse residual arcs once flow has been pushed.
#[derive(Clone, Debug)]
pub struct ResidualNetwork<C> {
    capacity: Vec<Vec<C>>,
    neighbors: Vec<Vec<usize>>,
}

/// A shortest source-to-sink path along with the flow it can carry.
#[derive(Clone, Debug, PartialEq)]
pub struct AugmentingPath<C> {
    arcs: Vec<NodePair>,
    bottleneck: C,
}

impl<C: Copy> AugmentingPath<C> {
    pub fn arcs(&self) -> &[NodePair] {
        &self.arcs
    }

    pub fn bottleneck(&self) -> C {
        self.bottleneck
    }

    pub fn into_arcs(self) -> Vec<NodePair> {
        self.arcs
    }
}

// Bookkeeping of a single breadth-first search, dropped once the search returns.
struct Search<C> {
    visited: Vec<bool>,
    parent: Vec<Option<usize>>,
    queue: VecDeque<(usize, C)>,
}

impl<C: Capacity> Search<C> {
    fn new(n: usize, source: usize) -> Self {
        let mut visited = vec![false; n];
        visited[source] = true;

        let mut queue = VecDeque::with_capacity(n);
        queue.push_back((source, C::unbounded()));

        Self {
            visited,
            parent: vec![None; n],
            queue,
        }
    }

    // Expands nodes in FIFO order until `sink` is reached, returning the bottleneck on the way there.
    fn run(&mut self, network: &ResidualNetwork<C>, sink: usize) -> Option<C> {
        while let Some((u, bottleneck)) = self.queue.pop_front() {
            for &v in network.neighbors(u) {
                if self.visited[v] || !network.has_capacity(u, v) {
                    continue;
                }
                self.visited[v] = true;
                self.parent[v] = Some(u);

                let bottleneck = min_capacity(bottleneck, network.residual(u, v));
                if v == sink {
                    return Some(bottleneck);
                }
                self.queue.push_back((v, bottleneck));
            }
        }
        None
    }

    fn path_to(&self, sink: usize) -> Vec<NodePair> {
        let mut nodes = vec![sink];
        let mut v = sink;
        while let Some(u) = self.parent[v] {
            nodes.push(u);
            v = u;
        }
        nodes.reverse();
        nodes.into_iter().tuple_windows().collect()
    }
}

impl<C: Capacity> ResidualNetwork<C> {
    pub fn new(graph: &GraphSpec<C>) -> Self {
        let n = graph.n();
        let mut capacity = vec![vec![C::zero(); n]; n];
        let mut neighbors = vec![Vec::new(); n];

        for edge in graph.edges() {
            capacity[edge.u][edge.v] += edge.capacity;
            neighbors[edge.u].push(edge.v);
            neighbors[edge.v].push(edge.u);
        }

        Self {
            capacity,
            neighbors,
        }
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn residual(&self, u: usize, v: usize) -> C {
        self.capacity[u][v]
    }

    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.neighbors[u]
    }

    fn has_capacity(&self, u: usize, v: usize) -> bool {
        self.capacity[u][v] > C::tolerance()
    }

    /// Finds a path from `source` to `sink` with the fewest arcs among those with residual
    /// capacity, or `None` if the sink cannot be reached.
    pub fn shortest_augmenting_path(
        &self,
        source: usize,
        sink: usize,
    ) -> Option<AugmentingPath<C>> {
        let mut search = Search::new(self.node_count(), source);
        let bottleneck = search.run(self, sink)?;

        Some(AugmentingPath {
            arcs: search.path_to(sink),
            bottleneck,
        })
    }

    /// Pushes the path's bottleneck along every arc, moving it onto the reverse arcs.
    pub fn augment(&mut self, path: &AugmentingPath<C>) {
        let bottleneck = path.bottleneck();
        for &(u, v) in path.arcs() {
            self.capacity[u][v] -= bottleneck;
            self.capacity[v][u] += bottleneck;
        }
    }

    /// Flow attributed to the arc `(u, v)`: the capacity accumulated on its reverse arc, with
    /// anything at or below the tolerance reported as zero.
    pub fn pushed_flow(&self, u: usize, v: usize) -> C {
        let pushed = self.capacity[v][u];
        if pushed > C::tolerance() {
            pushed
        } else {
            C::zero()
        }
    }

    /// Marks every node reachable from `source` through arcs with residual capacity.
    pub fn reachable_from(&self, source: usize) -> Vec<bool> {
        let mut seen = vec![false; self.node_count()];
        seen[source] = true;

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for &v in self.neighbors(u) {
                if !seen[v] && self.has_capacity(u, v) {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
        seen
    }
}
