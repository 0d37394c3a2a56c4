use alloc::vec;
use alloc::vec::Vec;

use serde::Serialize;

use crate::capacity::Capacity;
use crate::graph::{GraphSpec, NodePair};

/// One augmentation of the Edmonds-Karp loop: the path used, the flow pushed along it and the
/// total flow after the push.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AugmentationStep<C> {
    augmenting_path: Vec<NodePair>,
    bottleneck: C,
    flow_so_far: C,
}

impl<C: Copy> AugmentationStep<C> {
    pub(crate) fn new(augmenting_path: Vec<NodePair>, bottleneck: C, flow_so_far: C) -> Self {
        Self {
            augmenting_path,
            bottleneck,
            flow_so_far,
        }
    }

    pub fn augmenting_path(&self) -> &[NodePair] {
        &self.augmenting_path
    }

    pub fn bottleneck(&self) -> C {
        self.bottleneck
    }

    pub fn flow_so_far(&self) -> C {
        self.flow_so_far
    }
}

/// Flow attributed to a single input edge.
///
/// Parallel copies of the same `(u, v)` pair all carry the combined flow of the pair rather than
/// a share of it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlowAssignment<C> {
    u: usize,
    v: usize,
    flow: C,
}

impl<C: Copy> FlowAssignment<C> {
    pub(crate) fn new(u: usize, v: usize, flow: C) -> Self {
        Self { u, v, flow }
    }

    pub fn endpoints(&self) -> NodePair {
        (self.u, self.v)
    }

    pub fn flow(&self) -> C {
        self.flow
    }
}

/// Source side `S` and sink side `T` of the final residual network.
///
/// `edges_S_to_T` lists every adjacency pair leading from `S` into `T`, whichever way the input
/// edge behind it was directed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CutPartition {
    #[serde(rename = "S")]
    source_side: Vec<usize>,
    #[serde(rename = "T")]
    sink_side: Vec<usize>,
    #[serde(rename = "edges_S_to_T")]
    crossing_edges: Vec<NodePair>,
}

impl CutPartition {
    pub(crate) fn new(
        source_side: Vec<usize>,
        sink_side: Vec<usize>,
        crossing_edges: Vec<NodePair>,
    ) -> Self {
        Self {
            source_side,
            sink_side,
            crossing_edges,
        }
    }

    pub fn source_side(&self) -> &[usize] {
        &self.source_side
    }

    pub fn sink_side(&self) -> &[usize] {
        &self.sink_side
    }

    pub fn crossing_edges(&self) -> &[NodePair] {
        &self.crossing_edges
    }

    /// Total input capacity running from `S` into `T`.
    pub fn capacity<C: Capacity>(&self, graph: &GraphSpec<C>) -> C {
        let mut on_source_side = vec![false; graph.n()];
        self.source_side
            .iter()
            .for_each(|&node| on_source_side[node] = true);

        graph
            .edges()
            .iter()
            .filter(|e| on_source_side[e.u] && !on_source_side[e.v])
            .map(|e| e.capacity)
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaxFlowResult<C> {
    max_flow: C,
    logs: Vec<AugmentationStep<C>>,
    flow_assignments: Vec<FlowAssignment<C>>,
    min_cut: CutPartition,
}

impl<C: Copy> MaxFlowResult<C> {
    pub(crate) fn new(
        max_flow: C,
        logs: Vec<AugmentationStep<C>>,
        flow_assignments: Vec<FlowAssignment<C>>,
        min_cut: CutPartition,
    ) -> Self {
        Self {
            max_flow,
            logs,
            flow_assignments,
            min_cut,
        }
    }

    pub fn max_flow(&self) -> C {
        self.max_flow
    }

    pub fn logs(&self) -> &[AugmentationStep<C>] {
        &self.logs
    }

    pub fn flow_assignments(&self) -> &[FlowAssignment<C>] {
        &self.flow_assignments
    }

    pub fn min_cut(&self) -> &CutPartition {
        &self.min_cut
    }
}
