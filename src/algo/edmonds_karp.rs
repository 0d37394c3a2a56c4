use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::marker::PhantomData;

use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::graph::GraphSpec;
use crate::residual::ResidualNetwork;
use crate::result::{AugmentationStep, CutPartition, FlowAssignment, MaxFlowResult};

#[derive(Clone, Debug, Default)]
pub struct EdmondsKarp<C>(PhantomData<C>);

impl<C> MaxFlow for EdmondsKarp<C>
where
    C: Capacity,
{
    type Capacity = C;
    type Error = Infallible;

    fn max_flow(
        &mut self,
        graph: &GraphSpec<Self::Capacity>,
    ) -> Result<MaxFlowResult<Self::Capacity>, Self::Error> {
        Ok(edmonds_karp(graph))
    }
}

/// Computes a max flow from `graph.source()` to `graph.sink()` by repeatedly augmenting along a
/// shortest path of the residual network (Edmonds-Karp).
///
/// Besides the flow value, the result records every augmentation in order, the flow attributed to
/// each input edge (in input order) and the source/sink partition of the final residual network.
/// The outcome depends only on the input, including the order of its edges.
pub fn edmonds_karp<C: Capacity>(graph: &GraphSpec<C>) -> MaxFlowResult<C> {
    let (source, sink) = (graph.source(), graph.sink());
    let mut network = ResidualNetwork::new(graph);

    if source == sink {
        log::debug!("source and sink are both node {source}, skipping augmentation");

        let flow_assignments = graph
            .edges()
            .iter()
            .map(|e| FlowAssignment::new(e.u, e.v, C::zero()))
            .collect();

        let mut reached = vec![false; graph.n()];
        reached[source] = true;

        return MaxFlowResult::new(
            C::zero(),
            Vec::new(),
            flow_assignments,
            cut_partition(&network, &reached),
        );
    }

    let mut flow = C::zero();
    let mut logs = Vec::new();
    while let Some(path) = network.shortest_augmenting_path(source, sink) {
        let bottleneck = path.bottleneck();
        network.augment(&path);
        flow += bottleneck;

        log::trace!("{:?} carries {bottleneck}, flow so far {flow}", path.arcs());
        logs.push(AugmentationStep::new(path.into_arcs(), bottleneck, flow));
    }

    let flow_assignments = graph
        .edges()
        .iter()
        .map(|e| FlowAssignment::new(e.u, e.v, network.pushed_flow(e.u, e.v)))
        .collect();

    let min_cut = cut_partition(&network, &network.reachable_from(source));

    MaxFlowResult::new(flow, logs, flow_assignments, min_cut)
}

fn cut_partition<C: Capacity>(network: &ResidualNetwork<C>, reached: &[bool]) -> CutPartition {
    let (source_side, sink_side): (Vec<usize>, Vec<usize>) =
        (0..reached.len()).partition(|&node| reached[node]);

    let crossing_edges = source_side
        .iter()
        .flat_map(|&u| {
            network
                .neighbors(u)
                .iter()
                .filter(move |&&v| !reached[v])
                .map(move |&v| (u, v))
        })
        .collect();

    CutPartition::new(source_side, sink_side, crossing_edges)
}
