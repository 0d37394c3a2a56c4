use alloc::collections::{BTreeMap, BTreeSet};
use alloc::format;
use alloc::vec;

use crate::algo::MaxFlow;
use crate::capacity::{approx_eq, Capacity};
use crate::error::Error;
use crate::graph::{GraphSpec, NodePair};
use crate::result::MaxFlowResult;
use crate::FlowSolver;

#[derive(Clone, Debug)]
pub struct DefaultSolver<Algo> {
    algo: Algo,
}

impl<Algo> DefaultSolver<Algo> {
    pub fn new(algo: Algo) -> Self {
        Self { algo }
    }
}

impl<Algo> FlowSolver for DefaultSolver<Algo>
where
    Algo: MaxFlow,
    Algo::Capacity: Capacity,
{
    type Capacity = Algo::Capacity;
    type Algo = Algo;
    type Error = Error;

    fn run(
        &mut self,
        graph: &GraphSpec<Self::Capacity>,
    ) -> Result<MaxFlowResult<Self::Capacity>, Self::Error> {
        let result = self
            .algo
            .max_flow(graph)
            .map_err(|e| Error::AlgoSpecific(format!("{e:?}")))?;

        let cut = result.min_cut();
        log::info!("----------------------------------");
        log::info!("       Max flow = {}", result.max_flow());
        log::info!("  Augmentations = {}", result.logs().len());
        log::info!("    Source side = {:?}", cut.source_side());
        log::info!("      Sink side = {:?}", cut.sink_side());
        log::info!("   Cut capacity = {}", cut.capacity(graph));

        Ok(result)
    }

    fn check(
        &self,
        graph: &GraphSpec<Self::Capacity>,
        result: &MaxFlowResult<Self::Capacity>,
    ) -> Result<(), Self::Error> {
        check_logs(graph, result)?;
        check_assignments(graph, result)?;
        check_cut(graph, result)?;

        let cut_capacity = result.min_cut().capacity(graph);
        log::debug!("           nodes: {}", graph.n());
        log::debug!("           edges: {}", graph.edges().len());
        log::debug!("   augmentations: {}", result.logs().len());
        log::debug!("        max flow: {}", result.max_flow());
        log::debug!("    cut capacity: {cut_capacity}");
        if !approx_eq(cut_capacity, result.max_flow()) {
            log::debug!("cut capacity and max flow differ");
        }

        Ok(())
    }
}

// Every step pushes a positive amount along a contiguous source -> sink path and the running
// totals add up to the reported max flow.
fn check_logs<C: Capacity>(graph: &GraphSpec<C>, result: &MaxFlowResult<C>) -> Result<(), Error> {
    let steps = result.logs().len();
    let bound = graph.n() * graph.edges().len();
    if steps > bound {
        return Err(Error::AugmentationBoundExceeded { steps, bound });
    }

    let mut flow = C::zero();
    for (step, augmentation) in result.logs().iter().enumerate() {
        let path = augmentation.augmenting_path();
        let starts_at_source = path.first().map(|&(u, _)| u) == Some(graph.source());
        let ends_at_sink = path.last().map(|&(_, v)| v) == Some(graph.sink());
        let contiguous = path.windows(2).all(|w| w[0].1 == w[1].0);

        flow = match flow.checked_total(augmentation.bottleneck()) {
            Some(total) => total,
            None => return Err(Error::InconsistentLog { step }),
        };
        let positive = augmentation.bottleneck() > C::zero();

        if !(positive && starts_at_source && ends_at_sink && contiguous)
            || flow != augmentation.flow_so_far()
        {
            return Err(Error::InconsistentLog { step });
        }
    }

    if flow != result.max_flow() {
        return Err(Error::InconsistentLog { step: steps });
    }
    Ok(())
}

fn check_assignments<C: Capacity>(
    graph: &GraphSpec<C>,
    result: &MaxFlowResult<C>,
) -> Result<(), Error> {
    let assignments = result.flow_assignments();
    if assignments.len() != graph.edges().len() {
        return Err(Error::AssignmentMismatch {
            index: assignments.len().min(graph.edges().len()),
        });
    }

    // parallel copies report the same aggregate, so compare per distinct pair
    let mut capacities = BTreeMap::<NodePair, C>::new();
    let mut flows = BTreeMap::<NodePair, C>::new();
    for (index, (edge, assignment)) in graph.edges().iter().zip(assignments).enumerate() {
        if edge.endpoints() != assignment.endpoints() {
            return Err(Error::AssignmentMismatch { index });
        }
        *capacities.entry(edge.endpoints()).or_default() += edge.capacity;
        flows.insert(edge.endpoints(), assignment.flow());
    }

    let antiparallel = capacities
        .keys()
        .any(|&(u, v)| u != v && capacities.contains_key(&(v, u)));
    if antiparallel {
        log::debug!("antiparallel input edges, skipping capacity and conservation checks");
        return Ok(());
    }

    let mut inflow = vec![C::zero(); graph.n()];
    let mut outflow = vec![C::zero(); graph.n()];
    for (&(u, v), &flow) in &flows {
        if flow < C::zero() || flow > capacities[&(u, v)] + C::tolerance() {
            return Err(Error::CapacityExceeded { u, v });
        }
        outflow[u] += flow;
        inflow[v] += flow;
    }

    (0..graph.n())
        .filter(|&node| node != graph.source() && node != graph.sink())
        .find(|&node| !approx_eq(inflow[node], outflow[node]))
        .map_or(Ok(()), |node| Err(Error::FlowNotConserved { node }))
}

fn check_cut<C: Capacity>(graph: &GraphSpec<C>, result: &MaxFlowResult<C>) -> Result<(), Error> {
    let cut = result.min_cut();
    let source_side: BTreeSet<usize> = cut.source_side().iter().copied().collect();
    let sink_side: BTreeSet<usize> = cut.sink_side().iter().copied().collect();

    let is_partition = cut.source_side().len() + cut.sink_side().len() == graph.n()
        && source_side.len() + sink_side.len() == graph.n()
        && source_side.is_disjoint(&sink_side)
        && source_side.union(&sink_side).all(|&node| node < graph.n());
    let separates = source_side.contains(&graph.source())
        && (graph.source() == graph.sink() || sink_side.contains(&graph.sink()));
    let crossing = cut
        .crossing_edges()
        .iter()
        .all(|(u, v)| source_side.contains(u) && sink_side.contains(v));

    if is_partition && separates && crossing {
        Ok(())
    } else {
        Err(Error::InvalidCut)
    }
}
