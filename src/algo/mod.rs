use core::fmt::Debug;

use crate::graph::GraphSpec;
use crate::result::MaxFlowResult;

pub mod edmonds_karp;

/// A maximum flow algorithm.
pub trait MaxFlow {
    type Capacity;
    type Error: Debug;

    /// Run the algorithm over the specified graph and return the flow value along with the
    /// augmentations, per-edge flows and minimum cut it produced.
    fn max_flow(
        &mut self,
        graph: &GraphSpec<Self::Capacity>,
    ) -> Result<MaxFlowResult<Self::Capacity>, Self::Error>;
}
