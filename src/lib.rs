#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
pub mod capacity;
pub mod error;
pub mod graph;
pub mod residual;
pub mod result;

pub mod impls {
    pub mod default;
}

pub use crate::algo::edmonds_karp::EdmondsKarp;
pub use crate::algo::MaxFlow;
pub use crate::capacity::Capacity;
pub use crate::error::Error;
pub use crate::graph::{GraphSpec, InputEdge, NodePair, RawGraphSpec};
pub use crate::impls::default::DefaultSolver;
pub use crate::result::{AugmentationStep, CutPartition, FlowAssignment, MaxFlowResult};

/// A max-flow solver wrapping some algorithm together with a verification of its output.
pub trait FlowSolver {
    type Capacity;
    type Algo;
    type Error;

    /// Compute the maximum flow of `graph`.
    fn run(
        &mut self,
        graph: &GraphSpec<Self::Capacity>,
    ) -> Result<MaxFlowResult<Self::Capacity>, Self::Error>;

    /// Verify that `result` is a consistent max-flow outcome for `graph`.
    fn check(
        &self,
        graph: &GraphSpec<Self::Capacity>,
        result: &MaxFlowResult<Self::Capacity>,
    ) -> Result<(), Self::Error>;
}

/// Computes the maximum flow, augmentation trace, per-edge flows and minimum cut of `graph` using
/// Edmonds-Karp.
pub fn compute_max_flow<C: Capacity>(graph: &GraphSpec<C>) -> MaxFlowResult<C> {
    algo::edmonds_karp::edmonds_karp(graph)
}
