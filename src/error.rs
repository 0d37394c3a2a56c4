use alloc::string::String;

use displaydoc::Display;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Invalid graph without any nodes
    EmptyGraph,
    /// Invalid node count {n}, expected a value in {min}..={max}
    NodeCountOutOfBounds { n: usize, min: usize, max: usize },
    /// Invalid source node {source}, expected a value below {n}
    SourceOutOfRange { source: usize, n: usize },
    /// Invalid sink node {sink}, expected a value below {n}
    SinkOutOfRange { sink: usize, n: usize },
    /// Invalid edge #{index} ({u} -> {v}), endpoints must be below {n}
    EdgeOutOfRange {
        index: usize,
        u: usize,
        v: usize,
        n: usize,
    },
    /// Invalid capacity on edge #{index}, expected non-negative value
    InvalidCapacity { index: usize },
    /// Total capacity up to edge #{index} overflows the capacity type
    ArithmeticOverflow { index: usize },
    /// Max flow algorithm specific error
    AlgoSpecific(String),
    /// Augmentation step #{step} does not extend the previous steps
    InconsistentLog { step: usize },
    /// {steps} augmentations exceed the bound of {bound}
    AugmentationBoundExceeded { steps: usize, bound: usize },
    /// Flow assignment #{index} does not match its input edge
    AssignmentMismatch { index: usize },
    /// Flow on {u} -> {v} is negative or exceeds the edge capacity
    CapacityExceeded { u: usize, v: usize },
    /// Flow is not conserved at node {node}
    FlowNotConserved { node: usize },
    /// Cut does not separate the nodes into a source side and a sink side
    InvalidCut,
}
