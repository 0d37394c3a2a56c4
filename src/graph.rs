use alloc::vec::Vec;
use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::capacity::Capacity;
use crate::error::Error;

/// A directed arc between two node indices.
pub type NodePair = (usize, usize);

/// A directed, capacitated edge of the input graph.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct InputEdge<C> {
    pub u: usize,
    pub v: usize,
    pub capacity: C,
}

impl<C> InputEdge<C> {
    pub fn new(u: usize, v: usize, capacity: C) -> Self {
        Self { u, v, capacity }
    }

    pub fn endpoints(&self) -> NodePair {
        (self.u, self.v)
    }
}

/// A validated flow network: node count, ordered edge list and the two terminals.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(
    try_from = "RawGraphSpec<C>",
    bound(deserialize = "C: Capacity + Deserialize<'de>")
)]
pub struct GraphSpec<C> {
    n: usize,
    edges: Vec<InputEdge<C>>,
    source: usize,
    sink: usize,
}

impl<C: Capacity> GraphSpec<C> {
    pub fn new(
        n: usize,
        edges: Vec<InputEdge<C>>,
        source: usize,
        sink: usize,
    ) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::EmptyGraph);
        }
        if source >= n {
            return Err(Error::SourceOutOfRange { source, n });
        }
        if sink >= n {
            return Err(Error::SinkOutOfRange { sink, n });
        }

        // every residual entry and every running flow total stays below this sum
        let mut total = C::zero();
        for (index, edge) in edges.iter().enumerate() {
            if edge.u >= n || edge.v >= n {
                return Err(Error::EdgeOutOfRange {
                    index,
                    u: edge.u,
                    v: edge.v,
                    n,
                });
            }
            // NaN fails this comparison as well, infinity fails the finiteness check
            if !(edge.capacity >= C::zero())
                || edge.capacity.checked_total(C::zero()).is_none()
            {
                return Err(Error::InvalidCapacity { index });
            }
            total = total
                .checked_total(edge.capacity)
                .ok_or(Error::ArithmeticOverflow { index })?;
        }

        Ok(Self {
            n,
            edges,
            source,
            sink,
        })
    }

    /// Rejects graphs whose node count falls outside of `bounds`.
    pub fn ensure_node_count(&self, bounds: RangeInclusive<usize>) -> Result<(), Error> {
        if bounds.contains(&self.n) {
            Ok(())
        } else {
            Err(Error::NodeCountOutOfBounds {
                n: self.n,
                min: *bounds.start(),
                max: *bounds.end(),
            })
        }
    }
}

impl<C> GraphSpec<C> {
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn edges(&self) -> &[InputEdge<C>] {
        &self.edges
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RawGraphSpec<C> {
    pub n: usize,
    pub edges: Vec<InputEdge<C>>,
    pub source: usize,
    pub sink: usize,
}

impl<C: Capacity> TryFrom<RawGraphSpec<C>> for GraphSpec<C> {
    type Error = Error;

    fn try_from(g: RawGraphSpec<C>) -> Result<Self, Self::Error> {
        Self::new(g.n, g.edges, g.source, g.sink)
    }
}

impl<C> From<GraphSpec<C>> for RawGraphSpec<C> {
    fn from(g: GraphSpec<C>) -> Self {
        Self {
            n: g.n,
            edges: g.edges,
            source: g.source,
            sink: g.sink,
        }
    }
}
