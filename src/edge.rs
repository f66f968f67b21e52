use std::fmt::{self, Display, Formatter};

use crate::vertex::Vertex;

/// Edge weight.  Any value is accepted, including zero and negatives.
pub type Weight = i64;

/// The weight used by [`Graph::connect_default`](crate::Graph::connect_default).
pub const DEFAULT_WEIGHT: Weight = 1;

/// A directed, weighted edge.
///
/// The neighbor is a copy of the target vertex taken when the edge was made.
/// Edges added to or removed from the target afterwards are not reflected
/// here; only the neighbor's value should be relied on.
#[derive(Clone, Debug)]
pub struct Edge<T> {
    neighbor: Vertex<T>,
    weight: Weight,
}

impl<T> Edge<T> {
    pub fn new(neighbor: Vertex<T>, weight: Weight) -> Self {
        Self { neighbor, weight }
    }

    pub fn neighbor(&self) -> &Vertex<T> {
        &self.neighbor
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl<T: Display> Display for Edge<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.neighbor.value(), self.weight)
    }
}
