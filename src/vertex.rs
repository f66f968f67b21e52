use std::{
    fmt::{self, Debug, Display, Formatter},
    hash::Hash,
};

use derivative::Derivative;

use crate::edge::Edge;

/// A labeled vertex and its outgoing edges, in the order they were added.
///
/// Equality and hashing look at the value only, so a vertex works as a handle
/// by label: two vertices built independently from equal values are
/// interchangeable for every [`Graph`](crate::Graph) operation, whatever their
/// edge lists hold.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    Debug(bound = "T: Debug"),
    PartialEq(bound = "T: PartialEq"),
    Eq(bound = "T: Eq"),
    Hash(bound = "T: Hash")
)]
pub struct Vertex<T> {
    value: T,
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub(crate) neighbors: Vec<Edge<T>>,
}

impl<T> Vertex<T> {
    /// Creates a vertex with no outgoing edges.
    pub fn new(value: T) -> Self {
        Self {
            value,
            neighbors: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Gets the outgoing edges in insertion order.
    pub fn neighbors(&self) -> &[Edge<T>] {
        &self.neighbors
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Checks whether any outgoing edge points at a vertex with the given value.
    pub fn has_neighbor(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.neighbors
            .iter()
            .any(|edge| edge.neighbor().value() == value)
    }
}

impl<T> From<T> for Vertex<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Display> Display for Vertex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if self.neighbors.is_empty() {
            return Ok(());
        }
        write!(f, " ->")?;
        for edge in &self.neighbors {
            write!(f, " {edge}")?;
        }
        Ok(())
    }
}
