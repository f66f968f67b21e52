//! [`Graph`] is a directed, weighted graph whose vertices are identified by
//! their values.
//!
//! Vertices are stored in insertion order and looked up with a linear scan
//! that returns the first match, so a graph may hold several vertices with the
//! same value.  Edges live in the outgoing list of their source vertex and
//! hold a snapshot of the target vertex (see [`Edge`]).
//!
//! Operations that need to find a vertex quietly do nothing when it is
//! missing.  [`Graph::try_connect`] and [`Graph::try_remove_edge`] report the
//! missing vertex as a [`GraphError`] instead.
use std::{
    fmt::{self, Debug, Display, Formatter},
    hash::Hash,
};

use derivative::Derivative;

use crate::{
    edge::{DEFAULT_WEIGHT, Edge, Weight},
    error::GraphError,
    tracing_support::{debug, trace},
    vertex::Vertex,
};

#[derive(Derivative)]
#[derivative(
    Default(bound = ""),
    Clone(bound = "T: Clone"),
    Debug(bound = "T: Debug")
)]
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets an iterator over the stored vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.iter()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Gets the total number of edges across all vertices.
    pub fn num_edges(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Renders each vertex on its own line, in insertion order.  A vertex
    /// without edges renders as its value; otherwise as
    /// `value -> n1(w1) n2(w2) ...`.
    pub fn render(&self) -> String
    where
        T: Display,
    {
        self.to_string()
    }
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates a graph holding `vertices` in the given order, then adds an
    /// edge for each `(from, to, weight)` triple as [`Graph::connect`] would.
    /// Triples whose source value is not among `vertices` are skipped.
    pub fn with_edges<'a, I>(vertices: Vec<Vertex<T>>, edges: I) -> Self
    where
        T: 'a,
        I: IntoIterator<Item = (&'a Vertex<T>, &'a Vertex<T>, Weight)>,
    {
        let mut graph = Self { vertices };
        for (from, to, weight) in edges {
            if graph.push_edge(from.value(), to, weight).is_none() {
                trace!("edge skipped: source vertex not in graph");
            }
        }
        debug!(
            num_vertices = graph.num_vertices(),
            num_edges = graph.num_edges(),
            "built graph"
        );
        graph
    }

    /// Appends a vertex with no edges and returns a copy of it.  No check is
    /// made for an existing vertex with the same value.
    pub fn insert_vertex(&mut self, value: T) -> Vertex<T> {
        let vertex = Vertex::new(value);
        self.vertices.push(vertex.clone());
        trace!(num_vertices = self.vertices.len(), "inserted vertex");
        vertex
    }

    /// Gets the first stored vertex with the given value.
    pub fn vertex(&self, value: &T) -> Option<&Vertex<T>> {
        self.vertices.iter().find(|v| v.value() == value)
    }

    /// Adds an edge from the first stored vertex matching `from` to a snapshot
    /// of `to`, then copies the stored edge list into `from` so the caller's
    /// handle shows the new edge.  Does nothing if no stored vertex matches
    /// `from`.
    pub fn connect(&mut self, from: &mut Vertex<T>, to: &Vertex<T>, weight: Weight) {
        if !self.connect_stored(from, to, weight) {
            trace!("connect skipped: source vertex not in graph");
        }
    }

    /// Like [`Graph::connect`] with [`DEFAULT_WEIGHT`].
    pub fn connect_default(&mut self, from: &mut Vertex<T>, to: &Vertex<T>) {
        self.connect(from, to, DEFAULT_WEIGHT);
    }

    /// Removes every stored vertex with the same value as `vertex`, and every
    /// edge pointing at that value from the vertices that remain.  Edges are
    /// stripped even when no stored vertex matched.  Returns the number of
    /// vertices removed.
    pub fn remove_vertex(&mut self, vertex: &Vertex<T>) -> usize {
        let before = self.vertices.len();
        self.vertices.retain(|v| v != vertex);
        let removed = before - self.vertices.len();

        for v in &mut self.vertices {
            strip_edges_to(&mut v.neighbors, vertex.value());
        }
        trace!(removed, num_edges = self.num_edges(), "removed vertex");
        removed
    }

    /// Removes every edge from the first stored vertex matching `from` whose
    /// neighbor has the same value as `to`.  The remaining edges keep their
    /// order.  Returns the number of edges removed, which is zero if `from`
    /// is not in the graph.
    pub fn remove_edge(&mut self, from: &Vertex<T>, to: &Vertex<T>) -> usize {
        match self.remove_stored_edges(from.value(), to.value()) {
            Some(removed) => {
                trace!(removed, "removed edges");
                removed
            }
            None => {
                trace!("remove_edge skipped: source vertex not in graph");
                0
            }
        }
    }

    fn stored_mut(&mut self, value: &T) -> Option<&mut Vertex<T>> {
        self.vertices.iter_mut().find(|v| v.value() == value)
    }

    /// Appends an edge to the first stored vertex with value `from`, returning
    /// that vertex.
    fn push_edge(&mut self, from: &T, to: &Vertex<T>, weight: Weight) -> Option<&Vertex<T>> {
        let stored = self.stored_mut(from)?;
        stored.neighbors.push(Edge::new(to.clone(), weight));
        Some(&*stored)
    }

    fn connect_stored(&mut self, from: &mut Vertex<T>, to: &Vertex<T>, weight: Weight) -> bool {
        match self.push_edge(from.value(), to, weight) {
            Some(stored) => {
                from.neighbors = stored.neighbors.clone();
                trace!(num_neighbors = from.neighbors.len(), weight, "connected");
                true
            }
            None => false,
        }
    }

    fn remove_stored_edges(&mut self, from: &T, to: &T) -> Option<usize> {
        let stored = self.stored_mut(from)?;
        Some(strip_edges_to(&mut stored.neighbors, to))
    }
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// Like [`Graph::connect`], but fails if no stored vertex matches `from`.
    pub fn try_connect(
        &mut self,
        from: &mut Vertex<T>,
        to: &Vertex<T>,
        weight: Weight,
    ) -> Result<(), GraphError<T>> {
        if self.connect_stored(from, to, weight) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound {
                value: from.value().clone(),
            })
        }
    }

    /// Like [`Graph::remove_edge`], but fails if no stored vertex matches
    /// `from`.
    pub fn try_remove_edge(
        &mut self,
        from: &Vertex<T>,
        to: &Vertex<T>,
    ) -> Result<usize, GraphError<T>> {
        self.remove_stored_edges(from.value(), to.value())
            .ok_or_else(|| GraphError::VertexNotFound {
                value: from.value().clone(),
            })
    }
}

/// Removes the edges whose neighbor has the given value and returns how many
/// were removed.
fn strip_edges_to<T: PartialEq>(edges: &mut Vec<Edge<T>>, value: &T) -> usize {
    let before = edges.len();
    edges.retain(|edge| edge.neighbor().value() != value);
    before - edges.len()
}

impl<T: Display> Display for Graph<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{vertex}")?;
        }
        Ok(())
    }
}
