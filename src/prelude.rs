pub use crate::edge::{DEFAULT_WEIGHT, Edge, Weight};
pub use crate::error::GraphError;
pub use crate::graph::Graph;
pub use crate::vertex::Vertex;
