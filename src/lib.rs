pub mod edge;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod tracing_support;
pub mod vertex;

pub use edge::{DEFAULT_WEIGHT, Edge, Weight};
pub use error::GraphError;
pub use graph::Graph;
pub use vertex::Vertex;
