use std::fmt::Debug;

use thiserror::Error;

/// Error returned by the strict graph operations ([`Graph::try_connect`] and
/// [`Graph::try_remove_edge`]).  The permissive operations never produce it.
///
/// [`Graph::try_connect`]: crate::Graph::try_connect
/// [`Graph::try_remove_edge`]: crate::Graph::try_remove_edge
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<T: Debug> {
    /// No stored vertex has the given value.
    #[error("no vertex with value {value:?}")]
    VertexNotFound { value: T },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GraphError::VertexNotFound { value: "JFK" };
        assert_eq!(err.to_string(), r#"no vertex with value "JFK""#);
    }
}
