//! Error types for graph operations.

use thiserror::Error;

/// Errors returned by partial graph operations.
///
/// Queries that have a natural empty answer, such as a shortest path
/// between unconnected vertices, return `None` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The queried vertex was never added to the graph.
    #[error("vertex is not in the graph")]
    VertexNotFound,
}

/// Convenience alias for results of graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_not_found_message() {
        assert_eq!(
            GraphError::VertexNotFound.to_string(),
            "vertex is not in the graph"
        );
    }
}
