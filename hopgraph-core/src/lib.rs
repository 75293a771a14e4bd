//! Hopgraph Core
//!
//! This crate provides a small generic directed graph. It implements:
//!
//! - Vertex and edge insertion with set semantics
//! - Membership and adjacency queries
//! - Unweighted shortest paths via breadth-first search
//!
//! # Architecture
//!
//! - `graph`: the [`Graph`] container and its traversals
//! - `error`: the error type returned by partial operations
//!
//! # Example
//!
//! ```rust
//! use hopgraph_core::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("home", "station");
//! graph.add_edge("station", "airport");
//! graph.add_edge("home", "taxi");
//! graph.add_edge("taxi", "airport");
//!
//! let path = graph.shortest_path(&"home", &"airport");
//! assert_eq!(path, Some(vec!["home", "station", "airport"]));
//! assert!(graph.shortest_path(&"airport", &"home").is_none());
//! ```

pub mod error;
pub mod graph;

pub use error::{GraphError, GraphResult};
pub use graph::Graph;
