//! Directed Graph
//!
//! This module implements a generic directed graph stored as an adjacency
//! list, together with breadth-first shortest-path search.
//!
//! # Overview
//!
//! - Vertices are caller-supplied values of any `Eq + Hash` type
//! - Edges are directed: an edge from A to B says nothing about B to A
//! - Adding an edge creates any endpoint that is not yet a vertex
//! - Nothing is ever removed
//!
//! # Ordering
//!
//! Vertices and adjacency sets are kept in insertion order. Breadth-first
//! search visits neighbours in the order their edges were added, so when
//! several shortest paths exist the one returned is reproducible: it is the
//! path whose edges were added earliest at each hop.

mod digraph;
mod path;

pub use digraph::Graph;
