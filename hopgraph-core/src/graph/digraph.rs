//! Graph Storage
//!
//! The adjacency list backing [`Graph`], plus insertion and query operations.

use std::fmt;
use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::error::{GraphError, GraphResult};

/// A directed graph over vertices of type `V`.
///
/// Each vertex maps to the set of vertices it has an edge toward. Every
/// vertex appearing in an adjacency set is also a key of the map.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// Vertex -> adjacency set, both in insertion order.
    adjacency: IndexMap<V, IndexSet<V>>,
}

impl<V: Eq + Hash> Graph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }

    /// Create an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(vertices),
        }
    }

    /// Add a vertex with no outgoing edges.
    ///
    /// Returns `true` if the vertex was new, `false` if it already existed.
    /// An existing vertex keeps its edges.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.insert_vertex(vertex).1
    }

    /// Add the directed edge `from -> to`.
    ///
    /// Either endpoint that is not yet a vertex is added first. Returns
    /// `false` without changing anything if the edge already exists.
    /// Self-loops are allowed.
    pub fn add_edge(&mut self, from: V, to: V) -> bool
    where
        V: Clone,
    {
        let (index, _) = self.insert_vertex(from);
        if !self.adjacency.contains_key(&to) {
            self.insert_vertex(to.clone());
        }

        let Some((_, neighbours)) = self.adjacency.get_index_mut(index) else {
            return false;
        };
        let inserted = neighbours.insert(to);
        if inserted {
            trace!(from = index, out_degree = neighbours.len(), "edge added");
        }
        inserted
    }

    /// Check whether `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Check whether the directed edge `from -> to` is in the graph.
    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbours| neighbours.contains(to))
    }

    /// Get the vertices directly reachable from `vertex` over one edge.
    ///
    /// The returned set is a read-only view in edge insertion order; clone
    /// it for an owned copy.
    pub fn adjacents(&self, vertex: &V) -> GraphResult<&IndexSet<V>> {
        self.adjacency.get(vertex).ok_or(GraphError::VertexNotFound)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct directed edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Iterate over edges as `(from, to)` pairs, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.adjacency
            .iter()
            .flat_map(|(from, neighbours)| neighbours.iter().map(move |to| (from, to)))
    }

    /// Adjacency set of a vertex, if present.
    pub(super) fn neighbours(&self, vertex: &V) -> Option<&IndexSet<V>> {
        self.adjacency.get(vertex)
    }

    /// The graph's own copy of `vertex`, if present.
    pub(super) fn stored(&self, vertex: &V) -> Option<&V> {
        self.adjacency.get_key_value(vertex).map(|(stored, _)| stored)
    }

    /// Insert a vertex if absent. Returns its index and whether it was new.
    fn insert_vertex(&mut self, vertex: V) -> (usize, bool) {
        match self.adjacency.entry(vertex) {
            Entry::Occupied(slot) => (slot.index(), false),
            Entry::Vacant(slot) => {
                let index = slot.index();
                slot.insert(IndexSet::new());
                trace!(index, "vertex added");
                (index, true)
            }
        }
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<V: Eq + Hash + Clone> Extend<(V, V)> for Graph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}

/// Renders the adjacency list as `{a: [b, c], b: [], c: []}`.
impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, (vertex, neighbours)) in self.adjacency.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{vertex}: [")?;
            for (slot, neighbour) in neighbours.iter().enumerate() {
                if slot > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{neighbour}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}
