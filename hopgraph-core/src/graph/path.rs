//! Shortest Paths
//!
//! Unweighted shortest paths by breadth-first search.
//!
//! # Algorithm
//!
//! 1. If either endpoint is not a vertex, there is no path
//! 2. Seed a FIFO queue with the start vertex and record it with no predecessor
//! 3. Pop the front vertex:
//!    - If it is the destination, walk predecessors back to the start
//!    - Otherwise record and enqueue every neighbour not seen yet
//! 4. If the queue drains first, the destination is unreachable
//!
//! BFS explores vertices in non-decreasing hop distance, so the first time a
//! vertex is reached is along a path with the fewest edges.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use tracing::debug;

use super::digraph::Graph;

/// Predecessor of each discovered vertex. Its keys are the visited set.
type Predecessors<'a, V> = HashMap<&'a V, Option<&'a V>>;

impl<V: Eq + Hash> Graph<V> {
    /// Find a path with the fewest edges from `from` to `to`.
    ///
    /// Returns the vertices from start to destination inclusive, or `None`
    /// if either vertex is missing or `to` is unreachable. A vertex reaches
    /// itself by the single-element path `[from]`.
    pub fn shortest_path(&self, from: &V, to: &V) -> Option<Vec<V>>
    where
        V: Clone,
    {
        let path = self.search(from, to)?;
        Some(path.into_iter().cloned().collect())
    }

    /// Number of edges on a shortest path from `from` to `to`.
    pub fn distance(&self, from: &V, to: &V) -> Option<usize> {
        self.search(from, to).map(|path| path.len() - 1)
    }

    fn search<'a>(&'a self, from: &V, to: &V) -> Option<Vec<&'a V>> {
        let start = self.stored(from)?;
        if !self.contains_vertex(to) {
            return None;
        }

        let mut predecessors: Predecessors<'a, V> = HashMap::new();
        let mut queue = VecDeque::new();
        predecessors.insert(start, None);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == to {
                let path = reconstruct(&predecessors, current);
                debug!(
                    hops = path.len() - 1,
                    explored = predecessors.len(),
                    "shortest path found"
                );
                return Some(path);
            }

            for neighbour in self.neighbours(current).into_iter().flatten() {
                if let Entry::Vacant(slot) = predecessors.entry(neighbour) {
                    slot.insert(Some(current));
                    queue.push_back(neighbour);
                }
            }
        }

        debug!(explored = predecessors.len(), "no path between vertices");
        None
    }
}

/// Walk predecessor links back from `target` and return the path start-first.
fn reconstruct<'a, V: Eq + Hash>(
    predecessors: &Predecessors<'a, V>,
    target: &'a V,
) -> Vec<&'a V> {
    let mut path = vec![target];
    let mut cursor = target;
    while let Some(&Some(previous)) = predecessors.get(&cursor) {
        path.push(previous);
        cursor = previous;
    }
    path.reverse();
    path
}
