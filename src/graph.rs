//! # Dependency Graph and Topological Ordering
//!
//! This module provides the ordering engine used to sequence workspace
//! projects: a directed graph over dense integer vertex ids, an identity
//! mapper that assigns those ids to arbitrary labels, and a labeled graph
//! that composes the two into a reusable abstraction whose vertices are the
//! labels themselves.
//!
//! ## Key Components
//!
//! - **`Graph`**: a directed graph over zero-based `usize` vertex ids with
//!   edge insertion and depth-first topological sort.
//! - **`IdMapper`**: a bijective map between arbitrary hashable labels and
//!   dense integer ids, assigned in first-seen order.
//! - **`LabeledGraph`**: the composition of the two, exposing `add_edge` and
//!   `topo_sort` directly over labels.
//!
//! ## Ordering Semantics
//!
//! An edge `u -> v` means "v depends on u", i.e. `u` must be ordered before
//! `v`. `topo_sort` emits a reverse postorder of a depth-first traversal
//! started from each vertex in increasing id order, so dependencies appear
//! before their dependents and ties among unrelated vertices are broken by
//! first-seen order. The result is deterministic for a fixed edge-insertion
//! sequence.
//!
//! The graph is assumed acyclic. Vertices are marked visited on entry, so
//! traversal terminates on any input, but the order emitted for vertices
//! that participate in a true cycle is not a valid topological order.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Error, Result};

/// A directed graph over dense, zero-based `usize` vertex ids.
///
/// The vertex set is implicit: inserting an edge grows the graph to cover
/// both endpoints. Multi-edges are permitted and have no effect on the
/// computed order beyond the first occurrence.
#[derive(Debug, Default)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices, i.e. one past the highest id seen so far.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Record that `v` depends on `u` (`u` must be ordered before `v`).
    ///
    /// Grows the vertex set to cover both endpoints.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let needed = u.max(v) + 1;
        if needed > self.adjacency.len() {
            self.adjacency.resize_with(needed, Vec::new);
        }
        self.adjacency[u].push(v);
    }

    /// Produce one valid topological ordering of all vertices.
    ///
    /// Vertices are visited in increasing id order; each unvisited vertex is
    /// explored depth-first along its successors and emitted after all of
    /// them, yielding a reverse postorder in which every vertex precedes the
    /// vertices reachable from it.
    pub fn topo_sort(&self) -> Vec<usize> {
        let mut visited = vec![false; self.adjacency.len()];
        let mut postorder = Vec::with_capacity(self.adjacency.len());
        for v in 0..self.adjacency.len() {
            if !visited[v] {
                self.visit(v, &mut visited, &mut postorder);
            }
        }
        postorder.reverse();
        postorder
    }

    fn visit(&self, v: usize, visited: &mut [bool], postorder: &mut Vec<usize>) {
        visited[v] = true;
        for &succ in &self.adjacency[v] {
            if !visited[succ] {
                self.visit(succ, visited, postorder);
            }
        }
        postorder.push(v);
    }
}

/// A bijective map between labels and dense, zero-based integer ids.
///
/// Ids are assigned in first-seen order with no gaps: the id of a new label
/// always equals the current count of distinct labels. There is no removal
/// operation, so both directions of the mapping are stable for the lifetime
/// of the mapper. Not thread-safe; intended for single-threaded graph
/// construction.
#[derive(Debug)]
pub struct IdMapper<T> {
    items: Vec<T>,
    ids: HashMap<T, usize>,
}

impl<T> IdMapper<T>
where
    T: Eq + Hash + Clone,
{
    /// Create an empty mapper.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            ids: HashMap::new(),
        }
    }

    /// Number of distinct labels seen so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no labels have been seen.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Return the id for `item`, assigning the next sequential id if the
    /// label has not been seen before.
    pub fn fetch_id(&mut self, item: &T) -> usize {
        match self.ids.get(item) {
            Some(&id) => id,
            None => {
                let id = self.items.len();
                self.items.push(item.clone());
                self.ids.insert(item.clone(), id);
                id
            }
        }
    }

    /// Return the label previously assigned `id`.
    ///
    /// Fails with [`Error::InvalidVertex`] for an id that was never
    /// assigned; well-formed callers only map back ids they obtained from
    /// [`IdMapper::fetch_id`].
    pub fn fetch_item(&self, id: usize) -> Result<&T> {
        self.items.get(id).ok_or(Error::InvalidVertex { id })
    }
}

impl<T> Default for IdMapper<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A directed graph whose vertices are arbitrary labels.
///
/// Labels are translated to dense ids through an embedded [`IdMapper`] on
/// insertion (which may allocate new ids as a side effect) and translated
/// back when the topological order is extracted.
#[derive(Debug)]
pub struct LabeledGraph<T> {
    map: IdMapper<T>,
    graph: Graph,
}

impl<T> LabeledGraph<T>
where
    T: Eq + Hash + Clone,
{
    /// Create an empty labeled graph.
    pub fn new() -> Self {
        Self {
            map: IdMapper::new(),
            graph: Graph::new(),
        }
    }

    /// Record that label `v` depends on label `u`.
    pub fn add_edge(&mut self, u: &T, v: &T) {
        let u_id = self.map.fetch_id(u);
        let v_id = self.map.fetch_id(v);
        self.graph.add_edge(u_id, v_id);
    }

    /// Produce one valid topological ordering of all labels.
    ///
    /// See [`Graph::topo_sort`] for the ordering semantics.
    pub fn topo_sort(&self) -> Result<Vec<T>> {
        self.graph
            .topo_sort()
            .into_iter()
            .map(|id| self.map.fetch_item(id).cloned())
            .collect()
    }
}

impl<T> Default for LabeledGraph<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
