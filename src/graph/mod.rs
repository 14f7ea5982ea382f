//! A fixed-size graph stored as a boolean adjacency matrix, plus the Eulerian
//! walk machinery built on top of it.
//!
//! The matrix costs `O(V²)` memory and the strong connectivity check is
//! `O(V³)`, which is fine for the small, hand-entered graphs this is meant for.
//! Connectivity lives behind the [`Connectivity`] trait so the Eulerian
//! feasibility rules never touch the matrix directly.
//!
//! # Examples
//!
//! ```
//! use euler_bst::graph::{Graph, Orientation};
//!
//! let mut graph = Graph::new(3, Orientation::Directed).unwrap();
//! graph.add_edge(0, 1).unwrap();
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 0).unwrap();
//!
//! assert_eq!(graph.find_euler_path().unwrap(), vec![0, 1, 2, 0]);
//! ```

use std::fmt;

use log::debug;

use crate::error::GraphError;

mod connectivity;
mod euler;

pub use connectivity::{transitive_closure, Connectivity};
pub use euler::{EulerKind, Walk};

/// The largest vertex count [`Graph::new`] accepts. The matrix holds `V²`
/// entries and the strong connectivity check is cubic in `V`.
pub const MAX_VERTICES: usize = 1024;

/// Whether edges have a direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// `u -> v` does not imply `v -> u`.
    Directed,
    /// Every edge can be walked both ways.
    Undirected,
}

/// A graph over the vertices `0..vertex_count`. Vertices are fixed at
/// construction; edges can only be added.
#[derive(Clone, PartialEq, Eq)]
pub struct Graph {
    orientation: Orientation,
    adjacency: Vec<Vec<bool>>,
    in_degree: Vec<usize>,
    out_degree: Vec<usize>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// Fails with [`GraphError::InvalidVertexCount`] when `vertex_count` is zero
    /// and with [`GraphError::TooManyVertices`] above [`MAX_VERTICES`].
    pub fn new(vertex_count: usize, orientation: Orientation) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount);
        }
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::TooManyVertices {
                vertex_count,
                max: MAX_VERTICES,
            });
        }
        Ok(Self {
            orientation,
            adjacency: vec![vec![false; vertex_count]; vertex_count],
            in_degree: vec![0; vertex_count],
            out_degree: vec![0; vertex_count],
            edge_count: 0,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added so far. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The orientation picked at construction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Shorthand for `orientation() == Orientation::Directed`.
    pub fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    /// Adds the edge `from -> to` (or `from - to` when undirected). Self-loops
    /// are allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use euler_bst::error::GraphError;
    /// use euler_bst::graph::{Graph, Orientation};
    ///
    /// let mut graph = Graph::new(2, Orientation::Undirected).unwrap();
    /// graph.add_edge(0, 1).unwrap();
    ///
    /// assert!(graph.has_edge(1, 0));
    /// assert_eq!(
    ///     graph.add_edge(1, 0),
    ///     Err(GraphError::DuplicateEdge { from: 1, to: 0 })
    /// );
    /// ```
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if self.adjacency[from][to] {
            return Err(GraphError::DuplicateEdge { from, to });
        }

        self.adjacency[from][to] = true;
        self.out_degree[from] += 1;
        self.in_degree[to] += 1;
        if self.orientation == Orientation::Undirected {
            self.adjacency[to][from] = true;
        }
        self.edge_count += 1;

        debug!("added edge {} -> {} ({} edges)", from, to, self.edge_count);
        Ok(())
    }

    /// Whether the matrix holds `from -> to`. Undirected edges answer both ways.
    /// Out-of-range vertices have no edges.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(false)
    }

    /// Vertices reachable from `vertex` over one edge, in increasing order.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter_map(|(to, &present)| present.then_some(to))
    }

    /// Every edge once, ordered by source then target. Undirected edges come
    /// out as `(low, high)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let directed = self.is_directed();
        (0..self.vertex_count()).flat_map(move |from| {
            self.neighbors(from)
                .filter(move |&to| directed || from <= to)
                .map(move |to| (from, to))
        })
    }

    /// Edges entering `vertex`, as counted when they were added. For undirected
    /// graphs use [`Graph::degree`] instead.
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.in_degree.get(vertex).copied().unwrap_or(0)
    }

    /// Edges leaving `vertex`, as counted when they were added. For undirected
    /// graphs use [`Graph::degree`] instead.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.out_degree.get(vertex).copied().unwrap_or(0)
    }

    /// The number of edge ends at `vertex`.
    ///
    /// Directed graphs sum in- and out-degree. Undirected graphs derive it from
    /// the matrix, with a self-loop contributing two ends.
    pub fn degree(&self, vertex: usize) -> usize {
        match self.orientation {
            Orientation::Directed => self.in_degree(vertex) + self.out_degree(vertex),
            Orientation::Undirected => self
                .neighbors(vertex)
                .map(|to| if to == vertex { 2 } else { 1 })
                .sum(),
        }
    }

    /// Vertices that keep an Eulerian walk from being a circuit, in index order.
    ///
    /// Undirected graphs report vertices of odd [`degree`][Graph::degree].
    /// Directed graphs report vertices whose in-degree and out-degree differ.
    pub fn odd_degree_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&v| match self.orientation {
                Orientation::Directed => self.in_degree(v) != self.out_degree(v),
                Orientation::Undirected => self.degree(v) % 2 == 1,
            })
            .collect()
    }

    /// Vertices with at least one edge, in index order.
    pub fn non_isolated_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&v| self.degree(v) > 0)
            .collect()
    }

    pub(crate) fn adjacency(&self) -> &[Vec<bool>] {
        &self.adjacency
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("orientation", &self.orientation)
            .field("vertex_count", &self.vertex_count())
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vertices_is_rejected() {
        assert_eq!(
            Graph::new(0, Orientation::Directed),
            Err(GraphError::InvalidVertexCount)
        );
    }

    #[test]
    fn oversized_vertex_count_is_rejected() {
        assert_eq!(
            Graph::new(10_000_000_000_000, Orientation::Undirected),
            Err(GraphError::TooManyVertices {
                vertex_count: 10_000_000_000_000,
                max: MAX_VERTICES
            })
        );
        assert_eq!(
            Graph::new(MAX_VERTICES + 1, Orientation::Directed),
            Err(GraphError::TooManyVertices {
                vertex_count: MAX_VERTICES + 1,
                max: MAX_VERTICES
            })
        );
        let graph = Graph::new(MAX_VERTICES, Orientation::Directed).unwrap();
        assert_eq!(graph.vertex_count(), MAX_VERTICES);
    }

    #[test]
    fn out_of_range_edge_is_rejected() {
        let mut graph = Graph::new(2, Orientation::Directed).unwrap();
        assert_eq!(
            graph.add_edge(0, 2),
            Err(GraphError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn directed_edges_track_degrees() {
        let mut graph = Graph::new(3, Orientation::Directed).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(2, 2).unwrap();

        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.in_degree(0), 0);
        assert_eq!(graph.in_degree(2), 2);
        assert_eq!(graph.out_degree(2), 1);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn undirected_edges_are_mirrored() {
        let mut graph = Graph::new(3, Orientation::Undirected).unwrap();
        graph.add_edge(2, 0).unwrap();

        assert!(graph.has_edge(0, 2));
        assert!(graph.has_edge(2, 0));
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 2)]);
        assert_eq!(
            graph.add_edge(0, 2),
            Err(GraphError::DuplicateEdge { from: 0, to: 2 })
        );
    }

    #[test]
    fn self_loop_counts_twice_when_undirected() {
        let mut graph = Graph::new(2, Orientation::Undirected).unwrap();
        graph.add_edge(1, 1).unwrap();
        graph.add_edge(0, 1).unwrap();

        assert_eq!(graph.degree(1), 3);
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.odd_degree_vertices(), vec![0, 1]);
    }

    #[test]
    fn directed_odd_vertices_are_the_unbalanced_ones() {
        let mut graph = Graph::new(4, Orientation::Directed).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(3, 3).unwrap();

        // Vertex 0 has even degree but two more edges out than in.
        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.odd_degree_vertices(), vec![0, 1, 2]);
    }

    #[test]
    fn isolated_vertices_are_skipped() {
        let mut graph = Graph::new(4, Orientation::Directed).unwrap();
        graph.add_edge(1, 3).unwrap();

        assert_eq!(graph.non_isolated_vertices(), vec![1, 3]);
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![3]);
        assert_eq!(graph.neighbors(9).count(), 0);
    }
}
