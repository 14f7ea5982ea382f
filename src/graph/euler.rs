//! Eulerian circuit/path feasibility and reconstruction.

use std::fmt;

use log::{debug, info};

use super::{Connectivity, Graph, Orientation};
use crate::error::GraphError;

/// What kind of Eulerian walk a graph admits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EulerKind {
    /// A closed walk: it ends where it started.
    Circuit,
    /// An open walk between two distinct vertices.
    Path {
        /// Where the walk must begin.
        start: usize,
        /// Where the walk must end.
        end: usize,
    },
}

/// A sequence of vertices that uses every edge of a graph exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    vertices: Vec<usize>,
}

impl Walk {
    /// The visited vertices in order. There is one more vertex than edges.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Consumes the walk, yielding the visited vertices.
    pub fn into_vec(self) -> Vec<usize> {
        self.vertices
    }

    /// First vertex of the walk.
    pub fn start(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    /// Last vertex of the walk.
    pub fn end(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Whether the walk returns to its start.
    pub fn is_closed(&self) -> bool {
        self.start() == self.end()
    }
}

impl PartialEq<Vec<usize>> for Walk {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.vertices == other
    }
}

impl fmt::Display for Walk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices = self.vertices.iter();
        if let Some(first) = vertices.next() {
            write!(f, "{}", first)?;
            for vertex in vertices {
                write!(f, " {}", vertex)?;
            }
        }
        Ok(())
    }
}

impl Graph {
    /// Decides whether the graph has an Eulerian circuit or path.
    ///
    /// Directed graphs need every vertex balanced (circuit) or exactly one
    /// vertex with one extra outgoing edge and one with one extra incoming
    /// edge (path). Undirected graphs need zero or two odd-degree vertices.
    /// In both cases every vertex carrying an edge must belong to the same
    /// component: strongly connected for a directed circuit, connected
    /// ignoring direction otherwise. Isolated vertices are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use euler_bst::graph::{EulerKind, Graph, Orientation};
    ///
    /// let mut graph = Graph::new(3, Orientation::Undirected).unwrap();
    /// graph.add_edge(0, 1).unwrap();
    /// graph.add_edge(1, 2).unwrap();
    ///
    /// assert_eq!(graph.classify(), Ok(EulerKind::Path { start: 0, end: 2 }));
    /// ```
    pub fn classify(&self) -> Result<EulerKind, GraphError> {
        let verdict = match self.orientation() {
            Orientation::Directed => self.classify_directed(),
            Orientation::Undirected => self.classify_undirected(),
        };
        match &verdict {
            Ok(kind) => info!("graph is Eulerian: {:?}", kind),
            Err(err) => info!("{}", err),
        }
        verdict
    }

    /// Reconstructs an Eulerian walk with Hierholzer's stack walk.
    ///
    /// The walk starts at the path start if there is one, otherwise at the
    /// lowest-indexed vertex that has an edge. From each vertex the
    /// lowest-indexed unused edge is taken first, so the result is
    /// deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// use euler_bst::graph::{Graph, Orientation};
    ///
    /// let mut graph = Graph::new(4, Orientation::Directed).unwrap();
    /// graph.add_edge(3, 0).unwrap();
    /// graph.add_edge(0, 1).unwrap();
    /// graph.add_edge(1, 3).unwrap();
    /// graph.add_edge(1, 2).unwrap();
    ///
    /// let walk = graph.find_euler_path().unwrap();
    /// assert_eq!(walk.to_string(), "1 3 0 1 2");
    /// ```
    pub fn find_euler_path(&self) -> Result<Walk, GraphError> {
        let start = match self.classify()? {
            EulerKind::Path { start, .. } => start,
            EulerKind::Circuit => self.non_isolated_vertices().first().copied().unwrap_or(0),
        };
        debug!("walking from vertex {}", start);

        let mut unused = self.adjacency().to_vec();
        let mut stack = vec![start];
        let mut vertices = Vec::with_capacity(self.edge_count() + 1);
        while let Some(&top) = stack.last() {
            match unused[top].iter().position(|&edge| edge) {
                Some(next) => {
                    unused[top][next] = false;
                    if !self.is_directed() {
                        unused[next][top] = false;
                    }
                    stack.push(next);
                }
                None => {
                    stack.pop();
                    vertices.push(top);
                }
            }
        }
        vertices.reverse();

        debug_assert_eq!(vertices.len(), self.edge_count() + 1);
        Ok(Walk { vertices })
    }

    fn surplus(&self, vertex: usize) -> isize {
        self.out_degree(vertex) as isize - self.in_degree(vertex) as isize
    }

    fn unbalanced(&self, vertex: usize) -> GraphError {
        GraphError::Unbalanced {
            vertex,
            in_degree: self.in_degree(vertex),
            out_degree: self.out_degree(vertex),
        }
    }

    fn classify_directed(&self) -> Result<EulerKind, GraphError> {
        let unbalanced = self.odd_degree_vertices();
        let core = self.non_isolated_vertices();

        match *unbalanced.as_slice() {
            [] if self.strongly_connected_among(&core) => Ok(EulerKind::Circuit),
            [] => Err(GraphError::Disconnected),
            // The surpluses always sum to zero, so `b` mirrors `a`.
            [a, b] => {
                let (start, end) = match self.surplus(a) {
                    1 => (a, b),
                    -1 => (b, a),
                    _ => return Err(self.unbalanced(a)),
                };
                if self.weakly_connected_among(&core) {
                    Ok(EulerKind::Path { start, end })
                } else {
                    Err(GraphError::Disconnected)
                }
            }
            [vertex] => Err(self.unbalanced(vertex)),
            _ => Err(GraphError::TooManyUnbalanced {
                count: unbalanced.len(),
            }),
        }
    }

    fn classify_undirected(&self) -> Result<EulerKind, GraphError> {
        let odd = self.odd_degree_vertices();
        let kind = match *odd.as_slice() {
            [] => EulerKind::Circuit,
            [start, end] => EulerKind::Path { start, end },
            _ => return Err(GraphError::TooManyOddVertices { count: odd.len() }),
        };

        if self.weakly_connected_among(&self.non_isolated_vertices()) {
            Ok(kind)
        } else {
            Err(GraphError::Disconnected)
        }
    }
}
