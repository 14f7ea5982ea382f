//! Reachability questions asked by the Eulerian feasibility check.

use super::Graph;

/// Connectivity queries over a graph's vertices. The Eulerian rules only
/// depend on this trait, not on how edges are stored.
pub trait Connectivity {
    /// `closure[i][j]` is true iff `j` can be reached from `i` over one or more
    /// edges.
    fn closure(&self) -> Vec<Vec<bool>>;

    /// Marks every vertex reachable from `start` by following edges forward.
    /// `start` itself is always marked.
    fn reachable_from(&self, start: usize) -> Vec<bool>;

    /// Whether the given vertices form one component when edge directions are
    /// ignored. An empty set is connected.
    fn weakly_connected_among(&self, vertices: &[usize]) -> bool;

    /// Whether every vertex in `vertices` reaches every other one.
    fn strongly_connected_among(&self, vertices: &[usize]) -> bool {
        let closure = self.closure();
        vertices.iter().all(|&i| {
            vertices
                .iter()
                .all(|&j| i == j || closure.get(i).and_then(|row| row.get(j)) == Some(&true))
        })
    }

    /// Whether every vertex of the graph reaches every other one.
    fn is_strongly_connected(&self) -> bool {
        let closure = self.closure();
        closure
            .iter()
            .enumerate()
            .all(|(i, row)| row.iter().enumerate().all(|(j, &reach)| i == j || reach))
    }
}

/// Warshall's triple loop over a copy of `matrix`.
///
/// # Examples
///
/// ```
/// use euler_bst::graph::transitive_closure;
///
/// let matrix = vec![
///     vec![false, true, false],
///     vec![false, false, true],
///     vec![false, false, false],
/// ];
/// let closure = transitive_closure(&matrix);
///
/// assert!(closure[0][2]);
/// assert!(!closure[2][0]);
/// ```
pub fn transitive_closure(matrix: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let mut closure = matrix.to_vec();
    let n = closure.len();
    for k in 0..n {
        for i in 0..n {
            if !closure[i][k] {
                continue;
            }
            for j in 0..n {
                if closure[k][j] {
                    closure[i][j] = true;
                }
            }
        }
    }
    closure
}

impl Connectivity for Graph {
    fn closure(&self) -> Vec<Vec<bool>> {
        transitive_closure(self.adjacency())
    }

    fn reachable_from(&self, start: usize) -> Vec<bool> {
        let mut visited = vec![false; self.vertex_count()];
        if start >= visited.len() {
            return visited;
        }

        let mut stack = vec![start];
        visited[start] = true;
        while let Some(vertex) = stack.pop() {
            for next in self.neighbors(vertex) {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        visited
    }

    fn weakly_connected_among(&self, vertices: &[usize]) -> bool {
        let Some(&start) = vertices.first() else {
            return true;
        };
        if start >= self.vertex_count() {
            return false;
        }

        let adjacency = self.adjacency();
        let mut visited = vec![false; self.vertex_count()];
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(vertex) = stack.pop() {
            for next in 0..adjacency.len() {
                let linked = adjacency[vertex][next] || adjacency[next][vertex];
                if linked && !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }

        vertices
            .iter()
            .all(|&v| visited.get(v).copied().unwrap_or(false))
    }
}
