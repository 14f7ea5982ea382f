use euler_bst::graph::{Graph, Orientation};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

/// A walk that never repeats an edge, and the graph made of its edges. Any
/// such graph must admit an Eulerian walk with the same endpoints.
#[derive(Clone, Debug)]
struct Trail {
    graph: Graph,
    vertices: Vec<usize>,
}

fn orientation(g: &mut Gen) -> Orientation {
    if bool::arbitrary(g) {
        Orientation::Directed
    } else {
        Orientation::Undirected
    }
}

impl Arbitrary for Trail {
    fn arbitrary(g: &mut Gen) -> Self {
        let vertex_count = usize::arbitrary(g) % 6 + 1;
        let steps = usize::arbitrary(g) % 24;
        let mut graph = Graph::new(vertex_count, orientation(g)).unwrap();

        let mut current = usize::arbitrary(g) % vertex_count;
        let mut vertices = vec![current];
        for _ in 0..steps {
            let next = usize::arbitrary(g) % vertex_count;
            // Already-used edges are refused, which keeps this a trail.
            if graph.add_edge(current, next).is_ok() {
                vertices.push(next);
                current = next;
            }
        }

        Self { graph, vertices }
    }
}

/// Up to seven edges over five vertices, small enough to brute force.
#[derive(Clone, Debug)]
struct SmallGraph(Graph);

impl Arbitrary for SmallGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut graph = Graph::new(5, orientation(g)).unwrap();
        let edge_count = usize::arbitrary(g) % 8;
        for _ in 0..edge_count {
            let from = usize::arbitrary(g) % 5;
            let to = usize::arbitrary(g) % 5;
            let _ = graph.add_edge(from, to);
        }
        Self(graph)
    }
}

/// Whether consecutive vertices of `walk` spend every edge of `graph` exactly
/// once.
fn uses_every_edge_once(graph: &Graph, walk: &[usize]) -> bool {
    let mut remaining: HashSet<(usize, usize)> = graph.edges().collect();
    let every_step_is_fresh = walk.windows(2).all(|step| {
        let edge = if graph.is_directed() {
            (step[0], step[1])
        } else {
            (step[0].min(step[1]), step[0].max(step[1]))
        };
        remaining.remove(&edge)
    });
    every_step_is_fresh && remaining.is_empty()
}

/// Tries every start vertex and every edge order.
fn has_euler_trail(graph: &Graph) -> bool {
    fn extend(
        graph: &Graph,
        edges: &[(usize, usize)],
        used: &mut [bool],
        at: usize,
        depth: usize,
    ) -> bool {
        if depth == edges.len() {
            return true;
        }
        for i in 0..edges.len() {
            if used[i] {
                continue;
            }
            let (from, to) = edges[i];
            let next = if from == at {
                to
            } else if !graph.is_directed() && to == at {
                from
            } else {
                continue;
            };
            used[i] = true;
            if extend(graph, edges, used, next, depth + 1) {
                return true;
            }
            used[i] = false;
        }
        false
    }

    let edges: Vec<(usize, usize)> = graph.edges().collect();
    (0..graph.vertex_count())
        .any(|start| extend(graph, &edges, &mut vec![false; edges.len()], start, 0))
}

#[quickcheck]
fn trail_graphs_are_eulerian(trail: Trail) -> bool {
    let walk = match trail.graph.find_euler_path() {
        Ok(walk) => walk,
        Err(_) => return false,
    };
    let (first, last) = (trail.vertices[0], trail.vertices[trail.vertices.len() - 1]);

    let endpoints_match = if first == last {
        walk.is_closed()
    } else if trail.graph.is_directed() {
        walk.start() == Some(first) && walk.end() == Some(last)
    } else {
        let ends = [walk.start(), walk.end()];
        ends.contains(&Some(first)) && ends.contains(&Some(last))
    };

    walk.vertices().len() == trail.graph.edge_count() + 1
        && uses_every_edge_once(&trail.graph, walk.vertices())
        && endpoints_match
}

#[quickcheck]
fn feasibility_matches_brute_force(graph: SmallGraph) -> bool {
    let SmallGraph(graph) = graph;
    match graph.find_euler_path() {
        Ok(walk) => has_euler_trail(&graph) && uses_every_edge_once(&graph, walk.vertices()),
        Err(err) => err.is_not_eulerian() && !has_euler_trail(&graph),
    }
}

#[quickcheck]
fn directed_cycle_over_any_order_is_a_circuit(order: Vec<u8>) -> bool {
    let mut seen = HashSet::new();
    let order: Vec<usize> = order
        .into_iter()
        .map(|v| usize::from(v % 16))
        .filter(|v| seen.insert(*v))
        .collect();
    if order.len() < 2 {
        return true;
    }

    let mut graph = Graph::new(16, Orientation::Directed).unwrap();
    for (i, &from) in order.iter().enumerate() {
        graph.add_edge(from, order[(i + 1) % order.len()]).unwrap();
    }

    let walk = graph.find_euler_path().unwrap();
    let lowest = order.iter().copied().min();
    walk.is_closed() && walk.start() == lowest && walk.vertices().len() == order.len() + 1
}
