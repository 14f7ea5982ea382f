//! Commands understood by the two sessions and the reports they produce.
//!
//! Dispatch does not know where a command came from, so the console, a script
//! or a test can all drive the same structures.
//!
//! # Examples
//!
//! ```
//! use euler_bst::command::{dispatch_tree, TreeCommand};
//! use euler_bst::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//! dispatch_tree(&mut tree, TreeCommand::Insert(4));
//! dispatch_tree(&mut tree, TreeCommand::Insert(2));
//!
//! let report = dispatch_tree(&mut tree, TreeCommand::Preorder);
//! assert_eq!(report.to_string(), "Preorder: 4 2");
//! ```

use std::fmt;

use log::warn;

use crate::error::GraphError;
use crate::graph::{Graph, Walk};
use crate::unbalanced::Tree;

/// Something to do to the graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GraphCommand {
    /// Add the edge `from -> to`.
    AddEdge {
        /// Source vertex.
        from: usize,
        /// Target vertex.
        to: usize,
    },
    /// Reconstruct an Eulerian walk.
    FindEulerPath,
}

/// Something to do to the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TreeCommand<K> {
    /// Insert a key.
    Insert(K),
    /// Look a key up.
    Search(K),
    /// Delete a key.
    Remove(K),
    /// List keys in preorder.
    Preorder,
    /// List keys in postorder.
    Postorder,
}

/// The two traversal orders the tree session prints.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Node, left, right.
    Preorder,
    /// Left, right, node.
    Postorder,
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preorder => write!(f, "Preorder"),
            Self::Postorder => write!(f, "Postorder"),
        }
    }
}

/// Outcome of a [`GraphCommand`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphReport {
    /// The edge was added.
    EdgeAdded {
        /// Source vertex.
        from: usize,
        /// Target vertex.
        to: usize,
    },
    /// An Eulerian walk was found.
    Walk(Walk),
}

impl fmt::Display for GraphReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeAdded { from, to } => write!(f, "Edge {} -> {} added", from, to),
            Self::Walk(walk) => write!(f, "Eulerian walk: {}", walk),
        }
    }
}

/// Outcome of a [`TreeCommand`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeReport<K> {
    /// The key was inserted.
    Inserted(K),
    /// The key is in the tree.
    Found(K),
    /// The key was deleted.
    Removed(K),
    /// No node holds the key. The tree is unchanged.
    NotFound(K),
    /// The keys in the requested order.
    Keys {
        /// Which traversal produced `keys`.
        order: Traversal,
        /// The visited keys.
        keys: Vec<K>,
    },
}

impl<K: fmt::Display> fmt::Display for TreeReport<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted(key) => write!(f, "Inserted: {}", key),
            Self::Found(key) => write!(f, "Found: {}", key),
            Self::Removed(key) => write!(f, "Removed: {}", key),
            Self::NotFound(key) => write!(f, "Not found: {}", key),
            Self::Keys { order, keys } => {
                write!(f, "{}:", order)?;
                for key in keys {
                    write!(f, " {}", key)?;
                }
                Ok(())
            }
        }
    }
}

/// Runs `command` against `graph`. Rejected edges and non-Eulerian graphs come
/// back as errors and leave the graph unchanged.
pub fn dispatch_graph(
    graph: &mut Graph,
    command: GraphCommand,
) -> Result<GraphReport, GraphError> {
    match command {
        GraphCommand::AddEdge { from, to } => {
            graph.add_edge(from, to).map_err(|err| {
                warn!("edge {} -> {} rejected: {}", from, to, err);
                err
            })?;
            Ok(GraphReport::EdgeAdded { from, to })
        }
        GraphCommand::FindEulerPath => graph.find_euler_path().map(GraphReport::Walk),
    }
}

/// Runs `command` against `tree`. Misses are reported, never fatal.
pub fn dispatch_tree<K>(tree: &mut Tree<K>, command: TreeCommand<K>) -> TreeReport<K>
where
    K: Ord + Clone,
{
    match command {
        TreeCommand::Insert(key) => {
            tree.insert(key.clone());
            TreeReport::Inserted(key)
        }
        TreeCommand::Search(key) => match tree.find(&key) {
            Some(found) => TreeReport::Found(found.clone()),
            None => TreeReport::NotFound(key),
        },
        TreeCommand::Remove(key) => match tree.delete(&key) {
            Some(removed) => TreeReport::Removed(removed),
            None => TreeReport::NotFound(key),
        },
        TreeCommand::Preorder => TreeReport::Keys {
            order: Traversal::Preorder,
            keys: tree.preorder().into_iter().cloned().collect(),
        },
        TreeCommand::Postorder => TreeReport::Keys {
            order: Traversal::Postorder,
            keys: tree.postorder().into_iter().cloned().collect(),
        },
    }
}
