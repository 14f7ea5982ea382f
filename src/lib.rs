//! Two textbook data-structure exercises, each driven from an interactive
//! console menu.
//!
//! ## Eulerian walks
//!
//! An Eulerian walk uses every edge of a graph exactly once. It is a
//! *circuit* when it ends where it started and a *path* otherwise. Whether
//! one exists depends only on vertex degrees and connectivity:
//!
//! 1. In a directed graph every vertex must have as many incoming as
//!    outgoing edges (circuit), or exactly one vertex may have one extra
//!    outgoing edge and one other vertex one extra incoming edge (path).
//! 2. In an undirected graph zero (circuit) or two (path) vertices may have
//!    odd degree.
//! 3. All edges must belong to one connected component.
//!
//! [`graph::Graph`] checks these rules and rebuilds the walk with
//! Hierholzer's algorithm.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree keeps keys ordered so that every key in a node's left
//! subtree is smaller than the node's key and every key in its right subtree
//! is not. [`unbalanced::Tree`] is the simplest version: no rebalancing, so its
//! height depends on the order keys arrive in.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod command;
pub mod console;
pub mod error;
pub mod graph;
pub mod logger;
pub mod unbalanced;


pub use error::{Error, GraphError};
