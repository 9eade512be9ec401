//! Rondo Core Library
//!
//! Graph model and algorithms for the rondo toolkit: an adjacency-matrix
//! weighted undirected graph with connectivity testing, minimum spanning
//! trees, shortest paths, metric checking and closure, and tour
//! approximation.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
