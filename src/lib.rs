//! CSP backtracking and greedy algorithms for the Graph Coloring problem

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// graph model: vertices, edges and the current coloring
pub mod color;

/// checks that a coloring is proper
pub mod checker;

/// error type of the crate
pub mod error;

/// read/write edge-list instances and solutions
pub mod edgelist;

/// read DIMACS instances
pub mod dimacs;

/// random and classic graph generators
pub mod generator;

/// helper and utility methods for executables
pub mod util;

/// search algorithms for the graph coloring problem
pub mod search;
