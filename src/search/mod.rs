//! Search algorithms for the graph coloring problem.

/// domains of the CSP variables (admissible colors of each vertex), with snapshot/restore
pub mod domains;

/// CSP backtracking search (MRV variable ordering + forward checking) under a color budget
pub mod csp_backtrack;

/// greedy coloring by decreasing degree
pub mod greedy_degree;
