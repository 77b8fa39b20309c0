use serde::Serialize;
use tracing::{debug, trace, warn};

use dogs::search_algorithm::{StoppingCriterion, TimeStoppingCriterion};

use crate::checker::is_proper_coloring;
use crate::color::{Color, Graph, VertexId, UNASSIGNED};
use crate::search::domains::{DomainSnapshot, DomainStore};

/** outcome of a CSP search */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchStatus {
    /// a proper coloring has been written in the graph
    Solved,
    /// no coloring exists within the color budget
    Infeasible,
    /// the stopping criterion ended the search before it completed
    Aborted,
}

/** counters collected during a search */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStatistics {
    /// number of search nodes opened (vertex selections)
    pub nb_nodes: usize,
    /// number of nodes whose candidate colors were all exhausted
    pub nb_backtracks: usize,
    /// deepest level reached (number of simultaneously assigned vertices)
    pub max_depth: usize,
}

/** status and statistics of a finished search */
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// search outcome
    pub status: SearchStatus,
    /// search counters
    pub statistics: SearchStatistics,
}

/// search node: a selected vertex, its candidate colors and the domains before any trial
#[derive(Debug)]
struct Frame {
    /// vertex selected by MRV
    vertex: VertexId,
    /// colors of its domain when selected (ascending)
    candidates: Vec<Color>,
    /// next candidate to try
    next: usize,
    /// domains when the node was opened
    snapshot: DomainSnapshot,
}

/**
State of one in-flight search. Owns the frame stack that replaces recursion:
the k-th frame is the k-th vertex assigned on the current path.
*/
struct CspContext<'a, Stop> {
    /// graph being colored (colors are written in place)
    graph: &'a mut Graph,
    /// domains (forward checking restricts them, backtracking restores them)
    domains: &'a mut DomainStore,
    /// number of vertices assigned on the current path
    nb_assigned: usize,
    /// open search nodes, deepest last
    frames: Vec<Frame>,
    /// optional deadline, checked each time a vertex is selected
    stopping_criterion: Option<Stop>,
    /// search counters
    stats: SearchStatistics,
}

impl<'a, Stop:StoppingCriterion> CspContext<'a, Stop> {

    /** creates a search context. Resets all colors of the graph.

# Panics
 - if the domain store does not match the graph or the color budget
    */
    fn new(
        graph:&'a mut Graph,
        domains:&'a mut DomainStore,
        nb_colors:usize,
        stopping_criterion:Option<Stop>
    ) -> Self {
        assert_eq!(
            domains.nb_vertices(), graph.nb_vertices(),
            "domain store covers {} vertices but the graph has {}",
            domains.nb_vertices(), graph.nb_vertices()
        );
        assert_eq!(
            domains.nb_colors(), nb_colors,
            "domain store built for {} colors, search asked for {}",
            domains.nb_colors(), nb_colors
        );
        graph.reset_colors();
        let max_depth = graph.nb_vertices();
        Self {
            graph,
            domains,
            nb_assigned: 0,
            frames: Vec::with_capacity(max_depth),
            stopping_criterion,
            stats: SearchStatistics::default(),
        }
    }

    fn is_finished(&self) -> bool {
        self.stopping_criterion.as_ref().map_or(false, |s| s.is_finished())
    }

    /** selects the unassigned vertex with the smallest domain (MRV).
Ties are broken by the smallest vertex id.

# Panics
 - if every vertex is already assigned, or if the selected vertex has no domain.
   Both indicate broken bookkeeping.
    */
    fn select_mrv_vertex(&self) -> VertexId {
        let n = self.graph.nb_vertices();
        if self.nb_assigned >= n {
            panic!("MRV selection with no unassigned vertex ({} / {} assigned)", self.nb_assigned, n);
        }
        (0..n)
            .filter(|v| self.graph.color(*v) == UNASSIGNED)
            .min_by_key(|v| {
                self.domains.domain(*v)
                    .unwrap_or_else(|| panic!("MRV selection: vertex {} has no domain", v))
                    .len()
            })
            .unwrap_or_else(|| panic!(
                "MRV selection could not find an unassigned vertex ({} / {} assigned)",
                self.nb_assigned, n
            ))
    }

    /// selects the next vertex and pushes its search node
    fn open_node(&mut self) {
        let vertex = self.select_mrv_vertex();
        let candidates:Vec<Color> = self.domains.colors(vertex).collect();
        let snapshot = self.domains.snapshot();
        self.nb_assigned += 1;
        self.stats.nb_nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.nb_assigned);
        trace!(vertex, nb_candidates = candidates.len(), depth = self.nb_assigned, "open node");
        self.frames.push(Frame { vertex, candidates, next: 0, snapshot });
    }

    /// removes the color from the domains of all neighbors of the vertex
    fn forward_check(&mut self, vertex:VertexId, color:Color) {
        for w in self.graph.neighbors(vertex) {
            self.domains.restrict(w, color);
        }
    }

    /** moves to the next candidate of the deepest node.
    Returns true if a color was assigned, false if the node was exhausted and closed.
    Returns None if there is no open node left.
    */
    fn next_candidate(&mut self) -> Option<bool> {
        let frame = self.frames.last_mut()?;
        if frame.next > 0 { // undo the propagation of the previous trial
            self.domains.restore(&frame.snapshot);
        }
        match frame.candidates.get(frame.next).copied() {
            Some(color) => {
                frame.next += 1;
                let vertex = frame.vertex;
                self.graph.set_color(vertex, color);
                self.forward_check(vertex, color);
                Some(true)
            },
            None => {
                debug_assert!(
                    self.domains.matches(&frame.snapshot),
                    "domains of node {} not restored after exhausting its colors", frame.vertex
                );
                let vertex = frame.vertex;
                self.frames.pop();
                self.graph.set_color(vertex, UNASSIGNED);
                self.nb_assigned -= 1;
                self.stats.nb_backtracks += 1;
                Some(false)
            }
        }
    }

    /// restores every open node (deepest first) and un-assigns their vertices
    fn abandon(&mut self) {
        while let Some(frame) = self.frames.pop() {
            self.domains.restore(&frame.snapshot);
            self.graph.set_color(frame.vertex, UNASSIGNED);
            self.nb_assigned -= 1;
        }
    }

    /// depth-first search over the frame stack
    fn run(&mut self) -> SearchStatus {
        let n = self.graph.nb_vertices();
        let mut descend = true;
        loop {
            debug_assert_eq!(self.nb_assigned, self.frames.len());
            if descend {
                if self.nb_assigned == n {
                    if is_proper_coloring(self.graph) {
                        return SearchStatus::Solved;
                    }
                    warn!("complete assignment rejected by the checker, backtracking");
                } else if self.is_finished() {
                    self.abandon();
                    return SearchStatus::Aborted;
                } else {
                    self.open_node();
                }
            }
            descend = match self.next_candidate() {
                None => return SearchStatus::Infeasible,
                Some(assigned) => assigned,
            };
        }
    }
}

fn run_search<Stop:StoppingCriterion>(
    graph:&mut Graph,
    domains:&mut DomainStore,
    nb_colors:usize,
    stopping_criterion:Option<Stop>,
) -> SearchReport {
    let mut context = CspContext::new(graph, domains, nb_colors, stopping_criterion);
    let status = context.run();
    let statistics = context.stats;
    debug!(
        ?status,
        nb_nodes = statistics.nb_nodes,
        nb_backtracks = statistics.nb_backtracks,
        max_depth = statistics.max_depth,
        "CSP search finished"
    );
    SearchReport { status, statistics }
}

/** CSP backtracking search for a coloring using at most nb_colors colors.
    1. select the unassigned vertex with the fewest admissible colors (ties: smallest id)
    2. try its admissible colors in ascending order
    3. after each assignment, remove the color from the neighbors' domains (forward checking)
    4. when every candidate fails, restore the domains and un-assign the vertex

Returns true if a proper coloring was found (it is left in the graph, all colors in
1..=nb_colors). Returns false otherwise, with every vertex un-assigned and the domains
back to their state at the call.

# Panics
 - if the domain store does not cover the graph or was built for another number of colors
*/
pub fn solve(graph:&mut Graph, domains:&mut DomainStore, nb_colors:usize) -> bool {
    search(graph, domains, nb_colors).status == SearchStatus::Solved
}

/** same search as [`solve`], returning the search statistics along with the outcome
(`Solved` or `Infeasible`). */
pub fn search(graph:&mut Graph, domains:&mut DomainStore, nb_colors:usize) -> SearchReport {
    run_search::<TimeStoppingCriterion>(graph, domains, nb_colors, None)
}

/** same search as [`solve`], polling the stopping criterion before each vertex selection.
If it triggers, every open node is restored and the status is `Aborted`: the graph is left
fully un-assigned and the domains back to their state at the call.
*/
pub fn solve_with_stopping_criterion<Stop:StoppingCriterion>(
    graph:&mut Graph,
    domains:&mut DomainStore,
    nb_colors:usize,
    stopping_criterion:Stop,
) -> SearchReport {
    run_search(graph, domains, nb_colors, Some(stopping_criterion))
}


#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    use crate::dimacs;
    use crate::generator::{complete_graph, cycle_graph, gnp_graph};
    use crate::search::greedy_degree::color_greedily;

    fn run(graph:&mut Graph, nb_colors:usize) -> (bool, DomainStore) {
        let mut domains = DomainStore::new(graph.nb_vertices(), nb_colors);
        let res = solve(graph, &mut domains, nb_colors);
        (res, domains)
    }

    fn petersen() -> Graph {
        Graph::new(10, &[
            (0,1), (1,2), (2,3), (3,4), (4,0),
            (0,5), (1,6), (2,7), (3,8), (4,9),
            (5,7), (7,9), (9,6), (6,8), (8,5),
        ]).unwrap()
    }

    fn assert_valid(graph:&Graph, nb_colors:usize) {
        assert!(is_proper_coloring(graph));
        assert!(graph.colors().iter().all(|c| *c >= 1 && *c <= nb_colors));
    }

    #[test]
    fn test_edgeless_graph() {
        for k in 1..4 {
            let mut g = Graph::new(5, &[]).unwrap();
            let (res, domains) = run(&mut g, k);
            assert!(res);
            assert_eq!(g.colors(), vec![1 ; 5]);
            assert!(domains.matches(&DomainStore::new(5, k).snapshot()));
        }
    }

    #[test]
    fn test_empty_graph() {
        let mut g = Graph::new(0, &[]).unwrap();
        assert!(run(&mut g, 0).0);
        assert!(run(&mut g, 3).0);
    }

    #[test]
    fn test_no_colors() {
        let mut g = Graph::new(2, &[]).unwrap();
        assert!(!run(&mut g, 0).0);
        assert_eq!(g.colors(), vec![0, 0]);
    }

    #[test]
    fn test_square() {
        let mut g = cycle_graph(4);
        let (res, _) = run(&mut g, 2);
        assert!(res);
        assert_eq!(g.colors(), vec![1,2,1,2]);
        let (res, domains) = run(&mut g, 1);
        assert!(!res);
        assert_eq!(g.colors(), vec![0 ; 4]);
        assert!(domains.matches(&DomainStore::new(4, 1).snapshot()));
    }

    #[test]
    fn test_triangle() {
        let mut g = complete_graph(3);
        assert!(!run(&mut g, 2).0);
        assert_eq!(g.colors(), vec![0 ; 3]);
        assert!(run(&mut g, 3).0);
        assert_eq!(g.colors(), vec![1,2,3]);
    }

    #[test]
    fn test_odd_cycle() {
        let mut g = cycle_graph(7);
        assert!(!run(&mut g, 2).0);
        assert_eq!(g.colors(), vec![0 ; 7]);
        assert!(run(&mut g, 3).0);
        assert_valid(&g, 3);
    }

    #[test]
    fn test_complete_graph_infeasible() {
        for n in 2..7 {
            let mut g = complete_graph(n);
            let mut domains = DomainStore::new(n, n-1);
            let initial = domains.snapshot();
            assert!(!solve(&mut g, &mut domains, n-1));
            assert_eq!(g.colors(), vec![0 ; n]);
            assert!(domains.matches(&initial));
        }
    }

    #[test]
    fn test_complete_graph_feasible() {
        let mut g = complete_graph(6);
        assert!(run(&mut g, 6).0);
        assert_eq!(g.colors(), vec![1,2,3,4,5,6]);
    }

    #[test]
    fn test_petersen() {
        let mut g = petersen();
        assert!(!run(&mut g, 2).0);
        assert_eq!(g.max_color_used(), 0);
        assert!(run(&mut g, 3).0);
        assert_valid(&g, 3);
    }

    #[test]
    fn test_myciel3() {
        // triangle free, but needs 4 colors
        let mut g = dimacs::read_from_file("insts/dimacs/myciel3.col").unwrap();
        let report = search(&mut g, &mut DomainStore::new(11, 3), 3);
        assert_eq!(report.status, SearchStatus::Infeasible);
        assert_eq!(g.max_color_used(), 0);
        let report = search(&mut g, &mut DomainStore::new(11, 4), 4);
        assert_eq!(report.status, SearchStatus::Solved);
        assert_valid(&g, 4);
    }

    #[test]
    fn test_failed_search_restores_given_domains() {
        // domains already pruned by the caller are given back as they were
        let mut g = complete_graph(4);
        let mut domains = DomainStore::new(4, 3);
        domains.restrict(2, 1);
        domains.restrict(3, 3);
        let before = domains.snapshot();
        assert!(!solve(&mut g, &mut domains, 3));
        assert!(domains.matches(&before));
        assert_eq!(g.colors(), vec![0 ; 4]);
    }

    #[test]
    fn test_previous_colors_are_reset() {
        let mut g = petersen();
        color_greedily(&mut g);
        assert!(run(&mut g, 3).0);
        assert_valid(&g, 3);
    }

    #[test]
    fn test_random_graphs_against_greedy() {
        for seed in 0..25 {
            let mut g = gnp_graph(14, 0.35, seed);
            let nb_greedy = color_greedily(&mut g);
            let mut found = false;
            for k in 1..=nb_greedy {
                let mut domains = DomainStore::new(g.nb_vertices(), k);
                let initial = domains.snapshot();
                if solve(&mut g, &mut domains, k) {
                    assert_valid(&g, k);
                    found = true;
                } else {
                    assert!(!found, "seed {}: {} colors failed after a smaller budget succeeded", seed, k);
                    assert_eq!(g.max_color_used(), 0);
                    assert!(domains.matches(&initial));
                }
            }
            assert!(found, "seed {}: no coloring with the {} greedy colors", seed, nb_greedy);
        }
    }

    #[test]
    fn test_statistics() {
        let mut g = cycle_graph(4);
        let mut domains = DomainStore::new(4, 2);
        let report = solve_with_stopping_criterion(
            &mut g, &mut domains, 2, TimeStoppingCriterion::new(60.)
        );
        assert_eq!(report.status, SearchStatus::Solved);
        assert_eq!(report.statistics.nb_nodes, 4);
        assert_eq!(report.statistics.nb_backtracks, 0);
        assert_eq!(report.statistics.max_depth, 4);
        let mut g = complete_graph(3);
        let mut domains = DomainStore::new(3, 2);
        let report = solve_with_stopping_criterion(
            &mut g, &mut domains, 2, TimeStoppingCriterion::new(60.)
        );
        assert_eq!(report.status, SearchStatus::Infeasible);
        assert!(report.statistics.nb_backtracks > 0);
    }

    #[test]
    fn test_expired_deadline() {
        let mut g = petersen();
        let mut domains = DomainStore::new(10, 3);
        let stop = TimeStoppingCriterion::new(0.);
        std::thread::sleep(Duration::from_millis(10));
        let report = solve_with_stopping_criterion(&mut g, &mut domains, 3, stop);
        assert_eq!(report.status, SearchStatus::Aborted);
        assert_eq!(report.statistics.nb_nodes, 0);
        assert_eq!(g.colors(), vec![0 ; 10]);
        assert!(domains.matches(&DomainStore::new(10, 3).snapshot()));
    }

    #[test]
    fn test_deadline_during_search() {
        // pigeonhole: 12 mutually adjacent vertices, 11 colors (factorial search)
        let mut g = complete_graph(12);
        let mut domains = DomainStore::new(12, 11);
        let initial = domains.snapshot();
        let report = solve_with_stopping_criterion(
            &mut g, &mut domains, 11, TimeStoppingCriterion::new(0.05)
        );
        assert_eq!(report.status, SearchStatus::Aborted);
        assert!(report.statistics.nb_nodes > 0);
        assert_eq!(g.colors(), vec![0 ; 12]);
        assert!(domains.matches(&initial));
    }

    #[test]
    fn test_mrv_tie_break() {
        let mut g = cycle_graph(5);
        let mut domains = DomainStore::new(5, 3);
        domains.restrict(3, 1);
        domains.restrict(1, 2);
        domains.restrict(4, 1);
        domains.restrict(4, 2);
        let mut context = CspContext::<TimeStoppingCriterion>::new(&mut g, &mut domains, 3, None);
        assert_eq!(context.select_mrv_vertex(), 4);
        context.graph.set_color(4, 3);
        context.nb_assigned = 1;
        assert_eq!(context.select_mrv_vertex(), 1); // 1 and 3 tied, smallest id
    }

    #[test]
    #[should_panic]
    fn test_mrv_without_unassigned_vertex() {
        let mut g = cycle_graph(3);
        let mut domains = DomainStore::new(3, 3);
        let mut context = CspContext::<TimeStoppingCriterion>::new(&mut g, &mut domains, 3, None);
        context.nb_assigned = 3;
        context.select_mrv_vertex();
    }

    #[test]
    #[should_panic]
    fn test_domain_store_size_mismatch() {
        let mut g = cycle_graph(4);
        let mut domains = DomainStore::new(3, 2);
        solve(&mut g, &mut domains, 2);
    }

    #[test]
    #[should_panic]
    fn test_domain_store_colors_mismatch() {
        let mut g = cycle_graph(4);
        let mut domains = DomainStore::new(4, 3);
        solve(&mut g, &mut domains, 2);
    }
}
