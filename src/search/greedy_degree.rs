use std::cmp::Reverse;

use priority_queue::PriorityQueue;
use tracing::debug;

use crate::color::{Color, Graph, VertexId, UNASSIGNED};

/** smallest positive color that does not appear in `colors`.
Sorts `colors` in place (UNASSIGNED entries are ignored since they never collide).
*/
pub fn min_unused_color(colors:&mut [Color]) -> Color {
    colors.sort_unstable();
    let mut res:Color = 1;
    for c in colors.iter() {
        if *c == res { res += 1; }
        else if *c > res { break; } // gap found
    }
    res
}

/** implements a greedy coloring ordered by degree:
    1. order vertices by decreasing degree (ties: smallest id first)
    2. give each vertex the smallest color unused by its already colored neighbors

The previous coloring of the graph is discarded. Never backtracks, always succeeds.
Returns the number of colors used.
*/
pub fn color_greedily(graph:&mut Graph) -> usize {
    graph.reset_colors();
    let n = graph.nb_vertices();
    let mut order:PriorityQueue<VertexId, (usize, Reverse<VertexId>)> = PriorityQueue::with_capacity(n);
    for v in 0..n {
        order.push(v, (graph.degree(v), Reverse(v)));
    }
    while let Some((v,_)) = order.pop() {
        let mut neighbor_colors = graph.neighbor_colors(v);
        let color = min_unused_color(&mut neighbor_colors);
        debug_assert_eq!(graph.color(v), UNASSIGNED);
        graph.set_color(v, color);
    }
    let nb_colors = graph.max_color_used();
    debug!(nb_colors, "greedy coloring done");
    nb_colors
}
