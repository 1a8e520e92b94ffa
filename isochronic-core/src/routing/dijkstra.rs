use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::{RoadNetwork, TravelTime};

#[derive(Copy, Clone)]
struct State {
    cost: TravelTime,
    node: NodeIndex,
}

// Min-heap by cost (reversed from standard Rust BinaryHeap).
// Costs are finite sums of validated non-negative weights, so total_cmp is a total order here.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Dijkstra's algorithm over edge travel times.
///
/// Returns a map of node indices to travel times in seconds. Nodes whose
/// travel time would exceed `max_cost` are never entered, so every value in
/// the result is `<= max_cost`. With a `target` the search stops as soon as
/// the target is settled; the target's entry is then final but other entries
/// may not be.
pub fn dijkstra_travel_times(
    network: &RoadNetwork,
    start: NodeIndex,
    target: Option<NodeIndex>,
    max_cost: Option<TravelTime>,
) -> HashMap<NodeIndex, TravelTime> {
    let graph = network.graph();
    let mut distances: HashMap<NodeIndex, TravelTime> = HashMap::new();
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if target == Some(node) {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node)
            && cost > best
        {
            continue;
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().travel_time;

            if max_cost.is_some_and(|max| next_cost > max) {
                continue;
            }

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    distances
}
