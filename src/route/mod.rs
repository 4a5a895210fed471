//! # Path Weight Search
//!
//! Answers "what does the cheapest path from A to B weigh" over the
//! distance index. Two rules come before any search:
//!
//! 1. A declared direct edge wins outright, even when some multi-hop
//!    route would be cheaper. Among parallel edges the earliest declared
//!    one answers.
//! 2. Failing that, a node reaches itself at cost `0.0`.
//!
//! Everything else is Dijkstra with a deterministic twist: the frontier
//! is scanned linearly and only a strictly smaller cost replaces the
//! current pick, so when two routes tie, the one discovered earlier (in
//! edge declaration order) is kept. Unreachable targets answer
//! [`NO_WEIGHT`].

use hashbrown::HashMap;

use crate::Graph;

/// The "no path / not applicable" answer for path-weight queries.
///
/// Unweighted graphs answer this for every pair; weighted graphs answer
/// it when no route exists.
pub const NO_WEIGHT: f64 = -1.0;

struct Candidate<'g> {
    name: &'g str,
    cost: f64,
    settled: bool,
}

/// Cheapest-path weight between two declared nodes of a weighted graph.
pub(crate) fn weight_between<'g>(graph: &'g Graph, from: &'g str, to: &'g str) -> f64 {
    let index = graph.distance_index();

    if let Some(bucket) = index.bucket(from) {
        if let Some(entry) = bucket.iter().find(|entry| entry.neighbor == to) {
            return entry.cost;
        }
    }

    if from == to {
        return 0.0;
    }

    let mut frontier: Vec<Candidate<'g>> = vec![Candidate { name: from, cost: 0.0, settled: false }];
    let mut positions: HashMap<&'g str, usize> = HashMap::new();
    positions.insert(from, 0);

    loop {
        // First strict minimum among unsettled candidates. Scan order is
        // discovery order, which follows edge declaration order.
        let mut current: Option<usize> = None;
        for (i, candidate) in frontier.iter().enumerate() {
            if candidate.settled {
                continue;
            }
            match current {
                Some(best) if frontier[best].cost <= candidate.cost => {}
                _ => current = Some(i),
            }
        }
        let Some(current) = current else {
            return NO_WEIGHT;
        };

        if frontier[current].name == to {
            return frontier[current].cost;
        }
        frontier[current].settled = true;

        let (name, cost) = (frontier[current].name, frontier[current].cost);
        if let Some(bucket) = index.bucket(name) {
            for entry in bucket {
                let reach = cost + entry.cost;
                match positions.get(entry.neighbor.as_str()) {
                    Some(&i) => {
                        if !frontier[i].settled && reach < frontier[i].cost {
                            frontier[i].cost = reach;
                        }
                    }
                    None => {
                        positions.insert(entry.neighbor.as_str(), frontier.len());
                        frontier.push(Candidate { name: &entry.neighbor, cost: reach, settled: false });
                    }
                }
            }
        }
    }
}
