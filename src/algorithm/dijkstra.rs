use log::{debug, trace};
use std::collections::{HashMap, HashSet};

use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion.
///
/// A vertex may sit in the frontier several times; only its first pop settles
/// it and later pops are discarded as stale. Requires non-negative weights,
/// which [`crate::LabeledGraph`] enforces on construction.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<V, W> ShortestPathAlgorithm<V, W> for Dijkstra
where
    V: Vertex,
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths<G>(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>
    where
        G: Graph<V, W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(format!("{:?}", source)));
        }

        let n = graph.vertex_count();
        debug!(
            "Dijkstra from {:?} over {} vertices and {} edges",
            source,
            n,
            graph.edge_count()
        );

        // Initialize distances and predecessors
        let mut distances: HashMap<V, W> = HashMap::with_capacity(n);
        let mut predecessors: HashMap<V, Option<V>> = HashMap::with_capacity(n);
        for v in graph.vertices() {
            distances.insert(v.clone(), W::infinity());
            predecessors.insert(v.clone(), None);
        }
        distances.insert(source.clone(), W::zero());

        let mut frontier = Frontier::new();
        frontier.push(source.clone(), W::zero());

        let mut settled: HashSet<V> = HashSet::with_capacity(n);
        let mut settle_order = Vec::with_capacity(n);
        let mut stats = SearchStats {
            frontier_pushes: 1,
            ..SearchStats::default()
        };

        while let Some((u, dist_u)) = frontier.pop() {
            if settled.contains(&u) {
                stats.stale_entries += 1;
                continue;
            }
            settled.insert(u.clone());
            trace!("Settled {:?} at distance {:?}", u, dist_u);

            // Relax all outgoing edges to unsettled neighbors
            for (v, weight) in graph.outgoing_edges(&u)? {
                stats.edges_scanned += 1;
                if settled.contains(v) {
                    continue;
                }

                let candidate = dist_u + weight;
                let current = distances.get(v).copied().unwrap_or_else(W::infinity);
                // Strict comparison: the first relaxation reaching a distance keeps its predecessor
                if candidate < current {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    frontier.push(v.clone(), candidate);
                    stats.relaxations += 1;
                    stats.frontier_pushes += 1;
                }
            }

            settle_order.push(u);
        }

        stats.settled = settle_order.len();
        debug!(
            "Dijkstra from {:?} settled {} of {} vertices ({} relaxations, {} stale entries)",
            source, stats.settled, n, stats.relaxations, stats.stale_entries
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
            settle_order,
            stats,
        })
    }
}
