//! Text and serializable summaries of a shortest path run

use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Display;

use crate::algorithm::ShortestPathResult;
use crate::graph::{Graph, LabeledGraph, Vertex, Weight};

/// Separator placed between consecutive vertices of a rendered path
pub const ARROW: &str = " → ";

/// One line of a report: a vertex, its distance and the path reaching it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine<V> {
    pub vertex: V,
    /// `None` when the vertex is unreachable
    pub distance: Option<f64>,
    pub path: Vec<V>,
}

/// Joins path labels with [`ARROW`]
pub fn format_path<V: Display>(path: &[V]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(ARROW)
}

/// Renders a distance, using `∞` for the unreachable sentinel
pub fn format_distance<W: Weight>(distance: W) -> String {
    match finite_distance(distance) {
        Some(d) => d.to_string(),
        None => "∞".to_string(),
    }
}

fn finite_distance<W: Weight>(distance: W) -> Option<f64> {
    if distance.is_finite() {
        distance.to_f64()
    } else {
        None
    }
}

/// Builds one report line per vertex, in graph order
pub fn build_report<V, W, G>(graph: &G, result: &ShortestPathResult<V, W>) -> Vec<ReportLine<V>>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    graph
        .vertices()
        .map(|v| ReportLine {
            vertex: v.clone(),
            distance: result.distance(v).and_then(finite_distance),
            path: result.path_to(v),
        })
        .collect()
}

/// Renders report lines as `B: distance = 3, path: A → C → B`
pub fn render_text<V: Display>(lines: &[ReportLine<V>]) -> String {
    lines
        .iter()
        .map(|line| match line.distance {
            Some(distance) if !line.path.is_empty() => format!(
                "{}: distance = {}, path: {}",
                line.vertex,
                distance,
                format_path(&line.path)
            ),
            _ => format!("{}: unreachable", line.vertex),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Directed graph edges that are not part of the shortest path tree
///
/// The reverse of a tree edge is reported; see [`non_tree_links`] for the
/// undirected reading.
pub fn non_tree_edges<V, W>(
    graph: &LabeledGraph<V, W>,
    result: &ShortestPathResult<V, W>,
) -> Vec<(V, V, W)>
where
    V: Vertex,
    W: Weight,
{
    let tree: HashSet<(V, V)> = result.tree_edges().into_iter().collect();
    graph
        .edges()
        .filter(|(from, to, _)| !tree.contains(&((*from).clone(), (*to).clone())))
        .map(|(from, to, weight)| (from.clone(), to.clone(), weight))
        .collect()
}

/// Undirected links that the shortest path tree never uses
///
/// `A → B` and `B → A` count as one link, reported once in the direction it is
/// first listed. A link is on the tree when the tree uses it in either
/// direction.
pub fn non_tree_links<V, W>(
    graph: &LabeledGraph<V, W>,
    result: &ShortestPathResult<V, W>,
) -> Vec<(V, V, W)>
where
    V: Vertex,
    W: Weight,
{
    let mut seen: HashSet<(V, V)> = HashSet::new();
    for (from, to) in result.tree_edges() {
        seen.insert((to.clone(), from.clone()));
        seen.insert((from, to));
    }

    let mut links = Vec::new();
    for (from, to, weight) in graph.edges() {
        let forward = (from.clone(), to.clone());
        if seen.contains(&forward) {
            continue;
        }
        seen.insert((to.clone(), from.clone()));
        seen.insert(forward);
        links.push((from.clone(), to.clone(), weight));
    }
    links
}
