use crate::graph::builder::GraphBuilder;
use crate::graph::labeled::LabeledGraph;
use crate::Result;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a random directed graph with `n` vertices labeled `0..n` and
/// roughly `edge_factor * n` edges of weight in `[1, 100)`.
///
/// The same seed always yields the same graph.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    seed: u64,
) -> Result<LabeledGraph<usize, OrderedFloat<f64>>> {
    let mut builder = GraphBuilder::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        builder.add_vertex(v);
    }

    if n > 1 {
        let num_edges = (edge_factor * n as f64) as usize;
        for _ in 0..num_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Avoid self-loops
            if u != v {
                builder.add_edge(u, v, OrderedFloat(rng.gen_range(1.0..100.0)));
            }
        }
    }

    builder.build()
}

/// Generates an 8-connected grid: cardinal moves cost 1.0, diagonal moves 1.4.
///
/// Vertices are labeled `(x, y)`.
pub fn generate_grid(
    width: usize,
    height: usize,
) -> Result<LabeledGraph<(usize, usize), OrderedFloat<f64>>> {
    const DIRECTIONS: [(i64, i64, f64); 8] = [
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    let mut builder = GraphBuilder::new();
    for y in 0..height {
        for x in 0..width {
            builder.add_vertex((x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            for (dx, dy, cost) in DIRECTIONS {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    builder.add_edge((x, y), (nx as usize, ny as usize), OrderedFloat(cost));
                }
            }
        }
    }

    builder.build()
}
