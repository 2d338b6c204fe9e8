//! End-to-end sketch: weighted grid analysis with logged progress.
//!
//! Builds a `side x side` grid whose edge weights grow away from the center
//! (a toy road network where peripheral links are slower), runs the full
//! weighted analysis with a `tracing`-backed progress monitor, and prints the
//! most central vertices by each index.

use centrality::{
    analyze_weighted_with_progress, most_central, AdjacencyList, AnalyzerConfig, LogProgress,
};

fn grid(side: usize) -> AdjacencyList {
    let mut g = AdjacencyList::with_nodes(side * side);
    let center = (side as f64 - 1.0) / 2.0;
    let weight = |r: usize, c: usize| {
        let dr = r as f64 - center;
        let dc = c as f64 - center;
        1.0 + (dr * dr + dc * dc).sqrt() / side as f64
    };
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            if c + 1 < side {
                g.add_undirected_weighted_edge(v, v + 1, weight(r, c));
            }
            if r + 1 < side {
                g.add_undirected_weighted_edge(v, v + side, weight(r, c));
            }
        }
    }
    g
}

fn main() -> centrality::Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let side = 20;
    let g = grid(side);
    let mut progress = LogProgress::new();
    let analysis = analyze_weighted_with_progress(&g, AnalyzerConfig::undirected(), &mut progress)?;

    println!("most central by closeness:");
    for (v, score) in most_central(&analysis.closeness, 5) {
        println!("  vertex {:4} (row {:2}, col {:2})  {score:.4}", v, v / side, v % side);
    }
    println!("most central by betweenness:");
    for (v, score) in most_central(&analysis.betweenness, 5) {
        println!("  vertex {:4} (row {:2}, col {:2})  {score:.1}", v, v / side, v % side);
    }
    Ok(())
}
