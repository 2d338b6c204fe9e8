//! Property tests pitting the Brandes engine against brute-force
//! enumeration on small random graphs.

use proptest::prelude::*;

use centrality::{analyze, analyze_weighted, AdjacencyList, AnalyzerConfig};

/// Build a directed graph (no self-loops) from an `n * n` bit mask.
fn build_directed(n: usize, bits: &[bool]) -> (AdjacencyList, Vec<Vec<usize>>) {
    let mut g = AdjacencyList::with_nodes(n);
    let mut adj = vec![Vec::new(); n];
    for u in 0..n {
        for v in 0..n {
            if u != v && bits[u * n + v] {
                g.add_edge(u, v);
                adj[u].push(v);
            }
        }
    }
    (g, adj)
}

/// Symmetrized variant: an edge in either direction of the mask becomes an
/// undirected edge.
fn build_undirected(n: usize, bits: &[bool]) -> (AdjacencyList, Vec<Vec<usize>>) {
    let mut g = AdjacencyList::with_nodes(n);
    let mut adj = vec![Vec::new(); n];
    for u in 0..n {
        for v in (u + 1)..n {
            if bits[u * n + v] || bits[v * n + u] {
                g.add_undirected_edge(u, v);
                adj[u].push(v);
                adj[v].push(u);
            }
        }
    }
    (g, adj)
}

/// All minimum-length paths from `s` to `t`, by exhaustive simple-path
/// enumeration. Shortest paths never repeat a vertex, so simple paths
/// suffice.
fn min_paths(adj: &[Vec<usize>], s: usize, t: usize) -> Vec<Vec<usize>> {
    fn dfs(
        adj: &[Vec<usize>],
        t: usize,
        path: &mut Vec<usize>,
        on_path: &mut [bool],
        best: &mut usize,
        found: &mut Vec<Vec<usize>>,
    ) {
        let u = *path.last().unwrap();
        if u == t {
            let len = path.len() - 1;
            if len < *best {
                *best = len;
                found.clear();
            }
            if len == *best {
                found.push(path.clone());
            }
            return;
        }
        if path.len() - 1 >= *best {
            return;
        }
        for &v in &adj[u] {
            if !on_path[v] {
                on_path[v] = true;
                path.push(v);
                dfs(adj, t, path, on_path, best, found);
                path.pop();
                on_path[v] = false;
            }
        }
    }

    let mut found = Vec::new();
    let mut path = vec![s];
    let mut on_path = vec![false; adj.len()];
    on_path[s] = true;
    let mut best = usize::MAX;
    dfs(adj, t, &mut path, &mut on_path, &mut best, &mut found);
    found
}

/// Betweenness straight from the definition: each ordered pair spreads one
/// unit over its shortest paths' interior vertices.
fn brute_betweenness(adj: &[Vec<usize>]) -> Vec<f64> {
    let n = adj.len();
    let mut scores = vec![0.0; n];
    for s in 0..n {
        for t in 0..n {
            if s == t {
                continue;
            }
            let paths = min_paths(adj, s, t);
            if paths.is_empty() {
                continue;
            }
            let share = 1.0 / paths.len() as f64;
            for path in &paths {
                for &v in &path[1..path.len() - 1] {
                    scores[v] += share;
                }
            }
        }
    }
    scores
}

/// Closeness from Floyd-Warshall hop counts, independent of the crate's BFS.
fn brute_closeness(adj: &[Vec<usize>]) -> Vec<f64> {
    let n = adj.len();
    let inf = usize::MAX / 2;
    let mut dist = vec![vec![inf; n]; n];
    for u in 0..n {
        dist[u][u] = 0;
        for &v in &adj[u] {
            dist[u][v] = 1;
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if dist[i][k] + dist[k][j] < dist[i][j] {
                    dist[i][j] = dist[i][k] + dist[k][j];
                }
            }
        }
    }
    (0..n)
        .map(|s| {
            let mut count = 0usize;
            let mut sum = 0usize;
            for t in 0..n {
                if t != s && dist[s][t] < inf {
                    count += 1;
                    sum += dist[s][t];
                }
            }
            if sum > 0 {
                count as f64 / sum as f64
            } else {
                0.0
            }
        })
        .collect()
}

fn digraph_bits() -> impl Strategy<Value = (usize, Vec<bool>)> {
    (2usize..=6).prop_flat_map(|n| (Just(n), proptest::collection::vec(any::<bool>(), n * n)))
}

proptest! {
    #[test]
    fn betweenness_matches_path_enumeration((n, bits) in digraph_bits()) {
        let (g, adj) = build_directed(n, &bits);
        let analysis = analyze(&g, AnalyzerConfig::default());
        let expected = brute_betweenness(&adj);
        for v in 0..n {
            prop_assert!((analysis.betweenness[v] - expected[v]).abs() < 1e-9,
                "vertex {}: got {}, expected {}", v, analysis.betweenness[v], expected[v]);
        }
    }

    #[test]
    fn closeness_matches_floyd_warshall((n, bits) in digraph_bits()) {
        let (g, adj) = build_directed(n, &bits);
        let analysis = analyze(&g, AnalyzerConfig::default());
        let expected = brute_closeness(&adj);
        for v in 0..n {
            prop_assert!((analysis.closeness[v] - expected[v]).abs() < 1e-12);
        }
    }

    #[test]
    fn undirected_halving_matches_unordered_pairs((n, bits) in digraph_bits()) {
        // On a symmetric graph every unordered pair is discovered from both
        // endpoints, so the halved result must equal half the directed-style
        // definition.
        let (g, adj) = build_undirected(n, &bits);
        let analysis = analyze(&g, AnalyzerConfig::undirected());
        let expected = brute_betweenness(&adj);
        for v in 0..n {
            prop_assert!((analysis.betweenness[v] - expected[v] / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn unit_weights_reduce_to_the_unweighted_engine((n, bits) in digraph_bits()) {
        let (g, _) = build_directed(n, &bits);
        let unweighted = analyze(&g, AnalyzerConfig::default());
        let weighted = analyze_weighted(&g, AnalyzerConfig::default()).unwrap();
        for v in 0..n {
            prop_assert!((unweighted.betweenness[v] - weighted.betweenness[v]).abs() < 1e-9);
            prop_assert!((unweighted.closeness[v] - weighted.closeness[v]).abs() < 1e-12);
        }
    }

    #[test]
    fn analysis_is_deterministic_and_repeatable((n, bits) in digraph_bits()) {
        let (g, _) = build_directed(n, &bits);
        let first = analyze(&g, AnalyzerConfig::default());
        let second = analyze(&g, AnalyzerConfig::default());
        prop_assert_eq!(first, second);
    }
}
