//! Graph adapter traits.
//!
//! The analysis engines never see a concrete graph type, only these traits.
//! Vertex ids are dense `0..node_count()`; the id space doubles as the key
//! space of every output map.

pub trait Graph {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: usize) -> Vec<usize>;
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
}

pub trait WeightedGraph: Graph {
    /// Weight of the edge `source -> target`.
    ///
    /// Must be finite and strictly positive; the weighted engines reject
    /// anything else at analysis time. Only called for pairs previously
    /// returned by [`Graph::neighbors`].
    fn edge_weight(&self, source: usize, target: usize) -> f64;
}

/// Owned adjacency-list graph, the workhorse adapter for tests and small
/// analyses. Edges are directed; the `*_undirected` helpers insert both
/// directions.
///
/// Insertions are not deduplicated: a repeated `u -> v` shows up twice in
/// `neighbors` (the unweighted engine then counts it as a parallel edge),
/// while `edge_weight` always returns the first stored weight. Keep the
/// graph simple when using the weighted engine.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    adj: Vec<Vec<(usize, f64)>>,
}

impl AdjacencyList {
    pub fn with_nodes(n: usize) -> Self {
        Self { adj: vec![Vec::new(); n] }
    }

    /// Add a directed edge with unit weight.
    pub fn add_edge(&mut self, source: usize, target: usize) {
        self.add_weighted_edge(source, target, 1.0);
    }

    pub fn add_weighted_edge(&mut self, source: usize, target: usize, weight: f64) {
        assert!(source < self.adj.len() && target < self.adj.len(), "edge endpoint out of range");
        self.adj[source].push((target, weight));
    }

    pub fn add_undirected_edge(&mut self, a: usize, b: usize) {
        self.add_undirected_weighted_edge(a, b, 1.0);
    }

    pub fn add_undirected_weighted_edge(&mut self, a: usize, b: usize, weight: f64) {
        self.add_weighted_edge(a, b, weight);
        self.add_weighted_edge(b, a, weight);
    }
}

impl Graph for AdjacencyList {
    fn node_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adj[node].iter().map(|&(target, _)| target).collect()
    }

    fn out_degree(&self, node: usize) -> usize {
        self.adj[node].len()
    }
}

impl WeightedGraph for AdjacencyList {
    fn edge_weight(&self, source: usize, target: usize) -> f64 {
        self.adj[source]
            .iter()
            .find(|&&(t, _)| t == target)
            .map_or(0.0, |&(_, weight)| weight)
    }
}

/// Dense matrix adapter: `matrix[u][v] > 0.0` is an edge of that weight.
pub struct AdjacencyMatrix<'a>(pub &'a [Vec<f64>]);

impl<'a> Graph for AdjacencyMatrix<'a> {
    fn node_count(&self) -> usize {
        self.0.len()
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.0[node]
            .iter()
            .enumerate()
            .filter(|(_, &w)| w > 0.0)
            .map(|(i, _)| i)
            .collect()
    }
}

impl<'a> WeightedGraph for AdjacencyMatrix<'a> {
    fn edge_weight(&self, source: usize, target: usize) -> f64 {
        self.0[source][target]
    }
}

#[cfg(feature = "petgraph")]
impl<N, E, Ty, Ix> Graph for petgraph::Graph<N, E, Ty, Ix>
where
    Ty: petgraph::EdgeType,
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors(petgraph::graph::NodeIndex::new(node)).map(|idx| idx.index()).collect()
    }
}

#[cfg(feature = "petgraph")]
impl<N, Ty, Ix> WeightedGraph for petgraph::Graph<N, f64, Ty, Ix>
where
    Ty: petgraph::EdgeType,
    Ix: petgraph::graph::IndexType,
{
    fn edge_weight(&self, source: usize, target: usize) -> f64 {
        use petgraph::graph::NodeIndex;
        self.find_edge(NodeIndex::new(source), NodeIndex::new(target)).map_or(0.0, |e| self[e])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_list_directed_edges_are_one_way() {
        let mut g = AdjacencyList::with_nodes(3);
        g.add_edge(0, 1);
        g.add_weighted_edge(1, 2, 2.5);

        assert_eq!(g.node_count(), 3);
        assert_eq!(g.neighbors(0), vec![1]);
        assert!(g.neighbors(1).contains(&2));
        assert!(g.neighbors(2).is_empty());
        assert_eq!(g.edge_weight(1, 2), 2.5);
        assert_eq!(g.edge_weight(2, 1), 0.0);
    }

    #[test]
    fn adjacency_list_undirected_inserts_both_directions() {
        let mut g = AdjacencyList::with_nodes(2);
        g.add_undirected_weighted_edge(0, 1, 3.0);
        assert_eq!(g.neighbors(0), vec![1]);
        assert_eq!(g.neighbors(1), vec![0]);
        assert_eq!(g.edge_weight(0, 1), 3.0);
        assert_eq!(g.edge_weight(1, 0), 3.0);
    }

    #[test]
    fn parallel_edges_repeat_in_neighbors_and_keep_the_first_weight() {
        let mut g = AdjacencyList::with_nodes(2);
        g.add_weighted_edge(0, 1, 2.0);
        g.add_weighted_edge(0, 1, 5.0);
        assert_eq!(g.neighbors(0), vec![1, 1]);
        assert_eq!(g.edge_weight(0, 1), 2.0);
    }

    #[test]
    fn adjacency_matrix_skips_zero_entries() {
        let rows = vec![vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 2.0], vec![0.0, 0.0, 0.0]];
        let g = AdjacencyMatrix(&rows);
        assert_eq!(g.neighbors(0), vec![1]);
        assert_eq!(g.neighbors(1), vec![2]);
        assert_eq!(g.out_degree(2), 0);
        assert_eq!(g.edge_weight(1, 2), 2.0);
    }
}
