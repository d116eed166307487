//! Candidate rhyme graph over word occurrences.

use std::collections::HashSet;

use tracing::{debug, debug_span};

use crate::extract::WordOccurrence;
use crate::rhyme::rhymes;
use crate::settings::settings;

/// Undirected graph; node `i` is occurrence `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RhymeGraph {
    adjacency: Vec<Vec<usize>>,
}

impl RhymeGraph {
    fn with_nodes(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
        }
    }

    fn add_edge(&mut self, i: usize, j: usize) {
        self.adjacency[i].push(j);
        self.adjacency[j].push(i);
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbors(&self, i: usize) -> &[usize] {
        self.adjacency.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.neighbors(i).contains(&j)
    }

    /// Each edge once, as `(i, j)` with `i < j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, ns)| ns.iter().filter(move |&&j| i < j).map(move |&j| (i, j)))
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

/// Build the graph with `analysis.max_line_distance` from settings.
pub fn build_graph(occurrences: &[WordOccurrence]) -> RhymeGraph {
    build_graph_with(occurrences, settings().analysis.max_line_distance)
}

pub fn build_graph_with(occurrences: &[WordOccurrence], max_line_distance: usize) -> RhymeGraph {
    let _span = debug_span!("build_graph", occurrences = occurrences.len()).entered();
    let mut graph = RhymeGraph::with_nodes(occurrences.len());
    for (i, a) in occurrences.iter().enumerate() {
        for (j, b) in occurrences.iter().enumerate().skip(i + 1) {
            if a.line.abs_diff(b.line) <= max_line_distance && is_candidate(a, b) && rhymes(a, b)
            {
                graph.add_edge(i, j);
            }
        }
    }
    let before = graph.edge_count();
    let graph = prune(occurrences, graph);
    debug!(edges = graph.edge_count(), pruned = before - graph.edge_count());
    graph
}

fn parent_of(o: &WordOccurrence) -> Option<usize> {
    o.partial_of().map(|p| p.parent)
}

fn siblings(a: &WordOccurrence, b: &WordOccurrence) -> bool {
    matches!((parent_of(a), parent_of(b)), (Some(x), Some(y)) if x == y)
}

/// Pairs worth running the rule chain on.
fn is_candidate(a: &WordOccurrence, b: &WordOccurrence) -> bool {
    if a.is_phrase() && b.is_phrase() {
        return false;
    }
    let inside = |part: &WordOccurrence, other: &WordOccurrence| {
        part.partial_of()
            .is_some_and(|p| p.parent_text == other.normalized)
    };
    if inside(a, b) || inside(b, a) {
        return false;
    }
    !a.overlaps(b) || siblings(a, b)
}

fn too_short(o: &WordOccurrence) -> bool {
    o.partial_of().is_some() && o.normalized.chars().count() < 3
}

/// Drop edges that come from implausible word splits.
fn prune(occurrences: &[WordOccurrence], graph: RhymeGraph) -> RhymeGraph {
    // Partial words already linked to something other than a sibling.
    let mut valid_pairs = HashSet::new();
    for (i, o) in occurrences.iter().enumerate() {
        if o.partial_of().is_none() || too_short(o) {
            continue;
        }
        for &j in graph.neighbors(i) {
            if !siblings(o, &occurrences[j]) {
                valid_pairs.insert((i.min(j), i.max(j)));
            }
        }
    }

    let mut pruned = RhymeGraph::with_nodes(graph.node_count());
    for (i, j) in graph.edges() {
        let (a, b) = (&occurrences[i], &occurrences[j]);
        if too_short(a) || too_short(b) {
            continue;
        }
        let keep = valid_pairs.contains(&(i, j))
            || a.partial_of().is_none()
            || b.partial_of().is_none()
            || a.line != b.line
            || !a.overlaps(b);
        if keep {
            pruned.add_edge(i, j);
        }
    }
    pruned
}
