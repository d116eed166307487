//! Rhyme groups: connected components of the rhyme graph, ordered by
//! position and coloured so that nearby groups differ.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::extract::{OccurrenceKind, WordOccurrence};
use crate::graph::RhymeGraph;
use crate::settings::settings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMember {
    pub text: String,
    pub line: usize,
    pub start: usize,
    pub end: usize,
    /// Index of the occurrence this member came from.
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RhymeGroup {
    pub id: String,
    pub color: String,
    /// Ordered by (line, start, end).
    pub members: Vec<GroupMember>,
}

impl RhymeGroup {
    pub fn mean_line(&self) -> f64 {
        let total: usize = self.members.iter().map(|m| m.line).sum();
        total as f64 / self.members.len().max(1) as f64
    }

    fn lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().map(|m| m.line)
    }

    /// Some member line of each is within `lines` of the other.
    pub fn is_near(&self, other: &RhymeGroup, lines: usize) -> bool {
        self.lines()
            .any(|a| other.lines().any(|b| a.abs_diff(b) <= lines))
    }
}

/// Groups with the palette and adjacency distance from settings.
pub fn extract_groups(occurrences: &[WordOccurrence], graph: &RhymeGraph) -> Vec<RhymeGroup> {
    let color = &settings().color;
    extract_groups_with(occurrences, graph, &color.palette, color.adjacency_lines)
}

pub fn extract_groups_with(
    occurrences: &[WordOccurrence],
    graph: &RhymeGraph,
    palette: &[String],
    adjacency_lines: usize,
) -> Vec<RhymeGroup> {
    let mut groups = Vec::new();
    for component in components(graph) {
        if component.len() < 2 {
            continue;
        }
        let kept = drop_redundant_phrases(occurrences, &component);
        if kept.len() < 2 {
            continue;
        }
        let mut members: Vec<GroupMember> = kept
            .into_iter()
            .map(|i| {
                let o = &occurrences[i];
                GroupMember {
                    text: o.text.clone(),
                    line: o.line,
                    start: o.start,
                    end: o.end,
                    index: i,
                }
            })
            .collect();
        members.sort_by_key(|m| (m.line, m.start, m.end));
        groups.push(RhymeGroup {
            id: format!("group-{}", groups.len()),
            color: String::new(),
            members,
        });
    }

    groups.sort_by(|a, b| a.mean_line().total_cmp(&b.mean_line()));
    assign_colors(&mut groups, palette, adjacency_lines);
    debug!(groups = groups.len());
    groups
}

/// Breadth-first connected components, in order of their lowest node.
fn components(graph: &RhymeGraph) -> Vec<Vec<usize>> {
    let mut visited = vec![false; graph.node_count()];
    let mut out = Vec::new();
    for start in 0..graph.node_count() {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut queue = VecDeque::from([start]);
        let mut component = Vec::new();
        while let Some(node) = queue.pop_front() {
            component.push(node);
            for &next in graph.neighbors(node) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        out.push(component);
    }
    out
}

/// Remove phrases whose two words already appear on their own in the
/// component, so a phrase cannot bridge two rhyme families.
fn drop_redundant_phrases(occurrences: &[WordOccurrence], component: &[usize]) -> Vec<usize> {
    let singles: HashSet<&str> = component
        .iter()
        .map(|&i| &occurrences[i])
        .filter(|o| !o.is_phrase())
        .map(|o| o.normalized.as_str())
        .collect();
    component
        .iter()
        .copied()
        .filter(|&i| match &occurrences[i].kind {
            OccurrenceKind::Phrase { first, second } => {
                !(singles.contains(first.as_str()) && singles.contains(second.as_str()))
            }
            _ => true,
        })
        .collect()
}

/// Greedy colouring in group order: first palette colour unused by an
/// already-coloured nearby group, else the first colour.
fn assign_colors(groups: &mut [RhymeGroup], palette: &[String], adjacency_lines: usize) {
    let Some(fallback) = palette.first() else {
        return;
    };
    for i in 0..groups.len() {
        let (done, rest) = groups.split_at_mut(i);
        let group = &mut rest[0];
        let taken: HashSet<&str> = done
            .iter()
            .filter(|g| g.is_near(group, adjacency_lines))
            .map(|g| g.color.as_str())
            .collect();
        group.color = palette
            .iter()
            .find(|c| !taken.contains(c.as_str()))
            .unwrap_or(fallback)
            .clone();
    }
}
