//! Transitive reduction of the stored edges.
//!
//! An edge `(parent, child)` is redundant when `child` stays reachable from
//! `parent` after deleting just that edge. Every edge is judged against one
//! snapshot of the graph; for an acyclic graph the set of redundant edges is
//! unique, so removing them all at once preserves reachability.

use std::{collections::HashMap, hash::Hash};

use petgraph::{
    algo::{has_path_connecting, DfsSpace},
    graphmap::DiGraphMap,
};

/// Returns every redundant `(parent, child)` edge of `children`.
///
/// `children` maps each member to its ordered list of direct children.
/// Children that are not keys of the map are ignored.
pub(super) fn redundant_edges<M: Eq + Hash>(children: &HashMap<M, Vec<M>>) -> Vec<(&M, &M)> {
    // Intern members so the snapshot can use cheap copyable node ids.
    let members: Vec<&M> = children.keys().collect();
    let ids: HashMap<&M, usize> = members
        .iter()
        .enumerate()
        .map(|(id, member)| (*member, id))
        .collect();

    let edge_count = children.values().map(Vec::len).sum();
    let mut graph: DiGraphMap<usize, ()> = DiGraphMap::with_capacity(members.len(), edge_count);
    for id in 0..members.len() {
        graph.add_node(id);
    }

    let mut edges = Vec::with_capacity(edge_count);
    for (parent, siblings) in children {
        let parent_id = ids[parent];
        for child in siblings {
            let Some(&child_id) = ids.get(child) else {
                continue;
            };
            graph.add_edge(parent_id, child_id, ());
            edges.push((parent_id, child_id));
        }
    }

    let mut space = DfsSpace::new(&graph);
    let mut redundant = Vec::new();

    for &(parent_id, child_id) in &edges {
        graph.remove_edge(parent_id, child_id);
        if has_path_connecting(&graph, parent_id, child_id, Some(&mut space)) {
            redundant.push((members[parent_id], members[child_id]));
        }
        graph.add_edge(parent_id, child_id, ());
    }

    tracing::debug!(
        examined = edges.len(),
        redundant = redundant.len(),
        "transitive reduction pass"
    );

    redundant
}
