//! Hop distance from the root node.
//!
//! [`filter_graph`](super::filter::filter_graph) does not evaluate
//! `FilterSpec::max_distance`; callers that want distance pruning layer
//! [`apply_max_distance`] on top of its output.

use std::collections::{HashMap, HashSet, VecDeque};

use super::filter::FilterSpec;
use super::types::{Graph, Node};

/// Breadth-first hop distance of every node id reachable from the graph's root.
///
/// Links are walked in both directions. The map is empty when the graph has
/// no [`NodeType::Root`](super::types::NodeType::Root) node.
pub fn hop_distances<D, L>(graph: &Graph<D, L>) -> HashMap<String, usize> {
	let Some(root) = graph.root() else {
		return HashMap::new();
	};

	let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
	for link in &graph.links {
		let (src, tgt) = (link.source.id(), link.target.id());
		adjacency.entry(src).or_default().push(tgt);
		adjacency.entry(tgt).or_default().push(src);
	}

	let mut distances: HashMap<&str, usize> = HashMap::from([(root.id.as_str(), 0)]);
	let mut queue = VecDeque::from([(root.id.as_str(), 0_usize)]);
	while let Some((id, hops)) = queue.pop_front() {
		for &neighbor in adjacency.get(id).into_iter().flatten() {
			if !distances.contains_key(neighbor) {
				distances.insert(neighbor, hops + 1);
				queue.push_back((neighbor, hops + 1));
			}
		}
	}

	distances
		.into_iter()
		.map(|(id, hops)| (id.to_string(), hops))
		.collect()
}

/// Keep the nodes within `max` hops of the root and the links between them.
pub fn prune_by_distance<D: Clone, L: Clone>(graph: &Graph<D, L>, max: usize) -> Graph<D, L> {
	let distances = hop_distances(graph);
	let within = |node: &&Node<D>| distances.get(&node.id).is_some_and(|&hops| hops <= max);

	let nodes: Vec<Node<D>> = graph.nodes.iter().filter(within).cloned().collect();
	let kept: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
	let links = graph
		.links
		.iter()
		.filter(|link| kept.contains(link.source.id()) && kept.contains(link.target.id()))
		.cloned()
		.collect();

	Graph { nodes, links }
}

/// Apply `spec.max_distance` to an already-filtered graph. Identity when unset.
pub fn apply_max_distance<D: Clone, L: Clone>(
	graph: &Graph<D, L>,
	spec: &FilterSpec,
) -> Graph<D, L> {
	match spec.max_distance {
		Some(max) => prune_by_distance(graph, max),
		None => graph.clone(),
	}
}
