//! Compound graph filtering.
//!
//! A [`FilterSpec`] is replaced wholesale whenever the user changes a filter
//! control. [`filter_graph`] applies it in two stable passes: nodes first,
//! then links whose type is allowed and whose endpoints both survived.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::types::{Graph, LinkType, Node, NodeType};

/// Which parts of a graph should be visible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
	/// Node types to keep.
	pub node_types: BTreeSet<NodeType>,
	/// Link types to keep.
	pub link_types: BTreeSet<LinkType>,
	/// Case-insensitive substring matched against node titles. Empty matches everything.
	#[serde(default)]
	pub search: String,
	/// Maximum hop distance from the root. Not evaluated by [`filter_graph`];
	/// see [`super::distance::apply_max_distance`].
	#[serde(default)]
	pub max_distance: Option<usize>,
}

impl Default for FilterSpec {
	fn default() -> Self {
		Self {
			node_types: NodeType::ALL.into_iter().collect(),
			link_types: LinkType::ALL.into_iter().collect(),
			search: String::new(),
			max_distance: None,
		}
	}
}

impl FilterSpec {
	/// A spec that admits nothing. Useful as a starting point for the `with_*` builders.
	pub fn none() -> Self {
		Self {
			node_types: BTreeSet::new(),
			link_types: BTreeSet::new(),
			search: String::new(),
			max_distance: None,
		}
	}

	pub fn with_node_types(self, node_types: impl IntoIterator<Item = NodeType>) -> Self {
		Self {
			node_types: node_types.into_iter().collect(),
			..self
		}
	}

	pub fn with_link_types(self, link_types: impl IntoIterator<Item = LinkType>) -> Self {
		Self {
			link_types: link_types.into_iter().collect(),
			..self
		}
	}

	pub fn with_search(self, search: impl Into<String>) -> Self {
		Self {
			search: search.into(),
			..self
		}
	}

	pub fn with_max_distance(self, max_distance: Option<usize>) -> Self {
		Self { max_distance, ..self }
	}

	/// Whether `node` passes the type and search criteria.
	pub fn admits_node<D>(&self, node: &Node<D>) -> bool {
		self.node_types.contains(&node.kind)
			&& title_matches(&node.title, &self.search.to_lowercase())
	}

	pub fn admits_link_type(&self, kind: LinkType) -> bool {
		self.link_types.contains(&kind)
	}
}

/// `needle` must already be lowercase.
fn title_matches(title: &str, needle: &str) -> bool {
	needle.is_empty() || title.to_lowercase().contains(needle)
}

/// Produce the subgraph visible under `spec`.
///
/// Surviving nodes and links keep their relative input order, and every
/// returned link has both endpoints among the returned nodes. The input graph
/// is left untouched. `spec.max_distance` is ignored here.
pub fn filter_graph<D: Clone, L: Clone>(graph: &Graph<D, L>, spec: &FilterSpec) -> Graph<D, L> {
	let needle = spec.search.to_lowercase();

	let nodes: Vec<Node<D>> = graph
		.nodes
		.iter()
		.filter(|node| spec.node_types.contains(&node.kind) && title_matches(&node.title, &needle))
		.cloned()
		.collect();

	let visible: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
	let links = graph
		.links
		.iter()
		.filter(|link| {
			spec.admits_link_type(link.kind)
				&& visible.contains(link.source.id())
				&& visible.contains(link.target.id())
		})
		.cloned()
		.collect();

	Graph { nodes, links }
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::graph::types::{Link, LinkData};

	fn sample() -> Graph<()> {
		Graph {
			nodes: vec![
				Node::new("r", "Moonlight Sonata", NodeType::Root),
				Node::new("a", "Sonata Sketches", NodeType::Ancestor),
				Node::new("d", "Moonlight Remix", NodeType::Derivative),
			],
			links: vec![
				Link::new("a", "r", LinkType::DerivesFrom, LinkData::new("remix")),
				Link::new("r", "d", LinkType::DerivedBy, LinkData::new("remix")),
			],
		}
	}

	#[test]
	fn default_spec_keeps_everything() {
		let graph = sample();
		assert_eq!(filter_graph(&graph, &FilterSpec::default()), graph);
	}

	#[test]
	fn search_ignores_case() {
		let graph = sample();
		let spec = FilterSpec::default().with_search("MOONLIGHT");
		let result = filter_graph(&graph, &spec);

		let ids: Vec<&str> = result.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["r", "d"]);
		assert_eq!(result.links.len(), 1);
		assert_eq!(result.links[0].target.id(), "d");
	}

	#[test]
	fn admits_node_matches_filter_pass() {
		let spec = FilterSpec::none()
			.with_node_types([NodeType::Ancestor])
			.with_search("sketch");
		let graph = sample();
		assert!(!spec.admits_node(&graph.nodes[0]));
		assert!(spec.admits_node(&graph.nodes[1]));
		assert!(!spec.admits_node(&graph.nodes[2]));
	}

	#[test]
	fn unknown_types_are_never_admitted_by_default() {
		let mut graph = sample();
		graph.nodes.push(Node::new("x", "Mystery", NodeType::Unknown));
		graph.links.push(Link::new("r", "x", LinkType::Unknown, LinkData::default()));

		let result = filter_graph(&graph, &FilterSpec::default());
		assert_eq!(result, sample());
	}

	#[test]
	fn spec_serializes_with_wire_names() {
		let spec = FilterSpec::none()
			.with_node_types([NodeType::Root])
			.with_link_types([LinkType::CommonAncestor])
			.with_max_distance(Some(2));
		let json = serde_json::to_value(&spec).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"nodeTypes": ["root"],
				"linkTypes": ["commonAncestor"],
				"search": "",
				"maxDistance": 2
			})
		);
	}
}
