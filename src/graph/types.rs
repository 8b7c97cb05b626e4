//! Graph data structures shared by the builder, the filter engine and the view state.
//!
//! Everything here serializes with the camelCase field names the rendering
//! layer expects, so a [`Graph`] can be handed to a force-directed renderer
//! as JSON without any reshaping.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of an IP asset relative to the root of the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
	/// The asset the graph was built around.
	Root,
	/// An asset the root derives from.
	Ancestor,
	/// An asset derived from the root.
	Derivative,
	/// An asset sharing a parent with the root.
	Sibling,
	/// An asset linked to the root without a derivation.
	Related,
	/// An asset produced together with the root.
	Collaborator,
	/// An asset in dispute with the root.
	Disputed,
	/// Any label this crate does not recognize.
	#[serde(other)]
	Unknown,
}

impl NodeType {
	/// Every recognized node type, in declaration order.
	pub const ALL: [NodeType; 7] = [
		NodeType::Root,
		NodeType::Ancestor,
		NodeType::Derivative,
		NodeType::Sibling,
		NodeType::Related,
		NodeType::Collaborator,
		NodeType::Disputed,
	];

	/// Wire label of this type.
	pub fn as_str(self) -> &'static str {
		match self {
			NodeType::Root => "root",
			NodeType::Ancestor => "ancestor",
			NodeType::Derivative => "derivative",
			NodeType::Sibling => "sibling",
			NodeType::Related => "related",
			NodeType::Collaborator => "collaborator",
			NodeType::Disputed => "disputed",
			NodeType::Unknown => "unknown",
		}
	}

	/// Parse a label, ignoring ASCII case. Unrecognized labels map to [`NodeType::Unknown`].
	pub fn from_label(label: &str) -> Self {
		NodeType::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(label))
			.unwrap_or(NodeType::Unknown)
	}
}

impl fmt::Display for NodeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Kind of edge between two assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkType {
	/// Source is an ancestor the target derives from.
	DerivesFrom,
	/// Target is a derivative of the source.
	DerivedBy,
	/// Both ends share an ancestor.
	CommonAncestor,
	/// Non-derivation relationship.
	Related,
	/// Any label this crate does not recognize.
	#[serde(other)]
	Unknown,
}

impl LinkType {
	/// Every recognized link type, in declaration order.
	pub const ALL: [LinkType; 4] = [
		LinkType::DerivesFrom,
		LinkType::DerivedBy,
		LinkType::CommonAncestor,
		LinkType::Related,
	];

	/// Wire label of this type.
	pub fn as_str(self) -> &'static str {
		match self {
			LinkType::DerivesFrom => "derivesFrom",
			LinkType::DerivedBy => "derivedBy",
			LinkType::CommonAncestor => "commonAncestor",
			LinkType::Related => "related",
			LinkType::Unknown => "unknown",
		}
	}

	/// Parse a label, ignoring ASCII case. Unrecognized labels map to [`LinkType::Unknown`].
	pub fn from_label(label: &str) -> Self {
		LinkType::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(label))
			.unwrap_or(LinkType::Unknown)
	}
}

impl fmt::Display for LinkType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Finer-grained classification of a derivation, read from its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
	/// A remix of the source work.
	Remix,
	/// An adaptation into another form or medium.
	Adaptation,
	/// A continuation of the source work.
	Sequel,
	/// Empty or unrecognized label.
	Other,
}

impl RelationshipKind {
	/// Classify a relationship label. Surrounding whitespace and case are ignored.
	pub fn classify(label: &str) -> Self {
		let label = label.trim();
		if label.eq_ignore_ascii_case("remix") {
			RelationshipKind::Remix
		} else if label.eq_ignore_ascii_case("adaptation") {
			RelationshipKind::Adaptation
		} else if label.eq_ignore_ascii_case("sequel") {
			RelationshipKind::Sequel
		} else {
			RelationshipKind::Other
		}
	}
}

/// Layout state owned by the renderer. Carried through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub x: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub y: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vx: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vy: Option<f64>,
	/// Pinned x coordinate.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fx: Option<f64>,
	/// Pinned y coordinate.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fy: Option<f64>,
}

/// One IP asset in the graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node<D = serde_json::Value> {
	/// Asset identifier. Links reference nodes by this value.
	pub id: String,
	/// Display title. Empty when the source had none.
	#[serde(default, deserialize_with = "super::de::nullable_string")]
	pub title: String,
	/// Optional image URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	/// Position relative to the root.
	#[serde(rename = "type")]
	pub kind: NodeType,
	/// Opaque per-asset metadata.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<D>,
	#[serde(flatten)]
	pub layout: Layout,
}

impl<D> Node<D> {
	/// Create a node with no image, data or layout.
	pub fn new(id: impl Into<String>, title: impl Into<String>, kind: NodeType) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			image: None,
			kind,
			data: None,
			layout: Layout::default(),
		}
	}

	/// Set the image URL.
	pub fn with_image(mut self, image: impl Into<String>) -> Self {
		self.image = Some(image.into());
		self
	}

	/// Attach metadata.
	pub fn with_data(mut self, data: D) -> Self {
		self.data = Some(data);
		self
	}
}

/// A resolved link endpoint, as written back by a renderer that swaps ids for node objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRef {
	pub id: String,
	#[serde(flatten)]
	pub layout: Layout,
}

/// A link endpoint: either a bare node id or a resolved node reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkEnd {
	Id(String),
	Resolved(NodeRef),
}

impl LinkEnd {
	/// Identifier of the referenced node, whichever representation is held.
	pub fn id(&self) -> &str {
		match self {
			LinkEnd::Id(id) => id,
			LinkEnd::Resolved(node) => &node.id,
		}
	}
}

impl From<String> for LinkEnd {
	fn from(id: String) -> Self {
		LinkEnd::Id(id)
	}
}

impl From<&str> for LinkEnd {
	fn from(id: &str) -> Self {
		LinkEnd::Id(id.to_string())
	}
}

/// Relationship metadata attached to every link the builder produces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkData {
	/// The relationship label exactly as received (e.g. `"remix"`).
	#[serde(default, deserialize_with = "super::de::nullable_string")]
	pub relationship_type: String,
}

impl LinkData {
	pub fn new(relationship_type: impl Into<String>) -> Self {
		Self {
			relationship_type: relationship_type.into(),
		}
	}

	/// Classification of [`LinkData::relationship_type`].
	pub fn kind(&self) -> RelationshipKind {
		RelationshipKind::classify(&self.relationship_type)
	}
}

/// A directed edge between two nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link<L = LinkData> {
	pub source: LinkEnd,
	pub target: LinkEnd,
	#[serde(rename = "type")]
	pub kind: LinkType,
	pub data: L,
}

impl<L> Link<L> {
	pub fn new(
		source: impl Into<LinkEnd>,
		target: impl Into<LinkEnd>,
		kind: LinkType,
		data: L,
	) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			kind,
			data,
		}
	}

	/// Whether either end of this link is `id`.
	pub fn touches(&self, id: &str) -> bool {
		self.source.id() == id || self.target.id() == id
	}
}

/// Complete graph data: nodes and links, in the order they were produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Graph<D = serde_json::Value, L = LinkData> {
	pub nodes: Vec<Node<D>>,
	pub links: Vec<Link<L>>,
}

impl<D, L> Default for Graph<D, L> {
	fn default() -> Self {
		Self {
			nodes: Vec::new(),
			links: Vec::new(),
		}
	}
}

impl<D, L> Graph<D, L> {
	/// First node with the given id.
	pub fn node(&self, id: &str) -> Option<&Node<D>> {
		self.nodes.iter().find(|node| node.id == id)
	}

	/// First node of type [`NodeType::Root`].
	pub fn root(&self) -> Option<&Node<D>> {
		self.nodes.iter().find(|node| node.kind == NodeType::Root)
	}

	pub fn contains_node(&self, id: &str) -> bool {
		self.node(id).is_some()
	}

	/// Set of node ids present in the graph.
	pub fn node_ids(&self) -> HashSet<&str> {
		self.nodes.iter().map(|node| node.id.as_str()).collect()
	}

	/// Ids of nodes sharing a link with `id`, in link order. May repeat.
	pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
		self.links.iter().filter_map(move |link| {
			if link.source.id() == id {
				Some(link.target.id())
			} else if link.target.id() == id {
				Some(link.source.id())
			} else {
				None
			}
		})
	}

	/// True when every link endpoint names a node in this graph.
	pub fn is_consistent(&self) -> bool {
		let ids = self.node_ids();
		self.links
			.iter()
			.all(|link| ids.contains(link.source.id()) && ids.contains(link.target.id()))
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.links.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	#[test]
	fn unknown_labels_fall_back() {
		assert_eq!(NodeType::from_label("ROOT"), NodeType::Root);
		assert_eq!(NodeType::from_label("wizard"), NodeType::Unknown);
		assert_eq!(LinkType::from_label("derivedby"), LinkType::DerivedBy);
		assert_eq!(LinkType::from_label(""), LinkType::Unknown);

		let kind: NodeType = serde_json::from_value(json!("wizard")).unwrap();
		assert_eq!(kind, NodeType::Unknown);
		let kind: LinkType = serde_json::from_value(json!("commonAncestor")).unwrap();
		assert_eq!(kind, LinkType::CommonAncestor);
	}

	#[test]
	fn relationship_labels_classify() {
		assert_eq!(RelationshipKind::classify(" Remix "), RelationshipKind::Remix);
		assert_eq!(RelationshipKind::classify("sequel"), RelationshipKind::Sequel);
		assert_eq!(LinkData::new("ADAPTATION").kind(), RelationshipKind::Adaptation);
		assert_eq!(LinkData::default().kind(), RelationshipKind::Other);
	}

	#[test]
	fn link_end_reads_id_from_either_form() {
		let link: Link = serde_json::from_value(json!({
			"source": "a",
			"target": { "id": "b", "x": 12.5, "y": -3, "title": "ignored" },
			"type": "derivedBy",
			"data": { "relationshipType": "remix" }
		}))
		.unwrap();

		assert_eq!(link.source.id(), "a");
		assert_eq!(link.target.id(), "b");
		match &link.target {
			LinkEnd::Resolved(node) => assert_eq!(node.layout.x, Some(12.5)),
			LinkEnd::Id(_) => panic!("expected a resolved endpoint"),
		}
	}

	#[test]
	fn node_layout_passes_through_serde() {
		let node: Node = serde_json::from_value(json!({
			"id": "n1",
			"type": "derivative",
			"x": 1.0,
			"fx": 4.0
		}))
		.unwrap();

		assert_eq!(node.title, "");
		assert_eq!(node.image, None);
		assert_eq!(node.layout.x, Some(1.0));
		assert_eq!(node.layout.fx, Some(4.0));
		assert_eq!(node.layout.vy, None);

		let back = serde_json::to_value(&node).unwrap();
		assert_eq!(
			back,
			json!({ "id": "n1", "title": "", "type": "derivative", "x": 1.0, "fx": 4.0 })
		);
	}

	#[test]
	fn consistency_and_neighbors() {
		let mut graph: Graph<()> = Graph {
			nodes: vec![
				Node::new("r", "Root", NodeType::Root),
				Node::new("a", "Anc", NodeType::Ancestor),
			],
			links: vec![Link::new("a", "r", LinkType::DerivesFrom, LinkData::new("remix"))],
		};
		assert!(graph.is_consistent());
		assert_eq!(graph.neighbors("r").collect::<Vec<_>>(), vec!["a"]);
		assert_eq!(graph.root().map(|n| n.id.as_str()), Some("r"));

		graph.links.push(Link::new("r", "ghost", LinkType::DerivedBy, LinkData::default()));
		assert!(!graph.is_consistent());
	}
}
