//! Projection of a derivative-relations response into a [`Graph`].
//!
//! The response groups every asset related to a root into ancestors,
//! derivatives and related entries. Each group is projected independently:
//! one node per entry plus one link to or from the root. Identifiers that
//! appear in more than one group therefore produce one node per appearance.

use serde::{Deserialize, Serialize};

use super::de::{nullable_list, nullable_string};
use super::types::{Graph, Layout, Link, LinkData, LinkType, Node, NodeType};
use crate::error::{GraphError, Result};

/// The asset a relations response is centered on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRef<D = serde_json::Value> {
	pub id: String,
	#[serde(default, deserialize_with = "nullable_string")]
	pub title: String,
	pub image: Option<String>,
	pub metadata: Option<D>,
}

/// One related asset together with the label describing the relationship.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation<D = serde_json::Value> {
	pub id: String,
	#[serde(default, deserialize_with = "nullable_string")]
	pub title: String,
	pub image: Option<String>,
	/// Relationship label such as `"remix"`, `"adaptation"` or `"sequel"`.
	#[serde(default, deserialize_with = "nullable_string")]
	pub relationship_type: String,
	pub metadata: Option<D>,
}

impl<D> Relation<D> {
	pub fn new(
		id: impl Into<String>,
		title: impl Into<String>,
		relationship_type: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			image: None,
			relationship_type: relationship_type.into(),
			metadata: None,
		}
	}

	/// Split into the node for this asset and the data for its link to the root.
	fn project(self, kind: NodeType) -> (Node<D>, LinkData) {
		let node = Node {
			id: self.id,
			title: self.title,
			image: self.image,
			kind,
			data: self.metadata,
			layout: Layout::default(),
		};
		(node, LinkData::new(self.relationship_type))
	}
}

/// Derivative-relations response as returned by the asset API.
///
/// List fields that are absent or `null` decode as empty. `disputed` is
/// accepted so complete responses decode, but the builder does not project it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "D: Deserialize<'de>"))]
pub struct RelationsResponse<D = serde_json::Value> {
	pub root: Option<AssetRef<D>>,
	#[serde(default, deserialize_with = "nullable_list")]
	pub ancestors: Vec<Relation<D>>,
	#[serde(default, deserialize_with = "nullable_list")]
	pub derivatives: Vec<Relation<D>>,
	#[serde(default, deserialize_with = "nullable_list")]
	pub related: Vec<Relation<D>>,
	#[serde(default, deserialize_with = "nullable_list")]
	pub disputed: Vec<Relation<D>>,
}

impl<D> RelationsResponse<D> {
	/// A response with the given root and no relations.
	pub fn new(root: AssetRef<D>) -> Self {
		Self {
			root: Some(root),
			ancestors: Vec::new(),
			derivatives: Vec::new(),
			related: Vec::new(),
			disputed: Vec::new(),
		}
	}
}

/// Build the graph for a relations response.
///
/// Nodes come out as `[root, ancestors.., derivatives.., related..]` and
/// links in the same group order:
///
/// - ancestor `a`: `a -> root`, [`LinkType::DerivesFrom`]
/// - derivative `d`: `root -> d`, [`LinkType::DerivedBy`]
/// - related `r`: `root -> r`, [`LinkType::Related`]
///
/// Fails with [`GraphError::InvalidInput`] when the root is missing or has an
/// empty id.
pub fn build_graph<D>(response: RelationsResponse<D>) -> Result<Graph<D, LinkData>> {
	let RelationsResponse {
		root,
		ancestors,
		derivatives,
		related,
		..
	} = response;

	let root = root
		.ok_or_else(|| GraphError::InvalidInput("relations response has no root asset".into()))?;
	if root.id.is_empty() {
		return Err(GraphError::InvalidInput("root asset has an empty id".into()));
	}

	let relation_count = ancestors.len() + derivatives.len() + related.len();
	let mut nodes = Vec::with_capacity(relation_count + 1);
	let mut links = Vec::with_capacity(relation_count);
	let root_id = root.id.clone();

	nodes.push(Node {
		id: root.id,
		title: root.title,
		image: root.image,
		kind: NodeType::Root,
		data: root.metadata,
		layout: Layout::default(),
	});

	for ancestor in ancestors {
		let (node, data) = ancestor.project(NodeType::Ancestor);
		links.push(Link::new(node.id.clone(), root_id.clone(), LinkType::DerivesFrom, data));
		nodes.push(node);
	}

	for derivative in derivatives {
		let (node, data) = derivative.project(NodeType::Derivative);
		links.push(Link::new(root_id.clone(), node.id.clone(), LinkType::DerivedBy, data));
		nodes.push(node);
	}

	for entry in related {
		let (node, data) = entry.project(NodeType::Related);
		links.push(Link::new(root_id.clone(), node.id.clone(), LinkType::Related, data));
		nodes.push(node);
	}

	Ok(Graph { nodes, links })
}
