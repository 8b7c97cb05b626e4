//! Property tests for the builder and filter engine over generated responses.

use std::collections::BTreeSet;

use proptest::prelude::*;

use ip_graph::{
	AssetRef, FilterSpec, Graph, LinkType, NodeType, Relation, RelationsResponse, build_graph,
	filter_graph,
};

// ============================================================================
// Strategies
// ============================================================================

/// Small id pool so duplicates across groups show up regularly.
fn relation() -> impl Strategy<Value = Relation<()>> {
	(
		"[a-f]{1,2}",
		prop_oneof![Just("Remix"), Just("Cover"), Just("moon"), Just("")],
		prop_oneof![Just("remix"), Just("sequel"), Just("adaptation"), Just("fan-art")],
	)
		.prop_map(|(id, title, rel)| Relation::new(id, title, rel))
}

fn response() -> impl Strategy<Value = RelationsResponse<()>> {
	(
		prop::collection::vec(relation(), 0..6),
		prop::collection::vec(relation(), 0..6),
		prop::collection::vec(relation(), 0..6),
	)
		.prop_map(|(ancestors, derivatives, related)| RelationsResponse {
			root: Some(AssetRef {
				id: "root".into(),
				title: "Moonrise".into(),
				image: None,
				metadata: None,
			}),
			ancestors,
			derivatives,
			related,
			disputed: Vec::new(),
		})
}

fn node_types() -> impl Strategy<Value = BTreeSet<NodeType>> {
	let kinds = prop::sample::select(NodeType::ALL.to_vec());
	prop::collection::btree_set(kinds, 0..=NodeType::ALL.len())
}

fn link_types() -> impl Strategy<Value = BTreeSet<LinkType>> {
	let kinds = prop::sample::select(LinkType::ALL.to_vec());
	prop::collection::btree_set(kinds, 0..=LinkType::ALL.len())
}

fn filter_spec() -> impl Strategy<Value = FilterSpec> {
	(
		node_types(),
		link_types(),
		prop_oneof![Just(""), Just("moon"), Just("REM"), Just("xyz")],
	)
		.prop_map(|(nodes, links, search)| {
			FilterSpec::none()
				.with_node_types(nodes)
				.with_link_types(links)
				.with_search(search)
		})
}

/// True when `sub` appears in `full` in the same relative order.
fn is_subsequence<T: PartialEq>(sub: &[T], full: &[T]) -> bool {
	let mut rest = full.iter();
	sub.iter().all(|item| rest.any(|candidate| candidate == item))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
	#[test]
	fn node_and_link_counts(response in response()) {
		let a = response.ancestors.len();
		let d = response.derivatives.len();
		let r = response.related.len();
		let graph = build_graph(response).unwrap();

		prop_assert_eq!(graph.nodes.len(), 1 + a + d + r);
		prop_assert_eq!(graph.links.len(), a + d + r);
		prop_assert!(graph.is_consistent());

		for (i, link) in graph.links.iter().enumerate() {
			let other = &graph.nodes[i + 1].id;
			let (expected_kind, src, tgt) = if i < a {
				(LinkType::DerivesFrom, other.as_str(), "root")
			} else if i < a + d {
				(LinkType::DerivedBy, "root", other.as_str())
			} else {
				(LinkType::Related, "root", other.as_str())
			};
			prop_assert_eq!(link.kind, expected_kind);
			prop_assert_eq!(link.source.id(), src);
			prop_assert_eq!(link.target.id(), tgt);
		}
	}

	#[test]
	fn filter_is_idempotent(response in response(), spec in filter_spec()) {
		let graph = build_graph(response).unwrap();
		let once = filter_graph(&graph, &spec);
		let twice = filter_graph(&once, &spec);
		prop_assert_eq!(once, twice);
	}

	#[test]
	fn filter_keeps_referential_integrity_and_order(response in response(), spec in filter_spec()) {
		let graph = build_graph(response).unwrap();
		let visible = filter_graph(&graph, &spec);

		prop_assert!(visible.is_consistent());
		prop_assert!(is_subsequence(&visible.nodes, &graph.nodes));
		prop_assert!(is_subsequence(&visible.links, &graph.links));
	}

	#[test]
	fn widening_node_types_never_removes_nodes(
		response in response(),
		spec in filter_spec(),
		extra in node_types(),
	) {
		let graph: Graph<()> = build_graph(response).unwrap();
		let narrow = filter_graph(&graph, &spec);

		let wider_types = spec.node_types.union(&extra).copied();
		let wide = filter_graph(&graph, &spec.clone().with_node_types(wider_types));

		prop_assert!(is_subsequence(&narrow.nodes, &wide.nodes));
	}
}
