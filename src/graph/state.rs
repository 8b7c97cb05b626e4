//! View state for an explorer session.
//!
//! Holds the full graph, the current filter and the subgraph it yields,
//! together with hover and selection tracking. The renderer reads the
//! visible graph and asks the view for per-element colors.

use std::collections::HashSet;

use log::debug;

use super::filter::{FilterSpec, filter_graph};
use super::theme::{Color, Palette};
use super::types::{Graph, Link, LinkData, Node};

/// Display settings for a [`GraphView`].
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
	/// Alpha multiplier for elements outside the highlight while one is active.
	pub dim_alpha: f64,
}

impl Default for ViewConfig {
	fn default() -> Self {
		Self { dim_alpha: 0.2 }
	}
}

/// Tracks the hovered node and the neighbors highlighted with it.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	/// Currently hovered node (if any)
	hovered_node: Option<String>,
	/// Hovered node plus everything sharing a link with it
	target_set: HashSet<String>,
}

impl HighlightState {
	/// Update the hovered node and recompute the highlight set from the links of `graph`.
	pub fn set_hover<D, L>(&mut self, node: Option<&str>, graph: &Graph<D, L>) {
		if self.hovered_node.as_deref() == node {
			return;
		}

		self.hovered_node = node.map(str::to_string);
		self.target_set.clear();

		if let Some(id) = node {
			self.target_set.insert(id.to_string());
			self.target_set.extend(graph.neighbors(id).map(str::to_string));
		}
	}

	pub fn clear(&mut self) {
		self.hovered_node = None;
		self.target_set.clear();
	}

	pub fn hovered(&self) -> Option<&str> {
		self.hovered_node.as_deref()
	}

	pub fn is_highlighted(&self, id: &str) -> bool {
		self.target_set.contains(id)
	}

	/// A link is highlighted when it touches the hovered node.
	pub fn is_link_highlighted<L>(&self, link: &Link<L>) -> bool {
		self.hovered().is_some_and(|id| link.touches(id))
	}

	pub fn is_active(&self) -> bool {
		!self.target_set.is_empty()
	}
}

/// Full graph, filter and interaction state for one explorer session.
pub struct GraphView<D = serde_json::Value, L = LinkData> {
	full: Graph<D, L>,
	filter: FilterSpec,
	visible: Graph<D, L>,
	highlight: HighlightState,
	selected: Option<String>,
	palette: Palette,
	config: ViewConfig,
}

impl<D: Clone, L: Clone> GraphView<D, L> {
	/// View of `graph` under the default (admit everything) filter.
	pub fn new(graph: Graph<D, L>) -> Self {
		Self::with_filter(graph, FilterSpec::default())
	}

	pub fn with_filter(graph: Graph<D, L>, filter: FilterSpec) -> Self {
		let visible = filter_graph(&graph, &filter);
		Self {
			full: graph,
			filter,
			visible,
			highlight: HighlightState::default(),
			selected: None,
			palette: Palette::default(),
			config: ViewConfig::default(),
		}
	}

	pub fn with_palette(self, palette: Palette) -> Self {
		Self { palette, ..self }
	}

	pub fn with_config(self, config: ViewConfig) -> Self {
		Self { config, ..self }
	}

	pub fn full(&self) -> &Graph<D, L> {
		&self.full
	}

	pub fn visible(&self) -> &Graph<D, L> {
		&self.visible
	}

	pub fn filter(&self) -> &FilterSpec {
		&self.filter
	}

	pub fn highlight(&self) -> &HighlightState {
		&self.highlight
	}

	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Replace the filter and recompute the visible graph.
	///
	/// Hover and selection are dropped when their node is filtered out; a
	/// surviving hover is recomputed against the new visible links.
	pub fn set_filter(&mut self, filter: FilterSpec) {
		if self.filter == filter {
			return;
		}

		self.visible = filter_graph(&self.full, &filter);
		self.filter = filter;
		debug!(
			"ip-graph: filter kept {} of {} nodes, {} of {} links",
			self.visible.nodes.len(),
			self.full.nodes.len(),
			self.visible.links.len(),
			self.full.links.len()
		);

		let hovered = self.highlight.hovered().map(str::to_string);
		self.highlight.clear();
		self.set_hover(hovered.as_deref());

		if self
			.selected
			.as_deref()
			.is_some_and(|id| !self.visible.contains_node(id))
		{
			debug!("ip-graph: selection filtered out");
			self.selected = None;
		}
	}

	/// Hover a visible node, or clear the hover. Ids not in the visible graph clear it.
	pub fn set_hover(&mut self, id: Option<&str>) {
		let id = id.filter(|id| self.visible.contains_node(id));
		self.highlight.set_hover(id, &self.visible);
	}

	/// Select a visible node, or clear the selection. Returns whether a node is now selected.
	pub fn select(&mut self, id: Option<&str>) -> bool {
		self.selected = id
			.filter(|id| self.visible.contains_node(id))
			.map(str::to_string);
		self.selected.is_some()
	}

	pub fn selected_node(&self) -> Option<&Node<D>> {
		self.selected.as_deref().and_then(|id| self.visible.node(id))
	}

	pub fn node_color(&self, node: &Node<D>) -> Color {
		let highlighted = self.highlight.is_highlighted(&node.id);
		let color = self.palette.node_color(node.kind, highlighted);
		self.dim_unless(highlighted, color)
	}

	pub fn link_color(&self, link: &Link<L>) -> Color {
		let highlighted = self.highlight.is_link_highlighted(link);
		let color = self.palette.link_color(link.kind, highlighted);
		self.dim_unless(highlighted, color)
	}

	fn dim_unless(&self, highlighted: bool, color: Color) -> Color {
		if self.highlight.is_active() && !highlighted {
			color.with_alpha(color.a * self.config.dim_alpha)
		} else {
			color
		}
	}
}
