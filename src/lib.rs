//! ip-graph: derivative-relationship graphs for IP asset explorers.
//!
//! This crate builds the node/link graph behind an asset's derivative
//! explorer, filters it by node type, link type and title search, and maps
//! types to display colors. Fetching the relations response and rendering
//! the graph are left to the host application.

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
	AssetRef, Color, FilterSpec, Graph, GraphView, HighlightState, Layout, Link, LinkData,
	LinkEnd, LinkType, Node, NodeRef, NodeType, Palette, Relation, RelationsResponse,
	RelationshipKind, ViewConfig, apply_max_distance, build_graph, filter_graph, hop_distances,
	prune_by_distance,
};

use serde::de::DeserializeOwned;

/// Decode a relations response from JSON.
pub fn parse_relations<D: DeserializeOwned>(json: &str) -> Result<RelationsResponse<D>> {
	Ok(serde_json::from_str(json)?)
}

/// Decode a relations response and build its graph.
pub fn graph_from_json<D: DeserializeOwned>(json: &str) -> Result<Graph<D, LinkData>> {
	build_graph(parse_relations(json)?)
}

#[cfg(target_arch = "wasm32")]
pub use dom::{init_logging, load_relations};

#[cfg(target_arch = "wasm32")]
mod dom {
	use log::{Level, info, warn};
	use serde::de::DeserializeOwned;
	use wasm_bindgen::JsCast;
	use web_sys::{HtmlScriptElement, Window};

	use crate::RelationsResponse;

	/// Initialize logging and panic hooks for the WASM target.
	pub fn init_logging() {
		let _ = console_log::init_with_level(Level::Debug);
		console_error_panic_hook::set_once();
		info!("ip-graph: logging initialized");
	}

	/// Load a relations response from a script element with id="relations-data".
	/// Expected format: JSON with { root: {...}, ancestors: [...], derivatives: [...],
	/// related: [...] }
	pub fn load_relations<D: DeserializeOwned>() -> Option<RelationsResponse<D>> {
		let window: Window = web_sys::window()?;
		let document = window.document()?;
		let element = document.get_element_by_id("relations-data")?;
		let script: HtmlScriptElement = element.dyn_into().ok()?;
		let json_text = script.text().ok()?;

		match crate::parse_relations::<D>(&json_text) {
			Ok(response) => {
				info!(
					"ip-graph: loaded {} ancestors, {} derivatives, {} related",
					response.ancestors.len(),
					response.derivatives.len(),
					response.related.len()
				);
				Some(response)
			}
			Err(e) => {
				warn!("ip-graph: failed to parse relations data: {}", e);
				None
			}
		}
	}
}
