//! Derivative-relationship graph model.
//!
//! Turns a relations response into a node/link graph and narrows it to what
//! the user asked to see:
//! - [`build_graph`] projects the root and its ancestor, derivative and
//!   related assets into nodes and typed links
//! - [`filter_graph`] keeps nodes by type and title search, then the links
//!   whose type is allowed and whose endpoints both survived
//! - [`Palette`] maps node and link types to display colors
//! - [`GraphView`] keeps filter, hover and selection state for a session
//!
//! # Example
//!
//! ```
//! use ip_graph::{AssetRef, FilterSpec, LinkType, NodeType, Relation, RelationsResponse};
//! use ip_graph::{build_graph, filter_graph};
//!
//! let mut response = RelationsResponse::<()>::new(AssetRef {
//!     id: "R".into(),
//!     title: "Root".into(),
//!     image: None,
//!     metadata: None,
//! });
//! response.ancestors.push(Relation::new("A", "Ancestor", "remix"));
//! response.derivatives.push(Relation::new("D", "Derivative", "remix"));
//!
//! let graph = build_graph(response)?;
//! let spec = FilterSpec::default()
//!     .with_node_types([NodeType::Root, NodeType::Ancestor])
//!     .with_link_types([LinkType::DerivesFrom]);
//! let visible = filter_graph(&graph, &spec);
//!
//! assert_eq!(visible.nodes.len(), 2);
//! assert_eq!(visible.links.len(), 1);
//! # Ok::<(), ip_graph::GraphError>(())
//! ```

mod builder;
mod de;
pub mod distance;
mod filter;
mod state;
pub mod theme;
mod types;

pub use builder::{AssetRef, Relation, RelationsResponse, build_graph};
pub use distance::{apply_max_distance, hop_distances, prune_by_distance};
pub use filter::{FilterSpec, filter_graph};
pub use state::{GraphView, HighlightState, ViewConfig};
pub use theme::{Color, Palette};
pub use types::{
	Graph, Layout, Link, LinkData, LinkEnd, LinkType, Node, NodeRef, NodeType, RelationshipKind,
};
