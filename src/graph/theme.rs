//! Visual theming for relationship graphs.
//!
//! Maps node and link types to display colors. A highlighted element always
//! takes the palette's highlight color, and anything the palette has no entry
//! for falls back to a neutral color instead of failing.

use super::types::{LinkType, NodeType};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// One color per known node type.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeColors {
	pub root: Color,
	pub ancestor: Color,
	pub derivative: Color,
	pub sibling: Color,
	pub related: Color,
	pub collaborator: Color,
	pub disputed: Color,
}

/// One color per known link type.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkColors {
	pub derives_from: Color,
	pub derived_by: Color,
	pub common_ancestor: Color,
	pub related: Color,
}

/// Complete type-to-color table.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	pub name: &'static str,
	pub nodes: NodeColors,
	pub links: LinkColors,
	/// Overrides the type color of highlighted nodes and links.
	pub highlight: Color,
	/// Used for types without an entry.
	pub fallback: Color,
}

impl Palette {
	/// Saturated colors on a dark background (default)
	pub fn default_palette() -> Self {
		Self {
			name: "default",
			nodes: NodeColors {
				root: Color::rgb(236, 112, 99),         // Coral
				ancestor: Color::rgb(93, 173, 226),     // Sky blue
				derivative: Color::rgb(88, 214, 141),   // Emerald
				sibling: Color::rgb(175, 122, 197),     // Amethyst
				related: Color::rgb(245, 176, 65),      // Amber
				collaborator: Color::rgb(72, 201, 176), // Turquoise
				disputed: Color::rgb(231, 76, 60),      // Alizarin
			},
			links: LinkColors {
				derives_from: Color::rgba(93, 173, 226, 0.6),
				derived_by: Color::rgba(88, 214, 141, 0.6),
				common_ancestor: Color::rgba(175, 122, 197, 0.6),
				related: Color::rgba(245, 176, 65, 0.6),
			},
			highlight: Color::rgb(255, 215, 0),
			fallback: Color::rgb(149, 165, 166),
		}
	}

	/// Slate blues and teals, links derived from their endpoint colors
	pub fn muted() -> Self {
		let nodes = NodeColors {
			root: Color::rgb(180, 120, 100),         // Terracotta
			ancestor: Color::rgb(94, 129, 172),      // Steel blue
			derivative: Color::rgb(100, 148, 160),   // Teal gray
			sibling: Color::rgb(130, 120, 150),      // Wisteria
			related: Color::rgb(185, 145, 110),      // Amber
			collaborator: Color::rgb(119, 158, 165), // Desaturated cyan
			disputed: Color::rgb(165, 115, 90),      // Rust
		};
		let links = LinkColors {
			derives_from: nodes.ancestor.lighten(0.2).with_alpha(0.5),
			derived_by: nodes.derivative.lighten(0.2).with_alpha(0.5),
			common_ancestor: nodes.sibling.lighten(0.2).with_alpha(0.5),
			related: nodes.related.lighten(0.2).with_alpha(0.5),
		};
		Self {
			name: "muted",
			nodes,
			links,
			highlight: Color::rgb(235, 235, 210),
			fallback: Color::rgb(143, 163, 180),
		}
	}

	pub fn node_color(&self, kind: NodeType, highlighted: bool) -> Color {
		if highlighted {
			return self.highlight;
		}
		match kind {
			NodeType::Root => self.nodes.root,
			NodeType::Ancestor => self.nodes.ancestor,
			NodeType::Derivative => self.nodes.derivative,
			NodeType::Sibling => self.nodes.sibling,
			NodeType::Related => self.nodes.related,
			NodeType::Collaborator => self.nodes.collaborator,
			NodeType::Disputed => self.nodes.disputed,
			NodeType::Unknown => self.fallback,
		}
	}

	pub fn link_color(&self, kind: LinkType, highlighted: bool) -> Color {
		if highlighted {
			return self.highlight;
		}
		match kind {
			LinkType::DerivesFrom => self.links.derives_from,
			LinkType::DerivedBy => self.links.derived_by,
			LinkType::CommonAncestor => self.links.common_ancestor,
			LinkType::Related => self.links.related,
			LinkType::Unknown => self.fallback,
		}
	}

	/// Color for a raw node-type label. Unrecognized labels get the fallback.
	pub fn node_color_for_label(&self, label: &str, highlighted: bool) -> Color {
		self.node_color(NodeType::from_label(label), highlighted)
	}

	/// Color for a raw link-type label. Unrecognized labels get the fallback.
	pub fn link_color_for_label(&self, label: &str, highlighted: bool) -> Color {
		self.link_color(LinkType::from_label(label), highlighted)
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::default_palette()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn highlight_overrides_type_color() {
		let palette = Palette::default();
		for kind in NodeType::ALL {
			assert_eq!(palette.node_color(kind, true), palette.highlight);
		}
		for kind in LinkType::ALL {
			assert_eq!(palette.link_color(kind, true), palette.highlight);
		}
		assert_eq!(palette.node_color(NodeType::Unknown, true), palette.highlight);
	}

	#[test]
	fn unrecognized_labels_use_fallback() {
		let palette = Palette::muted();
		assert_eq!(palette.node_color_for_label("wizard", false), palette.fallback);
		assert_eq!(palette.link_color_for_label("licensedTo", false), palette.fallback);
		assert_eq!(palette.node_color_for_label("Root", false), palette.nodes.root);
		assert_eq!(palette.link_color_for_label("derivesFrom", false), palette.links.derives_from);
	}

	#[test]
	fn css_output() {
		assert_eq!(Color::rgb(236, 112, 99).to_css(), "#ec7063");
		assert_eq!(Color::rgba(10, 20, 30, 0.5).to_css(), "rgba(10, 20, 30, 0.5)");
		assert_eq!(Color::rgb(0, 0, 0).lighten(1.0).to_css(), "#ffffff");
	}
}
