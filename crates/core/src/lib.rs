//! WealthSpectrum Core - portfolio hierarchy, sunburst layout and interaction.
//!
//! This crate turns a flat list of investment positions into a
//! category → style → instrument tree, lays that tree out as a radial
//! partition and tracks hover focus over the resulting arcs. Everything
//! here is synchronous and free of I/O; rendering is left to the caller.

pub mod constants;
pub mod errors;
pub mod hierarchy;
pub mod interaction;
pub mod positions;
pub mod sunburst;
pub mod utils;

pub use hierarchy::{build_hierarchy, HierarchyNode};
pub use interaction::{FocusState, InteractionState, PointerEvent, SunburstInteraction};
pub use positions::{AssetCategory, Position, PositionBook};
pub use sunburst::{compute_layout, LayoutConfig, LayoutNode, NodeId, SunburstLayout, SunburstView};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
