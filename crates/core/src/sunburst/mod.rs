//! Sunburst partition layout: geometry, colors and labels for every node.

mod color;
mod labels;
mod layout_engine;
mod layout_model;
mod view;


pub use color::*;
pub use labels::{truncate_label, LabelLayout};
pub use layout_engine::*;
pub use layout_model::*;
pub use view::SunburstView;
