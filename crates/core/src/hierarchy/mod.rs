//! Hierarchy builder: flat positions to a category → style → instrument tree.

mod hierarchy_builder;
mod hierarchy_model;

#[cfg(test)]
mod hierarchy_builder_tests;

pub use hierarchy_builder::*;
pub use hierarchy_model::*;
