//! Hover focus, highlight propagation and tooltip content.

mod interaction_model;
mod interaction_state;


pub use interaction_model::*;
pub use interaction_state::*;
