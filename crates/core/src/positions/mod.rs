//! Positions: the flat input records of the sunburst and their editing model.

mod position_book;
mod positions_model;
mod sample;


pub use position_book::*;
pub use positions_model::*;
pub use sample::sample_portfolio;
