pub mod board;
pub mod heuristic;
pub mod node;
pub mod path_builder;
pub mod path_finder;
pub mod position;
