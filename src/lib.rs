//! A* shortest-path search on 4-connected occupancy grids.
//!
//! ```
//! use gridstar::{find_path, Board};
//!
//! let board: Board = "0 0 0\n1 1 0\n0 0 0".parse().unwrap();
//! let path = find_path(&board, (0, 0), (2, 0)).unwrap().unwrap();
//! assert_eq!(path.cost(), 6);
//! ```

pub mod error;
pub mod modules;

pub use error::PathError;
pub use modules::board::Board;
pub use modules::heuristic::manhattan;
pub use modules::node::{Coordinate, SearchNode};
pub use modules::path_finder::{find_path, path_exists, Path, PathFinder};
pub use modules::position::Position;
