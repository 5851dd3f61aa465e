use super::board::Board;
use super::heuristic::manhattan;
use super::node::{Coordinate, SearchNode};
use super::path_builder::PathBuilder;
use crate::error::PathError;
use keyed_priority_queue::KeyedPriorityQueue;
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

// lowest f first, then lowest h
type Priority = Reverse<(usize, usize)>;

/// A shortest path, start and goal included. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PathData", into = "PathData")
)]
pub struct Path {
    cells: Vec<Coordinate>,
    expanded: usize,
}

impl Path {
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Coordinate> {
        self.cells
    }

    pub fn cost(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn expanded(&self) -> usize {
        self.expanded
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PathData {
    cells: Vec<Coordinate>,
    expanded: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<PathData> for Path {
    type Error = PathError;

    fn try_from(data: PathData) -> Result<Self, Self::Error> {
        if data.cells.is_empty() {
            return Err(PathError::MalformedPath("no cells"));
        }
        if data.cells.windows(2).any(|pair| manhattan(pair[0], pair[1]) != 1) {
            return Err(PathError::MalformedPath("cells are not unit steps apart"));
        }
        Ok(Path {
            cells: data.cells,
            expanded: data.expanded,
        })
    }
}

#[cfg(feature = "serde")]
impl From<Path> for PathData {
    fn from(path: Path) -> Self {
        PathData {
            cells: path.cells,
            expanded: path.expanded,
        }
    }
}

/// A* search over a borrowed [`Board`].
///
/// Every call to [`find_shortest_path`](PathFinder::find_shortest_path)
/// builds its own frontier, node pool and closed set, so one board can be
/// shared by any number of finders, on any number of threads.
pub struct PathFinder<'a> {
    board: &'a Board,
}

struct Search {
    path_builder: PathBuilder,
    heap: KeyedPriorityQueue<Coordinate, Priority>,
    // frontier position -> pool index of its best known node
    open: HashMap<Coordinate, usize>,
    seen: HashSet<Coordinate>,
}

impl Search {
    fn new() -> Search {
        Search {
            path_builder: PathBuilder::new(),
            // set to min-heap
            heap: KeyedPriorityQueue::new(),
            open: HashMap::new(),
            seen: HashSet::new(),
        }
    }

    // replaces any frontier entry for the same position
    fn push_open(&mut self, node: SearchNode) {
        let position = node.get_position();
        let index = self.path_builder.push(node);
        self.open.insert(position, index);
        self.heap
            .push(position, Reverse((node.get_f(), node.get_h())));
    }

    fn has_open_at_most(&self, position: Coordinate, g: usize) -> bool {
        self.open
            .get(&position)
            .is_some_and(|&index| self.path_builder.get(index).get_g() <= g)
    }
}

impl<'a> PathFinder<'a> {
    pub fn new(board: &'a Board) -> PathFinder<'a> {
        PathFinder { board }
    }

    /// Finds a shortest 4-directional path from `start` to `goal`.
    ///
    /// Returns `Ok(None)` when the goal is unreachable, which includes a
    /// walled start or goal. `start == goal` always yields the single-cell
    /// path. Coordinates outside the board are rejected.
    pub fn find_shortest_path(
        &self,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Option<Path>, PathError> {
        for coordinate in [start, goal] {
            if let Err(err) = self.board.check_bounds(coordinate) {
                debug!("[AStar] rejected input: {}", err);
                return Err(err);
            }
        }

        let (path, _) = self.search(start, goal);
        Ok(path)
    }

    // Runs the search on in-bounds endpoints. Also returns the number of
    // closed positions, whether or not the goal was reached.
    fn search(&self, start: Coordinate, goal: Coordinate) -> (Option<Path>, usize) {
        trace!("[AStar] find_shortest_path: start={:?} goal={:?}", start, goal);

        if start == goal {
            let path = Path {
                cells: vec![start],
                expanded: 0,
            };
            return (Some(path), 0);
        }

        // skip if starting position is walled
        if !self.board.is_open(start) {
            debug!("[AStar] no path: start {:?} is walled", start);
            return (None, 0);
        }

        let mut search = Search::new();
        search.push_open(SearchNode::new(start, None, 0, manhattan(start, goal)));

        while let Some((current_position, _)) = search.heap.pop() {
            let Some(current) = search.open.remove(&current_position) else {
                continue;
            };

            // already expanded through a cheaper path
            if !search.seen.insert(current_position) {
                continue;
            }

            if current_position == goal {
                let path = Path {
                    cells: search.path_builder.build(current),
                    expanded: search.seen.len(),
                };
                trace!(
                    "[AStar] found path: cost={} expanded={} pool={}",
                    path.cost(),
                    path.expanded,
                    search.path_builder.len()
                );
                return (Some(path), search.seen.len());
            }

            let current_g = search.path_builder.get(current).get_g();

            for next in self.get_neighbors(current_position) {
                if search.seen.contains(&next) {
                    continue;
                }

                let tentative_g = current_g + 1;
                if search.has_open_at_most(next, tentative_g) {
                    continue;
                }

                search.push_open(SearchNode::new(
                    next,
                    Some(current),
                    tentative_g,
                    manhattan(next, goal),
                ));
            }
        }

        debug!(
            "[AStar] no path from {:?} to {:?} after expanding {} nodes",
            start,
            goal,
            search.seen.len()
        );
        (None, search.seen.len())
    }

    fn push_if_open(&self, coordinate: Coordinate, list: &mut Vec<Coordinate>) {
        if self.board[coordinate].is_open() {
            list.push(coordinate)
        }
    }

    fn get_neighbors(&self, node: Coordinate) -> Vec<Coordinate> {
        let (board_rows, board_columns) = self.board.get_dimensions();
        let mut neighbors: Vec<Coordinate> = Vec::with_capacity(4);
        let (row, column) = node;

        // top
        if row > 0 {
            self.push_if_open((row - 1, column), &mut neighbors)
        }

        // right
        if column < board_columns - 1 {
            self.push_if_open((row, column + 1), &mut neighbors)
        }

        // bottom
        if row < board_rows - 1 {
            self.push_if_open((row + 1, column), &mut neighbors)
        }

        // left
        if column > 0 {
            self.push_if_open((row, column - 1), &mut neighbors)
        }

        neighbors
    }
}

pub fn find_path(
    board: &Board,
    start: Coordinate,
    goal: Coordinate,
) -> Result<Option<Path>, PathError> {
    PathFinder::new(board).find_shortest_path(start, goal)
}

pub fn path_exists(board: &Board, start: Coordinate, goal: Coordinate) -> Result<bool, PathError> {
    Ok(find_path(board, start, goal)?.is_some())
}
