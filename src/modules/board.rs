use super::{node::Coordinate, position::Position};
use crate::error::PathError;
use std::collections::HashSet;
use std::ops::Index;
use std::str::FromStr;

type Plane = Vec<Position>;

/// Immutable, rectangular occupancy grid stored row-major.
///
/// Every constructor validates its input, so a `Board` always has at least
/// one row and one column and exactly `rows * columns` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoardData", into = "BoardData")
)]
pub struct Board {
    rows: usize,
    columns: usize,
    plane: Box<Plane>,
}

impl Index<Coordinate> for Board {
    type Output = Position;

    fn index(&self, (row, column): Coordinate) -> &Self::Output {
        &self.plane[self.columns * row + column]
    }
}

impl Board {
    pub fn new(rows: usize, columns: usize, plane: Plane) -> Result<Board, PathError> {
        if rows == 0 || columns == 0 {
            return Err(PathError::EmptyGrid);
        }
        let expected = rows
            .checked_mul(columns)
            .ok_or(PathError::TooLarge { rows, columns })?;
        if plane.len() != expected {
            return Err(PathError::PlaneSize {
                expected,
                found: plane.len(),
            });
        }

        Ok(Board {
            rows,
            columns,
            plane: Box::new(plane),
        })
    }

    pub fn from_rows(grid: Vec<Vec<Position>>) -> Result<Board, PathError> {
        let rows = grid.len();
        let columns = grid.first().map_or(0, Vec::len);
        if rows == 0 || columns == 0 {
            return Err(PathError::EmptyGrid);
        }

        let mut plane = Vec::new();
        for (row, cells) in grid.into_iter().enumerate() {
            if cells.len() != columns {
                return Err(PathError::RaggedRow {
                    row,
                    expected: columns,
                    found: cells.len(),
                });
            }
            plane.extend(cells);
        }

        Board::new(rows, columns, plane)
    }

    /// Builds a board from `0` (open) / `1` (obstacle) flags.
    pub fn from_flags(grid: &[Vec<u8>]) -> Result<Board, PathError> {
        let mut rows = Vec::with_capacity(grid.len());
        for (row, flags) in grid.iter().enumerate() {
            let cells = flags
                .iter()
                .enumerate()
                .map(|(column, &value)| {
                    Position::from_flag(value).ok_or(PathError::InvalidCell { row, column, value })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }

        Board::from_rows(rows)
    }

    pub fn get_plane(&self) -> &Plane {
        &self.plane
    }

    pub fn get_dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn contains(&self, (row, column): Coordinate) -> bool {
        row < self.rows && column < self.columns
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<&Position> {
        if self.contains(coordinate) {
            Some(&self[coordinate])
        } else {
            None
        }
    }

    pub fn is_open(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate).is_some_and(Position::is_open)
    }

    pub(crate) fn check_bounds(&self, coordinate: Coordinate) -> Result<(), PathError> {
        if self.contains(coordinate) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                coordinate,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Draws the grid with `path` overlaid: `*` on the path, `1` for walls
    /// and `0` for open cells.
    pub fn render_path(&self, path: &[Coordinate]) -> String {
        let on_path: HashSet<Coordinate> = path.iter().copied().collect();

        (0..self.rows)
            .map(|row| {
                (0..self.columns)
                    .map(|column| {
                        if on_path.contains(&(row, column)) {
                            "*"
                        } else if self[(row, column)].is_open() {
                            "0"
                        } else {
                            "1"
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Parses one row per non-blank line. Cells are either whitespace separated
/// `0`/`1` tokens or unseparated `.`/`#` characters.
impl FromStr for Board {
    type Err = PathError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let tokens: Vec<String> = if line.contains(char::is_whitespace) {
                line.split_whitespace().map(str::to_owned).collect()
            } else {
                line.chars().map(String::from).collect()
            };

            let cells = tokens
                .into_iter()
                .map(|token| {
                    Position::from_token(&token).ok_or(PathError::Parse {
                        line: index + 1,
                        token,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }

        Board::from_rows(rows)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BoardData {
    rows: usize,
    columns: usize,
    plane: Plane,
}

#[cfg(feature = "serde")]
impl TryFrom<BoardData> for Board {
    type Error = PathError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        Board::new(data.rows, data.columns, data.plane)
    }
}

#[cfg(feature = "serde")]
impl From<Board> for BoardData {
    fn from(board: Board) -> Self {
        BoardData {
            rows: board.rows,
            columns: board.columns,
            plane: *board.plane,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn get_board() -> Board {
        Board::new(2, 2, vec![Position::Walled, Position::Open, Position::Open, Position::Open])
            .unwrap()
    }

    #[test]
    fn returns_dimensions() {
        let board = get_board();

        assert_eq!(board.get_dimensions(), (2, 2))
    }

    #[test]
    fn returns_plane() {
        let plane = vec![Position::Walled, Position::Open, Position::Open, Position::Open];

        let board = get_board();

        assert_eq!(*board.get_plane(), plane);
    }

    #[test]
    fn indexes_row_major() {
        let board = Board::from_flags(&[vec![0, 1, 0], vec![1, 0, 0]]).unwrap();

        assert_eq!(board[(0, 1)], Position::Walled);
        assert_eq!(board[(1, 0)], Position::Walled);
        assert_eq!(board[(1, 2)], Position::Open);
        assert!(board.is_open((0, 2)));
        assert!(!board.is_open((2, 0)));
        assert_eq!(board.get((0, 3)), None);
    }

    #[test]
    fn rejects_empty_grids() {
        assert!(matches!(Board::from_rows(vec![]), Err(PathError::EmptyGrid)));
        assert!(matches!(Board::from_rows(vec![vec![]]), Err(PathError::EmptyGrid)));
        assert!(matches!(Board::new(0, 3, vec![]), Err(PathError::EmptyGrid)));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Board::from_flags(&[vec![0, 0, 0], vec![0, 0]]).unwrap_err();

        assert!(matches!(
            err,
            PathError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn rejects_plane_size_mismatch() {
        let err = Board::new(2, 2, vec![Position::Open; 3]).unwrap_err();

        assert!(matches!(err, PathError::PlaneSize { expected: 4, found: 3 }));
    }

    #[test]
    fn rejects_dimensions_that_overflow() {
        let err = Board::new(usize::MAX, 2, vec![Position::Open]).unwrap_err();

        assert!(matches!(
            err,
            PathError::TooLarge {
                rows: usize::MAX,
                columns: 2
            }
        ));
    }

    #[test]
    fn rejects_unknown_flags() {
        let err = Board::from_flags(&[vec![0, 2]]).unwrap_err();

        assert!(matches!(
            err,
            PathError::InvalidCell {
                row: 0,
                column: 1,
                value: 2
            }
        ));
    }

    #[test]
    fn parses_both_text_forms() {
        let spaced: Board = "0 1\n0 0\n".parse().unwrap();
        let packed: Board = "\n.#\n..\n".parse().unwrap();

        assert_eq!(spaced, packed);
        assert_eq!(spaced[(0, 1)], Position::Walled);
    }

    #[test]
    fn reports_parse_errors_with_line() {
        let err = "0 0\n0 x".parse::<Board>().unwrap_err();

        match err {
            PathError::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn renders_path_overlay() {
        let board: Board = "0 1 0\n0 0 0".parse().unwrap();

        let drawing = board.render_path(&[(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)]);

        assert_eq!(drawing, "* 1 *\n* * *");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_validates() {
        let board = get_board();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);

        let broken = r#"{"rows":2,"columns":2,"plane":["Open"]}"#;
        assert!(serde_json::from_str::<Board>(broken).is_err());

        let huge = r#"{"rows":18446744073709551615,"columns":2,"plane":[]}"#;
        assert!(serde_json::from_str::<Board>(huge).is_err());
    }
}
