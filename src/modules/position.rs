/// A single grid cell. Entering an open cell costs one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    Open,
    Walled,
}

impl Position {
    pub fn is_open(&self) -> bool {
        matches!(self, Position::Open)
    }

    /// Maps the `0` (open) / `1` (obstacle) flag encoding.
    pub fn from_flag(flag: u8) -> Option<Position> {
        match flag {
            0 => Some(Position::Open),
            1 => Some(Position::Walled),
            _ => None,
        }
    }

    pub(crate) fn from_token(token: &str) -> Option<Position> {
        match token {
            "0" | "." => Some(Position::Open),
            "1" | "#" => Some(Position::Walled),
            _ => None,
        }
    }
}
