//! Heading domain model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the four headings a spiral walk can take.
///
/// Externally each heading is a single-character token (`U`, `D`, `L`, `R`),
/// which is also how it serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl Direction {
    /// All headings in clockwise order, starting from the initial heading.
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// The single-character protocol token.
    pub fn token(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Parse a protocol token. Only the four uppercase letters are accepted.
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// The heading after a 90 degree clockwise turn.
    pub fn clockwise(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }

    /// `(row, col)` offset of one step in this heading. Rows grow downwards.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::from_token(c),
            _ => None,
        }
        .ok_or_else(|| Error::InvalidDirection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for dir in Direction::CLOCKWISE {
            assert_eq!(Direction::from_token(dir.token()), Some(dir));
            assert_eq!(dir.to_string(), dir.token().to_string());
        }
        assert_eq!(Direction::from_token('r'), None);
        assert_eq!(Direction::from_token('X'), None);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("L".parse::<Direction>().unwrap(), Direction::Left);
        for dir in Direction::CLOCKWISE {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
        for bad in ["r", "RR", "", " R", "Up"] {
            assert!(matches!(
                bad.parse::<Direction>(),
                Err(Error::InvalidDirection(ref token)) if token == bad
            ));
        }
    }

    #[test]
    fn test_clockwise_cycle() {
        assert_eq!(Direction::Right.clockwise(), Direction::Down);
        assert_eq!(Direction::Up.clockwise(), Direction::Right);

        let mut dir = Direction::Left;
        for _ in 0..4 {
            dir = dir.clockwise();
        }
        assert_eq!(dir, Direction::Left);
    }

    #[test]
    fn test_delta() {
        assert_eq!(Direction::Right.delta(), (0, 1));
        assert_eq!(Direction::Up.delta(), (-1, 0));
    }

    #[test]
    fn test_serde_uses_tokens() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"U\"");
        let dir: Direction = serde_json::from_str("\"L\"").unwrap();
        assert_eq!(dir, Direction::Left);
    }
}
