use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a world instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldId(pub Uuid);

impl WorldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WorldId {
    fn default() -> Self {
        Self::new()
    }
}

/// A cell coordinate in a grid world.
///
/// The y axis grows downward: row 0 is the top row, so moving `North`
/// decreases y. This matches how exercises address cells when placing walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Heading of an agent in a grid world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The (dx, dy) of one step along this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    pub fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The cell edge an agent crosses when stepping along this heading.
    pub fn exit_edge(self) -> Edge {
        match self {
            Self::North => Edge::Top,
            Self::South => Edge::Bottom,
            Self::East => Edge::Right,
            Self::West => Edge::Left,
        }
    }
}

/// One of the four edges of a grid cell. A wall on an edge blocks movement
/// across that cell boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// The same physical boundary seen from the adjacent cell.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Coordinates of the cell on the other side of this edge of (x, y).
    /// May lie outside the grid; callers bounds-check.
    pub fn neighbor(self, x: i32, y: i32) -> (i32, i32) {
        match self {
            Self::Top => (x, y - 1),
            Self::Bottom => (x, y + 1),
            Self::Left => (x - 1, y),
            Self::Right => (x + 1, y),
        }
    }
}

/// An RGB color for agent rendering hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_id_uniqueness() {
        let a = WorldId::new();
        let b = WorldId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn four_left_turns_return_home() {
        let mut d = Direction::North;
        for _ in 0..4 {
            d = d.turn_left();
        }
        assert_eq!(d, Direction::North);
    }

    #[test]
    fn left_then_right_cancels() {
        for d in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            assert_eq!(d.turn_left().turn_right(), d);
        }
    }

    #[test]
    fn north_decreases_y() {
        assert_eq!(Direction::North.delta(), (0, -1));
        assert_eq!(Direction::South.delta(), (0, 1));
    }

    #[test]
    fn edge_opposite_is_involution() {
        for e in [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right] {
            assert_eq!(e.opposite().opposite(), e);
        }
    }

    #[test]
    fn edge_neighbor_matches_exit_edge() {
        // Stepping north crosses the top edge and lands on the top neighbor.
        let (dx, dy) = Direction::North.delta();
        assert_eq!(
            Direction::North.exit_edge().neighbor(3, 3),
            (3 + dx, 3 + dy)
        );
    }

    #[test]
    fn color_constants() {
        assert_eq!(Color::BLACK, Color::new(0, 0, 0));
        assert_eq!(Color::RED.r, 255);
        assert_eq!(Color::RED.g, 0);
    }
}
