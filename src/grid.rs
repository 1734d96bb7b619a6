use std::fmt;

pub use crate::config::GRID_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Walls and own body are both fatal.
    #[default]
    Classic,
    /// Walls are fatal, the snek passes through itself.
    Ghost,
    /// Edges wrap around, own body is fatal.
    Portal,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Classic, GameMode::Ghost, GameMode::Portal];

    /// Key used in the persisted high score map.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Ghost => "ghost",
            GameMode::Portal => "portal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::Ghost => "Ghost",
            GameMode::Portal => "Portal",
        }
    }

    pub fn wraps_edges(&self) -> bool {
        matches!(self, GameMode::Portal)
    }

    pub fn bites_itself(&self) -> bool {
        !matches!(self, GameMode::Ghost)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Only the four unit vectors name a direction; anything else is `None`.
    pub fn from_delta(delta: PosDelta) -> Option<Direction> {
        match (delta.x, delta.y) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => PosDelta { x: 0, y: -1 },
            Direction::Down => PosDelta { x: 0, y: 1 },
            Direction::Left => PosDelta { x: -1, y: 0 },
            Direction::Right => PosDelta { x: 1, y: 0 },
        }
    }
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Pos { x, y }
    }

    pub fn offset(&self, delta: impl Into<PosDelta>) -> Pos {
        let delta = delta.into();
        Pos {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }

    pub fn wrapped(&self) -> Pos {
        Pos {
            x: self.x.rem_euclid(GRID_SIZE),
            y: self.y.rem_euclid(GRID_SIZE),
        }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

/// Brings a freshly computed head back onto the board.
///
/// Portal wraps each axis independently and always succeeds. Classic and ghost never wrap:
/// a coordinate off the board comes back as `None`, which the engine treats as hitting a wall.
pub fn wrap_or_reject(pos: Pos, mode: GameMode) -> Option<Pos> {
    if mode.wraps_edges() {
        Some(pos.wrapped())
    } else if pos.in_bounds() {
        Some(pos)
    } else {
        None
    }
}
