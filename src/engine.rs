use std::collections::VecDeque;

use crate::grid::{wrap_or_reject, Direction, GameMode, Pos};

/// Ordered body cells, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snek {
    segments: VecDeque<Pos>,
}

impl Snek {
    pub fn new(head: Pos) -> Self {
        Snek {
            segments: VecDeque::from([head]),
        }
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Pos>) -> Option<Self> {
        let segments: VecDeque<Pos> = segments.into_iter().collect();
        if segments.is_empty() {
            None
        } else {
            Some(Snek { segments })
        }
    }

    pub fn head(&self) -> Pos {
        self.segments[0]
    }

    pub fn neck(&self) -> Option<Pos> {
        self.segments.get(1).copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.segments.contains(&pos)
    }

    pub fn segments(&self) -> impl Iterator<Item = Pos> + '_ {
        self.segments.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Pos> {
        self.segments.iter().copied().collect()
    }

    // Tail stays put when growing
    fn slither(&self, new_head: Pos, grow: bool) -> Snek {
        let mut segments = self.segments.clone();
        segments.push_front(new_head);
        if !grow {
            segments.pop_back();
        }
        Snek { segments }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    /// Head landed on a cell the body occupied before the move.
    SelfBite,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    Moved { snek: Snek, ate_food: bool },
    Collided(Collision),
}

/// Advances the snek one cell.
///
/// The self-bite test runs against the body as it was before the move, tail included. The
/// tail cell is about to be vacated, but moving onto it still counts as a bite. Ghost mode
/// skips the self-bite test entirely.
pub fn step(snek: &Snek, direction: Direction, mode: GameMode, food: Pos) -> StepResult {
    let Some(new_head) = wrap_or_reject(snek.head().offset(direction), mode) else {
        return StepResult::Collided(Collision::Wall);
    };

    if mode.bites_itself() && snek.contains(new_head) {
        return StepResult::Collided(Collision::SelfBite);
    }

    let ate_food = new_head == food;
    StepResult::Moved {
        snek: snek.slither(new_head, ate_food),
        ate_food,
    }
}
