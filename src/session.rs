use log::{debug, info, warn};
use rand::Rng;

use crate::config::{INITIAL_DIRECTION, INITIAL_FOOD, INITIAL_SNAKE};
use crate::engine::{self, Collision, Snek, StepResult};
use crate::food;
use crate::grid::{Direction, GameMode, Pos, PosDelta};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickReport {
    Moved {
        ate_food: bool,
    },
    /// The game just ended. Reported once; later ticks are [`TickReport::Idle`].
    GameOver {
        mode: GameMode,
        final_score: u32,
        collision: Collision,
    },
    Idle,
}

/// Read-only copy of everything a frame needs to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub snake: Vec<Pos>,
    pub food: Pos,
    pub score: u32,
    pub mode: GameMode,
    pub over: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    snek: Snek,
    direction: Direction,
    food: Pos,
    score: u32,
    mode: GameMode,
    status: Status,
}

impl Session {
    pub fn new(mode: GameMode) -> Self {
        Session {
            snek: Snek::new(INITIAL_SNAKE[0]),
            direction: INITIAL_DIRECTION,
            food: INITIAL_FOOD,
            score: 0,
            mode,
            status: Status::Running,
        }
    }

    pub fn from_parts(snek: Snek, direction: Direction, food: Pos, mode: GameMode) -> Self {
        Session {
            snek,
            direction,
            food,
            score: 0,
            mode,
            status: Status::Running,
        }
    }

    pub fn reset(&mut self, mode: GameMode) {
        info!("Starting {} game", mode);
        *self = Session::new(mode);
    }

    /// Queues a turn for the next tick; the last accepted request before a tick wins.
    ///
    /// Rejects a turn that would put the head straight onto the neck. Returns whether the
    /// request was accepted.
    pub fn set_desired_direction(&mut self, direction: Direction) -> bool {
        if let Some(neck) = self.snek.neck() {
            if self.snek.head().offset(direction) == neck {
                return false;
            }
        }
        self.direction = direction;
        true
    }

    /// Like [`Session::set_desired_direction`], but for raw input. Anything that is not a
    /// unit vector is dropped.
    pub fn set_desired_delta(&mut self, delta: PosDelta) -> bool {
        match Direction::from_delta(delta) {
            Some(direction) => self.set_desired_direction(direction),
            None => false,
        }
    }

    pub fn tick(&mut self, rng: &mut impl Rng) -> TickReport {
        if self.status == Status::Over {
            return TickReport::Idle;
        }

        match engine::step(&self.snek, self.direction, self.mode, self.food) {
            StepResult::Collided(collision) => {
                self.status = Status::Over;
                info!(
                    "Game over in {} mode: {:?} with score {}",
                    self.mode, collision, self.score
                );
                TickReport::GameOver {
                    mode: self.mode,
                    final_score: self.score,
                    collision,
                }
            }
            StepResult::Moved { snek, ate_food } => {
                self.snek = snek;
                if ate_food {
                    self.score += 1;
                    match food::place(&self.snek.to_vec(), rng) {
                        Some(pos) => self.food = pos,
                        None => warn!("No free cell left for food"),
                    }
                    debug!("Ate food, score {}, next food at {:?}", self.score, self.food);
                }
                TickReport::Moved { ate_food }
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snek.to_vec(),
            food: self.food,
            score: self.score,
            mode: self.mode,
            over: self.is_over(),
        }
    }

    pub fn snek(&self) -> &Snek {
        &self.snek
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Pos {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn snek(cells: &[(i32, i32)]) -> Snek {
        Snek::from_segments(cells.iter().map(|&(x, y)| Pos::new(x, y))).unwrap()
    }

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new(GameMode::Ghost);
        let snap = session.snapshot();

        assert_eq!(snap.snake, vec![Pos::new(10, 10)]);
        assert_eq!(snap.food, Pos::new(15, 15));
        assert_eq!(snap.score, 0);
        assert_eq!(snap.mode, GameMode::Ghost);
        assert!(!snap.over);
        assert_eq!(session.direction(), Direction::Right);
        assert_eq!(session.status(), Status::Running);
    }

    #[test]
    fn test_plain_tick_moves_right() {
        let mut session = Session::new(GameMode::Classic);
        assert_eq!(session.tick(&mut rng()), TickReport::Moved { ate_food: false });
        assert_eq!(session.snek().to_vec(), vec![Pos::new(11, 10)]);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_eating_scores_and_respawns_food() {
        let mut session = Session::from_parts(
            snek(&[(10, 10)]),
            Direction::Right,
            Pos::new(11, 10),
            GameMode::Classic,
        );

        assert_eq!(session.tick(&mut rng()), TickReport::Moved { ate_food: true });
        assert_eq!(session.score(), 1);
        assert_eq!(session.snek().len(), 2);
        assert!(!session.snek().contains(session.food()));
        assert!(session.food().in_bounds());
    }

    #[test]
    fn test_game_over_is_reported_once() {
        let mut session = Session::from_parts(
            snek(&[(19, 10)]),
            Direction::Right,
            Pos::new(0, 0),
            GameMode::Classic,
        );
        let mut rng = rng();

        assert_eq!(
            session.tick(&mut rng),
            TickReport::GameOver {
                mode: GameMode::Classic,
                final_score: 0,
                collision: Collision::Wall,
            }
        );
        assert!(session.is_over());

        let frozen = session.snapshot();
        assert_eq!(session.tick(&mut rng), TickReport::Idle);
        assert_eq!(session.tick(&mut rng), TickReport::Idle);
        assert_eq!(session.snapshot(), frozen);
    }

    #[test]
    fn test_change_direction() {
        let mut session = Session::from_parts(
            snek(&[(10, 10), (9, 10)]),
            Direction::Right,
            Pos::new(0, 0),
            GameMode::Classic,
        );

        // Reversing onto the neck is refused
        assert!(!session.set_desired_direction(Direction::Left));
        assert_eq!(session.direction(), Direction::Right);

        assert!(session.set_desired_direction(Direction::Up));
        assert_eq!(session.direction(), Direction::Up);

        // Still measured against the neck, not the last accepted direction
        assert!(!session.set_desired_direction(Direction::Left));
        assert!(session.set_desired_direction(Direction::Down));
        assert_eq!(session.direction(), Direction::Down);
    }

    #[test]
    fn test_single_segment_can_reverse() {
        let mut session = Session::new(GameMode::Classic);
        assert!(session.set_desired_direction(Direction::Left));
        assert_eq!(session.direction(), Direction::Left);
    }

    #[test]
    fn test_invalid_delta_is_ignored() {
        let mut session = Session::new(GameMode::Classic);
        assert!(!session.set_desired_delta(PosDelta { x: 0, y: 0 }));
        assert!(!session.set_desired_delta(PosDelta { x: 1, y: 1 }));
        assert_eq!(session.direction(), Direction::Right);

        assert!(session.set_desired_delta(PosDelta { x: 0, y: 1 }));
        assert_eq!(session.direction(), Direction::Down);
    }

    #[test]
    fn test_reset_restarts_in_new_mode() {
        let mut session = Session::from_parts(
            snek(&[(19, 10)]),
            Direction::Right,
            Pos::new(0, 0),
            GameMode::Classic,
        );
        session.tick(&mut rng());
        assert!(session.is_over());

        session.reset(GameMode::Portal);
        assert_eq!(session, Session::new(GameMode::Portal));
        assert_eq!(session.status(), Status::Running);
    }

    #[test]
    fn test_full_board_keeps_old_food() {
        // Ghost snek that already covers every cell but the food square
        let food = Pos::new(0, 0);
        let mut cells: Vec<Pos> = Vec::new();
        cells.push(Pos::new(1, 0));
        for y in 0..crate::grid::GRID_SIZE {
            for x in 0..crate::grid::GRID_SIZE {
                let pos = Pos::new(x, y);
                if pos != food {
                    cells.push(pos);
                }
            }
        }
        let mut session = Session::from_parts(
            Snek::from_segments(cells).unwrap(),
            Direction::Left,
            food,
            GameMode::Ghost,
        );

        assert_eq!(session.tick(&mut rng()), TickReport::Moved { ate_food: true });
        assert_eq!(session.score(), 1);
        assert_eq!(session.food(), food);
    }
}
