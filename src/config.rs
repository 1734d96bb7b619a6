use std::path::PathBuf;
use std::time::Duration;

use crate::grid::{Direction, Pos};

/// Cells per side of the square board.
pub const GRID_SIZE: i32 = 20;
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub const INITIAL_SNAKE: [Pos; 1] = [Pos::new(10, 10)];
pub const INITIAL_DIRECTION: Direction = Direction::Right;
pub const INITIAL_FOOD: Pos = Pos::new(15, 15);

/// Store key the high score map lives under.
pub const HIGH_SCORE_KEY: &str = ".snekmodes_high_scores";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub tick_interval: Duration,
    pub log_file: PathBuf,
    pub data_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval: TICK_INTERVAL,
            log_file: PathBuf::from("snekmodes.log"),
            data_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_on_board() {
        assert!(INITIAL_SNAKE.iter().all(Pos::in_bounds));
        assert!(INITIAL_FOOD.in_bounds());
        assert!(!INITIAL_SNAKE.contains(&INITIAL_FOOD));
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.tick_interval, Duration::from_millis(100));
        assert_eq!(settings.log_file, PathBuf::from("snekmodes.log"));
    }
}
