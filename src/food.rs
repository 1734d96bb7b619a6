use rand::Rng;

use crate::grid::{Pos, GRID_SIZE};

const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Picks a uniformly random free cell for the next morsel.
///
/// Keeps sampling until a cell outside `occupied` turns up. Returns `None` only when every
/// cell of the board is taken, since sampling could never finish then.
pub fn place(occupied: &[Pos], rng: &mut impl Rng) -> Option<Pos> {
    place_with(occupied, || Pos {
        x: rng.gen_range(0..GRID_SIZE),
        y: rng.gen_range(0..GRID_SIZE),
    })
}

/// Same as [`place`] but draws candidates from `sample`.
pub fn place_with(occupied: &[Pos], mut sample: impl FnMut() -> Pos) -> Option<Pos> {
    if board_is_full(occupied) {
        return None;
    }

    loop {
        let pos = sample();
        if !occupied.contains(&pos) {
            return Some(pos);
        }
    }
}

fn board_is_full(occupied: &[Pos]) -> bool {
    if occupied.len() < CELL_COUNT {
        return false;
    }
    let mut seen = vec![false; CELL_COUNT];
    for pos in occupied.iter().filter(|p| p.in_bounds()) {
        seen[(pos.y * GRID_SIZE + pos.x) as usize] = true;
    }
    seen.into_iter().all(|taken| taken)
}
