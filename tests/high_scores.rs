use std::fs;

use snekmodes::config::HIGH_SCORE_KEY;
use snekmodes::ledger::{FileStore, Ledger, MemoryStore, ScoreStore};
use snekmodes::{GameMode, HighScores};

#[test]
fn record_never_lowers_a_best() {
    let mut ledger = Ledger::load(MemoryStore::new());

    ledger.record(GameMode::Classic, 5);
    assert_eq!(ledger.record(GameMode::Classic, 3).get(GameMode::Classic), 5);
    assert_eq!(ledger.record(GameMode::Classic, 7).get(GameMode::Classic), 7);
}

#[test]
fn modes_are_tracked_separately() {
    let mut ledger = Ledger::load(MemoryStore::new());
    ledger.record(GameMode::Ghost, 11);

    assert_eq!(
        ledger.scores(),
        HighScores {
            classic: 0,
            ghost: 11,
            portal: 0
        }
    );
}

#[test]
fn scores_survive_a_restart_on_disk() {
    let dir = std::env::temp_dir().join(format!("snekmodes-it-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let mut ledger = Ledger::load(FileStore::new(&dir));
    ledger.record(GameMode::Portal, 8);
    ledger.record(GameMode::Classic, 2);

    let reloaded = Ledger::load(FileStore::new(&dir));
    assert_eq!(reloaded.best(GameMode::Portal), 8);
    assert_eq!(reloaded.best(GameMode::Classic), 2);
    assert_eq!(reloaded.best(GameMode::Ghost), 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn garbage_on_disk_means_fresh_scores() {
    let dir = std::env::temp_dir().join(format!("snekmodes-junk-{}", std::process::id()));
    let mut store = FileStore::new(&dir);
    store.set(HIGH_SCORE_KEY, "{ definitely not").unwrap();

    let mut ledger = Ledger::load(store);
    assert_eq!(ledger.scores(), HighScores::default());

    // The next record overwrites the junk with a valid map
    ledger.record(GameMode::Classic, 1);
    let reloaded = Ledger::load(FileStore::new(&dir));
    assert_eq!(reloaded.best(GameMode::Classic), 1);

    let _ = fs::remove_dir_all(&dir);
}
