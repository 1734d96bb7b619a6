use std::time::{Duration, Instant};

use log::info;
use rand::rngs::StdRng;
use ratatui::Frame;

use crate::config::Settings;
use crate::grid::GameMode;
use crate::input::Command;
use crate::ledger::{Ledger, ScoreStore};
use crate::render::{self, Hud};
use crate::scheduler::Ticker;
use crate::session::{Session, TickReport};

pub struct Game<S: ScoreStore> {
    session: Session,
    ledger: Ledger<S>,
    ticker: Ticker,
    rng: StdRng,
    new_best: bool,
    show_help: bool,
    should_quit: bool,
}

impl<S: ScoreStore> Game<S> {
    pub fn new(ledger: Ledger<S>, rng: StdRng, settings: &Settings, now: Instant) -> Self {
        Game {
            session: Session::new(GameMode::default()),
            ledger,
            ticker: Ticker::new(settings.tick_interval, now),
            rng,
            new_best: false,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn handle(&mut self, command: Command, now: Instant) {
        match command {
            Command::Turn(direction) => {
                if !self.session.is_over() {
                    self.session.set_desired_direction(direction);
                }
            }
            Command::SelectMode(mode) => self.restart(mode, now),
            Command::PlayAgain => {
                if self.session.is_over() {
                    self.restart(self.session.mode(), now);
                }
            }
            // The overlay only covers the board, ticks keep running underneath
            Command::Help => self.show_help = !self.show_help,
            Command::Quit => self.should_quit = true,
        }
    }

    fn restart(&mut self, mode: GameMode, now: Instant) {
        self.session.reset(mode);
        self.new_best = false;
        self.ticker.rearm(now);
    }

    pub fn update(&mut self, now: Instant) -> Option<TickReport> {
        if !self.ticker.due(now) {
            return None;
        }

        let report = self.session.tick(&mut self.rng);
        if let TickReport::GameOver { mode, final_score, .. } = report {
            self.ticker.disarm();
            self.ledger.record(mode, final_score);
            self.new_best = self.ledger.is_new_best(mode, final_score);
            if self.new_best {
                info!("New {} high score: {}", mode, final_score);
            }
        }
        Some(report)
    }

    pub fn render(&self, frame: &mut Frame) {
        let hud = Hud {
            best: self.ledger.best(self.session.mode()),
            new_best: self.new_best,
            help: self.show_help,
        };
        render::draw(frame, &self.session.snapshot(), hud);
    }

    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.ticker.time_until_next(now)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
