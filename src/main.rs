use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::time::Instant;

use snekmodes::app::Game;
use snekmodes::config::Settings;
use snekmodes::input;
use snekmodes::ledger::{FileStore, Ledger, ScoreStore};

fn main() -> Result<(), io::Error> {
    let settings = Settings::default();

    // Set up logging before anything else
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(&settings.log_file)?,
    )
    .map_err(io::Error::other)?;

    info!("Starting snekmodes");

    let ledger = Ledger::load(FileStore::new(&settings.data_dir));
    let mut game = Game::new(ledger, StdRng::from_entropy(), &settings, Instant::now());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Exiting snekmodes");
    result
}

fn run<B: Backend, S: ScoreStore>(
    terminal: &mut Terminal<B>,
    game: &mut Game<S>,
) -> Result<(), io::Error> {
    while !game.should_quit() {
        terminal.draw(|f| game.render(f))?;

        if event::poll(game.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = input::command_for(key) {
                    game.handle(command, Instant::now());
                }
            }
        }

        game.update(Instant::now());
    }
    Ok(())
}
