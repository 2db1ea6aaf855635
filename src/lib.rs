//! # team-trivia
//!
//! A two-team trivia game for the terminal. Teams take turns answering their
//! own questions; each correct answer scores a fixed number of points and the
//! team with the most points wins.
//!
//! The game logic lives in [`QuizSession`] and can be driven without a
//! terminal:
//!
//! ```rust
//! use team_trivia::{GameSetup, QuizSession, Screen};
//!
//! let mut session = QuizSession::new(GameSetup::builtin());
//! session.advance_screen();
//! session.advance_screen();
//! assert_eq!(session.screen(), Screen::Trivia);
//!
//! let correct = session.active_question().unwrap().correct_option_index;
//! session.select_answer(correct);
//! assert_eq!(session.active_team().unwrap().score, 10);
//! ```
//!
//! ## Playing in the terminal
//!
//! ```rust,no_run
//! use team_trivia::{Trivia, TriviaError};
//!
//! fn main() -> Result<(), TriviaError> {
//!     Trivia::from_json("questions.json")?.run()
//! }
//! ```

mod app;
mod data;
pub mod logging;
mod models;
pub mod roulette;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::info;

pub use app::App;
pub use data::{GameSetup, LoadError, QuestionBank, TeamSeed, load_setup_from_json};
pub use models::{AnswerRecord, ColorTag, OPTION_COUNT, Question, Screen, Team};
pub use session::{
    NextStep, POINTS_PER_CORRECT_ANSWER, QUESTIONS_PER_TEAM, QuizSession, SessionId, TEAM_COUNT,
};

/// How long the event loop waits for a key before redrawing.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for trivia operations.
#[derive(Debug, Error)]
pub enum TriviaError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize question bank: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to install logger: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// A trivia game that can be run in the terminal.
pub struct Trivia {
    app: App,
}

impl Trivia {
    pub fn new(setup: GameSetup) -> Self {
        Self {
            app: App::new(setup),
        }
    }

    /// Load the question bank from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use team_trivia::Trivia;
    ///
    /// let trivia = Trivia::from_json("questions.json").expect("Failed to load questions");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, TriviaError> {
        let setup = load_setup_from_json(path)?;
        Ok(Self::new(setup))
    }

    /// Take over the terminal until the players quit.
    pub fn run(mut self) -> Result<(), TriviaError> {
        info!(session = %self.app.session().id(), "starting trivia");
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

impl Default for Trivia {
    fn default() -> Self {
        Self::new(GameSetup::builtin())
    }
}

fn run_event_loop(
    terminal: &mut terminal::TriviaTerminal,
    app: &mut App,
) -> Result<(), TriviaError> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| ui::render(frame, app, now))?;

        if !event::poll(FRAME_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code, Instant::now()) {
                break;
            }
        }
    }

    info!(session = %app.session().id(), "players quit");
    Ok(())
}

/// Returns true if the game should exit.
fn handle_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    match app.screen() {
        Screen::Intro => handle_intro_input(app, key),
        Screen::Selection => handle_selection_input(app, key, now),
        Screen::Trivia => handle_trivia_input(app, key),
        Screen::Results => handle_results_input(app, key),
    }
    false
}

fn handle_intro_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.advance();
    }
}

fn handle_selection_input(app: &mut App, key: KeyCode, now: Instant) {
    match key {
        KeyCode::Char(' ') => app.spin_roulette(now),
        KeyCode::Enter => app.advance(),
        _ => {}
    }
}

fn handle_trivia_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(c @ '1'..='4') => app.answer(c as usize - '1' as usize),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),
        _ => {}
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, keys: &[KeyCode]) {
        let now = Instant::now();
        for key in keys {
            assert!(!handle_input(app, *key, now));
        }
    }

    #[test]
    fn q_quits_from_every_screen() {
        let mut app = App::default();
        let now = Instant::now();
        assert!(handle_input(&mut app, KeyCode::Char('q'), now));

        press(&mut app, &[KeyCode::Enter]);
        assert!(handle_input(&mut app, KeyCode::Char('Q'), now));
    }

    #[test]
    fn enter_walks_into_trivia() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.screen(), Screen::Trivia);
    }

    #[test]
    fn space_spins_on_selection() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Enter, KeyCode::Char(' ')]);
        assert!(app.roulette().is_spinning());

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.screen(), Screen::Selection);
    }

    #[test]
    fn digit_keys_answer_directly() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Char('2')]);
        assert_eq!(app.session().selected_option(), Some(1));
        assert_eq!(app.session().active_team().unwrap().score, POINTS_PER_CORRECT_ANSWER);

        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.session().answers().len(), 1);

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.session().current_question_index(), 1);
    }

    #[test]
    fn full_round_by_keyboard_then_restart() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        for _ in 0..TEAM_COUNT * QUESTIONS_PER_TEAM {
            press(&mut app, &[KeyCode::Down, KeyCode::Enter, KeyCode::Enter]);
        }
        assert_eq!(app.screen(), Screen::Results);

        press(&mut app, &[KeyCode::Char('j'), KeyCode::Char('r')]);
        assert_eq!(app.screen(), Screen::Intro);
        assert!(app.session().answers().is_empty());
    }
}
