use std::time::Instant;

use tracing::info;

use crate::data::GameSetup;
use crate::models::{OPTION_COUNT, Screen};
use crate::roulette::Roulette;
use crate::session::QuizSession;

/// Terminal-side state around one [`QuizSession`]: the option cursor, the
/// roulette and the results scroll offset.
pub struct App {
    session: QuizSession,
    cursor: usize,
    roulette: Roulette,
    result_scroll: usize,
}

impl App {
    pub fn new(setup: GameSetup) -> Self {
        Self {
            session: QuizSession::new(setup),
            cursor: 0,
            roulette: Roulette::default(),
            result_scroll: 0,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn roulette(&self) -> &Roulette {
        &self.roulette
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Forwards to [`QuizSession::advance_screen`]; held back while the
    /// roulette is still spinning.
    pub fn advance(&mut self) {
        if self.roulette.is_spinning() {
            return;
        }
        self.session.advance_screen();
        self.cursor = 0;
    }

    pub fn spin_roulette(&mut self, now: Instant) {
        if self.screen() != Screen::Selection {
            return;
        }
        if self.roulette.spin(now, &mut rand::thread_rng()) {
            info!(session = %self.session.id(), "roulette spinning");
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(team) = self.roulette.poll(now) {
            let name = self.session.team(team).map_or("", |team| team.name.as_str());
            info!(session = %self.session.id(), team = name, "roulette picked a team");
        }
    }

    pub fn select_next_option(&mut self) {
        if !self.session.is_answer_pending() {
            self.cursor = (self.cursor + 1) % OPTION_COUNT;
        }
    }

    pub fn select_previous_option(&mut self) {
        if !self.session.is_answer_pending() {
            self.cursor = (self.cursor + OPTION_COUNT - 1) % OPTION_COUNT;
        }
    }

    /// Answers with `option` directly, moving the cursor onto it.
    pub fn answer(&mut self, option: usize) {
        if self.session.is_answer_pending() || option >= OPTION_COUNT {
            return;
        }
        self.cursor = option;
        self.session.select_answer(option);
    }

    /// Answers with the highlighted option, or moves on when an answer is
    /// already on screen.
    pub fn confirm(&mut self) {
        if self.session.is_answer_pending() {
            self.session.next_question();
            self.cursor = 0;
        } else {
            self.session.select_answer(self.cursor);
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.answers().len().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.roulette.reset();
        self.cursor = 0;
        self.result_scroll = 0;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameSetup::builtin())
    }
}
