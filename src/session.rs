//! The round state machine: screens, turns and scoring.
//!
//! A [`QuizSession`] owns both teams, their question sets and the answer log.
//! Every operation runs to completion and illegal calls are inert, so the
//! presentation layer can forward key presses without checking the screen
//! first.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::data::{GameSetup, QuestionBank};
use crate::models::{AnswerRecord, OPTION_COUNT, Question, Screen, Team};

/// Questions each team answers per round.
pub const QUESTIONS_PER_TEAM: usize = 3;
/// Points awarded for a correct answer.
pub const POINTS_PER_CORRECT_ANSWER: u32 = 10;
/// Teams in every session.
pub const TEAM_COUNT: usize = 2;

/// Tags log lines so independent sessions can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What the "next" button does once an answer is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep<'a> {
    NextQuestion,
    SwitchTo(&'a Team),
    ViewResults,
}

impl fmt::Display for NextStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextStep::NextQuestion => f.write_str("Next Question"),
            NextStep::SwitchTo(team) => write!(f, "Switch to {}", team.name),
            NextStep::ViewResults => f.write_str("View Results"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    id: SessionId,
    teams: [Team; TEAM_COUNT],
    bank: QuestionBank,
    answers: Vec<AnswerRecord>,
    screen: Screen,
    active_team: Option<usize>,
    current_question_index: usize,
    selected_option: Option<usize>,
    explanation_visible: bool,
    game_over: bool,
}

impl QuizSession {
    pub fn new(setup: GameSetup) -> Self {
        let (teams, bank) = setup.into_parts();
        let session = Self {
            id: SessionId::new(),
            teams,
            bank,
            answers: Vec::new(),
            screen: Screen::Intro,
            active_team: None,
            current_question_index: 0,
            selected_option: None,
            explanation_visible: false,
            game_over: false,
        };
        debug!(session = %session.id, "session created");
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, index: usize) -> Option<&Team> {
        self.teams.get(index)
    }

    pub fn active_team_index(&self) -> Option<usize> {
        self.active_team
    }

    pub fn active_team(&self) -> Option<&Team> {
        self.active_team.map(|index| &self.teams[index])
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn explanation_visible(&self) -> bool {
        self.explanation_visible
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True between [`select_answer`](Self::select_answer) and
    /// [`next_question`](Self::next_question).
    pub fn is_answer_pending(&self) -> bool {
        self.selected_option.is_some()
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Intro goes to Selection, Selection starts the round. Inert elsewhere.
    pub fn advance_screen(&mut self) {
        match self.screen {
            Screen::Intro => {
                self.screen = Screen::Selection;
                debug!(session = %self.id, "advanced to selection");
            }
            Screen::Selection => self.start_trivia(),
            Screen::Trivia | Screen::Results => {}
        }
    }

    pub fn start_trivia(&mut self) {
        self.reset_round();
        self.active_team = Some(0);
        self.screen = Screen::Trivia;
        info!(session = %self.id, first_team = %self.teams[0].name, "round started");
    }

    /// Scores `option_index` against the active question.
    ///
    /// Ignored while an answer is already pending, when no team is active, or
    /// when the index does not name one of the options.
    pub fn select_answer(&mut self, option_index: usize) {
        if self.selected_option.is_some() {
            debug!(session = %self.id, option_index, "answer already selected");
            return;
        }
        let Some(team_index) = self.active_team else {
            debug!(session = %self.id, "no active team");
            return;
        };
        if option_index >= OPTION_COUNT {
            warn!(session = %self.id, option_index, "option index out of range");
            return;
        }
        let Some(question) = self.active_question() else {
            return;
        };

        let question_id = question.id;
        let is_correct = question.is_correct(option_index);
        let points_awarded = if is_correct {
            POINTS_PER_CORRECT_ANSWER
        } else {
            0
        };

        self.selected_option = Some(option_index);
        self.explanation_visible = true;
        let team = &mut self.teams[team_index];
        team.record(is_correct, points_awarded);
        self.answers.push(AnswerRecord {
            team: team_index,
            question_id,
            chosen_option_index: option_index,
            is_correct,
            points_awarded,
        });

        debug!(
            session = %self.id,
            team = %team.name,
            question_id,
            option_index,
            is_correct,
            score = team.score,
            "answer recorded"
        );
    }

    /// Moves past the answered question, handing the turn over once the
    /// active team has used its allotment. Handing back to the first team
    /// ends the round.
    pub fn next_question(&mut self) {
        let Some(team_index) = self.active_team else {
            return;
        };
        if self.selected_option.is_none() {
            debug!(session = %self.id, "next question before answering");
            return;
        }

        self.selected_option = None;
        self.explanation_visible = false;

        if self.teams[team_index].questions_answered < QUESTIONS_PER_TEAM {
            self.current_question_index += 1;
            return;
        }

        let next_team = (team_index + 1) % TEAM_COUNT;
        self.current_question_index = 0;
        if next_team == 0 {
            self.active_team = None;
            self.game_over = true;
            self.screen = Screen::Results;
            info!(
                session = %self.id,
                winner = self.winning_team().map_or("tie", |team| team.name.as_str()),
                scores = ?self.teams.iter().map(|team| team.score).collect::<Vec<_>>(),
                "round finished"
            );
        } else {
            self.active_team = Some(next_team);
            debug!(session = %self.id, team = %self.teams[next_team].name, "turn passed");
        }
    }

    /// Back to the intro with every counter cleared and no active team.
    pub fn restart(&mut self) {
        self.reset_round();
        self.active_team = None;
        self.screen = Screen::Intro;
        info!(session = %self.id, "session restarted");
    }

    fn reset_round(&mut self) {
        self.teams.iter_mut().for_each(Team::reset);
        self.answers.clear();
        self.current_question_index = 0;
        self.selected_option = None;
        self.explanation_visible = false;
        self.game_over = false;
    }

    /// The active team's questions, empty when no team is active.
    pub fn active_question_set(&self) -> &[Question] {
        match self.active_team {
            Some(index) => self.bank.for_team(index),
            None => &[],
        }
    }

    pub fn active_question(&self) -> Option<&Question> {
        self.active_question_set().get(self.current_question_index)
    }

    /// The team with the strictly higher score; `None` on a tie.
    pub fn winning_team(&self) -> Option<&Team> {
        let [first, second] = &self.teams;
        match first.score.cmp(&second.score) {
            Ordering::Greater => Some(first),
            Ordering::Less => Some(second),
            Ordering::Equal => None,
        }
    }

    /// Share of its allotment the active team has answered, in `[0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        match self.active_team() {
            Some(team) => team.questions_answered as f64 / QUESTIONS_PER_TEAM as f64,
            None => 0.0,
        }
    }

    pub fn is_last_question_for_team(&self) -> bool {
        self.active_team.is_some() && self.current_question_index + 1 >= QUESTIONS_PER_TEAM
    }

    pub fn is_last_team(&self) -> bool {
        self.active_team == Some(TEAM_COUNT - 1)
    }

    pub fn next_step(&self) -> NextStep<'_> {
        if !self.is_last_question_for_team() {
            return NextStep::NextQuestion;
        }
        match self.active_team {
            Some(index) if !self.is_last_team() => {
                NextStep::SwitchTo(&self.teams[(index + 1) % TEAM_COUNT])
            }
            _ => NextStep::ViewResults,
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(GameSetup::builtin())
    }
}
