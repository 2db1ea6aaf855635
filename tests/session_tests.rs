//! Round flow and scoring tests for `QuizSession`.

use proptest::prelude::*;
use team_trivia::{
    GameSetup, OPTION_COUNT, POINTS_PER_CORRECT_ANSWER, QUESTIONS_PER_TEAM, QuizSession, Screen,
    TEAM_COUNT,
};

fn fresh_trivia() -> QuizSession {
    let mut session = QuizSession::new(GameSetup::builtin());
    session.advance_screen();
    session.advance_screen();
    session
}

fn correct_index(session: &QuizSession) -> usize {
    session
        .active_question()
        .expect("a question is active")
        .correct_option_index
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn test_end_to_end_round() {
    let mut session = QuizSession::new(GameSetup::builtin());
    assert_eq!(session.screen(), Screen::Intro);

    session.advance_screen();
    assert_eq!(session.screen(), Screen::Selection);
    session.advance_screen();
    assert_eq!(session.screen(), Screen::Trivia);
    assert_eq!(session.active_team_index(), Some(0));
    assert_eq!(session.current_question_index(), 0);

    session.select_answer(correct_index(&session));
    let team = session.active_team().unwrap();
    assert_eq!(team.score, 10);
    assert_eq!(team.questions_answered, 1);

    for _ in 1..QUESTIONS_PER_TEAM {
        session.next_question();
        session.select_answer(correct_index(&session));
    }
    assert_eq!(session.active_team().unwrap().questions_answered, 3);
    assert_eq!(session.active_team().unwrap().score, 30);

    session.next_question();
    assert_eq!(session.active_team_index(), Some(1));
    assert_eq!(session.current_question_index(), 0);
    assert_eq!(session.active_question().unwrap().id, 4);

    for i in 0..QUESTIONS_PER_TEAM {
        session.select_answer(correct_index(&session));
        session.next_question();
        if i + 1 < QUESTIONS_PER_TEAM {
            assert_eq!(session.screen(), Screen::Trivia);
        }
    }

    assert_eq!(session.screen(), Screen::Results);
    assert!(session.is_game_over());
    assert_eq!(session.winning_team(), None);
    assert_eq!(session.answers().len(), TEAM_COUNT * QUESTIONS_PER_TEAM);
}

#[test]
fn test_rotation_ends_round_after_both_allotments() {
    let mut session = fresh_trivia();
    for answered in 0..TEAM_COUNT * QUESTIONS_PER_TEAM {
        assert!(!session.is_game_over(), "ended early after {answered} answers");
        session.select_answer(0);
        session.next_question();
    }
    assert!(session.is_game_over());
    assert_eq!(session.screen(), Screen::Results);
    for team in session.teams() {
        assert_eq!(team.questions_answered, QUESTIONS_PER_TEAM);
    }
}

#[test]
fn test_answer_log_follows_turn_order() {
    let mut session = fresh_trivia();
    for _ in 0..TEAM_COUNT * QUESTIONS_PER_TEAM {
        session.select_answer(correct_index(&session));
        session.next_question();
    }
    let ids: Vec<u32> = session.answers().iter().map(|r| r.question_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    let teams: Vec<usize> = session.answers().iter().map(|r| r.team).collect();
    assert_eq!(teams, vec![0, 0, 0, 1, 1, 1]);
}

#[test]
fn test_second_team_wins_with_more_points() {
    let mut session = fresh_trivia();
    // first team gets one right, second team two
    let plan = [true, false, false, true, true, false];
    for correct in plan {
        let right = correct_index(&session);
        let choice = if correct { right } else { (right + 1) % OPTION_COUNT };
        session.select_answer(choice);
        session.next_question();
    }
    assert_eq!(session.teams()[0].score, 10);
    assert_eq!(session.teams()[1].score, 20);
    assert_eq!(
        session.winning_team().map(|team| team.name.as_str()),
        Some("Visa Checkout")
    );
}

#[test]
fn test_restart_then_start_matches_first_start() {
    let mut session = QuizSession::new(GameSetup::builtin());
    session.start_trivia();
    let first_start = session.clone();

    session.select_answer(correct_index(&session));
    session.next_question();
    session.select_answer(0);
    session.restart();
    assert_eq!(session.screen(), Screen::Intro);

    session.start_trivia();
    assert_eq!(session, first_start);
}

#[test]
fn test_progress_fraction_one_third() {
    let mut session = fresh_trivia();
    session.select_answer(2);
    assert_eq!(session.active_team().unwrap().questions_answered, 1);
    assert!((session.progress_fraction() - 1.0 / 3.0).abs() < 1e-9);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_pending_selection_ignores_further_answers(
        first in 0..OPTION_COUNT,
        retries in proptest::collection::vec(0usize..8, 1..10),
    ) {
        let mut session = fresh_trivia();
        session.select_answer(first);
        let pending = session.clone();

        for option in retries {
            session.select_answer(option);
            prop_assert_eq!(&session, &pending);
        }
    }

    #[test]
    fn prop_score_matches_correct_count(
        choices in proptest::collection::vec(0..OPTION_COUNT, 0..=2 * QUESTIONS_PER_TEAM),
    ) {
        let mut session = fresh_trivia();
        for option in choices {
            session.select_answer(option);
            for team in session.teams() {
                prop_assert_eq!(
                    team.score,
                    POINTS_PER_CORRECT_ANSWER * team.questions_correct as u32
                );
                prop_assert!(team.questions_answered <= QUESTIONS_PER_TEAM);
            }
            prop_assert_eq!(session.selected_option().is_some(), session.explanation_visible());
            session.next_question();
            prop_assert!(!session.explanation_visible());
        }
    }
}
