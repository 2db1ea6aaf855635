use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::bank::{GameSetup, TeamSeed};
use crate::models::OPTION_COUNT;
use crate::session::{QUESTIONS_PER_TEAM, TEAM_COUNT};

/// Errors raised while reading or validating a question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid question bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected {expected} teams, found {found}")]
    TeamCount { expected: usize, found: usize },
    #[error("team #{team} has an empty name")]
    EmptyTeamName { team: usize },
    #[error("team {team:?} has {found} questions, expected {expected}")]
    QuestionCount {
        team: String,
        expected: usize,
        found: usize,
    },
    #[error("question {id} marks option {index} as correct, but only {count} options exist", count = OPTION_COUNT)]
    CorrectOptionOutOfRange { id: u32, index: usize },
    #[error("question id {id} is used more than once")]
    DuplicateQuestionId { id: u32 },
}

/// On-disk shape of a bank, before validation.
#[derive(Deserialize)]
pub(crate) struct BankFile {
    teams: Vec<TeamSeed>,
}

impl TryFrom<BankFile> for GameSetup {
    type Error = LoadError;

    fn try_from(file: BankFile) -> Result<Self, Self::Error> {
        let found = file.teams.len();
        let teams: [TeamSeed; TEAM_COUNT] =
            file.teams.try_into().map_err(|_| LoadError::TeamCount {
                expected: TEAM_COUNT,
                found,
            })?;
        GameSetup::new(teams)
    }
}

pub fn load_setup_from_json<P: AsRef<Path>>(path: P) -> Result<GameSetup, LoadError> {
    let path = path.as_ref();
    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let setup = GameSetup::from_json_str(&json_content)?;
    debug!(path = %path.display(), "loaded question bank");
    Ok(setup)
}

impl GameSetup {
    /// Checks team names, question counts, correct indices and id uniqueness.
    pub fn new(teams: [TeamSeed; TEAM_COUNT]) -> Result<Self, LoadError> {
        validate(&teams)?;
        Ok(Self { teams })
    }

    /// Parses and validates a bank of the form
    /// `{ "teams": [ { "name", "color", "questions": [...] }, ... ] }`.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let file: BankFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }
}

fn validate(teams: &[TeamSeed]) -> Result<(), LoadError> {
    let mut seen_ids = HashSet::new();
    for (index, team) in teams.iter().enumerate() {
        if team.name.trim().is_empty() {
            return Err(LoadError::EmptyTeamName { team: index + 1 });
        }
        if team.questions.len() != QUESTIONS_PER_TEAM {
            return Err(LoadError::QuestionCount {
                team: team.name.clone(),
                expected: QUESTIONS_PER_TEAM,
                found: team.questions.len(),
            });
        }
        for question in &team.questions {
            if question.correct_option_index >= OPTION_COUNT {
                return Err(LoadError::CorrectOptionOutOfRange {
                    id: question.id,
                    index: question.correct_option_index,
                });
            }
            if !seen_ids.insert(question.id) {
                return Err(LoadError::DuplicateQuestionId { id: question.id });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_json(id: u32, correct: usize) -> String {
        format!(
            r#"{{"id":{id},"prompt":"Q{id}","options":["a","b","c","d"],"correct_option_index":{correct},"explanation":"because"}}"#
        )
    }

    fn team_json(name: &str, ids: &[u32]) -> String {
        let questions: Vec<String> = ids.iter().map(|id| question_json(*id, 0)).collect();
        format!(
            r#"{{"name":"{name}","color":"green","questions":[{}]}}"#,
            questions.join(",")
        )
    }

    #[test]
    fn parses_valid_bank() {
        let json = format!(
            r#"{{"teams":[{},{}]}}"#,
            team_json("Owls", &[1, 2, 3]),
            team_json("Foxes", &[4, 5, 6])
        );
        let setup = GameSetup::from_json_str(&json).unwrap();
        assert_eq!(setup.teams[0].name, "Owls");
        assert_eq!(setup.teams[1].questions[2].id, 6);
    }

    #[test]
    fn builtin_survives_json_round_trip() {
        let builtin = GameSetup::builtin();
        let json = builtin.to_json_pretty().unwrap();
        assert_eq!(GameSetup::from_json_str(&json).unwrap(), builtin);
    }

    #[test]
    fn rejects_wrong_team_count() {
        let json = format!(r#"{{"teams":[{}]}}"#, team_json("Owls", &[1, 2, 3]));
        let err = GameSetup::from_json_str(&json).unwrap_err();
        assert!(matches!(err, LoadError::TeamCount { expected: 2, found: 1 }));
    }

    #[test]
    fn rejects_short_question_set() {
        let json = format!(
            r#"{{"teams":[{},{}]}}"#,
            team_json("Owls", &[1, 2]),
            team_json("Foxes", &[4, 5, 6])
        );
        let err = GameSetup::from_json_str(&json).unwrap_err();
        assert!(matches!(err, LoadError::QuestionCount { found: 2, .. }));
    }

    #[test]
    fn rejects_duplicate_ids_across_teams() {
        let json = format!(
            r#"{{"teams":[{},{}]}}"#,
            team_json("Owls", &[1, 2, 3]),
            team_json("Foxes", &[3, 4, 5])
        );
        let err = GameSetup::from_json_str(&json).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateQuestionId { id: 3 }));
    }

    #[test]
    fn rejects_out_of_range_correct_option() {
        let bad = format!(
            r#"{{"name":"Owls","color":"blue","questions":[{},{},{}]}}"#,
            question_json(1, 0),
            question_json(2, 4),
            question_json(3, 0)
        );
        let json = format!(r#"{{"teams":[{},{}]}}"#, bad, team_json("Foxes", &[4, 5, 6]));
        let err = GameSetup::from_json_str(&json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::CorrectOptionOutOfRange { id: 2, index: 4 }
        ));
    }

    #[test]
    fn rejects_blank_team_name() {
        let json = format!(
            r#"{{"teams":[{},{}]}}"#,
            team_json("Owls", &[1, 2, 3]),
            team_json("  ", &[4, 5, 6])
        );
        let err = GameSetup::from_json_str(&json).unwrap_err();
        assert!(matches!(err, LoadError::EmptyTeamName { team: 2 }));
    }

    #[test]
    fn rejects_unknown_color() {
        let json = r#"{"teams":[{"name":"Owls","color":"mauve","questions":[]}]}"#;
        assert!(matches!(
            GameSetup::from_json_str(json).unwrap_err(),
            LoadError::Parse(_)
        ));
    }

    #[test]
    fn deserialize_runs_validation() {
        let json = format!(
            r#"{{"teams":[{},{}]}}"#,
            team_json("Owls", &[1, 2]),
            team_json("Foxes", &[4, 5, 6])
        );
        let err = serde_json::from_str::<GameSetup>(&json).unwrap_err();
        assert!(err.to_string().contains("has 2 questions, expected 3"));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join(format!("{}.json", uuid::Uuid::new_v4()));
        let err = load_setup_from_json(&path).unwrap_err();
        match err {
            LoadError::Read { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
