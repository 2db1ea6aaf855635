use serde::{Deserialize, Serialize};

/// Display color attached to a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Red,
    Green,
    Yellow,
    Magenta,
    Cyan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub color: ColorTag,
    pub score: u32,
    pub questions_answered: usize,
    pub questions_correct: usize,
}

impl Team {
    pub fn new(name: impl Into<String>, color: ColorTag) -> Self {
        Self {
            name: name.into(),
            color,
            score: 0,
            questions_answered: 0,
            questions_correct: 0,
        }
    }

    /// Zeroes the counters, keeping name and color.
    pub fn reset(&mut self) {
        self.score = 0;
        self.questions_answered = 0;
        self.questions_correct = 0;
    }

    pub(crate) fn record(&mut self, is_correct: bool, points: u32) {
        self.score += points;
        self.questions_answered += 1;
        if is_correct {
            self.questions_correct += 1;
        }
    }
}
