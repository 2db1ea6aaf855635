use serde::{Deserialize, Serialize};

use super::loader::BankFile;
use crate::models::{ColorTag, Question, Team};
use crate::session::TEAM_COUNT;

/// A team as described by a question bank: identity plus its own questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSeed {
    pub name: String,
    pub color: ColorTag,
    pub questions: Vec<Question>,
}

/// Everything needed to start a session.
///
/// A setup only exists in validated form: [`GameSetup::new`], the JSON loader
/// and `Deserialize` all run the same checks, and the stock bank is valid by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BankFile")]
pub struct GameSetup {
    pub(super) teams: [TeamSeed; TEAM_COUNT],
}

impl GameSetup {
    /// The stock bank: PayPal against Visa Checkout.
    pub fn builtin() -> Self {
        Self {
            teams: [
                TeamSeed {
                    name: "PayPal".to_string(),
                    color: ColorTag::Blue,
                    questions: vec![
                        question(
                            1,
                            "What was PayPal's original approach?",
                            [
                                "A facilitator for Visa card payments",
                                "An independent digital payment method",
                                "An extension of the banking ecosystem",
                                "An e-commerce platform",
                            ],
                            1,
                            "PayPal started as an independent digital payment method, tied to no bank or card network.",
                        ),
                        question(
                            2,
                            "What was PayPal's main advantage for its users?",
                            [
                                "All it needed was an email address",
                                "It was cheaper than cards",
                                "It had a nicer visual design",
                                "It was faster than Visa Checkout",
                            ],
                            0,
                            "An email address and an account were enough, which made sending and receiving money very quick.",
                        ),
                        question(
                            3,
                            "Which company built the stronger ecosystem of its own?",
                            ["Visa Checkout", "PayPal", "Both equally", "Neither"],
                            1,
                            "PayPal became a digital wallet, an online account, a P2P transfer service and a checkout integrated into global platforms.",
                        ),
                    ],
                },
                TeamSeed {
                    name: "Visa Checkout".to_string(),
                    color: ColorTag::Red,
                    questions: vec![
                        question(
                            4,
                            "In which year was Visa Checkout launched?",
                            ["2012", "2014", "2016", "2018"],
                            1,
                            "Visa launched Visa Checkout in 2014 as an extension of its card ecosystem.",
                        ),
                        question(
                            5,
                            "Why did Visa Checkout fail to take off?",
                            [
                                "It was too expensive",
                                "It offered no security advantage",
                                "It had technical problems",
                                "It was poorly advertised",
                            ],
                            1,
                            "The transaction still ran on the card, so Visa Checkout added no security on top of it.",
                        ),
                        question(
                            6,
                            "What was Visa Checkout's main problem?",
                            [
                                "It reached the market too late",
                                "It did not solve a real problem",
                                "It was hard to use",
                                "All of the above",
                            ],
                            3,
                            "Visa Checkout arrived late, solved no real problem and was clumsier than PayPal.",
                        ),
                    ],
                },
            ],
        }
    }

    pub fn teams(&self) -> &[TeamSeed] {
        &self.teams
    }

    /// Splits the setup into fresh team records and the question bank.
    pub(crate) fn into_parts(self) -> ([Team; TEAM_COUNT], QuestionBank) {
        let [first, second] = self.teams;
        let teams = [
            Team::new(first.name, first.color),
            Team::new(second.name, second.color),
        ];
        let bank = QuestionBank {
            sets: [first.questions, second.questions],
        };
        (teams, bank)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::builtin()
    }
}

fn question(
    id: u32,
    prompt: &str,
    options: [&str; 4],
    correct_option_index: usize,
    explanation: &str,
) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: options.map(str::to_string),
        correct_option_index,
        explanation: explanation.to_string(),
    }
}

/// Per-team disjoint question sequences, indexed like the session's teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    sets: [Vec<Question>; TEAM_COUNT],
}

impl QuestionBank {
    pub fn for_team(&self, team: usize) -> &[Question] {
        self.sets.get(team).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.sets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks a question up by id across every team's set.
    pub fn find(&self, id: u32) -> Option<&Question> {
        self.sets.iter().flatten().find(|question| question.id == id)
    }
}
