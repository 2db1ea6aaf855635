mod bank;
mod loader;

pub use bank::{GameSetup, QuestionBank, TeamSeed};
pub use loader::{LoadError, load_setup_from_json};
