mod answer;
mod question;
mod screen;
mod team;

pub use answer::AnswerRecord;
pub use question::{OPTION_COUNT, Question};
pub use screen::Screen;
pub use team::{ColorTag, Team};
