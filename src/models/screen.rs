/// Screen currently shown to the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Rules and team presentation.
    #[default]
    Intro,
    /// Team draw before the round starts.
    Selection,
    /// Questions and answers.
    Trivia,
    /// Final scores and winner.
    Results,
}
