/// One entry of the per-round answer log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    /// Index of the answering team within the session.
    pub team: usize,
    pub question_id: u32,
    pub chosen_option_index: usize,
    pub is_correct: bool,
    pub points_awarded: u32,
}
