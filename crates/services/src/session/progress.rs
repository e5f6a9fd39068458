/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizProgress {
    pub total: usize,
    pub position: usize,
    pub percent: f64,
    pub is_complete: bool,
}
