//! In-memory session tally

/// Scores across the hands of one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub hands_played: u32,
    pub best_score: u32,
    pub total_score: u32,
}

impl SessionStats {
    /// Record a finished hand
    pub fn record(&mut self, score: u32) {
        self.hands_played += 1;
        self.best_score = self.best_score.max(score);
        self.total_score += score;
    }
}
