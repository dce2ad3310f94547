use reel_core::DismissReason;

/// How one carousel session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub reason: DismissReason,
    /// Slide that was showing when the session ended.
    pub last_index: usize,
    pub last_title: String,
    pub slides: usize,
}

/// Everything that happened between launch and quit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowcaseReport {
    pub sessions: Vec<SessionSummary>,
}

impl ShowcaseReport {
    #[must_use]
    pub fn last(&self) -> Option<&SessionSummary> {
        self.sessions.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
