use std::fmt;

/// The two workflow states this tool moves tasks between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalStatus {
    CodeReview,
    ReadyForQa,
}

impl CanonicalStatus {
    /// Checked in this order when normalizing labels: a label containing
    /// both phrases counts as ready for QA.
    pub const ALL: [CanonicalStatus; 2] = [CanonicalStatus::ReadyForQa, CanonicalStatus::CodeReview];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalStatus::CodeReview => "CODE REVIEW",
            CanonicalStatus::ReadyForQa => "READY FOR QA",
        }
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status field discovered on a task, with option ids for both canonical states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusField {
    pub field_id: String,
    pub code_review_option: String,
    pub ready_for_qa_option: String,
}

impl StatusField {
    pub fn option_for(&self, status: CanonicalStatus) -> &str {
        match status {
            CanonicalStatus::CodeReview => &self.code_review_option,
            CanonicalStatus::ReadyForQa => &self.ready_for_qa_option,
        }
    }
}
