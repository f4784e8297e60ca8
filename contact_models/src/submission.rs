use serde::{Deserialize, Serialize};

use crate::macros::id;

id!(SubmissionId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub const SUCCESS_MESSAGE: &'static str = "Form submitted successfully!";
    pub const FAILURE_MESSAGE: &'static str = "Failed to submit form. Please try again.";

    pub fn success() -> Self {
        Self {
            success: true,
            message: Self::SUCCESS_MESSAGE.into(),
        }
    }

    /// The generic failure result. The cause is intentionally not part of it.
    pub fn failure() -> Self {
        Self {
            success: false,
            message: Self::FAILURE_MESSAGE.into(),
        }
    }
}
