use thiserror::Error;

use crate::model::status::CanonicalStatus;

/// Run-terminating failures. The `Display` text is what operators see in the
/// workflow log, so keep it stable.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("No pull request found.")]
    MissingPullRequest,

    #[error("No description found for this pull request.")]
    MissingDescription,

    #[error("No task id found in the description. Or link is missing.")]
    NoTaskLinksFound,

    #[error("Failed to get task {task_id}: {cause:#}")]
    TaskFetchFailed {
        task_id: String,
        cause: anyhow::Error,
    },

    #[error("There is no custom fields in the task.")]
    NoCustomFields,

    #[error("There is no Field with name Status or Dev Status.")]
    FieldNotFound,

    #[error(
        "Not all options are available in the field. One or more options is missing: {}",
        expected_options()
    )]
    MissingOptions { missing: Vec<CanonicalStatus> },

    #[error("Failed to update task {task_id}: {cause:#}")]
    TaskUpdateFailed {
        task_id: String,
        cause: anyhow::Error,
    },
}

fn expected_options() -> String {
    [CanonicalStatus::CodeReview, CanonicalStatus::ReadyForQa]
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_options_lists_every_expected_option() {
        let err = SyncError::MissingOptions {
            missing: vec![CanonicalStatus::ReadyForQa],
        };
        assert_eq!(
            err.to_string(),
            "Not all options are available in the field. One or more options is missing: CODE REVIEW,READY FOR QA"
        );
    }

    #[test]
    fn fetch_failure_wraps_task_id_and_cause() {
        let err = SyncError::TaskFetchFailed {
            task_id: "1234".into(),
            cause: anyhow::anyhow!("404 Not Found"),
        };
        assert_eq!(err.to_string(), "Failed to get task 1234: 404 Not Found");
    }
}
