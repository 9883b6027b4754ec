use futures::future::join_all;
use tracing::{debug, info};

use crate::config::ActionConfig;
use crate::error::SyncError;
use crate::event::{Event, EventContext};
use crate::links::extract_task_ids;
use crate::model::status::CanonicalStatus;
use crate::model::task::TaskUpdate;
use crate::providers::TaskTracker;
use crate::reconcile::reconcile;
use crate::report::Reporter;
use crate::status::resolve_status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The event does not move tasks anywhere.
    Skipped,
    Updated {
        status: CanonicalStatus,
        option_id: String,
        task_ids: Vec<String>,
    },
}

/// Move every task linked from the pull request description to the status
/// the event calls for.
///
/// The status field and its options are read from the first linked task only
/// and the same update is sent to all of them.
pub async fn sync_tasks(
    event: &Event,
    config: &ActionConfig,
    tracker: &dyn TaskTracker,
) -> Result<Outcome, SyncError> {
    let pull_request = event
        .payload
        .pull_request
        .as_ref()
        .ok_or(SyncError::MissingPullRequest)?;

    let description = pull_request
        .body
        .as_deref()
        .filter(|body| !body.is_empty())
        .ok_or(SyncError::MissingDescription)?;

    let task_ids = extract_task_ids(description);
    let Some(first_task_id) = task_ids.first() else {
        return Err(SyncError::NoTaskLinksFound);
    };
    debug!(pr = pull_request.number, ?task_ids, "Found linked tasks");

    let task = tracker
        .fetch_task(first_task_id)
        .await
        .map_err(|cause| SyncError::TaskFetchFailed {
            task_id: first_task_id.clone(),
            cause,
        })?;

    let field = reconcile(task.custom_fields.as_deref())?;
    debug!(
        task = ?task.gid,
        field_id = %field.field_id,
        tracker = tracker.name(),
        "Resolved status field"
    );

    let ctx = EventContext::new(event, pull_request);
    let Some(status) = resolve_status(&ctx, &config.whitelist_github_users) else {
        return Ok(Outcome::Skipped);
    };

    let option_id = field.option_for(status).to_string();
    let update = TaskUpdate::set_option(&field.field_id, &option_id);

    // Every update runs to completion even when a sibling fails; the first
    // failure in link order is the one reported. Applied updates stay applied.
    let results = join_all(
        task_ids
            .iter()
            .map(|task_id| tracker.update_task(task_id, &update)),
    )
    .await;
    if let Some((task_id, cause)) = task_ids
        .iter()
        .zip(results)
        .find_map(|(task_id, result)| result.err().map(|cause| (task_id, cause)))
    {
        return Err(SyncError::TaskUpdateFailed {
            task_id: task_id.clone(),
            cause,
        });
    }

    info!(%status, option_id = %option_id, count = task_ids.len(), "Updated linked tasks");
    Ok(Outcome::Updated {
        status,
        option_id,
        task_ids,
    })
}

/// Run [`sync_tasks`] and hand the result to the reporter. Returns whether the run succeeded.
pub async fn run(
    event: &Event,
    config: &ActionConfig,
    tracker: &dyn TaskTracker,
    reporter: &dyn Reporter,
) -> bool {
    match sync_tasks(event, config, tracker).await {
        Ok(Outcome::Skipped) => {
            reporter.report_info("No relevant action detected, skipping status update.");
            true
        }
        Ok(Outcome::Updated {
            status,
            option_id,
            task_ids,
        }) => {
            reporter.report_info(&format!("Task status updated to {status} ({option_id})"));
            let outputs = [
                ("status", status.as_str().to_string()),
                ("task-ids", task_ids.join(",")),
            ];
            for (name, value) in outputs {
                if let Err(e) = reporter.set_output(name, &value) {
                    tracing::warn!("Failed to write step output {name}: {e:#}");
                }
            }
            true
        }
        Err(e) => {
            if let SyncError::MissingOptions { missing } = &e {
                debug!(?missing, "Status field lacks canonical options");
            }
            reporter.report_failure(&e.to_string());
            false
        }
    }
}
