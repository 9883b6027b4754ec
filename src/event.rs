use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Webhook payload of the workflow run, as written to `GITHUB_EVENT_PATH`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub review: Option<Review>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub body: Option<String>,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub state: String,
}

/// The triggering event: payload plus the event name the runner reports next to it.
#[derive(Debug, Clone)]
pub struct Event {
    pub name: String,
    pub payload: EventPayload,
}

impl Event {
    pub fn load(name: &str, payload_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(payload_path).with_context(|| {
            format!("Failed to read event payload from {}", payload_path.display())
        })?;
        let payload: EventPayload =
            serde_json::from_str(&contents).context("Failed to parse event payload")?;
        Ok(Self {
            name: name.to_string(),
            payload,
        })
    }
}

/// Read-only view of the event used to pick a status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    pub event_name: String,
    pub action: Option<String>,
    pub author_login: String,
    pub review_state: Option<String>,
}

impl EventContext {
    pub fn new(event: &Event, pull_request: &PullRequest) -> Self {
        Self {
            event_name: event.name.clone(),
            action: event.payload.action.clone(),
            author_login: pull_request.user.login.clone(),
            review_state: event.payload.review.as_ref().map(|r| r.state.clone()),
        }
    }
}
