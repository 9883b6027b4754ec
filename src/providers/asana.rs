use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::TaskTracker;
use crate::model::task::{Task, TaskUpdate};

pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

pub struct AsanaTracker {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl AsanaTracker {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    fn task_url(&self, task_id: &str) -> String {
        format!("{}/tasks/{task_id}", self.base_url)
    }
}

/// Asana wraps both requests and responses in a `data` envelope.
#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[async_trait]
impl TaskTracker for AsanaTracker {
    fn name(&self) -> &str {
        "Asana"
    }

    async fn fetch_task(&self, task_id: &str) -> Result<Task> {
        let resp = self
            .client
            .get(self.task_url(task_id))
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Asana API request failed")?
            .error_for_status()?;

        let envelope: Envelope<Task> = resp.json().await.context("Failed to parse Asana response")?;
        Ok(envelope.data)
    }

    async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> Result<Task> {
        let resp = self
            .client
            .put(self.task_url(task_id))
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .json(&Envelope { data: update })
            .send()
            .await
            .context("Asana API request failed")?
            .error_for_status()?;

        let envelope: Envelope<Task> = resp.json().await.context("Failed to parse Asana response")?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn tracker(server: &MockServer) -> AsanaTracker {
        AsanaTracker::new(format!("{}/api/1.0/", server.base_url()), "secret".into())
    }

    #[tokio::test]
    async fn fetch_task_sends_bearer_and_unwraps_data() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/1.0/tasks/1201")
                .header("authorization", "Bearer secret");
            then.status(200).json_body(json!({
                "data": {
                    "gid": "1201",
                    "custom_fields": [{
                        "gid": "55",
                        "name": "Status",
                        "enum_options": [{"gid": "551", "name": "Code Review"}]
                    }]
                }
            }));
        });

        let task = tracker(&server).fetch_task("1201").await.unwrap();

        mock.assert();
        assert_eq!(task.gid.as_deref(), Some("1201"));
        let fields = task.custom_fields.unwrap();
        assert_eq!(fields[0].gid, "55");
        assert_eq!(fields[0].options()[0].gid, "551");
    }

    #[tokio::test]
    async fn update_task_puts_custom_field_payload() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/1.0/tasks/1201")
                .header("authorization", "Bearer secret")
                .json_body(json!({"data": {"custom_fields": {"55": "552"}}}));
            then.status(200).json_body(json!({"data": {"gid": "1201"}}));
        });

        let update = TaskUpdate::set_option("55", "552");
        tracker(&server).update_task("1201", &update).await.unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn http_error_status_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/1.0/tasks/404");
            then.status(404).json_body(json!({"errors": [{"message": "Not found"}]}));
        });

        let err = tracker(&server).fetch_task("404").await.unwrap_err();
        assert!(format!("{err:#}").contains("404"));
    }
}
