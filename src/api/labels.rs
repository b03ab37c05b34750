//! Label record endpoints, including the per-id bulk fan-out.

use futures::future::join_all;
use serde_json::{Value, json};
use tracing::warn;

use super::{ApiClient, ApiError, ApiResult};
use crate::model::{LabelForm, LabelRecord};

/// Result of a bulk fan-out: every id is independently fallible, so a
/// partial failure reports which ids failed instead of aborting the batch.
#[derive(Debug, Default)]
pub struct BulkOutcome {
    pub succeeded: Vec<String>,
    pub failed: Vec<(String, ApiError)>,
}

impl BulkOutcome {
    pub fn all_ok(&self) -> bool {
        self.failed.is_empty()
    }

    fn collect(results: Vec<(String, ApiResult<()>)>, action: &str) -> Self {
        let mut outcome = Self::default();
        for (id, result) in results {
            match result {
                Ok(()) => outcome.succeeded.push(id),
                Err(e) => outcome.failed.push((id, e)),
            }
        }
        if !outcome.all_ok() {
            warn!(
                action,
                succeeded = outcome.succeeded.len(),
                failed = outcome.failed.len(),
                "bulk action finished with failures"
            );
        }
        outcome
    }
}

impl ApiClient {
    pub async fn list_labels(&self) -> ApiResult<Vec<LabelRecord>> {
        self.get_json("/api/labels").await
    }

    pub async fn admin_dashboard(&self) -> ApiResult<Value> {
        self.get_json("/api/labels/admin/dashboard").await
    }

    pub async fn create_label(&self, form: &LabelForm) -> ApiResult<()> {
        let _: Value = self.post_json("/api/labels", form).await?;
        Ok(())
    }

    pub async fn update_label(&self, id: &str, fields: &Value) -> ApiResult<()> {
        self.put_json(&format!("/api/labels/{id}"), fields).await
    }

    pub async fn delete_label(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/labels/{id}")).await
    }

    /// Delete every id concurrently, one request per id.
    pub async fn delete_labels(&self, ids: &[String]) -> BulkOutcome {
        let tasks = ids.iter().map(|id| async move {
            let result = self.delete_label(id).await;
            (id.clone(), result)
        });
        BulkOutcome::collect(join_all(tasks).await, "delete")
    }

    /// Set the status of every id concurrently, one request per id.
    pub async fn update_labels_status(&self, ids: &[String], status: &str) -> BulkOutcome {
        let body = json!({ "status": status });
        let tasks = ids.iter().map(|id| {
            let body = body.clone();
            async move {
                let result = self.update_label(id, &body).await;
                (id.clone(), result)
            }
        });
        BulkOutcome::collect(join_all(tasks).await, "update-status")
    }
}
