//! Employee roster endpoints.

use serde_json::Value;

use super::{ApiClient, ApiResult, ListEnvelope};
use crate::model::{Employee, NewEmployee};

impl ApiClient {
    pub async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        let envelope: ListEnvelope<Employee> = self.get_json("/api/employees").await?;
        Ok(envelope.data)
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> ApiResult<()> {
        let _: Value = self.post_json("/api/employees", employee).await?;
        Ok(())
    }

    /// Partial update: only the supplied fields change.
    pub async fn update_employee(&self, id: &str, fields: &Value) -> ApiResult<()> {
        self.put_json(&format!("/api/employees/{id}"), fields).await
    }

    pub async fn delete_employee(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/employees/{id}")).await
    }
}
