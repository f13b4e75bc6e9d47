//! API data models

use serde::{Deserialize, Serialize};

/// API entry from a listing response
///
/// Every field is optional on the wire; accessors project absent values
/// to an empty string.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Api {
    pub id: Option<String>,
    pub name: Option<String>,
    pub context: Option<String>,
    pub version: Option<String>,
    pub provider: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "lifeCycleStatus", skip_serializing_if = "Option::is_none")]
    pub life_cycle_status: Option<String>,
}

impl Api {
    /// Get API ID
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    /// Get API name
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Get API context path
    pub fn context(&self) -> &str {
        self.context.as_deref().unwrap_or("")
    }

    /// Get API version
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("")
    }

    /// Get API provider
    pub fn provider(&self) -> &str {
        self.provider.as_deref().unwrap_or("")
    }

    /// Get API lifecycle status, falling back to `lifeCycleStatus`
    pub fn status(&self) -> &str {
        self.status
            .as_deref()
            .or(self.life_cycle_status.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api() {
        let json = r#"{
            "id": "1",
            "name": "PizzaAPI",
            "version": "1.0.0",
            "context": "/pizza",
            "status": "PUBLISHED",
            "provider": "admin"
        }"#;

        let api: Api = serde_json::from_str(json).unwrap();
        assert_eq!(api.id(), "1");
        assert_eq!(api.name(), "PizzaAPI");
        assert_eq!(api.version(), "1.0.0");
        assert_eq!(api.context(), "/pizza");
        assert_eq!(api.status(), "PUBLISHED");
        assert_eq!(api.provider(), "admin");
    }

    #[test]
    fn test_absent_fields_are_empty() {
        let api: Api = serde_json::from_str(r#"{"name": "OnlyName"}"#).unwrap();
        assert_eq!(api.name(), "OnlyName");
        assert_eq!(api.id(), "");
        assert_eq!(api.context(), "");
        assert_eq!(api.version(), "");
        assert_eq!(api.provider(), "");
        assert_eq!(api.status(), "");
    }

    #[test]
    fn test_null_fields_are_empty() {
        let api: Api = serde_json::from_str(r#"{"id": null, "status": null}"#).unwrap();
        assert_eq!(api.id(), "");
        assert_eq!(api.status(), "");
    }

    #[test]
    fn test_lifecycle_status_alias() {
        let api: Api =
            serde_json::from_str(r#"{"id": "9", "lifeCycleStatus": "CREATED"}"#).unwrap();
        assert_eq!(api.status(), "CREATED");
    }

    #[test]
    fn test_status_and_lifecycle_status_together() {
        let api: Api = serde_json::from_str(
            r#"{"id": "1", "name": "A", "status": "PUBLISHED", "lifeCycleStatus": "CREATED"}"#,
        )
        .unwrap();
        assert_eq!(api.status(), "PUBLISHED");
    }

    #[test]
    fn test_envelope_with_both_status_keys_decodes() {
        let envelope: crate::apim::traits::ListEnvelope<Api> = serde_json::from_str(
            r#"{"count":1,"list":[{"id":"1","name":"A","status":"PUBLISHED","lifeCycleStatus":"PUBLISHED"}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.list.len(), 1);
        assert_eq!(envelope.list[0].status(), "PUBLISHED");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let api: Api = serde_json::from_str(
            r#"{"id": "7", "description": "ignored", "tags": ["a"], "isDefaultVersion": true}"#,
        )
        .unwrap();
        assert_eq!(api.id(), "7");
    }
}
