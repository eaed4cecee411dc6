use crate::models::{ComplianceConfig, ComplianceVerdict, LicenseRecord};
use async_trait::async_trait;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::time::Duration;

/// Failures talking to the compliance endpoint
#[derive(Debug, thiserror::Error)]
pub enum ComplianceError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Body posted to the compliance endpoint
///
/// The manifest goes out as parsed, keys the typed record does not model included.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceRequest<'a> {
    pub license: &'a LicenseRecord,
    pub manifest: &'a JsonValue,
}

/// A service able to rule on a license/manifest pair
#[async_trait]
pub trait ComplianceApi: Send + Sync {
    async fn check(&self, request: &ComplianceRequest<'_>) -> Result<ComplianceVerdict, ComplianceError>;
}

/// HTTP implementation posting JSON to a fixed endpoint
pub struct HttpComplianceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpComplianceClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ComplianceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ComplianceError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &ComplianceConfig) -> Result<Self, ComplianceError> {
        Self::new(
            config.endpoint.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ComplianceApi for HttpComplianceClient {
    /// The body is relayed whatever the status code
    async fn check(&self, request: &ComplianceRequest<'_>) -> Result<ComplianceVerdict, ComplianceError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Ask the API for a verdict, degrading to "API unavailable" on any failure
pub async fn check_compliance(api: &dyn ComplianceApi, request: &ComplianceRequest<'_>) -> ComplianceVerdict {
    match api.check(request).await {
        Ok(verdict) => verdict,
        Err(e) => {
            eprintln!("{}", format!("API check failed: {}", e).yellow());
            ComplianceVerdict::unavailable()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_license;

    struct FailingApi;

    #[async_trait]
    impl ComplianceApi for FailingApi {
        async fn check(&self, _: &ComplianceRequest<'_>) -> Result<ComplianceVerdict, ComplianceError> {
            Err(ComplianceError::Client("offline".to_string()))
        }
    }

    fn manifest() -> JsonValue {
        serde_json::json!({
            "manifest_version": "1.0",
            "palimpsest_license": "Palimpsest License v0.3",
            "ai_boundaries": {
                "default_consent": {
                    "training": "deny", "generation": "deny", "agentic": "deny", "qai": "deny"
                }
            },
            "publisher": "Acme"
        })
    }

    #[test]
    fn test_request_body_shape() {
        let license = parse_license("# Palimpsest License v0.3.1\n");
        let manifest = manifest();
        let body = serde_json::to_value(ComplianceRequest {
            license: &license,
            manifest: &manifest,
        })
        .unwrap();

        assert_eq!(body["license"]["licenseVersion"], "v0.3.1");
        assert_eq!(body["manifest"]["manifest_version"], "1.0");
        assert_eq!(body["manifest"]["ai_boundaries"]["default_consent"]["qai"], "deny");
        assert_eq!(body["manifest"]["publisher"], "Acme");
    }

    #[test]
    fn test_from_config_keeps_endpoint() {
        let config = ComplianceConfig {
            endpoint: "http://localhost:8080/compliance/check".to_string(),
            timeout_secs: Some(5),
        };
        let client = HttpComplianceClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/compliance/check");
    }

    #[tokio::test]
    async fn test_failure_degrades_to_unavailable() {
        let license = parse_license("# Palimpsest License v0.3.1\n");
        let manifest = manifest();
        let request = ComplianceRequest {
            license: &license,
            manifest: &manifest,
        };

        let verdict = check_compliance(&FailingApi, &request).await;
        assert_eq!(verdict, ComplianceVerdict::unavailable());
    }
}
