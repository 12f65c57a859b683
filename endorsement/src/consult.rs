//! Optional pre-endorsement consultation.
//!
//! Some deployments want an auxiliary service to see a transaction before
//! an endorser signs it (a pre-ordering coordinator, a policy engine, a
//! compliance log). That step is modeled as an injected capability: a
//! plugin with no consultor bound performs no I/O at all, and a bound
//! consultor runs under an explicit timeout with its failures converted
//! into returned errors. A stuck or unreachable service can delay one
//! endorsement call by at most the configured timeout; it can never hang
//! the process or crash the signing path.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// What the consultor is shown: the payload about to be signed and the
/// proposal that requested it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsultRequest {
    pub payload: Vec<u8>,
    pub proposal_bytes: Vec<u8>,
}

/// A consultor's answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsultDecision {
    Approve,
    Veto { reason: String },
}

/// How a plugin acts on consultation outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultMode {
    /// Log vetoes and failures at `warn` and endorse anyway.
    #[default]
    Advisory,
    /// A veto or consultor failure fails the endorsement call.
    Strict,
}

/// Failures of a consultation attempt.
#[derive(Debug, Error)]
pub enum ConsultError {
    #[error("consultor transport error: {0}")]
    Transport(String),

    #[error("consultor did not answer within {secs}s")]
    Timeout { secs: u64 },

    #[error("consultor protocol error: {0}")]
    Protocol(String),

    #[error("consultor unavailable: {0}")]
    Unavailable(String),
}

/// A pre-endorsement consultation service.
///
/// Implementations must bound their own execution: a `consult` call is
/// expected to return (with an answer or an error) within the timeout the
/// implementation was configured with. Blocking indefinitely is a
/// contract violation, not something callers defend against.
pub trait Consultor: Send + Sync {
    fn consult(&self, request: &ConsultRequest) -> Result<ConsultDecision, ConsultError>;

    /// Human-readable name of this consultor, for logs.
    fn name(&self) -> &str;
}

// ── HTTP consultor ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct WireRequest {
    /// Hex-encoded payload about to be endorsed.
    payload: String,
    /// Hex-encoded proposal envelope.
    proposal: String,
}

#[derive(Deserialize)]
struct WireResponse {
    approved: bool,
    #[serde(default)]
    reason: Option<String>,
}

/// Consults an HTTP endpoint: POSTs the request as JSON and reads back
/// `{"approved": bool, "reason": optional string}`.
///
/// Every request carries the configured timeout, so a slow or unreachable
/// endpoint surfaces as [`ConsultError::Timeout`] rather than an unbounded
/// wait.
pub struct HttpConsultor {
    endpoint: String,
    timeout: Duration,
    client: reqwest::blocking::Client,
}

impl HttpConsultor {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ConsultError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ConsultError::Unavailable(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }
}

impl Consultor for HttpConsultor {
    fn consult(&self, request: &ConsultRequest) -> Result<ConsultDecision, ConsultError> {
        let wire = WireRequest {
            payload: hex::encode(&request.payload),
            proposal: hex::encode(&request.proposal_bytes),
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&wire)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    ConsultError::Timeout {
                        secs: self.timeout.as_secs(),
                    }
                } else {
                    ConsultError::Transport(e.to_string())
                }
            })?;

        if !resp.status().is_success() {
            return Err(ConsultError::Protocol(format!(
                "HTTP {} from {}",
                resp.status(),
                self.endpoint
            )));
        }

        let body: WireResponse = resp
            .json()
            .map_err(|e| ConsultError::Protocol(e.to_string()))?;

        if body.approved {
            Ok(ConsultDecision::Approve)
        } else {
            Ok(ConsultDecision::Veto {
                reason: body.reason.unwrap_or_else(|| "no reason given".to_string()),
            })
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_consultor_normalizes_endpoint() {
        let c = HttpConsultor::new("http://localhost:9000/consult/", Duration::from_secs(2))
            .unwrap();
        assert_eq!(c.endpoint, "http://localhost:9000/consult");
        assert_eq!(c.timeout, Duration::from_secs(2));
    }

    #[test]
    fn wire_request_hex_encodes_bytes() {
        let wire = WireRequest {
            payload: hex::encode(b"\x01\x02"),
            proposal: hex::encode(b"\xff"),
        };
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["payload"], "0102");
        assert_eq!(json["proposal"], "ff");
    }

    #[test]
    fn wire_response_reason_is_optional() {
        let approved: WireResponse = serde_json::from_str(r#"{"approved":true}"#).unwrap();
        assert!(approved.approved);
        assert!(approved.reason.is_none());

        let vetoed: WireResponse =
            serde_json::from_str(r#"{"approved":false,"reason":"policy"}"#).unwrap();
        assert!(!vetoed.approved);
        assert_eq!(vetoed.reason.as_deref(), Some("policy"));
    }

    #[test]
    fn consult_mode_defaults_to_advisory() {
        assert_eq!(ConsultMode::default(), ConsultMode::Advisory);
    }

    #[test]
    fn consult_mode_serde_names() {
        assert_eq!(
            serde_json::to_string(&ConsultMode::Strict).unwrap(),
            "\"strict\""
        );
        let mode: ConsultMode = serde_json::from_str("\"advisory\"").unwrap();
        assert_eq!(mode, ConsultMode::Advisory);
    }
}
