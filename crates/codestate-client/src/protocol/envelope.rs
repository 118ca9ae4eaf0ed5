//! The message envelope shared by both directions.

use super::kinds::RequestKind;
use super::pending::RequestId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Result marker on inbound response envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// One message on the wire: `{type, payload, status?, id?}`.
///
/// Outbound requests carry the client-generated `id`; hosts may or may not
/// echo it back on the response. `status` only appears on responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResponseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Envelope {
    /// Builds an outbound request envelope.
    pub fn request(kind: RequestKind, payload: serde_json::Value, id: &RequestId) -> Self {
        Self {
            kind: kind.to_string(),
            payload,
            status: None,
            id: Some(id.to_string()),
        }
    }

    /// True when the envelope carries `status: "success"`.
    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(ResponseStatus::Success))
    }

    /// Decodes the payload into a defaulted struct.
    ///
    /// Response payload fields are presence-optional per kind, so decoding
    /// never fails hard: a malformed payload logs and yields the default,
    /// which handlers treat as "field absent".
    pub fn decode_payload<T>(&self) -> T
    where
        T: DeserializeOwned + Default,
    {
        match serde_json::from_value(self.payload.clone()) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::warn!(kind = %self.kind, %err, "malformed payload, treating as empty");
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let id = RequestId::new();
        let envelope = Envelope::request(
            RequestKind::SessionDelete,
            serde_json::json!({"id": "s-1"}),
            &id,
        );
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["type"], "codestate.session.delete");
        assert_eq!(json["payload"]["id"], "s-1");
        assert_eq!(json["id"], id.to_string());
        assert!(json.get("status").is_none());
    }

    #[test]
    fn test_decodes_response_without_id() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"type":"codestate.sessions.init.response","payload":{},"status":"success"}"#,
        )
        .unwrap();
        assert!(envelope.is_success());
        assert!(envelope.id.is_none());
    }

    #[test]
    fn test_error_status() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"type":"codestate.session.create.response","payload":{"error":"disk full"},"status":"error"}"#,
        )
        .unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.status, Some(ResponseStatus::Error));
    }

    #[test]
    fn test_malformed_payload_decodes_to_default() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"type":"codestate.scripts.init.response","payload":{"scripts":"not-a-list"}}"#,
        )
        .unwrap();
        let payload: super::super::payloads::ScriptsInitPayload = envelope.decode_payload();
        assert!(payload.scripts.is_empty());
    }
}
