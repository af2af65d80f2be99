//! The normalized server response envelope.
//!
//! The admin API wraps every body in a conventional envelope, but the
//! convention is loose: some endpoints report `status: "success" | "error"`,
//! others `success: true | false`, and `message`/`data` are optional
//! everywhere. Rather than letting every caller poke at raw JSON, this
//! module normalizes the mix behind one typed contract with an explicit
//! [`Outcome`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::ProtocolError;

/// Whether the server considered the request a success.
///
/// Derived from whichever envelope key the endpoint happens to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

/// A parsed response envelope: `{ status | success, message, data }`.
///
/// Every field is optional and any JSON shape is accepted — a body that
/// isn't an object (or isn't JSON at all, parsed upstream as `Null`)
/// normalizes to an empty envelope rather than an error. The HTTP status
/// code is the primary success gate; the envelope is a second opinion
/// plus the carrier for `message` and `data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    success: Option<bool>,
    /// Human-readable message, present on most error responses and some
    /// success responses (e.g. approve/reject confirmations).
    #[serde(default)]
    pub message: Option<String>,
    /// The actual payload. Shape varies per endpoint.
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    /// Parses an envelope out of an already-parsed JSON body.
    ///
    /// Never fails: bodies that don't look like an envelope become an
    /// empty one (no message, no data, `Success` outcome).
    pub fn from_value(body: &Value) -> Self {
        serde_json::from_value(body.clone()).unwrap_or_default()
    }

    /// Normalizes the mixed `status`/`success` keys into one [`Outcome`].
    ///
    /// `Error` iff the body explicitly says so (`success: false` or
    /// `status: "error"`); anything else — including an envelope with
    /// neither key — is `Success`, because the HTTP status has already
    /// been checked by the time an envelope is inspected.
    pub fn outcome(&self) -> Outcome {
        match (self.success, self.status.as_deref()) {
            (Some(false), _) | (_, Some("error")) => Outcome::Error,
            _ => Outcome::Success,
        }
    }

    /// Extracts and decodes the `data` payload, or explains why it can't.
    ///
    /// # Errors
    /// - [`ProtocolError::Rejected`] — the envelope reports an error
    ///   outcome (the server's `message` is carried along)
    /// - [`ProtocolError::MissingData`] — success outcome but no `data`
    /// - [`ProtocolError::Decode`] — `data` present but the wrong shape
    pub fn require_data<T: DeserializeOwned>(&self) -> Result<T, ProtocolError> {
        if self.outcome() == Outcome::Error {
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| "unspecified server error".to_string());
            return Err(ProtocolError::Rejected(message));
        }
        let data = self.data.clone().ok_or(ProtocolError::MissingData)?;
        serde_json::from_value(data).map_err(ProtocolError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_status_success() {
        let env = Envelope::from_value(&json!({"status": "success"}));
        assert_eq!(env.outcome(), Outcome::Success);
    }

    #[test]
    fn test_outcome_status_error() {
        let env = Envelope::from_value(&json!({"status": "error"}));
        assert_eq!(env.outcome(), Outcome::Error);
    }

    #[test]
    fn test_outcome_success_bool_variants() {
        let ok = Envelope::from_value(&json!({"success": true}));
        assert_eq!(ok.outcome(), Outcome::Success);

        let bad = Envelope::from_value(&json!({"success": false}));
        assert_eq!(bad.outcome(), Outcome::Error);
    }

    #[test]
    fn test_outcome_missing_keys_defaults_to_success() {
        // Data-only bodies exist; the HTTP status already gated them.
        let env = Envelope::from_value(&json!({"data": [1, 2, 3]}));
        assert_eq!(env.outcome(), Outcome::Success);
    }

    #[test]
    fn test_from_value_tolerates_non_object_bodies() {
        for body in [json!(null), json!("plain text"), json!([1, 2])] {
            let env = Envelope::from_value(&body);
            assert_eq!(env.outcome(), Outcome::Success);
            assert!(env.message.is_none());
            assert!(env.data.is_none());
        }
    }

    #[test]
    fn test_require_data_decodes_payload() {
        let env = Envelope::from_value(&json!({
            "status": "success",
            "message": "ok",
            "data": {"count": 2}
        }));

        #[derive(Deserialize)]
        struct Counted {
            count: u64,
        }
        let counted: Counted = env.require_data().unwrap();
        assert_eq!(counted.count, 2);
    }

    #[test]
    fn test_require_data_rejected_carries_server_message() {
        let env = Envelope::from_value(&json!({
            "success": false,
            "message": "account not approved"
        }));
        let err = env.require_data::<Value>().unwrap_err();
        assert!(
            matches!(err, ProtocolError::Rejected(ref m) if m == "account not approved"),
            "got {err:?}"
        );
    }

    #[test]
    fn test_require_data_missing_data_is_distinct_error() {
        let env = Envelope::from_value(&json!({"status": "success"}));
        let err = env.require_data::<Value>().unwrap_err();
        assert!(matches!(err, ProtocolError::MissingData));
    }

    #[test]
    fn test_require_data_wrong_shape_is_decode_error() {
        let env = Envelope::from_value(&json!({
            "status": "success",
            "data": "not an object"
        }));

        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Wanted {
            field: u64,
        }
        let err = env.require_data::<Wanted>().unwrap_err();
        assert!(matches!(err, ProtocolError::Decode(_)));
    }
}
