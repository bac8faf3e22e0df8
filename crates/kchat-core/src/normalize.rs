//! Reply normalization: raw webhook payload to display text or failure.
//!
//! Webhook workflows return replies in whatever shape the flow author
//! happened to wire up, so the payload is probed against an ordered
//! table of field names rather than deserialized into a fixed struct.

use serde_json::Value;

/// Shown when the webhook answers with nothing recognizable.
pub const NO_RESPONSE_FALLBACK: &str = "No response received";

/// What the transport resolved with, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawReply {
    /// Success status; the response body as text.
    Body(String),
    /// Non-success status code. The body is never read.
    HttpStatus(u16),
}

/// Outcome of normalizing one reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedReply {
    /// Display this text as the assistant's message.
    Text(String),
    /// The call failed; the reason is diagnostic only, never shown.
    Failure(String),
}

/// Top-level fields probed for the reply text, in precedence order.
const MESSAGE_FIELDS: [&str; 5] = ["response", "message", "output", "text", "content"];

/// Fields probed inside a `data` object wrapper.
const DATA_FIELDS: [&str; 2] = ["response", "message"];

/// Reduce a transport resolution to display text or a failure reason.
///
/// Total and deterministic: every input maps to exactly one outcome.
pub fn normalize(reply: &RawReply) -> NormalizedReply {
    match reply {
        RawReply::HttpStatus(code) => {
            NormalizedReply::Failure(format!("HTTP error! status: {code}"))
        }
        RawReply::Body(body) => normalize_body(body),
    }
}

fn normalize_body(body: &str) -> NormalizedReply {
    let doc: Value = match serde_json::from_str(body) {
        Ok(doc) => doc,
        // Not JSON: the raw text itself is the message.
        Err(_) => {
            return if body.trim().is_empty() {
                NormalizedReply::Text(NO_RESPONSE_FALLBACK.into())
            } else {
                NormalizedReply::Text(body.to_string())
            };
        }
    };

    // An explicit error field always wins, whatever else is present.
    if let Some(error) = present(doc.get("error")) {
        let detail = match present(error.get("content")) {
            Some(content) => value_text(content),
            None => error.to_string(),
        };
        return NormalizedReply::Failure(format!("Webhook error: {detail}"));
    }

    for field in MESSAGE_FIELDS {
        if let Some(value) = present(doc.get(field)) {
            return NormalizedReply::Text(value_text(value));
        }
    }

    // n8n-style wrapper: the reply nested under `data`.
    if let Some(data) = present(doc.get("data")) {
        if let Value::String(s) = data {
            return NormalizedReply::Text(s.clone());
        }
        if data.is_object() {
            for field in DATA_FIELDS {
                if let Some(value) = present(data.get(field)) {
                    return NormalizedReply::Text(value_text(value));
                }
            }
        }
    }

    NormalizedReply::Text(NO_RESPONSE_FALLBACK.into())
}

/// A field counts only if it exists and is non-null.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// String values are used as-is; anything else keeps its JSON text form.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(s: &str) -> RawReply {
        RawReply::Body(s.to_string())
    }

    #[test]
    fn http_status_fails_without_reading_body() {
        let out = normalize(&RawReply::HttpStatus(502));
        assert_eq!(out, NormalizedReply::Failure("HTTP error! status: 502".into()));
    }

    #[test]
    fn unparsable_text_is_the_message() {
        assert_eq!(normalize(&body("hello")), NormalizedReply::Text("hello".into()));
    }

    #[test]
    fn empty_unparsable_text_falls_back() {
        assert_eq!(
            normalize(&body("")),
            NormalizedReply::Text(NO_RESPONSE_FALLBACK.into())
        );
        assert_eq!(
            normalize(&body("   \n\t")),
            NormalizedReply::Text(NO_RESPONSE_FALLBACK.into())
        );
    }

    #[test]
    fn error_field_wins_over_everything() {
        let out = normalize(&body(
            r#"{"error": {"content": "flow crashed"}, "response": "ignored"}"#,
        ));
        assert_eq!(
            out,
            NormalizedReply::Failure("Webhook error: flow crashed".into())
        );
    }

    #[test]
    fn error_without_content_stringifies() {
        let out = normalize(&body(r#"{"error": {"code": 17}}"#));
        assert_eq!(
            out,
            NormalizedReply::Failure(r#"Webhook error: {"code":17}"#.into())
        );
    }

    #[test]
    fn error_as_plain_string_stringifies() {
        let out = normalize(&body(r#"{"error": "boom"}"#));
        assert_eq!(out, NormalizedReply::Failure(r#"Webhook error: "boom""#.into()));
    }

    #[test]
    fn field_precedence_order() {
        let out = normalize(&body(r#"{"message": "second", "response": "first"}"#));
        assert_eq!(out, NormalizedReply::Text("first".into()));

        let out = normalize(&body(r#"{"text": "fifth... fourth", "output": "third"}"#));
        assert_eq!(out, NormalizedReply::Text("third".into()));

        let out = normalize(&body(r#"{"content": "sixth"}"#));
        assert_eq!(out, NormalizedReply::Text("sixth".into()));
    }

    #[test]
    fn null_fields_are_skipped() {
        let out = normalize(&body(r#"{"response": null, "message": "hi"}"#));
        assert_eq!(out, NormalizedReply::Text("hi".into()));
    }

    #[test]
    fn data_string_used_directly() {
        let out = normalize(&body(r#"{"data": "hi"}"#));
        assert_eq!(out, NormalizedReply::Text("hi".into()));
    }

    #[test]
    fn data_object_probes_nested_fields() {
        let out = normalize(&body(r#"{"data": {"message": "hi"}}"#));
        assert_eq!(out, NormalizedReply::Text("hi".into()));

        let out = normalize(&body(r#"{"data": {"response": "a", "message": "b"}}"#));
        assert_eq!(out, NormalizedReply::Text("a".into()));
    }

    #[test]
    fn data_object_without_known_fields_falls_back() {
        let out = normalize(&body(r#"{"data": {"rows": []}}"#));
        assert_eq!(out, NormalizedReply::Text(NO_RESPONSE_FALLBACK.into()));
    }

    #[test]
    fn empty_object_falls_back() {
        let out = normalize(&body("{}"));
        assert_eq!(out, NormalizedReply::Text(NO_RESPONSE_FALLBACK.into()));
    }

    #[test]
    fn non_object_json_falls_back() {
        assert_eq!(
            normalize(&body("[1, 2, 3]")),
            NormalizedReply::Text(NO_RESPONSE_FALLBACK.into())
        );
        assert_eq!(
            normalize(&body("42")),
            NormalizedReply::Text(NO_RESPONSE_FALLBACK.into())
        );
    }

    #[test]
    fn non_string_values_keep_json_form() {
        let out = normalize(&body(r#"{"response": {"a": 1}}"#));
        assert_eq!(out, NormalizedReply::Text(r#"{"a":1}"#.into()));

        let out = normalize(&body(r#"{"message": 7}"#));
        assert_eq!(out, NormalizedReply::Text("7".into()));
    }

    #[test]
    fn identical_input_identical_outcome() {
        let reply = body(r#"{"output": "stable"}"#);
        assert_eq!(normalize(&reply), normalize(&reply));
    }
}
