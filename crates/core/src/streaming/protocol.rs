use serde::{Deserialize, Serialize};

use crate::tracking::tracked_object::TrackedObject;

/// Inbound messages, dispatched on their `type` tag.
///
/// `frame_id` is opaque: whatever JSON the client attached is echoed
/// back untouched, and a missing one echoes as null. Tags this build
/// does not know fold into `Unknown`, which earns no reply.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Frame {
        image: String,
        #[serde(default)]
        frame_id: serde_json::Value,
    },
    Ping,
    #[serde(other)]
    Unknown,
}

/// Outbound replies that carry a `type` tag.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamReply {
    TrackingUpdate {
        objects: Vec<TrackedObject>,
        frame_id: serde_json::Value,
        timestamp: String,
        total_detections: usize,
    },
    Pong,
}

/// In-band failure notice. Deliberately tagless: clients recognize it
/// by the `error` key alone.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}

/// Everything a session may write back on the wire.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerMessage {
    Reply(StreamReply),
    Error(ErrorReply),
}

/// Wall-clock timestamp for outbound updates, RFC 3339 formatted.
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_frame_message() {
        let message: ClientMessage =
            serde_json::from_str(r#"{"type":"frame","image":"abc123","frame_id":7}"#).unwrap();

        assert_eq!(
            message,
            ClientMessage::Frame {
                image: "abc123".to_string(),
                frame_id: json!(7),
            }
        );
    }

    #[test]
    fn test_missing_frame_id_defaults_to_null() {
        let message: ClientMessage =
            serde_json::from_str(r#"{"type":"frame","image":"abc123"}"#).unwrap();

        assert_eq!(
            message,
            ClientMessage::Frame {
                image: "abc123".to_string(),
                frame_id: serde_json::Value::Null,
            }
        );
    }

    #[test]
    fn test_frame_id_may_be_any_json() {
        let message: ClientMessage = serde_json::from_str(
            r#"{"type":"frame","image":"abc123","frame_id":{"shard":2,"seq":"a"}}"#,
        )
        .unwrap();

        match message {
            ClientMessage::Frame { frame_id, .. } => {
                assert_eq!(frame_id, json!({"shard": 2, "seq": "a"}));
            }
            other => panic!("expected frame, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_ping() {
        let message: ClientMessage = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
        assert_eq!(message, ClientMessage::Ping);
    }

    #[test]
    fn test_unrecognized_type_folds_into_unknown() {
        let message: ClientMessage =
            serde_json::from_str(r#"{"type":"subscribe","channel":"all"}"#).unwrap();
        assert_eq!(message, ClientMessage::Unknown);
    }

    #[test]
    fn test_extra_fields_are_tolerated() {
        let message: ClientMessage =
            serde_json::from_str(r#"{"type":"ping","debug":true}"#).unwrap();
        assert_eq!(message, ClientMessage::Ping);
    }

    #[test]
    fn test_frame_without_image_is_rejected() {
        let result = serde_json::from_str::<ClientMessage>(r#"{"type":"frame","frame_id":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_pong_wire_shape() {
        let json = serde_json::to_value(&StreamReply::Pong).unwrap();
        assert_eq!(json, json!({"type": "pong"}));
    }

    #[test]
    fn test_tracking_update_wire_shape() {
        let reply = StreamReply::TrackingUpdate {
            objects: Vec::new(),
            frame_id: json!(42),
            timestamp: "2024-05-01T12:00:00+00:00".to_string(),
            total_detections: 0,
        };

        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["type"], "tracking_update");
        assert_eq!(json["frame_id"], 42);
        assert_eq!(json["objects"], json!([]));
        assert_eq!(json["total_detections"], 0);
    }

    #[test]
    fn test_error_reply_has_no_type_tag() {
        let json = serde_json::to_value(&ErrorReply {
            error: "decode failed".to_string(),
        })
        .unwrap();

        assert_eq!(json, json!({"error": "decode failed"}));
    }

    #[test]
    fn test_server_message_adds_no_wrapping() {
        let reply = serde_json::to_string(&ServerMessage::Reply(StreamReply::Pong)).unwrap();
        let error = serde_json::to_string(&ServerMessage::Error(ErrorReply {
            error: "boom".to_string(),
        }))
        .unwrap();

        assert_eq!(reply, r#"{"type":"pong"}"#);
        assert_eq!(error, r#"{"error":"boom"}"#);
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let stamp = timestamp_now();
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
