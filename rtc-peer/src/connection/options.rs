use crate::media_stream::MediaStream;
use crate::message::{ServerMessage, ServerMessagePayload};
use serde::{Deserialize, Serialize};

/// Options a connection is created with.
///
/// Kept verbatim by the connection and readable through
/// [`Connection::options`](super::Connection::options). The serde names match
/// the fields a signaling layer hands over for an incoming call.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionOptions {
    /// Local media to send. A media connection created with a stream places
    /// the call immediately.
    #[serde(rename = "_stream", default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<MediaStream>,

    /// Signaling messages that arrived before this connection existed, in
    /// arrival order.
    #[serde(rename = "_queuedMessages", default)]
    pub queued_messages: Vec<ServerMessage>,

    /// Overrides the generated connection id, e.g. the id carried by a
    /// remote offer.
    #[serde(
        rename = "connectionId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub connection_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// Payload of the remote OFFER this connection answers.
    #[serde(rename = "_payload", default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ServerMessagePayload>,
}

#[derive(Default)]
pub struct ConnectionOptionsBuilder {
    stream: Option<MediaStream>,
    queued_messages: Vec<ServerMessage>,
    connection_id: Option<String>,
    metadata: Option<serde_json::Value>,
    payload: Option<ServerMessagePayload>,
}

impl ConnectionOptionsBuilder {
    pub fn new() -> Self {
        ConnectionOptionsBuilder::default()
    }

    pub fn with_stream(mut self, stream: MediaStream) -> Self {
        self.stream = Some(stream);
        self
    }

    pub fn with_queued_messages(mut self, queued_messages: Vec<ServerMessage>) -> Self {
        self.queued_messages = queued_messages;
        self
    }

    pub fn with_connection_id(mut self, connection_id: String) -> Self {
        self.connection_id = Some(connection_id);
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_payload(mut self, payload: ServerMessagePayload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn build(self) -> ConnectionOptions {
        ConnectionOptions {
            stream: self.stream,
            queued_messages: self.queued_messages,
            connection_id: self.connection_id,
            metadata: self.metadata,
            payload: self.payload,
        }
    }
}
