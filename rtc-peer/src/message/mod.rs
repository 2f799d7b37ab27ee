
use crate::sdp::{RTCIceCandidateInit, RTCSessionDescription};
use serde::{Deserialize, Serialize};
use shared::error::Result;
use std::fmt;

const MESSAGE_TYPE_OFFER_STR: &str = "OFFER";
const MESSAGE_TYPE_ANSWER_STR: &str = "ANSWER";
const MESSAGE_TYPE_CANDIDATE_STR: &str = "CANDIDATE";
const MESSAGE_TYPE_LEAVE_STR: &str = "LEAVE";
const MESSAGE_TYPE_EXPIRE_STR: &str = "EXPIRE";

/// Type tag of a signaling message relayed by the signaling server.
///
/// Tags this crate does not act on are kept verbatim in `Unknown` so that a
/// queued message survives a serialize/deserialize round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServerMessageType {
    Offer,
    Answer,
    Candidate,
    Leave,
    Expire,
    Unknown(String),
}

impl From<&str> for ServerMessageType {
    fn from(raw: &str) -> Self {
        match raw {
            MESSAGE_TYPE_OFFER_STR => ServerMessageType::Offer,
            MESSAGE_TYPE_ANSWER_STR => ServerMessageType::Answer,
            MESSAGE_TYPE_CANDIDATE_STR => ServerMessageType::Candidate,
            MESSAGE_TYPE_LEAVE_STR => ServerMessageType::Leave,
            MESSAGE_TYPE_EXPIRE_STR => ServerMessageType::Expire,
            _ => ServerMessageType::Unknown(raw.to_owned()),
        }
    }
}

impl From<String> for ServerMessageType {
    fn from(raw: String) -> Self {
        ServerMessageType::from(raw.as_str())
    }
}

impl From<ServerMessageType> for String {
    fn from(message_type: ServerMessageType) -> Self {
        message_type.to_string()
    }
}

impl fmt::Display for ServerMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerMessageType::Offer => write!(f, "{MESSAGE_TYPE_OFFER_STR}"),
            ServerMessageType::Answer => write!(f, "{MESSAGE_TYPE_ANSWER_STR}"),
            ServerMessageType::Candidate => write!(f, "{MESSAGE_TYPE_CANDIDATE_STR}"),
            ServerMessageType::Leave => write!(f, "{MESSAGE_TYPE_LEAVE_STR}"),
            ServerMessageType::Expire => write!(f, "{MESSAGE_TYPE_EXPIRE_STR}"),
            ServerMessageType::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerMessagePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdp: Option<RTCSessionDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<RTCIceCandidateInit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A message from the signaling server addressed to one connection.
///
/// Messages that arrive before a connection is able to negotiate are queued
/// and handed to the connection in its options, see
/// [`ConnectionOptions::queued_messages`](crate::connection::options::ConnectionOptions::queued_messages).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerMessage {
    #[serde(rename = "type")]
    pub message_type: ServerMessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default)]
    pub payload: ServerMessagePayload,
}

impl ServerMessage {
    pub fn new(message_type: ServerMessageType, src: Option<String>) -> Self {
        Self {
            message_type,
            src,
            payload: ServerMessagePayload::default(),
        }
    }

    pub fn offer(src: String, connection_id: String, offer: RTCSessionDescription) -> Self {
        Self {
            message_type: ServerMessageType::Offer,
            src: Some(src),
            payload: ServerMessagePayload {
                connection_id: Some(connection_id),
                sdp: Some(offer),
                ..Default::default()
            },
        }
    }

    pub fn answer(src: String, connection_id: String, answer: RTCSessionDescription) -> Self {
        Self {
            message_type: ServerMessageType::Answer,
            src: Some(src),
            payload: ServerMessagePayload {
                connection_id: Some(connection_id),
                sdp: Some(answer),
                ..Default::default()
            },
        }
    }

    pub fn candidate(src: String, connection_id: String, candidate: RTCIceCandidateInit) -> Self {
        Self {
            message_type: ServerMessageType::Candidate,
            src: Some(src),
            payload: ServerMessagePayload {
                connection_id: Some(connection_id),
                candidate: Some(candidate),
                ..Default::default()
            },
        }
    }

    /// Parses a message from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serializes the message to its JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn connection_id(&self) -> Option<&str> {
        self.payload.connection_id.as_deref()
    }
}
