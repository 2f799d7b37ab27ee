
pub mod options;

use crate::connection::options::ConnectionOptions;
use crate::event::{ConnectionEvent, EventEmitter, EventKind, ListenerId};
use crate::media_stream::MediaStream;
use crate::message::{ServerMessage, ServerMessageType};
use crate::negotiator::{NegotiationOptions, Negotiator};
use crate::sdp::RTCSessionDescription;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use shared::error::{Error, Result, flatten_errs};
use shared::util::math_rand_alpha_number;
use std::fmt;

const ID_SUFFIX_LEN: usize = 16;

pub type ConnectionId = String;

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionType {
    #[default]
    #[serde(rename = "unspecified")]
    Unspecified,
    #[serde(rename = "media")]
    Media,
}

impl ConnectionType {
    /// Prefix of generated connection ids.
    pub fn id_prefix(&self) -> &'static str {
        match *self {
            ConnectionType::Media => "mc_",
            ConnectionType::Unspecified => "c_",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            ConnectionType::Media => "media",
            ConnectionType::Unspecified => "unspecified",
        };
        write!(f, "{s}")
    }
}

/// Identity of a connection as seen by its negotiator.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ConnectionInfo {
    pub id: ConnectionId,
    /// Peer id of the remote side.
    pub remote_id: String,
    pub connection_type: ConnectionType,
    pub metadata: Option<serde_json::Value>,
}

/// Lifecycle wrapper shared by every connection kind.
///
/// A `Connection` owns its [`Negotiator`] and forwards negotiation start,
/// signaling messages and teardown to it. It also owns the event emitter
/// through which `stream`, `close` and `error` events reach the application.
pub struct Connection<N: Negotiator> {
    info: ConnectionInfo,
    options: ConnectionOptions,
    open: bool,
    closed: bool,

    negotiator: N,
    emitter: EventEmitter<ConnectionEvent>,
}

impl<N: Negotiator> Connection<N> {
    /// Creates a connection to `remote_id`. Negotiation is not started; see
    /// [`Connection::start_negotiation`].
    pub fn new(
        remote_id: String,
        connection_type: ConnectionType,
        options: ConnectionOptions,
        negotiator: N,
    ) -> Self {
        let id = options.connection_id.clone().unwrap_or_else(|| {
            format!(
                "{}{}",
                connection_type.id_prefix(),
                math_rand_alpha_number(ID_SUFFIX_LEN)
            )
        });

        Self {
            info: ConnectionInfo {
                id,
                remote_id,
                connection_type,
                metadata: options.metadata.clone(),
            },
            options,
            open: false,
            closed: false,

            negotiator,
            emitter: EventEmitter::new(),
        }
    }

    pub fn id(&self) -> &ConnectionId {
        &self.info.id
    }

    pub fn remote_id(&self) -> &str {
        &self.info.remote_id
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.info.connection_type
    }

    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.info.metadata.as_ref()
    }

    /// The options this connection was created with, unchanged.
    pub fn options(&self) -> &ConnectionOptions {
        &self.options
    }

    pub fn info(&self) -> &ConnectionInfo {
        &self.info
    }

    pub fn open(&self) -> bool {
        self.open
    }

    /// Whether [`Connection::close`] has been called. A closed connection
    /// never opens again.
    pub fn closed(&self) -> bool {
        self.closed
    }

    /// Has no effect once the connection is closed.
    pub fn set_open(&mut self, open: bool) {
        self.open = open && !self.closed;
    }

    pub fn negotiator(&self) -> &N {
        &self.negotiator
    }

    pub fn negotiator_mut(&mut self) -> &mut N {
        &mut self.negotiator
    }

    /// Asks the negotiator to begin negotiating. Negotiator errors are
    /// returned as is and leave the connection not open.
    pub fn start_negotiation(
        &mut self,
        originator: bool,
        stream: Option<MediaStream>,
        offer: Option<RTCSessionDescription>,
    ) -> Result<()> {
        if self.closed {
            return Err(Error::ErrConnectionClosed);
        }

        let options = NegotiationOptions {
            connection_type: self.info.connection_type,
            originator,
            stream,
            offer,
        };

        debug!(
            "starting {} connection {} to {} (originator: {})",
            self.info.connection_type, self.info.id, self.info.remote_id, originator
        );
        self.negotiator.start_connection(&self.info, &options)?;
        self.open = true;

        Ok(())
    }

    /// Routes a signaling message addressed to this connection.
    pub fn handle_message(&mut self, message: &ServerMessage) -> Result<()> {
        if self.closed {
            debug!(
                "connection {} is closed, dropping {} message",
                self.info.id, message.message_type
            );
            return Err(Error::ErrConnectionClosed);
        }

        match message.message_type {
            ServerMessageType::Answer => {
                let sdp = message.payload.sdp.as_ref().ok_or(Error::ErrMissingSdp)?;
                trace!("connection {} got {} from {:?}", self.info.id, sdp.sdp_type, message.src);
                self.negotiator.handle_sdp(&self.info, sdp)?;
                self.open = true;
            }
            ServerMessageType::Candidate => {
                let candidate = message
                    .payload
                    .candidate
                    .as_ref()
                    .ok_or(Error::ErrMissingCandidate)?;
                trace!("connection {} got candidate {}", self.info.id, candidate.candidate);
                self.negotiator.handle_candidate(&self.info, candidate)?;
            }
            _ => {
                warn!(
                    "Unrecognized message type:{} from peer:{}",
                    message.message_type, self.info.remote_id
                );
            }
        }

        Ok(())
    }

    /// Feeds every queued message from the options through
    /// [`Connection::handle_message`]. The options keep their copy.
    ///
    /// A message that fails is reported as an `error` event and replay moves
    /// on; the failures are returned together once every message was tried.
    pub(crate) fn replay_queued_messages(&mut self) -> Result<()> {
        let messages = self.options.queued_messages.clone();
        let mut errs = vec![];
        for message in &messages {
            if let Err(err) = self.handle_message(message) {
                warn!(
                    "failed to apply queued {} message on connection {}: {}",
                    message.message_type, self.info.id, err
                );
                self.emitter.emit(ConnectionEvent::Error(err.to_string()));
                errs.push(err);
            }
        }

        flatten_errs(errs)
    }

    /// Closes the connection for good: the negotiator cleans up, `open`
    /// turns false and a `close` event is emitted. A connection that is not
    /// open is only marked closed.
    pub fn close(&mut self) {
        self.closed = true;
        if !self.open {
            trace!("connection {} is not open, ignoring close", self.info.id);
            return;
        }

        debug!("closing connection {}", self.info.id);
        self.negotiator.cleanup(&self.info);
        self.open = false;
        self.emitter.emit(ConnectionEvent::Close);
    }

    pub fn on<F>(&mut self, kind: EventKind, handler: F) -> ListenerId
    where
        F: FnMut(&ConnectionEvent) + 'static,
    {
        self.emitter.on(kind, handler)
    }

    pub fn once<F>(&mut self, kind: EventKind, handler: F) -> ListenerId
    where
        F: FnMut(&ConnectionEvent) + 'static,
    {
        self.emitter.once(kind, handler)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }

    pub fn emit(&mut self, event: ConnectionEvent) -> bool {
        self.emitter.emit(event)
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.emitter.listener_count(kind)
    }
}
