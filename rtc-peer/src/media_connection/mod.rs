
use crate::connection::options::ConnectionOptions;
use crate::connection::{Connection, ConnectionId, ConnectionInfo, ConnectionType};
use crate::event::{ConnectionEvent, EventKind, ListenerId};
use crate::media_stream::MediaStream;
use crate::message::ServerMessage;
use crate::negotiator::Negotiator;
use log::{debug, warn};
use shared::error::{Error, Result};

/// A call carrying audio/video between this peer and a remote peer.
///
/// When created with a local stream in its options the call is placed
/// right away: the negotiator is started as originator and any queued
/// signaling messages are applied. Without a local stream the connection
/// represents an incoming call that becomes active on [`MediaConnection::answer`].
///
/// Remote media arrives through [`MediaConnection::add_stream`], which the
/// negotiator side invokes; listeners registered for [`EventKind::Stream`]
/// receive it synchronously.
pub struct MediaConnection<N: Negotiator> {
    connection: Connection<N>,
    local_stream: Option<MediaStream>,
    remote_stream: Option<MediaStream>,
}

impl<N: Negotiator> MediaConnection<N> {
    pub fn new(remote_id: String, options: ConnectionOptions, negotiator: N) -> Result<Self> {
        let local_stream = options.stream.clone();
        let mut media_connection = Self {
            connection: Connection::new(remote_id, ConnectionType::Media, options, negotiator),
            local_stream: None,
            remote_stream: None,
        };

        if let Some(stream) = local_stream {
            media_connection
                .connection
                .start_negotiation(true, Some(stream.clone()), None)?;
            media_connection.local_stream = Some(stream);
            if let Err(err) = media_connection.connection.replay_queued_messages() {
                media_connection.connection.close();
                return Err(err);
            }
        }

        Ok(media_connection)
    }

    /// Answers an incoming call with `stream` as local media.
    ///
    /// A connection that already has local media was either placed by this
    /// side or answered before; the call is then left untouched. Queued
    /// messages that fail to apply are returned as an error, the call stays
    /// open.
    pub fn answer(&mut self, stream: MediaStream) -> Result<()> {
        if self.local_stream.is_some() {
            warn!(
                "Local stream already exists on MediaConnection {}. Are you answering a call twice?",
                self.connection.id()
            );
            return Ok(());
        }

        let offer = self
            .connection
            .options()
            .payload
            .as_ref()
            .and_then(|payload| payload.sdp.clone())
            .ok_or(Error::ErrMissingOffer)?;

        self.connection
            .start_negotiation(false, Some(stream.clone()), Some(offer))?;
        self.local_stream = Some(stream);
        self.connection.replay_queued_messages()
    }

    /// Attaches the remote peer's stream and emits a `stream` event carrying
    /// it. Each call replaces the previous stream and emits again.
    pub fn add_stream(&mut self, remote_stream: MediaStream) {
        debug!(
            "connection {} received remote stream {}",
            self.connection.id(),
            remote_stream.stream_id()
        );
        if !self.connection.open() {
            debug!("connection {} is not open", self.connection.id());
        }

        self.remote_stream = Some(remote_stream.clone());
        self.connection.emit(ConnectionEvent::Stream(remote_stream));
    }

    pub fn local_stream(&self) -> Option<&MediaStream> {
        self.local_stream.as_ref()
    }

    pub fn remote_stream(&self) -> Option<&MediaStream> {
        self.remote_stream.as_ref()
    }

    pub fn connection(&self) -> &Connection<N> {
        &self.connection
    }

    pub fn id(&self) -> &ConnectionId {
        self.connection.id()
    }

    pub fn remote_id(&self) -> &str {
        self.connection.remote_id()
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.connection.connection_type()
    }

    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.connection.metadata()
    }

    pub fn options(&self) -> &ConnectionOptions {
        self.connection.options()
    }

    pub fn info(&self) -> &ConnectionInfo {
        self.connection.info()
    }

    pub fn open(&self) -> bool {
        self.connection.open()
    }

    pub fn closed(&self) -> bool {
        self.connection.closed()
    }

    pub fn set_open(&mut self, open: bool) {
        self.connection.set_open(open);
    }

    pub fn negotiator(&self) -> &N {
        self.connection.negotiator()
    }

    pub fn negotiator_mut(&mut self) -> &mut N {
        self.connection.negotiator_mut()
    }

    pub fn handle_message(&mut self, message: &ServerMessage) -> Result<()> {
        self.connection.handle_message(message)
    }

    pub fn close(&mut self) {
        self.connection.close();
    }

    pub fn on<F>(&mut self, kind: EventKind, handler: F) -> ListenerId
    where
        F: FnMut(&ConnectionEvent) + 'static,
    {
        self.connection.on(kind, handler)
    }

    pub fn once<F>(&mut self, kind: EventKind, handler: F) -> ListenerId
    where
        F: FnMut(&ConnectionEvent) + 'static,
    {
        self.connection.once(kind, handler)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.connection.off(id)
    }

    pub fn emit(&mut self, event: ConnectionEvent) -> bool {
        self.connection.emit(event)
    }
}
