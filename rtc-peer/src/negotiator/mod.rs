#[cfg(test)]
pub(crate) mod mock;

use crate::connection::{ConnectionInfo, ConnectionType};
use crate::media_stream::MediaStream;
use crate::sdp::{RTCIceCandidateInit, RTCSessionDescription};
use shared::error::Result;

/// What a connection asks its negotiator to set up.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct NegotiationOptions {
    pub connection_type: ConnectionType,
    /// true when this side places the call and creates the offer.
    pub originator: bool,
    pub stream: Option<MediaStream>,
    /// Remote offer to answer, only set when `originator` is false.
    pub offer: Option<RTCSessionDescription>,
}

/// Performs the actual peer negotiation on behalf of a connection.
///
/// Connections never touch SDP, ICE or media transport themselves; they
/// forward lifecycle calls here. Implementations typically drive a platform
/// peer connection and report remote streams back through
/// [`MediaConnection::add_stream`](crate::media_connection::MediaConnection::add_stream).
pub trait Negotiator {
    /// Begins negotiation for `connection`. Called once per negotiation start.
    fn start_connection(
        &mut self,
        connection: &ConnectionInfo,
        options: &NegotiationOptions,
    ) -> Result<()>;

    /// Applies a remote session description relayed by the signaling server.
    fn handle_sdp(
        &mut self,
        _connection: &ConnectionInfo,
        _description: &RTCSessionDescription,
    ) -> Result<()> {
        Ok(())
    }

    /// Applies a remote ICE candidate relayed by the signaling server.
    fn handle_candidate(
        &mut self,
        _connection: &ConnectionInfo,
        _candidate: &RTCIceCandidateInit,
    ) -> Result<()> {
        Ok(())
    }

    /// Tears down whatever `start_connection` set up for `connection`.
    fn cleanup(&mut self, connection: &ConnectionInfo);
}

impl<N: Negotiator + ?Sized> Negotiator for Box<N> {
    fn start_connection(
        &mut self,
        connection: &ConnectionInfo,
        options: &NegotiationOptions,
    ) -> Result<()> {
        (**self).start_connection(connection, options)
    }

    fn handle_sdp(
        &mut self,
        connection: &ConnectionInfo,
        description: &RTCSessionDescription,
    ) -> Result<()> {
        (**self).handle_sdp(connection, description)
    }

    fn handle_candidate(
        &mut self,
        connection: &ConnectionInfo,
        candidate: &RTCIceCandidateInit,
    ) -> Result<()> {
        (**self).handle_candidate(connection, candidate)
    }

    fn cleanup(&mut self, connection: &ConnectionInfo) {
        (**self).cleanup(connection)
    }
}
