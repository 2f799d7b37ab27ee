//! # RTC Peer - media connections over an injected negotiator
//!
//! This crate provides the connection objects a peer-to-peer calling library
//! hands to applications. A [`MediaConnection`](media_connection::MediaConnection)
//! represents one call with a remote peer: it starts negotiation, tracks the
//! local and remote [`MediaStream`](media_stream::MediaStream)s, routes
//! signaling messages and tears the call down.
//!
//! The actual WebRTC work (SDP, ICE, media transport) is done by a
//! [`Negotiator`](negotiator::Negotiator) supplied by the caller. Connections
//! only forward to it, which keeps them independent of any particular peer
//! connection implementation and lets tests substitute a recording negotiator.
//!
//! ## Placing a call
//!
//! ```
//! use rtc_peer::connection::ConnectionInfo;
//! use rtc_peer::connection::options::ConnectionOptionsBuilder;
//! use rtc_peer::event::{ConnectionEvent, EventKind};
//! use rtc_peer::media_connection::MediaConnection;
//! use rtc_peer::media_stream::MediaStream;
//! use rtc_peer::negotiator::{NegotiationOptions, Negotiator};
//!
//! struct PlatformNegotiator;
//!
//! impl Negotiator for PlatformNegotiator {
//!     fn start_connection(
//!         &mut self,
//!         _connection: &ConnectionInfo,
//!         _options: &NegotiationOptions,
//!     ) -> rtc_peer::shared::error::Result<()> {
//!         // create the peer connection, add the local stream, send the offer
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _connection: &ConnectionInfo) {}
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ConnectionOptionsBuilder::new()
//!     .with_stream(MediaStream::new("camera".to_string(), vec![]))
//!     .build();
//!
//! let mut call = MediaConnection::new("remote-peer".to_string(), options, PlatformNegotiator)?;
//! call.on(EventKind::Stream, |event| {
//!     if let ConnectionEvent::Stream(stream) = event {
//!         println!("remote stream {}", stream.stream_id());
//!     }
//! });
//!
//! // invoked by the negotiator side once remote media arrives
//! call.add_stream(MediaStream::new("remote".to_string(), vec![]));
//!
//! call.close();
//! assert!(!call.open());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`connection`] - connection lifecycle shared by every connection kind
//! - [`media_connection`] - audio/video calls
//! - [`negotiator`] - the negotiation capability connections delegate to
//! - [`event`] - synchronous event emitter and connection events
//! - [`message`] - signaling server messages
//! - [`media_stream`] - opaque media stream handles
//! - [`sdp`] - session description and ICE candidate payloads

#![warn(rust_2018_idioms)]

pub use shared;

pub mod connection;
pub mod event;
pub mod media_connection;
pub mod media_stream;
pub mod message;
pub mod negotiator;
pub mod sdp;
