use rtc_peer::connection::ConnectionInfo;
use rtc_peer::connection::options::{ConnectionOptions, ConnectionOptionsBuilder};
use rtc_peer::event::{ConnectionEvent, EventKind};
use rtc_peer::media_connection::MediaConnection;
use rtc_peer::media_stream::MediaStream;
use rtc_peer::message::{ServerMessage, ServerMessageType};
use rtc_peer::negotiator::{NegotiationOptions, Negotiator};
use shared::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    StartConnection(String),
    Cleanup(ConnectionInfo),
}

/// Negotiator handed over as a trait object; calls land in a log shared with
/// the test.
struct SharedLogNegotiator {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl Negotiator for SharedLogNegotiator {
    fn start_connection(
        &mut self,
        connection: &ConnectionInfo,
        _options: &NegotiationOptions,
    ) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::StartConnection(connection.id.clone()));
        Ok(())
    }

    fn cleanup(&mut self, connection: &ConnectionInfo) {
        self.calls
            .borrow_mut()
            .push(Call::Cleanup(connection.clone()));
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_media_connection_lifecycle() -> Result<()> {
    init_logger();

    let calls = Rc::new(RefCell::new(vec![]));
    let negotiator: Box<dyn Negotiator> = Box::new(SharedLogNegotiator {
        calls: Rc::clone(&calls),
    });

    let queued = vec![ServerMessage::new(ServerMessageType::from("message"), None)];
    let mut mc = MediaConnection::new(
        "remote-peer".to_owned(),
        ConnectionOptionsBuilder::new()
            .with_stream(MediaStream::new("local".to_owned(), vec![]))
            .with_queued_messages(queued.clone())
            .build(),
        negotiator,
    )?;

    assert_eq!(*calls.borrow(), vec![Call::StartConnection(mc.id().clone())]);
    assert_eq!(mc.options().queued_messages, queued);

    let events = Rc::new(RefCell::new(vec![]));
    for kind in [EventKind::Stream, EventKind::Close] {
        let sink = Rc::clone(&events);
        mc.on(kind, move |event| sink.borrow_mut().push(event.clone()));
    }

    let fake_stream = MediaStream::new("fakeStream".to_owned(), vec![]);
    mc.add_stream(fake_stream.clone());
    assert_eq!(mc.remote_stream(), Some(&fake_stream));

    mc.set_open(true);
    mc.close();
    assert!(!mc.open());

    assert_eq!(
        *calls.borrow(),
        vec![
            Call::StartConnection(mc.id().clone()),
            Call::Cleanup(mc.info().clone()),
        ]
    );
    assert_eq!(
        *events.borrow(),
        vec![ConnectionEvent::Stream(fake_stream), ConnectionEvent::Close]
    );

    Ok(())
}

#[test]
fn test_incoming_call_from_signaling_json() -> Result<()> {
    init_logger();

    let options: ConnectionOptions = serde_json::from_str(
        r#"{
            "connectionId": "mc_incoming",
            "metadata": { "caller": "alice" },
            "_payload": { "sdp": { "type": "offer", "sdp": "v=0" } },
            "_queuedMessages": [
                { "type": "CANDIDATE", "payload": { "candidate": { "candidate": "candidate:1 1 udp 1 10.0.0.1 5000 typ host" } } }
            ]
        }"#,
    )?;

    let calls = Rc::new(RefCell::new(vec![]));
    let mut mc = MediaConnection::new(
        "alice".to_owned(),
        options,
        SharedLogNegotiator {
            calls: Rc::clone(&calls),
        },
    )?;
    assert!(calls.borrow().is_empty());
    assert!(!mc.open());

    mc.answer(MediaStream::new("local".to_owned(), vec![]))?;

    assert!(mc.open());
    assert_eq!(
        *calls.borrow(),
        vec![Call::StartConnection("mc_incoming".to_owned())]
    );
    assert_eq!(
        mc.metadata(),
        Some(&serde_json::json!({ "caller": "alice" }))
    );

    Ok(())
}
