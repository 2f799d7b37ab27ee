
use crate::media_stream::MediaStream;
use std::fmt;

/// Anything an [`EventEmitter`] can deliver. Listeners subscribe by kind.
pub trait Event {
    type Kind: Copy + PartialEq + fmt::Display;

    fn kind(&self) -> Self::Kind;
}

/// Names of the events a connection raises.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Stream,
    Close,
    Error,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            EventKind::Stream => "stream",
            EventKind::Close => "close",
            EventKind::Error => "error",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    /// A remote stream was attached to a media connection.
    Stream(MediaStream),
    Close,
    /// A queued signaling message could not be applied.
    Error(String),
}

impl Event for ConnectionEvent {
    type Kind = EventKind;

    fn kind(&self) -> EventKind {
        match self {
            ConnectionEvent::Stream(_) => EventKind::Stream,
            ConnectionEvent::Close => EventKind::Close,
            ConnectionEvent::Error(_) => EventKind::Error,
        }
    }
}

/// Handle returned by [`EventEmitter::on`], used to unsubscribe.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Listener<E: Event> {
    id: ListenerId,
    kind: E::Kind,
    once: bool,
    handler: Box<dyn FnMut(&E)>,
}

/// Synchronous publish/subscribe dispatcher owned by a connection.
///
/// `emit` runs every matching listener, in registration order, before it
/// returns.
pub struct EventEmitter<E: Event> {
    listeners: Vec<Listener<E>>,
    next_id: u64,
}

impl<E: Event> Default for EventEmitter<E> {
    fn default() -> Self {
        Self {
            listeners: vec![],
            next_id: 0,
        }
    }
}

impl<E: Event> fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<E: Event> EventEmitter<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every future event of `kind`.
    pub fn on<F>(&mut self, kind: E::Kind, handler: F) -> ListenerId
    where
        F: FnMut(&E) + 'static,
    {
        self.add_listener(kind, false, Box::new(handler))
    }

    /// Registers `handler` for the next event of `kind` only.
    pub fn once<F>(&mut self, kind: E::Kind, handler: F) -> ListenerId
    where
        F: FnMut(&E) + 'static,
    {
        self.add_listener(kind, true, Box::new(handler))
    }

    /// Removes a listener, returning whether it was still registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        self.listeners.len() != before
    }

    pub fn remove_all_listeners(&mut self, kind: E::Kind) {
        self.listeners.retain(|listener| listener.kind != kind);
    }

    pub fn listener_count(&self, kind: E::Kind) -> usize {
        self.listeners
            .iter()
            .filter(|listener| listener.kind == kind)
            .count()
    }

    /// Delivers `event` to its listeners. Returns false if nobody listened.
    pub fn emit(&mut self, event: E) -> bool {
        let kind = event.kind();
        let mut delivered = false;

        for listener in self.listeners.iter_mut().filter(|l| l.kind == kind) {
            (listener.handler)(&event);
            delivered = true;
        }

        if delivered {
            self.listeners
                .retain(|listener| !(listener.once && listener.kind == kind));
        }

        log::trace!("emitted {kind} event, delivered: {delivered}");
        delivered
    }

    fn add_listener(
        &mut self,
        kind: E::Kind,
        once: bool,
        handler: Box<dyn FnMut(&E)>,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            kind,
            once,
            handler,
        });
        id
    }
}
