use std::{fmt, sync::Arc};

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{info, trace};

use crate::LedgerEvent;

/// Destination for [`LedgerEvent`]s.
///
/// Emitting never fails the operation that produced the event.
pub trait EventSink: Send + Sync + fmt::Debug {
    fn emit(&self, event: LedgerEvent);
}

impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    fn emit(&self, event: LedgerEvent) {
        (**self).emit(event)
    }
}

/// Logs every event at INFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: LedgerEvent) {
        info!(kind = event.kind(), ?event, "ledger event");
    }
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<LedgerEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<LedgerEvent> {
        self.events.lock().clone()
    }

    /// Drains the recorded events.
    pub fn take(&self) -> Vec<LedgerEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for EventLog {
    fn emit(&self, event: LedgerEvent) {
        self.events.lock().push(event);
    }
}

/// Fans events out to async subscribers over a broadcast channel.
///
/// Slow subscribers lag and drop old events; having no subscribers at all is
/// not an error.
#[derive(Debug, Clone)]
pub struct BroadcastEventSink {
    tx: broadcast::Sender<LedgerEvent>,
}

impl BroadcastEventSink {
    /// `capacity` is clamped to at least one.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.tx.subscribe()
    }
}

impl EventSink for BroadcastEventSink {
    fn emit(&self, event: LedgerEvent) {
        if self.tx.send(event).is_err() {
            trace!("no event subscribers");
        }
    }
}

/// Forwards each event to every inner sink, in order.
#[derive(Debug, Default)]
pub struct MultiSink {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl MultiSink {
    pub fn new(sinks: Vec<Arc<dyn EventSink>>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: Arc<dyn EventSink>) {
        self.sinks.push(sink);
    }
}

impl EventSink for MultiSink {
    fn emit(&self, event: LedgerEvent) {
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.emit(event.clone());
            }
            last.emit(event);
        }
    }
}
