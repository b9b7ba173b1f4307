//! Ledger events and the sinks they are published to.

mod event;
mod sink;

pub use event::LedgerEvent;
pub use sink::{BroadcastEventSink, EventLog, EventSink, MultiSink, TracingEventSink};
